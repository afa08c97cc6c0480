use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    EmptyImage,
    ChannelMismatch { expected: usize, actual: usize },
    InvalidKernelSize(usize),
    InvalidSigma(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::EmptyImage => write!(f, "image has a zero dimension"),
            Self::ChannelMismatch { expected, actual } => {
                write!(f, "channel mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidKernelSize(size) => {
                write!(f, "invalid kernel size {size}: must be odd")
            }
            Self::InvalidSigma(sigma) => {
                write!(f, "invalid sigma {sigma}: must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for Error {}
