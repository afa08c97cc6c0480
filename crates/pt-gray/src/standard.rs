use core::fmt;
use core::str::FromStr;

/// Luma weighting standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GrayscaleStandard {
    /// ITU-R BT.601: `0.299 R + 0.587 G + 0.114 B`.
    #[default]
    Bt601,
    /// ITU-R BT.709: `0.2126 R + 0.7152 G + 0.0722 B`.
    Bt709,
    /// SMPTE 240M: `0.212 R + 0.701 G + 0.087 B`.
    Smpte240m,
}

impl GrayscaleStandard {
    pub const ALL: [Self; 3] = [Self::Bt601, Self::Bt709, Self::Smpte240m];

    /// Red, green and blue weights.
    pub const fn weights(self) -> [f64; 3] {
        match self {
            Self::Bt601 => [0.299, 0.587, 0.114],
            Self::Bt709 => [0.2126, 0.7152, 0.0722],
            Self::Smpte240m => [0.212, 0.701, 0.087],
        }
    }

    #[inline]
    pub fn luma(self, r: u8, g: u8, b: u8) -> u8 {
        let [wr, wg, wb] = self.weights();
        let l = wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b);
        l.round() as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bt601 => "bt601",
            Self::Bt709 => "bt709",
            Self::Smpte240m => "smpte240m",
        }
    }
}

impl fmt::Display for GrayscaleStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrayscaleStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "bt601" | "itubt601" => Ok(Self::Bt601),
            "bt709" | "itubt709" => Ok(Self::Bt709),
            "smpte240m" => Ok(Self::Smpte240m),
            _ => Err(format!(
                "unknown grayscale standard '{s}' (expected bt601, bt709 or smpte240m)"
            )),
        }
    }
}
