use crate::index::coordinates_valid;

/// How a neighborhood tap that falls outside the image is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// Out-of-bounds taps are dropped and the remaining weights are used as-is.
    #[default]
    Skip,
    /// Out-of-bounds taps are dropped and the sum is divided by the in-bounds
    /// weight mass.
    Renormalize,
    /// Out-of-bounds taps read the nearest edge sample.
    Clamp,
    /// Out-of-bounds taps mirror around the edge sample without repeating it.
    Reflect101,
}

impl EdgeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Renormalize => "renormalize",
            Self::Clamp => "clamp",
            Self::Reflect101 => "reflect101",
        }
    }
}

impl core::fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for EdgeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "renormalize" => Ok(Self::Renormalize),
            "clamp" => Ok(Self::Clamp),
            "reflect101" | "reflect-101" => Ok(Self::Reflect101),
            other => Err(format!(
                "unknown edge mode '{other}' (expected skip, renormalize, clamp or reflect101)"
            )),
        }
    }
}

/// Maps a possibly out-of-range coordinate onto `[0, len)`.
///
/// Returns `None` when the tap should not contribute at all.
pub fn map_index(i: isize, len: usize, mode: EdgeMode) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match mode {
        EdgeMode::Skip | EdgeMode::Renormalize => {
            coordinates_valid(i, 0, len, 1).then_some(i as usize)
        }
        EdgeMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some((i as usize).min(len - 1))
            }
        }
        EdgeMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                Some(r)
            } else {
                Some((2 * len - 2) - r)
            }
        }
    }
}
