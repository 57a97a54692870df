use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which editor tab is active
///
/// The variant names are part of the share link format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Pattern + rewrite inputs
    Patch,
    /// YAML rule editor
    Config,
}

#[allow(clippy::derivable_impls)]
impl Default for Mode {
    fn default() -> Self {
        Mode::Patch
    }
}

impl Mode {
    /// All tabs, in display order
    pub const ALL: [Mode; 2] = [Mode::Patch, Mode::Config];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Patch => "Patch",
            Mode::Config => "Config",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Patch" => Ok(Mode::Patch),
            "Config" => Ok(Mode::Config),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_variant_spelling() {
        assert_eq!(serde_json::to_string(&Mode::Patch).unwrap(), "\"Patch\"");
        assert_eq!(serde_json::to_string(&Mode::Config).unwrap(), "\"Config\"");
        let mode: Mode = serde_json::from_str("\"Config\"").unwrap();
        assert_eq!(mode, Mode::Config);
    }

    #[test]
    fn serde_rejects_other_spellings() {
        assert!(serde_json::from_str::<Mode>("\"config\"").is_err());
        assert!(serde_json::from_str::<Mode>("\"Diff\"").is_err());
        assert!(serde_json::from_str::<Mode>("1").is_err());
    }

    #[test]
    fn from_str_matches_display() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("patch".parse::<Mode>(), Err(UnknownMode("patch".into())));
    }

    #[test]
    fn default_is_patch() {
        assert_eq!(Mode::default(), Mode::Patch);
        assert_eq!(Mode::ALL[0], Mode::Patch);
    }
}
