use crate::errors::ParseImportanceError;
use std::fmt;
use std::str::FromStr;

/// Priority classification of a to-do item.
///
/// Carries two independent raw encodings: a lowercase string token
/// (used by the serialized formats) and a small integer level (kept as
/// a secondary constructor for compatibility with older payloads).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Importance {
    Unimportant,
    #[default]
    Normal,
    Important,
}

impl Importance {
    /// The lowercase token used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Unimportant => "unimportant",
            Importance::Normal => "normal",
            Importance::Important => "important",
        }
    }

    /// The integer level (0 = unimportant, 1 = normal, 2 = important).
    pub fn as_int(&self) -> u8 {
        match self {
            Importance::Unimportant => 0,
            Importance::Normal => 1,
            Importance::Important => 2,
        }
    }
}

impl FromStr for Importance {
    type Err = ParseImportanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unimportant" => Ok(Importance::Unimportant),
            "normal" => Ok(Importance::Normal),
            "important" => Ok(Importance::Important),
            other => Err(ParseImportanceError::UnknownToken(other.to_string())),
        }
    }
}

impl TryFrom<u8> for Importance {
    type Error = ParseImportanceError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Importance::Unimportant),
            1 => Ok(Importance::Normal),
            2 => Ok(Importance::Important),
            other => Err(ParseImportanceError::LevelOutOfRange(other)),
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
