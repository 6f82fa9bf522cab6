use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Biological sex as recorded on the exam form.
///
/// Several reference ranges branch on it, so it is threaded through the
/// classifier as a parameter instead of selecting per-sex functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(InputError::UnknownSex(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A pair of values selected by [`Sex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexDependent<T> {
    pub male: T,
    pub female: T,
}

impl<T: Copy> SexDependent<T> {
    pub const fn new(male: T, female: T) -> Self {
        Self { male, female }
    }

    /// The same value regardless of sex.
    pub const fn same(value: T) -> Self {
        Self {
            male: value,
            female: value,
        }
    }

    pub fn pick(&self, sex: Sex) -> T {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}
