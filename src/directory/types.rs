//! Directory data types
//!
//! Records as they arrive from the remote source, and the per-gender tally
//! derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One teacher entry, exactly as served by the remote source.
///
/// Records are never created locally; the wire names are the source's
/// Spanish field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRecord {
    /// Unique identifier, used as the rendering key
    #[serde(rename = "claveiss")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Raw category value. Anything other than `M`/`F` is kept verbatim.
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl TeacherRecord {
    /// Create a new record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sex: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sex: sex.into(),
            phone: phone.into(),
        }
    }

    /// The category this record counts towards, if any
    pub fn gender(&self) -> Option<Gender> {
        Gender::from_code(&self.sex)
    }
}

/// The two categories the tally knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All categories, in chart order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Parse the wire code. Matching is exact: `"m"` or `" M"` are not male.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Count of records per known category.
///
/// Serialized as `{"M": n, "F": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderTally {
    #[serde(rename = "M")]
    pub male: u64,
    #[serde(rename = "F")]
    pub female: u64,
}

impl GenderTally {
    /// Count for one category
    pub fn get(&self, gender: Gender) -> u64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    /// Records counted in any category
    pub fn total(&self) -> u64 {
        self.male + self.female
    }

    /// Largest single count
    pub fn max(&self) -> u64 {
        self.male.max(self.female)
    }
}
