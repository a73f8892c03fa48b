use std::collections::HashMap;
use std::fmt::{self, Display};

///
/// Genome struct, the packed genotype string of one profile.
///
/// Every marker's two-character call sits at a fixed byte offset of `values`,
/// derived from the marker's row in the marker location resource.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Genome {
    pub profile_id: String,
    pub values: String,
}

impl Genome {
    pub fn new<S: Into<String>, V: Into<String>>(profile_id: S, values: V) -> Self {
        Genome {
            profile_id: profile_id.into(),
            values: values.into(),
        }
    }

    /// Length of the packed string in bytes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genome for profile {} ({} bytes)",
            self.profile_id,
            self.values.len()
        )
    }
}

///
/// Genotype struct, marker calls of one profile keyed by marker identifier.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Genotype {
    pub profile_id: String,
    pub values: HashMap<String, String>,
}

impl Genotype {
    pub fn new<S: Into<String>>(profile_id: S, values: HashMap<String, String>) -> Self {
        Genotype {
            profile_id: profile_id.into(),
            values,
        }
    }

    ///
    /// Get the call for a marker, if the profile has one
    ///
    pub fn value(&self, marker_id: &str) -> Option<&str> {
        self.values.get(marker_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
