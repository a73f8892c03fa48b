use std::collections::BTreeSet;

use crate::errors::{PersonalGenomeError, Result};

/// Disease risk report of a profile.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Risk {
    pub profile_id: String,
    pub report_id: String,
    pub description: String,
    pub risk: f64,
    pub population_risk: f64,
}

/// Carrier status report of a profile.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Carrier {
    pub profile_id: String,
    pub report_id: String,
    pub description: String,
    pub mutations: u32,
}

/// Drug response report of a profile.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct DrugResponse {
    pub profile_id: String,
    pub report_id: String,
    pub description: String,
    pub status: String,
}

///
/// Trait report of a profile.
///
/// `trait_value` is absent when the profile was not analyzed at the markers of
/// the report; when present it is always one of `possible_traits`.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Trait {
    profile_id: String,
    report_id: String,
    description: String,
    trait_value: Option<String>,
    possible_traits: BTreeSet<String>,
}

impl Trait {
    ///
    /// Create a trait report, checking that the assigned value is one of the
    /// possible values.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `trait_value` is present and not in `possible_traits`.
    ///
    pub fn try_new(
        profile_id: String,
        report_id: String,
        description: String,
        trait_value: Option<String>,
        possible_traits: BTreeSet<String>,
    ) -> Result<Self> {
        if let Some(value) = trait_value.as_deref() {
            if !possible_traits.contains(value) {
                return Err(PersonalGenomeError::InvalidState(format!(
                    "trait '{}' of report '{}' is not one of its possible traits {:?}",
                    value, report_id, possible_traits
                )));
            }
        }

        Ok(Trait {
            profile_id,
            report_id,
            description,
            trait_value,
            possible_traits,
        })
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn trait_value(&self) -> Option<&str> {
        self.trait_value.as_deref()
    }

    pub fn possible_traits(&self) -> &BTreeSet<String> {
        &self.possible_traits
    }
}
