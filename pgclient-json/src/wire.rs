//! Wire shapes of the API documents.
//!
//! Every struct defaults missing fields and accepts `null` wherever a value may
//! be absent, so a partially shaped document still decodes. Unknown fields are
//! skipped. Numeric fields accept JSON numbers and numeric strings.
use std::collections::BTreeSet;

use log::debug;
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Number;

use pgclient_core::models::{
    Ancestry, Carrier, DrugResponse, Haplogroup, MaternalTerminalSnp, PaternalTerminalSnp,
    Profile, ProfileName, Relationship, Relative, Risk, Trait,
};
use pgclient_core::Result;

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(Scalar::into_text)
        .collect())
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("number {} out of range", n))),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, found {:?}", s))),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!(
            "expected a number, found {}",
            b
        ))),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or(0.0))
}

fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Scalar>::deserialize(deserializer)? {
        None => return Ok(0),
        Some(Scalar::Number(n)) => n.as_u64(),
        Some(Scalar::Text(s)) => s.trim().parse::<u64>().ok(),
        Some(Scalar::Bool(_)) => None,
    };
    count
        .and_then(|count| u32::try_from(count).ok())
        .ok_or_else(|| D::Error::custom("expected a non-negative count"))
}

fn resolve_code(code: &Scalar) -> Option<Relationship> {
    let resolved = match code {
        Scalar::Number(n) => n.as_i64().and_then(Relationship::from_code),
        Scalar::Text(s) => s.trim().parse::<i64>().ok().and_then(Relationship::from_code),
        Scalar::Bool(_) => None,
    };
    if resolved.is_none() {
        debug!("Unresolved relationship code {:?}", code);
    }
    resolved
}

fn resolve_description(description: &str) -> Option<Relationship> {
    let resolved = Relationship::from_description(description);
    if resolved.is_none() {
        debug!("Unresolved relationship description {:?}", description);
    }
    resolved
}

// text is a description, a number is a code
fn resolve_relationship(relationship: &Scalar) -> Option<Relationship> {
    match relationship {
        Scalar::Text(description) => resolve_description(description),
        Scalar::Number(_) => resolve_code(relationship),
        Scalar::Bool(_) => {
            debug!("Unresolved relationship {:?}", relationship);
            None
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct UserDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub profiles: Vec<ProfileEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct ProfileEntry {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "nullable")]
    genotyped: bool,
}

impl From<ProfileEntry> for Profile {
    fn from(entry: ProfileEntry) -> Self {
        Profile {
            id: entry.id,
            genotyped: entry.genotyped,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct NamesDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub profiles: Vec<ProfileNameEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct ProfileNameEntry {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "lenient_string")]
    first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    last_name: String,
}

impl From<ProfileNameEntry> for ProfileName {
    fn from(entry: ProfileNameEntry) -> Self {
        ProfileName {
            id: entry.id,
            first_name: entry.first_name,
            last_name: entry.last_name,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct HaplogroupDocument {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(deserialize_with = "lenient_string")]
    maternal: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    paternal: Option<String>,
    #[serde(deserialize_with = "nullable")]
    maternal_terminal_snps: Vec<MaternalSnpEntry>,
    #[serde(deserialize_with = "nullable")]
    paternal_terminal_snps: Vec<PaternalSnpEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct MaternalSnpEntry {
    #[serde(deserialize_with = "lenient_string")]
    rsid: String,
    #[serde(deserialize_with = "lenient_string")]
    rcrs_position: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct PaternalSnpEntry {
    #[serde(deserialize_with = "lenient_string")]
    rsid: String,
    #[serde(deserialize_with = "lenient_string")]
    snp: String,
}

impl From<HaplogroupDocument> for Haplogroup {
    fn from(document: HaplogroupDocument) -> Self {
        Haplogroup {
            profile_id: document.id,
            paternal: document.paternal,
            maternal: document.maternal,
            paternal_terminal_snps: document
                .paternal_terminal_snps
                .into_iter()
                .map(|entry| PaternalTerminalSnp {
                    rsid: entry.rsid,
                    snp: entry.snp,
                })
                .collect(),
            maternal_terminal_snps: document
                .maternal_terminal_snps
                .into_iter()
                .map(|entry| MaternalTerminalSnp {
                    rsid: entry.rsid,
                    rcrs_position: entry.rcrs_position,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct GenomeDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub genome: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct AncestryDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub ancestry: AncestryNode,
}

/// One population of the ancestry tree; `sub_populations` has the same shape.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct AncestryNode {
    #[serde(deserialize_with = "lenient_string")]
    label: String,
    #[serde(deserialize_with = "lenient_f64")]
    proportion: f64,
    #[serde(deserialize_with = "lenient_f64")]
    unassigned: f64,
    #[serde(deserialize_with = "nullable")]
    sub_populations: Vec<AncestryNode>,
}

impl AncestryNode {
    ///
    /// Convert depth first, every node tagged with the profile of the root.
    ///
    pub fn into_ancestry(self, profile_id: &str) -> Ancestry {
        let sub_populations = self
            .sub_populations
            .into_iter()
            .map(|child| child.into_ancestry(profile_id))
            .collect();

        Ancestry::new(
            profile_id,
            self.label,
            self.proportion,
            self.unassigned,
            sub_populations,
        )
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct NeanderthalDocument {
    #[serde(deserialize_with = "nullable")]
    pub neanderthal: NeanderthalEntry,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct NeanderthalEntry {
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub proportion: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RelativesDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub relatives: Vec<RelativeEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RelativeEntry {
    #[serde(deserialize_with = "lenient_string")]
    match_id: String,
    #[serde(deserialize_with = "lenient_f64")]
    similarity: f64,
    #[serde(deserialize_with = "lenient_u32")]
    shared_segments: u32,
    relationship: Option<Scalar>,
    user_relationship_code: Option<Scalar>,
    predicted_relationship_code: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    range: Vec<Option<Scalar>>,
}

impl RelativeEntry {
    ///
    /// `relationship` takes precedence over the predicted code; either one
    /// that does not resolve leaves the relationship absent. `relationship`
    /// and `range` entries may be descriptions or codes.
    ///
    pub fn into_relative(self, profile_id: &str) -> Relative {
        let relationship = self
            .relationship
            .as_ref()
            .and_then(resolve_relationship)
            .or_else(|| self.predicted_relationship_code.as_ref().and_then(resolve_code));

        Relative {
            profile_id: profile_id.to_string(),
            match_id: self.match_id,
            similarity: self.similarity,
            shared_segments: self.shared_segments,
            relationship,
            user_relationship: self.user_relationship_code.as_ref().and_then(resolve_code),
            range: self
                .range
                .iter()
                .flatten()
                .filter_map(resolve_relationship)
                .collect(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RisksDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub risks: Vec<RiskEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RiskEntry {
    #[serde(deserialize_with = "lenient_string")]
    report_id: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
    #[serde(deserialize_with = "lenient_f64")]
    risk: f64,
    #[serde(deserialize_with = "lenient_f64")]
    population_risk: f64,
}

impl RiskEntry {
    pub fn into_risk(self, profile_id: &str) -> Risk {
        Risk {
            profile_id: profile_id.to_string(),
            report_id: self.report_id,
            description: self.description,
            risk: self.risk,
            population_risk: self.population_risk,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct CarriersDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub carriers: Vec<CarrierEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct CarrierEntry {
    #[serde(deserialize_with = "lenient_string")]
    report_id: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
    #[serde(deserialize_with = "lenient_u32")]
    mutations: u32,
}

impl CarrierEntry {
    pub fn into_carrier(self, profile_id: &str) -> Carrier {
        Carrier {
            profile_id: profile_id.to_string(),
            report_id: self.report_id,
            description: self.description,
            mutations: self.mutations,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct DrugResponsesDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub drug_responses: Vec<DrugResponseEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct DrugResponseEntry {
    #[serde(deserialize_with = "lenient_string")]
    report_id: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
    #[serde(deserialize_with = "lenient_string")]
    status: String,
}

impl DrugResponseEntry {
    pub fn into_drug_response(self, profile_id: &str) -> DrugResponse {
        DrugResponse {
            profile_id: profile_id.to_string(),
            report_id: self.report_id,
            description: self.description,
            status: self.status,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct TraitsDocument {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub traits: Vec<TraitEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct TraitEntry {
    #[serde(deserialize_with = "lenient_string")]
    report_id: String,
    #[serde(deserialize_with = "lenient_string")]
    description: String,
    #[serde(rename = "trait", deserialize_with = "lenient_opt_string")]
    trait_value: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    possible_traits: Vec<String>,
}

impl TraitEntry {
    ///
    /// # Errors
    ///
    /// `InvalidState` if the assigned trait is not one of the possible traits.
    ///
    pub fn into_trait(self, profile_id: &str) -> Result<Trait> {
        Trait::try_new(
            profile_id.to_string(),
            self.report_id,
            self.description,
            self.trait_value,
            self.possible_traits.into_iter().collect::<BTreeSet<_>>(),
        )
    }
}
