use std::collections::HashMap;
use std::io::Read;

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use pgclient_core::models::{
    Ancestry, Carrier, DrugResponse, Genome, Genotype, Haplogroup, Relative, Risk, Trait, User,
    UserName,
};
use pgclient_core::{PersonalGenomeError, Result};

use crate::wire::{
    AncestryDocument, CarriersDocument, DrugResponsesDocument, GenomeDocument, HaplogroupDocument,
    NamesDocument, NeanderthalDocument, RelativesDocument, RisksDocument, TraitsDocument,
    UserDocument,
};

/// Returned by [`ReportDecoder::parse_neanderthal_proportion`] when the
/// document carries no proportion.
pub const UNKNOWN_NEANDERTHAL_PROPORTION: f64 = -1.0;

///
/// Decode one API response document into the domain model.
///
/// Missing fields decode to a baseline (zero, empty, or absent). A stream that
/// cannot be read or tokenized is a `DecodeFailed` error, so an empty report is
/// never confused with a failed one.
///
pub trait ReportDecoder {
    fn parse_user<R: Read>(&self, reader: R) -> Result<User>;

    fn parse_names<R: Read>(&self, reader: R) -> Result<UserName>;

    fn parse_haplogroups<R: Read>(&self, reader: R) -> Result<Haplogroup>;

    /// A genotype document holds `id` plus one field per marker.
    fn parse_genotypes<R: Read>(&self, reader: R) -> Result<Genotype>;

    fn parse_genome<R: Read>(&self, reader: R) -> Result<Genome>;

    /// The recursive ancestry composition, rooted at the "Total" population.
    fn parse_ancestry<R: Read>(&self, reader: R) -> Result<Ancestry>;

    fn parse_neanderthal_proportion<R: Read>(&self, reader: R) -> Result<f64>;

    fn parse_relatives<R: Read>(&self, reader: R) -> Result<Vec<Relative>>;

    fn parse_risks<R: Read>(&self, reader: R) -> Result<Vec<Risk>>;

    fn parse_carriers<R: Read>(&self, reader: R) -> Result<Vec<Carrier>>;

    fn parse_drug_responses<R: Read>(&self, reader: R) -> Result<Vec<DrugResponse>>;

    ///
    /// # Errors
    ///
    /// `InvalidState` if a report assigns a trait outside its possible traits.
    ///
    fn parse_traits<R: Read>(&self, reader: R) -> Result<Vec<Trait>>;
}

///
/// [`ReportDecoder`] over `serde_json`.
///
/// Nesting depth is not capped, so ancestry trees of any depth decode; the
/// thread stack is the only limit.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportDecoder;

impl JsonReportDecoder {
    pub fn new() -> Self {
        JsonReportDecoder
    }

    fn read_document<T: DeserializeOwned, R: Read>(reader: R, what: &str) -> Result<T> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        deserializer.disable_recursion_limit();

        T::deserialize(&mut deserializer)
            .and_then(|document| deserializer.end().map(|_| document))
            .map_err(|e| {
                warn!("could not parse {}: {}", what, e);
                PersonalGenomeError::DecodeFailed(format!("could not parse {}: {}", what, e))
            })
    }
}

impl ReportDecoder for JsonReportDecoder {
    fn parse_user<R: Read>(&self, reader: R) -> Result<User> {
        let document: UserDocument = Self::read_document(reader, "user")?;
        Ok(User {
            id: document.id,
            profiles: document.profiles.into_iter().map(Into::into).collect(),
        })
    }

    fn parse_names<R: Read>(&self, reader: R) -> Result<UserName> {
        let document: NamesDocument = Self::read_document(reader, "names")?;
        Ok(UserName {
            id: document.id,
            first_name: document.first_name,
            last_name: document.last_name,
            profile_names: document.profiles.into_iter().map(Into::into).collect(),
        })
    }

    fn parse_haplogroups<R: Read>(&self, reader: R) -> Result<Haplogroup> {
        let document: HaplogroupDocument = Self::read_document(reader, "haplogroups")?;
        Ok(document.into())
    }

    fn parse_genotypes<R: Read>(&self, reader: R) -> Result<Genotype> {
        let mut document: Map<String, Value> = Self::read_document(reader, "genotypes")?;

        let profile_id = match document.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        let values: HashMap<String, String> = document
            .into_iter()
            .filter_map(|(marker_id, value)| match value {
                Value::String(call) => Some((marker_id, call)),
                _ => None,
            })
            .collect();

        Ok(Genotype::new(profile_id, values))
    }

    fn parse_genome<R: Read>(&self, reader: R) -> Result<Genome> {
        let document: GenomeDocument = Self::read_document(reader, "genome")?;
        Ok(Genome::new(document.id, document.genome))
    }

    fn parse_ancestry<R: Read>(&self, reader: R) -> Result<Ancestry> {
        let document: AncestryDocument = Self::read_document(reader, "ancestry")?;
        Ok(document.ancestry.into_ancestry(&document.id))
    }

    fn parse_neanderthal_proportion<R: Read>(&self, reader: R) -> Result<f64> {
        let document: NeanderthalDocument = Self::read_document(reader, "neanderthal proportion")?;
        Ok(document
            .neanderthal
            .proportion
            .unwrap_or(UNKNOWN_NEANDERTHAL_PROPORTION))
    }

    fn parse_relatives<R: Read>(&self, reader: R) -> Result<Vec<Relative>> {
        let document: RelativesDocument = Self::read_document(reader, "relatives")?;
        let profile_id = document.id;
        Ok(document
            .relatives
            .into_iter()
            .map(|entry| entry.into_relative(&profile_id))
            .collect())
    }

    fn parse_risks<R: Read>(&self, reader: R) -> Result<Vec<Risk>> {
        let document: RisksDocument = Self::read_document(reader, "risks")?;
        let profile_id = document.id;
        Ok(document
            .risks
            .into_iter()
            .map(|entry| entry.into_risk(&profile_id))
            .collect())
    }

    fn parse_carriers<R: Read>(&self, reader: R) -> Result<Vec<Carrier>> {
        let document: CarriersDocument = Self::read_document(reader, "carriers")?;
        let profile_id = document.id;
        Ok(document
            .carriers
            .into_iter()
            .map(|entry| entry.into_carrier(&profile_id))
            .collect())
    }

    fn parse_drug_responses<R: Read>(&self, reader: R) -> Result<Vec<DrugResponse>> {
        let document: DrugResponsesDocument = Self::read_document(reader, "drug responses")?;
        let profile_id = document.id;
        Ok(document
            .drug_responses
            .into_iter()
            .map(|entry| entry.into_drug_response(&profile_id))
            .collect())
    }

    fn parse_traits<R: Read>(&self, reader: R) -> Result<Vec<Trait>> {
        let document: TraitsDocument = Self::read_document(reader, "traits")?;
        let profile_id = document.id;
        document
            .traits
            .into_iter()
            .map(|entry| entry.into_trait(&profile_id))
            .collect()
    }
}
