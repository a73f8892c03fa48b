use std::collections::HashMap;

use pgclient_core::models::{Genome, Genotype};
use pgclient_core::{PersonalGenomeError, Result};

use crate::consts::GENOTYPE_WIDTH;
use crate::locations::LocationIndex;

///
/// Slices per-marker calls out of packed genome strings.
///
/// Markers the index does not know, and markers whose call lies beyond the end
/// of a profile's packed string, are left out of the result: genotyping
/// coverage differs between chip versions, so a miss is not an error.
///
#[derive(Debug, Clone, Copy)]
pub struct GenomeCodec<'a> {
    index: &'a LocationIndex,
}

impl GenomeCodec<'static> {
    ///
    /// A codec over the process-wide [`LocationIndex::global`].
    ///
    pub fn global() -> Self {
        GenomeCodec::new(LocationIndex::global())
    }
}

impl<'a> GenomeCodec<'a> {
    pub fn new(index: &'a LocationIndex) -> Self {
        GenomeCodec { index }
    }

    pub fn index(&self) -> &'a LocationIndex {
        self.index
    }

    ///
    /// Call of one marker, if the marker is known and covered by the genome.
    ///
    pub fn value<'g>(&self, genome: &'g Genome, marker_id: &str) -> Option<&'g str> {
        let offset = self.index.get(marker_id)?.offset();
        let end = offset.checked_add(GENOTYPE_WIDTH)?;
        genome.values.get(offset..end)
    }

    ///
    /// Decode the calls of the requested markers.
    ///
    /// An empty request decodes every marker in the index.
    ///
    pub fn decode<I, S>(&self, genome: &Genome, marker_ids: I) -> Genotype
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut marker_ids = marker_ids.into_iter().peekable();
        if marker_ids.peek().is_none() {
            return self.decode_all(genome);
        }

        let mut values = HashMap::with_capacity(marker_ids.size_hint().0);
        for marker_id in marker_ids {
            let marker_id = marker_id.as_ref();
            if let Some(value) = self.value(genome, marker_id) {
                values.insert(marker_id.to_string(), value.to_string());
            }
        }

        Genotype::new(genome.profile_id.clone(), values)
    }

    ///
    /// Decode the calls of every marker in the index.
    ///
    pub fn decode_all(&self, genome: &Genome) -> Genotype {
        let values = self
            .index
            .all_marker_ids()
            .filter_map(|marker_id| {
                self.value(genome, marker_id)
                    .map(|value| (marker_id.to_string(), value.to_string()))
            })
            .collect();

        Genotype::new(genome.profile_id.clone(), values)
    }

    ///
    /// [`GenomeCodec::decode`] for callers holding a nullable collection of
    /// nullable identifiers.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `marker_ids` is `None` or holds a `None`, raised
    /// before anything is decoded.
    ///
    pub fn decode_checked<I, S>(&self, genome: &Genome, marker_ids: Option<I>) -> Result<Genotype>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let marker_ids = marker_ids.ok_or_else(|| {
            PersonalGenomeError::InvalidArgument(
                "marker identifiers must not be null".to_string(),
            )
        })?;

        let marker_ids = marker_ids
            .into_iter()
            .enumerate()
            .map(|(i, marker_id)| {
                marker_id.ok_or_else(|| {
                    PersonalGenomeError::InvalidArgument(format!(
                        "marker identifier at position {} must not be null",
                        i
                    ))
                })
            })
            .collect::<Result<Vec<S>>>()?;

        Ok(self.decode(genome, marker_ids))
    }
}

///
/// Decode a genome against an explicit index.
///
pub trait AsGenotype {
    fn as_genotype<I, S>(&self, index: &LocationIndex, marker_ids: I) -> Genotype
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

impl AsGenotype for Genome {
    fn as_genotype<I, S>(&self, index: &LocationIndex, marker_ids: I) -> Genotype
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GenomeCodec::new(index).decode(self, marker_ids)
    }
}
