//! Marker location index.
//!
//! Maps marker identifiers to the byte offset of their call in a packed genome
//! string, plus their chromosome and position. The index is built from a
//! tab-separated resource with one `rowIndex, markerId, chromosome, position`
//! record per line; a marker's offset is `rowIndex * 2`.
//!
//! Building never fails. A resource that cannot be opened or read yields an
//! empty or partial index, and the problem is reported through the `log` facade
//! and the [`LoadSummary`] of the index.
use std::io::BufRead;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use fxhash::FxHashMap as HashMap;
use log::{debug, info, warn};

use pgclient_core::utils::get_dynamic_reader;
use pgclient_core::{PersonalGenomeError, Result};

use crate::config::LocationsConfig;
use crate::consts::{GENOTYPE_WIDTH, UNKNOWN_MARKER};

static GLOBAL_LOCATIONS: OnceLock<LocationIndex> = OnceLock::new();

///
/// Location of one marker: where its call starts in the packed genome string
/// and where it sits on the reference.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MarkerLocation {
    offset: usize,
    chromosome: Arc<str>,
    position: u32,
}

impl MarkerLocation {
    pub fn new(offset: usize, chromosome: &str, position: u32) -> Self {
        MarkerLocation {
            offset,
            chromosome: Arc::from(chromosome),
            position,
        }
    }

    /// Byte offset of the marker's call; always even.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn position(&self) -> u32 {
        self.position
    }
}

///
/// Diagnostics of an index build.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct LoadSummary {
    /// Non-blank lines read from the resource.
    pub lines: usize,
    /// Distinct marker identifiers in the finished index.
    pub loaded: usize,
    /// Lines skipped because they did not hold four well-formed fields.
    pub malformed: usize,
    /// Lines whose identifier was already present; the later line wins.
    pub duplicates: usize,
    /// Set when the resource could not be opened or reading it stopped early.
    pub failure: Option<String>,
}

impl LoadSummary {
    pub fn is_degraded(&self) -> bool {
        self.failure.is_some() || self.malformed > 0
    }
}

struct ParsedLocation<'a> {
    marker_id: &'a str,
    offset: usize,
    chromosome: &'a str,
    position: u32,
}

fn parse_line(line: &str) -> Option<ParsedLocation<'_>> {
    let mut fields = line.split('\t');

    let row_index = fields.next()?.parse::<usize>().ok()?;
    let marker_id = fields.next().filter(|s| !s.is_empty())?;
    let chromosome = fields.next().filter(|s| !s.is_empty())?;
    let position = fields.next()?.parse::<u32>().ok()?;

    if fields.next().is_some() {
        return None;
    }

    Some(ParsedLocation {
        marker_id,
        offset: row_index.checked_mul(GENOTYPE_WIDTH)?,
        chromosome,
        position,
    })
}

// ~25 distinct labels are shared by every record
fn intern(labels: &mut HashMap<String, Arc<str>>, label: &str) -> Arc<str> {
    if let Some(interned) = labels.get(label) {
        return Arc::clone(interned);
    }
    let interned: Arc<str> = Arc::from(label);
    labels.insert(label.to_string(), Arc::clone(&interned));
    interned
}

fn marker_id_required(marker_id: Option<&str>) -> Result<&str> {
    marker_id.ok_or_else(|| {
        PersonalGenomeError::InvalidArgument("marker identifier must not be null".to_string())
    })
}

///
/// Immutable mapping from marker identifier to [`MarkerLocation`].
///
/// Identifiers are matched exactly, without case folding or trimming.
///
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    locations: HashMap<String, MarkerLocation>,
    summary: LoadSummary,
}

impl LocationIndex {
    ///
    /// Build an index from a reader over the uncompressed resource.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::load(reader, 0)
    }

    ///
    /// Build an index from a file, gzip-compressed if its name ends in `.gz`.
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::open(path.as_ref(), 0)
    }

    pub fn from_config(config: &LocationsConfig) -> Self {
        Self::open(&config.path, config.capacity.unwrap_or(0))
    }

    ///
    /// The process-wide index, built from the bundled resource on first use.
    ///
    /// Concurrent first callers block until the single build finishes, so the
    /// index is never observed half populated.
    ///
    pub fn global() -> &'static LocationIndex {
        GLOBAL_LOCATIONS.get_or_init(|| LocationIndex::from_config(&LocationsConfig::default()))
    }

    ///
    /// Build the process-wide index from `config` unless it already exists.
    ///
    /// Returns `true` if this call performed the build.
    ///
    pub fn init_global(config: &LocationsConfig) -> bool {
        let mut built = false;
        GLOBAL_LOCATIONS.get_or_init(|| {
            built = true;
            LocationIndex::from_config(config)
        });
        built
    }

    fn open(path: &Path, capacity: usize) -> Self {
        match get_dynamic_reader(path) {
            Ok(reader) => {
                let index = Self::load(reader, capacity);
                info!(
                    "Loaded {} marker locations from {:?}",
                    index.len(),
                    path
                );
                index
            }
            Err(e) => {
                warn!("Marker locations unavailable, continuing with an empty index: {:#}", e);
                LocationIndex {
                    locations: HashMap::default(),
                    summary: LoadSummary {
                        failure: Some(format!("{:#}", e)),
                        ..LoadSummary::default()
                    },
                }
            }
        }
    }

    fn load<R: BufRead>(mut reader: R, capacity: usize) -> Self {
        let mut locations: HashMap<String, MarkerLocation> =
            HashMap::with_capacity_and_hasher(capacity, Default::default());
        let mut chromosomes: HashMap<String, Arc<str>> = HashMap::default();
        let mut summary = LoadSummary::default();
        let mut buf = Vec::with_capacity(64);

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        "Stopped reading marker locations after {} lines: {}",
                        summary.lines, e
                    );
                    summary.failure = Some(e.to_string());
                    break;
                }
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']),
                Err(_) => {
                    summary.lines += 1;
                    summary.malformed += 1;
                    debug!("Skipping marker location line {}: not UTF-8", summary.lines);
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            summary.lines += 1;

            let Some(parsed) = parse_line(line) else {
                summary.malformed += 1;
                debug!(
                    "Skipping malformed marker location line {}: {:?}",
                    summary.lines, line
                );
                continue;
            };

            let location = MarkerLocation {
                offset: parsed.offset,
                chromosome: intern(&mut chromosomes, parsed.chromosome),
                position: parsed.position,
            };

            if locations
                .insert(parsed.marker_id.to_string(), location)
                .is_some()
            {
                summary.duplicates += 1;
                debug!(
                    "Duplicate marker identifier {} on line {}, keeping the later line",
                    parsed.marker_id, summary.lines
                );
            }
        }

        if summary.malformed > 0 {
            warn!(
                "Skipped {} malformed marker location lines",
                summary.malformed
            );
        }
        summary.loaded = locations.len();

        LocationIndex { locations, summary }
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, marker_id: &str) -> bool {
        self.locations.contains_key(marker_id)
    }

    pub fn get(&self, marker_id: &str) -> Option<&MarkerLocation> {
        self.locations.get(marker_id)
    }

    ///
    /// Byte offset of a marker's call in the packed genome string, or `-1` if
    /// the marker is unknown.
    ///
    pub fn index(&self, marker_id: &str) -> i64 {
        self.get(marker_id)
            .and_then(|location| i64::try_from(location.offset).ok())
            .unwrap_or(UNKNOWN_MARKER)
    }

    /// Chromosome label of a marker, or `None` if the marker is unknown.
    pub fn chromosome(&self, marker_id: &str) -> Option<&str> {
        self.get(marker_id).map(MarkerLocation::chromosome)
    }

    /// Position of a marker, or `-1` if the marker is unknown.
    pub fn position(&self, marker_id: &str) -> i64 {
        self.get(marker_id)
            .map(|location| i64::from(location.position))
            .unwrap_or(UNKNOWN_MARKER)
    }

    ///
    /// Every identifier in the index, in no particular order. Each call starts
    /// a fresh iteration.
    ///
    pub fn all_marker_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.locations.keys().map(String::as_str)
    }

    ///
    /// [`LocationIndex::index`] for callers holding a nullable identifier.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `marker_id` is `None`.
    ///
    pub fn try_index(&self, marker_id: Option<&str>) -> Result<i64> {
        Ok(self.index(marker_id_required(marker_id)?))
    }

    pub fn try_chromosome(&self, marker_id: Option<&str>) -> Result<Option<&str>> {
        Ok(self.chromosome(marker_id_required(marker_id)?))
    }

    pub fn try_position(&self, marker_id: Option<&str>) -> Result<i64> {
        Ok(self.position(marker_id_required(marker_id)?))
    }
}
