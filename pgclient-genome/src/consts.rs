/// File name of the bundled marker location resource.
pub const DEFAULT_LOCATIONS_FILENAME: &str = "snps.data.gz";

/// Directory of the bundled resource, relative to this crate's manifest.
pub const DEFAULT_LOCATIONS_SUBFOLDER: &str = "data";

/// Number of records in the bundled resource, used to pre-size the index.
pub const DEFAULT_LOCATIONS_CAPACITY: usize = 1_200_000;

/// Width of one marker's call in the packed genome string, one byte per allele.
pub const GENOTYPE_WIDTH: usize = 2;

/// Returned by offset and position lookups for unknown markers.
pub const UNKNOWN_MARKER: i64 = -1;
