//! # Marker locations and packed genome decoding.
//!
//! A profile's genome arrives as one packed string holding a two-character call
//! for every marker of the chip, each at a fixed byte offset. This crate loads
//! the marker location resource that gives those offsets ([`LocationIndex`]) and
//! slices calls for requested markers out of a packed string ([`GenomeCodec`]).
//!
//! ```no_run
//! use pgclient_core::models::Genome;
//! use pgclient_genome::{GenomeCodec, LocationIndex};
//!
//! let index = LocationIndex::from_path("snps.data.gz");
//! let genome = Genome::new("a42e94634e3f7683", "AAGGCT--");
//! let genotype = GenomeCodec::new(&index).decode(&genome, ["rs3094315", "i3000001"]);
//! ```
//!
pub mod codec;
pub mod config;
pub mod consts;
pub mod locations;

// re-expose core functions
pub use codec::*;
pub use config::*;
pub use consts::*;
pub use locations::*;
