//! # Core domain model for pgclient
//!
//! Typed records for the responses of a consumer genomics API: accounts and
//! profiles, packed genomes and per-marker genotypes, the recursive ancestry
//! composition, and the flat report families (risks, carriers, drug responses,
//! traits, relatives). Also home to the shared error type and reader helpers.
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{PersonalGenomeError, Result};
