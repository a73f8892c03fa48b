//! # Decoding of personal genome API documents.
//!
//! Each endpoint of the API answers with one JSON document: the account, the
//! names of its profiles, haplogroups, genotypes, the packed genome, the
//! ancestry composition tree, relatives and the flat health and trait reports.
//! [`JsonReportDecoder`] turns those documents into the models of
//! `pgclient_core`.
//!
//! ```
//! use pgclient_json::{JsonReportDecoder, ReportDecoder};
//!
//! let json = r#"{"id": "a42e94634e3f7683", "risks": [
//!     {"report_id": "atrialfib", "description": "Atrial Fibrillation",
//!      "risk": 0.31, "population_risk": 0.26}]}"#;
//!
//! let risks = JsonReportDecoder::new().parse_risks(json.as_bytes()).unwrap();
//! assert_eq!(risks[0].report_id, "atrialfib");
//! ```
//!
pub mod decoder;
mod wire;

pub use decoder::*;
