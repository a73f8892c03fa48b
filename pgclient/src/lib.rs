//! # pgclient
//!
//! Client core for a consumer genomics API. The functionality is split over
//! member crates, each re-exported here behind a feature of the same name:
//!
//! - `core`: domain models and the error type.
//! - `genome`: the marker location index and the packed genome codec.
//! - `json`: decoders for the API's JSON documents.
//!
#[cfg(feature = "core")]
#[doc(inline)]
pub use pgclient_core as core;

#[cfg(feature = "genome")]
#[doc(inline)]
pub use pgclient_genome as genome;

#[cfg(feature = "json")]
#[doc(inline)]
pub use pgclient_json as json;
