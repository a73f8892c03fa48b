use std::collections::BTreeSet;

use super::relationship::Relationship;

///
/// Relative struct, one predicted relative match of a profile.
///
/// Relationship fields are best-effort predictions; categories that could not
/// be resolved are absent rather than errors.
///
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Relative {
    pub profile_id: String,
    pub match_id: String,
    pub similarity: f64,
    pub shared_segments: u32,
    pub relationship: Option<Relationship>,
    pub user_relationship: Option<Relationship>,
    pub range: BTreeSet<Relationship>,
}
