//! Integration tests decoding recorded API documents.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use pgclient_core::models::Relationship;
use pgclient_core::PersonalGenomeError;
use pgclient_json::{JsonReportDecoder, ReportDecoder, UNKNOWN_NEANDERTHAL_PROPORTION};

#[fixture]
fn decoder() -> JsonReportDecoder {
    JsonReportDecoder::new()
}

fn open_document(name: &str) -> BufReader<File> {
    let path = PathBuf::from("../tests/data/json").join(name);
    BufReader::new(File::open(&path).unwrap())
}

#[rstest]
fn test_parse_user(decoder: JsonReportDecoder) {
    let user = decoder.parse_user(open_document("user.json")).unwrap();

    assert_eq!(user.id, "b8e0b2f4c1a9d6e3");
    assert_eq!(user.profiles.len(), 2);
    let genotyped: Vec<&str> = user.genotyped_profiles().map(|p| p.id.as_str()).collect();
    assert_eq!(genotyped, vec!["a42e94634e3f7683"]);
}

#[rstest]
fn test_parse_names(decoder: JsonReportDecoder) {
    let names = decoder.parse_names(open_document("names.json")).unwrap();

    assert_eq!(names.first_name, "Jane");
    assert_eq!(names.profile_names.len(), 2);
    assert_eq!(names.profile_names[1].first_name, "John");
    assert_eq!(names.profile_names[1].last_name, "");
}

#[rstest]
fn test_parse_haplogroups(decoder: JsonReportDecoder) {
    let haplogroup = decoder
        .parse_haplogroups(open_document("haplogroups.json"))
        .unwrap();

    assert_eq!(haplogroup.maternal, "H1c1");
    assert_eq!(haplogroup.paternal, None);
    assert!(haplogroup.paternal_terminal_snps.is_empty());
    assert_eq!(haplogroup.maternal_terminal_snps.len(), 2);
    assert_eq!(haplogroup.maternal_terminal_snps[1].rcrs_position, "7028");
}

#[rstest]
fn test_parse_genotypes(decoder: JsonReportDecoder) {
    let genotype = decoder.parse_genotypes(open_document("genotypes.json")).unwrap();

    assert_eq!(genotype.profile_id, "a42e94634e3f7683");
    assert_eq!(genotype.len(), 4);
    assert_eq!(genotype.value("i3000001"), Some("GG"));
    assert_eq!(genotype.value("id"), None);
}

#[rstest]
fn test_parse_genome(decoder: JsonReportDecoder) {
    let genome = decoder.parse_genome(open_document("genome.json")).unwrap();

    assert_eq!(genome.profile_id, "a42e94634e3f7683");
    assert_eq!(genome.values, "AAGGCTTT--ACCCGG");
}

#[rstest]
fn test_parse_nested_ancestry(decoder: JsonReportDecoder) {
    let ancestry = decoder.parse_ancestry(open_document("ancestry.json")).unwrap();

    assert_eq!(ancestry.label, "Total");
    assert_eq!(ancestry.depth(), 4);
    assert_eq!(ancestry.sub_populations.len(), 2);

    let european = &ancestry.sub_populations[0];
    assert_eq!(european.label, "European");
    assert_eq!(european.proportion, 0.93);
    assert_eq!(european.unassigned, 0.02);

    let northern = &european.sub_populations[0];
    assert_eq!(northern.label, "Northern European");
    let leaves: Vec<&str> = northern
        .sub_populations
        .iter()
        .map(|leaf| leaf.label.as_str())
        .collect();
    assert_eq!(leaves, vec!["French", "German", "British & Irish"]);
    assert!(northern.sub_populations.iter().all(|leaf| leaf.is_leaf()));
    assert_eq!(northern.sub_populations[2].proportion, 0.2);

    assert!(ancestry.sub_populations[1].is_leaf());
    assert_eq!(
        ancestry.find("Southern European").map(|node| node.proportion),
        Some(0.2)
    );
}

#[rstest]
fn test_every_ancestry_node_carries_root_profile(decoder: JsonReportDecoder) {
    let ancestry = decoder.parse_ancestry(open_document("ancestry.json")).unwrap();

    let mut stack = vec![&ancestry];
    while let Some(node) = stack.pop() {
        assert_eq!(node.profile_id, "a42e94634e3f7683");
        stack.extend(node.sub_populations.iter());
    }
}

#[rstest]
fn test_parse_flat_ancestry(decoder: JsonReportDecoder) {
    let ancestry = decoder
        .parse_ancestry(open_document("ancestry_flat.json"))
        .unwrap();

    assert!(ancestry.is_leaf());
    assert_eq!(ancestry.depth(), 1);
    assert_eq!(ancestry.unassigned, 1.0);
}

#[rstest]
fn test_parse_deep_ancestry(decoder: JsonReportDecoder) {
    let levels = 200;
    let mut json = String::from(r#"{"id": "p1", "ancestry": "#);
    for level in 0..levels {
        json.push_str(&format!(
            r#"{{"label": "level {}", "proportion": 1.0, "sub_populations": ["#,
            level
        ));
    }
    for _ in 0..levels {
        json.push_str("]}");
    }
    json.push('}');

    let ancestry = decoder.parse_ancestry(json.as_bytes()).unwrap();
    assert_eq!(ancestry.depth(), levels);
    assert!(ancestry.find("level 199").is_some_and(|node| node.is_leaf()));
}

#[rstest]
fn test_parse_neanderthal_proportion(decoder: JsonReportDecoder) {
    let proportion = decoder
        .parse_neanderthal_proportion(open_document("neanderthal.json"))
        .unwrap();
    assert_eq!(proportion, 0.028);

    let unknown = decoder
        .parse_neanderthal_proportion(open_document("genome.json"))
        .unwrap();
    assert_eq!(unknown, UNKNOWN_NEANDERTHAL_PROPORTION);
}

#[rstest]
fn test_parse_relatives(decoder: JsonReportDecoder) {
    let relatives = decoder.parse_relatives(open_document("relatives.json")).unwrap();
    assert_eq!(relatives.len(), 3);

    let cousin = &relatives[0];
    assert_eq!(cousin.profile_id, "a42e94634e3f7683");
    assert_eq!(cousin.match_id, "e1f4a7c2d9b35018");
    assert_eq!(cousin.similarity, 0.125);
    assert_eq!(cousin.shared_segments, 14);
    assert_eq!(cousin.relationship, Some(Relationship::FirstCousin));
    assert_eq!(cousin.user_relationship, None);
    assert_eq!(
        cousin.range,
        BTreeSet::from([
            Relationship::GreatUncle,
            Relationship::FirstCousin,
            Relationship::FirstCousinOnceRemoved,
        ])
    );

    // unknown description, so the predicted code decides
    let distant = &relatives[1];
    assert_eq!(distant.similarity, 0.0061);
    assert_eq!(distant.shared_segments, 2);
    assert_eq!(distant.relationship, Some(Relationship::FourthCousin));
    assert_eq!(distant.user_relationship, Some(Relationship::Father));
    assert_eq!(
        distant.range,
        BTreeSet::from([Relationship::FourthCousin, Relationship::DistantCousin])
    );

    let unresolved = &relatives[2];
    assert_eq!(unresolved.relationship, None);
    assert_eq!(unresolved.user_relationship, None);
    assert_eq!(unresolved.shared_segments, 1);
    assert!(unresolved.range.is_empty());
}

#[rstest]
fn test_parse_risks_keeps_entries_apart(decoder: JsonReportDecoder) {
    let risks = decoder.parse_risks(open_document("risks.json")).unwrap();

    assert_eq!(risks.len(), 2);
    assert_eq!(risks[0].report_id, "atrialfib");
    assert_eq!(risks[0].risk, 0.31);
    assert_eq!(risks[0].population_risk, 0.26);
    assert_eq!(risks[1].report_id, "t2d");
    assert_eq!(risks[1].description, "Type 2 Diabetes");
    assert_eq!(risks[1].risk, 0.18);
    assert_eq!(risks[1].population_risk, 0.25);
    assert!(risks.iter().all(|risk| risk.profile_id == "a42e94634e3f7683"));
}

#[rstest]
fn test_parse_carriers(decoder: JsonReportDecoder) {
    let carriers = decoder.parse_carriers(open_document("carriers.json")).unwrap();

    let mutations: Vec<u32> = carriers.iter().map(|carrier| carrier.mutations).collect();
    assert_eq!(mutations, vec![0, 1, 2]);
    assert_eq!(carriers[2].description, "Tay-Sachs Disease");
}

#[rstest]
fn test_parse_drug_responses(decoder: JsonReportDecoder) {
    let responses = decoder
        .parse_drug_responses(open_document("drug_responses.json"))
        .unwrap();

    let statuses: Vec<&str> = responses.iter().map(|r| r.status.as_str()).collect();
    assert_eq!(statuses, vec!["reduced", "typical", "not_applicable"]);
}

#[rstest]
fn test_parse_traits(decoder: JsonReportDecoder) {
    let traits = decoder.parse_traits(open_document("traits.json")).unwrap();

    assert_eq!(traits.len(), 2);
    assert_eq!(traits[0].trait_value(), Some("Likely Brown"));
    assert!(traits[0].possible_traits().contains("Likely Blue"));
    assert_eq!(traits[1].report_id(), "bitter_taste");
    assert_eq!(traits[1].trait_value(), None);
    assert_eq!(traits[1].possible_traits().len(), 2);
}

#[rstest]
fn test_trait_outside_possible_traits_is_invalid_state(decoder: JsonReportDecoder) {
    let result = decoder.parse_traits(open_document("traits_invalid.json"));
    assert!(matches!(result, Err(PersonalGenomeError::InvalidState(_))));
}

fn truncated_document(name: &str) -> Vec<u8> {
    let mut bytes = std::fs::read(PathBuf::from("../tests/data/json").join(name)).unwrap();
    bytes.truncate(bytes.len() / 2);
    bytes
}

#[rstest]
fn test_truncated_documents_fail(decoder: JsonReportDecoder) {
    let risks = decoder.parse_risks(truncated_document("risks.json").as_slice());
    assert!(matches!(risks, Err(PersonalGenomeError::DecodeFailed(_))));

    let carriers = decoder.parse_carriers(truncated_document("carriers.json").as_slice());
    assert!(matches!(carriers, Err(PersonalGenomeError::DecodeFailed(_))));

    let traits = decoder.parse_traits(truncated_document("traits.json").as_slice());
    assert!(matches!(traits, Err(PersonalGenomeError::DecodeFailed(_))));

    let relatives = decoder.parse_relatives(truncated_document("relatives.json").as_slice());
    assert!(matches!(relatives, Err(PersonalGenomeError::DecodeFailed(_))));

    let ancestry = decoder.parse_ancestry(truncated_document("ancestry.json").as_slice());
    assert!(matches!(ancestry, Err(PersonalGenomeError::DecodeFailed(_))));
}

#[rstest]
fn test_relationships_sent_as_codes(decoder: JsonReportDecoder) {
    let json = r#"{"id": "p1", "relatives": [
        {"match_id": "m1", "relationship": 26, "range": [29, "3rd Cousin", 99]},
        {"match_id": "m2", "relationship": 99}
    ]}"#;
    let relatives = decoder.parse_relatives(json.as_bytes()).unwrap();

    assert_eq!(relatives[0].relationship, Some(Relationship::FirstCousin));
    assert_eq!(
        relatives[0].range,
        BTreeSet::from([Relationship::SecondCousin, Relationship::ThirdCousin])
    );
    assert_eq!(relatives[1].match_id, "m2");
    assert_eq!(relatives[1].relationship, None);
}

#[rstest]
fn test_null_trait_values_decode(decoder: JsonReportDecoder) {
    let json = r#"{"id": "p1", "traits": [
        {"report_id": "t", "trait": null, "possible_traits": ["A", null]}
    ]}"#;
    let traits = decoder.parse_traits(json.as_bytes()).unwrap();

    assert_eq!(traits[0].trait_value(), None);
    assert_eq!(traits[0].possible_traits(), &BTreeSet::from(["A".to_string()]));
}
