use std::collections::BTreeMap;

use ssyk_model::{Code, Level, LevelStats, Taxonomy, TranslationStats};

#[test]
fn stats_serialize_with_numeric_level_keys() {
    let mut level = LevelStats::default();
    level.record(&Code::from_digits("97", 2).unwrap(), false);
    let mut stats: TranslationStats = BTreeMap::new();
    stats.insert(Level::Two, level);

    let json = serde_json::to_value(&stats).expect("serialize stats");
    assert_eq!(json["2"]["total_codes"], 1);
    assert_eq!(json["2"]["translated"], 0);
    assert_eq!(json["2"]["unmatched_codes"][0], "97");

    let round: TranslationStats = serde_json::from_value(json).expect("deserialize stats");
    assert_eq!(round[&Level::Two].missing(), 1);
}

#[test]
fn taxonomy_serializes_lowercase() {
    let json = serde_json::to_string(&Taxonomy::Ssyk2012).unwrap();
    assert_eq!(json, "\"ssyk2012\"");
}

#[test]
fn every_level_has_a_distinct_section() {
    for taxonomy in Taxonomy::all() {
        let mut sections: Vec<&str> = Level::ALL
            .iter()
            .map(|level| taxonomy.level_spec(*level).section)
            .collect();
        sections.dedup();
        assert_eq!(sections.len(), 4, "{taxonomy}");
    }
}
