use edgescribe::domain::{TermCategory, build_vocabulary};

#[test]
fn given_default_categories_when_building_then_object_names_excluded() {
    let defaults = build_vocabulary(&TermCategory::DEFAULTS, &[]);
    let with_objects = build_vocabulary(
        &[
            TermCategory::PersonalNames,
            TermCategory::CompanyNames,
            TermCategory::PlaceNames,
            TermCategory::ObjectNames,
        ],
        &[],
    );

    assert!(defaults.iter().any(|term| term == "Paris"));
    assert!(defaults.len() < with_objects.len());
}

#[test]
fn given_extra_terms_with_duplicates_when_building_then_deduplicated_case_insensitively() {
    let extra = vec![
        "Acme Widgets".to_string(),
        "ACME WIDGETS".to_string(),
        "  ".to_string(),
    ];

    let vocabulary = build_vocabulary(&[], &extra);

    assert_eq!(vocabulary, vec!["Acme Widgets".to_string()]);
}

#[test]
fn given_category_name_when_deserialized_then_snake_case_accepted() {
    let category: TermCategory = serde_json::from_str("\"place_names\"").unwrap();

    assert_eq!(category, TermCategory::PlaceNames);
}
