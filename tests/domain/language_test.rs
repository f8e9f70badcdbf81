use edgescribe::domain::{LANGUAGE_FALLBACKS, LanguageCode, SUPPORTED_LANGUAGES};

#[test]
fn given_supported_code_when_parsed_then_accepted() {
    for code in SUPPORTED_LANGUAGES {
        assert_eq!(LanguageCode::parse(code).map(|c| c.as_str()), Some(*code));
    }
}

#[test]
fn given_unknown_or_miscased_code_when_parsed_then_rejected() {
    assert!(LanguageCode::parse("xx").is_none());
    assert!(LanguageCode::parse("EN").is_none());
    assert!(LanguageCode::parse("").is_none());
}

#[test]
fn given_catalan_when_resolving_effective_code_then_spanish_is_used() {
    let catalan = LanguageCode::parse("ca").unwrap();

    assert_eq!(catalan.effective().as_str(), "es");
    assert_eq!(catalan.as_str(), "ca");
}

#[test]
fn given_language_without_fallback_when_resolving_effective_code_then_unchanged() {
    let french = LanguageCode::parse("fr").unwrap();

    assert_eq!(french.effective(), french);
}

#[test]
fn given_every_fallback_when_inspected_then_both_sides_are_supported() {
    for (from, to) in LANGUAGE_FALLBACKS {
        assert!(SUPPORTED_LANGUAGES.contains(from));
        assert!(SUPPORTED_LANGUAGES.contains(to));
    }
}

#[test]
fn given_code_when_display_name_requested_then_english_name_returned() {
    assert_eq!(LanguageCode::parse("de").unwrap().display_name(), "German");
    assert_eq!(LanguageCode::ENGLISH.display_name(), "English");
}

#[test]
fn given_json_string_when_deserialized_then_validated() {
    let parsed: LanguageCode = serde_json::from_str("\"ja\"").unwrap();
    assert_eq!(parsed.as_str(), "ja");

    assert!(serde_json::from_str::<LanguageCode>("\"klingon\"").is_err());
    assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"ja\"");
}
