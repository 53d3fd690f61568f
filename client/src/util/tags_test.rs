use super::*;

#[test]
fn normalize_tag_collapses_whitespace() {
    assert_eq!(normalize_tag("  heart   murmur "), Some("heart murmur".to_owned()));
    assert_eq!(normalize_tag(" \t "), None);
}

#[test]
fn add_tag_rejects_case_insensitive_duplicates() {
    let mut tags = vec!["Otitis".to_owned()];
    assert!(!add_tag(&mut tags, "otitis"));
    assert!(add_tag(&mut tags, "Dermatitis"));
    assert!(!add_tag(&mut tags, "   "));
    assert_eq!(tags, vec!["Otitis".to_owned(), "Dermatitis".to_owned()]);
}

#[test]
fn remove_tag_matches_case_insensitively() {
    let mut tags = vec!["Otitis".to_owned(), "Obesity".to_owned()];
    assert!(remove_tag(&mut tags, "OTITIS"));
    assert!(!remove_tag(&mut tags, "Diabetes"));
    assert_eq!(tags, vec!["Obesity".to_owned()]);
}

#[test]
fn suggest_filters_selected_and_query() {
    let selected = vec!["Dermatitis".to_owned()];
    assert_eq!(suggest(KNOWN_CONDITIONS, &selected, "itis"), vec!["Arthritis".to_owned(), "Otitis".to_owned()]);
}

#[test]
fn suggest_empty_query_is_capped() {
    let suggestions = suggest(KNOWN_CONDITIONS, &[], "");
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert_eq!(suggestions[0], "Allergy");
}

#[test]
fn creatable_offers_new_normalized_tags_only() {
    let selected = vec!["Asthma".to_owned()];
    assert_eq!(creatable(KNOWN_CONDITIONS, &selected, "  hip   dysplasia "), Some("hip dysplasia".to_owned()));
    assert_eq!(creatable(KNOWN_CONDITIONS, &selected, "otitis"), None);
    assert_eq!(creatable(KNOWN_CONDITIONS, &selected, "ASTHMA"), None);
    assert_eq!(creatable(KNOWN_CONDITIONS, &selected, "   "), None);
}

#[test]
fn accented_tags_compare_case_insensitively() {
    let mut tags = vec!["Otite crônica".to_owned()];
    assert!(!add_tag(&mut tags, "OTITE CRÔNICA"));
    assert!(contains_tag(&tags, "otite CRÔNICA"));
    assert!(remove_tag(&mut tags, "OTITE CRÔNICA"));
    assert!(tags.is_empty());
}

#[test]
fn creatable_skips_known_option_with_other_accent_casing() {
    assert_eq!(creatable(&["Displasia coxofemoral", "Úlcera de córnea"], &[], "úlcera DE CÓRNEA"), None);
}
