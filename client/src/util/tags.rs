//! Creatable multi-select tag helpers.
//!
//! Tags are compared case-insensitively but stored with the casing the user
//! first typed.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

/// Conditions offered as suggestions before the user types their own.
pub const KNOWN_CONDITIONS: &[&str] = &[
    "Allergy",
    "Arthritis",
    "Chronic kidney disease",
    "Dermatitis",
    "Diabetes",
    "Epilepsy",
    "Heart murmur",
    "Hypothyroidism",
    "Obesity",
    "Otitis",
];

pub const MAX_SUGGESTIONS: usize = 6;

/// Trim and collapse inner whitespace. Empty input yields `None`.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

/// Append `raw` unless it is blank or already present. Returns whether the
/// list changed.
pub fn add_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    let Some(tag) = normalize_tag(raw) else {
        return false;
    };
    if contains_tag(tags, &tag) {
        return false;
    }
    tags.push(tag);
    true
}

pub fn remove_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let before = tags.len();
    tags.retain(|t| !same_tag(t, tag));
    before != tags.len()
}

#[must_use]
pub fn contains_tag(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|t| same_tag(t, tag))
}

/// Unicode case-insensitive equality, so "Otite crônica" matches "OTITE CRÔNICA".
fn same_tag(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Options matching `query` (substring, case-insensitive) that are not yet
/// selected, capped at `MAX_SUGGESTIONS`.
#[must_use]
pub fn suggest(options: &[&str], selected: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|opt| !contains_tag(selected, opt))
        .filter(|opt| needle.is_empty() || opt.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|opt| (*opt).to_owned())
        .collect()
}

/// The "create" entry offered for `query`: its normalized form, unless that
/// tag is already selected or is one of `options`.
#[must_use]
pub fn creatable(options: &[&str], selected: &[String], query: &str) -> Option<String> {
    let tag = normalize_tag(query)?;
    let known = options.iter().any(|opt| same_tag(opt, &tag));
    (!known && !contains_tag(selected, &tag)).then_some(tag)
}
