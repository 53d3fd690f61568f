use super::*;

#[test]
fn stored_choice_wins_over_system() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn system_preference_used_without_valid_stored_choice() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(Some("sepia"), false), Theme::Light);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_defaults_to_light_and_toggle_still_flips() {
    assert_eq!(read_preference(), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}
