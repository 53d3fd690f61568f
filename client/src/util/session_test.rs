use super::*;

#[test]
fn parse_cookie_finds_named_value() {
    let jar = "theme=dark; vetcare_token=abc.def.ghi; other=1";
    assert_eq!(parse_cookie(jar, TOKEN_COOKIE), Some("abc.def.ghi".to_owned()));
}

#[test]
fn parse_cookie_ignores_prefix_matches() {
    assert_eq!(parse_cookie("vetcare_token_old=x", TOKEN_COOKIE), None);
}

#[test]
fn parse_cookie_treats_empty_value_as_missing() {
    assert_eq!(parse_cookie("vetcare_token=", TOKEN_COOKIE), None);
    assert_eq!(parse_cookie("", TOKEN_COOKIE), None);
}

#[test]
fn parse_cookie_keeps_equals_inside_value() {
    assert_eq!(parse_cookie("vetcare_token=a=b", TOKEN_COOKIE), Some("a=b".to_owned()));
}

#[test]
fn build_cookie_sets_path_age_and_samesite() {
    assert_eq!(
        build_cookie(TOKEN_COOKIE, "tok", TOKEN_MAX_AGE_SECS),
        "vetcare_token=tok; Path=/; Max-Age=604800; SameSite=Lax"
    );
}

#[test]
fn expired_cookie_zeroes_max_age() {
    assert_eq!(expired_cookie(TOKEN_COOKIE), "vetcare_token=; Path=/; Max-Age=0; SameSite=Lax");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_token_is_none_outside_browser() {
    assert_eq!(read_token(), None);
}
