//! Cookie-backed session token storage.
//!
//! The token returned by `POST /api/sessions` is kept in a first-party
//! cookie so it survives reloads. Cookie string handling is pure and tested;
//! only `read_token`/`store_token`/`clear_token` touch `document.cookie`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub const TOKEN_COOKIE: &str = "vetcare_token";
pub const TOKEN_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Find `name` in a `document.cookie` string (`a=1; b=2`).
#[must_use]
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Cookie assignment string for storing `value`.
#[must_use]
pub fn build_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}

/// Cookie assignment string that deletes `name`.
#[must_use]
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast as _;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read the session token from the cookie jar. `None` on the server.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let cookies = html_document()?.cookie().ok()?;
        parse_cookie(&cookies, TOKEN_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(&build_cookie(TOKEN_COOKIE, token, TOKEN_MAX_AGE_SECS)).is_err() {
                log::warn!("failed to store session cookie");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&expired_cookie(TOKEN_COOKIE));
        }
    }
}
