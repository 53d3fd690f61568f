//! REST API helpers for the records API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token from the cookie attached as a bearer header.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are mapped through `ApiError::from_status` so pages can
//! show the server's message and react to `Unauthorized` uniformly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    LoginPayload, Page, PasswordPayload, Patient, PatientPayload, PatientRecord, ProfilePayload, RecordKind,
    RegisterPayload, SessionResponse, User,
};
use crate::state::feed::FeedQuery;

pub(crate) const SESSIONS_ENDPOINT: &str = "/api/sessions";
pub(crate) const USERS_ENDPOINT: &str = "/api/users";
pub(crate) const ME_ENDPOINT: &str = "/api/users/me";
pub(crate) const PASSWORD_ENDPOINT: &str = "/api/users/me/password";
pub(crate) const PATIENTS_ENDPOINT: &str = "/api/patients";

pub(crate) fn patient_path(id: &str) -> String {
    format!("{PATIENTS_ENDPOINT}/{id}")
}

pub(crate) fn records_path(kind: RecordKind, patient_id: &str) -> String {
    format!("{PATIENTS_ENDPOINT}/{patient_id}/{}", kind.path_segment())
}

pub(crate) fn record_path(kind: RecordKind, patient_id: &str, id: &str) -> String {
    format!("{}/{id}", records_path(kind, patient_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::read_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("api {} -> {status}", resp.url());
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str, params: &[(&'static str, String)]) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authorized(gloo_net::http::Request::get(url)).query(params.iter().map(|(k, v)| (*k, v.as_str())));
        let resp = dispatch(builder.build()).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, params);
        Err(ApiError::Unavailable)
    }
}

async fn post_json<T: DeserializeOwned, B: Serialize>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(authorized(gloo_net::http::Request::post(url)).json(body)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

async fn put_json<T: DeserializeOwned, B: Serialize>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(authorized(gloo_net::http::Request::put(url)).json(body)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

async fn put_no_content<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(authorized(gloo_net::http::Request::put(url)).json(body)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

async fn delete(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(authorized(gloo_net::http::Request::delete(url)).build()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// SESSION + USERS
// =============================================================================

/// Exchange credentials for a session token via `POST /api/sessions`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for bad credentials, or any transport error.
pub async fn login(payload: &LoginPayload) -> Result<SessionResponse, ApiError> {
    post_json(SESSIONS_ENDPOINT, payload).await
}

/// Create a staff account via `POST /api/users`.
///
/// # Errors
///
/// Returns `ApiError::Validation` when the API rejects the account (e.g. duplicate email).
pub async fn register(payload: &RegisterPayload) -> Result<User, ApiError> {
    post_json(USERS_ENDPOINT, payload).await
}

/// Fetch the user the current token belongs to.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the token is missing or rejected.
pub async fn fetch_me() -> Result<User, ApiError> {
    get_json(ME_ENDPOINT, &[]).await
}

/// Update the current user's profile.
///
/// # Errors
///
/// Returns the API or transport error.
pub async fn update_profile(payload: &ProfilePayload) -> Result<User, ApiError> {
    put_json(ME_ENDPOINT, payload).await
}

/// Change the current user's password.
///
/// # Errors
///
/// Returns `ApiError::Validation` when the current password is wrong.
pub async fn change_password(payload: &PasswordPayload) -> Result<(), ApiError> {
    put_no_content(PASSWORD_ENDPOINT, payload).await
}

// =============================================================================
// PATIENTS
// =============================================================================

/// Fetch one feed page.
///
/// # Errors
///
/// Returns the API or transport error.
pub async fn list_patients(query: &FeedQuery) -> Result<Page<Patient>, ApiError> {
    get_json(PATIENTS_ENDPOINT, &query.to_params()).await
}

/// # Errors
///
/// Returns `ApiError::NotFound` for an unknown id.
pub async fn fetch_patient(id: &str) -> Result<Patient, ApiError> {
    get_json(&patient_path(id), &[]).await
}

/// # Errors
///
/// Returns the API or transport error.
pub async fn create_patient(payload: &PatientPayload) -> Result<Patient, ApiError> {
    post_json(PATIENTS_ENDPOINT, payload).await
}

/// # Errors
///
/// Returns the API or transport error.
pub async fn update_patient(id: &str, payload: &PatientPayload) -> Result<Patient, ApiError> {
    put_json(&patient_path(id), payload).await
}

/// # Errors
///
/// Returns the API or transport error.
pub async fn delete_patient(id: &str) -> Result<(), ApiError> {
    delete(&patient_path(id)).await
}

// =============================================================================
// PATIENT RECORDS
// =============================================================================

/// List one record collection of a patient, newest first.
///
/// # Errors
///
/// Returns the API or transport error.
pub async fn list_records<R: PatientRecord>(patient_id: &str) -> Result<Vec<R>, ApiError> {
    let mut records: Vec<R> = get_json(&records_path(R::KIND, patient_id), &[]).await?;
    super::types::sort_newest_first(&mut records);
    Ok(records)
}

/// # Errors
///
/// Returns the API or transport error.
pub async fn create_record<R: PatientRecord>(patient_id: &str, payload: &R::Payload) -> Result<R, ApiError> {
    post_json(&records_path(R::KIND, patient_id), payload).await
}

/// # Errors
///
/// Returns the API or transport error.
pub async fn update_record<R: PatientRecord>(patient_id: &str, id: &str, payload: &R::Payload) -> Result<R, ApiError> {
    put_json(&record_path(R::KIND, patient_id, id), payload).await
}

/// # Errors
///
/// Returns the API or transport error.
pub async fn delete_record(kind: RecordKind, patient_id: &str, id: &str) -> Result<(), ApiError> {
    delete(&record_path(kind, patient_id, id)).await
}
