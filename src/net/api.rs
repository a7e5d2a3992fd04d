//! REST helpers for the authentication service.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`], since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages render
//! [`ApiError::user_message`] in their banner; the server's own `message`
//! wins over the page's fallback text when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DriverRegistration, LoginRequest, LoginResponse, UserRegistration};
use crate::config::AppConfig;
use crate::state::persona::Persona;
use crate::state::session::SessionContext;
use crate::util::storage::KeyValueStore;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// A file selected in the browser, attached to a multipart body.
#[cfg(feature = "csr")]
pub type Attachment = web_sys::File;
#[cfg(not(feature = "csr"))]
pub type Attachment = ();

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text for the error banner.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(config: &AppConfig, persona: Persona) -> String {
    config.endpoint(&format!("{}/login", persona.api_segment()))
}

#[cfg(any(test, feature = "csr"))]
fn register_endpoint(config: &AppConfig, persona: Persona) -> String {
    config.endpoint(&format!("{}/register", persona.api_segment()))
}

/// Map a non-2xx response to [`ApiError::Status`], lifting the service's
/// `message` out of the body when it has one.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_default()
        .filter(|m| !m.trim().is_empty());
    ApiError::Status { status, message }
}

#[cfg(feature = "csr")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("auth service returned {status}");
    Err(status_error(status, &body))
}

#[cfg(feature = "csr")]
fn network_error(e: gloo_net::Error) -> ApiError {
    log::warn!("auth service unreachable: {e}");
    ApiError::Network(e.to_string())
}

/// Sign in via `POST {base}/{users|drivers}/login` and mirror the returned
/// user (and token) into the session.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-2xx status, or a body
/// without a user record.
pub async fn login<S: KeyValueStore>(
    config: &AppConfig,
    session: &SessionContext<S>,
    persona: Persona,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint(config, persona))
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let resp = check_status(resp).await?;
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        let Some(user) = &body.user else {
            return Err(ApiError::Decode("response has no user".to_owned()));
        };
        if let Err(e) = session.sign_in(user, body.token.as_deref()) {
            log::warn!("failed to store session: {e}");
        }
        log::info!("{} signed in", persona.api_segment());
        Ok(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session, persona, request);
        Err(ApiError::Unavailable)
    }
}

/// Register a rider via `POST {base}/users/register` with a JSON body.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn user_register(config: &AppConfig, body: &UserRegistration) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&register_endpoint(config, Persona::Rider))
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status(resp).await?;
        log::info!("rider registered");
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, body);
        Err(ApiError::Unavailable)
    }
}

/// Register a driver via `POST {base}/drivers/register` as multipart form
/// data. `attachment_for` resolves each file part to the selected file; parts
/// it cannot resolve are skipped.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn driver_register<F>(config: &AppConfig, body: &DriverRegistration, attachment_for: F) -> Result<(), ApiError>
where
    F: Fn(&str) -> Option<Attachment>,
{
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Unavailable)?;
        for (name, value) in &body.fields {
            form.append_with_str(name, value).map_err(|_| ApiError::Unavailable)?;
        }
        for part in &body.files {
            if let Some(file) = attachment_for(part.field) {
                form.append_with_blob_and_filename(part.field, &file, &part.file_name)
                    .map_err(|_| ApiError::Unavailable)?;
            }
        }
        let resp = gloo_net::http::Request::post(&register_endpoint(config, Persona::Driver))
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status(resp).await?;
        log::info!("driver registered");
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, body, attachment_for);
        Err(ApiError::Unavailable)
    }
}

/// Sign out locally: the service keeps no session for this client.
pub fn logout<S: KeyValueStore>(session: &SessionContext<S>) {
    session.sign_out();
    log::info!("signed out");
}
