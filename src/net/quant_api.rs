//! REST helpers for the `/api/v1/quant` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`; callers log failures and keep
//! last-known-good state rather than surfacing errors to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "quant_api_test.rs"]
mod quant_api_test;

use super::types::Strategy;
use super::types::StrategyStatus;
#[cfg(feature = "hydrate")]
use super::types::{CreateStrategyRequest, GenerateCodeRequest, GenerateCodeResponse, UpdateStatusRequest};

const STRATEGIES_ENDPOINT: &str = "/api/v1/quant/strategies";
const GENERATE_ENDPOINT: &str = "/api/v1/quant/strategies/generate";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn strategy_endpoint(id: &str) -> String {
    format!("{STRATEGIES_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(id: &str) -> String {
    format!("{STRATEGIES_ENDPOINT}/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("strategy list failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn generate_failed_message(status: u16) -> String {
    format!("code generation failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16) -> String {
    format!("strategy create failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_failed_message(status: u16) -> String {
    format!("strategy delete failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_update_failed_message(status: u16) -> String {
    format!("status update failed: {status}")
}

/// Fetch the full strategy collection from `GET /strategies`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn list_strategies() -> Result<Vec<Strategy>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STRATEGIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<Strategy>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Request generated strategy code for a description via
/// `POST /strategies/generate`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn generate_code(description: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = GenerateCodeRequest {
            description: description.to_owned(),
        };
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(generate_failed_message(resp.status()));
        }
        let body: GenerateCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = description;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Persist a new strategy via `POST /strategies`.
///
/// The server echoes the created strategy; the echo is discarded here and
/// the caller reconciles via a full listing refetch, so server-assigned
/// `id`/`created_at` values are never guessed client-side.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn create_strategy(name: &str, description: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = CreateStrategyRequest {
            name: name.to_owned(),
            description: description.to_owned(),
            code: code.to_owned(),
        };
        let resp = gloo_net::http::Request::post(STRATEGIES_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description, code);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Delete a strategy via `DELETE /strategies/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status (including 404 for an unknown id).
pub async fn delete_strategy(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = strategy_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Update a strategy's lifecycle status via `PATCH /strategies/{id}/status`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn update_status(id: &str, status: StrategyStatus) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = status_endpoint(id);
        let payload = UpdateStatusRequest { status };
        let resp = gloo_net::http::Request::patch(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_update_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err(NOT_AVAILABLE.to_owned())
    }
}
