//! Wire DTOs for the `/api/v1/quant` boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads exactly so serde round-trips
//! stay lossless. The server owns every field of [`Strategy`]; the client
//! never fabricates `id`, `created_at`, or `status` values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a saved strategy.
///
/// Exactly two values are valid on the wire: `"active"` and `"inactive"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyStatus {
    Active,
    Inactive,
}

impl StrategyStatus {
    /// The opposite status, for toggle controls.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// The exact string carried on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A saved trading strategy as returned by `GET /api/v1/quant/strategies`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Opaque server-assigned identifier.
    pub id: String,
    /// Display name chosen at save time.
    pub name: String,
    /// Natural-language description the code was generated from.
    pub description: String,
    /// Generated or hand-edited strategy source text.
    pub code: String,
    /// Whether the strategy is currently enabled for execution.
    pub status: StrategyStatus,
    /// Server-assigned ISO 8601 creation timestamp; immutable.
    pub created_at: String,
}

/// Body for `POST /strategies/generate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateCodeRequest {
    pub description: String,
}

/// Response body of `POST /strategies/generate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateCodeResponse {
    pub code: String,
}

/// Body for `POST /strategies`.
///
/// The server's echo response (assigned id etc.) is deliberately ignored;
/// the cache reconciles through a full listing refetch instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateStrategyRequest {
    pub name: String,
    pub description: String,
    pub code: String,
}

/// Body for `PATCH /strategies/{id}/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: StrategyStatus,
}
