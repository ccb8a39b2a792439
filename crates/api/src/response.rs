//! Shared response envelope types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` blocks to get
//! compile-time type safety and consistent serialization. Every success body
//! carries a `success` boolean per the API contract.

use faqd_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` envelope, used by the diagnostic endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response for a successful create or update: `{ success, id, data }`.
///
/// When the post-write read-back fails, the write itself has still committed,
/// so the operation is reported as a success with an explanatory `message`
/// and no `data` payload (degraded success).
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub success: bool,
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> MutationResponse<T> {
    /// A fully successful mutation with the authoritative persisted row.
    pub fn with_data(id: DbId, data: T) -> Self {
        Self {
            success: true,
            id,
            data: Some(data),
            message: None,
        }
    }

    /// A committed write whose read-back failed: success, no payload.
    pub fn degraded(id: DbId, message: impl Into<String>) -> Self {
        Self {
            success: true,
            id,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Response for a successful delete: `{ success, id }`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: DbId,
}
