//! # API Route Modules
//!
//! - `general`: unauthenticated welcome message.
//! - `loads`: load catalog search.
//! - `carriers`: FMCSA eligibility check.
//! - `call_log`: call outcome recording.
//!
//! Every module except `general` is mounted behind the auth middleware.

pub mod call_log;
pub mod carriers;
pub mod general;
pub mod loads;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
