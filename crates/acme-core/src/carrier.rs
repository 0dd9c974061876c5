//! # Carrier Eligibility
//!
//! The broker's verdict on whether a carrier may be offered a load. The
//! verdict is derived from the operating status the FMCSA registry reports;
//! fetching that status lives in `acme-fmcsa-client`.

use serde::{Deserialize, Serialize};

/// Registry operating status that disqualifies a carrier. Compared
/// case-sensitively.
pub const OUT_OF_SERVICE: &str = "OUT-OF-SERVICE";

pub const ACTIVE_DETAIL: &str = "Carrier is active and eligible";
pub const INACTIVE_DETAIL: &str = "Carrier is not active or out of service";
pub const NOT_FOUND_DETAIL: &str = "Carrier not found";

/// Result of a carrier check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Eligibility {
    pub eligible: bool,
    #[cfg_attr(feature = "openapi", schema(example = "Carrier is active and eligible"))]
    pub detail: String,
}

impl Eligibility {
    /// Verdict for a carrier the registry knows about.
    ///
    /// Only an explicit `OUT-OF-SERVICE` status disqualifies. A missing
    /// status is treated as active.
    pub fn from_operation_status(status: Option<&str>) -> Self {
        if status == Some(OUT_OF_SERVICE) {
            Self {
                eligible: false,
                detail: INACTIVE_DETAIL.to_string(),
            }
        } else {
            Self {
                eligible: true,
                detail: ACTIVE_DETAIL.to_string(),
            }
        }
    }

    /// Verdict for an MC number the registry does not recognise.
    pub fn not_found() -> Self {
        Self {
            eligible: false,
            detail: NOT_FOUND_DETAIL.to_string(),
        }
    }
}
