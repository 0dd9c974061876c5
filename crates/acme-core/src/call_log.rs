//! # Call Log
//!
//! One record per carrier call, appended to a persistent sequence and never
//! modified afterwards.
//!
//! `mc_number` is stored exactly as received. A call with an ineligible or
//! unidentified carrier may carry a blank one.
//!
//! `outcome` and `sentiment` are open strings. The values the broker's own
//! tooling produces are listed in [`outcome`] and [`sentiment`]; anything
//! else is still accepted and stored verbatim.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError};
use crate::store::{JsonFileStore, Repository};

/// Known call outcomes.
pub mod outcome {
    pub const BOOKED: &str = "Booked";
    pub const NEGOTIATION_FAILED: &str = "Negotiation Failed";
    pub const CARRIER_INELIGIBLE: &str = "Carrier Ineligible";

    /// All documented outcomes.
    pub const ALL: [&str; 3] = [BOOKED, NEGOTIATION_FAILED, CARRIER_INELIGIBLE];
}

/// Known caller sentiments.
pub mod sentiment {
    pub const POSITIVE: &str = "Positive";
    pub const NEUTRAL: &str = "Neutral";
    pub const NEGATIVE: &str = "Negative";

    /// All documented sentiments.
    pub const ALL: [&str; 3] = [POSITIVE, NEUTRAL, NEGATIVE];
}

/// The outcome of a single negotiation or booking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CallLog {
    #[cfg_attr(feature = "openapi", schema(example = "123456"))]
    pub mc_number: String,
    #[serde(default)]
    pub load_id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Booked"))]
    pub outcome: String,
    #[cfg_attr(feature = "openapi", schema(example = "Positive"))]
    pub sentiment: String,
    pub negotiation_rounds: u32,
    #[serde(default)]
    pub final_rate: Option<f64>,
    pub call_duration_seconds: u64,
}

impl CallLog {
    /// Check the rules serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rate) = self.final_rate {
            if !rate.is_finite() {
                return Err(ValidationError::NonFiniteAmount {
                    field: "final_rate",
                });
            }
            if rate < 0.0 {
                return Err(ValidationError::NegativeAmount {
                    field: "final_rate",
                    value: rate,
                });
            }
        }
        Ok(())
    }

    /// Whether `outcome` is one of [`outcome::ALL`].
    pub fn has_known_outcome(&self) -> bool {
        outcome::ALL.contains(&self.outcome.as_str())
    }

    /// Whether `sentiment` is one of [`sentiment::ALL`].
    pub fn has_known_sentiment(&self) -> bool {
        sentiment::ALL.contains(&self.sentiment.as_str())
    }
}

/// Appends [`CallLog`] records to a repository.
///
/// Each append is a read-modify-write of the whole sequence. The recorder
/// holds a mutex across that cycle, so concurrent appends through the same
/// recorder (or its clones) never overwrite each other.
#[derive(Clone)]
pub struct CallLogRecorder {
    store: Arc<dyn Repository<CallLog>>,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for CallLogRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallLogRecorder").finish_non_exhaustive()
    }
}

impl CallLogRecorder {
    pub fn new(store: impl Repository<CallLog> + 'static) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a recorder backed by a JSON array file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::<CallLog>::new(path))
    }

    /// Append `log` after every previously recorded entry.
    ///
    /// Existing data that cannot be parsed is discarded with a warning and
    /// replaced by a sequence holding only `log`.
    pub fn append(&self, log: CallLog) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut records = self.read_tolerant()?;
        records.push(log);
        self.store.save(&records)
    }

    /// The recorded sequence, oldest first. Corrupt data reads as empty.
    pub fn records(&self) -> Result<Vec<CallLog>, StorageError> {
        let _guard = self.write_lock.lock();
        self.read_tolerant()
    }

    fn read_tolerant(&self) -> Result<Vec<CallLog>, StorageError> {
        match self.store.load() {
            Ok(records) => Ok(records),
            Err(err) if err.is_corrupt() => {
                tracing::warn!(error = %err, "call log store is corrupt; treating it as empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}
