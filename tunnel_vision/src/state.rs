//! Persisted coordinator state.
//!
//! The on-disk shape is `{"pendingNames": ["panel", ...]}` while a restore is
//! owed, or `{"pendingNames": null}` otherwise. The host persistence layer
//! owns where the JSON lives; this module only defines the shape and its
//! encoding.

use crate::error::{DecodeStateSnafu, EncodeStateSnafu, Result};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

/// Snapshot of a [`TunnelVision`](crate::TunnelVision) coordinator.
///
/// Round-trips through [`to_json`](Self::to_json) and
/// [`from_json`](Self::from_json) with identical toggle behavior on the other
/// side, provided the host re-registers the same providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedTunnelVision {
    /// Names owed a restoring toggle, or `None` when no restore is pending.
    pub pending_names: Option<Vec<String>>,
}

impl SerializedTunnelVision {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context(DecodeStateSnafu)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context(EncodeStateSnafu)
    }
}
