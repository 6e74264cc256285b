//! Re-registration policy

use serde::{Deserialize, Serialize};

/// What the registry does when a key is bound a second time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebindingPolicy {
    /// Fail with `Error::AlreadyBound`
    #[default]
    Reject,
    /// Last registration wins
    Replace,
}
