use serde::{Deserialize, Serialize};

/// One POAP held by a wallet, as returned by `GET /actions/scan/{address}`.
///
/// The scan endpoint nests event metadata under `event`; token-level
/// fields do not feed scoring and are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoapToken {
    pub event: PoapEvent,
}

/// POAP event metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoapEvent {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
