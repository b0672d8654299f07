use serde::{Deserialize, Serialize};

/// One client row as shown in the listing. Built fresh per query result
/// row; never persisted by this layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ClientRecord {
    /// Company name concatenated with the secondary denomination field.
    pub display_name: String,
    pub city: String,
    /// Natural key of the client in the legacy ledger (`rifconto`).
    pub account_ref: String,
}
