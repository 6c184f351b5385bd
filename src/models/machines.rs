use serde::{Deserialize, Serialize};

use super::commons::NamedApiResource;

/// An item that teaches a move. Machines differ between version groups, so
/// one TM number does not map to a single machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: u32,
    pub item: NamedApiResource,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    pub version_group: NamedApiResource,
}
