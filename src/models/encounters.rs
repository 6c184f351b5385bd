//! Encounter methods, conditions and condition values

use serde::{Deserialize, Serialize};

use super::commons::{Name, NamedApiResource};

/// A way the player can encounter wild creatures, e.g. walking in tall grass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterMethod {
    pub id: u32,
    pub name: String,
    pub order: i32,
    #[serde(default)]
    pub names: Vec<Name>,
}

/// Something that affects which creatures appear in the wild, e.g. time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterCondition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub values: Vec<NamedApiResource>,
}

/// One state of an encounter condition, e.g. day or night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConditionValue {
    pub id: u32,
    pub name: String,
    pub condition: NamedApiResource,
    #[serde(default)]
    pub names: Vec<Name>,
}
