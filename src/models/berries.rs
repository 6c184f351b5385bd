//! Berries, berry firmnesses and berry flavors

use serde::{Deserialize, Serialize};

use super::commons::{Name, NamedApiResource};

/// Berries are small fruits that can provide HP and status condition
/// restoration, stat enhancement, and even damage negation when eaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Berry {
    pub id: u32,
    pub name: String,
    /// Hours it takes the tree to grow one stage
    pub growth_time: u32,
    pub max_harvest: u32,
    pub natural_gift_power: u32,
    /// Size in millimeters
    pub size: u32,
    pub smoothness: u32,
    pub soil_dryness: u32,
    pub firmness: NamedApiResource,
    #[serde(default)]
    pub flavors: Vec<BerryFlavorMap>,
    pub item: NamedApiResource,
    pub natural_gift_type: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFlavorMap {
    pub potency: u32,
    pub flavor: NamedApiResource,
}

/// Berries can be soft or hard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFirmness {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub berries: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
}

/// Flavors determine whether a creature benefits or suffers from eating a
/// berry, based on its nature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryFlavor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub berries: Vec<FlavorBerryMap>,
    pub contest_type: NamedApiResource,
    #[serde(default)]
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorBerryMap {
    pub potency: u32,
    pub berry: NamedApiResource,
}
