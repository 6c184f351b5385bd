//! Generations, pokedexes, versions and version groups

use serde::{Deserialize, Serialize};

use super::commons::{Description, Name, NamedApiResource};

/// A grouping of games by the creatures, moves, abilities and types they
/// introduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub abilities: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    pub main_region: Option<NamedApiResource>,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
    #[serde(default)]
    pub types: Vec<NamedApiResource>,
    #[serde(default)]
    pub version_groups: Vec<NamedApiResource>,
}

/// A regional (or national) encyclopedia listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokedex {
    pub id: u32,
    pub name: String,
    pub is_main_series: bool,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_entries: Vec<PokemonEntry>,
    /// None for the national dex
    pub region: Option<NamedApiResource>,
    #[serde(default)]
    pub version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub entry_number: u32,
    pub pokemon_species: NamedApiResource,
}

/// A single game release, e.g. Red, Blue or Yellow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    pub version_group: NamedApiResource,
}

/// Highly similar versions of the games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGroup {
    pub id: u32,
    pub name: String,
    pub order: i32,
    pub generation: NamedApiResource,
    #[serde(default)]
    pub move_learn_methods: Vec<NamedApiResource>,
    #[serde(default)]
    pub pokedexes: Vec<NamedApiResource>,
    #[serde(default)]
    pub regions: Vec<NamedApiResource>,
    #[serde(default)]
    pub versions: Vec<NamedApiResource>,
}
