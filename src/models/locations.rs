//! Locations, location areas, pal park areas and regions

use serde::{Deserialize, Serialize};

use super::commons::{GenerationGameIndex, Name, NamedApiResource, VersionEncounterDetail};

/// A place that can be visited within the games, like a city or a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub region: Option<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub game_indices: Vec<GenerationGameIndex>,
    #[serde(default)]
    pub areas: Vec<NamedApiResource>,
}

/// A section of a location, such as a floor in a building or cave, with its
/// own set of possible encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    #[serde(default)]
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    pub location: NamedApiResource,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterMethodRate {
    pub encounter_method: NamedApiResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersionDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterVersionDetails {
    pub rate: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedApiResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

/// An area used for grouping encounters in Pal Park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalParkArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_encounters: Vec<PalParkEncounterSpecies>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalParkEncounterSpecies {
    pub base_score: u32,
    pub rate: u32,
    pub pokemon_species: NamedApiResource,
}

/// An organized area of the world, usually distinguished by the species
/// that can be encountered within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub locations: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    pub main_generation: Option<NamedApiResource>,
    #[serde(default)]
    pub pokedexes: Vec<NamedApiResource>,
    #[serde(default)]
    pub version_groups: Vec<NamedApiResource>,
}
