//! Utility records shared by every resource group
//!
//! Resources reference each other through [`NamedApiResource`] and
//! [`ApiResource`]: a URL (and a name, when the target has one) pointing at
//! another endpoint. The helpers here recover the target's type and id from
//! that URL so references can be followed without string formatting.

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceKind};

/// Split a resource URL into its endpoint and trailing id segments
/// e.g., "https://pokeapi.co/api/v2/pokemon-species/25/" -> ("pokemon-species", 25)
fn split_resource_url(url: &str) -> Option<(&str, u32)> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
    let id = segments.next()?.parse().ok()?;
    let endpoint = segments.next()?;
    Some((endpoint, id))
}

/// Reference to a resource that has a name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

impl NamedApiResource {
    /// Numeric id of the referenced resource
    pub fn id(&self) -> Option<u32> {
        split_resource_url(&self.url).map(|(_, id)| id)
    }

    /// Endpoint path segment of the referenced resource, e.g. `pokemon-species`
    pub fn endpoint(&self) -> Option<&str> {
        split_resource_url(&self.url).map(|(endpoint, _)| endpoint)
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        self.endpoint().and_then(ResourceKind::from_endpoint)
    }

    /// True when this reference points at a `T` record
    pub fn points_to<T: Resource>(&self) -> bool {
        self.kind() == Some(T::KIND)
    }
}

/// Reference to a resource addressed by id only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

impl ApiResource {
    pub fn id(&self) -> Option<u32> {
        split_resource_url(&self.url).map(|(_, id)| id)
    }

    pub fn endpoint(&self) -> Option<&str> {
        split_resource_url(&self.url).map(|(endpoint, _)| endpoint)
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        self.endpoint().and_then(ResourceKind::from_endpoint)
    }

    pub fn points_to<T: Resource>(&self) -> bool {
        self.kind() == Some(T::KIND)
    }
}

/// A localized name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedApiResource,
}

/// Languages for translations of API resource information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: u32,
    pub name: String,
    /// Whether or not the games are published in this language
    pub official: bool,
    /// Two-letter code of the country where this language is spoken
    pub iso639: String,
    /// Two-letter code of the language
    pub iso3166: String,
    #[serde(default)]
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub description: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub min_level: u32,
    pub max_level: u32,
    #[serde(default)]
    pub condition_values: Vec<NamedApiResource>,
    /// Percent chance that this encounter will occur
    pub chance: u32,
    pub method: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    /// Absent on contest effect entries
    #[serde(default)]
    pub version: Option<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationGameIndex {
    pub game_index: u32,
    pub generation: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineVersionDetail {
    pub machine: ApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerboseEffect {
    pub effect: String,
    pub short_effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedApiResource,
    pub max_chance: u32,
    #[serde(default)]
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGameIndex {
    pub game_index: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGroupFlavorText {
    pub text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}
