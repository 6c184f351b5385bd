//! Resource Registry - the resource types exposed by the API
//!
//! Each [`ResourceKind`] knows its endpoint path segment, a human readable
//! name, and whether the API addresses it by name as well as by id.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

macro_rules! resource_kinds {
    ($( $variant:ident => $endpoint:literal, $display:literal, $named:literal; )+) => {
        /// A category of entity exposed by the API
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceKind {
            $( $variant, )+
        }

        impl ResourceKind {
            /// Every supported resource type, in endpoint documentation order
            pub const ALL: &'static [ResourceKind] = &[ $( ResourceKind::$variant, )+ ];

            /// Path segment used in request URLs, e.g. `pokemon-species`
            pub fn endpoint(self) -> &'static str {
                match self {
                    $( ResourceKind::$variant => $endpoint, )+
                }
            }

            pub fn display_name(self) -> &'static str {
                match self {
                    $( ResourceKind::$variant => $display, )+
                }
            }

            /// Whether the API also accepts a name in place of the numeric id
            pub fn accepts_names(self) -> bool {
                match self {
                    $( ResourceKind::$variant => $named, )+
                }
            }

            /// Look up a resource type by its endpoint path segment
            pub fn from_endpoint(endpoint: &str) -> Option<Self> {
                match endpoint {
                    $( $endpoint => Some(ResourceKind::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

resource_kinds! {
    // Berries
    Berry => "berry", "Berry", true;
    BerryFirmness => "berry-firmness", "Berry Firmness", true;
    BerryFlavor => "berry-flavor", "Berry Flavor", true;
    // Contests
    ContestType => "contest-type", "Contest Type", true;
    ContestEffect => "contest-effect", "Contest Effect", false;
    SuperContestEffect => "super-contest-effect", "Super Contest Effect", false;
    // Encounters
    EncounterMethod => "encounter-method", "Encounter Method", true;
    EncounterCondition => "encounter-condition", "Encounter Condition", true;
    EncounterConditionValue => "encounter-condition-value", "Encounter Condition Value", true;
    // Evolution
    EvolutionChain => "evolution-chain", "Evolution Chain", false;
    EvolutionTrigger => "evolution-trigger", "Evolution Trigger", true;
    // Games
    Generation => "generation", "Generation", true;
    Pokedex => "pokedex", "Pokedex", true;
    Version => "version", "Version", true;
    VersionGroup => "version-group", "Version Group", true;
    // Items
    Item => "item", "Item", true;
    ItemAttribute => "item-attribute", "Item Attribute", true;
    ItemCategory => "item-category", "Item Category", true;
    ItemFlingEffect => "item-fling-effect", "Item Fling Effect", true;
    ItemPocket => "item-pocket", "Item Pocket", true;
    // Locations
    Location => "location", "Location", true;
    LocationArea => "location-area", "Location Area", true;
    PalParkArea => "pal-park-area", "Pal Park Area", true;
    Region => "region", "Region", true;
    // Machines
    Machine => "machine", "Machine", false;
    // Moves
    Move => "move", "Move", true;
    MoveAilment => "move-ailment", "Move Ailment", true;
    MoveBattleStyle => "move-battle-style", "Move Battle Style", true;
    MoveCategory => "move-category", "Move Category", true;
    MoveDamageClass => "move-damage-class", "Move Damage Class", true;
    MoveLearnMethod => "move-learn-method", "Move Learn Method", true;
    MoveTarget => "move-target", "Move Target", true;
    // Pokemon
    Ability => "ability", "Ability", true;
    Characteristic => "characteristic", "Characteristic", false;
    EggGroup => "egg-group", "Egg Group", true;
    Gender => "gender", "Gender", true;
    GrowthRate => "growth-rate", "Growth Rate", true;
    Nature => "nature", "Nature", true;
    PokeathlonStat => "pokeathlon-stat", "Pokeathlon Stat", true;
    Pokemon => "pokemon", "Pokemon", true;
    PokemonColor => "pokemon-color", "Pokemon Color", true;
    PokemonForm => "pokemon-form", "Pokemon Form", true;
    PokemonHabitat => "pokemon-habitat", "Pokemon Habitat", true;
    PokemonShape => "pokemon-shape", "Pokemon Shape", true;
    PokemonSpecies => "pokemon-species", "Pokemon Species", true;
    Stat => "stat", "Stat", true;
    Type => "type", "Type", true;
    // Utility
    Language => "language", "Language", true;
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_matches('/').to_ascii_lowercase().replace('_', "-");
        ResourceKind::from_endpoint(&normalized).ok_or_else(|| Error::UnknownResource(s.to_string()))
    }
}

/// A top-level record returned by a single-resource endpoint
pub trait Resource: DeserializeOwned + Serialize + Send + 'static {
    const KIND: ResourceKind;

    /// Numeric id of this record
    fn id(&self) -> u32;
}

/// Get all resource endpoints (for help output and autocomplete)
pub fn get_all_resource_keys() -> Vec<&'static str> {
    ResourceKind::ALL.iter().map(|k| k.endpoint()).collect()
}
