//! Typed records for every resource the API exposes
//!
//! One module per group of endpoints. Fields mirror the upstream JSON schema;
//! anything the API may return as `null` is an `Option`, and unknown fields
//! are ignored so additions upstream never break parsing.
//!
//! # Module Structure
//!
//! - [`commons`] - References, localized names and other shared shapes
//! - [`berries`] - Berries, firmnesses and flavors
//! - [`contests`] - Contest types and effects
//! - [`encounters`] - Encounter methods and conditions
//! - [`evolution`] - Evolution chains (recursive) and triggers
//! - [`games`] - Generations, pokedexes, versions
//! - [`items`] - Items and their attributes, categories, pockets
//! - [`locations`] - Locations, areas, regions
//! - [`machines`] - Technical and hidden machines
//! - [`moves`] - Moves and their sub-resources
//! - [`pokemon`] - Creatures, species, abilities, stats, types
//! - [`lists`] - Index pages

pub mod berries;
pub mod commons;
pub mod contests;
pub mod encounters;
pub mod evolution;
pub mod games;
pub mod items;
pub mod lists;
pub mod locations;
pub mod machines;
pub mod moves;
pub mod pokemon;

pub use berries::{Berry, BerryFirmness, BerryFlavor};
pub use commons::{ApiResource, Language, Name, NamedApiResource};
pub use contests::{ContestEffect, ContestType, SuperContestEffect};
pub use encounters::{EncounterCondition, EncounterConditionValue, EncounterMethod};
pub use evolution::{ChainLink, EvolutionChain, EvolutionTrigger};
pub use games::{Generation, Pokedex, Version, VersionGroup};
pub use items::{Item, ItemAttribute, ItemCategory, ItemFlingEffect, ItemPocket};
pub use lists::{ApiResourceList, NamedApiResourceList};
pub use locations::{Location, LocationArea, PalParkArea, Region};
pub use machines::Machine;
pub use moves::{
    Move, MoveAilment, MoveBattleStyle, MoveCategory, MoveDamageClass, MoveLearnMethod,
    MoveTarget,
};
pub use pokemon::{
    Ability, Characteristic, EggGroup, Gender, GrowthRate, LocationAreaEncounter, Nature,
    PokeathlonStat, Pokemon, PokemonColor, PokemonForm, PokemonHabitat, PokemonShape,
    PokemonSpecies, Stat, Type,
};

use crate::resource::{Resource, ResourceKind};

macro_rules! impl_resource {
    ($( $record:ty => $kind:ident ),+ $(,)?) => {
        $(
            impl Resource for $record {
                const KIND: ResourceKind = ResourceKind::$kind;

                fn id(&self) -> u32 {
                    self.id
                }
            }
        )+
    };
}

impl_resource! {
    Berry => Berry,
    BerryFirmness => BerryFirmness,
    BerryFlavor => BerryFlavor,
    ContestType => ContestType,
    ContestEffect => ContestEffect,
    SuperContestEffect => SuperContestEffect,
    EncounterMethod => EncounterMethod,
    EncounterCondition => EncounterCondition,
    EncounterConditionValue => EncounterConditionValue,
    EvolutionChain => EvolutionChain,
    EvolutionTrigger => EvolutionTrigger,
    Generation => Generation,
    Pokedex => Pokedex,
    Version => Version,
    VersionGroup => VersionGroup,
    Item => Item,
    ItemAttribute => ItemAttribute,
    ItemCategory => ItemCategory,
    ItemFlingEffect => ItemFlingEffect,
    ItemPocket => ItemPocket,
    Location => Location,
    LocationArea => LocationArea,
    PalParkArea => PalParkArea,
    Region => Region,
    Machine => Machine,
    Move => Move,
    MoveAilment => MoveAilment,
    MoveBattleStyle => MoveBattleStyle,
    MoveCategory => MoveCategory,
    MoveDamageClass => MoveDamageClass,
    MoveLearnMethod => MoveLearnMethod,
    MoveTarget => MoveTarget,
    Ability => Ability,
    Characteristic => Characteristic,
    EggGroup => EggGroup,
    Gender => Gender,
    GrowthRate => GrowthRate,
    Nature => Nature,
    PokeathlonStat => PokeathlonStat,
    Pokemon => Pokemon,
    PokemonColor => PokemonColor,
    PokemonForm => PokemonForm,
    PokemonHabitat => PokemonHabitat,
    PokemonShape => PokemonShape,
    PokemonSpecies => PokemonSpecies,
    Stat => Stat,
    Type => Type,
    Language => Language,
}
