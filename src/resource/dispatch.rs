//! Runtime dispatch
//!
//! Maps a [`ResourceKind`] chosen at runtime (e.g. from the command line) to
//! its concrete record type, so the response is validated against the typed
//! schema before being handed back as JSON.

use super::identifier::Identifier;
use super::registry::{Resource, ResourceKind};
use crate::api::{CachedClient, PokeClient};
use crate::error::{Error, Result};
use crate::models;
use serde_json::Value;
use std::future::Future;

/// Anything that can fetch a typed record by identifier
pub trait RecordSource {
    fn fetch<T: Resource>(&self, id: Identifier) -> impl Future<Output = Result<T>>;
}

impl RecordSource for PokeClient {
    fn fetch<T: Resource>(&self, id: Identifier) -> impl Future<Output = Result<T>> {
        self.get::<T>(id)
    }
}

impl RecordSource for CachedClient {
    fn fetch<T: Resource>(&self, id: Identifier) -> impl Future<Output = Result<T>> {
        self.get::<T>(id)
    }
}

fn to_json<T: Resource>(record: T) -> Result<Value> {
    serde_json::to_value(&record).map_err(|source| Error::Decode {
        url: T::KIND.endpoint().to_string(),
        source,
    })
}

/// Fetch a resource of a runtime-chosen type, parse it into that type's
/// record, and return the record as JSON
pub async fn fetch_record_json<S: RecordSource>(
    source: &S,
    kind: ResourceKind,
    id: Identifier,
) -> Result<Value> {
    tracing::debug!("fetch_record_json: kind={}, id={}", kind, id);

    macro_rules! typed {
        ($($variant:ident),+ $(,)?) => {
            match kind {
                $( ResourceKind::$variant => to_json(source.fetch::<models::$variant>(id).await?), )+
            }
        };
    }

    typed!(
        Berry,
        BerryFirmness,
        BerryFlavor,
        ContestType,
        ContestEffect,
        SuperContestEffect,
        EncounterMethod,
        EncounterCondition,
        EncounterConditionValue,
        EvolutionChain,
        EvolutionTrigger,
        Generation,
        Pokedex,
        Version,
        VersionGroup,
        Item,
        ItemAttribute,
        ItemCategory,
        ItemFlingEffect,
        ItemPocket,
        Location,
        LocationArea,
        PalParkArea,
        Region,
        Machine,
        Move,
        MoveAilment,
        MoveBattleStyle,
        MoveCategory,
        MoveDamageClass,
        MoveLearnMethod,
        MoveTarget,
        Ability,
        Characteristic,
        EggGroup,
        Gender,
        GrowthRate,
        Nature,
        PokeathlonStat,
        Pokemon,
        PokemonColor,
        PokemonForm,
        PokemonHabitat,
        PokemonShape,
        PokemonSpecies,
        Stat,
        Type,
        Language,
    )
}
