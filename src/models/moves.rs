//! Moves and the move sub-resources: ailments, battle styles, categories,
//! damage classes, learn methods and targets

use serde::{Deserialize, Serialize};

use super::commons::{
    ApiResource, Description, MachineVersionDetail, Name, NamedApiResource, VerboseEffect,
};
use super::pokemon::AbilityEffectChange;

/// A skill used in battle. Some moves can also be used outside of battle,
/// usually to clear obstacles or explore new areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    /// None for moves that never miss
    pub accuracy: Option<u32>,
    /// Percent chance the secondary effect occurs
    pub effect_chance: Option<u32>,
    pub pp: Option<u32>,
    /// Between -8 and 8
    pub priority: i32,
    /// None for status moves
    pub power: Option<u32>,
    pub contest_combos: Option<ContestComboSets>,
    pub contest_type: Option<NamedApiResource>,
    pub contest_effect: Option<ApiResource>,
    pub damage_class: NamedApiResource,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub effect_changes: Vec<AbilityEffectChange>,
    #[serde(default)]
    pub flavor_text_entries: Vec<MoveFlavorText>,
    pub generation: NamedApiResource,
    #[serde(default)]
    pub learned_by_pokemon: Vec<NamedApiResource>,
    #[serde(default)]
    pub machines: Vec<MachineVersionDetail>,
    pub meta: Option<MoveMetaData>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub past_values: Vec<PastMoveStatValues>,
    #[serde(default)]
    pub stat_changes: Vec<MoveStatChange>,
    pub super_contest_effect: Option<ApiResource>,
    pub target: NamedApiResource,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestComboSets {
    pub normal: ContestComboDetail,
    #[serde(rename = "super")]
    pub super_: ContestComboDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestComboDetail {
    pub use_before: Option<Vec<NamedApiResource>>,
    pub use_after: Option<Vec<NamedApiResource>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveMetaData {
    pub ailment: NamedApiResource,
    pub category: NamedApiResource,
    pub min_hits: Option<u32>,
    pub max_hits: Option<u32>,
    pub min_turns: Option<u32>,
    pub max_turns: Option<u32>,
    /// HP drain (positive) or recoil (negative), percent of damage done
    pub drain: i32,
    /// Percent of the user's max HP healed
    pub healing: i32,
    pub crit_rate: u32,
    pub ailment_chance: u32,
    pub flinch_chance: u32,
    pub stat_chance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatChange {
    pub change: i32,
    pub stat: NamedApiResource,
}

/// Stat values a move had before the given version group changed them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastMoveStatValues {
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(rename = "type")]
    pub type_: Option<NamedApiResource>,
    pub version_group: NamedApiResource,
}

/// A status condition caused by moves during battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveAilment {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
}

/// Style of a move when used in the Battle Palace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveBattleStyle {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
}

/// Very general categories that loosely group move effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCategory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

/// Physical, special, or non-damaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDamageClass {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveLearnMethod {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub version_groups: Vec<NamedApiResource>,
}

/// What a move can be directed at: creatures, the field, or other moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveTarget {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: &str, endpoint: &str, id: u32) -> serde_json::Value {
        json!({"name": name, "url": format!("https://pokeapi.co/api/v2/{}/{}/", endpoint, id)})
    }

    #[test]
    fn test_status_move_has_no_power() {
        let growl: Move = serde_json::from_value(json!({
            "id": 45,
            "name": "growl",
            "accuracy": 100,
            "effect_chance": null,
            "pp": 40,
            "priority": 0,
            "power": null,
            "contest_combos": {
                "normal": {"use_before": null, "use_after": null},
                "super": {"use_before": null, "use_after": null}
            },
            "contest_type": named("cute", "contest-type", 3),
            "contest_effect": {"url": "https://pokeapi.co/api/v2/contest-effect/4/"},
            "damage_class": named("status", "move-damage-class", 1),
            "effect_entries": [],
            "effect_changes": [],
            "flavor_text_entries": [],
            "generation": named("generation-i", "generation", 1),
            "machines": [],
            "meta": {
                "ailment": named("none", "move-ailment", 0),
                "category": named("net-good-stats", "move-category", 2),
                "min_hits": null,
                "max_hits": null,
                "min_turns": null,
                "max_turns": null,
                "drain": 0,
                "healing": 0,
                "crit_rate": 0,
                "ailment_chance": 0,
                "flinch_chance": 0,
                "stat_chance": 100
            },
            "names": [],
            "past_values": [],
            "stat_changes": [{"change": -1, "stat": named("attack", "stat", 2)}],
            "super_contest_effect": {"url": "https://pokeapi.co/api/v2/super-contest-effect/5/"},
            "target": named("all-opponents", "move-target", 11),
            "type": named("normal", "type", 1)
        }))
        .unwrap();

        assert_eq!(growl.id, 45);
        assert_eq!(growl.power, None);
        assert_eq!(growl.stat_changes[0].change, -1);
        assert_eq!(growl.type_.name, "normal");
        assert_eq!(growl.contest_effect.unwrap().id(), Some(4));
        assert!(growl.contest_combos.unwrap().super_.use_after.is_none());
    }
}
