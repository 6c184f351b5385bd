//! Items, item attributes, categories, fling effects and pockets

use serde::{Deserialize, Serialize};

use super::commons::{
    ApiResource, Description, Effect, GenerationGameIndex, MachineVersionDetail, Name,
    NamedApiResource, VerboseEffect, VersionGroupFlavorText,
};

/// An object the player can pick up, keep in the bag and use in some manner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Price when bought from a shop
    pub cost: u32,
    /// Power of the move Fling when used with this item
    pub fling_power: Option<u32>,
    pub fling_effect: Option<NamedApiResource>,
    #[serde(default)]
    pub attributes: Vec<NamedApiResource>,
    pub category: NamedApiResource,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub flavor_text_entries: Vec<VersionGroupFlavorText>,
    #[serde(default)]
    pub game_indices: Vec<GenerationGameIndex>,
    #[serde(default)]
    pub names: Vec<Name>,
    pub sprites: ItemSprites,
    #[serde(default)]
    pub held_by_pokemon: Vec<ItemHolderPokemon>,
    /// Evolution chain this item triggers a baby for
    pub baby_trigger_for: Option<ApiResource>,
    #[serde(default)]
    pub machines: Vec<MachineVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSprites {
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHolderPokemon {
    pub pokemon: NamedApiResource,
    #[serde(default)]
    pub version_details: Vec<ItemHolderPokemonVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHolderPokemonVersionDetail {
    pub rarity: u32,
    pub version: NamedApiResource,
}

/// Particular aspects of items, e.g. "usable in battle" or "consumable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub items: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

/// Determines where items are placed in the bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub items: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    pub pocket: NamedApiResource,
}

/// The various effects of the move Fling when used with different items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFlingEffect {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<Effect>,
    #[serde(default)]
    pub items: Vec<NamedApiResource>,
}

/// A pocket within the bag used for storing items by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPocket {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_with_null_fling_and_sprite() {
        let item: Item = serde_json::from_value(json!({
            "id": 1,
            "name": "master-ball",
            "cost": 0,
            "fling_power": null,
            "fling_effect": null,
            "attributes": [
                {"name": "countable", "url": "https://pokeapi.co/api/v2/item-attribute/1/"}
            ],
            "category": {"name": "standard-balls", "url": "https://pokeapi.co/api/v2/item-category/34/"},
            "effect_entries": [],
            "flavor_text_entries": [],
            "game_indices": [
                {"game_index": 1, "generation": {"name": "generation-iii", "url": "https://pokeapi.co/api/v2/generation/3/"}}
            ],
            "names": [],
            "sprites": {"default": null},
            "held_by_pokemon": [],
            "baby_trigger_for": null,
            "machines": []
        }))
        .unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.fling_power, None);
        assert_eq!(item.sprites.default, None);
        assert_eq!(item.category.id(), Some(34));
    }
}
