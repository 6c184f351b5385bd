//! Creatures and everything describing them: abilities, characteristics,
//! egg groups, genders, growth rates, natures, pokeathlon stats, colors,
//! forms, habitats, shapes, species, stats and types

use serde::{Deserialize, Serialize};

use super::commons::{
    ApiResource, Description, Effect, FlavorText, GenerationGameIndex, Name, NamedApiResource,
    VerboseEffect, VersionEncounterDetail, VersionGameIndex,
};

/// Passive effects in battle or in the overworld. A creature may have
/// several possible abilities but only one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    pub is_main_series: bool,
    pub generation: NamedApiResource,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub effect_changes: Vec<AbilityEffectChange>,
    #[serde(default)]
    pub flavor_text_entries: Vec<AbilityFlavorText>,
    #[serde(default)]
    pub pokemon: Vec<AbilityPokemon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEffectChange {
    #[serde(default)]
    pub effect_entries: Vec<Effect>,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityPokemon {
    pub is_hidden: bool,
    pub slot: u32,
    pub pokemon: NamedApiResource,
}

/// Indicates which stat holds a creature's highest IV, determined by the
/// remainder of that IV divided by 5 (`gene_modulo`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: u32,
    pub gene_modulo: u32,
    #[serde(default)]
    pub possible_values: Vec<u32>,
    #[serde(default)]
    pub highest_stat: Option<NamedApiResource>,
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

/// Determines which species are able to interbreed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggGroup {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gender {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_species_details: Vec<PokemonSpeciesGender>,
    #[serde(default)]
    pub required_for_evolution: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesGender {
    /// Chance of being female in eighths, or -1 for genderless
    pub rate: i32,
    pub pokemon_species: NamedApiResource,
}

/// The speed with which experience turns into levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRate {
    pub id: u32,
    pub name: String,
    /// LaTeX formula used to calculate experience per level
    pub formula: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub levels: Vec<GrowthRateExperienceLevel>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
}

impl GrowthRate {
    /// Total experience needed to reach `level`
    pub fn experience_for(&self, level: u32) -> Option<u32> {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .map(|l| l.experience)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateExperienceLevel {
    pub level: u32,
    pub experience: u32,
}

/// Influences how stats grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nature {
    pub id: u32,
    pub name: String,
    pub decreased_stat: Option<NamedApiResource>,
    pub increased_stat: Option<NamedApiResource>,
    pub hates_flavor: Option<NamedApiResource>,
    pub likes_flavor: Option<NamedApiResource>,
    #[serde(default)]
    pub pokeathlon_stat_changes: Vec<NatureStatChange>,
    #[serde(default)]
    pub move_battle_style_preferences: Vec<MoveBattleStylePreference>,
    #[serde(default)]
    pub names: Vec<Name>,
}

impl Nature {
    /// Neutral natures raise and lower the same stat (or none at all)
    pub fn is_neutral(&self) -> bool {
        self.increased_stat == self.decreased_stat
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureStatChange {
    pub max_change: i32,
    pub pokeathlon_stat: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveBattleStylePreference {
    pub low_hp_preference: u32,
    pub high_hp_preference: u32,
    pub move_battle_style: NamedApiResource,
}

/// An attribute of performance in Pokéathlons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeathlonStat {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    pub affecting_natures: NaturePokeathlonStatAffectSets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffectSets {
    #[serde(default)]
    pub increase: Vec<NaturePokeathlonStatAffect>,
    #[serde(default)]
    pub decrease: Vec<NaturePokeathlonStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffect {
    pub max_change: i32,
    pub nature: NamedApiResource,
}

/// A creature variety. Each belongs to a species but may differ from other
/// varieties of that species in base stats, abilities and typing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// None for some alternate forms
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    pub is_default: bool,
    /// Sort order; -1 for forms with no place in the national ordering
    pub order: i32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub forms: Vec<NamedApiResource>,
    #[serde(default)]
    pub game_indices: Vec<VersionGameIndex>,
    #[serde(default)]
    pub held_items: Vec<PokemonHeldItem>,
    /// Link to the encounters sub-resource
    pub location_area_encounters: String,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    pub sprites: PokemonSprites,
    pub species: NamedApiResource,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Base value of a stat by name, e.g. `"speed"`
    pub fn base_stat(&self, stat: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat)
            .map(|s| s.base_stat)
    }

    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<_> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.into_iter().map(|t| t.type_.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: u32,
    pub ability: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedApiResource,
    #[serde(default)]
    pub version_details: Vec<PokemonHeldItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHeldItemVersion {
    pub version: NamedApiResource,
    pub rarity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    #[serde(default)]
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub move_learn_method: NamedApiResource,
    pub version_group: NamedApiResource,
    pub level_learned_at: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedApiResource,
    pub effort: u32,
    pub base_stat: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny_female: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny_female: Option<String>,
}

/// One entry of the `pokemon/{id}/encounters` sub-resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaEncounter {
    pub location_area: NamedApiResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

/// Colors used for sorting in a Pokédex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonColor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
}

/// A purely cosmetic form of a creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub id: u32,
    pub name: String,
    pub order: i32,
    pub form_order: i32,
    pub is_default: bool,
    pub is_battle_only: bool,
    pub is_mega: bool,
    /// Empty for the default form
    #[serde(default)]
    pub form_name: String,
    pub pokemon: NamedApiResource,
    pub sprites: PokemonFormSprites,
    pub version_group: NamedApiResource,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub form_names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PokemonFormSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
}

/// Terrain a creature can be found in, or an area reserved for rare ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHabitat {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
}

/// Body shapes used for sorting in a Pokédex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonShape {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub awesome_names: Vec<AwesomeName>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwesomeName {
    pub awesome_name: String,
    pub language: NamedApiResource,
}

/// The basis for at least one creature variety. Attributes here are shared
/// by every variety of the species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub order: i32,
    /// Chance of being female in eighths, or -1 for genderless
    pub gender_rate: i32,
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub is_baby: bool,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    /// Egg cycles to hatch; multiply by 255 for steps
    pub hatch_counter: Option<u32>,
    pub has_gender_differences: bool,
    pub forms_switchable: bool,
    pub growth_rate: NamedApiResource,
    #[serde(default)]
    pub pokedex_numbers: Vec<PokemonSpeciesDexEntry>,
    #[serde(default)]
    pub egg_groups: Vec<NamedApiResource>,
    pub color: NamedApiResource,
    pub shape: Option<NamedApiResource>,
    pub evolves_from_species: Option<NamedApiResource>,
    pub evolution_chain: Option<ApiResource>,
    pub habitat: Option<NamedApiResource>,
    pub generation: NamedApiResource,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pal_park_encounters: Vec<PalParkEncounterArea>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub form_descriptions: Vec<Description>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub varieties: Vec<PokemonSpeciesVariety>,
}

impl PokemonSpecies {
    pub fn is_genderless(&self) -> bool {
        self.gender_rate < 0
    }

    /// Genus in the given language, e.g. `"en"` -> "Mouse Pokémon"
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.as_str())
    }

    /// The variety marked as default
    pub fn default_variety(&self) -> Option<&NamedApiResource> {
        self.varieties
            .iter()
            .find(|v| v.is_default)
            .map(|v| &v.pokemon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesDexEntry {
    pub entry_number: u32,
    pub pokedex: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalParkEncounterArea {
    pub base_score: u32,
    pub rate: u32,
    pub area: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpeciesVariety {
    pub is_default: bool,
    pub pokemon: NamedApiResource,
}

/// Determines an aspect of battle. Each creature has a value for each stat
/// that grows with level and can be altered by effects in battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    pub is_battle_only: bool,
    pub affecting_moves: MoveStatAffectSets,
    pub affecting_natures: NatureStatAffectSets,
    #[serde(default)]
    pub characteristics: Vec<ApiResource>,
    pub move_damage_class: Option<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatAffectSets {
    #[serde(default)]
    pub increase: Vec<MoveStatAffect>,
    #[serde(default)]
    pub decrease: Vec<MoveStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatAffect {
    pub change: i32,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureStatAffectSets {
    #[serde(default)]
    pub increase: Vec<NamedApiResource>,
    #[serde(default)]
    pub decrease: Vec<NamedApiResource>,
}

/// An elemental property of creatures and their moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    pub id: u32,
    pub name: String,
    pub damage_relations: TypeRelations,
    #[serde(default)]
    pub game_indices: Vec<GenerationGameIndex>,
    pub generation: NamedApiResource,
    pub move_damage_class: Option<NamedApiResource>,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon: Vec<TypePokemon>,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeRelations {
    #[serde(default)]
    pub no_damage_to: Vec<NamedApiResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedApiResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedApiResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedApiResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedApiResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedApiResource>,
}

impl TypeRelations {
    /// Damage multiplier this type deals to `defending`
    pub fn multiplier_against(&self, defending: &str) -> f32 {
        let hits = |list: &[NamedApiResource]| list.iter().any(|t| t.name == defending);
        if hits(&self.no_damage_to) {
            0.0
        } else if hits(&self.half_damage_to) {
            0.5
        } else if hits(&self.double_damage_to) {
            2.0
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePokemon {
    pub slot: u32,
    pub pokemon: NamedApiResource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn named(name: &str, endpoint: &str, id: u32) -> Value {
        json!({"name": name, "url": format!("https://pokeapi.co/api/v2/{}/{}/", endpoint, id)})
    }

    fn pikachu() -> Value {
        json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "is_default": true,
            "order": 35,
            "weight": 60,
            "abilities": [
                {"is_hidden": false, "slot": 1, "ability": named("static", "ability", 9)},
                {"is_hidden": true, "slot": 3, "ability": named("lightning-rod", "ability", 31)}
            ],
            "forms": [named("pikachu", "pokemon-form", 25)],
            "game_indices": [
                {"game_index": 84, "version": named("red", "version", 1)}
            ],
            "held_items": [],
            "location_area_encounters": "https://pokeapi.co/api/v2/pokemon/25/encounters",
            "moves": [{
                "move": named("thunder-shock", "move", 84),
                "version_group_details": [{
                    "level_learned_at": 1,
                    "move_learn_method": named("level-up", "move-learn-method", 1),
                    "version_group": named("red-blue", "version-group", 1)
                }]
            }],
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
                "front_shiny": null,
                "front_female": null,
                "front_shiny_female": null,
                "back_default": null,
                "back_shiny": null,
                "back_female": null,
                "back_shiny_female": null,
                "other": {"dream_world": {"front_default": null}}
            },
            "species": named("pikachu", "pokemon-species", 25),
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": named("hp", "stat", 1)},
                {"base_stat": 90, "effort": 2, "stat": named("speed", "stat", 6)}
            ],
            "types": [{"slot": 1, "type": named("electric", "type", 13)}],
            "cries": {"latest": "https://example.invalid/25.ogg"}
        })
    }

    #[test]
    fn test_pokemon_deserializes_and_ignores_unknown_fields() {
        let pokemon: Pokemon = serde_json::from_value(pikachu()).unwrap();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.base_stat("speed"), Some(90));
        assert_eq!(pokemon.base_stat("attack"), None);
        assert_eq!(pokemon.type_names(), vec!["electric"]);
        assert_eq!(pokemon.moves[0].move_.name, "thunder-shock");
        assert_eq!(pokemon.species.id(), Some(25));
        assert!(pokemon.sprites.front_shiny.is_none());
    }

    #[test]
    fn test_pokemon_serializes_with_api_field_names() {
        let pokemon: Pokemon = serde_json::from_value(pikachu()).unwrap();
        let value = serde_json::to_value(&pokemon).unwrap();

        assert_eq!(value["types"][0]["type"]["name"], "electric");
        assert_eq!(value["moves"][0]["move"]["name"], "thunder-shock");
        assert!(value.get("cries").is_none());
    }

    #[test]
    fn test_species_helpers() {
        let species: PokemonSpecies = serde_json::from_value(json!({
            "id": 81,
            "name": "magnemite",
            "order": 106,
            "gender_rate": -1,
            "capture_rate": 190,
            "base_happiness": 50,
            "is_baby": false,
            "is_legendary": false,
            "is_mythical": false,
            "hatch_counter": 20,
            "has_gender_differences": false,
            "forms_switchable": false,
            "growth_rate": named("medium", "growth-rate", 2),
            "pokedex_numbers": [{"entry_number": 81, "pokedex": named("national", "pokedex", 1)}],
            "egg_groups": [named("mineral", "egg-group", 10)],
            "color": named("gray", "pokemon-color", 4),
            "shape": named("ball", "pokemon-shape", 1),
            "evolves_from_species": null,
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/34/"},
            "habitat": named("rough-terrain", "pokemon-habitat", 6),
            "generation": named("generation-i", "generation", 1),
            "names": [],
            "pal_park_encounters": [],
            "flavor_text_entries": [],
            "form_descriptions": [],
            "genera": [{"genus": "Magnet Pokémon", "language": named("en", "language", 9)}],
            "varieties": [{"is_default": true, "pokemon": named("magnemite", "pokemon", 81)}]
        }))
        .unwrap();

        assert!(species.is_genderless());
        assert_eq!(species.genus("en"), Some("Magnet Pokémon"));
        assert_eq!(species.genus("fr"), None);
        assert_eq!(species.default_variety().unwrap().name, "magnemite");
        assert_eq!(species.evolution_chain.unwrap().id(), Some(34));
    }

    #[test]
    fn test_type_multiplier() {
        let relations: TypeRelations = serde_json::from_value(json!({
            "no_damage_to": [named("ground", "type", 5)],
            "half_damage_to": [named("grass", "type", 12)],
            "double_damage_to": [named("water", "type", 11)],
            "no_damage_from": [],
            "half_damage_from": [],
            "double_damage_from": [named("ground", "type", 5)]
        }))
        .unwrap();

        assert_eq!(relations.multiplier_against("ground"), 0.0);
        assert_eq!(relations.multiplier_against("grass"), 0.5);
        assert_eq!(relations.multiplier_against("water"), 2.0);
        assert_eq!(relations.multiplier_against("normal"), 1.0);
    }

    #[test]
    fn test_growth_rate_lookup() {
        let rate = GrowthRate {
            id: 2,
            name: "medium".to_string(),
            formula: "x^3".to_string(),
            descriptions: vec![],
            levels: vec![
                GrowthRateExperienceLevel { level: 1, experience: 0 },
                GrowthRateExperienceLevel { level: 2, experience: 8 },
            ],
            pokemon_species: vec![],
        };

        assert_eq!(rate.experience_for(2), Some(8));
        assert_eq!(rate.experience_for(100), None);
    }
}
