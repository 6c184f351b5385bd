//! Evolution chains and evolution triggers
//!
//! An evolution chain is a tree: every [`ChainLink`] holds the links its
//! species can evolve into, which in turn hold theirs.

use serde::{Deserialize, Serialize};

use super::commons::{Name, NamedApiResource};

/// A family tree starting at the lowest stage, with the conditions for each
/// evolution along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    /// Item that must be held by a parent for a baby to hatch, if any
    pub baby_trigger_item: Option<NamedApiResource>,
    pub chain: ChainLink,
}

impl EvolutionChain {
    /// Species names in the chain, depth first from the base stage
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.chain.collect_species(&mut names);
        names
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub is_baby: bool,
    pub species: NamedApiResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    fn collect_species<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.species.name.as_str());
        for next in &self.evolves_to {
            next.collect_species(out);
        }
    }

    /// Number of stages from this link to the deepest descendant, counting this one
    pub fn depth(&self) -> usize {
        1 + self.evolves_to.iter().map(ChainLink::depth).max().unwrap_or(0)
    }

    /// Find the link for a species anywhere below (or at) this link
    pub fn find(&self, species: &str) -> Option<&ChainLink> {
        if self.species.name == species {
            return Some(self);
        }
        self.evolves_to.iter().find_map(|link| link.find(species))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub item: Option<NamedApiResource>,
    pub trigger: NamedApiResource,
    /// 1 for female, 2 for male
    pub gender: Option<u32>,
    pub held_item: Option<NamedApiResource>,
    pub known_move: Option<NamedApiResource>,
    pub known_move_type: Option<NamedApiResource>,
    pub location: Option<NamedApiResource>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_beauty: Option<u32>,
    pub min_affection: Option<u32>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    pub party_species: Option<NamedApiResource>,
    pub party_type: Option<NamedApiResource>,
    /// 1 means Attack > Defense, 0 means equal, -1 means Attack < Defense
    pub relative_physical_stats: Option<i32>,
    /// "day", "night", or empty when time does not matter
    #[serde(default)]
    pub time_of_day: String,
    pub trade_species: Option<NamedApiResource>,
    #[serde(default)]
    pub turn_upside_down: bool,
}

/// Events and conditions that cause an evolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionTrigger {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedApiResource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn link(name: &str, id: u32, evolves_to: Vec<Value>) -> Value {
        json!({
            "is_baby": false,
            "species": {"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)},
            "evolution_details": [],
            "evolves_to": evolves_to
        })
    }

    fn eevee_chain() -> EvolutionChain {
        serde_json::from_value(json!({
            "id": 67,
            "baby_trigger_item": null,
            "chain": link("eevee", 133, vec![
                link("vaporeon", 134, vec![]),
                link("jolteon", 135, vec![]),
                link("flareon", 136, vec![]),
            ])
        }))
        .unwrap()
    }

    #[test]
    fn test_recursive_chain_deserializes() {
        let chain = eevee_chain();
        assert_eq!(chain.id, 67);
        assert!(chain.baby_trigger_item.is_none());
        assert_eq!(chain.chain.evolves_to.len(), 3);
        assert_eq!(chain.chain.depth(), 2);
        assert_eq!(
            chain.species_names(),
            vec!["eevee", "vaporeon", "jolteon", "flareon"]
        );
    }

    #[test]
    fn test_find_nested_link() {
        let chain: EvolutionChain = serde_json::from_value(json!({
            "id": 1,
            "baby_trigger_item": null,
            "chain": link("bulbasaur", 1, vec![
                link("ivysaur", 2, vec![link("venusaur", 3, vec![])])
            ])
        }))
        .unwrap();

        assert_eq!(chain.chain.depth(), 3);
        let ivysaur = chain.chain.find("ivysaur").unwrap();
        assert_eq!(ivysaur.evolves_to[0].species.name, "venusaur");
        assert!(chain.chain.find("charmander").is_none());
    }

    #[test]
    fn test_evolution_detail_nulls() {
        let detail: EvolutionDetail = serde_json::from_value(json!({
            "item": null,
            "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
            "gender": null,
            "held_item": null,
            "known_move": null,
            "known_move_type": null,
            "location": null,
            "min_level": 16,
            "min_happiness": null,
            "min_beauty": null,
            "min_affection": null,
            "needs_overworld_rain": false,
            "party_species": null,
            "party_type": null,
            "relative_physical_stats": null,
            "time_of_day": "",
            "trade_species": null,
            "turn_upside_down": false
        }))
        .unwrap();

        assert_eq!(detail.min_level, Some(16));
        assert_eq!(detail.trigger.name, "level-up");
        assert!(detail.time_of_day.is_empty());
    }
}
