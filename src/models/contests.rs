//! Contest types, contest effects and super contest effects

use serde::{Deserialize, Serialize};

use super::commons::{Effect, FlavorText, NamedApiResource};

/// Categories judges use to weigh a creature's condition in contests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestType {
    pub id: u32,
    pub name: String,
    pub berry_flavor: NamedApiResource,
    #[serde(default)]
    pub names: Vec<ContestName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestName {
    pub name: String,
    pub color: String,
    pub language: NamedApiResource,
}

/// The effect of a move when used in a contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestEffect {
    pub id: u32,
    /// Base number of hearts the user of this move gets
    pub appeal: u32,
    /// Base number of hearts the user's opponent loses
    pub jam: u32,
    #[serde(default)]
    pub effect_entries: Vec<Effect>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// The effect of a move when used in a super contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperContestEffect {
    pub id: u32,
    pub appeal: u32,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub moves: Vec<NamedApiResource>,
}
