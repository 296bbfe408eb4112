use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodeQuestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    Village,
    Forest,
    Temple,
    Forge,
    Tower,
    Sanctum,
}

pub const ZONE_SEQUENCE: [ZoneId; 6] = [
    ZoneId::Village,
    ZoneId::Forest,
    ZoneId::Temple,
    ZoneId::Forge,
    ZoneId::Tower,
    ZoneId::Sanctum,
];

impl ZoneId {
    pub fn first() -> Self {
        ZONE_SEQUENCE[0]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Village => "village",
            Self::Forest => "forest",
            Self::Temple => "temple",
            Self::Forge => "forge",
            Self::Tower => "tower",
            Self::Sanctum => "sanctum",
        }
    }

    pub fn successor(self) -> Option<Self> {
        let index = ZONE_SEQUENCE
            .iter()
            .position(|zone| *zone == self)
            .expect("every zone id belongs to the fixed sequence");
        ZONE_SEQUENCE.get(index + 1).copied()
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ZoneId {
    type Err = CodeQuestError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ZONE_SEQUENCE
            .into_iter()
            .find(|zone| zone.as_str() == raw)
            .ok_or_else(|| {
                CodeQuestError::new("ZONE_UNKNOWN", format!("Unknown zone id \"{}\".", raw))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDefinition {
    pub id: ZoneId,
    pub name: String,
    pub description: String,
}

pub fn zones() -> Vec<ZoneDefinition> {
    ZONE_SEQUENCE
        .into_iter()
        .map(|id| {
            let (name, description) = zone_content(id);
            ZoneDefinition {
                id,
                name: name.to_string(),
                description: description.to_string(),
            }
        })
        .collect()
}

pub fn zone_definition(id: ZoneId) -> ZoneDefinition {
    let (name, description) = zone_content(id);
    ZoneDefinition {
        id,
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn zone_content(id: ZoneId) -> (&'static str, &'static str) {
    match id {
        ZoneId::Village => (
            "Village de la Logique",
            "Apprenez les instructions simples sur la première île paisible.",
        ),
        ZoneId::Forest => (
            "Forêt des Boucles",
            "Découvrez les répétitions régulières au cœur des arbres pastel.",
        ),
        ZoneId::Temple => (
            "Temple des Conditions",
            "Utilisez le pouvoir des choix pour révéler les arches flottantes.",
        ),
        ZoneId::Forge => (
            "Forge des Variables",
            "Manipulez la matière des données près des braises sacrées.",
        ),
        ZoneId::Tower => (
            "Tour des Événements",
            "Répondez aux signaux lumineux qui rythment la tour céleste.",
        ),
        ZoneId::Sanctum => (
            "Sanctuaire Final",
            "Combinez toutes les notions dans ce sanctuaire suspendu.",
        ),
    }
}
