use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::content::{builtin_rosters, DEFAULT_ROSTER_ID};
use crate::error::{EngineError, Result};
use crate::{Element, ElementCounter};

/// Trigger condition of a residue skill: `higher` must strictly exceed `lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillCondition {
    pub higher: Element,
    pub lower: Element,
}

impl SkillCondition {
    /// Both sides must be non-zero; a zero on either side never triggers.
    pub fn is_met(&self, counter: &ElementCounter) -> bool {
        let higher = counter[self.higher];
        let lower = counter[self.lower];
        higher > 0 && lower > 0 && higher > lower
    }

    /// Two conditions conflict when one is the other with its sides swapped.
    pub fn conflicts_with(&self, other: &SkillCondition) -> bool {
        self.higher == other.lower && self.lower == other.higher
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueSkill {
    pub name: String,
    pub condition: SkillCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Castable elements, in the order they are offered.
    pub elements: Vec<Element>,
    pub agility: i32,
    #[serde(default)]
    pub residue_skills: Vec<ResidueSkill>,
}

impl Character {
    /// Options explored for an `auto` choice: every castable element, then skip.
    pub fn options(&self) -> Vec<Choice> {
        self.elements
            .iter()
            .copied()
            .map(Choice::Cast)
            .chain(std::iter::once(Choice::Skip))
            .collect()
    }

    pub fn can_cast(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    pub fn skill(&self, name: &str) -> Option<&ResidueSkill> {
        self.residue_skills.iter().find(|s| s.name == name)
    }
}

/// Characters in turn order (descending agility) with an id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
    by_id: HashMap<String, usize>,
}

impl Roster {
    /// Sorts by agility, highest first. Equal agility keeps the input order.
    pub fn new(mut characters: Vec<Character>) -> Result<Self> {
        characters.sort_by(|a, b| b.agility.cmp(&a.agility));
        let mut by_id = HashMap::with_capacity(characters.len());
        for (idx, c) in characters.iter().enumerate() {
            if by_id.insert(c.id.clone(), idx).is_some() {
                return Err(EngineError::DuplicateCharacter(c.id.clone()));
            }
        }
        Ok(Self { characters, by_id })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let characters: Vec<Character> =
            serde_json::from_str(text).map_err(EngineError::RosterJson)?;
        Self::new(characters)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let characters: Vec<Character> =
            serde_yaml::from_str(text).map_err(EngineError::RosterYaml)?;
        Self::new(characters)
    }

    /// The roster shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static Roster {
        static BUILTIN: OnceLock<Roster> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let text = builtin_rosters()[DEFAULT_ROSTER_ID];
            Roster::from_json(text).expect("embedded roster content is valid")
        })
    }

    /// Characters ordered by descending agility.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.by_id.get(id).map(|&idx| &self.characters[idx])
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Caller-side validation of a single choice.
    pub fn check_choice(&self, id: &str, choice: Choice) -> Result<()> {
        let character = self
            .get(id)
            .ok_or_else(|| EngineError::UnknownCharacter(id.to_string()))?;
        match choice {
            Choice::Cast(element) if !character.can_cast(element) => {
                Err(EngineError::NotCastable {
                    character: id.to_string(),
                    element,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn skill(&self, character_id: &str, skill_name: &str) -> Result<&ResidueSkill> {
        let character = self
            .get(character_id)
            .ok_or_else(|| EngineError::UnknownCharacter(character_id.to_string()))?;
        character
            .skill(skill_name)
            .ok_or_else(|| EngineError::UnknownSkill {
                character: character_id.to_string(),
                skill: skill_name.to_string(),
            })
    }
}
