use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calc::CalculationResult;
use crate::error::EngineError;
use crate::roster::Roster;

/// Identifies one residue skill by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillRef {
    pub character_id: String,
    pub skill_name: String,
}

impl SkillRef {
    pub fn new(character_id: impl Into<String>, skill_name: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            skill_name: skill_name.into(),
        }
    }
}

impl fmt::Display for SkillRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.character_id, self.skill_name)
    }
}

/// Parses `character_id:skill_name`.
impl FromStr for SkillRef {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((id, skill)) if !id.trim().is_empty() && !skill.trim().is_empty() => {
                Ok(SkillRef::new(id.trim(), skill.trim()))
            }
            _ => Err(EngineError::InvalidSkillRef(s.to_string())),
        }
    }
}

/// Skills that can never trigger together with any of `targets`: those whose
/// condition is a target's condition with the sides swapped. Unknown targets
/// contribute nothing.
pub fn disabled_skills(roster: &Roster, targets: &[SkillRef]) -> HashSet<SkillRef> {
    let mut disabled = HashSet::new();
    for target in targets {
        let Ok(selected) = roster.skill(&target.character_id, &target.skill_name) else {
            continue;
        };
        for character in roster.characters() {
            for skill in &character.residue_skills {
                if selected.condition.conflicts_with(&skill.condition) {
                    disabled.insert(SkillRef::new(&character.id, &skill.name));
                }
            }
        }
    }
    disabled
}

/// Results that trigger at least one target. No targets keeps everything.
pub fn filter_results<'a>(
    results: &'a [CalculationResult],
    targets: &[SkillRef],
) -> Vec<&'a CalculationResult> {
    if targets.is_empty() {
        return results.iter().collect();
    }
    results
        .iter()
        .filter(|result| {
            targets.iter().any(|target| {
                result.triggered_skills.iter().any(|t| {
                    t.character_id == target.character_id && t.skill_name == target.skill_name
                })
            })
        })
        .collect()
}

/// Ordered set of target skills the user wants to see triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSelection {
    targets: Vec<SkillRef>,
}

impl TargetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> &[SkillRef] {
        &self.targets
    }

    pub fn disabled(&self, roster: &Roster) -> HashSet<SkillRef> {
        disabled_skills(roster, &self.targets)
    }

    /// Deselect if selected; otherwise select unless a current target disables it.
    /// Returns whether the skill is selected afterwards.
    pub fn toggle(&mut self, roster: &Roster, skill: SkillRef) -> bool {
        if let Some(idx) = self.targets.iter().position(|s| *s == skill) {
            self.targets.remove(idx);
            return false;
        }
        if self.disabled(roster).contains(&skill) {
            return false;
        }
        self.targets.push(skill);
        true
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn is_selected(&self, character_id: &str, skill_name: &str) -> bool {
        self.targets
            .iter()
            .any(|s| s.character_id == character_id && s.skill_name == skill_name)
    }

    pub fn is_disabled(&self, roster: &Roster, character_id: &str, skill_name: &str) -> bool {
        self.disabled(roster)
            .contains(&SkillRef::new(character_id, skill_name))
    }
}
