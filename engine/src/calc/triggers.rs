use serde::{Deserialize, Serialize};

use crate::roster::Roster;
use crate::ElementCounter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredSkill {
    pub character_id: String,
    pub character_name: String,
    pub skill_name: String,
}

/// Every residue skill whose condition holds on `counter`, in turn order then
/// declaration order.
pub fn triggered_skills(roster: &Roster, counter: &ElementCounter) -> Vec<TriggeredSkill> {
    roster
        .characters()
        .iter()
        .flat_map(move |character| {
            character
                .residue_skills
                .iter()
                .filter(move |skill| skill.condition.is_met(counter))
                .map(move |skill| TriggeredSkill {
                    character_id: character.id.clone(),
                    character_name: character.name.clone(),
                    skill_name: skill.name.clone(),
                })
        })
        .collect()
}
