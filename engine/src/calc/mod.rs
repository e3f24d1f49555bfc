//! Combination expansion, turn simulation, trigger evaluation and ranking.

mod expand;
mod rank;
mod simulate;
mod triggers;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::choice::{to_choice_map, ChoiceMap};
use crate::roster::Roster;
use crate::ElementCounter;

pub use expand::{combination_count, expand_combinations};
pub use rank::{rank_results, RESULT_LIMIT};
pub use simulate::simulate_round;
pub use triggers::{triggered_skills, TriggeredSkill};

/// Outcome of one simulated combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Concrete choice for every roster character; never contains `auto`.
    pub choices: ChoiceMap,
    pub triggered_skills: Vec<TriggeredSkill>,
    pub skill_count: usize,
    pub final_counter: ElementCounter,
}

/// Fresh all-zero counter.
pub fn new_counter() -> ElementCounter {
    ElementCounter::new()
}

/// Simulate every combination, unranked and untruncated, in expansion order.
pub fn evaluate_all(
    roster: &Roster,
    choices: &ChoiceMap,
    initial: &ElementCounter,
) -> Vec<CalculationResult> {
    expand_combinations(roster, choices)
        .into_iter()
        .map(|combination| {
            let final_counter = simulate_round(roster, &combination, initial);
            let triggered_skills = triggered_skills(roster, &final_counter);
            trace!(
                counter = %final_counter,
                skills = triggered_skills.len(),
                "simulated combination"
            );
            CalculationResult {
                choices: to_choice_map(&combination),
                skill_count: triggered_skills.len(),
                triggered_skills,
                final_counter,
            }
        })
        .collect()
}

/// Ranked top results for `choices` against an explicit roster.
pub fn calculate_with(
    roster: &Roster,
    choices: &ChoiceMap,
    initial: &ElementCounter,
) -> Vec<CalculationResult> {
    rank_results(evaluate_all(roster, choices, initial), RESULT_LIMIT)
}

/// Ranked top results for `choices` against the built-in roster.
pub fn calculate(choices: &ChoiceMap, initial: &ElementCounter) -> Vec<CalculationResult> {
    calculate_with(Roster::builtin(), choices, initial)
}
