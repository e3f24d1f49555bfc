use tracing::debug;

use crate::calc::{calculate_with, CalculationResult};
use crate::choice::{Choice, ChoiceMap};
use crate::filter::{filter_results, SkillRef, TargetSelection};
use crate::roster::Roster;
use crate::ElementCounter;

/// Every roster character set to `auto`, in turn order.
pub fn default_choices(roster: &Roster) -> ChoiceMap {
    roster
        .characters()
        .iter()
        .map(|c| (c.id.clone(), Choice::Auto))
        .collect()
}

/// In-memory calculator state owned by a front end. Nothing recomputes on its
/// own: call [`Session::run_calculation`] after editing inputs.
#[derive(Debug, Clone)]
pub struct Session<'r> {
    roster: &'r Roster,
    pub initial_counter: ElementCounter,
    pub choices: ChoiceMap,
    pub targets: TargetSelection,
    results: Vec<CalculationResult>,
    has_calculated: bool,
}

impl<'r> Session<'r> {
    pub fn new(roster: &'r Roster) -> Self {
        Self {
            roster,
            initial_counter: ElementCounter::new(),
            choices: default_choices(roster),
            targets: TargetSelection::new(),
            results: Vec::new(),
            has_calculated: false,
        }
    }

    pub fn roster(&self) -> &'r Roster {
        self.roster
    }

    pub fn results(&self) -> &[CalculationResult] {
        &self.results
    }

    pub fn has_calculated(&self) -> bool {
        self.has_calculated
    }

    pub fn set_choice(&mut self, character_id: &str, choice: Choice) {
        self.choices.insert(character_id.to_string(), choice);
    }

    pub fn reset_initial_counter(&mut self) {
        self.initial_counter = ElementCounter::new();
    }

    pub fn reset_choices(&mut self) {
        self.choices = default_choices(self.roster);
    }

    pub fn reset_all(&mut self) {
        self.reset_initial_counter();
        self.reset_choices();
        self.results.clear();
        self.has_calculated = false;
        self.targets.clear();
    }

    /// Replace the stored results with a fresh calculation.
    pub fn run_calculation(&mut self) -> &[CalculationResult] {
        self.results = calculate_with(self.roster, &self.choices, &self.initial_counter);
        self.has_calculated = true;
        debug!(results = self.results.len(), "session recalculated");
        &self.results
    }

    pub fn toggle_target(&mut self, skill: SkillRef) -> bool {
        self.targets.toggle(self.roster, skill)
    }

    /// Stored results that trigger at least one selected target.
    pub fn filtered_results(&self) -> Vec<&CalculationResult> {
        filter_results(&self.results, self.targets.targets())
    }
}
