use crate::choice::{Action, Combination};
use crate::roster::Roster;
use crate::ElementCounter;

/// Replay one round in turn order starting from a copy of `initial`.
/// Characters that skip, or have no entry, leave the counter alone.
pub fn simulate_round(
    roster: &Roster,
    combination: &Combination,
    initial: &ElementCounter,
) -> ElementCounter {
    let mut counter = *initial;
    for character in roster.characters() {
        if let Some(Action::Cast(element)) = combination.get(&character.id) {
            counter.cast(*element);
        }
    }
    counter
}
