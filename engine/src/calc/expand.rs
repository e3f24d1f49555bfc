use tracing::debug;

use crate::choice::{Action, Choice, ChoiceMap, Combination};
use crate::roster::{Character, Roster};

/// Upper bound on the up-front allocation for expanded combinations.
const PREALLOC_LIMIT: usize = 4096;

/// One character left on `auto`, with the options it will be branched over.
struct AutoSlot<'r> {
    character: &'r Character,
    options: Vec<Action>,
}

enum Slot<'r> {
    Fixed(&'r Character, Action),
    Auto(AutoSlot<'r>),
}

fn slots<'r>(roster: &'r Roster, choices: &ChoiceMap) -> Vec<Slot<'r>> {
    roster
        .characters()
        .iter()
        .map(|character| {
            let choice = choices.get(&character.id).copied().unwrap_or_default();
            match choice.resolve() {
                Some(action) => Slot::Fixed(character, action),
                None => Slot::Auto(AutoSlot {
                    character,
                    options: character
                        .options()
                        .into_iter()
                        .filter_map(Choice::resolve)
                        .collect(),
                }),
            }
        })
        .collect()
}

/// Number of combinations [`expand_combinations`] would produce, saturating
/// at `usize::MAX` for oversized rosters.
pub fn combination_count(roster: &Roster, choices: &ChoiceMap) -> usize {
    slots(roster, choices)
        .iter()
        .map(|slot| match slot {
            Slot::Fixed(..) => 1,
            Slot::Auto(auto) => auto.options.len(),
        })
        .fold(1usize, usize::saturating_mul)
}

/// Expand every `auto` (or missing) choice into the Cartesian product of that
/// character's options. Only roster characters are visited, so unknown ids in
/// `choices` drop out. Earlier characters vary slowest.
pub fn expand_combinations(roster: &Roster, choices: &ChoiceMap) -> Vec<Combination> {
    let slots = slots(roster, choices);
    let autos: Vec<&AutoSlot> = slots
        .iter()
        .filter_map(|slot| match slot {
            Slot::Auto(auto) => Some(auto),
            Slot::Fixed(..) => None,
        })
        .collect();
    let total = autos
        .iter()
        .map(|a| a.options.len())
        .fold(1usize, usize::saturating_mul);
    debug!(
        auto = autos.len(),
        fixed = slots.len() - autos.len(),
        combinations = total,
        "expanding choice map"
    );

    let mut combinations = Vec::with_capacity(total.min(PREALLOC_LIMIT));
    let mut cursor = vec![0usize; autos.len()];
    loop {
        let mut next_auto = 0;
        let combination: Combination = slots
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(character, action) => (character.id.clone(), *action),
                Slot::Auto(auto) => {
                    let action = auto.options[cursor[next_auto]];
                    next_auto += 1;
                    (auto.character.id.clone(), action)
                }
            })
            .collect();
        combinations.push(combination);

        // Odometer step: the last auto slot turns fastest.
        let mut pos = autos.len();
        loop {
            if pos == 0 {
                return combinations;
            }
            pos -= 1;
            cursor[pos] += 1;
            if cursor[pos] < autos[pos].options.len() {
                break;
            }
            cursor[pos] = 0;
        }
    }
}
