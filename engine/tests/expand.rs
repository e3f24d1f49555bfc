use residue_engine::calc::{combination_count, expand_combinations};
use residue_engine::{Action, Character, Choice, ChoiceMap, Element, Roster};

fn all_skip() -> ChoiceMap {
    Roster::builtin()
        .characters()
        .iter()
        .map(|c| (c.id.clone(), Choice::Skip))
        .collect()
}

#[test]
fn no_auto_gives_the_fixed_map_once() {
    let mut choices = all_skip();
    choices.insert("sorahalia".into(), Choice::Cast(Element::Light));
    let combos = expand_combinations(Roster::builtin(), &choices);
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0]["sorahalia"], Action::Cast(Element::Light));
    assert_eq!(combos[0]["kartma"], Action::Skip);
}

#[test]
fn two_autos_multiply() {
    let mut choices = all_skip();
    choices.insert("senareno".into(), Choice::Auto); // water, fire, earth, skip
    choices.insert("kartma".into(), Choice::Auto); // water, skip
    let combos = expand_combinations(Roster::builtin(), &choices);
    assert_eq!(combos.len(), 4 * 2);
    assert_eq!(combination_count(Roster::builtin(), &choices), 8);
}

#[test]
fn earlier_character_varies_slowest() {
    let mut choices = all_skip();
    choices.insert("sorahalia".into(), Choice::Auto);
    choices.insert("fankus".into(), Choice::Auto);
    let combos = expand_combinations(Roster::builtin(), &choices);
    let pairs: Vec<(Action, Action)> = combos
        .iter()
        .map(|c| (c["sorahalia"], c["fankus"]))
        .collect();
    use Action::*;
    use Element::*;
    assert_eq!(
        pairs,
        [
            (Cast(Light), Cast(Wind)),
            (Cast(Light), Skip),
            (Cast(Thunder), Cast(Wind)),
            (Cast(Thunder), Skip),
            (Cast(Wind), Cast(Wind)),
            (Cast(Wind), Skip),
            (Skip, Cast(Wind)),
            (Skip, Skip),
        ]
    );
}

#[test]
fn missing_entries_count_as_auto() {
    let combos = expand_combinations(Roster::builtin(), &ChoiceMap::new());
    assert_eq!(combos.len(), 4 * 2 * 2 * 2 * 4 * 2);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut choices = all_skip();
    choices.insert("nobody".into(), Choice::Auto);
    let combos = expand_combinations(Roster::builtin(), &choices);
    assert_eq!(combos.len(), 1);
    assert!(!combos[0].contains_key("nobody"));
    let ids: Vec<_> = combos[0].keys().map(String::as_str).collect();
    assert_eq!(
        ids,
        ["sorahalia", "fankus", "rickdio", "innocet", "senareno", "kartma"]
    );
}

#[test]
fn oversized_roster_count_saturates() {
    let characters = (0..40)
        .map(|i| Character {
            id: format!("c{i}"),
            name: format!("C{i}"),
            elements: Element::ALL.to_vec(),
            agility: i,
            residue_skills: vec![],
        })
        .collect();
    let roster = Roster::new(characters).unwrap();
    // 8^40 options does not fit in usize
    assert_eq!(combination_count(&roster, &ChoiceMap::new()), usize::MAX);

    let fixed: ChoiceMap = roster
        .characters()
        .iter()
        .skip(2)
        .map(|c| (c.id.clone(), Choice::Skip))
        .collect();
    assert_eq!(combination_count(&roster, &fixed), 64);
    assert_eq!(expand_combinations(&roster, &fixed).len(), 64);
}
