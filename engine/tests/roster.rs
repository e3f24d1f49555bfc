use residue_engine::api::parse_roster;
use residue_engine::content::builtin_rosters;
use residue_engine::{Choice, Element, EngineError, Roster};
use std::path::Path;

#[test]
fn builtin_roster_is_in_agility_order() {
    let ids: Vec<&str> = Roster::builtin()
        .characters()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    insta::assert_snapshot!(ids.join(" "), @"sorahalia fankus rickdio innocet senareno kartma");

    let agility: Vec<i32> = Roster::builtin().characters().iter().map(|c| c.agility).collect();
    assert!(agility.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn builtin_content_parses() {
    for (id, text) in builtin_rosters() {
        let roster = Roster::from_json(text).unwrap_or_else(|e| panic!("{id}: {e}"));
        assert_eq!(roster.len(), 6);
    }
}

#[test]
fn lookup_by_id() {
    let roster = Roster::builtin();
    let s = roster.get("senareno").unwrap();
    assert_eq!(s.elements, [Element::Water, Element::Fire, Element::Earth]);
    assert_eq!(s.residue_skills.len(), 4);
    assert!(roster.get("nobody").is_none());
}

#[test]
fn options_are_elements_then_skip() {
    let s = Roster::builtin().get("sorahalia").unwrap();
    assert_eq!(
        s.options(),
        [
            Choice::Cast(Element::Light),
            Choice::Cast(Element::Thunder),
            Choice::Cast(Element::Wind),
            Choice::Skip,
        ]
    );
}

#[test]
fn check_choice_rejects_uncastable_elements() {
    let roster = Roster::builtin();
    assert!(roster.check_choice("kartma", Choice::Cast(Element::Water)).is_ok());
    assert!(roster.check_choice("kartma", Choice::Skip).is_ok());
    assert!(roster.check_choice("kartma", Choice::Auto).is_ok());
    let err = roster
        .check_choice("kartma", Choice::Cast(Element::Fire))
        .unwrap_err();
    assert!(matches!(err, EngineError::NotCastable { element: Element::Fire, .. }));
    assert!(matches!(
        roster.check_choice("ghost", Choice::Skip),
        Err(EngineError::UnknownCharacter(_))
    ));
}

#[test]
fn yaml_roster_by_extension() {
    let yaml = r#"
- id: slow
  name: Slow
  elements: [earth]
  agility: 10
- id: quick
  name: Quick
  elements: [wind, dark]
  agility: 90
  residue_skills:
    - name: Gale
      condition: { higher: wind, lower: earth }
"#;
    let roster = parse_roster(yaml, Path::new("custom.yml")).unwrap();
    assert_eq!(roster.characters()[0].id, "quick");
    assert_eq!(roster.get("slow").unwrap().residue_skills.len(), 0);
    assert!(parse_roster(yaml, Path::new("custom.json")).is_err());
}
