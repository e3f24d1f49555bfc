use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn calc() -> Command {
    Command::cargo_bin("residue-calc").unwrap()
}

#[test]
fn roster_lists_turn_order() {
    calc()
        .arg("roster")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sorahalia 索拉哈利亚 agility=618"))
        .stdout(predicate::str::contains("kartma 卡尔特玛 agility=399"));
}

#[test]
fn calc_with_fixed_choices_prints_one_result() {
    calc()
        .args([
            "calc",
            "--choice", "sorahalia=light",
            "--choice", "fankus=wind",
            "--choice", "rickdio=skip",
            "--choice", "innocet=skip",
            "--choice", "senareno=earth",
            "--choice", "kartma=water",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluated=1 showing=1"))
        .stdout(predicate::str::contains(
            "fire=0 water=3 earth=2 wind=1 thunder=0 light=0 dark=0",
        ))
        .stdout(predicate::str::contains("业龙冰爪"));
}

#[test]
fn calc_json_respects_top() {
    let out = calc()
        .args(["calc", "--json", "--top", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["evaluated"], 256);
    assert_eq!(v["returned"], 3);
    assert_eq!(v["results"].as_array().unwrap().len(), 3);
}

#[test]
fn scenario_file_with_bom_is_read() {
    let dir = std::env::temp_dir().join(format!("residue-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("scenario.json");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        br#"{"choices":{"sorahalia":"light","fankus":"skip","rickdio":"skip","innocet":"skip","senareno":"skip","kartma":"skip"},"initial_counter":{"light":2}}"#,
    );
    fs::write(&path, bytes).unwrap();

    calc()
        .args(["calc", "--scenario"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("light=3"));
}

#[test]
fn uncastable_choice_fails() {
    calc()
        .args(["calc", "--choice", "kartma=fire"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot cast fire"));
}

#[test]
fn bad_counter_fails() {
    calc()
        .args(["calc", "--counter", "fire=-1"])
        .assert()
        .failure();
}

#[test]
fn conflicts_lists_swapped_skills() {
    calc()
        .args(["conflicts", "--target", "innocet:神圣嚎叫"])
        .assert()
        .success()
        .stdout(predicate::str::contains("innocet:悲惨之池 (dark > light)"));
}
