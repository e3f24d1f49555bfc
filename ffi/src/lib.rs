use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use residue_engine::api::{run_request, CalcRequest};
use residue_engine::filter::disabled_skills;
use residue_engine::{Roster, SkillRef};
use serde_json::{json, Value};

pub const VERSION: &str = "residue-ffi 0.1.0";

fn ok(value: Value) -> Value {
    json!({ "ok": true, "result": value })
}

fn err(e: impl std::fmt::Display) -> Value {
    json!({ "ok": false, "error": e.to_string() })
}

fn to_jstring(env: &JNIEnv, payload: Value) -> jstring {
    env.new_string(payload.to_string())
        .map(|s| s.into_raw())
        .unwrap_or(std::ptr::null_mut())
}

fn read_input(env: &mut JNIEnv, json: &JString) -> Result<String, Value> {
    env.get_string(json)
        .map(String::from)
        .map_err(|e| err(format!("invalid_input: {}", e)))
}

// Internal functions for testing without JNI overhead

pub fn calculate_internal(input: &str) -> Value {
    let req: CalcRequest = match serde_json::from_str(input) {
        Ok(r) => r,
        Err(e) => return err(format!("invalid_config: {}", e)),
    };
    match run_request(&req) {
        Ok(res) => match serde_json::to_value(res) {
            Ok(v) => ok(v),
            Err(e) => err(e),
        },
        Err(e) => err(format!("{:#}", e)),
    }
}

pub fn roster_internal() -> Value {
    match serde_json::to_value(Roster::builtin().characters()) {
        Ok(v) => ok(v),
        Err(e) => err(e),
    }
}

/// Input is a JSON array of `{character_id, skill_name}`; output lists disabled skills in turn order.
pub fn disabled_skills_internal(input: &str) -> Value {
    let targets: Vec<SkillRef> = match serde_json::from_str(input) {
        Ok(t) => t,
        Err(e) => return err(format!("invalid_config: {}", e)),
    };
    let roster = Roster::builtin();
    let disabled = disabled_skills(roster, &targets);
    let ordered: Vec<SkillRef> = roster
        .characters()
        .iter()
        .flat_map(|c| {
            c.residue_skills
                .iter()
                .map(move |s| SkillRef::new(&c.id, &s.name))
        })
        .filter(|r| disabled.contains(r))
        .collect();
    match serde_json::to_value(ordered) {
        Ok(v) => ok(v),
        Err(e) => err(e),
    }
}

#[no_mangle]
pub extern "system" fn Java_com_residue_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    env.new_string(VERSION)
        .map(|s| s.into_raw())
        .unwrap_or(std::ptr::null_mut())
}

#[no_mangle]
pub extern "system" fn Java_com_residue_Ffi_calculateJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let payload = match read_input(&mut env, &json) {
        Ok(input) => calculate_internal(&input),
        Err(e) => e,
    };
    to_jstring(&env, payload)
}

#[no_mangle]
pub extern "system" fn Java_com_residue_Ffi_rosterJson(env: JNIEnv, _class: JClass) -> jstring {
    to_jstring(&env, roster_internal())
}

#[no_mangle]
pub extern "system" fn Java_com_residue_Ffi_disabledSkillsJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let payload = match read_input(&mut env, &json) {
        Ok(input) => disabled_skills_internal(&input),
        Err(e) => e,
    };
    to_jstring(&env, payload)
}
