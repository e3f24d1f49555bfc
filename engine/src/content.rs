use std::collections::HashMap;

pub const DEFAULT_ROSTER_ID: &str = "default";

pub fn builtin_rosters() -> HashMap<&'static str, &'static str> {
    HashMap::from([(
        DEFAULT_ROSTER_ID,
        include_str!("../content/rosters/default.json"),
    )])
}
