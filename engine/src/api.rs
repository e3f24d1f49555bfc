use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calc::{calculate_with, combination_count, CalculationResult, RESULT_LIMIT};
use crate::choice::ChoiceMap;
use crate::content::DEFAULT_ROSTER_ID;
use crate::filter::{filter_results, SkillRef};
use crate::roster::Roster;
use crate::ElementCounter;

/// A full calculation as read from a scenario file or an FFI caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CalcRequest {
    /// Missing characters are treated as `auto`.
    #[serde(default)]
    pub choices: ChoiceMap,
    #[serde(default)]
    pub initial_counter: ElementCounter,
    #[serde(default)]
    pub roster_id: Option<String>,
    #[serde(default)]
    pub roster_path: Option<String>,
    #[serde(default)]
    pub targets: Vec<SkillRef>,
    /// Number of results to return, capped at [`RESULT_LIMIT`].
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CalcResponse {
    /// Combinations simulated before ranking.
    pub evaluated: usize,
    pub returned: usize,
    pub results: Vec<CalculationResult>,
}

pub fn run_request(req: &CalcRequest) -> Result<CalcResponse> {
    let roster = resolve_roster(req.roster_id.as_deref(), req.roster_path.as_deref())?;
    run_request_with(&roster, req)
}

/// Like [`run_request`], ignoring the request's roster fields in favour of `roster`.
pub fn run_request_with(roster: &Roster, req: &CalcRequest) -> Result<CalcResponse> {
    validate_choices(roster, &req.choices)?;
    for target in &req.targets {
        roster
            .skill(&target.character_id, &target.skill_name)
            .with_context(|| format!("invalid target skill: {}", target))?;
    }

    let evaluated = combination_count(roster, &req.choices);
    let ranked = calculate_with(roster, &req.choices, &req.initial_counter);
    let limit = req.limit.unwrap_or(RESULT_LIMIT).min(RESULT_LIMIT);
    let results: Vec<CalculationResult> = filter_results(&ranked, &req.targets)
        .into_iter()
        .take(limit)
        .cloned()
        .collect();
    info!(
        evaluated,
        ranked = ranked.len(),
        returned = results.len(),
        "calculation finished"
    );

    Ok(CalcResponse {
        evaluated,
        returned: results.len(),
        results,
    })
}

/// Reject choices a character cannot make. Unknown ids are logged and ignored.
pub fn validate_choices(roster: &Roster, choices: &ChoiceMap) -> Result<()> {
    for (id, choice) in choices {
        if roster.get(id).is_none() {
            warn!(character = %id, "ignoring choice for unknown character");
            continue;
        }
        roster
            .check_choice(id, *choice)
            .with_context(|| format!("invalid choice '{}' for {}", choice, id))?;
    }
    Ok(())
}

/// A file path wins over a built-in id; neither means the default roster.
pub fn resolve_roster(id: Option<&str>, path: Option<&str>) -> Result<Cow<'static, Roster>> {
    if let Some(path) = path {
        return load_roster(Path::new(path)).map(Cow::Owned);
    }
    match id.unwrap_or(DEFAULT_ROSTER_ID) {
        DEFAULT_ROSTER_ID => Ok(Cow::Borrowed(Roster::builtin())),
        other => bail!("roster '{}' not found", other),
    }
}

/// Read a text file, honouring a UTF-8 or UTF-16 byte order mark.
pub fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
    }
}

/// Load a roster from JSON, or YAML when the extension is `.yaml`/`.yml`.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let text = read_text_auto(path)?;
    parse_roster(&text, path)
        .with_context(|| format!("failed to parse roster file: {}", path.display()))
}

/// Parse roster text, picking the format from `path`'s extension.
pub fn parse_roster(text: &str, path: &Path) -> Result<Roster> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    let roster = if is_yaml {
        Roster::from_yaml(text)?
    } else {
        Roster::from_json(text)?
    };
    Ok(roster)
}
