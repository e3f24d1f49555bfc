use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use residue_engine::api::{
    load_roster, read_text_auto, run_request, run_request_with, CalcRequest, CalcResponse,
};
use residue_engine::filter::disabled_skills;
use residue_engine::{CalculationResult, Choice, Element, Roster, SkillRef};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Subcommand)]
enum Cmd {
    /// List characters in turn order with their elements and residue skills
    Roster {
        /// Roster file (JSON, or YAML by extension); defaults to the built-in roster
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Print the roster as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Enumerate choice combinations and rank them by triggered residue skills
    Calc {
        /// Scenario JSON (choices, initial_counter, targets, limit)
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Roster file (JSON, or YAML by extension)
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Per-character choice: ID=ELEMENT|skip|auto (repeatable)
        #[arg(long = "choice", value_name = "ID=CHOICE")]
        choices: Vec<String>,
        /// Initial counter value: ELEMENT=N (repeatable)
        #[arg(long = "counter", value_name = "ELEMENT=N")]
        counters: Vec<String>,
        /// Only show results triggering one of these skills: ID:SKILL (repeatable)
        #[arg(long = "target", value_name = "ID:SKILL")]
        targets: Vec<String>,
        /// Number of results to show
        #[arg(long)]
        top: Option<usize>,
        /// Print the response as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Show which skills are ruled out by the given target skills
    Conflicts {
        /// Target skill: ID:SKILL (repeatable)
        #[arg(long = "target", value_name = "ID:SKILL", required = true)]
        targets: Vec<String>,
        /// Roster file (JSON, or YAML by extension)
        #[arg(long)]
        roster: Option<PathBuf>,
    },
}

#[derive(Parser)]
#[command(name = "residue-calc")]
#[command(about = "Residue skill calculator")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Roster { roster, json } => {
            let roster = load_roster_arg(roster.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(roster.characters())?);
            } else {
                print_roster(&roster);
            }
        }
        Cmd::Calc {
            scenario,
            roster,
            choices,
            counters,
            targets,
            top,
            json,
            pretty,
        } => {
            let mut req = match scenario {
                Some(path) => read_scenario(&path)?,
                None => CalcRequest::default(),
            };
            let roster = match roster {
                Some(path) => Some(load_roster_arg(Some(path.as_path()))?),
                None => None,
            };
            for raw in &choices {
                let (id, choice) = parse_choice_arg(raw)?;
                req.choices.insert(id, choice);
            }
            for raw in &counters {
                let (element, value) = parse_counter_arg(raw)?;
                req.initial_counter[element] = value;
            }
            for raw in &targets {
                req.targets.push(raw.parse()?);
            }
            if top.is_some() {
                req.limit = top;
            }

            debug!(?req, custom_roster = roster.is_some(), "running calculation");
            let res = match &roster {
                Some(roster) => run_request_with(roster, &req)?,
                None => run_request(&req)?,
            };
            if json {
                if pretty {
                    println!("{}", serde_json::to_string_pretty(&res)?);
                } else {
                    println!("{}", serde_json::to_string(&res)?);
                }
            } else {
                print_response(&res);
            }
        }
        Cmd::Conflicts { targets, roster } => {
            let roster = load_roster_arg(roster.as_deref())?;
            let targets = targets
                .iter()
                .map(|raw| raw.parse::<SkillRef>())
                .collect::<Result<Vec<_>, _>>()?;
            for t in &targets {
                roster.skill(&t.character_id, &t.skill_name)?;
            }
            let disabled = disabled_skills(&roster, &targets);
            // keep roster order for stable output
            for c in roster.characters() {
                for s in &c.residue_skills {
                    let key = SkillRef::new(&c.id, &s.name);
                    if disabled.contains(&key) {
                        println!("{} ({} > {})", key, s.condition.higher, s.condition.lower);
                    }
                }
            }
        }
    }
    Ok(())
}

fn read_scenario(path: &Path) -> anyhow::Result<CalcRequest> {
    let text = read_text_auto(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scenario JSON: {}", path.display()))
}

fn load_roster_arg(path: Option<&Path>) -> anyhow::Result<Roster> {
    match path {
        None => Ok(Roster::builtin().clone()),
        Some(path) => load_roster(path),
    }
}

fn parse_choice_arg(raw: &str) -> anyhow::Result<(String, Choice)> {
    let Some((id, choice)) = raw.split_once('=') else {
        bail!("expected ID=CHOICE, got '{}'", raw);
    };
    Ok((id.trim().to_string(), choice.parse()?))
}

fn parse_counter_arg(raw: &str) -> anyhow::Result<(Element, u32)> {
    let Some((element, value)) = raw.split_once('=') else {
        bail!("expected ELEMENT=N, got '{}'", raw);
    };
    let value = value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("counter value must be a non-negative integer: '{}'", raw))?;
    Ok((element.parse()?, value))
}

fn print_roster(roster: &Roster) {
    for c in roster.characters() {
        let elements = c
            .elements
            .iter()
            .map(|e| format!("{}({})", e, e.display_name()))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{} {} agility={} elements=[{}]", c.id, c.name, c.agility, elements);
        for s in &c.residue_skills {
            println!(
                "    {} : {} > {}",
                s.name, s.condition.higher, s.condition.lower
            );
        }
    }
}

fn print_response(res: &CalcResponse) {
    println!("evaluated={} showing={}", res.evaluated, res.returned);
    for (rank, r) in res.results.iter().enumerate() {
        print_result(rank + 1, r);
    }
}

fn print_result(rank: usize, r: &CalculationResult) {
    let picks = r
        .choices
        .iter()
        .map(|(id, c)| format!("{}={}", id, c))
        .collect::<Vec<_>>()
        .join(" ");
    println!("#{} skills={} | {} | {}", rank, r.skill_count, picks, r.final_counter);
    for t in &r.triggered_skills {
        println!("    {} {}", t.character_name, t.skill_name);
    }
}
