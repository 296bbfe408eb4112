mod cli_args;
mod error_map;
mod state_store;

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;

use cq_challenges::{generate_daily_challenge, ChallengeRegistry};
use cq_core::{CodeQuestError, ZoneId, ZONE_SEQUENCE};
use cq_progress::apply_challenge_success;
use cq_runtime::{execute_script, ExecutorOptions};

use cli_args::{Cli, ClaimArgs, Command, DailyArgs, RunArgs, StateArgs};
use error_map::{emit_error, map_cli_date_invalid, map_cli_script_read};
use state_store::{load_state, save_state};

fn main() {
    let cli = Cli::parse();
    let exit_code = match dispatch(cli.command) {
        Ok(()) => 0,
        Err(error) => emit_error(error),
    };
    std::process::exit(exit_code);
}

fn dispatch(command: Command) -> Result<(), CodeQuestError> {
    match command {
        Command::Run(args) => run_challenge(args),
        Command::Daily(args) => show_daily(args),
        Command::Claim(args) => claim_daily(args),
        Command::Progress(args) => show_progress(args),
        Command::Reset(args) => reset_progress(args),
        Command::Zones => list_zones(),
    }
}

fn run_challenge(args: RunArgs) -> Result<(), CodeQuestError> {
    let zone: ZoneId = args.zone.parse()?;
    let registry = ChallengeRegistry::bundled();
    let challenge = registry.require(zone)?;

    let script = fs::read_to_string(&args.script).map_err(map_cli_script_read)?;
    let options = match args.time_limit_ms {
        Some(limit) => ExecutorOptions {
            time_limit: Duration::from_millis(limit),
        },
        None => ExecutorOptions::default(),
    };

    let execution = execute_script(&script, &options);
    for line in &execution.logs {
        println!(
            "LOG_JSON:{}",
            serde_json::to_string(line).expect("string json")
        );
    }

    let verdict = registry.validate(zone, &execution)?;
    println!("RESULT:{}", if verdict.success { "OK" } else { "FAIL" });
    println!(
        "MESSAGE_JSON:{}",
        serde_json::to_string(&verdict.message).expect("string json")
    );

    let state_path = Path::new(&args.state_file);
    let mut state = load_state(state_path)?;
    if verdict.success {
        state.progress = apply_challenge_success(&state.progress, zone, Some(&challenge.rewards));
        save_state(state_path, &state)?;
    }
    println!(
        "PROGRESS_JSON:{}",
        serde_json::to_string(&state.progress).expect("progress json")
    );
    Ok(())
}

fn show_daily(args: DailyArgs) -> Result<(), CodeQuestError> {
    let at = resolve_date(args.date.as_deref())?;
    let challenge = generate_daily_challenge(at);
    let state = load_state(Path::new(&args.state_file))?;
    let already_completed = state.daily_completions.contains_key(&challenge.day_key);

    println!(
        "DAILY_JSON:{}",
        serde_json::to_string(&challenge).expect("daily json")
    );
    println!("ALREADY_COMPLETED:{}", already_completed);
    Ok(())
}

fn claim_daily(args: ClaimArgs) -> Result<(), CodeQuestError> {
    let zone: ZoneId = args.zone.parse()?;
    let at = resolve_date(args.date.as_deref())?;
    let challenge = generate_daily_challenge(at);
    if challenge.zone_id != zone {
        return Err(CodeQuestError::new(
            "DAILY_ZONE_MISMATCH",
            "Le défi quotidien demandé ne correspond pas à celui en cours.",
        ));
    }

    let state_path = Path::new(&args.state_file);
    let mut state = load_state(state_path)?;

    if state.daily_completions.contains_key(&challenge.day_key) {
        println!("RESULT:OK");
        println!("ALREADY_COMPLETED:true");
        println!(
            "PROGRESS_JSON:{}",
            serde_json::to_string(&state.progress).expect("progress json")
        );
        return Ok(());
    }

    state
        .daily_completions
        .insert(challenge.day_key.clone(), challenge.zone_id);
    state.progress.xp += challenge.bonus_xp;
    if let Some(badge) = &challenge.bonus_badge {
        if !state.progress.badges.contains(badge) {
            state.progress.badges.push(badge.clone());
        }
    }
    save_state(state_path, &state)?;

    println!("RESULT:OK");
    println!("ALREADY_COMPLETED:false");
    println!(
        "DAILY_JSON:{}",
        serde_json::to_string(&challenge).expect("daily json")
    );
    println!(
        "PROGRESS_JSON:{}",
        serde_json::to_string(&state.progress).expect("progress json")
    );
    Ok(())
}

fn show_progress(args: StateArgs) -> Result<(), CodeQuestError> {
    let state = load_state(Path::new(&args.state_file))?;
    println!(
        "PROGRESS_JSON:{}",
        serde_json::to_string(&state.progress).expect("progress json")
    );
    Ok(())
}

fn reset_progress(args: StateArgs) -> Result<(), CodeQuestError> {
    let state_path = Path::new(&args.state_file);
    let state = state_store::CliState::fresh();
    save_state(state_path, &state)?;
    println!(
        "PROGRESS_JSON:{}",
        serde_json::to_string(&state.progress).expect("progress json")
    );
    Ok(())
}

fn list_zones() -> Result<(), CodeQuestError> {
    for zone in ZONE_SEQUENCE {
        let definition = cq_core::zone_definition(zone);
        println!("{}\t{}\t{}", definition.id, definition.name, definition.description);
    }
    Ok(())
}

fn resolve_date(raw: Option<&str>) -> Result<DateTime<Utc>, CodeQuestError> {
    let Some(raw) = raw else {
        return Ok(Utc::now());
    };
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(map_cli_date_invalid)?;
    Ok(day
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc())
}
