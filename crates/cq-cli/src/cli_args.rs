use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "codequest")]
#[command(about = "CodeQuest challenge runner CLI")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    Run(RunArgs),
    Daily(DailyArgs),
    Claim(ClaimArgs),
    Progress(StateArgs),
    Reset(StateArgs),
    Zones,
}

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    #[arg(long = "zone")]
    pub(crate) zone: String,
    #[arg(long = "script")]
    pub(crate) script: String,
    #[arg(long = "state-file", default_value = "codequest-state.json")]
    pub(crate) state_file: String,
    #[arg(long = "time-limit-ms")]
    pub(crate) time_limit_ms: Option<u64>,
}

#[derive(Debug, Args)]
pub(crate) struct DailyArgs {
    #[arg(long = "date")]
    pub(crate) date: Option<String>,
    #[arg(long = "state-file", default_value = "codequest-state.json")]
    pub(crate) state_file: String,
}

#[derive(Debug, Args)]
pub(crate) struct ClaimArgs {
    #[arg(long = "zone")]
    pub(crate) zone: String,
    #[arg(long = "date")]
    pub(crate) date: Option<String>,
    #[arg(long = "state-file", default_value = "codequest-state.json")]
    pub(crate) state_file: String,
}

#[derive(Debug, Args)]
pub(crate) struct StateArgs {
    #[arg(long = "state-file", default_value = "codequest-state.json")]
    pub(crate) state_file: String,
}
