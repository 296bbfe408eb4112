use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cq_core::{CodeQuestError, ProgressState, ZoneId};
use cq_progress::normalize;

use crate::error_map::{map_cli_state_invalid, map_cli_state_read, map_cli_state_write};

pub(crate) const STATE_SCHEMA: &str = "codequest-state.v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CliState {
    pub(crate) schema_version: String,
    pub(crate) progress: ProgressState,
    #[serde(default)]
    pub(crate) daily_completions: BTreeMap<String, ZoneId>,
}

impl CliState {
    pub(crate) fn fresh() -> Self {
        Self {
            schema_version: STATE_SCHEMA.to_string(),
            progress: ProgressState::initial(),
            daily_completions: BTreeMap::new(),
        }
    }
}

pub(crate) fn load_state(path: &Path) -> Result<CliState, CodeQuestError> {
    if !path.exists() {
        return Ok(CliState::fresh());
    }

    let raw = fs::read_to_string(path).map_err(map_cli_state_read)?;
    let mut state: CliState = serde_json::from_str(&raw).map_err(map_cli_state_invalid)?;

    if state.schema_version != STATE_SCHEMA {
        return Err(CodeQuestError::new(
            "CLI_STATE_SCHEMA",
            format!("Unsupported state schema: {}", state.schema_version),
        ));
    }

    state.progress = normalize(Some(state.progress));
    Ok(state)
}

pub(crate) fn save_state(path: &Path, state: &CliState) -> Result<(), CodeQuestError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(map_cli_state_write)?;

    let payload = serde_json::to_string_pretty(state).expect("cli state should serialize");
    fs::write(path, payload).map_err(map_cli_state_write)
}
