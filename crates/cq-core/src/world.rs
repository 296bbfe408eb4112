use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub lights: BTreeMap<String, bool>,
    pub markers: BTreeMap<String, MarkerPosition>,
    pub counters: BTreeMap<String, i64>,
    pub sequence: Vec<String>,
}

impl WorldState {
    pub fn light_on(&self, name: &str) -> bool {
        self.lights.get(name).copied().unwrap_or(false)
    }

    pub fn counter(&self, name: &str) -> i64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.sequence.iter().any(|event| event == name)
    }

    pub fn event_count(&self, name: &str) -> usize {
        self.sequence.iter().filter(|event| *event == name).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionMetrics {
    pub instruction_count: usize,
    pub log_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub logs: Vec<String>,
    pub state: WorldState,
    pub metrics: ExecutionMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub success: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod world_tests {
    use super::*;

    #[test]
    fn missing_entries_read_as_defaults() {
        let state = WorldState::default();
        assert!(!state.light_on("crystal"));
        assert_eq!(state.counter("forge"), 0);
        assert!(!state.has_event("rituel"));
        assert_eq!(state.event_count("pas"), 0);
    }

    #[test]
    fn event_count_only_counts_matching_entries() {
        let mut state = WorldState::default();
        state.sequence.push("pas".to_string());
        state.sequence.push("gong".to_string());
        state.sequence.push("pas".to_string());
        assert_eq!(state.event_count("pas"), 2);
        assert!(state.has_event("gong"));
    }
}
