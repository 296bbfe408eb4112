use std::time::{Duration, Instant};

use rhai::{Dynamic, Engine, EvalAltResult, Scope};

use cq_core::{ExecutionMetrics, ExecutionResult};

use crate::world_api::{register_world_api, WorldHandle};

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(1500);
pub const TIMEOUT_LOG_ENTRY: &str = "Temps d'exécution dépassé";
pub const ERROR_LOG_PREFIX: &str = "Erreur: ";

const MAX_CALL_LEVELS: usize = 32;

#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    pub time_limit: Duration,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

// Runs one compiled learner script against a fresh world. Script faults and
// deadline overruns are folded into the log; this function never fails.
pub fn execute_script(script: &str, options: &ExecutorOptions) -> ExecutionResult {
    let world = WorldHandle::new();

    let mut engine = Engine::new();
    engine.set_strict_variables(true);
    engine.set_fast_operators(true);
    engine.set_max_call_levels(MAX_CALL_LEVELS);
    // The world methods are the whole capability surface: no eval, and the
    // built-in print/debug sinks go nowhere instead of reaching host stdout.
    engine.disable_symbol("eval");
    engine.on_print(|_| {});
    engine.on_debug(|_, _, _| {});
    register_world_api(&mut engine);

    let deadline = Instant::now() + options.time_limit;
    engine.on_progress(move |_| {
        if Instant::now() >= deadline {
            Some(Dynamic::from(TIMEOUT_LOG_ENTRY.to_string()))
        } else {
            None
        }
    });

    let mut scope = Scope::new();
    scope.push_constant("world", world.clone());

    if let Err(error) = engine.run_with_scope(&mut scope, script) {
        if matches!(*error, EvalAltResult::ErrorTerminated(..)) {
            world.push_log(TIMEOUT_LOG_ENTRY);
        } else {
            world.push_log(format!("{}{}", ERROR_LOG_PREFIX, error));
        }
    }

    let (state, logs) = world.snapshot();
    let metrics = ExecutionMetrics {
        instruction_count: script.split('\n').count(),
        log_count: logs.len(),
    };

    ExecutionResult {
        logs,
        state,
        metrics,
    }
}
