mod executor;
mod world_api;

pub use executor::{
    execute_script, ExecutorOptions, DEFAULT_TIME_LIMIT, ERROR_LOG_PREFIX, TIMEOUT_LOG_ENTRY,
};
pub use world_api::WorldHandle;
