mod engine;

pub use engine::{
    apply_challenge_success, initial_progress, normalize, reset, set_active_zone,
};
