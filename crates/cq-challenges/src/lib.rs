mod challenges;
mod daily;
mod daily_scripts;
mod definitions;
mod registry;

pub use daily::{
    daily_title, generate_daily_challenge, hash_seed, BADGE_POOL, DAILY_SEED_SALT,
};
pub use definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective, ValidateFn};
pub use registry::ChallengeRegistry;
