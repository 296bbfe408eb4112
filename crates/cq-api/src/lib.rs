mod memory;
mod repository;
mod service;

pub use memory::{MemoryCompletionLedger, MemoryProgressRepository};
pub use repository::{
    ChallengeStatus, CompletionLedger, CompletionRecord, LeaderboardEntry, ProgressRepository,
};
pub use service::{
    ChallengeRun, DailyClaim, DailySnapshot, GameService, RetentionDay, RetentionMetrics,
};
