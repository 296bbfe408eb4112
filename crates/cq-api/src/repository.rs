use serde::{Deserialize, Serialize};

use cq_core::{CodeQuestError, ProgressState, ZoneId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Attempted,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub xp: i64,
    pub badges: Vec<String>,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub user_id: String,
    pub day_key: String,
    pub zone_id: ZoneId,
    pub bonus_xp: i64,
}

// Progress rows are the only shared mutable resource besides the ledger;
// implementations must serialize writes per user and normalize on every load.
pub trait ProgressRepository {
    fn load(&self, user_id: &str) -> Result<ProgressState, CodeQuestError>;

    fn save(&self, user_id: &str, state: &ProgressState) -> Result<ProgressState, CodeQuestError>;

    // Atomic read-modify-write for one user; concurrent transitions for the
    // same user must not interleave.
    fn update(
        &self,
        user_id: &str,
        apply: &dyn Fn(&ProgressState) -> ProgressState,
    ) -> Result<ProgressState, CodeQuestError>;

    fn reset(&self, user_id: &str) -> Result<ProgressState, CodeQuestError>;

    fn record_challenge_status(
        &self,
        user_id: &str,
        zone: ZoneId,
        success: bool,
    ) -> Result<(), CodeQuestError>;

    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, CodeQuestError>;

    fn active_player_count(&self) -> Result<usize, CodeQuestError>;
}

// Authoritative exactly-once gate for daily bonuses. `record` follows
// first-writer-wins semantics: `Ok(false)` means another claim already holds
// the `(user, day)` slot and no reward may be applied for this call.
pub trait CompletionLedger {
    fn exists(&self, user_id: &str, day_key: &str) -> Result<bool, CodeQuestError>;

    fn record(
        &self,
        user_id: &str,
        day_key: &str,
        zone: ZoneId,
        bonus_xp: i64,
        bonus_badge: Option<&str>,
    ) -> Result<bool, CodeQuestError>;

    fn completions_since(&self, day_key: &str) -> Result<Vec<CompletionRecord>, CodeQuestError>;
}
