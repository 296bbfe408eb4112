use std::collections::BTreeMap;
use std::sync::Mutex;

use cq_core::{CodeQuestError, ProgressState, ZoneId};
use cq_progress::normalize;

use crate::repository::{
    ChallengeStatus, CompletionLedger, CompletionRecord, LeaderboardEntry, ProgressRepository,
};

#[derive(Debug, Clone)]
struct ProgressRow {
    state: ProgressState,
    updated_seq: u64,
    statuses: BTreeMap<ZoneId, StatusRow>,
}

#[derive(Debug, Clone)]
struct StatusRow {
    status: ChallengeStatus,
    attempts: u32,
}

#[derive(Debug, Default)]
struct ProgressStore {
    rows: BTreeMap<String, ProgressRow>,
    update_counter: u64,
}

#[derive(Debug, Default)]
pub struct MemoryProgressRepository {
    inner: Mutex<ProgressStore>,
}

impl MemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenge_status(&self, user_id: &str, zone: ZoneId) -> Option<(ChallengeStatus, u32)> {
        let store = self.inner.lock().expect("progress store mutex should not be poisoned");
        store
            .rows
            .get(user_id)
            .and_then(|row| row.statuses.get(&zone))
            .map(|row| (row.status, row.attempts))
    }
}

impl ProgressRepository for MemoryProgressRepository {
    fn load(&self, user_id: &str) -> Result<ProgressState, CodeQuestError> {
        let mut store = self.inner.lock().expect("progress store mutex should not be poisoned");
        if let Some(row) = store.rows.get(user_id) {
            return Ok(normalize(Some(row.state.clone())));
        }

        let initial = ProgressState::initial();
        store.update_counter += 1;
        let updated_seq = store.update_counter;
        store.rows.insert(
            user_id.to_string(),
            ProgressRow {
                state: initial.clone(),
                updated_seq,
                statuses: BTreeMap::new(),
            },
        );
        Ok(initial)
    }

    fn save(&self, user_id: &str, state: &ProgressState) -> Result<ProgressState, CodeQuestError> {
        let normalized = normalize(Some(state.clone()));
        let mut store = self.inner.lock().expect("progress store mutex should not be poisoned");
        store.update_counter += 1;
        let updated_seq = store.update_counter;
        let row = store
            .rows
            .entry(user_id.to_string())
            .or_insert_with(|| ProgressRow {
                state: normalized.clone(),
                updated_seq,
                statuses: BTreeMap::new(),
            });
        row.state = normalized.clone();
        row.updated_seq = updated_seq;
        Ok(normalized)
    }

    fn update(
        &self,
        user_id: &str,
        apply: &dyn Fn(&ProgressState) -> ProgressState,
    ) -> Result<ProgressState, CodeQuestError> {
        let mut store = self.inner.lock().expect("progress store mutex should not be poisoned");
        store.update_counter += 1;
        let updated_seq = store.update_counter;
        let row = store
            .rows
            .entry(user_id.to_string())
            .or_insert_with(|| ProgressRow {
                state: ProgressState::initial(),
                updated_seq,
                statuses: BTreeMap::new(),
            });
        let current = normalize(Some(row.state.clone()));
        let next = normalize(Some(apply(&current)));
        row.state = next.clone();
        row.updated_seq = updated_seq;
        Ok(next)
    }

    fn reset(&self, user_id: &str) -> Result<ProgressState, CodeQuestError> {
        let initial = ProgressState::initial();
        let mut store = self.inner.lock().expect("progress store mutex should not be poisoned");
        store.update_counter += 1;
        let updated_seq = store.update_counter;
        store.rows.insert(
            user_id.to_string(),
            ProgressRow {
                state: initial.clone(),
                updated_seq,
                statuses: BTreeMap::new(),
            },
        );
        Ok(initial)
    }

    fn record_challenge_status(
        &self,
        user_id: &str,
        zone: ZoneId,
        success: bool,
    ) -> Result<(), CodeQuestError> {
        let mut store = self.inner.lock().expect("progress store mutex should not be poisoned");
        store.update_counter += 1;
        let updated_seq = store.update_counter;
        let row = store
            .rows
            .entry(user_id.to_string())
            .or_insert_with(|| ProgressRow {
                state: ProgressState::initial(),
                updated_seq,
                statuses: BTreeMap::new(),
            });
        let status = row.statuses.entry(zone).or_insert(StatusRow {
            status: ChallengeStatus::Attempted,
            attempts: 0,
        });
        status.attempts += 1;
        status.status = if success {
            ChallengeStatus::Completed
        } else {
            ChallengeStatus::Attempted
        };
        Ok(())
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, CodeQuestError> {
        let store = self.inner.lock().expect("progress store mutex should not be poisoned");
        let mut rows = store
            .rows
            .iter()
            .map(|(user_id, row)| (user_id.clone(), row.clone()))
            .collect::<Vec<_>>();
        // xp descending, oldest update first on ties: early sustained progress
        // keeps its rank against a late equal score.
        rows.sort_by(|(_, a), (_, b)| b.state.xp.cmp(&a.state.xp).then(a.updated_seq.cmp(&b.updated_seq)));
        Ok(rows
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, (user_id, row))| LeaderboardEntry {
                user_id,
                xp: row.state.xp,
                badges: row.state.badges.clone(),
                rank: index + 1,
            })
            .collect())
    }

    fn active_player_count(&self) -> Result<usize, CodeQuestError> {
        let store = self.inner.lock().expect("progress store mutex should not be poisoned");
        Ok(store.rows.values().filter(|row| row.state.xp > 0).count())
    }
}

#[derive(Debug, Default)]
pub struct MemoryCompletionLedger {
    inner: Mutex<BTreeMap<(String, String), CompletionRecord>>,
}

impl MemoryCompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompletionLedger for MemoryCompletionLedger {
    fn exists(&self, user_id: &str, day_key: &str) -> Result<bool, CodeQuestError> {
        let rows = self.inner.lock().expect("ledger mutex should not be poisoned");
        Ok(rows.contains_key(&(user_id.to_string(), day_key.to_string())))
    }

    fn record(
        &self,
        user_id: &str,
        day_key: &str,
        zone: ZoneId,
        bonus_xp: i64,
        _bonus_badge: Option<&str>,
    ) -> Result<bool, CodeQuestError> {
        let mut rows = self.inner.lock().expect("ledger mutex should not be poisoned");
        let key = (user_id.to_string(), day_key.to_string());
        if rows.contains_key(&key) {
            return Ok(false);
        }
        rows.insert(
            key,
            CompletionRecord {
                user_id: user_id.to_string(),
                day_key: day_key.to_string(),
                zone_id: zone,
                bonus_xp,
            },
        );
        Ok(true)
    }

    fn completions_since(&self, day_key: &str) -> Result<Vec<CompletionRecord>, CodeQuestError> {
        let rows = self.inner.lock().expect("ledger mutex should not be poisoned");
        Ok(rows
            .values()
            .filter(|record| record.day_key.as_str() >= day_key)
            .cloned()
            .collect())
    }
}
