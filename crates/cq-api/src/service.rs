use std::collections::BTreeMap;

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

use cq_challenges::{generate_daily_challenge, ChallengeRegistry};
use cq_core::{CodeQuestError, DailyChallenge, ExecutionResult, ProgressState, Verdict, ZoneId};
use cq_progress::{apply_challenge_success, set_active_zone};
use cq_runtime::{execute_script, ExecutorOptions};

use crate::repository::{CompletionLedger, LeaderboardEntry, ProgressRepository};

#[derive(Debug, Clone)]
pub struct ChallengeRun {
    pub verdict: Verdict,
    pub execution: ExecutionResult,
}

impl ChallengeRun {
    pub fn logs(&self) -> &[String] {
        &self.execution.logs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    #[serde(flatten)]
    pub challenge: DailyChallenge,
    pub already_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyClaim {
    pub already_completed: bool,
    pub challenge: DailyChallenge,
    pub progress: ProgressState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionDay {
    pub date: String,
    pub completions: usize,
    pub unique_players: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionMetrics {
    pub window_days: u64,
    pub total_completions: usize,
    pub unique_players: usize,
    pub daily_breakdown: Vec<RetentionDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<f64>,
}

pub struct GameService<P, L> {
    registry: ChallengeRegistry,
    progress: P,
    ledger: L,
    executor: ExecutorOptions,
}

impl<P: ProgressRepository, L: CompletionLedger> GameService<P, L> {
    pub fn new(progress: P, ledger: L) -> Self {
        Self {
            registry: ChallengeRegistry::bundled(),
            progress,
            ledger,
            executor: ExecutorOptions::default(),
        }
    }

    pub fn with_registry(registry: ChallengeRegistry, progress: P, ledger: L) -> Self {
        Self {
            registry,
            progress,
            ledger,
            executor: ExecutorOptions::default(),
        }
    }

    pub fn set_executor_options(&mut self, options: ExecutorOptions) {
        self.executor = options;
    }

    pub fn registry(&self) -> &ChallengeRegistry {
        &self.registry
    }

    pub fn run_challenge(
        &self,
        zone: ZoneId,
        script: &str,
    ) -> Result<ChallengeRun, CodeQuestError> {
        // Registry miss is fatal and must abort before any execution or
        // reward logic.
        self.registry.require(zone)?;
        let execution = execute_script(script, &self.executor);
        let verdict = self.registry.validate(zone, &execution)?;
        Ok(ChallengeRun { verdict, execution })
    }

    pub fn complete_challenge(
        &self,
        user_id: &str,
        zone: ZoneId,
        verdict: &Verdict,
    ) -> Result<ProgressState, CodeQuestError> {
        let challenge = self.registry.require(zone)?;
        self.progress
            .record_challenge_status(user_id, zone, verdict.success)?;

        if !verdict.success {
            return self.progress.load(user_id);
        }

        self.progress.update(user_id, &|current| {
            apply_challenge_success(current, zone, Some(&challenge.rewards))
        })
    }

    pub fn progress(&self, user_id: &str) -> Result<ProgressState, CodeQuestError> {
        self.progress.load(user_id)
    }

    pub fn select_zone(&self, user_id: &str, zone: ZoneId) -> Result<ProgressState, CodeQuestError> {
        self.progress
            .update(user_id, &|current| set_active_zone(current, zone))
    }

    pub fn reset_progress(&self, user_id: &str) -> Result<ProgressState, CodeQuestError> {
        self.progress.reset(user_id)
    }

    pub fn daily_snapshot(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<DailySnapshot, CodeQuestError> {
        let challenge = generate_daily_challenge(at);
        let already_completed = self.ledger.exists(user_id, &challenge.day_key)?;
        Ok(DailySnapshot {
            challenge,
            already_completed,
        })
    }

    pub fn claim_daily(
        &self,
        user_id: &str,
        zone: ZoneId,
        at: DateTime<Utc>,
    ) -> Result<DailyClaim, CodeQuestError> {
        let challenge = generate_daily_challenge(at);
        if challenge.zone_id != zone {
            return Err(CodeQuestError::new(
                "DAILY_ZONE_MISMATCH",
                "Le défi quotidien demandé ne correspond pas à celui en cours.",
            ));
        }

        let recorded = self.ledger.record(
            user_id,
            &challenge.day_key,
            challenge.zone_id,
            challenge.bonus_xp,
            challenge.bonus_badge.as_deref(),
        )?;
        if !recorded {
            let progress = self.progress.load(user_id)?;
            return Ok(DailyClaim {
                already_completed: true,
                challenge,
                progress,
            });
        }

        let progress = self.progress.update(user_id, &|current| {
            let mut next = current.clone();
            next.xp += challenge.bonus_xp;
            if let Some(badge) = &challenge.bonus_badge {
                if !next.badges.contains(badge) {
                    next.badges.push(badge.clone());
                }
            }
            next
        })?;

        Ok(DailyClaim {
            already_completed: false,
            challenge,
            progress,
        })
    }

    pub fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, CodeQuestError> {
        self.progress.leaderboard(limit)
    }

    pub fn retention_metrics(
        &self,
        window_days: u64,
        at: DateTime<Utc>,
    ) -> Result<RetentionMetrics, CodeQuestError> {
        let window_days = window_days.max(1);
        let since = at
            .date_naive()
            .checked_sub_days(Days::new(window_days - 1))
            .expect("retention window should stay inside the calendar")
            .format("%Y-%m-%d")
            .to_string();
        let rows = self.ledger.completions_since(&since)?;

        let mut breakdown: BTreeMap<String, (usize, Vec<String>)> = BTreeMap::new();
        for row in &rows {
            let bucket = breakdown.entry(row.day_key.clone()).or_default();
            bucket.0 += 1;
            if !bucket.1.contains(&row.user_id) {
                bucket.1.push(row.user_id.clone());
            }
        }

        let mut unique_players = rows
            .iter()
            .map(|row| row.user_id.clone())
            .collect::<Vec<_>>();
        unique_players.sort_unstable();
        unique_players.dedup();

        let active_players = self.progress.active_player_count()?;
        let completion_rate = if active_players > 0 {
            let per_player = rows.len() as f64 / active_players as f64;
            Some((per_player * 1000.0).round() / 10.0 / window_days as f64)
        } else {
            None
        };

        Ok(RetentionMetrics {
            window_days,
            total_completions: rows.len(),
            unique_players: unique_players.len(),
            daily_breakdown: breakdown
                .into_iter()
                .map(|(date, (completions, users))| RetentionDay {
                    date,
                    completions,
                    unique_players: users.len(),
                })
                .collect(),
            completion_rate,
        })
    }
}

#[cfg(test)]
mod service_tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn daily_snapshot_payload_flattens_the_challenge() {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("timestamp should be valid");
        let snapshot = DailySnapshot {
            challenge: generate_daily_challenge(at),
            already_completed: false,
        };
        let payload = serde_json::to_value(&snapshot).expect("snapshot should serialize");
        assert_eq!(payload["dayKey"], "2024-05-01");
        assert_eq!(payload["alreadyCompleted"], false);
        assert!(payload.get("challenge").is_none());
    }
}
