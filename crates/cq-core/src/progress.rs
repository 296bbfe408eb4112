use serde::{Deserialize, Serialize};

use crate::zones::ZoneId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeReward {
    pub xp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl ChallengeReward {
    pub fn xp(xp: i64) -> Self {
        Self { xp, badge: None }
    }

    pub fn with_badge(xp: i64, badge: impl Into<String>) -> Self {
        Self {
            xp,
            badge: Some(badge.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub active_zone: ZoneId,
    pub unlocked_zones: Vec<ZoneId>,
    pub completed_zones: Vec<ZoneId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_challenge_id: Option<ZoneId>,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl ProgressState {
    pub fn initial() -> Self {
        Self {
            active_zone: ZoneId::first(),
            unlocked_zones: vec![ZoneId::first()],
            completed_zones: Vec::new(),
            last_challenge_id: None,
            xp: 0,
            badges: Vec::new(),
        }
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::initial()
    }
}
