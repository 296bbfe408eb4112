use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::zones::ZoneId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNarrative {
    pub intro: String,
    pub success: String,
    pub failure: String,
    pub hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    pub day_key: String,
    pub zone_id: ZoneId,
    pub title: String,
    pub bonus_xp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_badge: Option<String>,
    pub seed: String,
    pub expires_at: DateTime<Utc>,
    pub narrative: DailyNarrative,
}

#[cfg(test)]
mod daily_tests {
    use super::*;

    #[test]
    fn daily_payload_uses_camel_case_keys() {
        let challenge = DailyChallenge {
            day_key: "2024-05-01".to_string(),
            zone_id: ZoneId::Village,
            title: "Défi quotidien · Village de la Logique".to_string(),
            bonus_xp: 120,
            bonus_badge: Some("Éclaireur Solaire".to_string()),
            seed: "2024-05-01-codequest".to_string(),
            expires_at: "2024-05-02T00:00:00Z"
                .parse()
                .expect("timestamp should parse"),
            narrative: DailyNarrative {
                intro: "intro".to_string(),
                success: "success".to_string(),
                failure: "failure".to_string(),
                hints: vec!["un".to_string()],
            },
        };
        let payload = serde_json::to_string(&challenge).expect("daily should serialize");
        assert!(payload.contains("\"dayKey\":\"2024-05-01\""));
        assert!(payload.contains("\"bonusXp\":120"));
        assert!(payload.contains("\"expiresAt\""));
    }
}
