use std::collections::BTreeMap;

use cq_core::{CodeQuestError, ExecutionResult, Verdict, ZoneId};

use crate::challenges::bundled_challenges;
use crate::definitions::ChallengeDefinition;

// Static challenge catalog: built once at startup, read-only afterwards, and
// safe to share across concurrent executions.
#[derive(Debug)]
pub struct ChallengeRegistry {
    by_zone: BTreeMap<ZoneId, ChallengeDefinition>,
}

impl ChallengeRegistry {
    pub fn new(definitions: Vec<ChallengeDefinition>) -> Self {
        let mut by_zone = BTreeMap::new();
        for definition in definitions {
            by_zone.insert(definition.id, definition);
        }
        Self { by_zone }
    }

    pub fn bundled() -> Self {
        Self::new(bundled_challenges())
    }

    pub fn get(&self, zone: ZoneId) -> Option<&ChallengeDefinition> {
        self.by_zone.get(&zone)
    }

    pub fn require(&self, zone: ZoneId) -> Result<&ChallengeDefinition, CodeQuestError> {
        self.by_zone.get(&zone).ok_or_else(|| {
            CodeQuestError::new(
                "VALIDATE_UNKNOWN_CHALLENGE",
                format!("Challenge \"{}\" is not registered.", zone),
            )
        })
    }

    pub fn validate(
        &self,
        zone: ZoneId,
        result: &ExecutionResult,
    ) -> Result<Verdict, CodeQuestError> {
        let challenge = self.require(zone)?;
        Ok((challenge.validate)(result))
    }

    pub fn len(&self) -> usize {
        self.by_zone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_zone.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChallengeDefinition> {
        self.by_zone.values()
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;
    use cq_core::ZONE_SEQUENCE;

    #[test]
    fn bundled_registry_covers_every_zone() {
        let registry = ChallengeRegistry::bundled();
        assert_eq!(registry.len(), 6);
        for zone in ZONE_SEQUENCE {
            let challenge = registry.get(zone).expect("zone should be registered");
            assert_eq!(challenge.id, zone);
            assert!(challenge.rewards.xp > 0);
            assert!(!challenge.allowed_capabilities.is_empty());
            assert!(!challenge.starter_script.is_empty());
            assert!(!challenge.narrative.intro.is_empty());
        }
    }

    #[test]
    fn missing_challenge_is_a_fatal_lookup_error() {
        let registry = ChallengeRegistry::new(Vec::new());
        let result = ExecutionResult {
            logs: Vec::new(),
            state: cq_core::WorldState::default(),
            metrics: cq_core::ExecutionMetrics {
                instruction_count: 0,
                log_count: 0,
            },
        };
        let error = registry
            .validate(ZoneId::Village, &result)
            .expect_err("empty registry should miss");
        assert_eq!(error.code, "VALIDATE_UNKNOWN_CHALLENGE");
    }

    #[test]
    fn only_the_sanctum_awards_a_badge() {
        let registry = ChallengeRegistry::bundled();
        for challenge in registry.iter() {
            if challenge.id == ZoneId::Sanctum {
                assert_eq!(
                    challenge.rewards.badge.as_deref(),
                    Some("Harmonie Primordiale")
                );
            } else {
                assert!(challenge.rewards.badge.is_none());
            }
        }
    }
}
