use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

pub type ValidateFn = fn(&ExecutionResult) -> Verdict;

#[derive(Debug, Clone)]
pub struct Mentor {
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct ChallengeNarrative {
    pub mentor: Mentor,
    pub intro: String,
    pub success: String,
    pub failure: String,
}

#[derive(Debug, Clone)]
pub struct Objective {
    pub id: String,
    pub label: String,
    pub description: String,
    pub optional: bool,
}

impl Objective {
    pub(crate) fn required(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            optional: false,
        }
    }

    pub(crate) fn optional(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            optional: true,
        }
    }
}

// One declarative record per zone: prose, capability constraints, starter
// script, reward, and the validation predicate travel together.
#[derive(Clone)]
pub struct ChallengeDefinition {
    pub id: ZoneId,
    pub zone_name: String,
    pub title: String,
    pub description: String,
    pub objectives: Vec<Objective>,
    pub narrative: ChallengeNarrative,
    pub allowed_capabilities: Vec<String>,
    pub starter_script: String,
    pub hint: String,
    pub rewards: ChallengeReward,
    pub validate: ValidateFn,
}

impl std::fmt::Debug for ChallengeDefinition {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ChallengeDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("rewards", &self.rewards)
            .finish_non_exhaustive()
    }
}
