use cq_challenges::ChallengeRegistry;
use cq_core::ZoneId;
use cq_runtime::{execute_script, ExecutorOptions, ERROR_LOG_PREFIX, TIMEOUT_LOG_ENTRY};

#[test]
fn starter_scripts_run_cleanly_inside_the_sandbox() {
    let registry = ChallengeRegistry::bundled();
    for challenge in registry.iter() {
        let result = execute_script(&challenge.starter_script, &ExecutorOptions::default());
        assert!(
            !result
                .logs
                .iter()
                .any(|line| line.starts_with(ERROR_LOG_PREFIX) || line == TIMEOUT_LOG_ENTRY),
            "starter for {} should not fault: {:?}",
            challenge.id,
            result.logs
        );
    }
}

#[test]
fn simple_starters_already_satisfy_their_challenge() {
    let registry = ChallengeRegistry::bundled();
    for zone in [ZoneId::Village, ZoneId::Forest, ZoneId::Temple, ZoneId::Forge] {
        let challenge = registry.get(zone).expect("zone should be registered");
        let result = execute_script(&challenge.starter_script, &ExecutorOptions::default());
        let verdict = registry
            .validate(zone, &result)
            .expect("zone should validate");
        assert!(verdict.success, "starter for {} should pass", zone);
    }
}

#[test]
fn advanced_starters_leave_work_for_the_learner() {
    let registry = ChallengeRegistry::bundled();
    for zone in [ZoneId::Tower, ZoneId::Sanctum] {
        let challenge = registry.get(zone).expect("zone should be registered");
        let result = execute_script(&challenge.starter_script, &ExecutorOptions::default());
        let verdict = registry
            .validate(zone, &result)
            .expect("zone should validate");
        assert!(!verdict.success, "starter for {} should not pass yet", zone);
        assert!(!verdict.message.is_empty());
    }
}
