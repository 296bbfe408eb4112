use chrono::{DateTime, TimeZone, Utc};

use cq_api::{GameService, MemoryCompletionLedger, MemoryProgressRepository};
use cq_challenges::ChallengeRegistry;
use cq_core::{ZoneId, ZONE_SEQUENCE};
use cq_runtime::{ExecutorOptions, TIMEOUT_LOG_ENTRY};

fn service() -> GameService<MemoryProgressRepository, MemoryCompletionLedger> {
    GameService::new(MemoryProgressRepository::new(), MemoryCompletionLedger::new())
}

fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

#[test]
fn village_scenario_lights_the_crystal() {
    let service = service();
    let run = service
        .run_challenge(ZoneId::Village, "world.setLightState(\"crystal\", true);")
        .expect("village should be registered");
    assert!(run.verdict.success, "{}", run.verdict.message);

    let progress = service
        .complete_challenge("luna", ZoneId::Village, &run.verdict)
        .expect("completion should persist");
    assert_eq!(progress.xp, 50);
    assert!(progress.unlocked_zones.contains(&ZoneId::Forest));
    assert_eq!(progress.active_zone, ZoneId::Forest);
}

#[test]
fn forest_scenario_requires_four_steps() {
    let service = service();
    let three = service
        .run_challenge(
            ZoneId::Forest,
            "for i in 0..3 { world.pushEvent(\"pas\"); }",
        )
        .expect("forest should be registered");
    assert!(!three.verdict.success);

    let four = service
        .run_challenge(
            ZoneId::Forest,
            "for i in 0..4 { world.pushEvent(\"pas\"); }",
        )
        .expect("forest should be registered");
    assert!(four.verdict.success, "{}", four.verdict.message);
}

#[test]
fn sanctum_scenario_demands_every_ritual_element() {
    let service = service();
    let full = concat!(
        "world.setLightState(\"crystal\", true);\n",
        "world.setLightState(\"bridge\", true);\n",
        "world.setLightState(\"totem\", true);\n",
        "for i in 0..3 { world.incrementCounter(\"forge\"); }\n",
        "world.pushEvent(\"rituel\");\n",
    );
    let run = service
        .run_challenge(ZoneId::Sanctum, full)
        .expect("sanctum should be registered");
    assert!(run.verdict.success, "{}", run.verdict.message);

    let missing_totem = concat!(
        "world.setLightState(\"crystal\", true);\n",
        "world.setLightState(\"bridge\", true);\n",
        "for i in 0..3 { world.incrementCounter(\"forge\"); }\n",
        "world.pushEvent(\"rituel\");\n",
    );
    let run = service
        .run_challenge(ZoneId::Sanctum, missing_totem)
        .expect("sanctum should be registered");
    assert!(!run.verdict.success);
    assert!(
        run.verdict.message.contains("totem"),
        "message should name the missing element: {}",
        run.verdict.message
    );
}

#[test]
fn unknown_challenge_aborts_before_reward_logic() {
    let service = GameService::with_registry(
        ChallengeRegistry::new(Vec::new()),
        MemoryProgressRepository::new(),
        MemoryCompletionLedger::new(),
    );
    let error = service
        .run_challenge(ZoneId::Village, "world.log(\"salut\");")
        .expect_err("empty registry should miss");
    assert_eq!(error.code, "VALIDATE_UNKNOWN_CHALLENGE");
}

#[test]
fn repeated_completion_awards_xp_only_once() {
    let service = service();
    let run = service
        .run_challenge(ZoneId::Village, "world.setLightState(\"crystal\", true);")
        .expect("village should be registered");

    let first = service
        .complete_challenge("luna", ZoneId::Village, &run.verdict)
        .expect("first completion should persist");
    let second = service
        .complete_challenge("luna", ZoneId::Village, &run.verdict)
        .expect("second completion should persist");
    assert_eq!(first.xp, second.xp);
    assert_eq!(first.badges, second.badges);
    assert_eq!(first.completed_zones, second.completed_zones);
}

#[test]
fn failed_verdicts_leave_progress_untouched() {
    let service = service();
    let run = service
        .run_challenge(ZoneId::Village, "world.setLightState(\"crystal\", false);")
        .expect("village should be registered");
    assert!(!run.verdict.success);

    let progress = service
        .complete_challenge("luna", ZoneId::Village, &run.verdict)
        .expect("attempt should be recorded");
    assert_eq!(progress.xp, 0);
    assert!(progress.completed_zones.is_empty());
}

#[test]
fn timeouts_surface_as_a_log_marker_not_an_error() {
    let mut service = service();
    service.set_executor_options(ExecutorOptions {
        time_limit: std::time::Duration::from_millis(50),
    });
    let run = service
        .run_challenge(ZoneId::Village, "loop { world.incrementCounter(\"x\"); }")
        .expect("execution should still produce a result");
    assert!(!run.verdict.success);
    assert!(run
        .execution
        .logs
        .iter()
        .any(|line| line == TIMEOUT_LOG_ENTRY));
}

#[test]
fn daily_claim_rejects_the_wrong_zone() {
    let service = service();
    let at = noon(2024, 5, 1);
    let snapshot = service
        .daily_snapshot("luna", at)
        .expect("snapshot should generate");
    let wrong_zone = ZONE_SEQUENCE
        .into_iter()
        .find(|zone| *zone != snapshot.challenge.zone_id)
        .expect("another zone always exists");

    let before = service.progress("luna").expect("progress should load");
    let error = service
        .claim_daily("luna", wrong_zone, at)
        .expect_err("mismatched zone should fail");
    assert_eq!(error.code, "DAILY_ZONE_MISMATCH");

    let after = service.progress("luna").expect("progress should load");
    assert_eq!(before, after);
    assert!(!service
        .daily_snapshot("luna", at)
        .expect("snapshot should generate")
        .already_completed);
}

#[test]
fn daily_claim_awards_the_bonus_exactly_once() {
    let service = service();
    let at = noon(2024, 5, 1);
    let snapshot = service
        .daily_snapshot("luna", at)
        .expect("snapshot should generate");
    assert!(!snapshot.already_completed);

    let claim = service
        .claim_daily("luna", snapshot.challenge.zone_id, at)
        .expect("claim should succeed");
    assert!(!claim.already_completed);
    assert_eq!(claim.progress.xp, snapshot.challenge.bonus_xp);
    if let Some(badge) = &snapshot.challenge.bonus_badge {
        assert!(claim.progress.badges.contains(badge));
    }

    let replay = service
        .claim_daily("luna", snapshot.challenge.zone_id, at)
        .expect("replay should not error");
    assert!(replay.already_completed);
    assert_eq!(replay.progress.xp, claim.progress.xp);

    assert!(service
        .daily_snapshot("luna", at)
        .expect("snapshot should generate")
        .already_completed);
}

#[test]
fn daily_bonus_does_not_mark_zones_completed() {
    let service = service();
    let at = noon(2024, 5, 1);
    let snapshot = service
        .daily_snapshot("luna", at)
        .expect("snapshot should generate");
    let claim = service
        .claim_daily("luna", snapshot.challenge.zone_id, at)
        .expect("claim should succeed");
    assert!(claim.progress.completed_zones.is_empty());
}

#[test]
fn selecting_a_locked_zone_is_silently_rejected() {
    let service = service();
    let before = service.progress("luna").expect("progress should load");
    let after = service
        .select_zone("luna", ZoneId::Sanctum)
        .expect("selection should not error");
    assert_eq!(before, after);

    let run = service
        .run_challenge(ZoneId::Village, "world.setLightState(\"crystal\", true);")
        .expect("village should be registered");
    service
        .complete_challenge("luna", ZoneId::Village, &run.verdict)
        .expect("completion should persist");
    let switched = service
        .select_zone("luna", ZoneId::Village)
        .expect("selection should succeed");
    assert_eq!(switched.active_zone, ZoneId::Village);
}

#[test]
fn leaderboard_and_retention_reflect_daily_activity() {
    let service = service();
    let at = noon(2024, 5, 1);
    let snapshot = service
        .daily_snapshot("luna", at)
        .expect("snapshot should generate");
    service
        .claim_daily("luna", snapshot.challenge.zone_id, at)
        .expect("claim should succeed");
    service.progress("noor").expect("progress should load");

    let board = service.leaderboard(10).expect("leaderboard should load");
    assert_eq!(board[0].user_id, "luna");
    assert_eq!(board[0].rank, 1);

    let metrics = service
        .retention_metrics(7, at)
        .expect("metrics should compute");
    assert_eq!(metrics.total_completions, 1);
    assert_eq!(metrics.unique_players, 1);
    assert_eq!(metrics.daily_breakdown.len(), 1);
    assert_eq!(metrics.daily_breakdown[0].date, snapshot.challenge.day_key);
    assert!(metrics.completion_rate.is_some());
}
