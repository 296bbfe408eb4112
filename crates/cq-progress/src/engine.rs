use cq_core::{ChallengeReward, ProgressState, ZoneId};

pub fn initial_progress() -> ProgressState {
    ProgressState::initial()
}

// Sole sanitation boundary for progress payloads: every hydration path
// (repository load, state-file load, mutation payload) goes through here
// before anything else trusts the value.
pub fn normalize(input: Option<ProgressState>) -> ProgressState {
    let Some(input) = input else {
        return initial_progress();
    };

    let mut unlocked = dedup_zones(&input.unlocked_zones);
    if !unlocked.contains(&ZoneId::first()) {
        unlocked.insert(0, ZoneId::first());
    }

    let completed = dedup_zones(&input.completed_zones)
        .into_iter()
        .filter(|zone| unlocked.contains(zone))
        .collect::<Vec<_>>();

    let active_zone = if unlocked.contains(&input.active_zone) {
        input.active_zone
    } else {
        unlocked[0]
    };

    ProgressState {
        active_zone,
        unlocked_zones: unlocked,
        completed_zones: completed,
        last_challenge_id: input.last_challenge_id,
        xp: input.xp.max(0),
        badges: dedup_badges(input.badges),
    }
}

pub fn apply_challenge_success(
    current: &ProgressState,
    zone: ZoneId,
    reward: Option<&ChallengeReward>,
) -> ProgressState {
    let already_completed = current.completed_zones.contains(&zone);

    let mut completed = current.completed_zones.clone();
    if !already_completed {
        completed.push(zone);
    }

    let next_zone = zone.successor();
    let mut unlocked = current.unlocked_zones.clone();
    if let Some(next) = next_zone {
        if !unlocked.contains(&next) {
            unlocked.push(next);
        }
    }

    let reward_xp = if already_completed {
        0
    } else {
        reward.map(|reward| reward.xp).unwrap_or(0)
    };

    let mut badges = current.badges.clone();
    if !already_completed {
        if let Some(badge) = reward.and_then(|reward| reward.badge.as_ref()) {
            if !badges.contains(badge) {
                badges.push(badge.clone());
            }
        }
    }

    normalize(Some(ProgressState {
        active_zone: next_zone.unwrap_or(zone),
        unlocked_zones: unlocked,
        completed_zones: completed,
        last_challenge_id: Some(zone),
        xp: current.xp + reward_xp,
        badges,
    }))
}

pub fn set_active_zone(current: &ProgressState, zone: ZoneId) -> ProgressState {
    if !current.unlocked_zones.contains(&zone) {
        return current.clone();
    }
    ProgressState {
        active_zone: zone,
        ..current.clone()
    }
}

pub fn reset() -> ProgressState {
    initial_progress()
}

fn dedup_zones(zones: &[ZoneId]) -> Vec<ZoneId> {
    let mut out = Vec::with_capacity(zones.len());
    for zone in zones {
        if !out.contains(zone) {
            out.push(*zone);
        }
    }
    out
}

fn dedup_badges(badges: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(badges.len());
    for badge in badges {
        if !out.contains(&badge) {
            out.push(badge);
        }
    }
    out
}
