use chrono::{DateTime, Utc};

use cq_core::{zone_definition, DailyChallenge, DailyNarrative, ZoneId, ZONE_SEQUENCE};

use crate::daily_scripts::DAILY_NARRATIVE_SCRIPTS;

pub const DAILY_SEED_SALT: &str = "codequest";

pub const BADGE_POOL: [&str; 6] = [
    "Éclaireur Solaire",
    "Gardien des Runes",
    "Navigateur Astral",
    "Héraut des Courants",
    "Artisan des Flux",
    "Veilleur des Brumes",
];

// 31-hash over the seed with 32-bit wraparound, absolute value taken. The
// exact arithmetic is load-bearing: every process must agree on the day's
// selection without coordinating.
pub fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in seed.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

pub fn daily_title(zone: ZoneId) -> String {
    format!("Défi quotidien · {}", zone_definition(zone).name)
}

pub fn generate_daily_challenge(at: DateTime<Utc>) -> DailyChallenge {
    let day = at.date_naive();
    let day_key = day.format("%Y-%m-%d").to_string();
    let seed = format!("{}-{}", day_key, DAILY_SEED_SALT);
    let hashed = hash_seed(&seed);

    let zone_id = ZONE_SEQUENCE[hashed as usize % ZONE_SEQUENCE.len()];
    let bonus_xp = 80 + i64::from(hashed % 90);
    let bonus_badge = BADGE_POOL[hashed as usize % BADGE_POOL.len()].to_string();
    let expires_at = day
        .succ_opt()
        .expect("calendar day should have a successor")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc();

    DailyChallenge {
        day_key,
        zone_id,
        title: daily_title(zone_id),
        bonus_xp,
        bonus_badge: Some(bonus_badge),
        seed,
        expires_at,
        narrative: pick_narrative(zone_id, hashed),
    }
}

fn pick_narrative(zone_id: ZoneId, hashed: u32) -> DailyNarrative {
    let scripts = DAILY_NARRATIVE_SCRIPTS
        .iter()
        .filter(|script| script.zone_id == zone_id)
        .collect::<Vec<_>>();
    let script = if scripts.is_empty() {
        &DAILY_NARRATIVE_SCRIPTS[hashed as usize % DAILY_NARRATIVE_SCRIPTS.len()]
    } else {
        scripts[hashed as usize % scripts.len()]
    };

    DailyNarrative {
        intro: script.intro.to_string(),
        success: script.success.to_string(),
        failure: script.failure.to_string(),
        hints: script.hints.iter().map(|hint| hint.to_string()).collect(),
    }
}

#[cfg(test)]
mod daily_tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 15)
            .single()
            .expect("timestamp should be valid")
    }

    #[test]
    fn same_utc_day_generates_identical_challenges() {
        let morning = generate_daily_challenge(at(2024, 5, 1, 0));
        let evening = generate_daily_challenge(at(2024, 5, 1, 23));
        assert_eq!(morning, evening);
        assert_eq!(morning.day_key, "2024-05-01");
        assert_eq!(morning.seed, "2024-05-01-codequest");
        assert_eq!(
            morning.expires_at,
            Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0)
                .single()
                .expect("timestamp should be valid")
        );
    }

    #[test]
    fn different_days_rotate_the_selection() {
        let challenges = (1..=30)
            .map(|day| generate_daily_challenge(at(2024, 5, day, 12)))
            .collect::<Vec<_>>();
        let mut zones = challenges
            .iter()
            .map(|challenge| challenge.zone_id)
            .collect::<Vec<_>>();
        zones.sort_unstable();
        zones.dedup();
        assert!(zones.len() > 1, "a month should span several zones");
        for challenge in &challenges {
            assert!((80..170).contains(&challenge.bonus_xp));
            assert!(challenge.bonus_badge.is_some());
            assert_eq!(challenge.narrative.hints.len(), 3);
        }
    }

    #[test]
    fn narrative_matches_the_selected_zone_pool() {
        let challenge = generate_daily_challenge(at(2024, 5, 1, 12));
        let hashed = hash_seed(&challenge.seed);
        let expected = pick_narrative(challenge.zone_id, hashed);
        assert_eq!(challenge.narrative, expected);
    }

    #[test]
    fn hash_matches_the_reference_arithmetic() {
        assert_eq!(hash_seed(""), 0);
        // h("a") = 97, then h("ab") = 97 * 31 + 98.
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("ab"), 97 * 31 + 98);
        // Wraparound stays inside 32 bits and the result is the absolute value.
        let long_seed = "2024-05-01-codequest";
        assert!(hash_seed(long_seed) > 0);
        assert_eq!(hash_seed(long_seed), hash_seed(long_seed));
    }

    #[test]
    fn title_names_the_zone() {
        assert_eq!(
            daily_title(ZoneId::Village),
            "Défi quotidien · Village de la Logique"
        );
    }
}
