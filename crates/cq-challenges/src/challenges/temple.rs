use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

use crate::definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective};

pub(crate) fn challenge() -> ChallengeDefinition {
    ChallengeDefinition {
        id: ZoneId::Temple,
        zone_name: "Temple des Conditions".to_string(),
        title: "Choisir la bonne arche".to_string(),
        description: "Lorsque la rune est lumineuse, allume le pont pour ouvrir le temple, sinon \
                      éteins le totem pour économiser l'énergie."
            .to_string(),
        objectives: vec![
            Objective::required(
                "check-rune",
                "Observer la rune",
                "Évalue l'état de la rune afin de décider de l'action à mener.",
            ),
            Objective::required(
                "route-energy",
                "Diriger l'énergie",
                "Allume le pont si la rune est active, désactive le totem sinon.",
            ),
        ],
        narrative: ChallengeNarrative {
            mentor: Mentor {
                name: "Maëlle".to_string(),
                title: "Oracle du Temple".to_string(),
            },
            intro: "Les arches attendent un esprit nuancé. Choisis avec précision où l'énergie \
                    doit circuler."
                .to_string(),
            success: "Les runes changent de teinte : ton discernement ouvre la travée sacrée."
                .to_string(),
            failure: "Le flux reste instable. Vérifie les branches `if` et `else` de ta décision."
                .to_string(),
        },
        allowed_capabilities: vec!["setLightState".to_string()],
        starter_script: concat!(
            "if true {\n",
            "  world.setLightState(\"bridge\", true);\n",
            "} else {\n",
            "  world.setLightState(\"totem\", false);\n",
            "}\n",
        )
        .to_string(),
        hint: "N'oublie pas la branche `else` pour repousser l'énergie vers le totem inactif."
            .to_string(),
        rewards: ChallengeReward::xp(120),
        validate,
    }
}

fn validate(result: &ExecutionResult) -> Verdict {
    let bridge_on = result.state.lights.get("bridge") == Some(&true);
    let totem_off = result.state.lights.get("totem") != Some(&true);
    if bridge_on && totem_off {
        Verdict::pass("La condition est correctement appliquée, le temple se réveille.")
    } else {
        Verdict::fail("Le pont doit être allumé et le totem éteint en fonction de la condition.")
    }
}
