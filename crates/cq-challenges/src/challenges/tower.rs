use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

use crate::definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective};

pub(crate) fn challenge() -> ChallengeDefinition {
    ChallengeDefinition {
        id: ZoneId::Tower,
        zone_name: "Tour des Événements".to_string(),
        title: "Répondre aux signaux".to_string(),
        description: "La tour reçoit deux signaux : « gong » et « clairon ». Écoute ces \
                      événements et allume les lumières correspondantes."
            .to_string(),
        objectives: vec![
            Objective::required(
                "emit-signals",
                "Émettre gong et clairon",
                "Assure-toi que les deux événements sont envoyés dans la séquence.",
            ),
            Objective::required(
                "react-lights",
                "Allumer la tour",
                "Allume le totem lorsque les signaux requis ont été reçus.",
            ),
        ],
        narrative: ChallengeNarrative {
            mentor: Mentor {
                name: "Lumen".to_string(),
                title: "Vigie de la Tour".to_string(),
            },
            intro: "Les signaux orchestrent la lumière. Capte-les, réponds-y, et la tour dansera."
                .to_string(),
            success: "La tour pulse au rythme des deux appels — tes réactions sont impeccables."
                .to_string(),
            failure: "Il manque un signal ou une action. Vérifie l'ordre des événements et la \
                      lumière ciblée."
                .to_string(),
        },
        allowed_capabilities: vec!["pushEvent".to_string(), "setLightState".to_string()],
        starter_script: concat!(
            "world.pushEvent(\"gong\");\n",
            "world.pushEvent(\"clairon\");\n",
        )
        .to_string(),
        hint: "Stocke les événements dans des variables ou vérifie la séquence avant de \
               déclencher la lumière."
            .to_string(),
        rewards: ChallengeReward::xp(190),
        validate,
    }
}

fn validate(result: &ExecutionResult) -> Verdict {
    let has_gong = result.state.has_event("gong");
    let has_clairon = result.state.has_event("clairon");
    if has_gong && has_clairon && result.state.light_on("totem") {
        Verdict::pass("La tour a capté les deux signaux, le totem scintille.")
    } else {
        Verdict::fail("Assure-toi d'émettre les deux événements et d'activer le totem.")
    }
}
