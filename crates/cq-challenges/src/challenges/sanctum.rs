use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

use crate::definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective};

pub(crate) fn challenge() -> ChallengeDefinition {
    ChallengeDefinition {
        id: ZoneId::Sanctum,
        zone_name: "Sanctuaire Final".to_string(),
        title: "Rituel d'harmonie".to_string(),
        description: "Active simultanément les cristaux, le pont et le totem, en enregistrant \
                      trois coups de forge et un signal final."
            .to_string(),
        objectives: vec![
            Objective::required(
                "ignite-pillars",
                "Synchroniser les lumières",
                "Active crystal, bridge et totem dans la même séquence.",
            ),
            Objective::required(
                "seal-ritual",
                "Accomplir le rituel",
                "Compter trois frappes de forge puis envoyer l'événement `rituel` final.",
            ),
        ],
        narrative: ChallengeNarrative {
            mentor: Mentor {
                name: "Elyon".to_string(),
                title: "Gardien du Sanctuaire".to_string(),
            },
            intro: "Toutes tes connaissances convergent ici. Orchestre les flux avec calme et \
                    précision."
                .to_string(),
            success: "Un halo doré t'entoure : tu as harmonisé les îles, le portail s'ouvre."
                .to_string(),
            failure: "L'équilibre n'est pas encore parfait. Vérifie chaque pilier et le nombre \
                      exact de frappes."
                .to_string(),
        },
        allowed_capabilities: vec![
            "setLightState".to_string(),
            "incrementCounter".to_string(),
            "pushEvent".to_string(),
        ],
        starter_script: concat!(
            "for frappe in 0..3 {\n",
            "  world.incrementCounter(\"forge\");\n",
            "}\n",
            "world.setLightState(\"crystal\", true);\n",
            "world.setLightState(\"bridge\", true);\n",
            "world.pushEvent(\"rituel\");\n",
        )
        .to_string(),
        hint: "Ordonne la boucle pour la forge avant d'activer les lumières puis termine par \
               l'événement `rituel`."
            .to_string(),
        rewards: ChallengeReward::with_badge(260, "Harmonie Primordiale"),
        validate,
    }
}

fn validate(result: &ExecutionResult) -> Verdict {
    let mut missing = Vec::new();
    for light in ["crystal", "bridge", "totem"] {
        if !result.state.light_on(light) {
            missing.push(format!("lumière `{}`", light));
        }
    }
    if result.state.counter("forge") < 3 {
        missing.push("trois frappes de forge".to_string());
    }
    if !result.state.has_event("rituel") {
        missing.push("le signal `rituel`".to_string());
    }

    if missing.is_empty() {
        Verdict::pass("Le rituel complet s'illumine : la passerelle vers le sanctuaire s'ouvre.")
    } else {
        Verdict::fail(format!(
            "Tous les éléments doivent être activés, il manque : {}.",
            missing.join(", ")
        ))
    }
}
