use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

use crate::definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective};

pub(crate) fn challenge() -> ChallengeDefinition {
    ChallengeDefinition {
        id: ZoneId::Forest,
        zone_name: "Forêt des Boucles".to_string(),
        title: "Tracer un sentier répétitif".to_string(),
        description: "Répète l'action de pose de balise 4 fois pour baliser la forêt. Utilise un \
                      bloc de boucle pour éviter la répétition manuelle."
            .to_string(),
        objectives: vec![
            Objective::required(
                "repeat-beacon",
                "Planter 4 balises",
                "Utilise une boucle pour émettre l'événement `pas` quatre fois.",
            ),
            Objective::optional(
                "mark-path",
                "Déplacer le marqueur",
                "Optionnel : fais avancer le marqueur via `moveMarker` pour visualiser la \
                 progression.",
            ),
        ],
        narrative: ChallengeNarrative {
            mentor: Mentor {
                name: "Rae".to_string(),
                title: "Traceur de la Canopée".to_string(),
            },
            intro: "Dans la forêt, rien ne se répète au hasard. Compose un rythme net et la \
                    lumière te guidera."
                .to_string(),
            success: "Les arbres chantent ta boucle : le sentier est régulier et les spores \
                      s'alignent."
                .to_string(),
            failure: "Ton motif manque de battements. Vérifie le nombre d'itérations et l'action \
                      exécutée."
                .to_string(),
        },
        allowed_capabilities: vec!["pushEvent".to_string(), "moveMarker".to_string()],
        starter_script: concat!(
            "for pas in 0..4 {\n",
            "  world.pushEvent(\"pas\");\n",
            "}\n",
        )
        .to_string(),
        hint: "Appuie-toi sur une boucle de 4 itérations pour éviter les duplications.".to_string(),
        rewards: ChallengeReward::xp(80),
        validate,
    }
}

fn validate(result: &ExecutionResult) -> Verdict {
    if result.state.event_count("pas") >= 4 {
        Verdict::pass("Excellent, la forêt est balisée de manière régulière.")
    } else {
        Verdict::fail("Il faut au moins quatre pas répétés pour baliser le sentier.")
    }
}
