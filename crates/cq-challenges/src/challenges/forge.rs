use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

use crate::definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective};

pub(crate) fn challenge() -> ChallengeDefinition {
    ChallengeDefinition {
        id: ZoneId::Forge,
        zone_name: "Forge des Variables".to_string(),
        title: "Chauffer l'enclume".to_string(),
        description: "Utilise une variable compteur pour chauffer l'enclume trois fois. Chaque \
                      coup de marteau incrémente le compteur."
            .to_string(),
        objectives: vec![
            Objective::required(
                "init-counter",
                "Préparer la variable",
                "Crée une variable `coups` initialisée à 0 avant de commencer la séquence.",
            ),
            Objective::required(
                "heat-forge",
                "Monter en température",
                "Incrémente le compteur au moins trois fois via `incrementCounter`.",
            ),
        ],
        narrative: ChallengeNarrative {
            mentor: Mentor {
                name: "Dorin".to_string(),
                title: "Maître Forgeron".to_string(),
            },
            intro: "Chaque valeur que tu stockes est une braise. Nourris-la méthodiquement et la \
                    forge rougira."
                .to_string(),
            success: "Le métal chante : ta variable suit le rythme et la chaleur envahit \
                      l'atelier."
                .to_string(),
            failure: "La forge reste tiède. Vérifie l'initialisation et le nombre d'incréments."
                .to_string(),
        },
        allowed_capabilities: vec!["incrementCounter".to_string()],
        starter_script: concat!(
            "let coups = 0;\n",
            "while coups < 3 {\n",
            "  coups = world.incrementCounter(\"forge\");\n",
            "}\n",
        )
        .to_string(),
        hint: "Pense à relier la variable locale utilisée dans la boucle avec le compteur `forge` \
               pour suivre la chaleur."
            .to_string(),
        rewards: ChallengeReward::xp(160),
        validate,
    }
}

fn validate(result: &ExecutionResult) -> Verdict {
    if result.state.counter("forge") >= 3 {
        Verdict::pass("La forge est en fusion, l'enclume rougeoie.")
    } else {
        Verdict::fail("Il faut au moins trois coups mesurés pour chauffer suffisamment.")
    }
}
