use cq_core::{ChallengeReward, ExecutionResult, Verdict, ZoneId};

use crate::definitions::{ChallengeDefinition, ChallengeNarrative, Mentor, Objective};

pub(crate) fn challenge() -> ChallengeDefinition {
    ChallengeDefinition {
        id: ZoneId::Village,
        zone_name: "Village de la Logique".to_string(),
        title: "Réveiller le cristal".to_string(),
        description: "Active le cristal central en allumant la lumière adéquate. Utilise un bloc \
                      d'action simple pour envoyer un signal."
            .to_string(),
        objectives: vec![
            Objective::required(
                "activate-crystal",
                "Allumer le cristal central",
                "Déclenche la lumière `crystal` afin de réveiller l'île.",
            ),
            Objective::optional(
                "share-signal",
                "Partager un salut lumineux",
                "Optionnel : envoie un message via `log` pour saluer les habitants.",
            ),
        ],
        narrative: ChallengeNarrative {
            mentor: Mentor {
                name: "Aïko".to_string(),
                title: "Veilleuse du Village".to_string(),
            },
            intro: "Approche, apprenti·e : le cristal sommeille. Une simple impulsion bien \
                    orientée suffit."
                .to_string(),
            success: "La cloche solaire résonne — ton signal est net, le pont suivant s'éveille."
                .to_string(),
            failure: "Le cristal reste muet. Observe le bloc ciblé et l'état envoyé avant de \
                      réessayer."
                .to_string(),
        },
        allowed_capabilities: vec!["setLightState".to_string(), "log".to_string()],
        starter_script: "world.setLightState(\"crystal\", true);\n".to_string(),
        hint: "Sélectionne la lumière `crystal` et règle son état sur TRUE avant d'exécuter."
            .to_string(),
        rewards: ChallengeReward::xp(50),
        validate,
    }
}

fn validate(result: &ExecutionResult) -> Verdict {
    if result.state.light_on("crystal") {
        Verdict::pass("Parfait ! Le cristal s'illumine et ouvre le pont suivant.")
    } else {
        Verdict::fail("Le cristal n'a pas reçu assez de lumière. Essaie d'activer la bonne source.")
    }
}
