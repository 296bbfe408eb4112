use cq_core::ZoneId;

pub(crate) struct DailyNarrativeScript {
    pub(crate) id: &'static str,
    pub(crate) zone_id: ZoneId,
    pub(crate) intro: &'static str,
    pub(crate) success: &'static str,
    pub(crate) failure: &'static str,
    pub(crate) hints: [&'static str; 3],
}

pub(crate) const DAILY_NARRATIVE_SCRIPTS: &[DailyNarrativeScript] = &[
    DailyNarrativeScript {
        id: "village-dawn-echo",
        zone_id: ZoneId::Village,
        intro: "Aïko veut réveiller le cristal avant l'aube : trois pulsations bien dosées guideront les voyageurs.",
        success: "La lueur tissée file sur les toits; badge Veilleur des Brumes décroché pour la nuit.",
        failure: "Le cristal grésille sans éclat. Observe la cadence de tes signaux et retente avant le lever du soleil.",
        hints: [
            "Assure-toi d'activer la source `crystal` avant toute autre lumière.",
            "Une alternance crystal → lantern évite la surcharge du pilier.",
            "Allume `crystal`, puis `lantern`, et termine en réactivant `crystal` pour ouvrir la passerelle.",
        ],
    },
    DailyNarrativeScript {
        id: "village-twilight-greeting",
        zone_id: ZoneId::Village,
        intro: "Les habitant·es attendent un salut lumineux synchronisé avec la cloche du soir.",
        success: "Le village applaudit ton signal; la bannière Éclaireur Solaire flotte au vent.",
        failure: "La cloche reste silencieuse. Ajuste l'ordre de tes blocs avant la prochaine oscillation.",
        hints: [
            "Un message `log` peut accompagner la lumière pour convaincre la cloche.",
            "Place ton appel `log` après le réglage de la lumière pour annoncer la séquence.",
            "Active `crystal` sur TRUE puis journalise \"Pont dégagé\" pour valider ce défi.",
        ],
    },
    DailyNarrativeScript {
        id: "forest-firefly-maze",
        zone_id: ZoneId::Forest,
        intro: "Rae veut coordonner un essaim de lucioles : seules des boucles régulières calmeront la forêt.",
        success: "Les arbres s’illuminent en spirale : te voilà Gardien des Runes pour la nuit.",
        failure: "Les lucioles s'éparpillent. Revérifie ta structure de boucle avant qu'elles ne se dispersent.",
        hints: [
            "Utilise une boucle pour répéter l'appel aux lucioles plutôt que des blocs isolés.",
            "Pense à initialiser l'intensité avant de lancer la boucle.",
            "Répète l'action `setLightState` trois fois via une boucle.",
        ],
    },
    DailyNarrativeScript {
        id: "forest-rhythm-hunt",
        zone_id: ZoneId::Forest,
        intro: "Une pluie de pollen sonne faux; Rae souhaite un motif sonore pour réaccorder les troncs.",
        success: "Le battement régulier apaise la canopée; badge Navigateur Astral offert.",
        failure: "Le motif se casse avant la quatrième pulsation. Jette un œil à ta condition de sortie.",
        hints: [
            "Les événements sonores doivent alterner `drum_low` puis `drum_high`.",
            "Planifie une variable compteur pour suivre les alternances.",
            "Boucle 4 fois: set `drum_low` TRUE, puis `drum_high` FALSE avant d'inverser.",
        ],
    },
    DailyNarrativeScript {
        id: "temple-halo-trial",
        zone_id: ZoneId::Temple,
        intro: "Maëlle perçoit une arche hésitante : il faut une condition précise pour ouvrir le halo central.",
        success: "Les runes chantent ton nom; le badge Héraut des Courants rejoint ton codex.",
        failure: "Le halo reste opaque; revois la logique de ton `if/else` avant la prochaine oscillation.",
        hints: [
            "Compare deux états avant de déclencher la lumière : condition > sinon.",
            "Teste si `bridge_left` ET `bridge_right` sont actifs avant d'ouvrir `halo`.",
            "Structure un `if` qui active `halo` si les deux ponts sont TRUE, sinon active `warning`.",
        ],
    },
    DailyNarrativeScript {
        id: "temple-riddle-threshold",
        zone_id: ZoneId::Temple,
        intro: "Les arches réclament une énigme numérique : Maëlle te confie la clé.",
        success: "Les colonnes pivotent en ta faveur; badge Oracle du Zénith acquis.",
        failure: "Le verdict est négatif : la somme saisie n'atteint pas le seuil requis.",
        hints: [
            "Calcule une somme avant de prendre ta décision.",
            "Compare la variable `energy` à 42 pour savoir quel bloc activer.",
            "Si `energy >= 42`, allume `halo_prime`; sinon, journalise un message d'avertissement.",
        ],
    },
    DailyNarrativeScript {
        id: "forge-anvil-march",
        zone_id: ZoneId::Forge,
        intro: "Dorin veut chauffer l'acier via une séquence de variables manipulées au millisecondes près.",
        success: "Les enclumes résonnent, tu portes désormais le titre d'Artisan des Flux.",
        failure: "La température retombe : ta variable perd de la valeur en route.",
        hints: [
            "Initialise une variable `chaleur` puis incrémente-la régulièrement.",
            "Utilise une addition pour ajouter 5 à chaque tour.",
            "Boucle 3 fois : ajoute 5 à `chaleur` puis affiche la valeur via `log`.",
        ],
    },
    DailyNarrativeScript {
        id: "forge-signal-burst",
        zone_id: ZoneId::Forge,
        intro: "Une corne d'alarme doit envoyer trois rafales coordonnées vers la Forge.",
        success: "Signal parfait : la garde t’offre le badge Forgeron des Sillages.",
        failure: "Une rafale manque; vérifie l’ordre des signaux et recommence.",
        hints: [
            "Prévois un tableau ou une séquence qui stocke les intensités.",
            "Envoie `flare_north`, `flare_center`, `flare_south` dans cet ordre.",
            "Définis une liste de trois directions puis parcours-la pour activer chaque `flare`.",
        ],
    },
    DailyNarrativeScript {
        id: "tower-signal-cascade",
        zone_id: ZoneId::Tower,
        intro: "Lumen attend une cascade d'événements temporels pour réveiller la tour.",
        success: "Les signaux grimpent jusqu'au ciel; badge Vigie Azurée débloqué.",
        failure: "La cascade se coupe au second palier. Vérifie tes déclencheurs successifs.",
        hints: [
            "Utilise des événements différés ou un compteur temporel.",
            "Planifie trois états : `beacon_low`, `beacon_mid`, `beacon_high`.",
            "Active successivement les trois balises dans une boucle avec condition sur l'indice.",
        ],
    },
    DailyNarrativeScript {
        id: "tower-stormwatch",
        zone_id: ZoneId::Tower,
        intro: "Une tempête approche : il faut analyser les erreurs récurrentes pour sécuriser la tour.",
        success: "Tu anticipes chaque rafale; badge Observateur des Vents gagné.",
        failure: "La tour détecte encore une erreur logique. Inspecte tes comparaisons.",
        hints: [
            "Stocke les erreurs dans une variable avant de décider de la réponse.",
            "Si `errors > 2`, affiche un avertissement supplémentaire.",
            "Crée une condition `if/else` : au-delà de 2 erreurs, active `shield`; sinon journalise \"Ciel dégagé\".",
        ],
    },
    DailyNarrativeScript {
        id: "sanctum-harmonic-loop",
        zone_id: ZoneId::Sanctum,
        intro: "Elyon exige une boucle parfaite combinant toutes tes connaissances.",
        success: "Le Sanctuaire vibre d'harmonie; badge Harmonie Primordiale étincelle encore plus.",
        failure: "La résonance se rompt avant la fin. Ajuste la combinaison boucles + conditions.",
        hints: [
            "Combine boucle + condition pour ajuster l’état final.",
            "Utilise `if` à l’intérieur d’une boucle pour alterner deux lumières.",
            "Boucle 4 fois : si l’index est pair, active `aura`; sinon active `pulse`.",
        ],
    },
    DailyNarrativeScript {
        id: "sanctum-bridge-convergence",
        zone_id: ZoneId::Sanctum,
        intro: "Les ponts finaux doivent converger au même instant; Elyon t'invite à une ultime synchronisation.",
        success: "Tous les flux convergent sous tes pas; tu emportes le titre de Synthétiseur Solaire.",
        failure: "Un pont tarde à répondre. Harmonise tes valeurs partagées avant de retenter.",
        hints: [
            "Travaille avec plusieurs variables pour suivre chaque pont.",
            "Vérifie que toutes les valeurs atteignent TRUE avant de déclencher le final.",
            "Définis trois variables booléennes, mets-les à TRUE, puis active `finale` si elles sont toutes vraies.",
        ],
    },
];
