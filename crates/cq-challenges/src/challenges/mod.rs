mod forest;
mod forge;
mod sanctum;
mod temple;
mod tower;
mod village;

use crate::definitions::ChallengeDefinition;

pub(crate) fn bundled_challenges() -> Vec<ChallengeDefinition> {
    vec![
        village::challenge(),
        forest::challenge(),
        temple::challenge(),
        forge::challenge(),
        tower::challenge(),
        sanctum::challenge(),
    ]
}
