use super::rubric::Rubric;
use super::text::{contains_phrase, word_count};
use serde::{Deserialize, Serialize};

const MIN_VALID_WORDS: usize = 200;

/// Structural pre-check attached to every grading response. Informational
/// metadata only; it never gates whether scoring runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicValidation {
    #[serde(rename = "palavras")]
    pub word_count: usize,
    #[serde(rename = "temTese")]
    pub has_thesis: bool,
    #[serde(rename = "temProposta")]
    pub has_proposal: bool,
    #[serde(rename = "temConclusao")]
    pub has_conclusion: bool,
    #[serde(rename = "valida")]
    pub is_valid: bool,
}

pub(crate) fn basics(text: &str, rubric: &Rubric) -> BasicValidation {
    let lowered = text.to_lowercase();
    let word_count = word_count(text);
    let has_thesis = any_marker(&lowered, &rubric.thesis_markers);
    let has_proposal = any_marker(&lowered, &rubric.proposal_markers);
    let has_conclusion = any_marker(&lowered, &rubric.conclusion_markers);

    BasicValidation {
        word_count,
        has_thesis,
        has_proposal,
        has_conclusion,
        is_valid: word_count >= MIN_VALID_WORDS && has_thesis && has_proposal && has_conclusion,
    }
}

fn any_marker(lowered: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| contains_phrase(lowered, marker))
}
