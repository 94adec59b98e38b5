use super::rubric::Rubric;
use super::text::{contains_phrase, TextStats};
use super::CompetencyScores;

pub(crate) const MAX_COMPETENCY_SCORE: u16 = 200;

/// Applies the five tiered competency rules to one essay.
///
/// Every rule is a pure function of the raw text and the rubric. Scores are
/// clamped to [0, 200] as a postcondition even though the tier tables
/// already stay in range.
pub(crate) fn score_text(text: &str, rubric: &Rubric) -> CompetencyScores {
    let lowered = text.to_lowercase();
    let stats = TextStats::of(text);

    CompetencyScores {
        c1: clamp(c1_norm_compliance(&lowered, rubric)),
        c2: clamp(c2_topic_comprehension(&stats)),
        c3: clamp(c3_organization(&stats)),
        c4: clamp(c4_argumentation(&lowered, rubric)),
        c5: clamp(c5_intervention(&lowered, rubric)),
    }
}

fn clamp(score: u16) -> u16 {
    score.min(MAX_COMPETENCY_SCORE)
}

/// C1, command of formal writing: tiered on the number of rubric-listed
/// misspellings and agreement errors found in the text.
fn c1_norm_compliance(lowered: &str, rubric: &Rubric) -> u16 {
    let errors = count_errors(lowered, rubric);
    match errors {
        0 => 200,
        1..=3 => 160,
        4..=6 => 120,
        _ => 80,
    }
}

pub(crate) fn count_errors(lowered: &str, rubric: &Rubric) -> usize {
    rubric
        .misspellings
        .iter()
        .chain(rubric.agreement_errors.iter())
        .filter(|entry| contains_phrase(lowered, entry))
        .count()
}

/// C2, comprehension of the prompt: tiered on paragraph count.
fn c2_topic_comprehension(stats: &TextStats) -> u16 {
    match stats.paragraph_count {
        n if n >= 4 => 200,
        3 => 150,
        2 => 100,
        _ => 50,
    }
}

/// C3, selection and organization of information: tiered on text length.
fn c3_organization(stats: &TextStats) -> u16 {
    match stats.char_count {
        n if n >= 600 => 200,
        n if n >= 400 => 150,
        n if n >= 200 => 100,
        _ => 50,
    }
}

/// C4, argumentative mechanics: any rubric connector present.
fn c4_argumentation(lowered: &str, rubric: &Rubric) -> u16 {
    let connected = rubric
        .connectors
        .iter()
        .any(|connector| contains_phrase(lowered, connector));
    if connected {
        200
    } else {
        100
    }
}

/// C5, intervention proposal: any rubric key phrase present.
fn c5_intervention(lowered: &str, rubric: &Rubric) -> u16 {
    let proposed = rubric
        .intervention_phrases
        .iter()
        .any(|phrase| contains_phrase(lowered, phrase));
    if proposed {
        200
    } else {
        80
    }
}
