mod feedback;
mod rubric;
mod scorers;
mod text;
pub mod themes;
mod topic;
mod validation;

pub use feedback::CompetencyFeedback;
pub use rubric::Rubric;
pub use text::{TextStats, TokenSet};
pub use topic::TopicStatus;
pub use validation::BasicValidation;

use serde::{Deserialize, Serialize};

/// The five official ENEM competencies as a fixed-shape record, each in
/// [0, 200]. A closed struct rather than a map so malformed keys cannot
/// slip through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompetencyScores {
    pub c1: u16,
    pub c2: u16,
    pub c3: u16,
    pub c4: u16,
    pub c5: u16,
}

impl CompetencyScores {
    pub fn total(&self) -> u16 {
        self.c1 + self.c2 + self.c3 + self.c4 + self.c5
    }

    pub(crate) fn as_array(&self) -> [u16; 5] {
        [self.c1, self.c2, self.c3, self.c4, self.c5]
    }
}

/// Full grading output for one essay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub topic_status: TopicStatus,
    pub scores: CompetencyScores,
    pub total: u16,
    pub feedback: CompetencyFeedback,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub tags: Vec<String>,
    pub validation: BasicValidation,
}

/// Stateless engine applying the rubric to essay text. Holds no mutable
/// state; every call computes its result from scratch.
pub struct GradingEngine {
    rubric: Rubric,
}

impl Default for GradingEngine {
    fn default() -> Self {
        Self::new(Rubric::default())
    }
}

impl GradingEngine {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Grades one essay against one theme.
    ///
    /// The hard topic check runs first: an off-topic essay gets all five
    /// competencies forced to zero and the scorers never run. Feedback,
    /// strengths/weaknesses, and tags are derived in either case, so an
    /// off-topic result still explains itself.
    pub fn grade(&self, text: &str, theme: &str) -> Evaluation {
        let topic_status = topic::check(text, theme, &self.rubric);

        let scores = if topic_status.is_off_topic() {
            CompetencyScores::default()
        } else {
            scorers::score_text(text, &self.rubric)
        };

        let stats = TextStats::of(text);

        Evaluation {
            topic_status,
            total: scores.total(),
            feedback: feedback::feedback_for(&scores),
            strengths: feedback::strengths(&scores),
            weaknesses: feedback::weaknesses(&scores),
            tags: feedback::tags(&stats, &scores, topic_status),
            validation: validation::basics(text, &self.rubric),
            scores,
        }
    }

    /// Structural pre-check alone, without scoring.
    pub fn validate_basics(&self, text: &str) -> BasicValidation {
        validation::basics(text, &self.rubric)
    }
}
