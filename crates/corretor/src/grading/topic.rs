use super::rubric::Rubric;
use super::text::TokenSet;
use serde::{Deserialize, Serialize};

/// Whether an essay's vocabulary overlaps the assigned theme enough to be
/// considered on topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    OnTopic,
    OffTopic,
}

impl TopicStatus {
    pub fn is_off_topic(self) -> bool {
        self == TopicStatus::OffTopic
    }
}

/// Compares theme and essay token sets. The essay is off-topic iff the
/// shared fraction of the theme's tokens falls below the rubric threshold.
///
/// An empty theme or empty essay skips the check entirely: there is nothing
/// meaningful to compare, so the essay is given the benefit of the doubt.
pub(crate) fn check(text: &str, theme: &str, rubric: &Rubric) -> TopicStatus {
    if text.trim().is_empty() || theme.trim().is_empty() {
        return TopicStatus::OnTopic;
    }

    let stoplist = rubric.stoplist_refs();
    let theme_tokens = TokenSet::extract(theme, &stoplist);
    let text_tokens = TokenSet::extract(text, &stoplist);

    if similarity(&theme_tokens, &text_tokens) < rubric.topic_similarity_threshold {
        TopicStatus::OffTopic
    } else {
        TopicStatus::OnTopic
    }
}

/// Fraction of theme tokens present in the essay, 1.0 when the theme set is
/// empty (a theme made entirely of stopwords cannot rule anything out).
fn similarity(theme: &TokenSet, text: &TokenSet) -> f64 {
    if theme.is_empty() {
        return 1.0;
    }
    theme.overlap(text) as f64 / theme.len() as f64
}
