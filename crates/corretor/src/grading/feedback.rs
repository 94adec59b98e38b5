use super::text::TextStats;
use super::topic::TopicStatus;
use super::CompetencyScores;
use serde::{Deserialize, Serialize};

const STRENGTH_THRESHOLD: u16 = 150;
const WEAKNESS_THRESHOLD: u16 = 100;

const COMPETENCY_LABELS: [&str; 5] = [
    "Domínio da norma culta",
    "Compreensão da proposta",
    "Organização textual",
    "Argumentação",
    "Proposta de intervenção",
];

/// One feedback sentence per competency, tiered by fixed score thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyFeedback {
    pub c1: String,
    pub c2: String,
    pub c3: String,
    pub c4: String,
    pub c5: String,
}

pub(crate) fn feedback_for(scores: &CompetencyScores) -> CompetencyFeedback {
    CompetencyFeedback {
        c1: c1_feedback(scores.c1).to_string(),
        c2: c2_feedback(scores.c2).to_string(),
        c3: c3_feedback(scores.c3).to_string(),
        c4: c4_feedback(scores.c4).to_string(),
        c5: c5_feedback(scores.c5).to_string(),
    }
}

fn c1_feedback(score: u16) -> &'static str {
    if score >= 160 {
        "Excelente domínio da norma culta. Poucos ou nenhum erro gramatical encontrado."
    } else if score >= 120 {
        "Bom domínio da norma culta. Alguns erros pontuais que podem ser corrigidos."
    } else {
        "Necessita melhorar o domínio da norma culta. Vários erros gramaticais e ortográficos encontrados."
    }
}

fn c2_feedback(score: u16) -> &'static str {
    if score >= 160 {
        "Excelente compreensão da proposta. Tema bem desenvolvido e aprofundado."
    } else if score >= 120 {
        "Boa compreensão da proposta. Tema abordado adequadamente, mas pode ser mais aprofundado."
    } else if score >= 100 {
        "Compreensão básica da proposta. Tema abordado superficialmente, necessita mais desenvolvimento."
    } else {
        "Fuga total ao tema proposto. A redação não abordou o assunto principal."
    }
}

fn c3_feedback(score: u16) -> &'static str {
    if score >= 160 {
        "Excelente organização textual. Informações bem selecionadas e relacionadas."
    } else if score >= 120 {
        "Boa organização textual. Informações adequadas, mas podem ser melhor relacionadas."
    } else {
        "Organização textual básica. Informações pouco relacionadas e selecionadas."
    }
}

fn c4_feedback(score: u16) -> &'static str {
    if score >= 160 {
        "Excelente argumentação. Mecanismos linguísticos bem utilizados para construir a argumentação."
    } else if score >= 120 {
        "Boa argumentação. Alguns mecanismos linguísticos presentes, mas podem ser ampliados."
    } else {
        "Argumentação básica. Poucos mecanismos linguísticos para construção da argumentação."
    }
}

fn c5_feedback(score: u16) -> &'static str {
    if score >= 160 {
        "Excelente proposta de intervenção. Solução clara, detalhada e viável."
    } else if score >= 120 {
        "Boa proposta de intervenção. Solução presente, mas pode ser mais detalhada."
    } else {
        "Proposta de intervenção básica. Solução pouco desenvolvida ou ausente."
    }
}

/// Competency labels scoring at or above the strength threshold.
pub(crate) fn strengths(scores: &CompetencyScores) -> Vec<String> {
    labels_where(scores, |score| score >= STRENGTH_THRESHOLD)
}

/// Competency labels scoring below the weakness threshold.
pub(crate) fn weaknesses(scores: &CompetencyScores) -> Vec<String> {
    labels_where(scores, |score| score < WEAKNESS_THRESHOLD)
}

fn labels_where(scores: &CompetencyScores, keep: impl Fn(u16) -> bool) -> Vec<String> {
    scores
        .as_array()
        .iter()
        .zip(COMPETENCY_LABELS)
        .filter(|(score, _)| keep(**score))
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Coarse descriptive labels derived from text statistics, score thresholds,
/// and the topic status.
pub(crate) fn tags(stats: &TextStats, scores: &CompetencyScores, topic: TopicStatus) -> Vec<String> {
    let mut tags = Vec::new();

    if stats.word_count >= 400 {
        tags.push("redação extensa");
    }
    if stats.word_count < 250 {
        tags.push("redação curta");
    }
    if scores.c1 >= 160 {
        tags.push("sem erros gramaticais");
    }
    if scores.c1 < 100 {
        tags.push("vários erros gramaticais");
    }
    if scores.c2 >= 150 {
        tags.push("boa estrutura");
    }
    if scores.c3 >= 150 {
        tags.push("texto bem desenvolvido");
    }
    if scores.c4 >= 150 {
        tags.push("boa conexão");
    }
    if scores.c5 >= 150 {
        tags.push("proposta detalhada");
    }
    if topic.is_off_topic() {
        tags.push("fuga ao tema");
    }

    tags.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: u16) -> CompetencyScores {
        CompetencyScores {
            c1: score,
            c2: score,
            c3: score,
            c4: score,
            c5: score,
        }
    }

    #[test]
    fn top_scores_yield_excellent_feedback() {
        let fb = feedback_for(&uniform(200));
        assert!(fb.c1.starts_with("Excelente"));
        assert!(fb.c5.starts_with("Excelente"));
    }

    #[test]
    fn c2_has_a_superficial_and_an_off_topic_tier() {
        assert!(c2_feedback(100).contains("superficialmente"));
        assert!(c2_feedback(0).contains("Fuga total"));
    }

    #[test]
    fn strengths_and_weaknesses_split_on_thresholds() {
        let scores = CompetencyScores {
            c1: 200,
            c2: 150,
            c3: 149,
            c4: 100,
            c5: 99,
        };
        assert_eq!(
            strengths(&scores),
            vec!["Domínio da norma culta", "Compreensão da proposta"]
        );
        assert_eq!(weaknesses(&scores), vec!["Proposta de intervenção"]);
    }

    #[test]
    fn zeroed_scores_are_all_weaknesses() {
        assert_eq!(weaknesses(&uniform(0)).len(), 5);
        assert!(strengths(&uniform(0)).is_empty());
    }

    #[test]
    fn short_and_long_tags_are_mutually_exclusive() {
        let scores = uniform(120);
        let short = tags(
            &TextStats {
                word_count: 100,
                paragraph_count: 1,
                char_count: 500,
            },
            &scores,
            TopicStatus::OnTopic,
        );
        assert!(short.contains(&"redação curta".to_string()));
        assert!(!short.contains(&"redação extensa".to_string()));

        let long = tags(
            &TextStats {
                word_count: 450,
                paragraph_count: 4,
                char_count: 2000,
            },
            &scores,
            TopicStatus::OnTopic,
        );
        assert!(long.contains(&"redação extensa".to_string()));
        assert!(!long.contains(&"redação curta".to_string()));
    }

    #[test]
    fn off_topic_tag_tracks_topic_status() {
        let stats = TextStats {
            word_count: 300,
            paragraph_count: 3,
            char_count: 1500,
        };
        let with = tags(&stats, &uniform(0), TopicStatus::OffTopic);
        assert!(with.contains(&"fuga ao tema".to_string()));
        let without = tags(&stats, &uniform(0), TopicStatus::OnTopic);
        assert!(!without.contains(&"fuga ao tema".to_string()));
    }
}
