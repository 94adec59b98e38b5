use corretor::grading::{CompetencyScores, GradingEngine, Rubric, TopicStatus};

fn engine() -> GradingEngine {
    GradingEngine::default()
}

/// A well-formed essay: on topic, four paragraphs, connectors, an
/// intervention proposal, and enough length to clear every tier.
fn strong_essay() -> String {
    let theme_words = "A valorização do professor e da carreira docente no ensino";
    format!(
        "{theme_words} exige um debate sério sobre remuneração e formação continuada, \
         pois a escola pública depende diretamente da qualidade docente.\n\n\
         Além disso, a valorização do professor passa por planos de carreira claros, \
         com progressão previsível e condições dignas de trabalho no ensino básico.\n\n\
         Contudo, a carreira docente segue pouco atrativa para os jovens, o que agrava \
         a falta de profissionais qualificados em todas as etapas do ensino.\n\n\
         Portanto, é necessário que se crie um plano nacional de valorização: deve-se \
         garantir piso salarial, formação e uma proposta de acompanhamento contínuo \
         como solução duradoura para o ensino."
    )
}

#[test]
fn scores_stay_in_range_and_total_is_their_sum() {
    let cases = [
        ("", ""),
        ("texto curto", "tema qualquer"),
        ("portanto é necessário\n\numa proposta", "tema livre"),
    ];
    let engine = engine();
    for (text, theme) in cases {
        let eval = engine.grade(text, theme);
        let CompetencyScores { c1, c2, c3, c4, c5 } = eval.scores;
        for score in [c1, c2, c3, c4, c5] {
            assert!(score <= 200);
        }
        assert_eq!(eval.total, c1 + c2 + c3 + c4 + c5);
        assert!(eval.total <= 1000);
    }
}

#[test]
fn low_similarity_zeroes_every_competency() {
    let eval = engine().grade(
        "O campeonato terminou com goleada e festa da torcida no estádio lotado.",
        "Desafios para a formação educacional de surdos no Brasil",
    );
    assert_eq!(eval.topic_status, TopicStatus::OffTopic);
    assert_eq!(eval.scores, CompetencyScores::default());
    assert_eq!(eval.total, 0);
}

#[test]
fn empty_theme_never_forces_zero_scores() {
    let eval = engine().grade("Qualquer texto sobre qualquer assunto.", "");
    assert_eq!(eval.topic_status, TopicStatus::OnTopic);
    assert!(eval.total > 0);
}

#[test]
fn grading_is_idempotent() {
    let engine = engine();
    let text = strong_essay();
    let theme = "Os desafios para a valorização do professor no Brasil";
    let first = engine.grade(&text, theme);
    let second = engine.grade(&text, theme);
    assert_eq!(first, second);
}

#[test]
fn four_paragraphs_and_six_hundred_chars_hit_top_c2_c3() {
    let paragraph = "x".repeat(150);
    let text = format!("{paragraph}\n\n{paragraph}\n\n{paragraph}\n\n{paragraph}");
    assert!(text.chars().count() >= 600);
    let eval = engine().grade(&text, "");
    assert_eq!(eval.scores.c2, 200);
    assert_eq!(eval.scores.c3, 200);
}

#[test]
fn repetitive_single_paragraph_essay_bottoms_out_c2_and_c4() {
    // 200+ repetitions of one common word, no paragraph breaks, on a theme
    // whose only surviving token ("importancia") never appears in the text.
    let text = "escola ".repeat(220);
    let eval = engine().grade(text.trim(), "A importância da educação");
    // "educacao" is stoplisted, so the theme reduces to one token and the
    // essay misses it; similarity 0 rules the essay off topic under the
    // default threshold, which is the hard check taking precedence.
    assert_eq!(eval.topic_status, TopicStatus::OffTopic);

    // With the hard check relaxed, the tier floors show through.
    let mut rubric = Rubric::default();
    rubric.topic_similarity_threshold = 0.0;
    let eval = GradingEngine::new(rubric).grade(text.trim(), "A importância da educação");
    assert_eq!(eval.scores.c2, 50, "single paragraph sits in the lowest C2 tier");
    assert_eq!(eval.scores.c4, 100, "no connectors sits in the lowest C4 tier");
    assert_eq!(eval.scores.c1, 200, "no listed misspellings keeps C1 at the top");
}

#[test]
fn strong_essay_lands_in_the_upper_third() {
    let eval = engine().grade(
        &strong_essay(),
        "Os desafios para a valorização do professor no Brasil",
    );
    assert_eq!(eval.topic_status, TopicStatus::OnTopic);
    assert_eq!(eval.scores.c2, 200, "four paragraphs");
    assert_eq!(eval.scores.c3, 200, "over six hundred characters");
    assert_eq!(eval.scores.c4, 200, "connectors present");
    assert_eq!(eval.scores.c5, 200, "intervention phrases present");
    assert!(eval.total > 666, "total {} not in upper third", eval.total);
    assert!(eval.strengths.len() >= 4);
}

#[test]
fn off_topic_and_short_tags_track_their_conditions() {
    let engine = engine();

    let off = engine.grade(
        "Texto sobre culinária regional e seus temperos tradicionais do interior.",
        "A manipulação do comportamento do usuário pelo controle de dados na internet",
    );
    assert!(off.tags.contains(&"fuga ao tema".to_string()));

    let on = engine.grade(&strong_essay(), "");
    assert!(!on.tags.contains(&"fuga ao tema".to_string()));

    let short = engine.grade("poucas palavras apenas", "");
    assert!(short.tags.contains(&"redação curta".to_string()));
    assert!(!short.tags.contains(&"redação extensa".to_string()));
}

#[test]
fn validation_metadata_never_gates_scoring() {
    // No thesis/proposal/conclusion markers and far under 200 words, yet
    // the competencies are still scored.
    let eval = engine().grade("Um texto qualquer sem marcadores.", "");
    assert!(!eval.validation.is_valid);
    assert!(eval.total > 0);
}
