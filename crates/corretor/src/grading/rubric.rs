use serde::{Deserialize, Serialize};

/// Every heuristic constant the grading engine relies on: keyword lists,
/// tier thresholds, and the topic-similarity cutoff.
///
/// None of these values are calibrated against real grader data; they are
/// deliberate, documented guesses. Keeping them here rather than inline
/// makes that explicit and lets deployments tune them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    /// Minimum theme/essay token overlap ratio before an essay is ruled
    /// off-topic. Below this, every competency is zeroed.
    pub topic_similarity_threshold: f64,
    /// Generic filler words excluded from the topic comparison.
    pub topic_stoplist: Vec<String>,
    /// Misspellings and informal abbreviations counted as C1 errors.
    /// Substring match; each entry counts at most once.
    pub misspellings: Vec<String>,
    /// Fixed bad-agreement phrases counted as C1 errors.
    pub agreement_errors: Vec<String>,
    /// Logical-transition connectors checked by C4.
    pub connectors: Vec<String>,
    /// Intervention-proposal phrases checked by C5.
    pub intervention_phrases: Vec<String>,
    /// Thesis markers for the basic validation.
    pub thesis_markers: Vec<String>,
    /// Proposal markers for the basic validation.
    pub proposal_markers: Vec<String>,
    /// Conclusion markers for the basic validation.
    pub conclusion_markers: Vec<String>,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            topic_similarity_threshold: 0.5,
            topic_stoplist: to_owned(&[
                "sociedade",
                "brasileira",
                "brasil",
                "brasileiro",
                "brasileiros",
                "brasileiras",
                "problema",
                "problemas",
                "questao",
                "questoes",
                "tema",
                "temas",
                "assunto",
                "importante",
                "fundamental",
                "necessario",
                "preciso",
                "deve",
                "devem",
                "governo",
                "estado",
                "pais",
                "nacao",
                "populacao",
                "pessoas",
                "cidadaos",
                "publico",
                "publica",
                "publicos",
                "publicas",
                "politica",
                "politicas",
                "social",
                "sociais",
                "economico",
                "economicos",
                "economica",
                "economicas",
                "cultural",
                "culturais",
                "educacao",
                "saude",
                "seguranca",
                "desenvolvimento",
            ]),
            misspellings: to_owned(&["nao", "naum", "vc", "voce", "pq", "tbm", "eh"]),
            agreement_errors: to_owned(&["a gente vamos", "os aluno", "as menino"]),
            connectors: to_owned(&[
                "portanto",
                "além disso",
                "contudo",
                "assim",
                "em conclusão",
                "dessa forma",
            ]),
            intervention_phrases: to_owned(&[
                "é necessário",
                "deve-se",
                "precisa",
                "proposta",
                "solução",
            ]),
            thesis_markers: to_owned(&["tese", "argumento", "defendo", "acredito"]),
            proposal_markers: to_owned(&[
                "proposta",
                "intervenção",
                "solução",
                "deve",
                "necessário",
            ]),
            conclusion_markers: to_owned(&[
                "conclusão",
                "portanto",
                "assim",
                "finalmente",
                "em suma",
            ]),
        }
    }
}

impl Rubric {
    pub(crate) fn stoplist_refs(&self) -> Vec<&str> {
        self.topic_stoplist.iter().map(String::as_str).collect()
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
