use chrono::Local;
use clap::Args;
use corretor::error::AppError;
use corretor::grading::{themes, Evaluation, GradingEngine};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AvaliarArgs {
    /// Path to a plain-text essay file
    #[arg(long)]
    pub(crate) texto: PathBuf,
    /// Essay theme; defaults to free-form grading when omitted
    #[arg(long)]
    pub(crate) tema: Option<String>,
    /// Print only the basic structural validation
    #[arg(long)]
    pub(crate) somente_validacao: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Grade the sample essay against this theme instead of free-form
    #[arg(long)]
    pub(crate) tema: Option<String>,
}

pub(crate) fn run_avaliar(args: AvaliarArgs) -> Result<(), AppError> {
    let AvaliarArgs {
        texto,
        tema,
        somente_validacao,
    } = args;

    let essay = std::fs::read_to_string(&texto)?;
    // No theme means free-form grading with the topic check skipped.
    let tema = tema.unwrap_or_default();
    let engine = GradingEngine::default();

    if somente_validacao {
        let validation = engine.validate_basics(&essay);
        println!("Validação básica de {}", texto.display());
        println!("- palavras: {}", validation.word_count);
        println!("- tese: {}", sim_nao(validation.has_thesis));
        println!("- proposta: {}", sim_nao(validation.has_proposal));
        println!("- conclusão: {}", sim_nao(validation.has_conclusion));
        println!("- válida: {}", sim_nao(validation.is_valid));
        return Ok(());
    }

    let evaluation = engine.grade(&essay, &tema);
    render_evaluation(&tema, &evaluation);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    // Default to free-form grading; pass --tema to exercise the topic check
    // (an unrelated theme zeroes the sample essay).
    let tema = args.tema.unwrap_or_default();

    println!("Demonstração do corretor de redação");
    println!("Tema sorteado para a próxima redação: {}\n", themes::random_theme());

    let engine = GradingEngine::default();
    let evaluation = engine.grade(SAMPLE_ESSAY, &tema);
    render_evaluation(&tema, &evaluation);
    Ok(())
}

fn render_evaluation(tema: &str, evaluation: &Evaluation) {
    println!("Correção ({})", Local::now().format("%Y-%m-%d %H:%M"));
    println!(
        "Tema: {}",
        if tema.is_empty() { "Tema livre" } else { tema }
    );
    println!(
        "Status do tema: {}",
        if evaluation.topic_status.is_off_topic() {
            "fuga ao tema"
        } else {
            "ok"
        }
    );

    println!("\nCompetências");
    println!("- C1 norma culta: {}", evaluation.scores.c1);
    println!("- C2 compreensão da proposta: {}", evaluation.scores.c2);
    println!("- C3 organização: {}", evaluation.scores.c3);
    println!("- C4 argumentação: {}", evaluation.scores.c4);
    println!("- C5 intervenção: {}", evaluation.scores.c5);
    println!("Nota total: {}/1000", evaluation.total);

    println!("\nFeedback");
    println!("- C1: {}", evaluation.feedback.c1);
    println!("- C2: {}", evaluation.feedback.c2);
    println!("- C3: {}", evaluation.feedback.c3);
    println!("- C4: {}", evaluation.feedback.c4);
    println!("- C5: {}", evaluation.feedback.c5);

    if evaluation.strengths.is_empty() {
        println!("\nPontos fortes: nenhum");
    } else {
        println!("\nPontos fortes: {}", evaluation.strengths.join(", "));
    }

    if evaluation.weaknesses.is_empty() {
        println!("Pontos fracos: nenhum");
    } else {
        println!("Pontos fracos: {}", evaluation.weaknesses.join(", "));
    }

    if !evaluation.tags.is_empty() {
        println!("Tags: {}", evaluation.tags.join(", "));
    }

    println!("\nValidação básica");
    println!("- palavras: {}", evaluation.validation.word_count);
    println!("- válida: {}", sim_nao(evaluation.validation.is_valid));
}

fn sim_nao(value: bool) -> &'static str {
    if value {
        "sim"
    } else {
        "não"
    }
}

const SAMPLE_ESSAY: &str = "\
A educação brasileira enfrenta obstáculos históricos que limitam o acesso \
de boa parte da população a um ensino de qualidade, e esse quadro se agrava \
nas regiões mais pobres do território.

Em primeiro lugar, defendo que a escola precisa de investimento contínuo, \
pois estrutura precária e professores desvalorizados comprometem qualquer \
projeto pedagógico sério.

Além disso, a desigualdade de acesso à internet aprofunda a distância entre \
estudantes de redes distintas, o que ficou evidente durante o ensino remoto.

Portanto, é necessário que o poder público amplie o financiamento da rede \
básica e crie uma proposta de formação docente permanente; deve-se tratar a \
educação como solução de longo prazo, e em conclusão cabe à família e à \
escola acompanhar esse processo.";
