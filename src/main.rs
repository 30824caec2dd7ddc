mod cli;
mod config;
mod dashboard;
mod error;
mod feedback;
mod gemini;
mod interview;
mod persona;
mod questions;
mod speech;
mod star;
mod store;
mod ui;

use std::path::Path;

use clap::Parser;

use cli::{Cli, Command};
use config::EnsaioConfig;
use error::EnsaioError;
use gemini::{GeminiClient, RetryPolicy, TextGenerator};
use interview::InterviewSession;
use persona::Persona;
use star::{StarSession, SubmitOutcome, WizardError};
use store::{InterviewRecord, StarRecord, StoreClient};
use ui::SessionUi;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let ui = SessionUi::new();

    let config = match EnsaioConfig::load() {
        Ok(config) => config,
        Err(e) => {
            ui.failure(&format!("Failed to load ensaio.toml: {e}"));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config, &ui).await {
        ui.failure(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: EnsaioConfig, ui: &SessionUi) -> Result<(), EnsaioError> {
    let persona = resolve_persona(&cli, &config)?;
    let job_context = load_job_context(cli.context.as_deref())?;

    if cli.verbose {
        ui.hint(&format!(
            "role: {} | persona: {persona} | max retries: {}",
            config.target_role, config.max_retries
        ));
    }

    match cli.command {
        Command::Interview => run_interview(&config, persona, job_context, cli.speak, ui).await,
        Command::Star => run_star(&config, ui).await,
        Command::Questions => run_questions(&config, job_context, ui).await,
        Command::Dashboard { interview, star } => {
            run_dashboard(&config, interview, star, ui).await
        }
    }
}

/// CLI flag wins over the configured default persona.
fn resolve_persona(cli: &Cli, config: &EnsaioConfig) -> Result<Persona, EnsaioError> {
    match cli.persona {
        Some(arg) => Ok(arg.into()),
        None => config.persona.parse().map_err(EnsaioError::Config),
    }
}

/// Reads the optional job description file given via `--context`.
fn load_job_context(path: Option<&Path>) -> Result<Option<String>, EnsaioError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let trimmed = text.trim();
            Ok(if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            })
        }
        None => Ok(None),
    }
}

fn text_client(config: &EnsaioConfig) -> Result<GeminiClient, EnsaioError> {
    if config.api_key.is_empty() {
        return Err(EnsaioError::Config(
            "no API key: set GEMINI_API_KEY or api_key in ensaio.toml".into(),
        ));
    }
    Ok(GeminiClient::new(config.api_key.clone()))
}

/// Persistence is optional: an empty store_url disables it.
fn store_client(config: &EnsaioConfig) -> Option<StoreClient> {
    if config.store_url.is_empty() {
        return None;
    }
    Some(StoreClient::new(
        config.store_url.clone(),
        config.app_id.clone(),
        config.user_id.clone(),
    ))
}

async fn run_interview(
    config: &EnsaioConfig,
    persona: Persona,
    job_context: Option<String>,
    speak: bool,
    ui: &SessionUi,
) -> Result<(), EnsaioError> {
    let client = text_client(config)?;
    let policy = config.retry_policy();
    let store = store_client(config);
    let mut session = InterviewSession::new(persona, &config.target_role, job_context);

    ui.heading("Mock Interview");
    ui.hint("Type your answers. :feedback ends the interview with an analysis, :quit exits.");

    let pb = ui.spinner("Initializing mock interview...");
    let opening = session.start(&client, &policy).await;
    pb.finish_and_clear();
    match opening {
        Ok(question) => {
            ui.interviewer(&question);
            if speak {
                speak_question(&client, &policy, &question, session.persona(), ui).await;
            }
        }
        Err(e) => {
            ui.notice(&format!("Failed to start the interview: {e}"));
            return Ok(());
        }
    }

    loop {
        let line = ui.read_line("> ")?;
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if input == ":quit" || input == ":q" {
            break;
        }
        if input == ":feedback" {
            finish_with_feedback(&client, &policy, &session, store.as_ref(), ui).await;
            break;
        }

        let pb = ui.spinner("Generating next question...");
        let next = session.submit_answer(&client, &policy, &input).await;
        let tip = match &next {
            Ok(_) => session.realtime_tip(&client, &policy).await,
            Err(_) => None,
        };
        pb.finish_and_clear();

        match next {
            Ok(question) => {
                if let Some(tip) = tip {
                    ui.tip(&tip);
                }
                ui.interviewer(&question);
                if speak {
                    speak_question(&client, &policy, &question, session.persona(), ui).await;
                }
            }
            Err(e) => ui.notice(&format!("{e} — please try again.")),
        }
    }

    Ok(())
}

async fn finish_with_feedback(
    client: &impl TextGenerator,
    policy: &RetryPolicy,
    session: &InterviewSession,
    store: Option<&StoreClient>,
    ui: &SessionUi,
) {
    if session.is_empty() {
        ui.notice("Nothing to analyze yet.");
        return;
    }

    let pb = ui.spinner("Analyzing your performance...");
    let report = feedback::analyze(client, policy, session).await;
    pb.finish_and_clear();

    match report {
        Ok(report) => {
            ui.heading("Interview Feedback");
            ui.plain(&feedback::render_report(&report));
            if let Some(store) = store {
                let record = InterviewRecord {
                    transcript: session.transcript().to_vec(),
                    feedback: report,
                    document_context: session.job_context().map(str::to_string),
                };
                match store.save_interview(&record).await {
                    Ok(ack) => {
                        ui.success("Feedback saved successfully!");
                        ui.hint(&format!("Saved as {} at {}", ack.id, ack.created_at));
                    }
                    Err(e) => ui.notice(&format!("Could not save feedback: {e}")),
                }
            }
        }
        Err(e) => ui.notice(&format!("Failed to generate feedback: {e}")),
    }
}

async fn run_star(config: &EnsaioConfig, ui: &SessionUi) -> Result<(), EnsaioError> {
    let client = text_client(config)?;
    let policy = config.retry_policy();
    let store = store_client(config);
    let mut session = StarSession::new();

    ui.heading("STAR Method Assistant");
    ui.hint(":quit exits without saving.");

    loop {
        ui.plain(&format!("\n{}", session.stage().prompt()));
        let line = ui.read_line(&format!("{}> ", session.stage().label()))?;
        let input = line.trim().to_string();
        if input == ":quit" || input == ":q" {
            break;
        }

        match session.submit(&client, &policy, &input).await {
            Ok(SubmitOutcome::Prompted { tip, .. }) => {
                if let Some(tip) = tip {
                    ui.tip(&tip);
                }
            }
            Ok(SubmitOutcome::Completed { composite }) => {
                ui.heading("Your STAR Answer");
                ui.plain(&composite);
                if let Some(store) = &store {
                    if let Some(record) = StarRecord::from_draft(session.draft()) {
                        match store.save_star_answer(&record).await {
                            Ok(ack) => {
                                ui.success("STAR answer saved successfully!");
                                ui.hint(&format!("Saved as {} at {}", ack.id, ack.created_at));
                            }
                            Err(e) => ui.notice(&format!("Could not save the answer: {e}")),
                        }
                    }
                }
                break;
            }
            Err(WizardError::EmptyInput) => {
                ui.notice("Please enter a response before continuing.");
            }
            Err(WizardError::AlreadyDone) => break,
        }
    }

    Ok(())
}

async fn run_questions(
    config: &EnsaioConfig,
    job_context: Option<String>,
    ui: &SessionUi,
) -> Result<(), EnsaioError> {
    let client = text_client(config)?;
    let policy = config.retry_policy();

    ui.heading("Interview Question Generator");
    let pb = ui.spinner("Generating questions...");
    let result = questions::generate(
        &client,
        &policy,
        &config.target_role,
        job_context.as_deref(),
    )
    .await;
    pb.finish_and_clear();

    match result {
        Ok(text) => ui.plain(&text),
        Err(e) => ui.notice(&format!("Failed to generate questions: {e}")),
    }
    Ok(())
}

async fn run_dashboard(
    config: &EnsaioConfig,
    interview_id: Option<String>,
    star_id: Option<String>,
    ui: &SessionUi,
) -> Result<(), EnsaioError> {
    let store = store_client(config).ok_or_else(|| {
        EnsaioError::Config("store_url is not configured; saved history is unavailable".into())
    })?;

    if let Some(id) = interview_id {
        let documents = store.list_interviews().await?;
        let doc = documents
            .iter()
            .find(|d| d.id == id)
            .ok_or(EnsaioError::RecordNotFound(id))?;
        ui.plain(&dashboard::render_interview_detail(doc));
        return Ok(());
    }

    if let Some(id) = star_id {
        let documents = store.list_star_answers().await?;
        let doc = documents
            .iter()
            .find(|d| d.id == id)
            .ok_or(EnsaioError::RecordNotFound(id))?;
        ui.plain(&dashboard::render_star_detail(doc));
        return Ok(());
    }

    let pb = ui.spinner("Loading saved history...");
    let interviews = store.list_interviews().await;
    let stars = store.list_star_answers().await;
    pb.finish_and_clear();

    ui.heading("Progress Dashboard");
    ui.plain(&dashboard::render_dashboard(&interviews?, &stars?));
    ui.hint("ensaio dashboard --interview <id> | --star <id> shows a saved record in full.");
    Ok(())
}

/// Synthesizes the question into a WAV file; playback is left to the
/// platform player. Failures are informational only.
async fn speak_question(
    client: &impl TextGenerator,
    policy: &RetryPolicy,
    text: &str,
    persona: Persona,
    ui: &SessionUi,
) {
    let pb = ui.spinner("Synthesizing speech...");
    let result = speech::synthesize(client, policy, text, persona.voice(), &std::env::temp_dir()).await;
    pb.finish_and_clear();
    match result {
        Ok(path) => ui.hint(&format!("Audio saved to {}", path.display())),
        Err(e) => ui.notice(&format!("Speech synthesis failed: {e}")),
    }
}
