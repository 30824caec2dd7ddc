//! Interface de linha de comando do ENSAIO baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (interview, star,
//! questions, dashboard) e flags globais (--persona, --context, --speak,
//! --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::persona::Persona;

/// ENSAIO — Treinador de preparação para entrevistas com IA.
#[derive(Debug, Parser)]
#[command(name = "ensaio", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Persona do entrevistador nesta sessão.
    #[arg(long, global = true)]
    pub persona: Option<PersonaArg>,

    /// Caminho para um arquivo de texto com a descrição da vaga.
    #[arg(long, global = true)]
    pub context: Option<PathBuf>,

    /// Sintetiza as perguntas do entrevistador em arquivos WAV.
    #[arg(long, global = true, default_value_t = false)]
    pub speak: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Argumento de persona aceito pela CLI, mapeado para [`Persona`] internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PersonaArg {
    /// Entrevistador estruturado, formal e objetivo.
    Formal,
    /// Entrevistador descontraído e conversacional.
    Casual,
    /// Entrevistador cético e incisivo.
    Challenging,
}

impl From<PersonaArg> for Persona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Formal => Persona::Formal,
            PersonaArg::Casual => Persona::Casual,
            PersonaArg::Challenging => Persona::Challenging,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Starts a simulated multi-turn mock interview.
    Interview,

    /// Abre o assistente de respostas no método STAR.
    Star,

    /// Gera perguntas estratégicas para fazer ao entrevistador.
    Questions,

    /// Mostra o histórico de entrevistas e respostas STAR salvas.
    Dashboard {
        /// Exibe uma entrevista salva em detalhe, pelo id.
        #[arg(long)]
        interview: Option<String>,

        /// Exibe uma resposta STAR salva em detalhe, pelo id.
        #[arg(long)]
        star: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_interview_subcommand() {
        let cli = Cli::parse_from(["ensaio", "interview"]);
        assert!(matches!(cli.command, Command::Interview));
        assert!(cli.persona.is_none());
        assert!(!cli.speak);
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from([
            "ensaio",
            "--persona",
            "challenging",
            "--context",
            "job.txt",
            "--speak",
            "--verbose",
            "interview",
        ]);
        assert!(cli.verbose);
        assert!(cli.speak);
        assert!(matches!(cli.persona, Some(PersonaArg::Challenging)));
        assert_eq!(cli.context.unwrap(), PathBuf::from("job.txt"));
    }

    #[test]
    fn cli_parses_dashboard_detail_flags() {
        let cli = Cli::parse_from(["ensaio", "dashboard", "--interview", "doc-1"]);
        match cli.command {
            Command::Dashboard { interview, star } => {
                assert_eq!(interview.as_deref(), Some("doc-1"));
                assert!(star.is_none());
            }
            _ => panic!("expected Dashboard command"),
        }
    }

    #[test]
    fn persona_arg_maps_to_persona() {
        assert_eq!(Persona::from(PersonaArg::Formal), Persona::Formal);
        assert_eq!(Persona::from(PersonaArg::Casual), Persona::Casual);
        assert_eq!(
            Persona::from(PersonaArg::Challenging),
            Persona::Challenging
        );
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
