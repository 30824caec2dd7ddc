//! Interface de terminal do ENSAIO — spinners, cores e leitura de entrada.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`SessionUi`] concentra a saída colorida das
//! sessões interativas e a leitura de respostas do candidato.

use std::io;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Saída colorida e entrada de texto para as sessões interativas.
///
/// Sucesso em verde, falha em vermelho, avisos transitórios em amarelo —
/// o equivalente de terminal das notificações da interface original.
pub struct SessionUi {
    term: Term,
    green: Style,
    red: Style,
    yellow: Style,
    cyan: Style,
    dim: Style,
}

impl Default for SessionUi {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionUi {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            cyan: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Inicia um spinner com a mensagem dada. O chamador finaliza com
    /// `finish_and_clear` antes de imprimir o resultado.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Fala do entrevistador, com o prefixo em destaque.
    pub fn interviewer(&self, text: &str) {
        println!("\n{} {text}\n", self.cyan.apply_to("Interviewer:"));
    }

    /// Dica de coaching em tempo real (informativa, amarela).
    pub fn tip(&self, text: &str) {
        println!("  {} {text}", self.yellow.apply_to("Tip:"));
    }

    /// Aviso transitório — o usuário pode simplesmente tentar de novo.
    pub fn notice(&self, text: &str) {
        println!("  {} {text}", self.yellow.apply_to("⚠"));
    }

    pub fn success(&self, text: &str) {
        println!("  {} {text}", self.green.apply_to("✓"));
    }

    pub fn failure(&self, text: &str) {
        println!("  {} {text}", self.red.apply_to("✗"));
    }

    /// Cabeçalho de seção, no estilo "─── Título ───".
    pub fn heading(&self, text: &str) {
        println!("\n{}", self.green.apply_to(format!("─── {text} ───")));
    }

    /// Texto auxiliar esmaecido (instruções de uso, caminhos de arquivo).
    pub fn hint(&self, text: &str) {
        println!("{}", self.dim.apply_to(text));
    }

    pub fn plain(&self, text: &str) {
        println!("{text}");
    }

    /// Lê uma linha do candidato após exibir o prompt dado.
    pub fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.term.write_str(prompt)?;
        self.term.read_line()
    }
}
