//! Configuração do ENSAIO carregada a partir de `ensaio.toml`.
//!
//! A struct [`EnsaioConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `GEMINI_API_KEY` tem precedência sobre o arquivo.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::gemini::RetryPolicy;

/// Configuração de nível superior carregada de `ensaio.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsaioConfig {
    /// Chave da API generativa.
    #[serde(default)]
    pub api_key: String,

    /// Cargo-alvo da preparação, inserido nos prompts do entrevistador.
    #[serde(default = "default_target_role")]
    pub target_role: String,

    /// Persona padrão do entrevistador quando não especificada via CLI.
    #[serde(default = "default_persona")]
    pub persona: String,

    /// URL base do armazenamento de documentos. Vazia desabilita a persistência.
    #[serde(default)]
    pub store_url: String,

    /// Identificador da aplicação no armazenamento de documentos.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Identificador opaco do usuário, dono das coleções salvas.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Máximo de retentativas para chamadas rate-limited.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Atraso base em milissegundos para backoff exponencial.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Multiplicador do atraso a cada retentativa.
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: u64,
}

// Valor padrão para o cargo-alvo.
fn default_target_role() -> String {
    "Software Engineer".to_string()
}

// Valor padrão para a persona: "formal".
fn default_persona() -> String {
    "formal".to_string()
}

// Valor padrão para o identificador da aplicação.
fn default_app_id() -> String {
    "ensaio".to_string()
}

// Valor padrão para o identificador do usuário.
fn default_user_id() -> String {
    "anonymous".to_string()
}

// Valor padrão para retentativas máximas: 3.
fn default_max_retries() -> u32 {
    3
}

// Valor padrão para o atraso base: 1000ms.
fn default_base_delay_ms() -> u64 {
    1000
}

// Valor padrão para o multiplicador: 2.
fn default_backoff_multiplier() -> u64 {
    2
}

impl Default for EnsaioConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            target_role: default_target_role(),
            persona: default_persona(),
            store_url: String::new(),
            app_id: default_app_id(),
            user_id: default_user_id(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

impl EnsaioConfig {
    /// Carrega a configuração de `ensaio.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        let path = Path::new("ensaio.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<EnsaioConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a chave API.
        if let Ok(key) = std::env::var("GEMINI_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }

        Ok(config)
    }

    /// Política de retentativa derivada da configuração.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay_ms: self.base_delay_ms,
            backoff_multiplier: self.backoff_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = EnsaioConfig::default();
        assert_eq!(config.target_role, "Software Engineer");
        assert_eq!(config.persona, "formal");
        assert_eq!(config.app_id, "ensaio");
        assert_eq!(config.user_id, "anonymous");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.base_delay_ms, 1000);
        assert_eq!(config.backoff_multiplier, 2);
        assert!(config.api_key.is_empty());
        assert!(config.store_url.is_empty());
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            api_key = "test-key-123"
            target_role = "Unit Chief for Victim Services"
            max_retries = 5
        "#;
        let config: EnsaioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key, "test-key-123");
        assert_eq!(config.target_role, "Unit Chief for Victim Services");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.persona, "formal");
        assert_eq!(config.base_delay_ms, 1000);
    }

    #[test]
    fn retry_policy_mirrors_config() {
        let config: EnsaioConfig = toml::from_str(
            r#"
            max_retries = 7
            base_delay_ms = 250
            backoff_multiplier = 3
        "#,
        )
        .unwrap();
        let policy = config.retry_policy();
        assert_eq!(policy.max_retries, 7);
        assert_eq!(policy.base_delay_ms, 250);
        assert_eq!(policy.backoff_multiplier, 3);
    }
}
