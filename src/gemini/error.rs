//! Tipos de erro para o cliente da API generativa.
//!
//! Define [`GeminiError`] com variantes para rate limiting, erros da API,
//! respostas malformadas e erros de rede. Usa `thiserror` para derivar
//! `Display` e `Error` a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao interagir com a API generativa.
///
/// A taxonomia é deliberadamente estreita:
/// - [`RateLimited`](GeminiError::RateLimited) — HTTP 429, o único erro retentável
/// - [`ApiError`](GeminiError::ApiError) — qualquer outro erro HTTP, terminal
/// - [`ParseError`](GeminiError::ParseError) — corpo de resposta malformado
/// - [`NetworkError`](GeminiError::NetworkError) — falha na camada de rede
///
/// Cancelamento não é suportado e não possui variante.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// O servidor retornou HTTP 429 (rate limit).
    /// O campo `retry_after_ms` indica quantos milissegundos esperar antes de retentar.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Erro retornado pela API (ex.: 400 requisição inválida, 500 erro interno).
    /// Contém o código de status HTTP e a mensagem de erro do corpo da resposta.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// O corpo da resposta não pôde ser interpretado no formato esperado.
    #[error("failed to parse API response: {0}")]
    ParseError(String),

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
