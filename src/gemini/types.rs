//! Tipos de dados para requisições e respostas da API generativa Gemini.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato esperado pelo endpoint `models/{model}:generateContent`.

use serde::{Deserialize, Serialize};

/// Corpo da requisição para o endpoint `:generateContent`.
///
/// Contém a lista de conteúdos (turnos da conversa) e, opcionalmente,
/// a configuração de geração (modalidade de resposta, voz, MIME type).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Turnos da conversa enviados ao modelo.
    pub contents: Vec<Content>,
    /// Configuração de geração. Omitida do JSON quando `None`.
    #[serde(
        rename = "generationConfig",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Constrói uma requisição de turno único a partir de um prompt de texto.
    pub fn from_text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            generation_config: None,
        }
    }

    /// Define a configuração de geração, consumindo `self`.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// Um turno de conversa: papel do remetente e as partes que o compõem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Papel do remetente: "user" ou "model".
    pub role: String,
    /// Partes do conteúdo (texto ou dados inline).
    pub parts: Vec<Part>,
}

impl Content {
    /// Turno de usuário contendo uma única parte de texto.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }
}

/// Uma parte de conteúdo — texto ou dados binários inline (áudio).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Conteúdo textual, quando presente.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    /// Dados inline (ex.: áudio PCM em base64), quando presentes.
    #[serde(
        rename = "inlineData",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Parte contendo apenas texto.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Dados binários embutidos na resposta, codificados em base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    /// MIME type dos dados (ex.: "audio/L16;codec=pcm;rate=24000").
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Payload codificado em base64.
    pub data: String,
}

/// Configuração de geração enviada junto com a requisição.
///
/// Todos os campos são opcionais e omitidos do JSON quando ausentes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// MIME type desejado para a resposta (ex.: "application/json").
    #[serde(
        rename = "responseMimeType",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub response_mime_type: Option<String>,
    /// Modalidades de resposta (ex.: ["AUDIO"] para síntese de fala).
    #[serde(
        rename = "responseModalities",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub response_modalities: Option<Vec<String>>,
    /// Configuração de voz para respostas de áudio.
    #[serde(
        rename = "speechConfig",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub speech_config: Option<SpeechConfig>,
}

impl GenerationConfig {
    /// Configuração pedindo resposta JSON.
    pub fn json() -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            ..Self::default()
        }
    }

    /// Configuração pedindo resposta de áudio com a voz indicada.
    pub fn audio(voice_name: impl Into<String>) -> Self {
        Self {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig {
                        voice_name: voice_name.into(),
                    },
                },
            }),
            ..Self::default()
        }
    }
}

/// Configuração de fala: qual voz usar na síntese.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(rename = "voiceConfig")]
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    #[serde(rename = "prebuiltVoiceConfig")]
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Voz pré-construída identificada por nome (ex.: "Kore").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrebuiltVoiceConfig {
    #[serde(rename = "voiceName")]
    pub voice_name: String,
}

/// Resposta retornada pelo endpoint `:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Candidatos gerados pelo modelo (normalmente um).
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Estatísticas de uso de tokens, quando informadas.
    #[serde(rename = "usageMetadata", skip_serializing_if = "Option::is_none", default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateResponse {
    /// Extrai o texto da primeira parte textual do primeiro candidato.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }

    /// Extrai os dados inline (áudio) da primeira parte do primeiro candidato.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

/// Um candidato de resposta gerado pelo modelo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Conteúdo gerado (papel "model").
    pub content: Content,
    /// Motivo da parada da geração (ex.: "STOP"). `None` se não informado.
    #[serde(rename = "finishReason", skip_serializing_if = "Option::is_none", default)]
    pub finish_reason: Option<String>,
}

/// Estatísticas de consumo de tokens para uma chamada à API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Tokens consumidos pelo prompt.
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: u32,
    /// Tokens gerados pelos candidatos.
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: u32,
}
