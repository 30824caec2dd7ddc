//! Síntese de fala das perguntas do entrevistador.
//!
//! A mesma API generativa produz o áudio: uma requisição com
//! `responseModalities: AUDIO` retorna PCM16 mono em base64. Este
//! módulo decodifica o payload, embrulha as amostras em um contêiner
//! WAV (cabeçalho RIFF de 44 bytes) e grava o arquivo em disco — a
//! reprodução fica a cargo do player da plataforma. Há no máximo uma
//! síntese pendente por vez: a chamada é aguardada antes do próximo
//! turno da conversa.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;
use uuid::Uuid;

use crate::gemini::{
    generate_with_retry, GenerateRequest, GenerationConfig, GeminiError, RetryPolicy,
    TextGenerator, TTS_MODEL,
};

/// Erros de síntese de fala.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error(transparent)]
    Gemini(#[from] GeminiError),

    /// A resposta não trouxe dados de áudio inline.
    #[error("response carried no audio data")]
    NoAudio,

    /// MIME type inesperado ou sem taxa de amostragem.
    #[error("unsupported audio mime type: {0}")]
    UnsupportedMime(String),

    #[error("failed to decode audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sintetiza `text` com a voz indicada e grava um WAV em `out_dir`.
/// Retorna o caminho do arquivo gravado.
pub async fn synthesize(
    client: &impl TextGenerator,
    policy: &RetryPolicy,
    text: &str,
    voice: &str,
    out_dir: &Path,
) -> Result<PathBuf, SpeechError> {
    let req = GenerateRequest::from_text(text).with_config(GenerationConfig::audio(voice));
    let response = generate_with_retry(client, TTS_MODEL, &req, policy).await?;

    let inline = response.inline_data().ok_or(SpeechError::NoAudio)?;
    if !inline.mime_type.starts_with("audio/") {
        return Err(SpeechError::UnsupportedMime(inline.mime_type.clone()));
    }
    let sample_rate = sample_rate_from_mime(&inline.mime_type)
        .ok_or_else(|| SpeechError::UnsupportedMime(inline.mime_type.clone()))?;

    let pcm = STANDARD.decode(&inline.data)?;
    let wav = pcm_to_wav(&pcm, sample_rate);

    let path = out_dir.join(format!("ensaio-{}.wav", Uuid::new_v4()));
    std::fs::write(&path, wav)?;
    Ok(path)
}

/// Extrai a taxa de amostragem de um MIME type como
/// "audio/L16;codec=pcm;rate=24000".
pub fn sample_rate_from_mime(mime: &str) -> Option<u32> {
    mime.split(';')
        .find_map(|part| part.trim().strip_prefix("rate="))
        .and_then(|rate| rate.parse().ok())
}

/// Embrulha amostras PCM16 little-endian mono em um contêiner WAV.
///
/// Cabeçalho RIFF de 44 bytes: formato PCM (1), 1 canal, 16 bits por
/// amostra, byte rate = sample_rate * 2.
pub fn pcm_to_wav(pcm: &[u8], sample_rate: u32) -> Vec<u8> {
    let data_len = pcm.len() as u32;
    let mut wav = Vec::with_capacity(44 + pcm.len());

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // tamanho do sub-chunk fmt
    wav.extend_from_slice(&1u16.to_le_bytes()); // formato PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits por amostra

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);

    wav
}
