use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interviewer persona selected for a session.
///
/// Each persona carries a tone phrase woven into the interviewer
/// prompts and a prebuilt synthesis voice for spoken questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Formal,
    Casual,
    Challenging,
}

impl Persona {
    /// Prebuilt voice name used for speech synthesis under this persona.
    pub fn voice(&self) -> &'static str {
        match self {
            Persona::Formal => "Rasalgethi",
            Persona::Casual => "Umbriel",
            Persona::Challenging => "Kore",
        }
    }

    /// Tone phrase describing how the interviewer should behave.
    pub fn tone(&self) -> &'static str {
        match self {
            Persona::Formal => "structured, formal, and objective",
            Persona::Casual => "relaxed, friendly, and conversational",
            Persona::Challenging => "probing, skeptical, and direct",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::Formal => write!(f, "formal"),
            Persona::Casual => write!(f, "casual"),
            Persona::Challenging => write!(f, "challenging"),
        }
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Persona::Formal),
            "casual" => Ok(Persona::Casual),
            "challenging" => Ok(Persona::Challenging),
            other => Err(format!("unknown persona: {other}")),
        }
    }
}
