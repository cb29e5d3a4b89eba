use serde::{Deserialize, Serialize};

/// Languages the prompts can be shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
    Hi,
    Fr,
    Es,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::En,
            Language::Ta,
            Language::Hi,
            Language::Fr,
            Language::Es,
        ]
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ta => "ta",
            Self::Hi => "hi",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|lang| lang.code() == code)
    }

    /// Name of the language in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ta => "தமிழ்",
            Self::Hi => "हिन्दी",
            Self::Fr => "Français",
            Self::Es => "Español",
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Self::En)
    }
}
