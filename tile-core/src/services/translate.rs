use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::Language;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),

    #[error("translation request failed: {0}")]
    Request(String),

    #[error("unexpected translation response: {0}")]
    Response(String),

    #[error("translator configuration error: {0}")]
    Configuration(String),
}

/// A machine translation backend. Source text is always English.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<String, TranslationError>;
}

/// Outcome of a best-effort translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    /// The original text, returned when no translation was needed or the
    /// backend failed.
    Unchanged(String),
}

impl Translation {
    pub fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Translated(text) | Self::Unchanged(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Translated(text) | Self::Unchanged(text) => text,
        }
    }
}

/// Wraps a [`Translator`] so that translation never fails.
pub struct TranslationAdapter {
    translator: Box<dyn Translator>,
}

impl TranslationAdapter {
    pub fn new(translator: Box<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Translates `text` into `target`.
    ///
    /// English targets skip the backend entirely. Backend errors are logged
    /// and the original text is returned as [`Translation::Unchanged`].
    pub async fn translate_text(
        &self,
        text: &str,
        target: Language,
    ) -> Translation {
        if target.is_english() {
            return Translation::Unchanged(text.to_string());
        }

        match self.translator.translate(text, target).await {
            Ok(translated) => Translation::Translated(translated),
            Err(error) => {
                debug!(lang = target.code(), %error, "translation fell back to original text");
                Translation::Unchanged(text.to_string())
            }
        }
    }
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter").finish_non_exhaustive()
    }
}
