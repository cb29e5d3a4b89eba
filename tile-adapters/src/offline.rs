use async_trait::async_trait;
use tile_core::{Language, TranslationError, Translator};

/// Translator for running without network access. Every call fails, so the
/// adapter always falls back to the English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTranslator;

#[async_trait]
impl Translator for OfflineTranslator {
    async fn translate(
        &self,
        _text: &str,
        target: Language,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::Unavailable(format!(
            "offline mode, no translation to '{}'",
            target.code()
        )))
    }
}

#[cfg(test)]
mod tests {
    use tile_core::{Translation, TranslationAdapter};

    use super::*;

    #[tokio::test]
    async fn offline_translator_falls_back_through_adapter() {
        let adapter = TranslationAdapter::new(Box::new(OfflineTranslator));

        let result = adapter.translate_text("Next", Language::Hi).await;

        assert_eq!(result, Translation::Unchanged("Next".to_string()));
    }
}
