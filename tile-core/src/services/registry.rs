use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::translate::{TranslationError, Translator};

/// Backend-agnostic translator configuration.
///
/// `backend` must match the [`TranslatorFactory::backend_name`] of a
/// registered factory. `endpoint` and `api_key` are passed through to that
/// factory unchanged.
///
/// | backend          | endpoint example              |
/// |------------------|-------------------------------|
/// | `offline`        | (unused)                      |
/// | `libretranslate` | `https://libretranslate.com`  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Lowercase identifier matching a registered factory.
    pub backend: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            backend: "offline".to_string(),
            endpoint: None,
            api_key: None,
        }
    }
}

/// One implementation per translation backend, registered with a
/// [`TranslatorRegistry`] at startup.
pub trait TranslatorFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    fn create(
        &self,
        config: &TranslatorConfig,
    ) -> Result<Box<dyn Translator>, TranslationError>;
}

/// Translation backends known to the binary, looked up by the name given in
/// the `[translation]` config section.
///
/// Selection happens by name rather than by type so a deployment can switch
/// from the offline backend to a LibreTranslate server by editing the config
/// file alone. Names are matched case-insensitively after trimming.
pub struct TranslatorRegistry {
    factories: BTreeMap<&'static str, Box<dyn TranslatorFactory>>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Adds `factory`. A later factory with the same name wins.
    pub fn register(
        &mut self,
        factory: Box<dyn TranslatorFactory>,
    ) {
        let name = factory.backend_name();
        if self.factories.insert(name, factory).is_some() {
            debug!(backend = name, "translator factory replaced");
        }
    }

    /// Registered backend names in alphabetical order.
    pub fn available_backends(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    pub fn is_registered(
        &self,
        backend: &str,
    ) -> bool {
        self.factories.contains_key(normalize(backend).as_str())
    }

    /// Builds the translator named by `config.backend`.
    ///
    /// # Errors
    ///
    /// [`TranslationError::Configuration`] when the name is not registered,
    /// otherwise whatever the backend's factory reports.
    pub fn create(
        &self,
        config: &TranslatorConfig,
    ) -> Result<Box<dyn Translator>, TranslationError> {
        let Some(factory) = self.factories.get(normalize(&config.backend).as_str()) else {
            return Err(TranslationError::Configuration(format!(
                "unknown translation backend '{}' (registered: {})",
                config.backend,
                self.available_backends().join(", ")
            )));
        };

        debug!(backend = factory.backend_name(), "creating translator");
        factory.create(config)
    }
}

fn normalize(backend: &str) -> String {
    backend.trim().to_ascii_lowercase()
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::Language;

    // ── stub translator ──────────────────────────────────────────────────
    struct EchoTranslator;

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(
            &self,
            text: &str,
            _target: Language,
        ) -> Result<String, TranslationError> {
            Ok(text.to_string())
        }
    }

    // ── stub factories ───────────────────────────────────────────────────
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    impl TranslatorFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }

        fn create(
            &self,
            _config: &TranslatorConfig,
        ) -> Result<Box<dyn Translator>, TranslationError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(EchoTranslator))
        }
    }

    struct FailingFactory;

    impl TranslatorFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }

        fn create(
            &self,
            _config: &TranslatorConfig,
        ) -> Result<Box<dyn Translator>, TranslationError> {
            Err(TranslationError::Configuration(
                "endpoint is required".to_string(),
            ))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn TranslatorFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    fn config(backend: &str) -> TranslatorConfig {
        TranslatorConfig {
            backend: backend.to_string(),
            ..TranslatorConfig::default()
        }
    }

    // ── TranslatorConfig ─────────────────────────────────────────────────
    #[test]
    fn default_config_is_offline() {
        let cfg = TranslatorConfig::default();
        assert_eq!(cfg.backend, "offline");
        assert!(cfg.endpoint.is_none());
    }

    // ── registration ─────────────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(TranslatorRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = TranslatorRegistry::new();
        let (f1, _) = stub_factory("offline");
        let (f2, _) = stub_factory("libretranslate");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["libretranslate", "offline"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = TranslatorRegistry::new();
        let (old, old_called) = stub_factory("offline");
        let (new, new_called) = stub_factory("offline");
        reg.register(old);
        reg.register(new);

        reg.create(&config("offline")).unwrap();

        assert_eq!(reg.available_backends(), vec!["offline"]);
        assert!(!old_called.load(Ordering::SeqCst));
        assert!(new_called.load(Ordering::SeqCst));
    }

    // ── dispatch ─────────────────────────────────────────────────────────
    #[test]
    fn create_calls_only_matching_factory() {
        let mut reg = TranslatorRegistry::new();
        let (offline, offline_called) = stub_factory("offline");
        let (remote, remote_called) = stub_factory("libretranslate");
        reg.register(offline);
        reg.register(remote);

        assert!(reg.create(&config("libretranslate")).is_ok());
        assert!(remote_called.load(Ordering::SeqCst));
        assert!(!offline_called.load(Ordering::SeqCst));
    }

    #[test]
    fn unknown_backend_names_requested_and_available() {
        let mut reg = TranslatorRegistry::new();
        let (f, _) = stub_factory("offline");
        reg.register(f);

        match reg.create(&config("deepl")) {
            Err(TranslationError::Configuration(msg)) => {
                assert!(msg.contains("deepl"), "error should name the requested backend");
                assert!(msg.contains("offline"), "error should list available backends");
            }
            Err(other) => panic!("expected Configuration error, got {other:#?}"),
            Ok(_) => panic!("expected Configuration error, got a translator"),
        }
    }

    #[test]
    fn backend_name_lookup_ignores_case_and_whitespace() {
        let mut reg = TranslatorRegistry::new();
        let (f, called) = stub_factory("libretranslate");
        reg.register(f);

        assert!(reg.is_registered(" LibreTranslate "));
        assert!(!reg.is_registered("deepl"));
        assert!(reg.create(&config("LIBRETRANSLATE")).is_ok());
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn unknown_backend_message_lists_registered_names() {
        let mut reg = TranslatorRegistry::new();
        let (a, _) = stub_factory("offline");
        let (b, _) = stub_factory("libretranslate");
        reg.register(a);
        reg.register(b);

        let err = reg.create(&config("deepl")).err().unwrap();

        assert_eq!(
            err.to_string(),
            "translator configuration error: unknown translation backend 'deepl' (registered: libretranslate, offline)"
        );
    }

    #[test]
    fn create_propagates_factory_error() {
        let mut reg = TranslatorRegistry::new();
        reg.register(Box::new(FailingFactory));

        assert!(matches!(
            reg.create(&config("failing")),
            Err(TranslationError::Configuration(msg)) if msg == "endpoint is required"
        ));
    }
}
