//! Translation service adapter for the translation port

use application::ApplicationError;
use application::ports::TranslationPort;
use async_trait::async_trait;
use domain::Language;
use integration_translate::TranslateClient;

/// Translation port implementation backed by the HTTP translation client
#[derive(Debug, Clone)]
pub struct HttpTranslationAdapter {
    client: TranslateClient,
}

impl HttpTranslationAdapter {
    /// Create a new adapter around a configured client
    #[must_use]
    pub fn new(client: TranslateClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationPort for HttpTranslationAdapter {
    async fn translate(&self, text: &str, target: Language) -> Result<String, ApplicationError> {
        self.client
            .translate(text, target)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Translation: {e}")))
    }
}
