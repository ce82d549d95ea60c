// Re-export modules
pub mod config;
pub mod enhance;
pub mod error;
pub mod extractors;
pub mod filter;
pub mod results;
pub mod sources;

// Re-export commonly used types for convenience
pub use enhance::{EnhanceOptions, Enhancer};
pub use error::Error;
pub use extractors::Extractor;
pub use results::{EnhancedPage, PageContent};
pub use sources::SourceType;

use config::AppConfig;
use enhance::EnhanceRequest;
use sources::Snapshot;

/// Builder tying a document source, the extractor and an enhancer together
pub struct Pipeline {
    source: SourceType,
    config: AppConfig,
    options: EnhanceOptions,
}

impl Pipeline {
    /// Create a new pipeline for the given source with default configuration
    pub fn new(source: SourceType) -> Self {
        Self {
            source,
            config: AppConfig::default(),
            options: EnhanceOptions::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let config = AppConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Error> {
        let config = AppConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Select which enhancements to request
    pub fn with_options(mut self, options: EnhanceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the document and extract its content
    pub async fn capture(&self) -> Result<PageContent, Error> {
        let extractor = Extractor::new(self.config.extractor.clone())?;
        let snapshot = self.snapshot().await?;
        Ok(extractor.extract(&snapshot.html, &snapshot.url))
    }

    /// Extract the page, then enhance it.
    ///
    /// Enhancement errors propagate untouched; the extracted content is not
    /// affected by them.
    pub async fn run<E: Enhancer>(&self, enhancer: &E) -> Result<EnhancedPage, Error> {
        let content = self.capture().await?;
        let enhancement = enhancer
            .enhance(&EnhanceRequest::from(&content), &self.options)
            .await?;

        Ok(EnhancedPage {
            content,
            enhancement: Some(enhancement),
        })
    }

    async fn snapshot(&self) -> Result<Snapshot, Error> {
        match &self.source {
            SourceType::Web(url) => sources::web::capture(url, &self.config.web).await,
            SourceType::File { path, base_url } => {
                sources::file::load(path, base_url.as_deref()).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::{EnhanceError, Enhancement};

    struct EchoEnhancer;

    impl Enhancer for EchoEnhancer {
        async fn enhance(
            &self,
            request: &EnhanceRequest<'_>,
            options: &EnhanceOptions,
        ) -> Result<Enhancement, EnhanceError> {
            Ok(Enhancement {
                summary: options.summarize.then(|| format!("{} words", request.word_count())),
                ..Enhancement::default()
            })
        }
    }

    struct FailingEnhancer;

    impl Enhancer for FailingEnhancer {
        async fn enhance(
            &self,
            _request: &EnhanceRequest<'_>,
            _options: &EnhanceOptions,
        ) -> Result<Enhancement, EnhanceError> {
            Err(EnhanceError::Api("Rate limit reached".to_string()))
        }
    }

    fn saved_page(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("page-enhancer-lib-{}-{}", std::process::id(), name));
        std::fs::write(
            &path,
            "<html><head><title>Saved</title></head><body><article><p>one two three</p></article></body></html>",
        )
        .unwrap();
        path
    }

    fn file_source(path: &std::path::Path) -> SourceType {
        SourceType::File {
            path: path.display().to_string(),
            base_url: Some("https://example.com/saved".to_string()),
        }
    }

    #[tokio::test]
    async fn test_capture_from_file() {
        let path = saved_page("capture.html");
        let content = Pipeline::new(file_source(&path)).capture().await.unwrap();
        assert_eq!(content.title, "Saved");
        assert_eq!(content.domain, "example.com");
        assert_eq!(content.text, "one two three");
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_run_passes_options_to_enhancer() {
        let path = saved_page("run.html");
        let page = Pipeline::new(file_source(&path))
            .with_options(EnhanceOptions {
                summarize: true,
                ..EnhanceOptions::default()
            })
            .run(&EchoEnhancer)
            .await
            .unwrap();
        assert_eq!(
            page.enhancement.and_then(|e| e.summary).as_deref(),
            Some("3 words")
        );
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_enhancer_errors_propagate_verbatim() {
        let path = saved_page("fail.html");
        let err = Pipeline::new(file_source(&path))
            .run(&FailingEnhancer)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "AI processing failed: Rate limit reached");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_config_str_is_applied() {
        let pipeline = Pipeline::new(SourceType::Web("https://example.com".to_string()))
            .with_config_str(r#"{"extractor": {"max_images": 3}}"#)
            .unwrap();
        assert_eq!(pipeline.config().extractor.max_images, 3);
    }
}
