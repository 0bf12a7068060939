//! Text in, MP3 file out.

use std::path::Path;

use tracing::info;

use crate::errors::TtsError;
use crate::output::write_output;
use crate::providers::Synthesizer;
use crate::traits::TtsSynthesizer;
use crate::types::{DEFAULT_OUTPUT_PATH, TtsConfig};

/// Converts text to an audio file with a given engine.
///
/// ## Examples
///
/// ```ignore
/// use talkie_lib::{Converter, GoogleTtsProvider, TtsConfig};
///
/// Converter::new(GoogleTtsProvider::new())
///     .with_config(TtsConfig::new().with_language("en-gb"))
///     .convert("Cheerio!", "cheerio.mp3")
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Converter<S> {
    engine: S,
    config: TtsConfig,
}

impl<S: TtsSynthesizer> Converter<S> {
    /// Create a converter around `engine` with the default config.
    pub fn new(engine: S) -> Self {
        Self {
            engine,
            config: TtsConfig::default(),
        }
    }

    /// Replace the config passed to the engine.
    #[must_use]
    pub fn with_config(mut self, config: TtsConfig) -> Self {
        self.config = config;
        self
    }

    /// The config passed to the engine on each conversion.
    pub fn config(&self) -> &TtsConfig {
        &self.config
    }

    /// Synthesize `text` and write it to `output`, replacing any existing file.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::EmptyText` without calling the engine when `text`
    /// is empty. Engine failures are returned as the engine reported them,
    /// and write failures as `TtsError::OutputWriteFailed`.
    pub async fn convert(&self, text: &str, output: impl AsRef<Path>) -> Result<(), TtsError> {
        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }

        let output = output.as_ref();
        let audio = self.engine.synthesize(text, &self.config).await?;
        write_output(output, &audio).await?;

        info!(
            engine = self.engine.info(),
            output = %output.display(),
            bytes = audio.len(),
            "Converted text to speech"
        );
        Ok(())
    }
}

/// Convert `text` to English speech with the Google engine and save it at
/// `output`.
///
/// ## Errors
///
/// See [`Converter::convert`].
pub async fn convert(text: &str, output: impl AsRef<Path>) -> Result<(), TtsError> {
    Converter::new(Synthesizer::default())
        .convert(text, output)
        .await
}

/// Like [`convert`], writing to [`DEFAULT_OUTPUT_PATH`].
pub async fn convert_to_default(text: &str) -> Result<(), TtsError> {
    convert(text, DEFAULT_OUTPUT_PATH).await
}
