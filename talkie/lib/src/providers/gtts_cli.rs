//! gTTS command-line provider.
//!
//! Uses the `gtts-cli` Python package for text-to-speech via Google's TTS API.
//! Requires network connectivity.

use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::TtsError;
use crate::languages::parse_language_line;
use crate::traits::TtsSynthesizer;
use crate::types::TtsConfig;

/// gTTS command-line provider.
///
/// This provider shells out to `gtts-cli`, lets it write an MP3 to a
/// temporary file and hands back the bytes.
///
/// ## Installation
///
/// ```bash
/// pip install gTTS
/// ```
///
/// ## Examples
///
/// ```ignore
/// use talkie_lib::{GttsCliProvider, TtsConfig, TtsSynthesizer};
///
/// let provider = GttsCliProvider::new();
/// let mp3 = provider.synthesize("Hello, world!", &TtsConfig::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct GttsCliProvider {
    binary: PathBuf,
}

impl Default for GttsCliProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GttsCliProvider {
    /// Provider name constant for error messages.
    const PROVIDER_NAME: &'static str = "gtts-cli";

    /// Create a provider that runs the `gtts-cli` found on `PATH`.
    pub fn new() -> Self {
        Self {
            binary: which::which(Self::PROVIDER_NAME)
                .unwrap_or_else(|_| PathBuf::from(Self::PROVIDER_NAME)),
        }
    }

    /// Create a provider that runs a specific executable.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check if the gtts-cli binary exists.
    pub fn is_available() -> bool {
        which::which(Self::PROVIDER_NAME).is_ok()
    }

    /// Command-line arguments for one synthesis run.
    ///
    /// Regional variants are passed as the base language plus the accent
    /// TLD, the same way the Google engine sends them.
    fn build_args(text: &str, output: &str, config: &TtsConfig) -> Result<Vec<String>, TtsError> {
        let language = config.resolved_language()?;
        let tld = config.resolved_tld(language.tld);

        let mut args = vec![
            "--output".to_string(),
            output.to_string(),
            "--lang".to_string(),
            language.code,
            "--tld".to_string(),
            tld.to_string(),
        ];

        if config.slow {
            args.push("--slow".to_string());
        }
        if !config.lang_check {
            args.push("--nocheck".to_string());
        }

        // `--` keeps text that starts with a dash from being read as a flag.
        args.push("--".to_string());
        args.push(text.to_string());
        Ok(args)
    }

    /// List the languages `gtts-cli` reports via `--all`.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::ProcessSpawnFailed` if the binary cannot be run and
    /// `TtsError::ProcessFailed` if it exits with an error.
    pub async fn list_languages(&self) -> Result<Vec<(String, String)>, TtsError> {
        let output = tokio::process::Command::new(&self.binary)
            .arg("--all")
            .output()
            .await
            .map_err(|e| TtsError::ProcessSpawnFailed {
                provider: Self::PROVIDER_NAME.into(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TtsError::ProcessFailed {
                provider: Self::PROVIDER_NAME.into(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let languages: Vec<_> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(parse_language_line)
            .collect();

        debug!(
            provider = Self::PROVIDER_NAME,
            count = languages.len(),
            "Enumerated gTTS languages"
        );

        Ok(languages)
    }
}

impl TtsSynthesizer for GttsCliProvider {
    async fn synthesize(&self, text: &str, config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
        let temp_file = NamedTempFile::with_suffix(".mp3")
            .map_err(|e| TtsError::TempFileError { source: e })?;
        let output_path = temp_file.path().to_string_lossy().to_string();
        let args = Self::build_args(text, &output_path, config)?;

        debug!(
            provider = Self::PROVIDER_NAME,
            lang = %config.language,
            output = %output_path,
            "Generating speech with gtts-cli"
        );

        let output = tokio::process::Command::new(&self.binary)
            .args(&args)
            .output()
            .await
            .map_err(|e| TtsError::ProcessSpawnFailed {
                provider: Self::PROVIDER_NAME.into(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TtsError::ProcessFailed {
                provider: Self::PROVIDER_NAME.into(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tokio::fs::read(temp_file.path())
            .await
            .map_err(|e| TtsError::TempFileError { source: e })
    }

    fn info(&self) -> &str {
        "gTTS - Google Text-to-Speech via Python CLI (requires internet)"
    }
}
