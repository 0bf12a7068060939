//! Core types: the conversion config and the engine selector.

use std::fmt;
use std::str::FromStr;

use crate::errors::TtsError;
use crate::languages::{ResolvedLanguage, resolve_language};

/// Where the converter writes audio when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "output.mp3";

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Top-level domain of the Google host used when neither the config nor a
/// regional language variant picks one.
pub const DEFAULT_TLD: &str = "com";

/// Configuration for a conversion.
///
/// ## Examples
///
/// ```
/// use talkie_lib::TtsConfig;
///
/// let config = TtsConfig::new()
///     .with_language("fr")
///     .with_tld("ca")
///     .with_slow(true);
/// assert_eq!(config.language, "fr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsConfig {
    /// Language code (e.g. `en`, `en-gb`, `zh-CN`).
    pub language: String,
    /// Explicit Google host TLD; overrides any accent implied by `language`.
    pub tld: Option<String>,
    /// Read the text slowly.
    pub slow: bool,
    /// Reject language codes missing from the built-in table.
    pub lang_check: bool,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            tld: None,
            slow: false,
            lang_check: true,
        }
    }
}

impl TtsConfig {
    /// Create a config with English, the `com` host and normal speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the Google host TLD (e.g. `co.uk`).
    #[must_use]
    pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
        self.tld = Some(tld.into());
        self
    }

    /// Enable or disable slow speech.
    #[must_use]
    pub fn with_slow(mut self, slow: bool) -> Self {
        self.slow = slow;
        self
    }

    /// Enable or disable the language table check.
    #[must_use]
    pub fn with_lang_check(mut self, lang_check: bool) -> Self {
        self.lang_check = lang_check;
        self
    }

    /// The TLD to use, given the accent TLD a regional language implies.
    pub fn resolved_tld<'a>(&'a self, implied: Option<&'a str>) -> &'a str {
        self.tld.as_deref().or(implied).unwrap_or(DEFAULT_TLD)
    }

    /// Resolve `language` to the code sent to an engine.
    ///
    /// With the language check disabled, unknown codes pass through as given.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::UnsupportedLanguage` for unknown codes while the
    /// language check is enabled.
    pub fn resolved_language(&self) -> Result<ResolvedLanguage, TtsError> {
        match resolve_language(&self.language) {
            Ok(resolved) => Ok(resolved),
            Err(_) if !self.lang_check => Ok(ResolvedLanguage {
                code: self.language.clone(),
                tld: None,
            }),
            Err(e) => Err(e),
        }
    }
}

/// The synthesis engines a [`crate::Synthesizer`] can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Google Translate's speech endpoint over HTTPS.
    #[default]
    Google,
    /// The `gtts-cli` program installed on the host.
    GttsCli,
}

impl Engine {
    /// Every engine, in preference order.
    pub const ALL: [Engine; 2] = [Engine::Google, Engine::GttsCli];

    /// Stable name used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Google => "google",
            Engine::GttsCli => "gtts-cli",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .into_iter()
            .find(|engine| engine.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown engine '{s}' (expected google or gtts-cli)"))
    }
}
