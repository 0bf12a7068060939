//! Google Translate speech provider.
//!
//! Talks to the same `batchexecute` RPC the Translate web page uses to read
//! text aloud. No API key is required, but network connectivity is.
//!
//! ## Examples
//!
//! ```ignore
//! use talkie_lib::{GoogleTtsProvider, TtsConfig, TtsSynthesizer};
//!
//! let provider = GoogleTtsProvider::new();
//! let mp3 = provider.synthesize("Hello, world!", &TtsConfig::default()).await?;
//! ```

use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use reqwest::StatusCode;
use reqwest::header::{REFERER, USER_AGENT};
use tracing::{debug, trace};

use crate::errors::TtsError;
use crate::tokenizer::tokenize;
use crate::traits::TtsSynthesizer;
use crate::types::TtsConfig;

/// RPC id of the Translate "read aloud" call.
const RPC_ID: &str = "jQ1olc";

const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

static AUDIO_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"jQ1olc","\[\\"(.*)\\"\]"#).unwrap_or_else(|e| panic!("invalid audio regex: {e}"))
});

/// Google Translate text-to-speech provider.
///
/// Each call splits the text into parts of at most
/// [`crate::tokenizer::MAX_CHARS`] characters, requests them one after
/// another and concatenates the MP3 frames.
#[derive(Debug, Clone)]
pub struct GoogleTtsProvider {
    client: reqwest::Client,
    /// Replaces `https://translate.google.{tld}` when set.
    base_url: Option<String>,
}

impl Default for GoogleTtsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTtsProvider {
    /// Provider name constant for error messages.
    const PROVIDER_NAME: &'static str = "google";

    /// Create a provider that talks to the public Google hosts.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Create a provider that sends every request to `url`.
    ///
    /// Useful for testing with mock servers.
    ///
    /// ## Examples
    ///
    /// ```
    /// use talkie_lib::GoogleTtsProvider;
    ///
    /// let provider = GoogleTtsProvider::with_base_url("http://localhost:8080/");
    /// assert_eq!(provider.host("com"), "http://localhost:8080");
    /// ```
    pub fn with_base_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: Some(url.trim_end_matches('/').to_string()),
        }
    }

    /// The host requests go to for the given TLD.
    pub fn host(&self, tld: &str) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://translate.google.{tld}"),
        }
    }

    /// Build the `f.req` form value for one chunk of text.
    fn rpc_payload(text: &str, lang: &str, slow: bool) -> String {
        let speed = if slow {
            serde_json::Value::Bool(true)
        } else {
            serde_json::Value::from("null")
        };
        let parameter = serde_json::json!([text, lang, speed, "null"]).to_string();
        serde_json::json!([[[RPC_ID, parameter, null, "generic"]]]).to_string()
    }

    /// Pull the base64 audio out of a `batchexecute` response body.
    fn extract_audio(body: &str) -> Result<Vec<u8>, TtsError> {
        for line in body.lines().filter(|line| line.contains(RPC_ID)) {
            if let Some(captures) = AUDIO_PAYLOAD.captures(line) {
                let encoded = captures.get(1).map_or("", |m| m.as_str());
                return STANDARD
                    .decode(encoded)
                    .map_err(|source| TtsError::AudioDecodeFailed {
                        provider: Self::PROVIDER_NAME.into(),
                        source,
                    });
            }
        }

        Err(TtsError::NoAudioStream {
            provider: Self::PROVIDER_NAME.into(),
        })
    }

    /// Explain an error status the way users can act on.
    fn infer_message(status: StatusCode, tld: &str) -> String {
        match status.as_u16() {
            403 => "Bad token or upstream API changes".to_string(),
            404 if tld != "com" => format!("Unsupported tld '{tld}'"),
            500.. => "Upstream API error. Try again later.".to_string(),
            _ => status.to_string(),
        }
    }

    async fn request_chunk(
        &self,
        host: &str,
        tld: &str,
        chunk: &str,
        lang: &str,
        slow: bool,
    ) -> Result<Vec<u8>, TtsError> {
        let url = format!("{host}{BATCHEXECUTE_PATH}");
        let payload = Self::rpc_payload(chunk, lang, slow);

        trace!(provider = Self::PROVIDER_NAME, url = %url, payload = %payload, "Sending chunk");

        let response = self
            .client
            .post(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(REFERER, "http://translate.google.com/")
            .form(&[("f.req", payload.as_str())])
            .send()
            .await
            .map_err(|e| TtsError::HttpError {
                provider: Self::PROVIDER_NAME.into(),
                message: if e.is_connect() {
                    format!("Failed to connect. Probable cause: Host '{host}/' is not reachable")
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::ApiError {
                provider: Self::PROVIDER_NAME.into(),
                status: status.as_u16(),
                message: Self::infer_message(status, tld),
            });
        }

        let body = response.text().await.map_err(|e| TtsError::HttpError {
            provider: Self::PROVIDER_NAME.into(),
            message: e.to_string(),
        })?;

        Self::extract_audio(&body)
    }
}

impl TtsSynthesizer for GoogleTtsProvider {
    async fn synthesize(&self, text: &str, config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
        let language = config.resolved_language()?;
        let tld = config.resolved_tld(language.tld);
        let host = self.host(tld);

        let chunks = tokenize(text);
        if chunks.is_empty() {
            return Err(TtsError::NothingToSpeak);
        }

        debug!(
            provider = Self::PROVIDER_NAME,
            lang = %language.code,
            tld = tld,
            chunks = chunks.len(),
            slow = config.slow,
            "Synthesizing speech"
        );

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let bytes = self
                .request_chunk(&host, tld, chunk, &language.code, config.slow)
                .await?;
            debug!(
                provider = Self::PROVIDER_NAME,
                chunk = index,
                bytes = bytes.len(),
                "Received audio chunk"
            );
            audio.extend_from_slice(&bytes);
        }

        Ok(audio)
    }

    fn info(&self) -> &str {
        "Google Translate text-to-speech (requires internet)"
    }
}
