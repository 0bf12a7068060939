//! The seam between the converter and the speech engines.

use crate::errors::TtsError;
use crate::types::TtsConfig;

/// A text-to-speech engine that returns encoded audio.
///
/// Implementations receive text that is already known to be non-empty and
/// return MP3 bytes. They do not touch the output file.
///
/// ## Native Async Traits
///
/// This trait uses native async functions in traits. No `async-trait`
/// crate is needed, but the trait is not object safe; use
/// [`crate::Synthesizer`] to pick an engine at runtime.
///
/// ## Examples
///
/// ```ignore
/// use talkie_lib::{TtsConfig, TtsError, TtsSynthesizer};
///
/// struct Silence;
///
/// impl TtsSynthesizer for Silence {
///     async fn synthesize(&self, _text: &str, _config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
///         Ok(vec![0xFF, 0xFB])
///     }
///
///     fn info(&self) -> &str {
///         "silence"
///     }
/// }
/// ```
pub trait TtsSynthesizer: Send + Sync {
    /// Synthesize `text` in the configured language.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError` if the engine cannot produce audio.
    fn synthesize(
        &self,
        text: &str,
        config: &TtsConfig,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, TtsError>> + Send;

    /// Short human readable description of the engine.
    fn info(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSynthesizer {
        should_fail: bool,
    }

    impl TtsSynthesizer for MockSynthesizer {
        async fn synthesize(&self, text: &str, _config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
            if self.should_fail {
                Err(TtsError::ApiError {
                    provider: "mock".into(),
                    status: 500,
                    message: "intentional failure".into(),
                })
            } else {
                Ok(text.as_bytes().to_vec())
            }
        }

        fn info(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_mock_synthesizer_success() {
        let synth = MockSynthesizer { should_fail: false };
        let audio = synth.synthesize("abc", &TtsConfig::default()).await.unwrap();
        assert_eq!(audio, b"abc");
    }

    #[tokio::test]
    async fn test_mock_synthesizer_failure() {
        let synth = MockSynthesizer { should_fail: true };
        let result = synth.synthesize("abc", &TtsConfig::default()).await;
        assert!(matches!(result, Err(TtsError::ApiError { status: 500, .. })));
    }
}
