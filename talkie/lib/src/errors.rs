use std::path::PathBuf;

/// Errors that can occur while converting text to an audio file.
///
/// Only [`TtsError::EmptyText`] is an input error. Every other variant
/// comes from synthesis or from persisting the audio, and is handed to the
/// caller unchanged.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// The text to convert was empty.
    #[error("Text cannot be empty")]
    EmptyText,

    /// The text contained nothing but whitespace and punctuation.
    #[error("No text to send to TTS API")]
    NothingToSpeak,

    /// The requested language is not one the engine understands.
    #[error("Language not supported: {language}")]
    UnsupportedLanguage {
        /// The language code that was requested.
        language: String,
    },

    /// The HTTP request never produced a response.
    #[error("{provider}: {message}")]
    HttpError {
        /// The provider that made the request.
        provider: String,
        /// Description of the transport failure.
        message: String,
    },

    /// The engine answered with an error status.
    #[error("{provider} returned {status}: {message}")]
    ApiError {
        /// The provider that returned the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Probable cause of the failure.
        message: String,
    },

    /// The engine answered but the response carried no audio.
    #[error("{provider}: No audio stream in response")]
    NoAudioStream {
        /// The provider that returned the response.
        provider: String,
    },

    /// The audio payload was not valid base64.
    #[error("{provider}: failed to decode audio payload")]
    AudioDecodeFailed {
        /// The provider that returned the payload.
        provider: String,
        /// The underlying decode error.
        #[source]
        source: base64::DecodeError,
    },

    /// Failed to spawn the TTS process.
    #[error("Failed to spawn {provider} process")]
    ProcessSpawnFailed {
        /// The provider that failed to spawn.
        provider: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The TTS process exited with a non-zero status.
    #[error("{provider} process failed: {stderr}")]
    ProcessFailed {
        /// The provider whose process failed.
        provider: String,
        /// Captured stderr output.
        stderr: String,
    },

    /// Failed to create or read a temporary audio file.
    #[error("Temporary file error")]
    TempFileError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The audio could not be written to the output path.
    #[error("Failed to write audio to '{}'", path.display())]
    OutputWriteFailed {
        /// The output path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl TtsError {
    /// Whether this error was caused by the caller's input rather than by
    /// synthesis or by writing the output.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TtsError::EmptyText)
    }
}
