//! Speech engine implementations.
//!
//! `GoogleTtsProvider` talks HTTP directly; `GttsCliProvider` runs the
//! `gtts-cli` program installed on the host. [`Synthesizer`] picks one at
//! runtime.

mod google;
mod gtts_cli;

pub use google::GoogleTtsProvider;
pub use gtts_cli::GttsCliProvider;

use crate::errors::TtsError;
use crate::traits::TtsSynthesizer;
use crate::types::{Engine, TtsConfig};

/// A runtime choice between the available engines.
#[derive(Debug, Clone)]
pub enum Synthesizer {
    Google(GoogleTtsProvider),
    GttsCli(GttsCliProvider),
}

impl Synthesizer {
    /// Build the engine with its default settings.
    pub fn for_engine(engine: Engine) -> Self {
        match engine {
            Engine::Google => Synthesizer::Google(GoogleTtsProvider::new()),
            Engine::GttsCli => Synthesizer::GttsCli(GttsCliProvider::new()),
        }
    }

    /// Which engine this is.
    pub fn engine(&self) -> Engine {
        match self {
            Synthesizer::Google(_) => Engine::Google,
            Synthesizer::GttsCli(_) => Engine::GttsCli,
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::for_engine(Engine::default())
    }
}

impl From<GoogleTtsProvider> for Synthesizer {
    fn from(provider: GoogleTtsProvider) -> Self {
        Synthesizer::Google(provider)
    }
}

impl From<GttsCliProvider> for Synthesizer {
    fn from(provider: GttsCliProvider) -> Self {
        Synthesizer::GttsCli(provider)
    }
}

impl TtsSynthesizer for Synthesizer {
    async fn synthesize(&self, text: &str, config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
        match self {
            Synthesizer::Google(provider) => provider.synthesize(text, config).await,
            Synthesizer::GttsCli(provider) => provider.synthesize(text, config).await,
        }
    }

    fn info(&self) -> &str {
        match self {
            Synthesizer::Google(provider) => provider.info(),
            Synthesizer::GttsCli(provider) => provider.info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_engine_matches_engine() {
        for engine in Engine::ALL {
            assert_eq!(Synthesizer::for_engine(engine).engine(), engine);
        }
    }

    #[test]
    fn test_default_is_google() {
        assert_eq!(Synthesizer::default().engine(), Engine::Google);
    }

    #[test]
    fn test_info_delegates() {
        let google: Synthesizer = GoogleTtsProvider::new().into();
        assert!(google.info().contains("Google Translate"));

        let cli: Synthesizer = GttsCliProvider::new().into();
        assert!(cli.info().contains("gtts") || cli.info().contains("gTTS"));
    }
}
