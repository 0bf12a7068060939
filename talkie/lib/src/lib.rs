//! Talkie
//!
//! Turns a text string into a spoken-audio MP3 file.
//!
//! ## Features
//!
//! - **Google Translate speech**: talks to the public endpoint directly, no
//!   API key required
//! - **gtts-cli fallback**: runs the Python `gtts-cli` tool when installed
//! - **Long text**: splits input at natural pauses into request-sized parts
//! - **Safe overwrite**: the output file is replaced in one step
//!
//! ## Quick Start
//!
//! ```ignore
//! use talkie_lib::convert;
//!
//! convert("Hello, world!", "hello.mp3").await?;
//! ```
//!
//! ## Module Structure
//!
//! - [`mod@convert`] - The `Converter` and the one-call `convert` helpers
//! - [`providers`] - Speech engines (`GoogleTtsProvider`, `GttsCliProvider`)
//! - [`tokenizer`] - Splitting text into request-sized parts
//! - [`languages`] - Supported language codes and regional variants
//! - [`types`] - `TtsConfig` and the `Engine` selector
//! - [`errors`] - Error types

pub mod convert;
pub mod errors;
pub mod languages;
pub mod output;
pub mod providers;
pub mod tokenizer;
pub mod traits;
pub mod types;

pub use convert::{Converter, convert, convert_to_default};
pub use errors::TtsError;
pub use languages::{LanguageInfo, ResolvedLanguage, resolve_language, supported_languages};
pub use output::write_output;
pub use providers::{GoogleTtsProvider, GttsCliProvider, Synthesizer};
pub use traits::TtsSynthesizer;
pub use types::{DEFAULT_LANGUAGE, DEFAULT_OUTPUT_PATH, DEFAULT_TLD, Engine, TtsConfig};
