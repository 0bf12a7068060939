//! Talkie CLI - save text as spoken audio

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use owo_colors::{OwoColorize, Stream};
use talkie_lib::{
    Converter, DEFAULT_LANGUAGE, DEFAULT_OUTPUT_PATH, Engine, GoogleTtsProvider, GttsCliProvider,
    Synthesizer, TtsConfig, supported_languages,
};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Convert text to speech
///
/// # Examples
///
/// ```no_run
/// // Save speech to output.mp3
/// // talkie "Hello world"
///
/// // Save speech to a chosen file
/// // talkie "Hello world" -o hello.mp3
///
/// // Read the text from stdin
/// // echo "Hello world" | talkie -
/// ```
#[derive(Parser)]
#[command(name = "talkie")]
#[command(about = "Convert text to speech and save it as an MP3 file", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to convert to speech (use "-" to read from stdin)
    #[arg(required_unless_present = "list_languages")]
    text: Option<String>,

    /// Output filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Language code (e.g. en, fr, en-gb)
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Google host top-level domain, for regional accents (e.g. co.uk)
    #[arg(long)]
    tld: Option<String>,

    /// Read the text more slowly
    #[arg(long)]
    slow: bool,

    /// Speech engine to use
    #[arg(long, value_enum, default_value_t = EngineArg::Google)]
    engine: EngineArg,

    /// List the languages the selected engine supports and exit
    #[arg(long)]
    list_languages: bool,

    /// Output the language list as JSON
    #[arg(long, requires = "list_languages")]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Send Google requests to this host instead
    #[arg(long, hide = true)]
    base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    Google,
    GttsCli,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Google => Engine::Google,
            EngineArg::GttsCli => Engine::GttsCli,
        }
    }
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): WARN only
/// - 1 (-v): INFO (conversion summary)
/// - 2 (-vv): DEBUG (chunks, engine settings)
/// - 3 (-vvv): TRACE (request payloads) with file/line numbers
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,talkie_lib=info".to_string(),
            2 => "info,talkie_lib=debug".to_string(),
            _ => "debug,talkie_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

/// Reads the text to convert from stdin, trimming surrounding whitespace.
fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// Print the languages the selected engine understands.
///
/// The Google engine uses the built-in table; `gtts-cli` is asked directly.
async fn print_languages(engine: EngineArg, json: bool) -> Result<()> {
    let languages: Vec<(String, String)> = match engine {
        EngineArg::Google => supported_languages()
            .iter()
            .map(|language| (language.code.to_string(), language.name.to_string()))
            .collect(),
        EngineArg::GttsCli => {
            if !GttsCliProvider::is_available() {
                return Err(eyre!("gtts-cli is not installed (pip install gTTS)"));
            }
            GttsCliProvider::new().list_languages().await?
        }
    };

    if json {
        let entries: Vec<_> = languages
            .iter()
            .map(|(code, name)| serde_json::json!({ "code": code, "name": name }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (code, name) in &languages {
            println!("{code:>6}: {name}");
        }
    }

    Ok(())
}

fn build_synthesizer(engine: EngineArg, base_url: Option<String>) -> Synthesizer {
    match (engine, base_url) {
        (EngineArg::Google, Some(url)) => GoogleTtsProvider::with_base_url(url).into(),
        (engine, _) => Synthesizer::for_engine(engine.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_languages {
        return print_languages(cli.engine, cli.json).await;
    }

    let text = match cli.text.as_deref() {
        Some("-") => read_from_stdin().context("failed to read text from stdin")?,
        Some(text) => text.to_string(),
        None => String::new(),
    };

    let mut config = TtsConfig::new().with_language(&cli.lang).with_slow(cli.slow);
    if let Some(tld) = &cli.tld {
        config = config.with_tld(tld);
    }

    let synthesizer = build_synthesizer(cli.engine, cli.base_url);
    tracing::debug!(engine = %synthesizer.engine(), "Selected speech engine");

    println!(
        "Converting text to speech: '{}'",
        text.if_supports_color(Stream::Stdout, |t| t.cyan())
    );

    Converter::new(synthesizer)
        .with_config(config)
        .convert(&text, &cli.output)
        .await?;

    println!(
        "Speech saved to '{}'",
        cli.output
            .display()
            .if_supports_color(Stream::Stdout, |p| p.green())
    );

    Ok(())
}
