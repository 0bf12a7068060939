use talkie_lib::{Converter, GoogleTtsProvider, TtsConfig, TtsError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

fn batchexecute_body(b64: &str) -> String {
    format!(")]}}'\n\n[[\"wrb.fr\",\"jQ1olc\",\"[\\\"{b64}\\\"]\",null,null,null,\"generic\"]]\n")
}

async fn mock_google(b64: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(BATCHEXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(batchexecute_body(b64)))
        .mount(&mock_server)
        .await;

    mock_server
}

fn converter_for(server: &MockServer) -> Converter<GoogleTtsProvider> {
    Converter::new(GoogleTtsProvider::with_base_url(server.uri()))
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_text_to_speech_creates_file() {
    let server = mock_google("SUQzBAAAAAAA").await;
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("test_output.mp3");

    converter_for(&server)
        .convert("Hello, this is a test", &output_file)
        .await
        .unwrap();

    assert!(output_file.exists());
    assert!(std::fs::metadata(&output_file).unwrap().len() > 0);
}

#[tokio::test]
async fn test_text_to_speech_handles_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    for name in ["output.mp3", "elsewhere/other.mp3"] {
        let err = converter_for(&server)
            .convert("", dir.path().join(name))
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::EmptyText));
        assert!(err.is_invalid_input());
    }
}

#[tokio::test]
async fn test_audio_file_properties() {
    let server = mock_google("SUQzBAAAAAAA").await;
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("test_audio.mp3");

    converter_for(&server)
        .convert("Test audio generation", &output_file)
        .await
        .unwrap();

    assert!(output_file.exists());
    assert!(std::fs::metadata(&output_file).unwrap().len() > 0);

    std::fs::remove_file(&output_file).unwrap();
    assert!(!output_file.exists());
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn test_second_conversion_overwrites_first() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("same.mp3");

    // "first" and "second!" in base64
    let first = mock_google("Zmlyc3Q=").await;
    converter_for(&first)
        .convert("same text", &output_file)
        .await
        .unwrap();
    assert_eq!(std::fs::read(&output_file).unwrap(), b"first");

    let second = mock_google("c2Vjb25kIQ==").await;
    converter_for(&second)
        .convert("same text", &output_file)
        .await
        .unwrap();
    assert_eq!(std::fs::read(&output_file).unwrap(), b"second!");
}

#[tokio::test]
async fn test_engine_error_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("never.mp3");

    let err = converter_for(&server)
        .convert("hello", &output_file)
        .await
        .unwrap_err();

    assert!(matches!(err, TtsError::ApiError { status: 403, .. }));
    assert!(err.to_string().contains("Bad token"));
    assert!(!output_file.exists());
}

#[tokio::test]
async fn test_regional_language_is_sent_as_base_language() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BATCHEXECUTE_PATH))
        .and(wiremock::matchers::body_string_contains("%5C%22en%5C%22"))
        .respond_with(ResponseTemplate::new(200).set_body_string(batchexecute_body("SUQzBAAAAAAA")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    converter_for(&server)
        .with_config(TtsConfig::new().with_language("en-GB"))
        .convert("Cheerio", dir.path().join("uk.mp3"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_host_is_a_synthesis_failure() {
    let dir = tempfile::tempdir().unwrap();
    let converter = Converter::new(GoogleTtsProvider::with_base_url("http://127.0.0.1:9"));

    let err = converter
        .convert("hello", dir.path().join("out.mp3"))
        .await
        .unwrap_err();

    assert!(!err.is_invalid_input());
    assert!(matches!(err, TtsError::HttpError { .. }));
}
