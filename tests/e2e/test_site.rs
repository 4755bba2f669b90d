use crate::helpers::{self, fixtures, TestContext};

use chatter::domain::tts::{SpeechInput, TtsServiceApi};
use chatter::error::AppError;
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use test_context::test_context;

fn payload_texts(ctx: &TestContext) -> Vec<String> {
    ctx.http
        .requests_to(Method::POST, &fixtures::speech_url(fixtures::VOICE_ID))
        .iter()
        .map(|request| {
            let payload: serde_json::Value =
                serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
            payload["text"].as_str().unwrap().to_string()
        })
        .collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_single_chunk_site(ctx: &TestContext) {
    let audio = fixtures::mock_audio_bytes(7);
    ctx.http.respond(
        Method::GET,
        fixtures::SITE_URL,
        StatusCode::OK,
        fixtures::page("<h1>testing</h1>"),
    );
    ctx.http.respond(
        Method::POST,
        &fixtures::speech_url(fixtures::VOICE_ID),
        StatusCode::OK,
        audio.clone(),
    );

    let files = ctx
        .service(helpers::DEFAULT_LIMIT)
        .run(SpeechInput::Site(fixtures::SITE_URL.to_string()))
        .await
        .unwrap();

    assert_eq!(payload_texts(ctx), vec!["testing\n"]);
    assert_eq!(files.len(), 1);
    assert_eq!(ctx.written_files(), files);
    assert_eq!(std::fs::read(&files[0]).unwrap(), audio);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_chunks_in_order(ctx: &TestContext) {
    let speech_url = fixtures::speech_url(fixtures::VOICE_ID);
    ctx.http.respond(
        Method::GET,
        fixtures::SITE_URL,
        StatusCode::OK,
        fixtures::page("<h1>This is the h1</h1><p>This is paragraph text</p>"),
    );
    for marker in 1..=8 {
        ctx.http.respond(
            Method::POST,
            &speech_url,
            StatusCode::OK,
            fixtures::mock_audio_bytes(marker),
        );
    }

    let files = ctx
        .service(5)
        .process_site(fixtures::SITE_URL)
        .await
        .unwrap();

    assert_eq!(
        payload_texts(ctx),
        vec!["This ", "is th", "e h1\n", "This ", "is pa", "ragra", "ph te", "xt\n"]
    );
    assert_eq!(files.len(), 8);
    for (index, file) in files.iter().enumerate() {
        let marker = index as u8 + 1;
        assert_eq!(std::fs::read(file).unwrap(), fixtures::mock_audio_bytes(marker));
    }
    assert_eq!(ctx.written_files().len(), 8);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stop_at_first_failing_chunk(ctx: &TestContext) {
    let speech_url = fixtures::speech_url(fixtures::VOICE_ID);
    ctx.http.respond(
        Method::GET,
        fixtures::SITE_URL,
        StatusCode::OK,
        fixtures::page("<h1>one two three</h1>"),
    );
    ctx.http.respond(Method::POST, &speech_url, StatusCode::OK, fixtures::mock_audio_bytes(1));
    ctx.http.respond(
        Method::POST,
        &speech_url,
        StatusCode::INTERNAL_SERVER_ERROR,
        "synthesis failed",
    );
    ctx.http.respond(Method::POST, &speech_url, StatusCode::OK, fixtures::mock_audio_bytes(3));

    // "one two three\n" splits into "one t", "wo th", "ree\n"
    let err = ctx
        .service(5)
        .process_site(fixtures::SITE_URL)
        .await
        .unwrap_err();

    match err {
        AppError::Remote { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "synthesis failed");
        }
        other => panic!("expected remote error, got {:?}", other),
    }

    assert_eq!(payload_texts(ctx), vec!["one t", "wo th"]);

    let files = ctx.written_files();
    assert_eq!(files.len(), 1);
    assert_eq!(std::fs::read(&files[0]).unwrap(), fixtures::mock_audio_bytes(1));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_when_site_is_unavailable(ctx: &TestContext) {
    ctx.http.respond(
        Method::GET,
        fixtures::SITE_URL,
        StatusCode::NOT_FOUND,
        "not here",
    );

    let err = ctx
        .service(helpers::DEFAULT_LIMIT)
        .process_site(fixtures::SITE_URL)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Remote { status, .. } if status == StatusCode::NOT_FOUND));
    assert!(payload_texts(ctx).is_empty());
    assert!(ctx.written_files().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_read_page_with_latin1_bytes(ctx: &TestContext) {
    let speech_url = fixtures::speech_url(fixtures::VOICE_ID);
    ctx.http.respond(
        Method::GET,
        fixtures::SITE_URL,
        StatusCode::OK,
        b"<html><body><p>caf\xe9</p></body></html>".to_vec(),
    );
    ctx.http.respond(Method::POST, &speech_url, StatusCode::OK, fixtures::mock_audio_bytes(1));

    let files = ctx
        .service(helpers::DEFAULT_LIMIT)
        .process_site(fixtures::SITE_URL)
        .await
        .unwrap();

    assert_eq!(payload_texts(ctx), vec!["caf\u{FFFD}\n"]);
    assert_eq!(files.len(), 1);
    assert_eq!(ctx.written_files(), files);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_trailing_empty_chunk(ctx: &TestContext) {
    let speech_url = fixtures::speech_url(fixtures::VOICE_ID);
    ctx.http.respond(
        Method::GET,
        fixtures::SITE_URL,
        StatusCode::OK,
        fixtures::page("<p>abc</p>"),
    );
    ctx.http.respond(Method::POST, &speech_url, StatusCode::OK, fixtures::mock_audio_bytes(1));

    // "abc\n" is an exact multiple of the limit
    let files = ctx
        .service(2)
        .process_site(fixtures::SITE_URL)
        .await
        .unwrap();

    assert_eq!(payload_texts(ctx), vec!["ab", "c\n", ""]);
    assert_eq!(files.len(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_ambiguous_input_before_network(ctx: &TestContext) {
    let err = SpeechInput::from_options(
        Some("Hello".to_string()),
        Some(fixtures::SITE_URL.to_string()),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(ctx.http.requests().is_empty());
}
