//! Tokens serialize to plain JSON so they can be dumped and diffed by tooling.

use msxmml::mml::testing::{lex_str, token_at};
use msxmml::{Token, TokenKind};
use serde_json::json;

#[test]
fn test_channel_token_json_shape() {
    let token = token_at("@ch1", 1, 1);
    let value = serde_json::to_value(&token).expect("token to serialize");
    assert_eq!(
        value,
        json!({
            "kind": "ChannelId",
            "text": "@ch1",
            "captures": ["ch1"],
            "row": 1,
            "col": 1
        })
    );
}

#[test]
fn test_fallback_token_has_no_captures() {
    let token = token_at("!!", 4, 1);
    let value = serde_json::to_value(&token).expect("token to serialize");
    assert_eq!(value["kind"], "AnyString");
    assert_eq!(value["captures"], json!([]));
}

#[test]
fn test_note_captures_keep_empty_groups() {
    let token = token_at("c", 1, 1);
    let value = serde_json::to_value(&token).expect("token to serialize");
    assert_eq!(value["captures"], json!(["c", "", "", ""]));
}

#[test]
fn test_token_stream_roundtrip() {
    let tokens = lex_str("@ch1 <- $riff\no4 C#4.. r8 }3\nadsr: 0->100, 5->50, 200, 10");
    let encoded = serde_json::to_string(&tokens).expect("tokens to serialize");
    let decoded: Vec<Token> = serde_json::from_str(&encoded).expect("tokens to deserialize");
    assert_eq!(decoded, tokens);
    assert_eq!(decoded[0].kind, TokenKind::ChannelId);
    assert_eq!(decoded.last().map(|t| t.kind), Some(TokenKind::AdsrVector));
}
