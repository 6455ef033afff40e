//! 语言检测与请求构造测试

use t_translate::{build_request, detect, LanguagePair};

#[test]
fn test_ascii_text_is_english() {
    for text in ["Good morning!", "a", "hello world 123", "?!-_"] {
        assert_eq!(detect(text), LanguagePair::EnJa, "{text:?}");
    }
}

#[test]
fn test_empty_text_defaults_to_english() {
    assert_eq!(detect(""), LanguagePair::EnJa);
}

#[test]
fn test_non_ascii_in_window_is_japanese() {
    assert_eq!(detect("おはようございます"), LanguagePair::JaEn);
    assert_eq!(detect("Good morning, 太郎"), LanguagePair::JaEn);
    // Accented latin is also outside 7-bit ASCII
    assert_eq!(detect("café"), LanguagePair::JaEn);
}

#[test]
fn test_window_counts_characters_not_bytes() {
    // The 20th character is still inspected
    let text = format!("{}x", "a".repeat(19));
    assert_eq!(detect(&text), LanguagePair::EnJa);

    let text = format!("{}あ", "a".repeat(19));
    assert_eq!(detect(&text), LanguagePair::JaEn);
}

#[test]
fn test_non_ascii_after_window_is_ignored() {
    let text = format!("{}日本語", "a".repeat(20));
    assert_eq!(detect(&text), LanguagePair::EnJa);

    let text = format!("{} 日本語", "The quick brown fox jumps");
    assert_eq!(detect(&text), LanguagePair::EnJa);
}

#[test]
fn test_model_id_joins_source_and_target() {
    for pair in [LanguagePair::EnJa, LanguagePair::JaEn] {
        assert_eq!(
            pair.model_id(),
            format!("{}-{}", pair.source(), pair.target())
        );
    }

    for text in ["", "hello", "こんにちは", "mixed テキスト"] {
        let req = build_request(text);
        assert_eq!(req.model_id, format!("{}-{}", req.source, req.target));
    }
}

#[test]
fn test_build_request_fields() {
    let req = build_request("Good morning!");
    assert_eq!(req.model_id, "en-ja");
    assert_eq!(req.source, "en");
    assert_eq!(req.target, "ja");
    assert_eq!(req.text, vec!["Good morning!".to_string()]);

    let req = build_request("おはようございます!");
    assert_eq!(req.model_id, "ja-en");
    assert_eq!(req.source, "ja");
    assert_eq!(req.target, "en");
}

#[test]
fn test_build_request_accepts_empty_text() {
    let req = build_request("");
    assert_eq!(req.model_id, "en-ja");
    assert_eq!(req.text, vec![String::new()]);
}

#[test]
fn test_request_wire_format() {
    let req = build_request("Hi");
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "model_id": "en-ja",
            "source": "en",
            "target": "ja",
            "text": ["Hi"],
        })
    );
}
