//! Data-model decode/encode tests

use urbandict::{Definition, DefinitionResponse};

const RESPONSE_JSON: &str = r#"{
    "list": [
        {
            "author": "catwithpaws",
            "current_vote": "",
            "defid": 8417089,
            "definition": "A feeling of warm cosiness.",
            "example": "Lighting candles in winter is pure hygge.",
            "permalink": "https://hygge.urbanup.com/8417089",
            "thumbs_down": 18,
            "thumbs_up": 421,
            "word": "hygge"
        },
        {
            "author": "someone else",
            "current_vote": "",
            "defid": 9000001,
            "definition": "See above.",
            "example": "",
            "permalink": "https://hygge.urbanup.com/9000001",
            "thumbs_down": 2,
            "thumbs_up": 7,
            "word": "hygge"
        }
    ],
    "result_type": "exact",
    "sounds": ["https://example.com/hygge.mp3"],
    "tags": ["cosy", "danish"]
}"#;

#[test]
fn decode_then_encode_preserves_all_values() {
    let response: DefinitionResponse = serde_json::from_str(RESPONSE_JSON).unwrap();

    let original: serde_json::Value = serde_json::from_str(RESPONSE_JSON).unwrap();
    let reencoded = serde_json::to_value(&response).unwrap();
    assert_eq!(original, reencoded);
}

#[test]
fn decode_fills_every_field() {
    let response: DefinitionResponse = serde_json::from_str(RESPONSE_JSON).unwrap();

    assert_eq!(response.result_type, "exact");
    assert_eq!(response.sounds, vec!["https://example.com/hygge.mp3"]);
    assert_eq!(response.tags, vec!["cosy", "danish"]);
    assert_eq!(response.list.len(), 2);

    let top = &response.list[0];
    assert_eq!(top.author, "catwithpaws");
    assert_eq!(top.defid, 8417089);
    assert_eq!(top.thumbs_up, 421);
    assert_eq!(top.thumbs_down, 18);
    assert_eq!(top.word, "hygge");
    assert_eq!(top.permalink, "https://hygge.urbanup.com/8417089");
}

#[test]
fn absent_fields_decode_to_empty_values() {
    let response: DefinitionResponse = serde_json::from_str(r#"{"list": []}"#).unwrap();

    assert!(response.list.is_empty());
    assert!(response.result_type.is_empty());
    assert!(response.sounds.is_empty());
    assert!(response.tags.is_empty());
}

#[test]
fn into_top_returns_first_entry() {
    let response: DefinitionResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
    let top = response.into_top().unwrap();
    assert_eq!(top.defid, 8417089);
}

#[test]
fn into_top_of_empty_list_is_none() {
    let response: DefinitionResponse =
        serde_json::from_str(r#"{"list": [], "result_type": "no_results"}"#).unwrap();
    assert_eq!(response.into_top(), None);
}

#[test]
fn display_renders_pretty_json() {
    let response: DefinitionResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
    let definition: Definition = response.into_top().unwrap();

    let rendered = definition.to_string();
    assert!(rendered.contains("\"word\": \"hygge\""));
    assert!(rendered.contains("\"thumbs_up\": 421"));
    // Pretty-printed, one field per line.
    assert!(rendered.lines().count() > 1);
}
