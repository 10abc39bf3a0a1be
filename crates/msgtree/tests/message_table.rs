//! Tests for language codes, message trees, and message tables.

use std::collections::BTreeMap;

use msgtree::{
    DEFAULT_LANGUAGE, LanguageCode, MessageNode, MessageTable, MessageTree, TableError,
    UnknownLanguage, messages,
};

// =========================================================================
// Language Codes
// =========================================================================

#[test]
fn default_language_is_english() {
    assert_eq!(DEFAULT_LANGUAGE, LanguageCode::En);
    assert_eq!(LanguageCode::default(), LanguageCode::En);
    assert!(LanguageCode::En.is_default());
    assert!(!LanguageCode::EnGb.is_default());
}

#[test]
fn language_codes_use_wire_form() {
    assert_eq!(LanguageCode::EnGb.as_str(), "en-GB");
    assert_eq!(LanguageCode::FiFi.as_str(), "fi-fi");
    assert_eq!(LanguageCode::PtBr.to_string(), "pt-BR");
    assert_eq!(LanguageCode::ZhTw.to_string(), "zh-TW");
    assert_eq!("zh".parse::<LanguageCode>(), Ok(LanguageCode::Zh));
    assert_eq!("en-GB".parse::<LanguageCode>(), Ok(LanguageCode::EnGb));
}

#[test]
fn every_code_parses_back() {
    assert_eq!(LanguageCode::ALL.len(), 55);
    assert_eq!(LanguageCode::ALL[0], DEFAULT_LANGUAGE);
    for code in LanguageCode::ALL {
        assert_eq!(code.as_str().parse::<LanguageCode>(), Ok(*code));
    }
}

#[test]
fn unknown_code_is_rejected() {
    assert_eq!(
        "xx".parse::<LanguageCode>(),
        Err(UnknownLanguage {
            code: "xx".to_string()
        })
    );
    // Codes are matched exactly.
    assert!("EN".parse::<LanguageCode>().is_err());
    assert!("en-gb".parse::<LanguageCode>().is_err());
    assert_eq!(
        "xx".parse::<LanguageCode>().unwrap_err().to_string(),
        "unknown language code 'xx'"
    );
}

// =========================================================================
// Message Trees
// =========================================================================

#[test]
fn tree_builder_and_macro_agree() {
    let built = MessageTree::new()
        .with_tree(
            "greeting",
            MessageTree::new()
                .with_text("hello", "Hello")
                .with_text("welcome", "Welcome, {name}!"),
        )
        .with_text("title", "Title");

    let from_macro = messages! {
        "greeting" => {
            "hello" => "Hello",
            "welcome" => "Welcome, {name}!",
        },
        "title" => "Title",
    };

    assert_eq!(built, from_macro);
}

#[test]
fn empty_macro_is_empty_tree() {
    let tree = messages! {};
    assert!(tree.is_empty());
}

#[test]
fn node_at_requires_every_segment() {
    let tree = messages! { "a" => { "b" => "text" } };
    assert_eq!(
        tree.node_at("a.b"),
        Some(&MessageNode::Text("text".to_string()))
    );
    assert!(tree.node_at("a").and_then(MessageNode::as_tree).is_some());
    assert_eq!(tree.node_at("a.b.c"), None);
    assert_eq!(tree.node_at("a.x"), None);
    assert_eq!(tree.node_at(""), None);
}

#[test]
fn paths_lists_text_leaves_sorted() {
    let tree = messages! {
        "z" => "last",
        "a" => { "y" => "1", "b" => { "c" => "2" } },
        "empty" => {},
    };
    assert_eq!(tree.paths(), vec!["a.b.c", "a.y", "z"]);
}

#[test]
fn insert_replaces_existing_node() {
    let mut tree = MessageTree::new();
    assert_eq!(tree.insert_text("k", "one"), None);
    assert_eq!(
        tree.insert_tree("k", MessageTree::new()),
        Some(MessageNode::Text("one".to_string()))
    );
    assert_eq!(tree.len(), 1);
}

#[test]
fn tree_from_iterator() {
    let tree: MessageTree = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(tree.paths(), vec!["a", "b"]);
}

// =========================================================================
// Message Tables
// =========================================================================

#[test]
fn table_always_has_default() {
    let table = MessageTable::new(messages! { "hello" => "Hello" });
    assert!(table.contains(LanguageCode::En));
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
    assert_eq!(table.get(LanguageCode::En), Some(table.default_tree()));
}

#[test]
fn table_languages_default_first() {
    let table = MessageTable::new(MessageTree::new())
        .with_locale(LanguageCode::Zh, MessageTree::new())
        .with_locale(LanguageCode::De, MessageTree::new());
    let languages: Vec<LanguageCode> = table.languages().collect();
    assert_eq!(languages[0], LanguageCode::En);
    assert_eq!(languages.len(), 3);
    assert!(languages.contains(&LanguageCode::Zh));
    assert!(languages.contains(&LanguageCode::De));
}

#[test]
fn inserting_default_replaces_default_tree() {
    let mut table = MessageTable::new(messages! { "hello" => "Hello" });
    let replaced = table.insert(LanguageCode::En, messages! { "hello" => "Hi" });
    assert!(replaced.is_some());
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.default_tree().get("hello"),
        Some(&MessageNode::Text("Hi".to_string()))
    );
}

#[test]
fn table_try_from_requires_default() {
    let mut trees = BTreeMap::new();
    trees.insert(LanguageCode::Fr, MessageTree::new());
    assert_eq!(
        MessageTable::try_from(trees),
        Err(TableError::MissingDefault)
    );
}

// =========================================================================
// Serde
// =========================================================================

const TABLE_JSON: &str = r#"{
    "en": { "greeting": { "hello": "Hello", "welcome": "Welcome, {name}!" } },
    "zh": { "greeting": { "hello": "你好" } },
    "en-GB": { "greeting": { "hello": "Hello, mate" } }
}"#;

#[test]
fn table_deserializes_from_json() {
    let table: MessageTable = serde_json::from_str(TABLE_JSON).unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.contains(LanguageCode::EnGb));
    assert_eq!(
        table
            .get(LanguageCode::Zh)
            .and_then(|tree| tree.node_at("greeting.hello")),
        Some(&MessageNode::Text("你好".to_string()))
    );
}

#[test]
fn table_without_default_fails_to_deserialize() {
    let err = serde_json::from_str::<MessageTable>(r#"{ "zh": { "a": "b" } }"#).unwrap_err();
    assert!(err.to_string().contains("default language 'en'"));
}

#[test]
fn table_with_unknown_language_fails_to_deserialize() {
    assert!(serde_json::from_str::<MessageTable>(r#"{ "en": {}, "xx": {} }"#).is_err());
}

#[test]
fn tree_rejects_non_string_leaves() {
    assert!(serde_json::from_str::<MessageTree>(r#"{ "count": 3 }"#).is_err());
    assert!(serde_json::from_str::<MessageTree>(r#"{ "list": ["a"] }"#).is_err());
}

#[test]
fn table_serializes_with_wire_codes() {
    let table = MessageTable::new(messages! { "a" => "b" })
        .with_locale(LanguageCode::PtBr, messages! { "a" => "c" });
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "en": { "a": "b" }, "pt-BR": { "a": "c" } })
    );

    let back: MessageTable = serde_json::from_value(json).unwrap();
    assert_eq!(back, table);
}
