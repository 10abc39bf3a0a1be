//! Tests for cross-language table validation and coverage.

use msgtree::{LanguageCode, MessageTable, MessageTree, TableWarning, messages};

fn table() -> MessageTable {
    MessageTable::new(messages! {
        "greeting" => {
            "hello" => "Hello",
            "welcome" => "Welcome, {name}!",
        },
        "menu" => {
            "open" => "Open",
            "save" => "Save {file}",
        },
        "title" => "Title",
    })
    .with_locale(
        LanguageCode::Fr,
        messages! {
            "greeting" => {
                "hello" => "Bonjour",
                "welcome" => "Bienvenue, {name} !",
            },
            "menu" => {
                "open" => "Ouvrir",
                "save" => "Enregistrer {fichier}",
            },
            "title" => "Titre",
        },
    )
    .with_locale(
        LanguageCode::De,
        messages! {
            "greeting" => "Hallo",
            "title" => "Titel",
            "extra" => { "one" => "Eins" },
        },
    )
}

#[test]
fn placeholder_mismatch_is_reported() {
    assert_eq!(
        table().validate(LanguageCode::Fr),
        vec![TableWarning::PlaceholderMismatch {
            language: LanguageCode::Fr,
            path: "menu.save".to_string(),
            missing: vec!["file".to_string()],
            extra: vec!["fichier".to_string()],
        }]
    );
}

#[test]
fn missing_unknown_and_shape_warnings_sorted_by_path() {
    let warnings = table().validate(LanguageCode::De);
    let paths: Vec<&str> = warnings.iter().map(TableWarning::path).collect();
    assert_eq!(paths, vec!["extra.one", "greeting", "menu.open", "menu.save"]);

    assert_eq!(
        warnings[0],
        TableWarning::UnknownKey {
            language: LanguageCode::De,
            path: "extra.one".to_string()
        }
    );
    assert_eq!(
        warnings[1],
        TableWarning::ShapeMismatch {
            language: LanguageCode::De,
            path: "greeting".to_string()
        }
    );
    assert!(matches!(warnings[2], TableWarning::MissingKey { .. }));
    assert!(warnings.iter().all(|w| w.language() == LanguageCode::De));
}

#[test]
fn absent_language_has_no_warnings() {
    assert!(table().validate(LanguageCode::Ja).is_empty());
}

#[test]
fn default_language_has_no_warnings() {
    assert!(table().validate(LanguageCode::En).is_empty());
}

#[test]
fn dotted_keys_are_unreachable() {
    let table = MessageTable::new(messages! {
        "a.b" => "dotted",
        "group" => { "c.d" => "nested dotted" },
    });
    assert_eq!(
        table.validate(LanguageCode::En),
        vec![
            TableWarning::UnreachableKey {
                language: LanguageCode::En,
                path: "a.b".to_string()
            },
            TableWarning::UnreachableKey {
                language: LanguageCode::En,
                path: "group.c.d".to_string()
            },
        ]
    );
}

#[test]
fn validate_all_covers_every_language() {
    let warnings = table().validate_all();
    assert_eq!(warnings.len(), 5);
    assert_eq!(
        warnings
            .iter()
            .filter(|w| w.language() == LanguageCode::Fr)
            .count(),
        1
    );
}

#[test]
fn warning_messages() {
    let warning = TableWarning::PlaceholderMismatch {
        language: LanguageCode::Fr,
        path: "menu.save".to_string(),
        missing: vec!["file".to_string()],
        extra: vec!["fichier".to_string()],
    };
    assert_eq!(
        warning.to_string(),
        "'menu.save' in 'fr' has mismatched placeholders (missing: [file], extra: [fichier])"
    );

    let warning = TableWarning::MissingKey {
        language: LanguageCode::PtBr,
        path: "title".to_string(),
    };
    assert_eq!(warning.to_string(), "'title' is not translated in 'pt-BR'");
}

// =========================================================================
// Coverage
// =========================================================================

#[test]
fn full_coverage() {
    let coverage = table().coverage(LanguageCode::Fr);
    assert_eq!(coverage.total, 5);
    assert_eq!(coverage.translated, 5);
    assert!(coverage.is_complete());
}

#[test]
fn partial_coverage_lists_missing_paths() {
    let coverage = table().coverage(LanguageCode::De);
    assert_eq!(coverage.total, 5);
    assert_eq!(coverage.translated, 1);
    assert_eq!(
        coverage.missing,
        vec!["greeting.hello", "greeting.welcome", "menu.open", "menu.save"]
    );
    assert!(!coverage.is_complete());
}

#[test]
fn absent_language_covers_nothing() {
    let coverage = table().coverage(LanguageCode::Ja);
    assert_eq!(coverage.translated, 0);
    assert_eq!(coverage.missing.len(), 5);
}

#[test]
fn coverage_serializes() {
    let coverage = table().coverage(LanguageCode::Fr);
    let json = serde_json::to_value(&coverage).unwrap();
    assert_eq!(json["language"], "fr");
    assert_eq!(json["translated"], 5);
}

#[test]
fn coverage_skips_keys_containing_dots() {
    let table = MessageTable::new(
        MessageTree::new()
            .with_text("a.b", "Dotted")
            .with_tree("menu", MessageTree::new().with_text("open", "Open")),
    )
    .with_locale(
        LanguageCode::Fr,
        MessageTree::new()
            .with_text("a.b", "Pointé")
            .with_tree("menu", MessageTree::new().with_text("open", "Ouvrir")),
    );

    let coverage = table.coverage(LanguageCode::Fr);
    assert_eq!(coverage.total, 1);
    assert_eq!(coverage.translated, 1);
    assert!(coverage.is_complete());
}

#[test]
fn dotted_key_does_not_count_as_missing() {
    let table = MessageTable::new(
        MessageTree::new()
            .with_text("a.b", "Dotted")
            .with_text("title", "Title"),
    )
    .with_locale(LanguageCode::Fr, MessageTree::new());

    assert_eq!(table.coverage(LanguageCode::Fr).missing, vec!["title"]);
}
