use std::{
    sync::{Arc, Barrier},
    thread,
};

use tower_lsp::lsp_types::{Position, Range};

use super::*;

const V1: &str = "struct Ray {\n    vec3 origin;\n};\nRay make_ray(vec3 o);\n";
const V2: &str = "struct Hit {\n    float t;\n};\nHit intersect(Ray r);\nvoid main() {}\n";

fn shader_uri() -> Url {
    Url::parse("file:///shader.frag").unwrap()
}

fn full_change(text: &str) -> TextDocumentContentChangeEvent {
    TextDocumentContentChangeEvent {
        range: None,
        range_length: None,
        text: text.to_string(),
    }
}

fn names(symbols: &[DocumentSymbol]) -> Vec<&str> {
    symbols.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn new_store_is_empty() {
    let store = DocumentStore::new();
    assert!(store.current_symbols().is_empty());
    assert_eq!(store.snapshot(), DocumentState::default());
}

#[test]
fn open_scans_document() {
    let store = DocumentStore::new();
    store.open(shader_uri(), V1.to_string(), 1);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.uri, Some(shader_uri()));
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.text, V1);
    assert_eq!(names(&store.current_symbols()), vec!["Ray", "make_ray"]);
}

#[test]
fn change_rescans_new_text_with_its_own_structs() {
    let store = DocumentStore::new();
    store.open(shader_uri(), V1.to_string(), 1);
    store.change(shader_uri(), vec![full_change(V2)], 2).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.text, V2);
    assert_eq!(snapshot.version, 2);
    // `intersect` returns `Hit`, which only exists in the new text.
    assert_eq!(names(&store.current_symbols()), vec!["Hit", "intersect", "main"]);
}

#[test]
fn ranged_change_is_rejected_and_state_kept() {
    let store = DocumentStore::new();
    store.open(shader_uri(), V1.to_string(), 1);
    let before = store.snapshot();

    let delta = TextDocumentContentChangeEvent {
        range: Some(Range::new(Position::new(0, 7), Position::new(0, 10))),
        range_length: Some(3),
        text: "Beam".to_string(),
    };
    let error = store.change(shader_uri(), vec![delta], 2).unwrap_err();
    assert_eq!(error, DocumentError::MalformedChangeEvent(MalformedChange::RangedEdit));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn empty_and_multiple_changes_are_rejected() {
    let store = DocumentStore::new();
    store.open(shader_uri(), V1.to_string(), 1);
    let before = store.snapshot();

    assert_eq!(
        store.change(shader_uri(), Vec::new(), 2),
        Err(DocumentError::MalformedChangeEvent(MalformedChange::NoChanges))
    );
    assert_eq!(
        store.change(shader_uri(), vec![full_change(V2), full_change(V2)], 2),
        Err(DocumentError::MalformedChangeEvent(MalformedChange::MultipleChanges(2)))
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn save_keeps_state() {
    let store = DocumentStore::new();
    store.open(shader_uri(), V1.to_string(), 1);
    let before = store.snapshot();
    store.save();
    assert_eq!(store.snapshot(), before);
}

#[test]
fn open_replaces_previous_document() {
    let store = DocumentStore::new();
    store.open(shader_uri(), V1.to_string(), 1);
    let other = Url::parse("file:///other.vert").unwrap();
    store.open(other.clone(), V2.to_string(), 1);

    assert_eq!(store.snapshot().uri, Some(other));
    assert_eq!(names(&store.current_symbols()), vec!["Hit", "intersect", "main"]);
}

#[test]
fn concurrent_changes_never_tear_state() {
    const WRITERS: i32 = 8;
    let store = Arc::new(DocumentStore::new());
    store.open(shader_uri(), V1.to_string(), 0);
    let start = Arc::new(Barrier::new(WRITERS as usize + 1));

    let writers: Vec<_> = (1..=WRITERS)
        .map(|version| {
            let store = Arc::clone(&store);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                for round in 0..50 {
                    let text = if (version + round) % 2 == 0 {
                        V1
                    } else {
                        V2
                    };
                    store.change(shader_uri(), vec![full_change(text)], version).unwrap();
                }
            })
        })
        .collect();

    start.wait();
    let mut reads = 0usize;
    while reads < 64 || !writers.iter().all(|writer| writer.is_finished()) {
        let snapshot = store.snapshot();
        let symbols = snapshot.symbols();
        let expected: &[&str] = if snapshot.text == V1 {
            &["Ray", "make_ray"]
        } else {
            &["Hit", "intersect", "main"]
        };
        assert_eq!(names(&symbols), expected, "torn state: symbols do not match stored text");

        let current = store.current_symbols();
        let current = names(&current);
        assert!(
            current == ["Ray", "make_ray"] || current == ["Hit", "intersect", "main"],
            "torn symbol set: {current:?}"
        );
        reads += 1;
    }
    for writer in writers {
        writer.join().unwrap();
    }
}

#[test]
fn error_messages_name_the_problem() {
    let error = DocumentError::MalformedChangeEvent(MalformedChange::MultipleChanges(3));
    assert_eq!(error.to_string(), "malformed change event: 3 content changes, expected exactly one");
}
