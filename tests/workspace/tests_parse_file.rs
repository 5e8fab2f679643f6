#![allow(clippy::unwrap_used)]

use vhdoc::workspace::LabelNamespace;
use vhdoc::{ParseError, ParseOptions, Tree, Workspace, tags};

use crate::helpers::token_fixtures::{StaticTokens, gpio_entity, minimal_entity};

#[test]
fn reparsing_the_same_path_returns_the_cached_file_node() {
    let stream = gpio_entity();
    let source = stream.source();
    let mut workspace = Workspace::new(StaticTokens::new(stream.build()));

    let first = workspace.parse_source("gpio.vhd", &source).unwrap();
    let labels_before = workspace.labels().len();
    let nodes_before = workspace.tree().len();

    let second = workspace.parse_source("gpio.vhd", &source).unwrap();
    assert_eq!(first, second);
    assert_eq!(workspace.file_count(), 1);
    assert_eq!(workspace.entities().count(), 1);
    assert_eq!(workspace.labels().len(), labels_before);
    assert_eq!(workspace.tree().len(), nodes_before);
}

#[test]
fn parse_file_reads_caches_and_round_trips() {
    let stream = gpio_entity();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gpio.vhd");
    std::fs::write(&path, stream.source()).unwrap();

    let mut workspace = Workspace::new(StaticTokens::new(stream.build()));
    let first = workspace.parse_file(&path).unwrap();
    let second = workspace.parse_file(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(workspace.file_node(&path), Some(first));
    assert_eq!(workspace.tree().subtext(first), stream.source());
}

#[test]
fn parse_file_propagates_missing_file_errors() {
    let mut workspace = Workspace::new(StaticTokens::new(Vec::new()));
    let err = workspace.parse_file("/nonexistent/missing.vhd").unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn duplicate_entity_across_files_is_fatal() {
    let first = minimal_entity("adc");
    let second = minimal_entity("adc");
    let mut workspace = Workspace::new(
        StaticTokens::new(first.build()).with("b.vhd", second.build()),
    );

    workspace.parse_source("a.vhd", &first.source()).unwrap();
    let err = workspace.parse_source("b.vhd", &second.source()).unwrap_err();
    match err {
        ParseError::DuplicateLabel { namespace, label } => {
            assert_eq!(namespace, LabelNamespace::Entity);
            assert_eq!(label, "adc");
        }
        other => panic!("expected DuplicateLabel, got {other:?}"),
    }
}

#[test]
fn non_recursive_options_skip_nested_scopes() {
    let stream = gpio_entity();
    let mut workspace = Workspace::with_options(
        StaticTokens::new(stream.build()),
        ParseOptions { recurse: false },
    );
    workspace.parse_source("gpio.vhd", &stream.source()).unwrap();

    let entity = workspace.entity("gpio").unwrap();
    // Top-level comments are still attached, but the port clause was never
    // grouped, so no separator or port comment shows up.
    assert_eq!(entity.brief, vec!["Does X".to_string()]);
    assert_eq!(entity.ports.len(), 2);
    assert!(entity.ports.iter().all(|p| p.comments.is_empty()));
}

#[test]
fn label_registry_tolerates_reinserting_the_same_owner() {
    let mut tree = Tree::new(tags::PROJECT);
    let root = tree.root();
    let first = tree.new_production(tags::ENTITY_DECLARATION, vhdoc::Position::default());
    tree.append(root, first);
    let second = tree.new_production(tags::ENTITY_DECLARATION, vhdoc::Position::default());
    tree.append(root, second);

    let mut labels = vhdoc::workspace::LabelRegistry::new();
    labels.insert(LabelNamespace::Entity, "adc", first).unwrap();
    labels.insert(LabelNamespace::Entity, "adc", first).unwrap();
    let err = labels
        .insert(LabelNamespace::Entity, "adc", second)
        .unwrap_err();
    assert!(matches!(err, ParseError::DuplicateLabel { .. }));

    // Namespaces partition the table.
    labels
        .insert(LabelNamespace::Library, "adc", second)
        .unwrap();
}
