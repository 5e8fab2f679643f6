#![allow(clippy::unwrap_used)]

use vhdoc::workspace::LabelNamespace;
use vhdoc::{ParseError, Workspace, tags};

use crate::helpers::token_fixtures::{StaticTokens, TokenStream, ieee_header, minimal_entity};

fn parse(stream: &TokenStream) -> Workspace<StaticTokens> {
    let mut workspace = Workspace::new(StaticTokens::new(stream.build()));
    workspace.parse_source("t.vhd", &stream.source()).unwrap();
    workspace
}

#[test]
fn declared_library_collects_its_use_clauses() {
    let workspace = parse(&ieee_header().concat(&minimal_entity("adc")));

    let names: Vec<&str> = workspace.libraries().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["work", "ieee"]);

    let ieee = workspace
        .libraries()
        .find(|l| l.name == "ieee")
        .unwrap();
    assert_eq!(ieee.uses.len(), 1);
    assert!(ieee.uses[0].label.contains("std_logic_1164"));
    assert!(workspace.labels().contains(LabelNamespace::Library, "ieee"));
}

#[test]
fn work_library_is_predeclared() {
    let stream = TokenStream::new()
        .enter(tags::USE_CLAUSE)
        .kw("use")
        .ws(" ")
        .enter(tags::SELECTED_NAME)
        .enter(tags::NAME)
        .tok("parser.identifier", "work")
        .tok("parser.dot", ".")
        .tok("parser.identifier", "util")
        .leave(tags::NAME)
        .leave(tags::SELECTED_NAME)
        .semi()
        .leave(tags::USE_CLAUSE)
        .nl();
    let workspace = parse(&stream);

    let work = workspace.libraries().find(|l| l.name == "work").unwrap();
    assert_eq!(work.uses.len(), 1);
    assert!(work.node.is_none());
}

#[test]
fn use_clause_needs_a_prefix_and_a_suffix() {
    let stream = TokenStream::new()
        .enter(tags::USE_CLAUSE)
        .kw("use")
        .ws(" ")
        .enter(tags::SELECTED_NAME)
        .enter(tags::NAME)
        .tok("parser.identifier", "lonely")
        .leave(tags::NAME)
        .leave(tags::SELECTED_NAME)
        .semi()
        .leave(tags::USE_CLAUSE)
        .nl();

    let mut workspace = Workspace::new(StaticTokens::new(stream.build()));
    let err = workspace.parse_source("t.vhd", &stream.source()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedDeclaration(_)));
}

#[test]
fn use_of_undeclared_library_fails() {
    let stream = TokenStream::new()
        .enter(tags::USE_CLAUSE)
        .kw("use")
        .ws(" ")
        .enter(tags::SELECTED_NAME)
        .enter(tags::NAME)
        .tok("parser.identifier", "foo")
        .tok("parser.dot", ".")
        .tok("parser.identifier", "bar")
        .leave(tags::NAME)
        .leave(tags::SELECTED_NAME)
        .semi()
        .leave(tags::USE_CLAUSE)
        .nl();

    let mut workspace = Workspace::new(StaticTokens::new(stream.build()));
    let err = workspace.parse_source("t.vhd", &stream.source()).unwrap_err();
    match err {
        ParseError::MalformedDeclaration(message) => assert!(message.contains("foo")),
        other => panic!("expected MalformedDeclaration, got {other:?}"),
    }
}

#[test]
fn redeclared_library_merges_instead_of_failing() {
    let first = ieee_header();
    let second = ieee_header();
    let mut workspace = Workspace::new(
        StaticTokens::new(first.build()).with("b.vhd", second.build()),
    );
    workspace.parse_source("a.vhd", &first.source()).unwrap();
    workspace.parse_source("b.vhd", &second.source()).unwrap();

    let ieee = workspace.libraries().find(|l| l.name == "ieee").unwrap();
    assert_eq!(workspace.libraries().count(), 2);
    assert_eq!(ieee.uses.len(), 2);
}
