#![allow(clippy::unwrap_used)]

use vhdoc::Workspace;
use vhdoc::workspace::CommentMarkers;

use crate::helpers::token_fixtures::{StaticTokens, gpio_entity};

fn parsed_gpio() -> Workspace<StaticTokens> {
    let stream = gpio_entity();
    let mut workspace = Workspace::new(StaticTokens::new(stream.build()));
    workspace.parse_source("gpio.vhd", &stream.source()).unwrap();
    workspace
}

#[test]
fn start_before_captures_the_matching_line() {
    let workspace = parsed_gpio();
    let lines = workspace
        .comments_between(
            "gpio",
            &CommentMarkers {
                start_before: Some("more".to_string()),
                ..CommentMarkers::default()
            },
        )
        .unwrap();
    assert_eq!(lines, vec!["more detail".to_string()]);
}

#[test]
fn start_after_skips_the_matching_line() {
    let workspace = parsed_gpio();
    let lines = workspace
        .comments_between(
            "gpio",
            &CommentMarkers {
                start_after: Some("Does X".to_string()),
                end_before: Some("more detail".to_string()),
                ..CommentMarkers::default()
            },
        )
        .unwrap();
    // Only the bare `--` line between the brief and the details is captured.
    assert_eq!(lines, vec![String::new()]);
}

#[test]
fn capture_stops_at_the_first_block_that_yields_lines() {
    let workspace = parsed_gpio();
    let lines = workspace
        .comments_between(
            "gpio",
            &CommentMarkers {
                start_after: Some("Clock ports".to_string()),
                ..CommentMarkers::default()
            },
        )
        .unwrap();
    // The match arms the capture at the end of the sectioning block; the
    // next block in document order supplies the lines and wins.
    assert_eq!(lines, vec!["The clock".to_string()]);
}

#[test]
fn unknown_entity_is_reported_with_known_names() {
    let workspace = parsed_gpio();
    let err = workspace
        .comments_between("nope", &CommentMarkers::default())
        .unwrap_err();
    assert!(matches!(err, vhdoc::ParseError::EntityNotFound { .. }));
}
