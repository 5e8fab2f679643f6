//! Well-known token type ids and production names.
//!
//! Token type ids are the dotted identifiers published by the tokenizer
//! collaborator; production names are the grammar-level groupings signalled
//! through enter/leave markers. Group tags are synthesized by the comment
//! passes.

// Trivia token ids
pub const WHITESPACE: &str = "parser.whitespace";
pub const BLANK_LINE_TOKEN: &str = "parser.blank_line";
pub const COMMENT: &str = "parser.comment";
pub const CARRIAGE_RETURN: &str = "parser.carriage_return";
pub const DELIMITED_COMMENT_BEGIN: &str = "delimited_comment.beginning";
pub const DELIMITED_COMMENT_END: &str = "delimited_comment.ending";

// Structural tags
pub const PROJECT: &str = "project";
pub const FILE: &str = "file";

// Group tags synthesized by the comment grouper
pub const COMMENT_BLOCK: &str = "comment_block";
pub const BLANK_LINE: &str = "blank_line";

// Production names and leaf ids used by the analyzers
pub const ENTITY_DECLARATION: &str = "entity_declaration";
pub const ENTITY_IDENTIFIER: &str = "entity_declaration.identifier";
pub const PORT_CLAUSE: &str = "port_clause";
pub const GENERIC_CLAUSE: &str = "generic_clause";
pub const INTERFACE_DECLARATION: &str = "interface_unknown_declaration";
pub const INTERFACE_IDENTIFIER: &str = "interface_unknown_declaration.identifier";
pub const INTERFACE_COLON: &str = "interface_unknown_declaration.colon";
pub const LIBRARY_CLAUSE: &str = "library_clause";
pub const USE_CLAUSE: &str = "use_clause";
pub const SELECTED_NAME: &str = "selected_name";
pub const NAME: &str = "name";
pub const IDENTIFIER: &str = "identifier";

/// Whitespace, blank and line-end token ids, plus the `blank_line` group
/// tag: everything the attachment passes may skip over without breaking a
/// comment/declaration association.
pub fn is_trivia(tag: &str) -> bool {
    matches!(
        tag,
        WHITESPACE | BLANK_LINE_TOKEN | CARRIAGE_RETURN | BLANK_LINE
    )
}
