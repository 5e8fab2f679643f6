use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::ParseError;
use crate::analyze::{EntityInfo, LibraryInfo, analyze_entities, analyze_libraries};
use crate::comments::{attach_header_comments, attach_tail_comments, group_comments};
use crate::parser::{Tokenize, build_file_tree, tags};
use crate::tree::{NodeId, Tree};

use super::labels::LabelRegistry;

/// Knobs for one documentation-build run.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Whether the comment passes descend into nested production scopes.
    pub recurse: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { recurse: true }
    }
}

/// A workspace manages the parsed files of one documentation build, with a
/// shared project tree and shared entity/library/label registries.
pub struct Workspace<T: Tokenize> {
    pub(super) tree: Tree,
    pub(super) tokenizer: T,
    pub(super) options: ParseOptions,
    pub(super) files: FxHashMap<PathBuf, NodeId>,
    /// Entities keyed by case-folded name, in discovery order.
    pub(super) entities: IndexMap<String, EntityInfo>,
    /// Libraries keyed by case-folded name; `work` is predeclared.
    pub(super) libraries: IndexMap<String, LibraryInfo>,
    pub(super) labels: LabelRegistry,
}

impl<T: Tokenize> Workspace<T> {
    /// Creates an empty workspace around the given tokenizer collaborator.
    pub fn new(tokenizer: T) -> Self {
        Self::with_options(tokenizer, ParseOptions::default())
    }

    pub fn with_options(tokenizer: T, options: ParseOptions) -> Self {
        let mut libraries = IndexMap::new();
        libraries.insert("work".to_string(), LibraryInfo::work());
        Self {
            tree: Tree::new(tags::PROJECT),
            tokenizer,
            options,
            files: FxHashMap::default(),
            entities: IndexMap::new(),
            libraries,
            labels: LabelRegistry::new(),
        }
    }

    /// Parses and analyzes one source file, returning its `file` node.
    ///
    /// The file content is read exactly once, handed to the tokenizer
    /// collaborator, built into a tree, transformed by the three comment
    /// passes, and analyzed into the registries. Parsing the same path
    /// again is not an error: the cached file node is returned and no
    /// registry entry is duplicated.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<NodeId, ParseError> {
        let path = path.as_ref();
        if let Some(&file) = self.files.get(path) {
            info!(path = %path.display(), "file already parsed; returning cached tree");
            return Ok(file);
        }
        let source = std::fs::read_to_string(path)?;
        self.parse_source(path, &source)
    }

    /// Same as [`Workspace::parse_file`] with the content supplied by the
    /// caller.
    pub fn parse_source(&mut self, path: impl AsRef<Path>, source: &str) -> Result<NodeId, ParseError> {
        let path = path.as_ref();
        if let Some(&file) = self.files.get(path) {
            info!(path = %path.display(), "file already parsed; returning cached tree");
            return Ok(file);
        }

        info!(path = %path.display(), "parsing file");
        let tokens = self.tokenizer.tokenize(path, source)?;
        let root = self.tree.root();
        let file = build_file_tree(&mut self.tree, root, path, &tokens)?;

        debug!(path = %path.display(), "grouping and attaching comments");
        let recurse = self.options.recurse;
        group_comments(&mut self.tree, file, recurse)?;
        attach_header_comments(&mut self.tree, file, recurse)?;
        attach_tail_comments(&mut self.tree, file, recurse)?;

        analyze_libraries(&self.tree, file, &mut self.labels, &mut self.libraries)?;
        let entities = analyze_entities(&self.tree, file, &mut self.labels)?;
        for entity in entities {
            self.entities.insert(entity.name.to_lowercase(), entity);
        }

        self.files.insert(path.to_owned(), file);
        Ok(file)
    }
}
