//! Table-of-contents reconstruction.
//!
//! A flat markdown document lists every section heading; a directory of page
//! cache files holds one section each, with the section heading as its first
//! line. The tree is rebuilt by matching the raw heading lines of the document
//! against those first lines and nesting by heading level.

mod pages;

use std::collections::HashMap;

use tracing::warn;

use crate::models::{Heading, TocEntry};

pub use pages::{read_first_line, read_page_first_lines};

/// Maps a raw heading line (with its `#` markers) to a page file name.
pub type TitleFileMap = HashMap<String, String>;

/// Collects every line that starts with two or more `#`, in document order.
/// A single `#` is the document title and is skipped.
#[must_use]
pub fn extract_headings(document: &str) -> Vec<Heading> {
    document
        .lines()
        .filter_map(|line| {
            let level = line.bytes().take_while(|byte| *byte == b'#').count();
            (level >= 2).then(|| Heading::new(line, level))
        })
        .collect()
}

/// Builds the heading-to-file table from `(file_name, first_line)` pairs.
///
/// When two files share a first line the later pair wins. Callers that need a
/// reproducible winner must pass pairs in a stable order.
#[must_use]
pub fn title_file_mapping<I, F, L>(pages: I) -> TitleFileMap
where
    I: IntoIterator<Item = (F, L)>,
    F: Into<String>,
    L: Into<String>,
{
    let mut mapping = TitleFileMap::new();
    for (file_name, first_line) in pages {
        let file_name = file_name.into();
        let first_line = first_line.into();
        if let Some(previous) = mapping.insert(first_line.clone(), file_name.clone()) {
            warn!(
                heading = %first_line,
                replaced = %previous,
                kept = %file_name,
                "duplicate page heading, later file wins"
            );
        }
    }
    mapping
}

struct TocNode {
    title: String,
    level: usize,
    file: Option<String>,
    children: Vec<usize>,
}

/// Nests `headings` by level.
///
/// Unless `include_all` is set, headings without a mapped file are skipped
/// entirely: they create no node and leave the open ancestor chain unchanged.
/// A node's children always have a strictly greater level than the node.
#[must_use]
pub fn build_toc(headings: &[Heading], mapping: &TitleFileMap, include_all: bool) -> Vec<TocEntry> {
    let mut nodes = Vec::<TocNode>::new();
    let mut roots = Vec::<usize>::new();
    // open ancestor chain as (level, node index)
    let mut stack = Vec::<(usize, usize)>::new();

    for heading in headings {
        let file = mapping.get(&heading.raw).cloned();
        if file.is_none() && !include_all {
            continue;
        }

        let idx = nodes.len();
        nodes.push(TocNode {
            title: heading.title().to_string(),
            level: heading.level,
            file,
            children: Vec::new(),
        });

        while stack.last().is_some_and(|(level, _)| *level >= heading.level) {
            stack.pop();
        }
        match stack.last() {
            Some(&(_, parent)) => nodes[parent].children.push(idx),
            None => roots.push(idx),
        }
        stack.push((heading.level, idx));
    }

    materialize(nodes, &roots)
}

// Children are always created after their parent, so building from the last
// node backwards sees every child before its parent.
fn materialize(nodes: Vec<TocNode>, roots: &[usize]) -> Vec<TocEntry> {
    let mut built = (0..nodes.len()).map(|_| None).collect::<Vec<Option<TocEntry>>>();
    for (idx, node) in nodes.into_iter().enumerate().rev() {
        let children = node
            .children
            .iter()
            .filter_map(|child| built[*child].take())
            .collect();
        built[idx] = Some(TocEntry {
            title: node.title,
            level: node.level,
            file: node.file,
            children,
        });
    }
    roots.iter().filter_map(|idx| built[*idx].take()).collect()
}

/// Extracts headings from `document` and builds the tree in one call.
#[must_use]
pub fn build_toc_from_document(
    document: &str,
    mapping: &TitleFileMap,
    include_all: bool,
) -> Vec<TocEntry> {
    build_toc(&extract_headings(document), mapping, include_all)
}
