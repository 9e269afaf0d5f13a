use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Prefix of a file name marking a partial that is never a resource of its own.
pub const PRIVATE_PREFIX: char = '_';

const DOCUMENT_SEPARATOR: &str = "---";

/// One YAML document cut out of a rendered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    /// Key of the source the document came from, shared by all its siblings.
    pub path: &'a str,
    pub content: &'a str,
}

/// Split every rendered source into its documents.
///
/// Sources with blank content or a private file name are skipped, as are
/// blank or comment-only documents. Documents are yielded in key order, then
/// in the order they appear within their source.
pub fn split_documents(files: &BTreeMap<String, String>) -> Vec<Document<'_>> {
    let mut documents = Vec::new();
    for (path, content) in files {
        if content.trim().is_empty() {
            debug!("skipping {path}: empty content");
            continue;
        }
        if is_private(path) {
            debug!("skipping {path}: private partial");
            continue;
        }
        for chunk in split_content(content) {
            if is_blank_document(chunk) {
                trace!("skipping blank document in {path}");
                continue;
            }
            documents.push(Document {
                path,
                content: chunk,
            });
        }
    }
    documents
}

/// Whether the last segment of `path` starts with [`PRIVATE_PREFIX`].
/// Trailing slashes do not count as an empty last segment.
pub fn is_private(path: &str) -> bool {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .is_some_and(|base| base.starts_with(PRIVATE_PREFIX))
}

/// Cut `content` at every line that is exactly `---`. The newline ending the
/// line before a separator belongs to the separator.
fn split_content(content: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim_end() == DOCUMENT_SEPARATOR {
            chunks.push(strip_line_ending(&content[start..line_start]));
            start = offset;
        }
    }
    chunks.push(&content[start..]);
    chunks
}

fn strip_line_ending(chunk: &str) -> &str {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    chunk.strip_suffix('\r').unwrap_or(chunk)
}

fn is_blank_document(chunk: &str) -> bool {
    chunk
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
