use crate::shared::error::TgfError;
use crate::shared::Result;

/// Line that separates the node section from the edge section
pub const SECTION_SEPARATOR: &str = "#";

/// A non-empty line of a TGF document with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// The two sections of a TGF document, blank lines removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TgfSections {
    pub node_lines: Vec<SourceLine>,
    pub edge_lines: Vec<SourceLine>,
}

/// Splits TGF text at the first line consisting solely of `#`
///
/// Any later `#`, on its own line or inside a coordinate string, is
/// ordinary content. Lines are trimmed and blank lines dropped; the
/// original line numbers are kept for error reporting.
pub fn split_sections(content: &str) -> Result<TgfSections> {
    let mut sections = TgfSections::default();
    let mut in_edges = false;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if !in_edges && line == SECTION_SEPARATOR {
            in_edges = true;
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let source_line = SourceLine::new(idx + 1, line);
        if in_edges {
            sections.edge_lines.push(source_line);
        } else {
            sections.node_lines.push(source_line);
        }
    }

    if !in_edges {
        return Err(TgfError::MissingSeparator.into());
    }

    Ok(sections)
}
