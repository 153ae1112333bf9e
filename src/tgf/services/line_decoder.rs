use super::tgf_splitter::SourceLine;
use crate::shared::error::TgfError;
use crate::shared::Result;
use crate::tgf::domain::Package;

/// Fewest `:`-separated coordinate fields a node line may carry
const MIN_COORDINATE_FIELDS: usize = 4;

/// Decodes a node line `<id> <coordinates> [...]` into a Package
///
/// Coordinates come in two shapes:
/// - 4 fields: `group:artifact:type:version`, the type is dropped and the
///   scope is empty
/// - 5 or more: `group:artifact[:...]:version:scope`, where the first two
///   and the last two fields are used and anything between is dropped
pub fn decode_node_line(line: &SourceLine) -> Result<Package> {
    let malformed = |details: String| TgfError::MalformedNodeLine {
        line_number: line.number,
        line: line.text.clone(),
        details,
    };

    let mut tokens = line.text.split_whitespace();
    let package_id = tokens
        .next()
        .ok_or_else(|| malformed("line is empty".to_string()))?;
    let coordinates = tokens
        .next()
        .ok_or_else(|| malformed("missing coordinate string after the package id".to_string()))?;

    let fields: Vec<&str> = coordinates.split(':').collect();
    match fields.as_slice() {
        [group_id, artifact_id, _packaging, version] => Ok(Package::new(
            package_id,
            *group_id,
            *artifact_id,
            *version,
            "",
        )),
        [group_id, artifact_id, .., version, scope] => Ok(Package::new(
            package_id,
            *group_id,
            *artifact_id,
            *version,
            *scope,
        )),
        _ => Err(malformed(format!(
            "expected at least {} ':'-separated fields, found {}",
            MIN_COORDINATE_FIELDS,
            fields.len()
        ))
        .into()),
    }
}

/// Decodes an edge line `<from> <to> [label...]` into its two endpoints
pub fn decode_edge_line(line: &SourceLine) -> Result<(String, String)> {
    let mut tokens = line.text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(from), Some(to)) => Ok((from.to_string(), to.to_string())),
        _ => Err(TgfError::MalformedEdgeLine {
            line_number: line.number,
            line: line.text.clone(),
        }
        .into()),
    }
}
