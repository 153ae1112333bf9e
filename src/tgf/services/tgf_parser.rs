use super::line_decoder::{decode_edge_line, decode_node_line};
use super::tgf_splitter::{split_sections, SourceLine};
use crate::ports::outbound::TgfReader;
use crate::shared::error::TgfError;
use crate::shared::Result;
use crate::tgf::domain::{DependencyNode, DependencyTree, Package, TgfDocument};
use std::path::Path;

/// Parses TGF text into an immutable document
///
/// Every node and edge line is decoded up front, so a malformed line
/// anywhere in the file fails the parse instead of a later query.
pub fn parse_document(content: &str) -> Result<TgfDocument> {
    let sections = split_sections(content)?;

    let packages = sections
        .node_lines
        .iter()
        .map(decode_node_line)
        .collect::<Result<Vec<_>>>()?;
    let edges = sections
        .edge_lines
        .iter()
        .map(decode_edge_line)
        .collect::<Result<Vec<_>>>()?;

    let document = TgfDocument::new(
        into_texts(sections.node_lines),
        into_texts(sections.edge_lines),
        packages,
        edges,
    )?;

    tracing::debug!(
        packages = document.package_count(),
        edges = document.edge_count(),
        root = %document.root_package(),
        "parsed TGF document"
    );

    Ok(document)
}

fn into_texts(lines: Vec<SourceLine>) -> Vec<String> {
    lines.into_iter().map(|line| line.text).collect()
}

/// TgfParser - query engine over one TGF file at a time
///
/// Starts unparsed; `parse` installs a document and every query then
/// answers from it. A failed parse leaves the previous document in place.
///
/// # Type Parameters
/// * `R` - TgfReader implementation used to obtain the file content
pub struct TgfParser<R> {
    reader: R,
    max_depth: Option<usize>,
    document: Option<TgfDocument>,
}

impl<R: TgfReader> TgfParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            max_depth: None,
            document: None,
        }
    }

    /// Caps the depth of `dependency_tree` traversals for documents parsed afterwards
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Reads and parses the TGF file at `path`, replacing any earlier document
    pub fn parse(&mut self, path: &Path) -> Result<()> {
        let content = self.reader.read_tgf(path)?;
        let mut document = parse_document(&content)?;
        if let Some(max_depth) = self.max_depth {
            document = document.with_max_depth(max_depth);
        }
        self.document = Some(document);
        Ok(())
    }

    pub fn is_parsed(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Result<&TgfDocument> {
        self.document
            .as_ref()
            .ok_or_else(|| TgfError::NotParsed.into())
    }

    pub fn root_package(&self) -> Result<&Package> {
        Ok(self.document()?.root_package())
    }

    pub fn list_packages(&self) -> Result<Vec<Package>> {
        Ok(self.document()?.list_packages().to_vec())
    }

    pub fn get_package_by_id(&self, package_id: &str) -> Result<Package> {
        self.document()?.get_package_by_id(package_id).cloned()
    }

    pub fn get_direct_dependency_ids(&self, package_id: &str) -> Result<Vec<String>> {
        Ok(self
            .document()?
            .get_direct_dependency_ids(package_id)
            .to_vec())
    }

    pub fn get_dependencies_by_package_id(&self, package_id: &str) -> Result<Vec<Package>> {
        Ok(self
            .document()?
            .get_dependencies_by_package_id(package_id)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn get_dependencies(&self, package_id: &str) -> Result<DependencyTree> {
        Ok(self.document()?.get_dependencies(package_id))
    }

    pub fn dependency_tree(&self, package_id: &str) -> Result<DependencyTree> {
        Ok(self.document()?.dependency_tree(package_id))
    }

    pub fn dependency_nodes(&self, package_id: &str) -> Result<Vec<DependencyNode>> {
        Ok(self.document()?.dependency_nodes(package_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    const SIMPLE: &str = "1 a:b:jar:1.0\n2 c:d:jar:2.0\n#\n1 2\n";

    /// In-memory reader keyed by path
    #[derive(Default)]
    struct MemoryReader {
        files: RefCell<HashMap<PathBuf, String>>,
    }

    impl MemoryReader {
        fn with_file(path: &str, content: &str) -> Self {
            let reader = Self::default();
            reader.put(path, content);
            reader
        }

        fn put(&self, path: &str, content: &str) {
            self.files
                .borrow_mut()
                .insert(PathBuf::from(path), content.to_string());
        }
    }

    impl TgfReader for MemoryReader {
        fn read_tgf(&self, path: &Path) -> Result<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no such file: {}", path.display()))
        }
    }

    fn parsed(content: &str) -> TgfParser<MemoryReader> {
        let mut parser = TgfParser::new(MemoryReader::with_file("deps.tgf", content));
        parser.parse(Path::new("deps.tgf")).unwrap();
        parser
    }

    #[test]
    fn test_end_to_end_scenario() {
        let parser = parsed(SIMPLE);

        assert_eq!(
            parser.list_packages().unwrap(),
            vec![
                Package::new("1", "a", "b", "1.0", ""),
                Package::new("2", "c", "d", "2.0", ""),
            ]
        );

        let deps = parser.get_dependencies_by_package_id("1").unwrap();
        assert_eq!(deps, vec![Package::new("2", "c", "d", "2.0", "")]);
        assert_eq!(deps[0].package_id(), "2");

        let tree = parser.dependency_tree("1").unwrap();
        assert_eq!(serde_json::to_string(&tree).unwrap(), r#"{"c:d:2.0":{}}"#);
    }

    #[test]
    fn test_root_package() {
        let parser = parsed(SIMPLE);
        let root = parser.root_package().unwrap();
        assert_eq!(root.package_id(), "1");
        assert_eq!(root.to_string(), "a:b:1.0");
    }

    #[test]
    fn test_get_package_by_id_returns_matching_id() {
        let parser = parsed(SIMPLE);
        for id in ["1", "2"] {
            assert_eq!(parser.get_package_by_id(id).unwrap().package_id(), id);
        }
    }

    #[test]
    fn test_get_package_by_id_not_found() {
        let parser = parsed(SIMPLE);
        let err = parser.get_package_by_id("3").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TgfError>(),
            Some(TgfError::PackageNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_id_is_empty_not_error() {
        let parser = parsed(SIMPLE);
        assert!(parser.get_direct_dependency_ids("x").unwrap().is_empty());
        assert!(parser.dependency_tree("x").unwrap().is_empty());
    }

    #[test]
    fn test_tree_obeys_structural_recursion() {
        let parser = parsed(
            "1 g:root:jar:1\n2 g:a:jar:1\n3 g:b:jar:1\n4 g:c:jar:1:test\n#\n1 2\n1 3\n2 4\n3 4\n",
        );
        let tree = parser.dependency_tree("1").unwrap();
        let deps = parser.get_dependencies_by_package_id("1").unwrap();

        let expected_keys: Vec<String> = deps.iter().map(|d| d.coordinates()).collect();
        assert_eq!(tree.keys().collect::<Vec<_>>(), expected_keys);
        for dep in &deps {
            assert_eq!(
                tree.get(&dep.coordinates()).unwrap(),
                &parser.dependency_tree(dep.package_id()).unwrap()
            );
        }
    }

    #[test]
    fn test_every_edge_is_reflected_in_queries() {
        let parser = parsed("1 g:a:jar:1\n2 g:b:jar:1\n#\n1 2 compile\n1 7\n");
        let ids = parser.get_direct_dependency_ids("1").unwrap();
        assert_eq!(ids, vec!["2".to_string(), "7".to_string()]);

        let deps = parser.get_dependencies_by_package_id("1").unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].package_id(), "2");
    }

    #[test]
    fn test_get_dependencies_is_stub_tree() {
        let parser = parsed("1 g:a:jar:1\n2 g:b:jar:1\n3 g:c:jar:1\n#\n1 2\n2 3\n");
        let tree = parser.get_dependencies("1").unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.get("g:b:1").unwrap().is_empty());
    }

    #[test]
    fn test_queries_before_parse_fail() {
        let parser = TgfParser::new(MemoryReader::default());
        assert!(!parser.is_parsed());
        let err = parser.list_packages().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TgfError>(),
            Some(TgfError::NotParsed)
        ));
    }

    #[test]
    fn test_empty_node_section_fails_parse() {
        let mut parser = TgfParser::new(MemoryReader::with_file("empty.tgf", "#\n1 2\n"));
        let err = parser.parse(Path::new("empty.tgf")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TgfError>(),
            Some(TgfError::EmptyNodeSection)
        ));
        assert!(!parser.is_parsed());
    }

    #[test]
    fn test_failed_reparse_keeps_previous_document() {
        let reader = MemoryReader::with_file("good.tgf", SIMPLE);
        reader.put("bad.tgf", "1 a:b\n#\n");
        let mut parser = TgfParser::new(reader);
        parser.parse(Path::new("good.tgf")).unwrap();

        assert!(parser.parse(Path::new("bad.tgf")).is_err());
        assert_eq!(parser.list_packages().unwrap().len(), 2);
    }

    #[test]
    fn test_reparse_replaces_document() {
        let reader = MemoryReader::with_file("one.tgf", SIMPLE);
        reader.put("two.tgf", "9 x:y:jar:3.0\n#\n");
        let mut parser = TgfParser::new(reader);
        parser.parse(Path::new("one.tgf")).unwrap();
        parser.parse(Path::new("two.tgf")).unwrap();

        assert_eq!(parser.root_package().unwrap().package_id(), "9");
        assert_eq!(parser.list_packages().unwrap().len(), 1);
    }

    #[test]
    fn test_read_failure_is_propagated() {
        let mut parser = TgfParser::new(MemoryReader::default());
        let err = parser.parse(Path::new("missing.tgf")).unwrap_err();
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_max_depth_is_applied_to_parsed_documents() {
        let reader = MemoryReader::with_file("deps.tgf", "1 g:a:jar:1\n2 g:b:jar:1\n3 g:c:jar:1\n#\n1 2\n2 3\n");
        let mut parser = TgfParser::new(reader).with_max_depth(1);
        parser.parse(Path::new("deps.tgf")).unwrap();

        assert_eq!(parser.document().unwrap().max_depth(), Some(1));
        assert!(parser.dependency_tree("1").unwrap().get("g:b:1").unwrap().is_empty());
    }

    #[test]
    fn test_parse_document_reports_malformed_line_number() {
        let err = parse_document("1 g:a:jar:1\n2 broken\n#\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TgfError>(),
            Some(TgfError::MalformedNodeLine { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_parse_document_keeps_raw_lines() {
        let document = parse_document(SIMPLE).unwrap();
        assert_eq!(document.node_lines(), ["1 a:b:jar:1.0", "2 c:d:jar:2.0"]);
        assert_eq!(document.edge_lines(), ["1 2"]);
    }
}
