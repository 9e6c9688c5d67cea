use crate::engine::Engine;
use crate::error::{Result, ScanError};
use crate::rules::builtin::DANGEROUS_FUNCTIONS;
use crate::rules::types::{Finding, Location, Severity};
use std::path::Path;
use tracing::debug;
use tree_sitter::Node;

/// AST-level detector for dangerous dynamic-execution calls in Python.
///
/// A line pattern cannot tell `eval(x)` apart from the word "eval" inside a
/// comment or string; parsing the file settles it. Only bare-name calls are
/// flagged. `obj.eval()` is a method on an unrelated object and stays out of
/// scope, as do names re-bound from the dangerous ones (`e = eval; e(x)`).
/// That trades recall for precision and is a documented limitation.
pub struct SyntaxEngine;

impl SyntaxEngine {
    pub fn new() -> Self {
        Self
    }

    fn is_python(file_path: &str) -> bool {
        Path::new(file_path)
            .extension()
            .is_some_and(|ext| ext == "py")
    }

    /// A fresh `tree_sitter::Parser` per call: the underlying C object is
    /// `!Send`, and constructing one is a single allocation, so this keeps
    /// the engine freely shareable across scan threads.
    fn parse(file_path: &str, content: &str) -> Result<Option<tree_sitter::Tree>> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ScanError::ParseError {
                path: file_path.to_string(),
                message: format!("language version mismatch: {e}"),
            })?;

        Ok(parser.parse(content, None))
    }
}

impl Default for SyntaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SyntaxEngine {
    fn name(&self) -> &'static str {
        "syntax"
    }

    fn scan(&self, file_path: &str, content: &str) -> Result<Vec<Finding>> {
        if !Self::is_python(file_path) {
            return Ok(Vec::new());
        }

        let Some(tree) = Self::parse(file_path, content)? else {
            return Ok(Vec::new());
        };

        // Source that does not parse is a silent skip, not a failure:
        // malformed files are outside this engine's analyzable domain.
        let root = tree.root_node();
        if root.has_error() {
            debug!(file = file_path, "Skipping file with syntax errors");
            return Ok(Vec::new());
        }

        let mut visitor = CallVisitor {
            file: file_path,
            source: content.as_bytes(),
            lines: content.lines().collect(),
            findings: Vec::new(),
        };
        visitor.visit(root);

        Ok(visitor.findings)
    }
}

/// Pre-order walk over the syntax tree, collecting a finding per dangerous
/// call expression. Visiting parents before children keeps `eval(exec(x))`
/// reported outer-first.
struct CallVisitor<'a> {
    file: &'a str,
    source: &'a [u8],
    lines: Vec<&'a str>,
    findings: Vec<Finding>,
}

impl CallVisitor<'_> {
    fn visit(&mut self, node: Node) {
        if node.kind() == "call" {
            self.check_call(node);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child);
        }
    }

    fn check_call(&mut self, call: Node) {
        let Some(callee) = call.child_by_field_name("function") else {
            return;
        };
        // Attribute callees (`obj.eval`) are not bare names.
        if callee.kind() != "identifier" {
            return;
        }

        let name = callee.utf8_text(self.source).unwrap_or("");
        if !DANGEROUS_FUNCTIONS.contains(&name) {
            return;
        }

        let position = call.start_position();
        self.findings.push(Finding {
            id: "SAST003".to_string(),
            name: format!("Dangerous Function Call ({name})"),
            description: format!("Use of '{name}' allows arbitrary code execution."),
            severity: Severity::High,
            location: Location {
                file: self.file.to_string(),
                line: position.row + 1,
                column: position.column,
                snippet: self.snippet(position.row),
            },
            remediation: "Avoid executing dynamic code. Use ast.literal_eval to parse data structures safely.".to_string(),
        });
    }

    fn snippet(&self, row: usize) -> Option<String> {
        self.lines.get(row).map(|line| line.trim().to_string())
    }
}
