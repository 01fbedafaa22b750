//! Library facade for the exan analyzer.
//!
//! Wraps the analysis pipeline into a serializable report: the detected
//! notation, the three rendered notations (each regenerated from the
//! built tree), and the tree diagram. On failure the report carries the
//! single error message and no result fields, so a caller can blank out
//! any previously shown output.

use exan_ast::render_diagram;
use serde::Serialize;

/// A serializable summary of one expression analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The normalized (whitespace-free) expression that was analyzed.
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infix: Option<String>,
    /// Text diagram of the expression tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,
    /// Error messages; empty on success, exactly one entry on failure.
    pub errors: Vec<String>,
}

/// Analyze a raw expression string and return the full report.
pub fn analyze_source(source: &str) -> AnalysisReport {
    let expression = exan_lexer::normalize(source);

    match exan_parser::analyze(source) {
        Ok(analysis) => AnalysisReport {
            expression,
            notation: Some(analysis.notation.to_string()),
            postfix: Some(analysis.root.to_postfix()),
            prefix: Some(analysis.root.to_prefix()),
            infix: Some(analysis.root.to_infix()),
            tree: Some(render_diagram(&analysis.root)),
            errors: Vec::new(),
        },
        Err(err) => AnalysisReport {
            expression,
            notation: None,
            postfix: None,
            prefix: None,
            infix: None,
            tree: None,
            errors: vec![err.to_string()],
        },
    }
}
