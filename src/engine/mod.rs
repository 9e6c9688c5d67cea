//! Finding engines.
//!
//! Each engine turns one file's decoded content into findings. Engines hold
//! no per-scan state beyond their read-only rule tables, so a single
//! instance may analyze many files concurrently.

pub mod pattern;
pub mod syntax;

pub use pattern::PatternEngine;
pub use syntax::SyntaxEngine;

use crate::error::Result;
use crate::rules::Finding;

pub trait Engine: Send + Sync {
    /// Engine name used in warnings and logs.
    fn name(&self) -> &'static str;

    /// Analyze one file. `file_path` attributes findings; content is never
    /// read from disk here. Findings come back in the engine's documented
    /// order for that file.
    fn scan(&self, file_path: &str, content: &str) -> Result<Vec<Finding>>;
}

/// All engines, in the order their findings are concatenated per file.
pub fn default_engines() -> Vec<Box<dyn Engine>> {
    vec![Box::new(PatternEngine::new()), Box::new(SyntaxEngine::new())]
}
