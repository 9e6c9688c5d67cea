pub mod cli;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod reporter;
pub mod rules;
pub mod scanner;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use discovery::{DirectoryWalker, WalkConfig};
pub use engine::{default_engines, Engine, PatternEngine, SyntaxEngine};
pub use error::{Result, ScanError};
pub use reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
pub use rules::{Finding, Location, Rule, ScanResult, Severity, Summary};
pub use scanner::Scanner;
