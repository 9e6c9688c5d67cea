use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Canonical token used in reports ("HIGH", "MEDIUM", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A static line-pattern rule. The rule table is built once at engine
/// construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: regex::Regex,
    pub severity: Severity,
    pub description: &'static str,
    pub remediation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    /// 1-based physical line number.
    pub line: usize,
    /// 0-based column offset of the match start.
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub location: Location,
    pub remediation: String,
}

impl Finding {
    pub fn new(rule: &Rule, location: Location) -> Self {
        Self {
            id: rule.id.to_string(),
            name: rule.name.to_string(),
            description: rule.description.to_string(),
            severity: rule.severity,
            location,
            remediation: rule.remediation.to_string(),
        }
    }

    /// Flat export shape used by machine-readable reports.
    pub fn record(&self) -> FindingRecord {
        FindingRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            severity: self.severity,
            file: self.location.file.clone(),
            line: self.location.line,
            snippet: self.location.snippet.clone(),
        }
    }
}

/// Lossless six-field representation of a finding. A missing snippet is
/// exported as an explicit null, not dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub file: String,
    pub line: usize,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_issues: usize,
    pub high_severity: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        Self {
            total_issues: findings.len(),
            high_severity: findings
                .iter()
                .filter(|f| f.severity == Severity::High)
                .count(),
        }
    }

    pub fn passed(&self) -> bool {
        self.high_severity == 0
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub target: String,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

impl ScanResult {
    pub fn new(
        target: String,
        findings: Vec<Finding>,
        files_scanned: usize,
        files_skipped: usize,
    ) -> Self {
        Self {
            target,
            summary: Summary::from_findings(&findings),
            findings,
            files_scanned,
            files_skipped,
        }
    }
}
