use crate::reporter::Reporter;
use crate::rules::{FindingRecord, ScanResult, Summary};
use serde::Serialize;

/// Machine-readable report: a `scan_summary` header followed by one flat
/// record per finding under `vulnerabilities`.
#[derive(Serialize)]
struct JsonReport<'a> {
    scan_summary: &'a Summary,
    vulnerabilities: Vec<FindingRecord>,
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ScanResult) -> String {
        let report = JsonReport {
            scan_summary: &result.summary,
            vulnerabilities: result.findings.iter().map(|f| f.record()).collect(),
        };
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}
