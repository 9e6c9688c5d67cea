use crate::reporter::Reporter;
use crate::rules::{Finding, ScanResult, Severity};
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn severity_label(&self, severity: Severity) -> colored::ColoredString {
        let label = format!("[{}]", severity);
        match severity {
            Severity::High => label.red().bold(),
            Severity::Medium => label.yellow(),
            Severity::Low => label.cyan(),
            Severity::Info => label.normal(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}: {}\n",
            self.severity_label(finding.severity),
            finding.id,
            finding.name
        ));
        output.push_str(&format!(
            "  Location: {}:{}:{}\n",
            finding.location.file, finding.location.line, finding.location.column
        ));
        if let Some(ref snippet) = finding.location.snippet {
            output.push_str(&format!("  Code: {}\n", snippet.dimmed()));
        }
        if self.verbose {
            output.push_str(&format!("  Detail: {}\n", finding.description));
        }
        output.push_str(&format!("  Fix: {}\n", finding.remediation.green()));

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!(
                "vulnscan v{} - Static Security Scanner",
                env!("CARGO_PKG_VERSION")
            )
            .bold()
        ));
        output.push_str(&format!("Scanning: {}\n\n", result.target));

        if result.findings.is_empty() {
            output.push_str(&"No security issues found.\n".green().to_string());
        } else {
            for finding in &result.findings {
                output.push_str(&self.format_finding(finding));
                output.push('\n');
            }
        }

        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Summary: {} issue(s) found, {} high severity\n",
            result.summary.total_issues,
            result.summary.high_severity.to_string().red().bold()
        ));
        output.push_str(&format!(
            "Files scanned: {} ({} skipped)\n",
            result.files_scanned, result.files_skipped
        ));

        let passed = result.summary.passed();
        let result_text = if passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        output.push_str(&format!(
            "Result: {} (exit code {})\n",
            result_text,
            if passed { 0 } else { 1 }
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{create_finding, create_test_result, high_aws_key_finding};

    #[test]
    fn test_report_no_findings() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(vec![]);
        let output = reporter.report(&result);

        assert!(output.contains("No security issues found"));
        assert!(output.contains("PASS"));
        assert!(output.contains("exit code 0"));
    }

    #[test]
    fn test_report_with_high_finding() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(vec![high_aws_key_finding()]);
        let output = reporter.report(&result);

        assert!(output.contains("SAST001"));
        assert!(output.contains("HIGH"));
        assert!(output.contains("AWS Access Key Hardcoded"));
        assert!(output.contains("FAIL"));
        assert!(output.contains("exit code 1"));
    }

    #[test]
    fn test_report_medium_only_passes() {
        let reporter = TerminalReporter::new(false);
        let finding = create_finding(
            "SAST002",
            Severity::Medium,
            "Generic Hardcoded Password",
            "cfg.py",
            7,
        );
        let result = create_test_result(vec![finding]);
        let output = reporter.report(&result);

        assert!(output.contains("SAST002"));
        assert!(output.contains("MEDIUM"));
        assert!(output.contains("PASS"));
        assert!(output.contains("exit code 0"));
    }

    #[test]
    fn test_report_shows_location_and_snippet() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(vec![high_aws_key_finding()]);
        let output = reporter.report(&result);

        assert!(output.contains("Location: src/config.py:3:0"));
        assert!(output.contains("Code:"));
        assert!(output.contains("test snippet"));
        assert!(output.contains("Fix:"));
    }

    #[test]
    fn test_report_verbose_shows_detail() {
        let reporter = TerminalReporter::new(true);
        let result = create_test_result(vec![high_aws_key_finding()]);
        let output = reporter.report(&result);

        assert!(output.contains("Detail:"));
        assert!(output.contains("test description"));
    }

    #[test]
    fn test_report_non_verbose_hides_detail() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(vec![high_aws_key_finding()]);
        let output = reporter.report(&result);

        assert!(!output.contains("Detail:"));
    }

    #[test]
    fn test_report_summary_counts() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(vec![
            high_aws_key_finding(),
            create_finding(
                "SAST002",
                Severity::Medium,
                "Generic Hardcoded Password",
                "cfg.py",
                7,
            ),
        ]);
        let output = reporter.report(&result);

        assert!(output.contains("Summary: 2 issue(s) found"));
        assert!(output.contains("Files scanned: 2 (0 skipped)"));
    }

    #[test]
    fn test_report_header_names_target() {
        let reporter = TerminalReporter::new(false);
        let result = create_test_result(vec![]);
        let output = reporter.report(&result);

        assert!(output.contains("vulnscan v"));
        assert!(output.contains("Scanning: ./fixtures/"));
    }
}
