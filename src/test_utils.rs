#[cfg(test)]
pub mod fixtures {
    use crate::rules::{Finding, Location, ScanResult, Severity};

    pub fn create_test_result(findings: Vec<Finding>) -> ScanResult {
        let files_scanned = findings.len().max(1);
        ScanResult::new("./fixtures/".to_string(), findings, files_scanned, 0)
    }

    pub fn create_finding(
        id: &str,
        severity: Severity,
        name: &str,
        file: &str,
        line: usize,
    ) -> Finding {
        Finding {
            id: id.to_string(),
            name: name.to_string(),
            description: "test description".to_string(),
            severity,
            location: Location {
                file: file.to_string(),
                line,
                column: 0,
                snippet: Some("test snippet".to_string()),
            },
            remediation: "test remediation".to_string(),
        }
    }

    pub fn high_aws_key_finding() -> Finding {
        create_finding(
            "SAST001",
            Severity::High,
            "AWS Access Key Hardcoded",
            "src/config.py",
            3,
        )
    }
}
