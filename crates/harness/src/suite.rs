use std::fmt;

use forecast_api::ApiConfig;
use serde::Serialize;

use crate::factory::WebApplicationFactory;
use crate::orchestration::run_orchestrated_smoke_test;
use crate::outcome::{HarnessError, TestOutcome};
use crate::remote::run_remote_smoke_test;
use crate::smoke::run_smoke_test_with;

/// Where the primary smoke test sends its request
#[derive(Debug, Clone)]
pub enum SmokeTarget {
    InProcess(ApiConfig),
    Remote(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Passed,
    Failed,
    Skipped,
    Errored,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportStatus::Passed => "PASSED",
            ReportStatus::Failed => "FAILED",
            ReportStatus::Skipped => "SKIPPED",
            ReportStatus::Errored => "ERRORED",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub name: String,
    pub status: ReportStatus,
    pub detail: Option<String>,
}

impl TestReport {
    pub fn from_result(name: &str, result: Result<TestOutcome, HarnessError>) -> Self {
        let (status, detail) = match result {
            Ok(TestOutcome::Passed) => (ReportStatus::Passed, None),
            Ok(TestOutcome::Failed(message)) => (ReportStatus::Failed, Some(message)),
            Ok(TestOutcome::Skipped(reason)) => (ReportStatus::Skipped, Some(reason)),
            Err(e) if e.is_failure() => (ReportStatus::Failed, Some(e.to_string())),
            Err(e) => (ReportStatus::Errored, Some(e.to_string())),
        };

        Self {
            name: name.to_string(),
            status,
            detail,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub tests: Vec<TestReport>,
}

impl SuiteReport {
    pub fn count(&self, status: ReportStatus) -> usize {
        self.tests.iter().filter(|t| t.status == status).count()
    }

    /// True when nothing failed or errored; skips do not count against the run
    pub fn is_success(&self) -> bool {
        self.count(ReportStatus::Failed) == 0 && self.count(ReportStatus::Errored) == 0
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for test in &self.tests {
            match &test.detail {
                Some(detail) => writeln!(f, "{:<8} {} ({})", test.status, test.name, detail)?,
                None => writeln!(f, "{:<8} {}", test.status, test.name)?,
            }
        }
        write!(
            f,
            "{} passed, {} failed, {} skipped, {} errored",
            self.count(ReportStatus::Passed),
            self.count(ReportStatus::Failed),
            self.count(ReportStatus::Skipped),
            self.count(ReportStatus::Errored),
        )
    }
}

/// The weather forecast smoke tests, run in order
pub struct SmokeSuite {
    target: SmokeTarget,
}

impl SmokeSuite {
    pub fn new(target: SmokeTarget) -> Self {
        Self { target }
    }

    pub async fn run(&self) -> SuiteReport {
        let mut report = SuiteReport::default();

        let primary = match &self.target {
            SmokeTarget::InProcess(config) => {
                let result = match WebApplicationFactory::with_config(config.clone()) {
                    Ok(factory) => run_smoke_test_with(&factory).await,
                    Err(e) => Err(e),
                };
                TestReport::from_result("get_weather_forecast_returns_ok_status_code", result)
            }
            SmokeTarget::Remote(base_url) => TestReport::from_result(
                "get_weather_forecast_returns_ok_status_code_remote",
                run_remote_smoke_test(base_url).await,
            ),
        };
        report.tests.push(primary);

        report.tests.push(TestReport::from_result(
            "get_weather_forecast_returns_ok_status_code_orchestrated",
            run_orchestrated_smoke_test().await,
        ));

        tracing::info!(
            passed = report.count(ReportStatus::Passed),
            failed = report.count(ReportStatus::Failed),
            skipped = report.count(ReportStatus::Skipped),
            errored = report.count(ReportStatus::Errored),
            "Smoke suite finished"
        );

        report
    }
}
