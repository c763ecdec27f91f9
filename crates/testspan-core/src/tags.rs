//! Span tag names and test status values

use std::fmt;

pub const SPAN_TYPE: &str = "span.type";
pub const ERROR_MSG: &str = "error.msg";
pub const ENV: &str = "env";
pub const VERSION: &str = "version";

pub const FRAMEWORK: &str = "test.framework";
pub const NAME: &str = "test.name";
pub const SUITE: &str = "test.suite";
pub const TYPE: &str = "test.type";
pub const PARAMETERS: &str = "test.parameters";
pub const STATUS: &str = "test.status";
pub const SKIP_REASON: &str = "test.skip_reason";
pub const RESULT: &str = "test.result";
pub const XFAIL_REASON: &str = "test.xfail_reason";

pub const GIT_REPOSITORY_URL: &str = "git.repository_url";
pub const GIT_BRANCH: &str = "git.branch";
pub const GIT_COMMIT_SHA: &str = "git.commit.sha";

/// Value of the `test.type` tag and of the span type
pub const TEST_TYPE: &str = "test";

/// Outcome recorded under [`STATUS`] and [`RESULT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    /// Expected failure that failed
    Xfail,
    /// Expected failure that passed
    Xpass,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Skip => "skip",
            TestStatus::Xfail => "xfail",
            TestStatus::Xpass => "xpass",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
