//! Translating phase reports into status tags

use crate::item::{Outcome, Phase, PhaseReport, XfailMarker};
use crate::tags::{self, TestStatus};
use crate::tracer::Span;

/// Tags decided by one phase report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: TestStatus,
    /// `xfail`/`xpass` for tests carrying an expected-failure marker
    pub result: Option<TestStatus>,
    pub xfail_reason: Option<String>,
    pub skip_reason: Option<String>,
    pub error: Option<String>,
}

impl Verdict {
    fn new(status: TestStatus) -> Self {
        Self {
            status,
            result: None,
            xfail_reason: None,
            skip_reason: None,
            error: None,
        }
    }

    pub fn apply<S: Span + ?Sized>(&self, span: &mut S) {
        span.set_tag(tags::STATUS, self.status.as_str());
        if let Some(result) = self.result {
            span.set_tag(tags::RESULT, result.as_str());
        }
        if let Some(reason) = &self.xfail_reason {
            span.set_tag(tags::XFAIL_REASON, reason);
        }
        if let Some(reason) = &self.skip_reason {
            span.set_tag(tags::SKIP_REASON, reason);
        }
        if let Some(error) = &self.error {
            span.set_tag(tags::ERROR_MSG, error);
        }
    }
}

/// Classify a single report.
///
/// The runner records an expected failure that failed as skipped, and a
/// strict expected failure that passed as failed with the reason in its long
/// representation.
pub fn classify(report: &PhaseReport, xfail: Option<&XfailMarker>) -> Verdict {
    let mut verdict = match report.outcome {
        Outcome::Skipped if report.was_xfail.is_some() => Verdict::new(TestStatus::Pass),
        Outcome::Skipped => Verdict {
            skip_reason: report.skip_reason.clone(),
            ..Verdict::new(TestStatus::Skip)
        },
        Outcome::Passed => Verdict::new(TestStatus::Pass),
        Outcome::Failed => Verdict {
            error: report.longrepr.clone(),
            ..Verdict::new(TestStatus::Fail)
        },
    };

    if report.was_xfail.is_some() || xfail.is_some() {
        let (result, reason) = match report.outcome {
            Outcome::Skipped => (TestStatus::Xfail, report.was_xfail.clone()),
            Outcome::Passed => (TestStatus::Xpass, report.was_xfail.clone()),
            Outcome::Failed => (TestStatus::Xpass, report.longrepr.clone()),
        };
        verdict.result = Some(result);
        verdict.xfail_reason = reason;
    }

    verdict
}

/// Apply the reports of one test to its span.
///
/// A non-passing setup decides the outcome; otherwise the call phase does,
/// unless a status is already present. Teardown never changes the status.
pub fn record_outcome<S: Span + ?Sized>(
    span: &mut S,
    reports: &[PhaseReport],
    xfail: Option<&XfailMarker>,
) {
    for report in reports {
        let decides = match report.phase {
            Phase::Setup => report.outcome != Outcome::Passed,
            Phase::Call => span.get_tag(tags::STATUS).is_none(),
            Phase::Teardown => false,
        };
        if decides {
            let verdict = classify(report, xfail);
            tracing::trace!(phase = ?report.phase, status = %verdict.status, "Recording test outcome");
            verdict.apply(&mut *span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_xpass_takes_reason_from_longrepr() {
        let marker = XfailMarker {
            reason: "test should fail".into(),
            strict: true,
        };
        let report = PhaseReport::failed(Phase::Call, "[XPASS(strict)] test should fail");

        let verdict = classify(&report, Some(&marker));
        assert_eq!(verdict.status, TestStatus::Fail);
        assert_eq!(verdict.result, Some(TestStatus::Xpass));
        assert_eq!(
            verdict.xfail_reason.as_deref(),
            Some("[XPASS(strict)] test should fail")
        );
    }
}
