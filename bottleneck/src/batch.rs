/// Batch checking: run solvers over many fixtures and compare against expected answers.
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use crate::dimacs::Fixture;
use crate::solve::{self, Bottleneck, Outcome, SolveOptions};

/// How a fixture's answers compare to each other and to the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    Pass,
    /// Solvers agree but the fixture records no expected answer.
    Unchecked,
    /// Solvers agree with each other but not with the expected answer.
    Mismatch,
    /// The solvers returned different answers.
    Disagreement,
    /// The query does not fit this fixture's graph.
    Invalid,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass | Verdict::Unchecked)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Unchecked => "OK",
            Verdict::Mismatch => "MISMATCH",
            Verdict::Disagreement => "DISAGREE",
            Verdict::Invalid => "INVALID",
        }
    }
}

/// Result of checking a single fixture.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixtureReport {
    pub name: String,
    pub vertices: usize,
    pub edges: usize,
    pub expected: Option<Bottleneck<i64>>,
    pub outcome: Outcome<i64>,
    pub verdict: Verdict,
    /// Why the fixture could not be solved, for `Verdict::Invalid`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
    pub solve_time_us: u64,
}

/// Report across all fixtures.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchReport {
    pub fixtures: Vec<FixtureReport>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn from_fixtures(fixtures: Vec<FixtureReport>) -> Self {
        let total = fixtures.len();
        let passed = fixtures.iter().filter(|f| f.verdict.passed()).count();
        let failed = total - passed;
        Self {
            fixtures,
            total,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Judge an outcome against an optional expected answer.
pub fn verdict(outcome: &Outcome<i64>, expected: Option<Bottleneck<i64>>) -> Verdict {
    let Some(answer) = outcome.answer() else {
        return Verdict::Disagreement;
    };
    match expected {
        Some(e) if e == answer => Verdict::Pass,
        Some(_) => Verdict::Mismatch,
        None => Verdict::Unchecked,
    }
}

/// Solve one fixture and judge the result.
///
/// A query that does not fit the fixture's graph yields `Verdict::Invalid`
/// rather than an error, so one bad fixture never hides the others.
pub fn check_fixture(fixture: &Fixture, options: &SolveOptions) -> FixtureReport {
    let start = Instant::now();
    let solved = solve::solve(&fixture.graph, options);
    let elapsed = start.elapsed();

    let (outcome, verdict, error) = match solved {
        Ok(outcome) => (outcome, verdict(&outcome, fixture.expected), None),
        Err(e) => (
            Outcome {
                binary_search: None,
                forest: None,
            },
            Verdict::Invalid,
            Some(e.to_string()),
        ),
    };
    if !verdict.passed() {
        warn!(
            fixture = %fixture.name,
            verdict = verdict.name(),
            expected = ?fixture.expected,
            ?outcome,
            error = error.as_deref().unwrap_or(""),
            "fixture failed"
        );
    }

    FixtureReport {
        name: fixture.name.clone(),
        vertices: fixture.graph.vertex_count(),
        edges: fixture.graph.edge_count(),
        expected: fixture.expected,
        outcome,
        verdict,
        error,
        solve_time_us: elapsed.as_micros() as u64,
    }
}

/// Check every fixture. Fixtures are independent, so with the `parallel`
/// feature they are solved across the rayon pool.
pub fn check(fixtures: &[Fixture], options: &SolveOptions) -> BatchReport {
    let check_one = |f: &Fixture| check_fixture(f, options);

    #[cfg(feature = "parallel")]
    let reports: Vec<FixtureReport> = fixtures.par_iter().map(check_one).collect();

    #[cfg(not(feature = "parallel"))]
    let reports: Vec<FixtureReport> = fixtures.iter().map(check_one).collect();

    let report = BatchReport::from_fixtures(reports);
    debug!(
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "batch check finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimacs::parse_fixture;

    fn fixture(name: &str, text: &str) -> Fixture {
        parse_fixture(name, text).unwrap()
    }

    #[test]
    fn verdicts() {
        let agree = Outcome {
            binary_search: Some(Bottleneck::Value(2)),
            forest: Some(Bottleneck::Value(2)),
        };
        assert_eq!(verdict(&agree, Some(Bottleneck::Value(2))), Verdict::Pass);
        assert_eq!(verdict(&agree, Some(Bottleneck::Value(3))), Verdict::Mismatch);
        assert_eq!(verdict(&agree, None), Verdict::Unchecked);

        let split = Outcome {
            binary_search: Some(Bottleneck::Value(2)),
            forest: Some(Bottleneck::Unreachable),
        };
        assert_eq!(
            verdict(&split, Some(Bottleneck::Value(2))),
            Verdict::Disagreement
        );
    }

    #[test]
    fn batch_counts_failures() {
        let fixtures = vec![
            fixture("single", "c Solution: 5\np edge 2 1\ne 1 2 5\n"),
            fixture("wrong", "c Solution: 7\np edge 2 1\ne 1 2 5\n"),
            fixture("apart", "c Solution: -inf\np edge 3 1\ne 2 3 5\n"),
            fixture("bare", "p edge 2 1\ne 1 2 5\n"),
        ];
        let report = check(&fixtures, &SolveOptions::default());
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 3);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.fixtures[1].name, "wrong");
        assert_eq!(report.fixtures[1].verdict, Verdict::Mismatch);
        assert_eq!(report.fixtures[2].verdict, Verdict::Pass);
        assert_eq!(report.fixtures[3].verdict, Verdict::Unchecked);
    }

    #[test]
    fn invalid_query_fails_only_its_fixture() {
        let fixtures = vec![
            fixture("pair", "c Solution: 5\np edge 2 1\ne 1 2 5\n"),
            fixture("lonely", "p edge 1 0\n"),
            fixture("triple", "c Solution: 4\np edge 3 2\ne 1 3 4\ne 3 2 6\n"),
        ];
        let report = check(&fixtures, &SolveOptions::default());
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);

        let lonely = &report.fixtures[1];
        assert_eq!(lonely.name, "lonely");
        assert_eq!(lonely.verdict, Verdict::Invalid);
        assert!(!lonely.verdict.passed());
        assert_eq!(lonely.outcome.answer(), None);
        let message = lonely.error.as_deref().unwrap();
        assert!(message.contains("out of range"), "unexpected error: {message}");

        assert_eq!(report.fixtures[0].error, None);
        assert_eq!(report.fixtures[2].verdict, Verdict::Pass);
    }

    #[test]
    fn query_beyond_every_fixture_marks_all_invalid() {
        let fixtures = vec![fixture("tiny", "p edge 2 1\ne 1 2 5\n")];
        let options = SolveOptions {
            query: solve::Query::new(0, 5),
            ..Default::default()
        };
        let report = check(&fixtures, &options);
        assert_eq!(report.failed, 1);
        assert_eq!(report.fixtures[0].verdict, Verdict::Invalid);
    }
}
