/// Terminal and JSON rendering of batch check results.
use bottleneck::batch::{BatchReport, FixtureReport};
use bottleneck::Bottleneck;

fn show(value: Option<Bottleneck<i64>>) -> String {
    match value {
        Some(b) => b.to_string(),
        None => "-".to_string(),
    }
}

/// Print a terminal table summarizing results.
pub fn print_terminal(report: &BatchReport, quiet: bool) {
    println!(
        "{:<24} {:>7} {:>8} {:>12} {:>12} {:>12} {:>10} {:>9}",
        "Fixture", "V", "E", "Expected", "BinSearch", "Forest", "Time(us)", "Status"
    );
    println!("{}", "-".repeat(101));

    for f in report
        .fixtures
        .iter()
        .filter(|f| !quiet || !f.verdict.passed())
    {
        print_row(f);
    }

    println!("{}", "-".repeat(101));
    println!(
        "Total: {} | Passed: {} | Failed: {}",
        report.total, report.passed, report.failed
    );
}

fn print_row(f: &FixtureReport) {
    println!(
        "{:<24} {:>7} {:>8} {:>12} {:>12} {:>12} {:>10} {:>9}",
        truncate(&f.name, 24),
        f.vertices,
        f.edges,
        show(f.expected),
        show(f.outcome.binary_search),
        show(f.outcome.forest),
        f.solve_time_us,
        f.verdict.name(),
    );
    if let Some(error) = &f.error {
        println!("    {error}");
    }
}

/// Render report as JSON.
pub fn to_json(report: &BatchReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    }
}
