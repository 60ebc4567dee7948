//! Progress and summary reporting
//!
//! The runner reports through a `Reporter` trait to separate rendering from
//! execution. This allows for custom output formats by implementing the
//! trait; tests use recording reporters. The default console reporter
//! renders pytest-style progress to standard output.

use super::{ItemOutcome, RunSummary, WorkItem};

/// Trait for reporting suite execution progress.
///
/// All hooks default to no-ops so implementations only override what they
/// render.
pub trait Reporter {
    /// Called once before the loop starts, with the configured item count
    fn on_collection_complete(&mut self, _item_count: usize) {}

    /// Called when an item's entry point is absent and the item is skipped
    fn on_item_skipped(&mut self, _item: &WorkItem) {}

    /// Called when an attempted item starts; `seq` is its 1-based position
    /// in the attempted sequence (skips do not advance it)
    fn on_item_start(&mut self, _seq: usize, _item: &WorkItem) {}

    /// Called when an attempted item completes
    fn on_item_complete(&mut self, _item: &WorkItem, _outcome: &ItemOutcome) {}

    /// Called once after the loop with the folded summary
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Default console reporter (pytest-style)
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn on_collection_complete(&mut self, item_count: usize) {
        println!("\x1b[1m================= example run starts =================\x1b[0m");
        println!("collected {} example(s)", item_count);
        println!();
    }

    fn on_item_skipped(&mut self, item: &WorkItem) {
        println!("{} \x1b[33mSKIPPED\x1b[0m (no entry point)", item.name);
    }

    fn on_item_start(&mut self, seq: usize, item: &WorkItem) {
        println!("\x1b[1m[{}] running {}\x1b[0m", seq, item.name);
    }

    fn on_item_complete(&mut self, item: &WorkItem, outcome: &ItemOutcome) {
        let status = match outcome {
            ItemOutcome::Succeeded(d) => {
                if self.verbose {
                    format!("\x1b[32mPASSED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[32mPASSED\x1b[0m".to_string()
                }
            }
            ItemOutcome::Failed(d, _) => {
                if self.verbose {
                    format!("\x1b[31mFAILED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[31mFAILED\x1b[0m".to_string()
                }
            }
            ItemOutcome::Skipped => "\x1b[33mSKIPPED\x1b[0m".to_string(),
        };

        println!("{} {}", item.name, status);

        // Print failure details (exit status or launch error)
        if let ItemOutcome::Failed(_, Some(detail)) = outcome {
            println!("  \x1b[31m{}\x1b[0m", detail);
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        println!();

        if !summary.failures.is_empty() {
            println!("\x1b[1;31m=================== FAILURES ===================\x1b[0m");
            for line in format_failure_list(&summary.failures).lines() {
                println!("  {}", line);
            }
            println!();
        }

        let summary_color = if summary.failed > 0 {
            "\x1b[1;31m"
        } else {
            "\x1b[1;32m"
        };
        println!(
            "{}=================== {} in {:.2}s ===================\x1b[0m",
            summary_color,
            format_summary_counts(summary),
            summary.duration.as_secs_f64()
        );
    }
}

/// Render the aggregate counters as a single comma-separated line.
///
/// Attempted, succeeded, and failed always appear (zero counts included);
/// skipped appears only when nonzero.
pub fn format_summary_counts(summary: &RunSummary) -> String {
    let mut parts = vec![
        format!("{} attempted", summary.attempted),
        format!("{} succeeded", summary.succeeded),
        format!("{} failed", summary.failed),
    ];
    if summary.skipped > 0 {
        parts.push(format!("{} skipped", summary.skipped));
    }
    parts.join(", ")
}

/// Render the failed identifiers as an enumerated list, one per line,
/// in execution order.
pub fn format_failure_list(failures: &[String]) -> String {
    failures
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn summary(attempted: usize, succeeded: usize, failed: usize, skipped: usize) -> RunSummary {
        RunSummary {
            attempted,
            succeeded,
            failed,
            skipped,
            failures: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn counts_include_zeroes() {
        insta::assert_snapshot!(
            format_summary_counts(&summary(0, 0, 0, 0)),
            @"0 attempted, 0 succeeded, 0 failed"
        );
    }

    #[test]
    fn counts_show_skipped_only_when_nonzero() {
        insta::assert_snapshot!(
            format_summary_counts(&summary(2, 1, 1, 1)),
            @"2 attempted, 1 succeeded, 1 failed, 1 skipped"
        );
        insta::assert_snapshot!(
            format_summary_counts(&summary(2, 2, 0, 0)),
            @"2 attempted, 2 succeeded, 0 failed"
        );
    }

    #[test]
    fn failure_list_is_enumerated_in_order() {
        let failures = vec!["production".to_string(), "italian_help_desk".to_string()];
        assert_eq!(
            format_failure_list(&failures),
            "1. production\n2. italian_help_desk"
        );
    }

    #[test]
    fn failure_list_is_empty_for_no_failures() {
        assert_eq!(format_failure_list(&[]), "");
    }
}
