//! Output rendering for report pairs.

use crate::config::OutputFormat;
use anyhow::Result;
use redline_types::{AggregateReport, ReportPair, StopPolicy, StrategyKind};
use std::fmt::Write;

pub fn render(pair: &ReportPair, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(pair)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pair)?),
        OutputFormat::Csv => Ok(render_csv(pair)),
    }
}

/// Summary block for both policies.
pub fn render_text(pair: &ReportPair) -> String {
    let strategy = pair.strategy();
    let first = &pair.stop_on_first_win;
    let mut out = String::new();
    let _ = writeln!(out, "Strategy: {strategy}");
    let _ = writeln!(out, "{}", strategy.description());
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<40}{}", "Sessions (N)", first.sessions);
    let _ = writeln!(out, "{:<40}{}", "Rounds per session (R)", first.rounds);
    let _ = writeln!(out, "{:<40}{}", "Base stake", first.base_stake);
    let _ = writeln!(out, "{:<40}{}", "Seed", pair.seed);
    for policy in StopPolicy::ALL {
        let report = pair.get(policy);
        let _ = writeln!(out);
        let _ = writeln!(out, "[{policy}]");
        push_summary(&mut out, report);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<40}{:.5}",
        "Theoretical edge", first.theoretical_edge
    );
    out
}

fn push_summary(out: &mut String, report: &AggregateReport) {
    let _ = writeln!(
        out,
        "{:<40}{:.3} (± {:.3})",
        "Mean balance", report.mean_balance, report.balance_stderr
    );
    let _ = writeln!(out, "{:<40}{:.5}", "Empirical edge", report.empirical_edge);
    let _ = writeln!(out, "{:<40}{:.2}", "Mean rounds played", report.mean_rounds);
    let _ = writeln!(out, "{:<40}{:.2}", "Mean total staked", report.mean_staked);
    let _ = writeln!(
        out,
        "{:<40}{} / {}",
        "Profitable sessions", report.profitable_sessions, report.sessions
    );
}

/// One row per session and policy.
pub fn render_csv(pair: &ReportPair) -> String {
    let mut out = String::from("policy,session,rounds_played,final_balance,total_staked\n");
    for policy in StopPolicy::ALL {
        for result in &pair.get(policy).results {
            let _ = writeln!(
                out,
                "{},{},{},{},{}",
                policy.label(),
                result.session_index,
                result.rounds_played,
                result.final_balance,
                result.total_staked
            );
        }
    }
    out
}

/// Catalogue of strategies with their descriptions.
pub fn render_strategy_list() -> String {
    let mut out = String::new();
    for kind in StrategyKind::ALL {
        let _ = writeln!(out, "{:<14}{}", kind.name(), kind.description());
    }
    out
}
