//! Output formatting for allocation results.

use std::collections::BTreeMap;
use std::fmt::Write;

use gemforge::{Allocation, CoreGrade, Role, SlotKey, SlotOutcome, SlotStatus};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON document written by `gemforge solve --format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub role: Role,
    pub outcomes: &'a BTreeMap<SlotKey, SlotOutcome>,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub slots: usize,
    pub met: usize,
    pub elapsed_ms: u128,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
    pub slots_dropped: u64,
}

impl<'a> Report<'a> {
    pub fn new(role: Role, allocation: &'a Allocation) -> Self {
        let stats = &allocation.stats;
        Self {
            role,
            outcomes: &allocation.outcomes,
            summary: Summary {
                slots: allocation.len(),
                met: allocation.met_count(),
                elapsed_ms: stats.elapsed().as_millis(),
                nodes_explored: stats.nodes_explored,
                nodes_pruned: stats.nodes_pruned,
                slots_dropped: stats.slots_dropped,
            },
        }
    }
}

fn status_label(status: SlotStatus, color: bool) -> String {
    let label = match status {
        SlotStatus::Met => "met",
        SlotStatus::DegradedMet => "degraded",
        SlotStatus::Unmet => "unmet",
    };
    let padded = format!("{label:<8}");
    if !color {
        return padded;
    }
    match status {
        SlotStatus::Met => padded.bright_green().to_string(),
        SlotStatus::DegradedMet => padded.bright_yellow().to_string(),
        SlotStatus::Unmet => padded.bright_red().to_string(),
    }
}

/// One line per slot, followed by craft needs for slots that fall short.
pub fn render_text(allocation: &Allocation, color: bool) -> String {
    let mut out = String::new();
    for outcome in allocation.outcomes.values() {
        let ids: Vec<String> = outcome.used_gems.iter().map(|g| g.id.to_string()).collect();
        let _ = writeln!(
            out,
            "{:<12} {} {:>2}/{:<2} cp  {:>2}/{:<2} wp  eff {:>7}  gems [{}]",
            outcome.key.to_string(),
            status_label(outcome.status, color),
            outcome.achieved.core_point,
            outcome.target_point,
            outcome.achieved.willpower,
            outcome.budget,
            format!("{:.2}", outcome.achieved.efficiency.value()),
            ids.join(", "),
        );

        let requirements = &outcome.requirements;
        if outcome.status == SlotStatus::Unmet {
            if !requirements.possible {
                let _ = writeln!(out, "{:<12} not reachable with new gems", "");
            }
            for need in &requirements.needs {
                let _ = writeln!(
                    out,
                    "{:<12} craft {} x {} cp / {} wp",
                    "", need.count, need.core_point, need.willpower
                );
            }
        }
    }

    let summary = format!(
        "{}/{} slots met in {} ms",
        allocation.met_count(),
        allocation.len(),
        allocation.stats.elapsed().as_millis()
    );
    if color {
        let _ = writeln!(out, "{}", summary.bold());
    } else {
        let _ = writeln!(out, "{summary}");
    }
    out
}

/// Willpower budget and target menu for a grade.
pub fn render_targets(grade: CoreGrade) -> String {
    let points: Vec<String> = grade.target_points().iter().map(u32::to_string).collect();
    format!(
        "{grade}: willpower budget {}, targets {}\n",
        grade.willpower_budget(),
        points.join(", ")
    )
}
