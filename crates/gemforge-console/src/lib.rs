//! Colorful console output for allocator events.
//!
//! Provides a custom `tracing` layer that formats allocator events with
//! colors. Output goes to stderr so stdout stays free for results.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve and category start/end, assignment result)
//! - **DEBUG**: Per-slot detail (candidate counts, drop attempts, craft plans)
//! - **TRACE**: Incumbent improvements inside the assignment search

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output with the default filter
/// `gemforge_solver=info`, overridable through `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter("gemforge_solver=info");
}

/// Initializes console output with `default_directive` as the fallback
/// filter when `RUST_LOG` is unset.
pub fn init_with_filter(default_directive: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let directive: Directive = default_directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AllocatorConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "GemForge".bright_cyan().bold(),
        format!("v{VERSION} - gem allocation engine").bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats allocator events with colors.
pub struct AllocatorConsoleLayer;

impl<S: Subscriber> Layer<S> for AllocatorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("gemforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    role: Option<String>,
    category: Option<String>,
    slot: Option<String>,
    score: Option<String>,
    slots: Option<u64>,
    gems: Option<u64>,
    count: Option<u64>,
    budget: Option<u64>,
    target: Option<u64>,
    kept: Option<u64>,
    dropped: Option<u64>,
    met: Option<u64>,
    existing: Option<u64>,
    new_gems: Option<u64>,
    gap: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    duration_ms: Option<u64>,
    possible: Option<bool>,
    parallel: Option<bool>,
    incumbent: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "role" => self.role = Some(s),
            "category" => self.category = Some(s),
            "slot" => self.slot = Some(s),
            "score" => self.score = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "slots" => self.slots = Some(value),
            "gems" => self.gems = Some(value),
            "count" => self.count = Some(value),
            "budget" => self.budget = Some(value),
            "target" => self.target = Some(value),
            "kept" => self.kept = Some(value),
            "dropped" => self.dropped = Some(value),
            "met" => self.met = Some(value),
            "existing" => self.existing = Some(value),
            "new_gems" => self.new_gems = Some(value),
            "gap" => self.gap = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "score" {
            self.incumbent = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "possible" => self.possible = Some(value),
            "parallel" => self.parallel = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "role" => self.role = Some(value.to_string()),
            "category" => self.category = Some(value.to_string()),
            "slot" => self.slot = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "category_start" => format_category_start(v),
        "category_end" => format_category_end(v),
        "candidates_generated" => format_candidates(v),
        "assignment_found" => format_assignment_found(v),
        "assignment_infeasible" => format_assignment_infeasible(v),
        "drop_attempt" => format_drop_attempt(v),
        "slots_dropped" => format_slots_dropped(v),
        "craft_planned" => format_craft_planned(v),
        "incumbent_improved" => format_incumbent(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let mut output = format!(
        "{} {} Allocating │ {} slots │ {} gems │ role {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.slots).bright_yellow(),
        count(v.gems).bright_yellow(),
        v.role.as_deref().unwrap_or("?").bright_magenta()
    );
    if v.parallel == Some(true) {
        output.push_str(&format!(" │ {}", "parallel".bright_blue()));
    }
    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let met = v.met.unwrap_or(0);
    let slots = v.slots.unwrap_or(0);
    let status = if met == slots {
        "ALL MET".bright_green().bold().to_string()
    } else {
        format!("{} UNMET", slots - met.min(slots))
            .bright_red()
            .bold()
            .to_string()
    };

    format!(
        "{} {} Allocation complete │ {}/{} met │ {} nodes │ {} pruned │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        met.to_formatted_string(&Locale::en).white(),
        slots.to_formatted_string(&Locale::en).white(),
        count(v.nodes).bright_magenta(),
        count(v.pruned).bright_magenta(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status
    )
}

fn format_category_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} started │ {} slots │ {} gems",
        format_elapsed(),
        "▶".bright_blue(),
        v.category.as_deref().unwrap_or("?").white().bold(),
        count(v.slots).white(),
        count(v.gems).white()
    )
}

fn format_category_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} ended │ {} │ {}/{} met",
        format_elapsed(),
        "◀".bright_blue(),
        v.category.as_deref().unwrap_or("?").white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.met).white(),
        count(v.slots).white()
    )
}

fn format_candidates(v: &EventVisitor) -> String {
    format!(
        "{} {} {:<10} │ budget {:>2} │ target {:>2} │ {} candidates",
        format_elapsed(),
        "·".bright_black(),
        v.slot.as_deref().unwrap_or("?"),
        v.budget.unwrap_or(0),
        v.target.unwrap_or(0),
        count(v.count).bright_magenta()
    )
}

fn format_assignment_found(v: &EventVisitor) -> String {
    format!(
        "{} {} {} assignment │ {} slots │ score {}",
        format_elapsed(),
        "✓".bright_green(),
        v.category.as_deref().unwrap_or("?"),
        count(v.kept).white(),
        v.score.as_deref().unwrap_or("N/A").bright_green()
    )
}

fn format_assignment_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} {} has no feasible assignment",
        format_elapsed(),
        "✗".bright_red(),
        v.category.as_deref().unwrap_or("?")
    )
}

fn format_drop_attempt(v: &EventVisitor) -> String {
    format!(
        "{} {} retrying without {} │ {} kept",
        format_elapsed(),
        "·".bright_black(),
        format!("{} least important", count(v.dropped)).yellow(),
        count(v.kept).white()
    )
}

fn format_slots_dropped(v: &EventVisitor) -> String {
    format!(
        "{} {} {} dropped {} slots",
        format_elapsed(),
        "↓".yellow(),
        v.category.as_deref().unwrap_or("?"),
        count(v.dropped).yellow().bold()
    )
}

fn format_craft_planned(v: &EventVisitor) -> String {
    let possible = v.possible.unwrap_or(false);
    let icon = if possible {
        "✎".bright_cyan().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    format!(
        "{} {} {:<10} │ {} existing │ {} new │ gap {}",
        format_elapsed(),
        icon,
        v.slot.as_deref().unwrap_or("?"),
        count(v.existing).white(),
        count(v.new_gems).bright_yellow(),
        count(v.gap).white()
    )
}

fn format_incumbent(v: &EventVisitor) -> String {
    format!(
        "{} {} incumbent {:.4}",
        format_elapsed(),
        "↑".bright_black(),
        v.incumbent.unwrap_or(0.0)
    )
    .bright_black()
    .to_string()
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("heartbeat".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_drop_attempt_is_rendered() {
        let visitor = EventVisitor {
            event: Some("drop_attempt".to_string()),
            dropped: Some(2),
            kept: Some(1),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor);
        assert!(line.contains("retrying without"));
        assert!(line.contains("2 least important"));
        assert!(line.contains("kept"));
    }

    #[test]
    fn test_solve_end_reports_unmet() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            met: Some(1),
            slots: Some(3),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor);
        assert!(line.contains("Allocation complete"));
        assert!(line.contains("2 UNMET"));
    }
}
