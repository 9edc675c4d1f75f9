//! Colorful console output for engine events.
//!
//! Provides a custom `tracing` layer that formats batch summaries and clamp
//! warnings with colors. Enabled by the `console` feature.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "prevent_engine=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// directives are honored alongside the default `prevent_engine=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        // Another global subscriber may already be installed.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PreventConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let line = format!(
        "PREVENT v{} - Cardiovascular Risk Equations",
        env!("CARGO_PKG_VERSION")
    );
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats engine events with colors.
pub struct PreventConsoleLayer;

impl<S: Subscriber> Layer<S> for PreventConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("prevent_engine") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    message: Option<String>,
    equation: Option<String>,
    sex: Option<String>,
    table: Option<String>,
    error: Option<String>,
    rows: Option<u64>,
    row: Option<u64>,
    failures: Option<u64>,
    duration_ms: Option<u64>,
    parallel: Option<bool>,
    linear_predictor: Option<f64>,
    risk: Option<f64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = Some(value),
            "equation" => self.equation = Some(value),
            "sex" => self.sex = Some(value),
            "table" => self.table = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "rows" => self.rows = Some(value),
            "row" => self.row = Some(value),
            "failures" => self.failures = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "linear_predictor" => self.linear_predictor = Some(value),
            "risk" => self.risk = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "parallel" {
            self.parallel = Some(value);
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    let msg = v.message.as_deref().unwrap_or("");

    match msg {
        "Batch started" => format_batch_started(v),
        "Batch complete" => format_batch_complete(v),
        "Row rejected" => format_row_rejected(v),
        "Risk outside [0, 100]" => format_clamped(v),
        _ if level <= Level::WARN => format!(
            "{} {} {}",
            timestamp().bright_black(),
            level_label(level),
            msg
        ),
        _ => String::new(),
    }
}

fn level_label(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        _ => "DEBUG".bright_blue().to_string(),
    }
}

fn equation_tag(v: &EventVisitor) -> String {
    format!("[{}]", v.equation.as_deref().unwrap_or("batch"))
        .bright_cyan()
        .to_string()
}

fn format_batch_started(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} rows, {}",
        timestamp().bright_black(),
        level_label(Level::DEBUG),
        equation_tag(v),
        v.rows.unwrap_or(0).to_string().bright_yellow(),
        execution_mode(v.parallel)
    )
}

fn format_batch_complete(v: &EventVisitor) -> String {
    let rows = v.rows.unwrap_or(0);
    let failures = v.failures.unwrap_or(0);
    let failures = if failures == 0 {
        failures.to_string().bright_green().to_string()
    } else {
        failures.to_string().bright_red().bold().to_string()
    };

    format!(
        "{} {} {} {} rows evaluated in {} ({}), failures ({})",
        timestamp().bright_black(),
        level_label(Level::INFO),
        equation_tag(v),
        rows.to_string().bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        execution_mode(v.parallel),
        failures
    )
}

fn format_row_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} {} row {} rejected: {}",
        timestamp().bright_black(),
        level_label(Level::DEBUG),
        equation_tag(v),
        v.row.unwrap_or(0).to_string().bright_yellow(),
        v.error.as_deref().unwrap_or("unknown error").bright_red()
    )
}

fn format_clamped(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} risk {} clamped (linear predictor {}, table {})",
        timestamp().bright_black(),
        level_label(Level::WARN),
        equation_tag(v),
        v.sex.as_deref().unwrap_or("?"),
        format_risk(v.risk).bright_red(),
        format_risk(v.linear_predictor),
        v.table.as_deref().unwrap_or("?")
    )
}

fn execution_mode(parallel: Option<bool>) -> String {
    match parallel {
        Some(true) => "parallel".bright_magenta().to_string(),
        _ => "sequential".white().to_string(),
    }
}

fn format_risk(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.4}", v))
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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
