use tracing_subscriber::prelude::*;

use crate::context::Depth;

/// Installs a stderr subscriber when `FINED_TRACE` names a level.
///
/// The library never calls this on its own; binaries and tests opt in.
pub fn enable_by_env() {
    let is_enabled = std::env::var("FINED_TRACE").map_or(false, |var| {
        matches!(var.as_str(), "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR")
    });
    if !is_enabled {
        return;
    }
    // a subscriber installed earlier by the host wins
    let _ = tracing_subscriber::Registry::default()
        .with(LineLayer)
        .with(tracing_subscriber::EnvFilter::from_env("FINED_TRACE"))
        .try_init();
}

/// Writes every event as one `[fined LEVEL] message key=value` line.
struct LineLayer;

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LineLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _: tracing_subscriber::layer::Context<'_, S>) {
        let mut line = Line::default();
        event.record(&mut line);
        eprintln!("{}", line.render(*event.metadata().level()));
    }
}

#[derive(Debug, Default)]
struct Line {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Line {
    fn render(&self, level: tracing::Level) -> String {
        let mut out = format!("[fined {}] {}", color::bold(&level), self.message);
        for (name, value) in &self.fields {
            out.push_str(&format!(" {name}={value}"));
        }
        out
    }

    fn record(&mut self, name: &'static str, value: String) {
        if name == "message" {
            self.message = value;
        } else {
            self.fields.push((name, value));
        }
    }
}

impl tracing::field::Visit for Line {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.record(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.record(field.name(), format!("{value:?}"));
    }
}

pub mod color {
    const BOLD: &str = "\u{001b}[1m";
    const GREEN: &str = "\u{001b}[32m";
    const BLUE: &str = "\u{001b}[34m";
    const RESET: &str = "\u{001b}[0m";

    pub fn bold<T: core::fmt::Display>(s: &T) -> String {
        format!("{BOLD}{s}{RESET}")
    }

    pub fn green<T: core::fmt::Display>(s: &T) -> String {
        format!("{GREEN}{s}{RESET}")
    }

    pub fn blue<T: core::fmt::Display>(s: &T) -> String {
        format!("{BLUE}{s}{RESET}")
    }
}

pub(crate) fn depth(depth: &Depth) -> String {
    format!("Level: {}", color::bold(&depth.value()))
}
