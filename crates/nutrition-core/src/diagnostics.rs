//! Leveled diagnostics reported while compiling nutrient definitions.
//!
//! The compiler never logs directly; it hands every problem to a
//! [`DiagnosticsSink`]. `Fatal` diagnostics are always followed by the
//! compile returning an error. `Error` and `Warn` are advisory.

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warn,
    Error,
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Trait for consuming diagnostics.
pub trait DiagnosticsSink {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Fatal => tracing::error!(fatal = true, "{}", diagnostic.message),
            Severity::Error => tracing::error!(fatal = false, "{}", diagnostic.message),
            Severity::Warn => tracing::warn!("{}", diagnostic.message),
        }
    }
}

/// No-op sink for headless operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Collector sink that stores every diagnostic for inspection.
#[derive(Debug, Default)]
pub struct CollectorSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Diagnostics of one severity, in emission order.
    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.severity == severity)
            .cloned()
            .collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.lock().iter().filter(|d| d.severity == severity).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned collector still holds every diagnostic pushed before the panic.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticsSink for CollectorSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &S {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_records_in_order() {
        let sink = CollectorSink::new();
        sink.emit(Diagnostic::warn("first"));
        sink.emit(Diagnostic::error("second"));
        sink.emit(Diagnostic::warn("third"));

        let all = sink.diagnostics();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].message, "first");
        assert_eq!(all[1].severity, Severity::Error);
        assert_eq!(sink.count(Severity::Warn), 2);
        assert_eq!(sink.with_severity(Severity::Warn)[1].message, "third");
    }

    #[test]
    fn empty_collector() {
        let sink = CollectorSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.count(Severity::Fatal), 0);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Fatal > Severity::Error);
        assert!(Severity::Error > Severity::Warn);
    }

    #[test]
    fn display_includes_level() {
        let d = Diagnostic::fatal("boom");
        assert_eq!(d.to_string(), "[FATAL] boom");
    }

    #[test]
    fn sinks_without_subscriber_do_not_panic() {
        NullSink.emit(Diagnostic::fatal("ignored"));
        TracingSink.emit(Diagnostic::warn("logged without a subscriber"));
    }

    /// Records the level and `fatal` field of every event it sees.
    #[derive(Clone, Default)]
    struct LevelRecorder {
        events: std::sync::Arc<Mutex<Vec<(tracing::Level, Option<bool>)>>>,
    }

    struct FatalField(Option<bool>);

    impl tracing::field::Visit for FatalField {
        fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
            if field.name() == "fatal" {
                self.0 = Some(value);
            }
        }

        fn record_debug(&mut self, _: &tracing::field::Field, _: &dyn std::fmt::Debug) {}
    }

    impl tracing::Subscriber for LevelRecorder {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let mut fatal = FatalField(None);
            event.record(&mut fatal);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), fatal.0));
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn tracing_sink_maps_severity_to_level() {
        let recorder = LevelRecorder::default();
        tracing::subscriber::with_default(recorder.clone(), || {
            TracingSink.emit(Diagnostic::fatal("fatal"));
            TracingSink.emit(Diagnostic::error("error"));
            TracingSink.emit(Diagnostic::warn("warn"));
        });
        let events = recorder.events.lock().unwrap().clone();
        assert_eq!(
            events,
            [
                (tracing::Level::ERROR, Some(true)),
                (tracing::Level::ERROR, Some(false)),
                (tracing::Level::WARN, None),
            ]
        );
    }

    #[test]
    fn sink_references_forward() {
        let sink = CollectorSink::new();
        let by_ref = &sink;
        by_ref.emit(Diagnostic::warn("via reference"));
        assert_eq!(sink.len(), 1);
    }
}
