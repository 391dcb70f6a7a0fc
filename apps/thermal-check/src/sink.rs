//! Result sink printing human-readable lines

use std::io::Write;

use model_types::Severity;
use thermal_compliance::ResultSink;
use tracing::warn;

pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("failed to write report line: {}", e);
        }
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn attach_result(
        &mut self,
        severity: Severity,
        category: &str,
        object_ids: &[String],
        message: &str,
    ) {
        let line = format!("[{}] {} {}: {}", severity, category, object_ids.join(", "), message);
        self.emit(&line);
    }

    fn mark_success(&mut self, message: &str) {
        self.emit(&format!("SUCCESS: {}", message));
    }

    fn mark_failure(&mut self, message: &str) {
        self.emit("FAILED:");
        for line in message.lines() {
            self.emit(&format!("  {}", line));
        }
    }
}
