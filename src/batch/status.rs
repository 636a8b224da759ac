//! Status reporting contract between the batch core and its caller
//!
//! The core emits text lines in order and signals completion once. Sinks
//! are driven from the worker thread, so any UI-side implementation must
//! marshal lines back to its own thread.

/// Receiver of status lines for one operation
pub trait StatusSink {
    /// Append one status line
    fn status(&mut self, line: String);

    /// Called exactly once, after the last status line
    fn complete(&mut self);
}

/// In-memory sink, handy for library callers and tests
#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    pub lines: Vec<String>,
    pub completions: usize,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl StatusSink for StatusLog {
    fn status(&mut self, line: String) {
        self.lines.push(line);
    }

    fn complete(&mut self) {
        self.completions += 1;
    }
}

/// Log that runs a hook on every line before recording it
#[cfg(test)]
pub(crate) struct HookedLog<F: FnMut(&str)> {
    pub log: StatusLog,
    hook: F,
}

#[cfg(test)]
impl<F: FnMut(&str)> HookedLog<F> {
    pub fn new(hook: F) -> Self {
        Self {
            log: StatusLog::new(),
            hook,
        }
    }
}

#[cfg(test)]
impl<F: FnMut(&str)> StatusSink for HookedLog<F> {
    fn status(&mut self, line: String) {
        (self.hook)(&line);
        self.log.status(line);
    }

    fn complete(&mut self) {
        self.log.complete();
    }
}
