//! Terminal
//!
//! The host side of the shell: takes submitted lines from an input source,
//! runs them, and writes the transcript to an output sink.

use crate::commands::HostEffect;
use crate::shell::Shell;

/// Where transcript text goes.
pub trait OutputSink {
    /// Append text after everything written so far.
    fn append(&mut self, text: &str);
    /// Erase everything written so far.
    fn clear(&mut self);
}

/// An `OutputSink` that keeps the transcript in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buf: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buf
    }
}

impl OutputSink for BufferSink {
    fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn clear(&mut self) {
        self.buf.clear();
    }
}

pub struct Terminal<S: OutputSink> {
    shell: Shell,
    sink: S,
    enabled: bool,
    echo_input: bool,
}

impl<S: OutputSink> Terminal<S> {
    pub fn new(shell: Shell, sink: S) -> Self {
        Self { shell, sink, enabled: true, echo_input: true }
    }

    /// Whether to write `$ <command>` before each response.
    pub fn echo_input(mut self, echo: bool) -> Self {
        self.echo_input = echo;
        self
    }

    pub fn print_banner(&mut self, banner: &str) {
        self.sink.append(banner);
    }

    /// Handle one submitted line. Returns `true` if a command was run.
    ///
    /// Blank lines, and every line after `quit`, are ignored.
    pub async fn submit(&mut self, raw: &str) -> bool {
        let line = raw.trim();
        if line.is_empty() || !self.enabled {
            return false;
        }

        let result = self.shell.exec(line).await;
        if result.effect == HostEffect::Clear {
            self.sink.clear();
            return true;
        }

        if self.echo_input {
            self.sink.append(&format!("$ {}\n", line));
        }
        self.sink.append(&format!("{}\n", result.output));

        if result.effect == HostEffect::Quit {
            log::debug!("input disabled");
            self.enabled = false;
        }
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
