//! Output sink for rendering reports.

/// Stream a rendered line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Target output for reports.
///
/// Reports describe *what* to output through the semantic methods; an
/// implementation only decides where a finished line goes.
pub trait Output {
    /// Write one finished line.
    fn line(&mut self, stream: Stream, text: String);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.line(Stream::Stdout, format!("{name}:"));
    }

    /// Render an indented key-value pair.
    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Stream::Stdout, format!("  {key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Stream::Stdout, format!("  - {text}"));
    }

    /// A file that was created or changed.
    fn added_item(&mut self, text: &str) {
        self.line(Stream::Stdout, format!("  + {text}"));
    }

    /// A file that was left alone.
    fn kept_item(&mut self, text: &str) {
        self.line(Stream::Stdout, format!("  = {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Stream::Stderr, format!("warning: {msg}"));
    }

    /// Separator with a label, used between previewed files.
    fn divider(&mut self, label: &str) {
        self.line(Stream::Stdout, format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(Stream::Stdout, text.to_string());
    }

    fn newline(&mut self) {
        self.line(Stream::Stdout, String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal; warnings go to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, stream: Stream, text: String) {
        match stream {
            Stream::Stdout => println!("{text}"),
            Stream::Stderr => eprintln!("{text}"),
        }
    }
}

/// Output that records lines, for asserting on rendered reports.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for Recorder {
    fn line(&mut self, _stream: Stream, text: String) {
        self.lines.push(text);
    }
}
