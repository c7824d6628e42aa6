//! Line-oriented HTML writer
//!
//! Collects markup line by line. In pretty mode every line is prefixed with
//! the tab sequence repeated `indentation + depth` times and lines are joined
//! with `\n`. In compact mode lines are concatenated as is.

/// Accumulates rendered markup
#[derive(Debug, Clone)]
pub struct HtmlWriter {
    buf: String,
    pretty: bool,
    tab: String,
    indentation: usize,
    lines: usize,
}

impl HtmlWriter {
    /// Create a writer starting at `initial_indentation`
    pub fn new(pretty: bool, tab: impl Into<String>, initial_indentation: usize) -> Self {
        Self {
            buf: String::new(),
            pretty,
            tab: tab.into(),
            indentation: initial_indentation,
            lines: 0,
        }
    }

    /// Create a compact writer
    pub fn compact() -> Self {
        Self::new(false, "", 0)
    }

    /// Nest everything written from now on one level deeper
    pub fn indent(&mut self) {
        self.indentation += 1;
    }

    /// Undo one [`indent`](Self::indent)
    pub fn dedent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }

    /// Write one line at `depth` below the current indentation
    pub fn line(&mut self, depth: usize, content: &str) {
        if self.pretty {
            if self.lines > 0 {
                self.buf.push('\n');
            }
            self.buf.push_str(&self.tab.repeat(self.indentation + depth));
        }
        self.buf.push_str(content);
        self.lines += 1;
    }

    /// Number of lines written so far
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Consume the writer and return the markup
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Build an opening tag, skipping empty attribute parts
pub fn open_tag(name: &str, attrs: &[&str]) -> String {
    let mut tag = format!("<{name}");
    for attr in attrs.iter().filter(|attr| !attr.is_empty()) {
        tag.push(' ');
        tag.push_str(attr);
    }
    tag.push('>');
    tag
}

/// Build a closing tag
pub fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Build a `name="value"` attribute, empty when `value` is empty
///
/// `value` is inserted verbatim and must already be escaped.
pub fn attribute(name: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{name}=\"{value}\"")
    }
}
