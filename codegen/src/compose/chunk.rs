/// Width after which an accumulating line is flushed
pub const LINE_WIDTH: usize = 80;

/// Accumulates separator-joined tokens into lines
///
/// A line is flushed as soon as it exceeds the width after a token was
/// appended, so tokens are never split and no line is longer than the width
/// plus one token and its separator. Joining the lines gives back the
/// single-line rendering.
#[derive(Debug, Clone)]
pub struct LineChunker<'s> {
    width: usize,
    separator: &'s str,
    line: String,
    lines: Vec<String>,
    pending: bool,
}

impl<'s> LineChunker<'s> {
    pub fn new(separator: &'s str) -> Self {
        Self::with_width(separator, LINE_WIDTH)
    }

    pub fn with_width(separator: &'s str, width: usize) -> Self {
        Self {
            width,
            separator,
            line: String::new(),
            lines: Vec::new(),
            pending: false,
        }
    }

    pub fn push(&mut self, token: &str) {
        if self.pending {
            self.line.push_str(self.separator);
            self.flush_if_wide();
        }
        self.line.push_str(token);
        self.pending = true;
    }

    fn flush_if_wide(&mut self) {
        if self.line.len() > self.width {
            self.lines.push(std::mem::take(&mut self.line));
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        if !self.line.is_empty() {
            self.lines.push(self.line);
        }
        self.lines
    }
}

/// Join `tokens` with `separator`, split into lines at [`LINE_WIDTH`]
///
/// ```
/// use mapgen_codegen::compose::chunk_joined;
///
/// assert_eq!(chunk_joined(["id", "name"], ", "), vec!["id, name"]);
/// ```
pub fn chunk_joined<I, S>(tokens: I, separator: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut chunker = LineChunker::new(separator);
    for token in tokens {
        chunker.push(token.as_ref());
    }
    chunker.finish()
}
