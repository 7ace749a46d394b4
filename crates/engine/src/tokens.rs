use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Lazy whitespace tokenizer over a buffered reader.
///
/// Input is pulled one line at a time and decoded lossily, so invalid UTF-8
/// never aborts a run. Tokens cannot span a newline, which keeps every token
/// inside a single line buffer. The stream is consumed exactly once; after an
/// I/O error it yields nothing more.
pub struct TokenStream<R> {
    reader: R,
    line_buf: Vec<u8>,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Refill `pending` from the next non-blank line.
    fn fill(&mut self) -> io::Result<()> {
        while self.pending.is_empty() {
            self.line_buf.clear();
            if self.reader.read_until(b'\n', &mut self.line_buf)? == 0 {
                self.done = true;
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.line_buf);
            self.pending
                .extend(concordance_core::tokenize(&line).map(str::to_owned));
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for TokenStream<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(Ok(token));
        }
        if self.done {
            return None;
        }
        if let Err(e) = self.fill() {
            self.done = true;
            self.pending.clear();
            return Some(Err(e));
        }
        self.pending.pop_front().map(Ok)
    }
}
