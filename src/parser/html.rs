use crate::parser::Fragment;
use std::collections::VecDeque;
use std::io::{self, BufRead, Lines};

const CODE_OPEN: &str = "<code>";
const CODE_CLOSE: &str = "</code>";

/// Scanner position, reset whenever a scan (re)starts.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    pub inside_code: bool,
    pub inside_tag: bool,
    pub line: usize,
}

/// Streams an HTML document line by line and yields the text fragments found
/// between tags, suppressing code regions and templating placeholders.
///
/// Restarting a scan means dropping the scanner and constructing a fresh one
/// over a newly opened reader; no state survives.
pub struct HtmlScanner<R: BufRead> {
    lines: Lines<R>,
    state: ScanState,
    pending: VecDeque<Fragment>,
}

impl<R: BufRead> HtmlScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            state: ScanState::default(),
            pending: VecDeque::new(),
        }
    }

    fn scan_line(&mut self, line: &str) {
        self.state.line += 1;

        // A closing-marker line is excluded itself and ends the region. The
        // opening-marker line is still scanned; only the lines strictly
        // inside the region are skipped.
        if line.contains(CODE_CLOSE) {
            self.state.inside_code = false;
            return;
        }
        if self.state.inside_code {
            return;
        }
        let opens_code = line.contains(CODE_OPEN);

        for text in strip_markup(line, &mut self.state.inside_tag) {
            if is_placeholder(&text) {
                continue;
            }
            self.pending.push_back(Fragment {
                text,
                line: self.state.line,
            });
        }

        if opens_code {
            self.state.inside_code = true;
        }
    }
}

impl<R: BufRead> Iterator for HtmlScanner<R> {
    type Item = io::Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(Ok(fragment));
            }
            match self.lines.next()? {
                Ok(line) => self.scan_line(&line),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Strip markup from one line, returning the text runs between tags.
/// Tags may span physical lines, so the inside-tag flag is threaded through
/// scanner state instead of being reset per line.
fn strip_markup(line: &str, inside_tag: &mut bool) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if *inside_tag {
            if ch == '>' {
                *inside_tag = false;
            }
        } else if ch == '<' {
            flush(&mut current, &mut fragments);
            *inside_tag = true;
        } else {
            current.push(ch);
        }
    }
    flush(&mut current, &mut fragments);

    fragments
}

fn flush(current: &mut String, fragments: &mut Vec<String>) {
    if !current.trim().is_empty() {
        fragments.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// A fragment bounded exactly by `{%` and `%}` is a templating placeholder,
/// not prose.
fn is_placeholder(text: &str) -> bool {
    let mut tokens = text.split_whitespace();
    let first = tokens.next();
    let last = tokens.last().or(first);
    first == Some("{%") && last == Some("%}")
}
