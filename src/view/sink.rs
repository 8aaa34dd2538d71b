//! Elastic-tabstop output sink.
//!
//! Renderers separate cells with `\t`. [`TabAligner`] buffers whatever it is
//! given and, on [`flush`](std::io::Write::flush), pads every tab-terminated
//! cell to the widest cell of its column before passing the text on. The last
//! cell of each line is never padded.

use super::utils::visual_width;
use std::io::{self, Write};

const DEFAULT_PADDING: usize = 2;

/// Aligns tab-separated columns written to it.
#[derive(Debug)]
pub struct TabAligner<W: Write> {
    inner: W,
    buf: Vec<u8>,
    padding: usize,
}

impl<W: Write> TabAligner<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            padding: DEFAULT_PADDING,
        }
    }

    /// Spaces added after the widest cell of each column.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Flushes pending text and returns the wrapped writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    fn aligned(&self) -> String {
        let text = String::from_utf8_lossy(&self.buf);
        let lines: Vec<Vec<&str>> = text
            .split_terminator('\n')
            .map(|line| line.split('\t').collect())
            .collect();

        let mut widths: Vec<usize> = Vec::new();
        for cells in &lines {
            // the trailing cell does not take part in alignment
            for (i, cell) in cells.iter().take(cells.len().saturating_sub(1)).enumerate() {
                let width = visual_width(cell);
                if i >= widths.len() {
                    widths.push(width);
                } else if widths[i] < width {
                    widths[i] = width;
                }
            }
        }

        let mut out = String::with_capacity(text.len());
        for cells in &lines {
            // trailing empty cells get no padding, so text ends with the last value
            let last = cells.iter().rposition(|cell| !cell.is_empty()).unwrap_or(0);
            for (i, cell) in cells.iter().take(last + 1).enumerate() {
                out.push_str(cell);
                if i < last {
                    let pad = widths[i] - visual_width(cell) + self.padding;
                    out.push_str(&" ".repeat(pad));
                }
            }
            out.push('\n');
        }
        out
    }
}

impl<W: Write> Write for TabAligner<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let aligned = self.aligned();
            self.inner.write_all(aligned.as_bytes())?;
            self.buf.clear();
        }
        self.inner.flush()
    }
}
