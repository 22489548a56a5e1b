//! Byte span of a directive within the template buffer

/// Span of one `${...}` directive, delimiters included
///
/// `start` is the offset of `$`, `end` the offset of the closing `}`.
/// Offsets are only meaningful against the buffer they were scanned from;
/// every accessor is checked and returns `None` for a span that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Full directive text, `${` and `}` included
    pub fn span<'b>(&self, buf: &'b [u8]) -> Option<&'b [u8]> {
        buf.get(self.start..=self.end)
    }

    /// Text between `${` and `}`
    pub fn value<'b>(&self, buf: &'b [u8]) -> Option<&'b [u8]> {
        buf.get(self.start.checked_add(2)?..self.end)
    }

    /// Variable name: the value up to the first `|`
    pub fn name<'b>(&self, buf: &'b [u8]) -> Option<&'b [u8]> {
        let value = self.value(buf)?;
        Some(match value.iter().position(|&b| b == b'|') {
            Some(pipe) => &value[..pipe],
            None => value,
        })
    }

    /// Transform text after the first `|`, `None` when there is no `|`
    pub fn transform<'b>(&self, buf: &'b [u8]) -> Option<&'b [u8]> {
        let value = self.value(buf)?;
        let pipe = value.iter().position(|&b| b == b'|')?;
        Some(&value[pipe + 1..])
    }
}
