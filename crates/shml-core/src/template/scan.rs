//! Directive scanner
//!
//! Single forward pass over the template bytes yielding the span of every
//! closed `${...}` directive.

use super::position::Position;

/// Iterator over directive spans in a template buffer
///
/// # Triggers
///
/// ```text
/// \X    skip X, whatever it is (also inside an open directive)
/// ${    open a directive at `$` (reopens if one is already open)
/// }     close the open directive and yield its span
/// ```
///
/// A directive that is never closed yields nothing. Each byte is visited at
/// most once, so scanning is linear in the buffer length.
pub(crate) struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    /// Offset of a `$` seen on the previous byte
    dollar: Option<usize>,
    /// Offset of the `$` of the currently open directive
    open: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            dollar: None,
            open: None,
        }
    }

    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }
}

impl Iterator for Scanner<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(&byte) = self.bytes.get(self.pos) {
            #[cfg(test)]
            Self::record_test_step();

            let at = self.pos;
            self.pos += 1;
            let dollar = self.dollar.take();

            match byte {
                b'\\' => self.pos += 1,
                b'$' => self.dollar = Some(at),
                b'{' if dollar.is_some() => self.open = dollar,
                b'}' => {
                    if let Some(start) = self.open.take() {
                        return Some(Position::new(start, at));
                    }
                }
                _ => {}
            }
        }
        None
    }
}
