//! Variable table: unique directives found while scanning

use std::collections::HashMap;

use super::position::Position;

/// Directive text mapped to its first-seen position, plus the key order
///
/// A directive text seen more than once is registered once; later identical
/// occurrences are not tracked. After the buffer is replaced, an entry whose
/// span no longer holds its text takes the next occurrence found.
#[derive(Debug, Clone, Default)]
pub(crate) struct VariableTable {
    positions: HashMap<String, Position>,
    order: Vec<String>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directive found in `buf`
    ///
    /// Returns false if the text is already registered at a span that still
    /// holds it in `buf`; a stale entry is moved to `position` instead.
    pub fn insert(&mut self, text: String, position: Position, buf: &[u8]) -> bool {
        match self.positions.get_mut(&text) {
            Some(current) if holds(buf, *current, &text) => false,
            Some(current) => {
                *current = position;
                true
            }
            None => {
                self.positions.insert(text.clone(), position);
                self.order.push(text);
                true
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, text: &str) -> Option<Position> {
        self.positions.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Order keys by start offset, ascending
    pub fn sort_by_start(&mut self) {
        let positions = &self.positions;
        self.order.sort_by_key(|text| {
            positions
                .get(text)
                .map(|position| position.start)
                .unwrap_or(usize::MAX)
        });
    }

    /// Entries in the current key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.order.iter().filter_map(|text| {
            self.positions
                .get(text)
                .map(|position| (text.as_str(), *position))
        })
    }
}

/// True if the span at `position` in `buf` reads as `text`
pub(crate) fn holds(buf: &[u8], position: Position, text: &str) -> bool {
    position
        .span(buf)
        .is_some_and(|span| String::from_utf8_lossy(span) == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUF: &[u8] = b"${A}      ${A}";

    #[test]
    fn test_first_occurrence_wins() {
        let mut vars = VariableTable::new();
        assert!(vars.insert("${A}".to_string(), Position::new(0, 3), BUF));
        assert!(!vars.insert("${A}".to_string(), Position::new(10, 13), BUF));
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("${A}"), Some(Position::new(0, 3)));
    }

    #[test]
    fn test_stale_entry_takes_new_position() {
        let mut vars = VariableTable::new();
        vars.insert("${A}".to_string(), Position::new(0, 3), b"${A}");

        let moved = b"Hi ${A} ${A}";
        assert!(vars.insert("${A}".to_string(), Position::new(3, 6), moved));
        assert!(!vars.insert("${A}".to_string(), Position::new(8, 11), moved));
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("${A}"), Some(Position::new(3, 6)));
    }

    #[test]
    fn test_holds_decodes_lossily() {
        let buf = b"${\xff}";
        let text = String::from_utf8_lossy(buf).into_owned();
        assert!(holds(buf, Position::new(0, 3), &text));
        assert!(!holds(buf, Position::new(0, 3), "${x}"));
    }

    #[test]
    fn test_sort_by_start() {
        let buf = b"${A}      ${B}      ${C}";
        let mut vars = VariableTable::new();
        vars.insert("${C}".to_string(), Position::new(20, 23), buf);
        vars.insert("${A}".to_string(), Position::new(0, 3), buf);
        vars.insert("${B}".to_string(), Position::new(10, 13), buf);

        let before: Vec<&str> = vars.iter().map(|(text, _)| text).collect();
        assert_eq!(before, vec!["${C}", "${A}", "${B}"]);

        vars.sort_by_start();
        let after: Vec<&str> = vars.iter().map(|(text, _)| text).collect();
        assert_eq!(after, vec!["${A}", "${B}", "${C}"]);
    }
}
