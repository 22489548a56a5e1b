//! Host value capability trait
//!
//! The indexer never inspects concrete types. Every host value describes
//! itself through [`Structure::shape`], and formats itself through
//! [`Structure::fmt_text`] and [`Structure::to_json`].

use std::borrow::Cow;
use std::fmt;

/// View of any sized host value as a trait object
///
/// Implemented for every sized [`Structure`], and reachable through
/// `dyn Structure`, so wrappers like `Box<dyn Structure>` can hand out their
/// contents without knowing the concrete type.
pub trait AsStructure {
    fn as_structure(&self) -> &dyn Structure;
}

impl<T: Structure> AsStructure for T {
    fn as_structure(&self) -> &dyn Structure {
        self
    }
}

/// A host value that can be indexed and rendered
pub trait Structure: AsStructure {
    /// Describe how this value is laid out
    fn shape(&self) -> Shape<'_>;

    /// Structured form used by the `json` transform
    fn to_json(&self) -> serde_json::Value;

    /// Natural textual form used when a directive names no transform
    ///
    /// Strings are written verbatim, null as nothing, everything else as
    /// compact JSON.
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(&s),
            other => write!(f, "{}", other),
        }
    }
}

/// Layout of a host value as seen by the indexer
pub enum Shape<'a> {
    /// Composite record with named fields, in declaration order
    Record(Vec<(&'a str, &'a dyn Structure)>),

    /// Key/value mapping
    Mapping(Vec<(MapKey<'a>, &'a dyn Structure)>),

    /// Dynamic wrapper; `None` is a nil wrapper
    Boxed(Option<&'a dyn Structure>),

    /// Scalar or collection indexed whole
    Leaf,

    /// Value that cannot be traversed
    Inaccessible(String),
}

impl<'a> Shape<'a> {
    /// True for shapes the indexer descends into
    pub fn is_nested(&self) -> bool {
        matches!(self, Shape::Record(_) | Shape::Mapping(_))
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Record(fields) => f
                .debug_tuple("Record")
                .field(&fields.iter().map(|(name, _)| *name).collect::<Vec<_>>())
                .finish(),
            Shape::Mapping(entries) => f
                .debug_tuple("Mapping")
                .field(&entries.iter().map(|(key, _)| key).collect::<Vec<_>>())
                .finish(),
            Shape::Boxed(inner) => f
                .debug_tuple("Boxed")
                .field(&if inner.is_some() { "some" } else { "nil" })
                .finish(),
            Shape::Leaf => f.write_str("Leaf"),
            Shape::Inaccessible(reason) => f.debug_tuple("Inaccessible").field(reason).finish(),
        }
    }
}

/// A mapping key as seen by the indexer
///
/// Keys order by kind first, then by value, so unordered maps can be
/// visited and serialized deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey<'a> {
    Text(&'a str),
    Signed(i64),
    Unsigned(u64),
    /// Key kind with no path form; skipped when indexing
    Opaque(String),
}

impl<'a> MapKey<'a> {
    /// Path segment for this key, `None` if the key cannot appear in a path
    pub fn segment(&self) -> Option<Cow<'a, str>> {
        match self {
            MapKey::Text(s) => Some(Cow::Borrowed(*s)),
            MapKey::Signed(n) => Some(Cow::Owned(n.to_string())),
            MapKey::Unsigned(n) => Some(Cow::Owned(n.to_string())),
            MapKey::Opaque(_) => None,
        }
    }

    /// Object key used in structured output
    pub fn json_key(&self) -> String {
        match self {
            MapKey::Opaque(display) => display.clone(),
            other => other.segment().map(Cow::into_owned).unwrap_or_default(),
        }
    }
}

/// Conversion of mapping key types into [`MapKey`]
pub trait IndexKey {
    fn map_key(&self) -> MapKey<'_>;
}

/// Display adapter writing a value's natural textual form
pub struct Text<'a>(pub &'a dyn Structure);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_text(f)
    }
}

/// Build the JSON object for a mapping's entries
pub(crate) fn mapping_json<'a, I>(entries: I) -> serde_json::Value
where
    I: IntoIterator<Item = (MapKey<'a>, &'a dyn Structure)>,
{
    serde_json::Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.json_key(), value.to_json()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_segments() {
        assert_eq!(MapKey::Text("a-b").segment().as_deref(), Some("a-b"));
        assert_eq!(MapKey::Signed(-4).segment().as_deref(), Some("-4"));
        assert_eq!(MapKey::Unsigned(9).segment().as_deref(), Some("9"));
        assert_eq!(MapKey::Opaque("true".to_string()).segment(), None);
    }

    #[test]
    fn test_opaque_key_still_has_json_key() {
        assert_eq!(MapKey::Opaque("true".to_string()).json_key(), "true");
        assert_eq!(MapKey::Unsigned(2).json_key(), "2");
    }
}
