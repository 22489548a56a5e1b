//! [`Structure`] implementations for std and data-format types

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::structure::{AsStructure, IndexKey, MapKey, Shape, Structure, mapping_json};

macro_rules! scalar_structure {
    ($($ty:ty),* $(,)?) => {$(
        impl Structure for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Leaf
            }

            fn to_json(&self) -> JsonValue {
                JsonValue::from(*self)
            }

            fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    )*};
}

scalar_structure!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

impl Structure for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Structure for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Structure for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Structure for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Null
    }
}

// References are transparent: they are not dynamic wrappers.
impl<T: Structure + ?Sized> Structure for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_text(f)
    }
}

impl<T: Structure> Structure for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Boxed(self.as_ref().map(|value| value as &dyn Structure))
    }

    fn to_json(&self) -> JsonValue {
        match self {
            Some(value) => value.to_json(),
            None => JsonValue::Null,
        }
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_text(f),
            None => Ok(()),
        }
    }
}

macro_rules! pointer_structure {
    ($($ptr:ident),*) => {$(
        impl<T: Structure + ?Sized> Structure for $ptr<T> {
            fn shape(&self) -> Shape<'_> {
                Shape::Boxed(Some((**self).as_structure()))
            }

            fn to_json(&self) -> JsonValue {
                (**self).to_json()
            }

            fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (**self).fmt_text(f)
            }
        }
    )*};
}

pointer_structure!(Box, Rc, Arc);

macro_rules! sequence_structure {
    ($($seq:ident<T $(, $param:ident)*>),*) => {$(
        impl<T: Structure $(, $param)*> Structure for $seq<T $(, $param)*> {
            fn shape(&self) -> Shape<'_> {
                Shape::Leaf
            }

            fn to_json(&self) -> JsonValue {
                JsonValue::Array(self.iter().map(Structure::to_json).collect())
            }
        }
    )*};
}

sequence_structure!(Vec<T>, VecDeque<T>, BTreeSet<T>, HashSet<T, S>);

// Entries are visited and serialized in key order.
impl<K: IndexKey, V: Structure, S> Structure for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(sorted_entries(self))
    }

    fn to_json(&self) -> JsonValue {
        mapping_json(sorted_entries(self))
    }
}

fn sorted_entries<K: IndexKey, V: Structure, S>(
    map: &HashMap<K, V, S>,
) -> Vec<(MapKey<'_>, &dyn Structure)> {
    let mut entries: Vec<(MapKey<'_>, &dyn Structure)> = map
        .iter()
        .map(|(key, value)| (key.map_key(), value as &dyn Structure))
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
}

impl<K: IndexKey, V: Structure> Structure for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (key.map_key(), value as &dyn Structure))
                .collect(),
        )
    }

    fn to_json(&self) -> JsonValue {
        mapping_json(
            self.iter()
                .map(|(key, value)| (key.map_key(), value as &dyn Structure)),
        )
    }
}

impl IndexKey for String {
    fn map_key(&self) -> MapKey<'_> {
        MapKey::Text(self)
    }
}

impl IndexKey for &str {
    fn map_key(&self) -> MapKey<'_> {
        MapKey::Text(self)
    }
}

impl IndexKey for Cow<'_, str> {
    fn map_key(&self) -> MapKey<'_> {
        MapKey::Text(self)
    }
}

macro_rules! signed_key {
    ($($ty:ty),*) => {$(
        impl IndexKey for $ty {
            fn map_key(&self) -> MapKey<'_> {
                MapKey::Signed(*self as i64)
            }
        }
    )*};
}

macro_rules! unsigned_key {
    ($($ty:ty),*) => {$(
        impl IndexKey for $ty {
            fn map_key(&self) -> MapKey<'_> {
                MapKey::Unsigned(*self as u64)
            }
        }
    )*};
}

signed_key!(i8, i16, i32, i64, isize);
unsigned_key!(u8, u16, u32, u64, usize);

impl IndexKey for bool {
    fn map_key(&self) -> MapKey<'_> {
        MapKey::Opaque(self.to_string())
    }
}

impl IndexKey for char {
    fn map_key(&self) -> MapKey<'_> {
        MapKey::Opaque(self.to_string())
    }
}

impl Structure for JsonValue {
    fn shape(&self) -> Shape<'_> {
        match self {
            JsonValue::Object(map) => Shape::Mapping(
                map.iter()
                    .map(|(key, value)| (MapKey::Text(key), value as &dyn Structure))
                    .collect(),
            ),
            _ => Shape::Leaf,
        }
    }

    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl Structure for toml::Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            toml::Value::Table(table) => Shape::Mapping(
                table
                    .iter()
                    .map(|(key, value)| (MapKey::Text(key), value as &dyn Structure))
                    .collect(),
            ),
            _ => Shape::Leaf,
        }
    }

    fn to_json(&self) -> JsonValue {
        match self {
            toml::Value::String(s) => JsonValue::String(s.clone()),
            toml::Value::Integer(i) => JsonValue::from(*i),
            toml::Value::Float(v) => JsonValue::from(*v),
            toml::Value::Boolean(b) => JsonValue::Bool(*b),
            toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
            toml::Value::Array(items) => {
                JsonValue::Array(items.iter().map(Structure::to_json).collect())
            }
            toml::Value::Table(table) => JsonValue::Object(
                table
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            toml::Value::String(s) => f.write_str(s),
            toml::Value::Integer(i) => write!(f, "{}", i),
            toml::Value::Float(v) => write!(f, "{}", v),
            toml::Value::Boolean(b) => write!(f, "{}", b),
            toml::Value::Datetime(dt) => write!(f, "{}", dt),
            toml::Value::Array(_) | toml::Value::Table(_) => write!(f, "{}", self.to_json()),
        }
    }
}
