//! Sample host values for rendering tests
//!
//! An event record with a heterogeneous metadata map and a nested handler
//! config, covering records, string/int/uint keyed maps, nil wrappers and
//! list leaves in one value.

use std::collections::BTreeMap;

use shml_core::{Shape, Structure, record};

/// Event kind, rendered by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Begin,
    End,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Begin => "begin",
            EventType::End => "end",
        }
    }
}

impl Structure for EventType {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.as_str())
    }
}

/// Handler configuration carried as event data
#[derive(Debug, Default)]
pub struct HandlerConfig {
    pub kind: String,
    pub transform: Option<Vec<String>>,
    pub context: Option<BTreeMap<String, String>>,
    pub options: BTreeMap<String, String>,
    pub ignore_errors: bool,
}

record!(HandlerConfig {
    "Type" => kind,
    "Transform" => transform,
    "Context" => context,
    "Config" => options,
    "IgnoreErrors" => ignore_errors,
});

pub struct Event {
    pub kind: EventType,
    pub meta: BTreeMap<String, Box<dyn Structure>>,
    pub data: HandlerConfig,
}

record!(Event {
    "Type" => kind,
    "Meta" => meta,
    "Data" => data,
});

/// Event exercising every shape the indexer handles
pub fn sample_event() -> Event {
    let mut map_string: BTreeMap<String, Box<dyn Structure>> = BTreeMap::new();
    map_string.insert("string-key".to_string(), Box::new("value".to_string()));
    map_string.insert("float-key".to_string(), Box::new(1.2f64));

    let list: Vec<Box<dyn Structure>> = vec![Box::new("foo".to_string()), Box::new(2i64)];

    let mut meta: BTreeMap<String, Box<dyn Structure>> = BTreeMap::new();
    meta.insert("kstring".to_string(), Box::new("string".to_string()));
    meta.insert("int-key".to_string(), Box::new(1i64));
    meta.insert("map-string-key".to_string(), Box::new(map_string));
    meta.insert(
        "map-int-key".to_string(),
        Box::new(BTreeMap::from([
            (2i64, "two".to_string()),
            (5i64, "five".to_string()),
        ])),
    );
    meta.insert(
        "map-uint-key".to_string(),
        Box::new(BTreeMap::from([(9u64, "nine".to_string())])),
    );
    meta.insert("list-key".to_string(), Box::new(list));

    Event {
        kind: EventType::Begin,
        meta,
        data: HandlerConfig {
            kind: "http".to_string(),
            options: BTreeMap::from([("key".to_string(), "value".to_string())]),
            ..HandlerConfig::default()
        },
    }
}

/// Template over [`sample_event`] using every directive form
pub const EVENT_TEMPLATE: &str = r#"Event:
  Type: ${Type}
  Meta:
    ${Meta.int-key}
    ${Meta.map-string-key.float-key}
    ${Meta.kstring}/${Meta.map-string-key.string-key}

  Data: ${Data|json}

\${escaped}
-----------"#;

/// Expected rendering of [`EVENT_TEMPLATE`] over [`sample_event`]
pub const EVENT_TEMPLATE_OUT: &str = r#"Event:
  Type: begin
  Meta:
    1
    1.2
    string/value

  Data: {"Type":"http","Transform":null,"Context":null,"Config":{"key":"value"},"IgnoreErrors":false}

\${escaped}
-----------"#;
