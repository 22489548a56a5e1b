//! Shared test helpers for template engine tests

use crate::index::Structure;
use crate::template::engine::Template;
use toml::{Value, toml};

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> Value {
    let data = toml! {
        Name = "Ann"
        Age = 30
        price = 9.99
        enabled = true
        date = 2026-01-15
    };
    Value::Table(data)
}

/// Create a nested test context with tables and arrays
pub(super) fn nested_context() -> Value {
    let data = toml! {
        [paper]
        title = "Research Paper"
        language = "en"

        [paper.meta]
        pages = 12

        [[paper.authors]]
        name = "John Doe"

        [[paper.authors]]
        name = "Jane Smith"
    };
    Value::Table(data)
}

/// Parse and execute, returning the output as a string
pub(super) fn render_str(template: &str, data: &dyn Structure) -> String {
    let mut parsed = Template::new();
    parsed.parse(template);
    let out = parsed.execute(data).unwrap();
    String::from_utf8(out).unwrap()
}
