//! Substitution order tests

use super::helpers::{render_str, simple_context};
use super::*;
use crate::index::ContextIndex;

#[test]
fn test_directives_listed_in_source_order() {
    let mut template = Template::new();
    template.parse("${c} ${a} ${b}");
    let texts: Vec<&str> = template.directives().map(|d| d.text()).collect();
    assert_eq!(texts, vec!["${c}", "${a}", "${b}"]);
}

#[test]
fn test_substitution_is_left_to_right() {
    let context = simple_context();
    let result = render_str("${Age}-${Name}-${price}", &context);
    assert_eq!(result, "30-Ann-9.99");
}

#[test]
fn test_source_order_overrides_insertion_order() {
    // "${Name}" enters the table first, but "${Age}" comes first in the
    // buffer being executed
    let context = simple_context();
    let mut template = Template::new();
    template.parse("abcdef${Name}");
    template.parse("${Age}${Name}");

    let texts: Vec<&str> = template.directives().map(|d| d.text()).collect();
    assert_eq!(texts, vec!["${Age}", "${Name}"]);
    assert_eq!(template.execute(&context).unwrap(), b"30Ann");
}

#[test]
fn test_reparse_moves_entries_to_new_buffer() {
    let context = simple_context();
    let mut template = Template::new();
    template.parse("${Age} ${Name}");
    template.parse("xx ${Name} ${Age}");

    let texts: Vec<&str> = template.directives().map(|d| d.text()).collect();
    assert_eq!(texts, vec!["${Name}", "${Age}"]);
    let out = template.execute(&context).unwrap();
    assert_eq!(out, b"xx Ann 30");
}

#[test]
fn test_reparse_substitutes_shifted_directive() {
    let context = simple_context();
    let mut template = Template::new();
    template.parse("${Name}");
    template.parse("Hi ${Name}");
    assert_eq!(template.execute(&context).unwrap(), b"Hi Ann");
}

#[test]
fn test_reparse_drops_shifted_missing_directive() {
    let context = simple_context();
    let mut template = Template::new();
    template.parse("${Nobody}");
    template.parse("a ${Nobody} b ${Nobody}");
    assert_eq!(template.execute(&context).unwrap(), b"a  b ${Nobody}");
}

#[test]
fn test_reparse_skips_entries_missing_from_new_buffer() {
    let context = simple_context();
    let mut template = Template::new();
    template.parse("${Age} and more text");
    template.parse("only ${Name}");

    assert_eq!(template.directives().count(), 1);
    assert_eq!(template.execute(&context).unwrap(), b"only Ann");
}

#[test]
fn test_reparse_keeps_entries_that_still_match() {
    let context = simple_context();
    let mut template = Template::new();
    template.parse("${Name}");
    template.parse("${Name} ${Age}");
    let out = template.execute(&context).unwrap();
    assert_eq!(out, b"Ann 30");
}

#[test]
fn test_directive_accessors() {
    let mut template = Template::new();
    template.parse("a ${Data|json} ${Name}");
    let directives: Vec<_> = template.directives().collect();
    assert_eq!(directives.len(), 2);

    assert_eq!(directives[0].text(), "${Data|json}");
    assert_eq!(directives[0].name(), "Data");
    assert_eq!(directives[0].transform().as_deref(), Some("json"));
    assert_eq!(directives[0].position(), Position::new(2, 13));

    assert_eq!(directives[1].name(), "Name");
    assert_eq!(directives[1].transform(), None);
}

#[test]
fn test_execute_index_with_hand_built_index() {
    let first = "one".to_string();
    let second = 2u8;
    let mut index = ContextIndex::new();
    index.insert("a.b", &first);
    index.insert("c", &second);

    let mut template = Template::new();
    template.parse("${c}/${a.b}");
    let out = template.execute_index(Some(&index)).unwrap();
    assert_eq!(out, b"2/one");
}
