//! Escape sequence tests for template engine

use super::helpers::{render_str, simple_context};
use super::*;

#[test]
fn test_render_escaped_directive_kept_verbatim() {
    let context = simple_context();
    let result = render_str(r#"Literal: \${Name}"#, &context);
    assert_eq!(result, r#"Literal: \${Name}"#);
}

#[test]
fn test_render_escaped_next_to_real_directive() {
    let context = simple_context();
    let result = render_str(r#"\${escaped} ${Name}"#, &context);
    assert_eq!(result, r#"\${escaped} Ann"#);
}

#[test]
fn test_render_escaped_brace_does_not_open() {
    let context = simple_context();
    let result = render_str(r#"$\{Name} ${Age}"#, &context);
    assert_eq!(result, r#"$\{Name} 30"#);
}

#[test]
fn test_render_escaped_close_inside_directive() {
    // \} does not close an open directive
    let context = simple_context();
    let result = render_str(r#"${Na\}me} ${Age}"#, &context);
    assert_eq!(result, r#" 30"#);
}

#[test]
fn test_render_double_backslash_does_not_escape() {
    // \\ escapes the second backslash, so the directive is live
    let context = simple_context();
    let result = render_str(r#"\\${Name}"#, &context);
    assert_eq!(result, r#"\\Ann"#);
}

#[test]
fn test_render_triple_backslash_escapes() {
    let context = simple_context();
    let result = render_str(r#"\\\${Name}"#, &context);
    assert_eq!(result, r#"\\\${Name}"#);
}

#[test]
fn test_render_generic_escape_kept() {
    let context = simple_context();
    assert_eq!(render_str(r#"a\nb ${Name}"#, &context), r#"a\nb Ann"#);
}

#[test]
fn test_render_trailing_backslash() {
    let context = simple_context();
    assert_eq!(render_str(r#"${Name}\"#, &context), r#"Ann\"#);
}

#[test]
fn test_render_escaped_round_trip_in_event() {
    let context = simple_context();
    let template = "Event:\n  Name: ${Name}\n\n\\${escaped}\n-----------";
    let expected = "Event:\n  Name: Ann\n\n\\${escaped}\n-----------";
    assert_eq!(render_str(template, &context), expected);
}
