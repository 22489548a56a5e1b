//! Linear-time scanner checks

use crate::template::scan::{Scanner, test_counter};

fn steps_for(text: &str) -> usize {
    test_counter::reset();
    let _ = Scanner::new(text.as_bytes()).count();
    test_counter::get()
}

#[test]
fn test_scan_steps_bounded_by_length() {
    let text = "${a} text ${b|json} \\${c} more".repeat(100);
    assert!(steps_for(&text) <= text.len());
}

#[test]
fn test_scan_unterminated_is_linear() {
    let text = "${".repeat(5_000);
    assert!(steps_for(&text) <= text.len());
}

#[test]
fn test_scan_backslashes_are_linear() {
    let text = "\\".repeat(10_000);
    // Every backslash skips the byte after it
    assert!(steps_for(&text) <= text.len() / 2 + 1);
}

#[test]
fn test_scan_scales_linearly() {
    let small = "x${a}y\\${b}".repeat(100);
    let large = "x${a}y\\${b}".repeat(1_000);
    let ratio = steps_for(&large) as f64 / steps_for(&small) as f64;
    assert!(ratio < 11.0, "ratio {} suggests super-linear scanning", ratio);
}
