//! Tests for template engine
//!
//! Organized into focused submodules by topic.

use super::*;

// Test helper functions
mod helpers;

mod scan_performance;

mod render_escaping;
mod render_order;


// Sharing a parsed template
mod concurrency;
