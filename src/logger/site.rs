//! Call-site metadata attached to every record.
//!
//! Rust has no caller-supplied parameter defaults, so the file, enclosing
//! function and line are captured by the `callsite!` macro at the call
//! boundary and carried here as plain strings. The metadata is advisory
//! and diagnostic only — nothing security-relevant derives from it.

/// Placeholder rendered in place of the constructor token, which would
/// otherwise read as a bare `new` with no context.
pub const CONSTRUCTOR_LABEL: &str = "<Init>";

/// Source location of a log call: file path, enclosing function path and
/// line number, as produced by `callsite!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

/// Reduces a captured file path to its human-identifying label: the final
/// path segment with a trailing `.rs` stripped if present. Anything else
/// passes through unchanged.
pub fn site_label(file: &str) -> &str {
    let name = file
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(file);
    name.strip_suffix(".rs").unwrap_or(name)
}

/// Reduces a captured function path to its final segment. Closure frames
/// introduced by the capture probe are stripped, and the constructor
/// token `new` is replaced with [`CONSTRUCTOR_LABEL`].
pub fn method_label(function: &str) -> &str {
    let mut name = function;
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    let name = name.rsplit("::").next().unwrap_or(name);
    if name == "new" {
        CONSTRUCTOR_LABEL
    } else {
        name
    }
}
