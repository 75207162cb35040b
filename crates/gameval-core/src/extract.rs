//! Constant extraction from generated Java sources.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GamevalError, Result};
use crate::types::Constants;

/// `public static final int NAME = VALUE;`, optionally preceded by a `/** ... */` block.
static RE_CONSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:/\*\*.*?\*/\s*)?public\s+static\s+final\s+int\s+(\w+)\s*=\s*(-?\d+)\s*;")
        .unwrap()
});

/// Insert a constant, a repeated name keeping its first position and taking the new value.
fn insert_last_wins(constants: &mut Constants, name: String, id: i64) {
    constants.insert(name, id);
}

/// Extract every integer constant declaration.
///
/// A name declared more than once keeps the position of its first
/// declaration and the value of its last.
pub fn extract_constants(source: &str) -> Result<Constants> {
    let mut constants = Constants::new();
    for caps in RE_CONSTANT.captures_iter(source) {
        let name = &caps[1];
        let literal = &caps[2];
        let id = literal
            .parse::<i64>()
            .map_err(|_| GamevalError::InvalidConstant {
                name: name.to_string(),
                literal: literal.to_string(),
            })?;
        insert_last_wins(&mut constants, name.to_string(), id);
    }
    Ok(constants)
}

/// Fold one document's constants into a category accumulator, last document winning.
pub fn accumulate(into: &mut Constants, from: Constants) {
    for (name, id) in from {
        insert_last_wins(into, name, id);
    }
}
