//! Placeholder substitution for the user's color template.

use crate::select::Assignments;
use crate::storage::{KvStore, StorageError};

pub const TEMPLATE_KEY: &str = "schemaTemplate";

// Trailing spaces keep the flattened output readable once newlines are dropped.
pub const DEFAULT_TEMPLATE: &str = concat!(
    "{ \n",
    "  light: { \n",
    "    background: \"$lightOneBg\", \n",
    "    foreground: \"$lightOneFg\" \n",
    "  }, \n",
    "  dark: { \n",
    "    background: \"$darkOneBg\", \n",
    "    foreground: \"$darkOneFg\" \n",
    "  } \n",
    "}",
);

pub const TOKENS: [&str; 4] = ["$lightOneBg", "$lightOneFg", "$darkOneBg", "$darkOneFg"];

fn bindings(assignments: &Assignments) -> [(&'static str, &str); 4] {
    [
        (TOKENS[0], assignments.light.background.as_str()),
        (TOKENS[1], assignments.light.foreground.as_str()),
        (TOKENS[2], assignments.dark.background.as_str()),
        (TOKENS[3], assignments.dark.foreground.as_str()),
    ]
}

/// Substitute every token occurrence, then flatten to one line.
///
/// Values are inserted verbatim so the template can be JSON, CSS or
/// anything else.
pub fn render(template: &str, assignments: &Assignments) -> String {
    let mut out = template.to_string();
    for (token, value) in bindings(assignments) {
        out = out.replace(token, value);
    }
    collapse_whitespace(&out)
}

fn collapse_whitespace(text: &str) -> String {
    let without_newlines: String = text.chars().filter(|&c| c != '\n').collect();
    let mut out = String::with_capacity(without_newlines.len());
    let mut in_space = false;
    for c in without_newlines.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// The saved template, or the default when none is stored.
pub fn load(store: &dyn KvStore) -> String {
    match store.get(TEMPLATE_KEY) {
        Ok(Some(template)) => template,
        Ok(None) => DEFAULT_TEMPLATE.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read template, using default");
            DEFAULT_TEMPLATE.to_string()
        }
    }
}

pub fn save(store: &dyn KvStore, template: &str) -> Result<(), StorageError> {
    store.set(TEMPLATE_KEY, template)
}

/// Overwrite the stored template with the default and return it.
pub fn reset(store: &dyn KvStore) -> Result<String, StorageError> {
    save(store, DEFAULT_TEMPLATE)?;
    Ok(DEFAULT_TEMPLATE.to_string())
}
