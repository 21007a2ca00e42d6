//! Install command templates.
//!
//! A template is a shell-like command line with `{variable}` placeholders:
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! The line is split into argv with shell-word rules first, so quoting works
//! the way it does in a POSIX shell. Placeholders are then filled in inside
//! each word: a substituted value is always one argument, whatever spaces,
//! quotes or backslashes it contains.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for command template expansion failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in command template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in command template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in command template")]
    EmptyVariableName { position: usize },

    /// The template could not be split (e.g., unbalanced quotes).
    #[error("failed to parse command '{command}': {reason}")]
    Unparseable { command: String, reason: String },

    /// Nothing left to run after splitting.
    #[error("command template expands to an empty command")]
    Empty,
}

/// Substitute `{variable}` placeholders.
pub fn expand(template: &str, variables: &HashMap<&str, &str>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: pos,
                    })?;
                out.push_str(value);
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Split a template into words and expand each one.
///
/// Positions in placeholder errors are relative to the word they occur in.
pub fn expand_command(
    template: &str,
    variables: &HashMap<&str, &str>,
) -> Result<Vec<String>, TemplateError> {
    let words = shell_words::split(template).map_err(|e| TemplateError::Unparseable {
        command: template.to_string(),
        reason: e.to_string(),
    })?;

    if words.is_empty() {
        return Err(TemplateError::Empty);
    }

    words.iter().map(|word| expand(word, variables)).collect()
}

/// Whether `template` contains a `{name}` placeholder. Escaped `{{name}}`
/// does not count.
pub fn references(template: &str, name: &str) -> bool {
    let escaped = format!("{{{{{name}}}}}");
    let placeholder = format!("{{{name}}}");
    template.replace(&escaped, "").contains(&placeholder)
}
