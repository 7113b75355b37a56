// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/keymap/parser.rs
//!
//! Keymap file parser
//!
//! This module parses keymap files into shortcut declarations.
//! It handles:
//! - `bind = MODIFIERS, KEY, ACTION` lines
//! - Variable substitution (`$mod = cmd`)
//! - Comments and whitespace
//! - Line numbers for error reporting
//!
//! # Architecture
//! The parser uses nom combinators for composable, type-safe parsing.
//! It performs two-pass parsing:
//! 1. First pass: Collect variable definitions
//! 2. Second pass: Parse bindings with variable substitution
//!
//! Key names are kept exactly as written; normalisation and validation
//! happen in `Keymap::parse` after parsing. The one exception is the comma
//! key: `,` separates fields, so it is written `comma` and parsed as `","`.

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, space0},
    IResult, Parser,
};
use std::collections::HashMap;
use thiserror::Error;

use crate::keymap::Binding;

/// Parse errors with line number context
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Undefined variable '${variable}' on line {line}")]
    UndefinedVariable { variable: String, line: usize },
}

/// Parse a complete keymap file
///
/// # Arguments
/// * `content` - The full keymap file content as a string
///
/// # Returns
/// All bind lines in file order, or the first ParseError
///
/// # Example
/// ```
/// use keyboard_manager::keymap::parser::parse_keymap;
///
/// let bindings = parse_keymap("$mod = cmd\nbind = $mod, s, save")?;
/// assert_eq!(bindings[0].modifiers, vec!["cmd"]);
/// assert_eq!(bindings[0].action, "save");
/// # Ok::<(), keyboard_manager::keymap::parser::ParseError>(())
/// ```
pub fn parse_keymap(content: &str) -> Result<Vec<Binding>, ParseError> {
    // First pass: Collect variable definitions
    let variables = collect_variables(content);

    // Second pass: Parse bindings with variable substitution
    let mut bindings = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        // Only process bind lines
        if !line_trimmed.starts_with("bind") {
            continue;
        }

        let substituted = substitute_variables(line_trimmed, &variables);

        if let Some(variable) = find_variable_reference(&substituted) {
            return Err(ParseError::UndefinedVariable {
                variable,
                line: line_num,
            });
        }

        match parse_bind_line(&substituted) {
            Ok((rest, (modifiers, key, action))) if rest.trim().is_empty() => {
                bindings.push(Binding {
                    modifiers,
                    key,
                    action,
                    line: line_num,
                });
            }
            Ok((rest, _)) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("unexpected trailing input '{}'", rest.trim()),
                });
            }
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        }
    }

    Ok(bindings)
}

/// Collect variable definitions
///
/// Keymaps use variables like:
/// ```text
/// $mod = cmd
/// $hyper = ctrl alt shift
/// ```
///
/// Returns a HashMap mapping variable names to their values
pub fn collect_variables(contents: &str) -> HashMap<String, String> {
    let mut variables = HashMap::new();

    for line in contents.lines() {
        let line_trimmed = line.trim();

        // Variable definition format: $name = value
        if let Some(definition) = line_trimmed.strip_prefix('$') {
            if let Some((name, value)) = definition.split_once('=') {
                variables.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
    }

    variables
}

/// Substitute variables in a line
///
/// Replaces `$name` with its value. Longer names are substituted first so
/// `$mod` never clobbers part of `$modkey`.
pub fn substitute_variables(line: &str, variables: &HashMap<String, String>) -> String {
    let mut names: Vec<&String> = variables.keys().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut result = line.to_string();
    for name in names {
        let pattern = format!("${}", name);
        result = result.replace(&pattern, &variables[name]);
    }

    result
}

/// First `$name` left in a line after substitution, if any
fn find_variable_reference(line: &str) -> Option<String> {
    let (_, after) = line.split_once('$')?;
    let name: String = after
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Parse a single bind line
///
/// Format: bind = MODIFIERS, KEY, ACTION
/// Example: bind = cmd shift, p, command-palette
///
/// Returns (modifiers, key, action) or a nom error
pub fn parse_bind_line(input: &str) -> IResult<&str, (Vec<String>, String, String)> {
    let (input, _) = (tag("bind"), space0, char('='), space0).parse(input)?;
    let (input, (modifiers, key)) = parse_key_combo(input)?;
    let (input, _) = (space0, char(','), space0).parse(input)?;
    let (input, action) = parse_action(input)?;

    Ok((input, (modifiers, key, action)))
}

/// Spelling of the comma key in the KEY field
pub const COMMA_KEY_NAME: &str = "comma";

/// Parse the modifier and key fields
///
/// Formats supported:
/// - "cmd, s" (single modifier)
/// - "cmd+shift, s" / "cmd_shift, s" / "cmd shift, s"
/// - ", escape" (no modifiers)
/// - "cmd, comma" (the `,` key)
pub fn parse_key_combo(input: &str) -> IResult<&str, (Vec<String>, String)> {
    let (input, modifier_str) = take_until(",")(input)?;
    let modifiers = parse_modifiers(modifier_str);

    let (input, _) = (char(','), space0).parse(input)?;

    let (input, key) = take_until(",")(input)?;
    let key = key.trim();

    let key = if key.eq_ignore_ascii_case(COMMA_KEY_NAME) {
        ",".to_string()
    } else {
        key.to_string()
    };

    Ok((input, (modifiers, key)))
}

/// Split a modifier field on whitespace, `_` or `+`
///
/// - "cmd" → ["cmd"]
/// - "cmd+shift" → ["cmd", "shift"]
/// - "" → []
pub fn parse_modifiers(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == '_' || c == '+')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an action name
///
/// Actions are identifiers made of alphanumerics, `-`, `_`, `.` and `:`
/// (e.g., "save", "editor.undo", "pane:close-left").
pub fn parse_action(input: &str) -> IResult<&str, String> {
    let (input, action) =
        take_while1(|c: char| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))(input)?;

    Ok((input, action.to_string()))
}
