// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use spotfix_core::{Severity, Status};

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    /// Waiting for a crew: soft red
    pub const REPORTED: u8 = 167;
    /// Crew on it: amber
    pub const ASSIGNED: u8 = 179;
    /// Fixed: sage green
    pub const RESOLVED: u8 = 108;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a status badge.
pub fn status_code(status: Status) -> u8 {
    match status {
        Status::Reported => codes::REPORTED,
        Status::Assigned => codes::ASSIGNED,
        Status::Resolved => codes::RESOLVED,
    }
}

/// Status name, colored when output is a terminal.
pub fn status(status: Status) -> String {
    if should_colorize() {
        paint(status_code(status), status.as_str())
    } else {
        status.as_str().to_string()
    }
}

/// Severity name, with `high` highlighted when output is a terminal.
pub fn severity(severity: Severity) -> String {
    if should_colorize() && severity == Severity::High {
        paint(codes::REPORTED, severity.as_str())
    } else {
        severity.as_str().to_string()
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` become headers. Lines of the form
/// `command args    Description` get the command colored. `Label: value`
/// lines get the value colored as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];

            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                format!("{indent}{}", header(trimmed))
            } else if let Some(cmd_end) = find_description_start(trimmed) {
                let (cmd, desc) = trimmed.split_at(cmd_end);
                format!("{indent}{}{desc}", colorize_command(cmd))
            } else if let Some((label, value)) = trimmed.split_once(": ") {
                format!("{indent}{label}: {}", literal(value))
            } else {
                line.to_string()
            }
        })
        .collect();

    lines.join("\n")
}

/// Colorize a command line.
///
/// Quoted strings, `<placeholders>` and the value following a flag are
/// colored as context. Everything else is colored as a literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 128);
    let mut rest = cmd;
    let mut after_flag = false;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix(' ') {
            result.push(' ');
            rest = stripped;
            continue;
        }

        let closing = match rest.as_bytes()[0] {
            b'"' => Some('"'),
            b'<' => Some('>'),
            _ => None,
        };
        let end = match closing {
            Some(close) => rest[1..].find(close).map_or(rest.len(), |i| i + 2),
            None => rest
                .find(|c: char| c == ' ' || c == '"' || c == '<')
                .unwrap_or(rest.len()),
        };
        let (token, tail) = rest.split_at(end);

        if closing.is_some() || after_flag {
            result.push_str(&context(token));
            after_flag = false;
        } else {
            result.push_str(&literal(token));
            after_flag = token.starts_with('-') && !token.contains('=');
        }
        rest = tail;
    }

    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let mut run_start = None;
    for (i, c) in line.char_indices() {
        if c == ' ' {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            if i - start >= 2 {
                return Some(start);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
