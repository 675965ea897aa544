// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_queries}
  {list}         List issues matching filter criteria
  {show}         Show issue details
  {stats}        Show dashboard statistics
  {categories}   Show the share of issues in each category
  {hotspots}     Show the locations with the most reports
  {queue}        Show open issues, most severe first
  {assignments}  Show assigned issues

{header_triage}
  {update}       Move an issue to a later status
  {report}       Submit a new report

{header_setup}
  {schema}       Output JSON Schema for commands
  {completion}   Generate shell completions",
        header_queries = colors::header("Queries:"),
        header_triage = colors::header("Triage:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        stats = colors::literal("stats"),
        categories = colors::literal("categories"),
        hotspots = colors::literal("hotspots"),
        queue = colors::literal("queue"),
        assignments = colors::literal("assignments"),
        update = colors::literal("update"),
        report = colors::literal("report"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  spotfix list -s reported               See what needs a crew
  spotfix show <id>                      Look at one report
  spotfix update <id> assigned -a <who>  Try an assignment
  spotfix stats                          Dashboard numbers
  spotfix --data issues.jsonl list       Use your own dataset",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
