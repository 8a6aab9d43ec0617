/*
 * ==========================================================================
 * COOLOR - Palettes in Plain Words
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the COOLOR command language project.
 *
 * COOLOR is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::CoolorError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for rejected
/// commands.
///
/// The printer:
/// - Shows the error code and message with a line/column location
/// - Displays the offending line of the command
/// - Underlines the bad token with carets (`^^^`)
/// - Optionally shows a follow-up hint
pub struct DiagnosticPrinter {
    /// Full text of the command being checked.
    source: String,

    /// Label shown in the location line, e.g. `<command>`.
    origin: String,
}

impl DiagnosticPrinter {
    pub fn new(origin: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Formats an error diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: syntax error: expected an adjective, found 'blue'
    ///   --> <command>:1:32
    ///    |
    ///  1 | generate palette 6 colors from blue to dark orange
    ///    |                                ^^^^
    /// help: qualify the color with LIGHT or DARK
    /// ```
    pub fn render(&self, error: &CoolorError) -> String {
        let Span {
            line,
            column,
            length,
        } = error.span;

        // Lines are 1-indexed in diagnostics.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n{:>2} | {}\n   | {}{}\n",
            error.code(),
            error,
            self.origin,
            line,
            column + 1,
            line,
            src_line,
            " ".repeat(column),
            "^".repeat(length.max(1))
        );

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &CoolorError) {
        eprint!("{}", self.render(error));
    }
}
