/*
 * ==========================================================================
 * COOLOR - Palettes in Plain Words
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token categories produced by the COOLOR
 *            lexer and consumed by the command parser.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the COOLOR command language project.
 *
 * COOLOR is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in a COOLOR command.
///
/// The category is decided from the token text alone, never from its
/// position in the command:
/// ```text
/// Command Text → Lexer → TokenKind → Parser → PaletteCommand
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved command word.
    ///
    /// Examples:
    /// - `generate`, `MAKE`
    /// - `palette`, `colors`
    /// - `from`, `to`, `:`
    Keyword,

    /// One of the base colors (`red`, `blue`, `orange`, ...).
    Color,

    /// A shade qualifier: `light` or `dark`.
    Adjective,

    /// A run of digits, e.g. `6` or `10`.
    Number,

    /// Anything else.
    ///
    /// Only `(` and `)` survive validation; `:` is a keyword.
    Symbol,
}

impl TokenKind {
    /// Lower-case name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Color => "color",
            TokenKind::Adjective => "adjective",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** produced by the COOLOR lexer.
///
/// # Example Tokens
/// ```text
/// Make   →  { kind: Keyword,   lexeme: "Make"   }
/// light  →  { kind: Adjective, lexeme: "light"  }
/// 6      →  { kind: Number,    lexeme: "6"      }
/// (      →  { kind: Symbol,    lexeme: "("      }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact text that produced this token, case preserved.
    pub lexeme: String,

    /// Where the token sits in the command text.
    pub span: Span,
}

impl Token {
    /// The lexeme uppercased, which is the form every grammar check uses.
    pub fn upper(&self) -> String {
        self.lexeme.to_uppercase()
    }
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme, so error messages show exactly what
    /// the user typed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
