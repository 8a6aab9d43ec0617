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

use crate::span::Span;
use std::fmt;
use thiserror::Error;

pub type CoolorResult<T> = Result<T, CoolorError>;

/// What the parser actually saw where the grammar wanted something else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A token, by its original text.
    Token(String),

    /// The cursor ran past the last token.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(text) => write!(f, "'{}'", text),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The two ways a command can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A token fell outside every vocabulary class and is not one of the
    /// allowed bare symbols `(`, `)` or `:`.
    #[error("\"{lexeme}\" is not defined in the coolor language")]
    Lexical { lexeme: String },

    /// The current token does not satisfy the grammar rule being checked.
    #[error("syntax error: expected {expected}, found {found}")]
    Syntax { expected: String, found: Found },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct CoolorError {
    pub kind: ErrorKind,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl CoolorError {
    /// Unrecognized token during tokenization.
    pub fn lexical(lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Lexical {
                lexeme: lexeme.into(),
            },
            span,
            help: None,
        }
    }

    /// Grammar violation during parsing.
    pub fn syntax(expected: impl Into<String>, found: Found, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax {
                expected: expected.into(),
                found,
            },
            span,
            help: None,
        }
    }

    /// Stable error code (E_LEXICAL, E_SYNTAX)
    pub fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::Lexical { .. } => "E_LEXICAL",
            ErrorKind::Syntax { .. } => "E_SYNTAX",
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ErrorKind::Lexical { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
