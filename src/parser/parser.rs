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

use crate::ast::PaletteCommand;
use crate::error::CoolorResult;
use crate::lexer::{Token, TokenStream};
use crate::span::Span;

/// The COOLOR recursive-descent command parser.
///
/// This structure maintains:
/// - A borrowed view of the token stream produced by the lexer
/// - The current cursor position into that stream
///
/// The cursor only ever moves forward. The grammar itself lives in
/// `command.rs` and the cursor primitives in `helpers.rs`, both as
/// additional `impl Parser` blocks.
///
/// Callers can read the cursor but never move it back:
///
/// ```compile_fail
/// let stream = coolor::tokenize("make palette").unwrap();
/// let mut parser = coolor::parser::Parser::new(&stream);
/// parser.current = 0;
/// ```
pub struct Parser<'a> {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: &'a [Token],

    /// Current cursor position within the token stream.
    pub(crate) current: usize,

    /// Where "end of input" points in diagnostics.
    pub(crate) end: Span,
}

/// Public entry point for the COOLOR parsing phase.
///
/// # Pipeline
/// ```text
/// Text → Lexer → TokenStream → Parser → PaletteCommand
/// ```
///
/// # Errors
/// The first grammar violation, as a syntax error.
pub fn parse(stream: &TokenStream) -> CoolorResult<PaletteCommand> {
    Parser::new(stream).parse()
}

impl<'a> Parser<'a> {
    /// Creates a parser with its cursor on the first token.
    pub fn new(stream: &'a TokenStream) -> Self {
        Self {
            tokens: stream.tokens(),
            current: 0,
            end: stream.end(),
        }
    }

    /// Index of the token under the cursor.
    pub fn position(&self) -> usize {
        self.current
    }
}
