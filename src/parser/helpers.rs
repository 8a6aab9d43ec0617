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

use crate::error::{CoolorError, CoolorResult, Found};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// Returns the token under the cursor, if any.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Returns true once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advances one token forward.
    ///
    /// At the end of input this is a no-op: the cursor saturates rather
    /// than wrapping or failing.
    pub fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    /// Checks for a bare symbol without consuming it.
    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.peek()
            .map_or(false, |t| t.kind == TokenKind::Symbol && t.lexeme == symbol)
    }

    /// Consumes an optional symbol. Absence is not an error.
    pub fn match_symbol(&mut self, symbol: &str) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires the current token to be `word` (uppercase, compared
    /// case-insensitively) and consumes it.
    pub fn expect(&mut self, word: &str) -> CoolorResult<&'a Token> {
        match self.peek() {
            Some(token) if token.upper() == word => {
                self.advance();
                Ok(token)
            }
            _ => Err(self.error(word)),
        }
    }

    /// Like [`Parser::expect`], but any member of `words` will do.
    pub fn expect_any(&mut self, words: &[&str]) -> CoolorResult<&'a Token> {
        match self.peek() {
            Some(token) if words.contains(&token.upper().as_str()) => {
                self.advance();
                Ok(token)
            }
            _ => Err(self.error(format!("one of {}", words.join(", ")))),
        }
    }

    /// Requires a token of the given category and consumes it.
    pub fn expect_kind(&mut self, kind: TokenKind, expected: &str) -> CoolorResult<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            _ => Err(self.error(expected)),
        }
    }

    /// What the cursor is looking at, for error reporting.
    pub fn found(&self) -> Found {
        match self.peek() {
            Some(token) => Found::Token(token.lexeme.clone()),
            None => Found::EndOfInput,
        }
    }

    /// Builds a syntax error anchored at the cursor.
    pub fn error(&self, expected: impl Into<String>) -> CoolorError {
        let span = self.peek().map_or(self.end, |t| t.span);
        CoolorError::syntax(expected, self.found(), span)
    }
}
