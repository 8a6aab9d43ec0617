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

use log::debug;

use crate::ast::{ColorEndpoint, PaletteCommand};
use crate::error::CoolorResult;
use crate::lexer::keywords::{ADJECTIVES, COLORS};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// Parses a complete palette command.
    ///
    /// # Grammar
    /// ```text
    /// Command   := Verb "PALETTE" Size CountWord "FROM" ["("] Endpoint Separator Endpoint [")"]
    /// Verb      := "GENERATE" | "MAKE"
    /// Size      := digit in {2..9}
    /// CountWord := "COLOR" | "COLORS"
    /// Separator := ":" | "TO"
    /// Endpoint  := Adjective Color
    /// ```
    ///
    /// Each position is checked once, in order. There is no backtracking:
    /// the first failed check is returned and nothing else is examined.
    /// The only optional pieces are the surrounding parentheses.
    pub fn parse(&mut self) -> CoolorResult<PaletteCommand> {
        let verb = self.expect_any(&["GENERATE", "MAKE"])?;
        let palette = self.expect("PALETTE")?;
        let cmd = format!("{} {}", verb.lexeme, palette.lexeme);

        let number = self.size()?;
        self.expect_any(&["COLOR", "COLORS"])?;
        self.expect("FROM")?;

        self.match_symbol("(");
        let first = self.endpoint()?;
        self.expect_any(&[":", "TO"])?;
        let second = self.endpoint()?;
        self.match_symbol(")");

        if !self.is_at_end() {
            return Err(self.error("end of input"));
        }

        let command = PaletteCommand {
            cmd,
            number,
            first,
            second,
        };
        debug!("parsed {:?}", command);
        Ok(command)
    }

    /// Palette size: a single digit token between `2` and `9`.
    fn size(&mut self) -> CoolorResult<u8> {
        let digit = self
            .peek()
            .filter(|t| t.kind == TokenKind::Number)
            .and_then(|t| {
                let mut chars = t.lexeme.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '2'..='9'), None) => c.to_digit(10),
                    _ => None,
                }
            });

        match digit {
            Some(n) => {
                self.advance();
                Ok(n as u8)
            }
            None => Err(self
                .error("a number from 2 to 9")
                .with_help("palettes hold between 2 and 9 colors")),
        }
    }

    /// `Adjective Color`, both required, in that order.
    fn endpoint(&mut self) -> CoolorResult<ColorEndpoint> {
        let adjective = self
            .expect_kind(TokenKind::Adjective, "an adjective")
            .map_err(|e| e.with_help(format!("qualify the color with {}", ADJECTIVES.join(" or "))))?;

        let color = self
            .expect_kind(TokenKind::Color, "a color")
            .map_err(|e| e.with_help(format!("known colors: {}", COLORS.join(", "))))?;

        Ok(ColorEndpoint::new(adjective.lexeme.clone(), color.lexeme.clone()))
    }
}
