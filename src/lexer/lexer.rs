/*
 * ==========================================================================
 * COOLOR - Palettes in Plain Words
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Splits command text into classified tokens and rejects
 *            punctuation the language does not know.
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

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoolorError, CoolorResult};
use crate::lexer::keywords::{is_adjective, is_allowed_symbol, is_color, is_keyword};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// A maximal word run, or one punctuation character.
static SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]").unwrap());

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// The output of a successful tokenization.
///
/// `symbols` is the parallel list of every token that fell through to
/// [`TokenKind::Symbol`]; after validation it only holds `(` and `)`.
/// A stream is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    symbols: Vec<Token>,

    /// Position just past the last non-space character, used when the
    /// parser runs out of tokens.
    end: Span,
}

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn symbols(&self) -> &[Token] {
        &self.symbols
    }

    pub fn end(&self) -> Span {
        self.end
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizes and validates a command in one step.
///
/// # Errors
/// A lexical error naming the first symbol that is not `(`, `)` or `:`.
///
/// # Example
/// ```text
/// tokenize("make palette 3 colors from (dark red : light green)")
/// ```
pub fn tokenize(source: &str) -> CoolorResult<TokenStream> {
    let lexer = Lexer::scan(source);
    lexer.validate_symbols()?;
    Ok(lexer.finish())
}

/// A scanned, not yet validated, command.
///
/// The only way to get a `Lexer` is [`Lexer::scan`], so every instance
/// holds exactly one pass over its source. Its buffers are read through
/// accessors and cannot be refilled:
///
/// ```compile_fail
/// let mut lexer = coolor::lexer::Lexer::scan("make palette");
/// lexer.tokens.clear();
/// ```
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    symbols: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Splits and classifies the whole input.
    ///
    /// Splitting never fails: whitespace only separates, every other
    /// character ends up in some token. Unknown text becomes a
    /// `Symbol` and is left for [`Lexer::validate_symbols`] to judge.
    pub fn scan(source: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut symbols = Vec::new();

        for found in SPLIT.find_iter(source) {
            let lexeme = found.as_str();
            let span = Span::from_offsets(source, found.start(), found.end());
            let kind = classify(lexeme);

            trace!("token {:?} -> {}", lexeme, kind);

            let token = Token {
                kind,
                lexeme: if kind == TokenKind::Symbol {
                    lexeme.trim().to_string()
                } else {
                    lexeme.to_string()
                },
                span,
            };

            if kind == TokenKind::Symbol {
                symbols.push(token.clone());
            }
            tokens.push(token);
        }

        debug!(
            "scanned {} tokens ({} symbols) from {:?}",
            tokens.len(),
            symbols.len(),
            source
        );

        Self {
            source,
            tokens,
            symbols,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn symbols(&self) -> &[Token] {
        &self.symbols
    }

    /// Checks every symbol token against the allowed punctuation.
    ///
    /// Stops at the first offender; there is no error aggregation.
    pub fn validate_symbols(&self) -> CoolorResult<()> {
        match self.symbols.iter().find(|t| !is_allowed_symbol(&t.lexeme)) {
            Some(bad) => {
                debug!("rejecting symbol {:?}", bad.lexeme);
                Err(CoolorError::lexical(bad.lexeme.clone(), bad.span)
                    .with_help(UNKNOWN_SYMBOL_HELP))
            }
            None => Ok(()),
        }
    }

    /// Consumes the lexer, yielding its token stream.
    pub fn finish(self) -> TokenStream {
        TokenStream {
            tokens: self.tokens,
            symbols: self.symbols,
            end: Span::end_of(self.source),
        }
    }
}

const UNKNOWN_SYMBOL_HELP: &str =
    "only words from the vocabulary, digits, '(', ')' and ':' may appear";

/// Classifies one lexeme, case-insensitively.
///
/// Precedence: keyword > color > adjective > number > symbol.
pub fn classify(lexeme: &str) -> TokenKind {
    let word = lexeme.to_uppercase();

    if is_keyword(&word) {
        TokenKind::Keyword
    } else if is_color(&word) {
        TokenKind::Color
    } else if is_adjective(&word) {
        TokenKind::Adjective
    } else if DIGITS.is_match(lexeme) {
        TokenKind::Number
    } else {
        TokenKind::Symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.lexeme.clone())
            .collect()
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(classify("BLUE"), TokenKind::Color);
        assert_eq!(classify("blue"), TokenKind::Color);
        assert_eq!(classify("Blue"), TokenKind::Color);
        assert_eq!(classify("gEnErAtE"), TokenKind::Keyword);
        assert_eq!(classify("Dark"), TokenKind::Adjective);
    }

    #[test]
    fn colon_is_a_keyword_and_parens_are_symbols() {
        assert_eq!(classify(":"), TokenKind::Keyword);
        assert_eq!(classify("("), TokenKind::Symbol);
        assert_eq!(classify(")"), TokenKind::Symbol);
    }

    #[test]
    fn digit_runs_are_numbers() {
        assert_eq!(classify("6"), TokenKind::Number);
        assert_eq!(classify("42"), TokenKind::Number);
        assert_eq!(classify("4a"), TokenKind::Symbol);
    }

    #[test]
    fn splits_words_and_single_punctuation() {
        assert_eq!(
            lexemes("Make paLette 6 COLORS FROM (light blue TO dark orange)"),
            vec![
                "Make", "paLette", "6", "COLORS", "FROM", "(", "light", "blue", "TO", "dark",
                "orange", ")"
            ]
        );
        assert_eq!(lexemes("blue:dark"), vec!["blue", ":", "dark"]);
        assert_eq!(lexemes("(("), vec!["(", "("]);
    }

    #[test]
    fn whitespace_produces_no_tokens() {
        assert!(tokenize("   \t\n ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn full_command_kinds() {
        use TokenKind::*;
        assert_eq!(
            kinds("generate PALETTE 6 colors FROM light blue : dark orange"),
            vec![Keyword, Keyword, Number, Keyword, Keyword, Adjective, Color, Keyword, Adjective, Color]
        );
    }

    #[test]
    fn parens_are_collected_as_symbols() {
        let stream = tokenize("from (light red)").unwrap();
        let symbols: Vec<_> = stream.symbols().iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(symbols, vec!["(", ")"]);
    }

    #[test]
    fn unknown_word_is_a_lexical_error() {
        let err = tokenize("foo").unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.to_string(), "\"foo\" is not defined in the coolor language");
        assert_eq!(err.span, Span::new(1, 0, 3));
    }

    #[test]
    fn first_bad_symbol_is_reported() {
        let err = tokenize("make # palette !").unwrap_err();
        assert_eq!(
            err.kind,
            crate::error::ErrorKind::Lexical { lexeme: "#".to_string() }
        );
        assert_eq!(err.span.column, 5);
    }

    #[test]
    fn scanning_alone_never_fails() {
        let lexer = Lexer::scan("teal & purple");
        assert_eq!(lexer.tokens().len(), 3);
        assert_eq!(lexer.symbols().len(), 3);
        assert!(lexer.validate_symbols().is_err());
    }

    #[test]
    fn spans_track_token_positions() {
        let stream = tokenize("make  palette").unwrap();
        assert_eq!(stream.tokens()[1].span, Span::new(1, 6, 7));
        assert_eq!(stream.end(), Span::new(1, 13, 1));
    }

    #[test]
    fn a_lexer_holds_exactly_one_scan() {
        let source = "make palette 3 colors from light red to dark blue";
        let lexer = Lexer::scan(source);
        assert_eq!(lexer.tokens().len(), 10);

        let stream = lexer.finish();
        assert_eq!(stream.len(), 10);
        assert_eq!(stream, tokenize(source).unwrap());
        assert!(crate::parser::parse(&stream).is_ok());
    }

    #[test]
    fn bad_symbol_help_lists_allowed_punctuation() {
        let err = tokenize("red & blue").unwrap_err();
        assert_eq!(
            err.help.as_deref(),
            Some("only words from the vocabulary, digits, '(', ')' and ':' may appear")
        );
    }
}
