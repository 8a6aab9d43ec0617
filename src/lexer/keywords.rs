/*
 * ==========================================================================
 * COOLOR - Palettes in Plain Words
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   The fixed vocabulary of the COOLOR command language.
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

/// Reserved command words. `:` doubles as the endpoint separator.
pub const KEYWORDS: &[&str] = &["MAKE", "GENERATE", "PALETTE", "COLOR", "COLORS", "FROM", "TO", ":"];

/// Base colors a palette endpoint may name.
pub const COLORS: &[&str] = &["RED", "GREEN", "BLUE", "YELLOW", "BLACK", "BROWN", "ORANGE"];

/// Shades that must qualify every color.
pub const ADJECTIVES: &[&str] = &["LIGHT", "DARK"];

/// Punctuation that may appear bare in a command.
pub const ALLOWED_SYMBOLS: &[&str] = &["(", ")", ":"];

/// Determines whether an **uppercased** word is a reserved keyword.
///
/// The lexer uppercases every candidate before calling the `is_*`
/// predicates, which is what makes classification case-insensitive.
///
/// # COOLOR Examples
/// ```text
/// GENERATE -> keyword
/// FROM     -> keyword
/// :        -> keyword
/// BLUE     -> not a keyword
/// ```
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Determines whether an uppercased word names a base color.
pub fn is_color(word: &str) -> bool {
    COLORS.contains(&word)
}

/// Determines whether an uppercased word is a shade adjective.
pub fn is_adjective(word: &str) -> bool {
    ADJECTIVES.contains(&word)
}

/// Whether a symbol-classified lexeme is legal on its own.
pub fn is_allowed_symbol(lexeme: &str) -> bool {
    ALLOWED_SYMBOLS.contains(&lexeme)
}
