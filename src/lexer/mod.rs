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

/// Splitting, classification and symbol validation:
/// - owns the `Lexer` struct and `TokenStream`
/// - exposes the `tokenize(source)` entry point
pub mod lexer;

/// Token categories and the `Token` record.
pub mod token;

/// Fixed vocabulary tables and membership predicates.
pub mod keywords;

pub use lexer::{classify, tokenize, Lexer, TokenStream};
pub use token::{Token, TokenKind};
