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

//! COOLOR turns short palette requests such as
//! `generate palette 6 colors from light blue to dark orange`
//! into a validated [`PaletteCommand`].
//!
//! The pipeline has two stages:
//! - `lexer` splits and classifies the text, rejecting unknown symbols
//! - `parser` walks the tokens once against the fixed command grammar
//!
//! Both stages stop at the first problem and hand back a [`CoolorError`];
//! deciding what to do with it is left to the caller.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{ColorEndpoint, PaletteCommand};
pub use error::{CoolorError, CoolorResult, ErrorKind, Found};
pub use lexer::tokenize;

/// Tokenizes and parses a palette command.
pub fn parse(source: &str) -> CoolorResult<PaletteCommand> {
    let stream = lexer::tokenize(source)?;
    parser::parse(&stream)
}
