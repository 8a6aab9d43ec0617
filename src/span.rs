/*
 * ==========================================================================
 * COOLOR - Palettes in Plain Words
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source locations attached to tokens and errors.
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

/// A location inside the command text.
///
/// - `line` is 1-based
/// - `column` is 0-based and counted in characters
/// - `length` is the number of characters covered (at least 1 for carets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

impl Span {
    pub fn new(line: usize, column: usize, length: usize) -> Self {
        Self {
            line,
            column,
            length,
        }
    }

    /// Computes the span of `source[start..end]` (byte offsets).
    pub fn from_offsets(source: &str, start: usize, end: usize) -> Self {
        let before = &source[..start];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = source[line_start..start].chars().count();
        let length = source[start..end].chars().count();

        Self::new(line, column, length)
    }

    /// Zero-width span just past the last character of `source`.
    pub fn end_of(source: &str) -> Self {
        let end = source.trim_end().len();
        let mut span = Self::from_offsets(source, end, end);
        span.length = 1;
        span
    }
}
