/*
 * ==========================================================================
 * COOLOR - Palettes in Plain Words
 * ==========================================================================
 *
 * File:      ast.rs
 * Purpose:   The structured record a parsed palette command produces.
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

use serde::Serialize;
use std::fmt;

/// One end of the requested gradient: a shade followed by a base color.
///
/// Both parts keep the text the user typed, so `Light BLUE` stays
/// `Light BLUE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct ColorEndpoint {
    pub adjective: String,
    pub color: String,
}

impl ColorEndpoint {
    pub fn new(adjective: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            adjective: adjective.into(),
            color: color.into(),
        }
    }

    /// Compares both parts the way the lexer classifies them: uppercased.
    pub fn matches(&self, other: &ColorEndpoint) -> bool {
        self.adjective.to_uppercase() == other.adjective.to_uppercase()
            && self.color.to_uppercase() == other.color.to_uppercase()
    }
}

impl fmt::Display for ColorEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.adjective, self.color)
    }
}

impl From<ColorEndpoint> for String {
    fn from(endpoint: ColorEndpoint) -> Self {
        endpoint.to_string()
    }
}

/// A validated palette request.
///
/// # Example
/// ```text
/// generate PALETTE 6 colors FROM light blue : dark orange
///
/// cmd: generate PALETTE
/// number: 6
/// first color: light blue
/// second color: dark orange
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteCommand {
    /// The first two tokens of the input, echoed as typed.
    pub cmd: String,

    /// Palette size, always within `2..=9`.
    pub number: u8,

    #[serde(rename = "first color")]
    pub first: ColorEndpoint,

    #[serde(rename = "second color")]
    pub second: ColorEndpoint,
}

impl PaletteCommand {
    /// Serializes the record as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PaletteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cmd: {}", self.cmd)?;
        writeln!(f, "number: {}", self.number)?;
        writeln!(f, "first color: {}", self.first)?;
        write!(f, "second color: {}", self.second)
    }
}
