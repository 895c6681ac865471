//! Настройки кодека.
//!
//! [`CodecConfig`] хранит настройки в виде простых данных (serde), а
//! [`CodecOptions`] собирается из них один раз и передаётся во все вызовы
//! `*_with`.

use crate::error::{CodaError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Punctuation accepted by text fields on top of letters, digits, `_` and whitespace.
pub const BASE_PUNCTUATION: &str = "-&./()',";

/// Two-digit years at or above this value belong to the 1900s.
pub const DEFAULT_CENTURY_PIVOT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Characters accepted by text fields in addition to the base class.
    pub extra_characters: String,
    /// Silently cut values that do not fit their field on encode.
    pub truncate_overflow: bool,
    /// Decode unrecognised boolean literals as `false` instead of failing.
    pub boolean_fallback: bool,
    pub century_pivot: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            extra_characters: String::new(),
            truncate_overflow: true,
            boolean_fallback: true,
            century_pivot: DEFAULT_CENTURY_PIVOT,
        }
    }
}

/// Runtime options shared by fields, records and files.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    text_class: Regex,
    pub truncate_overflow: bool,
    pub boolean_fallback: bool,
    pub century_pivot: u32,
}

static STANDARD: LazyLock<CodecOptions> = LazyLock::new(|| CodecOptions {
    text_class: Regex::new(&text_class_pattern("")).expect("base text class is a valid pattern"),
    truncate_overflow: true,
    boolean_fallback: true,
    century_pivot: DEFAULT_CENTURY_PIVOT,
});

impl CodecOptions {
    /// Options matching `CodecConfig::default()`.
    pub fn standard() -> &'static CodecOptions {
        &STANDARD
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        if config.century_pivot > 99 {
            return Err(CodaError::Config(format!(
                "century pivot must be within 0..=99, got {}",
                config.century_pivot
            )));
        }
        let text_class = Regex::new(&text_class_pattern(&config.extra_characters))
            .map_err(|e| CodaError::Config(e.to_string()))?;
        Ok(Self {
            text_class,
            truncate_overflow: config.truncate_overflow,
            boolean_fallback: config.boolean_fallback,
            century_pivot: config.century_pivot,
        })
    }

    /// Whether `s` consists only of characters text fields accept.
    pub fn is_text(&self, s: &str) -> bool {
        self.text_class.is_match(s)
    }

    /// Maps a two-digit year onto a full year using the century pivot.
    pub fn expand_year(&self, yy: u32) -> i32 {
        let yy = (yy % 100) as i32;
        if yy >= self.century_pivot as i32 {
            1900 + yy
        } else {
            2000 + yy
        }
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl TryFrom<&CodecConfig> for CodecOptions {
    type Error = CodaError;

    fn try_from(config: &CodecConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

fn text_class_pattern(extra: &str) -> String {
    let mut class = String::from(r"\w\s");
    for c in BASE_PUNCTUATION.chars().chain(extra.chars()) {
        class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
    }
    format!("^[{class}]*$")
}
