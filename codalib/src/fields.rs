//! Поля фиксированной ширины.
//!
//! [`Field`] занимает участок `(position, length)` строки записи, хранит
//! необязательное значение и [`FieldKind`], от которого зависит разбор и
//! вывод. Позиции и длины считаются в символах, а не в байтах UTF-8.

use crate::{config::CodecOptions, error::FieldError};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

/// Default date layout: day, month, two-digit year.
pub const DEFAULT_DATE_FORMAT: &str = "%d%m%y";
pub const DATE_LENGTH: usize = 6;
pub const BALANCE_LENGTH: usize = 15;
/// Implied fractional digits of a balance amount.
pub const BALANCE_SCALE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Value first, padding after.
    #[default]
    Left,
    /// Padding first, value after.
    Right,
}

/// Decoded content of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(u64),
    Date(NaiveDate),
    Amount(#[serde(with = "rust_decimal::serde::str")] Decimal),
    Flag(bool),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Date(_) => "date",
            Value::Amount(_) => "amount",
            Value::Flag(_) => "flag",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            Value::Amount(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<Decimal> for Value {
    fn from(a: Decimal) -> Self {
        Value::Amount(a)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Flag(b)
    }
}

/// How a field's slot is parsed and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, padded with `pad` on the side opposite to `align`.
    Text { pad: char, align: Align },
    /// Reserved blank region.
    Empty,
    /// Reserved region filled with `'0'`.
    Zeroes,
    /// Unsigned integer between optional fixed `head` and `tail` literals.
    Numeric {
        head: String,
        tail: String,
        pad: char,
        align: Align,
    },
    /// Calendar date in a strftime-style `format`.
    Date { format: String },
    /// Unsigned amount with three implied decimals, zero-padded.
    Balance,
    /// One of two literals, each exactly the field length.
    Boolean {
        true_value: String,
        false_value: String,
    },
}

impl FieldKind {
    fn value_kind(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } | FieldKind::Empty | FieldKind::Zeroes => "text",
            FieldKind::Numeric { .. } => "integer",
            FieldKind::Date { .. } => "date",
            FieldKind::Balance => "amount",
            FieldKind::Boolean { .. } => "flag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    position: usize,
    length: usize,
    kind: FieldKind,
    value: Option<Value>,
    tag: Option<&'static str>,
}

impl Field {
    fn with_kind(position: usize, length: usize, kind: FieldKind) -> Self {
        assert!(length > 0, "field length must be positive");
        Self {
            position,
            length,
            kind,
            value: None,
            tag: None,
        }
    }

    /// Left-aligned, space-padded text.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn text(position: usize, length: usize) -> Self {
        Self::with_kind(
            position,
            length,
            FieldKind::Text {
                pad: ' ',
                align: Align::Left,
            },
        )
    }

    /// Blank filler.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn empty(position: usize, length: usize) -> Self {
        Self::with_kind(position, length, FieldKind::Empty)
    }

    /// `'0'` filler.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn zeroes(position: usize, length: usize) -> Self {
        Self::with_kind(position, length, FieldKind::Zeroes)
    }

    /// Left-aligned, space-padded integer without literals.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn numeric(position: usize, length: usize) -> Self {
        Self::with_kind(
            position,
            length,
            FieldKind::Numeric {
                head: String::new(),
                tail: String::new(),
                pad: ' ',
                align: Align::Left,
            },
        )
    }

    /// Six-character `ddmmyy` date.
    pub fn date(position: usize) -> Self {
        Self::date_with_format(position, DATE_LENGTH, DEFAULT_DATE_FORMAT)
    }

    /// Date rendered with a strftime-style `format`. An invalid format
    /// surfaces as [`FieldError::InvalidDate`] on encode.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn date_with_format(position: usize, length: usize, format: &str) -> Self {
        Self::with_kind(
            position,
            length,
            FieldKind::Date {
                format: format.to_string(),
            },
        )
    }

    pub fn balance(position: usize) -> Self {
        Self::with_kind(position, BALANCE_LENGTH, FieldKind::Balance)
    }

    /// Fails when `length` is zero or either literal is not exactly `length` characters.
    pub fn boolean(
        position: usize,
        length: usize,
        true_value: &str,
        false_value: &str,
    ) -> Result<Self, FieldError> {
        for literal in [true_value, false_value] {
            if length == 0 || char_len(literal) != length {
                return Err(FieldError::InvalidLiteralLength {
                    literal: literal.to_string(),
                    expected: length,
                });
            }
        }
        Ok(Self::with_kind(
            position,
            length,
            FieldKind::Boolean {
                true_value: true_value.to_string(),
                false_value: false_value.to_string(),
            },
        ))
    }

    /// Boolean field for schema literals known to share one length.
    pub(crate) fn flag(position: usize, true_value: &'static str, false_value: &'static str) -> Self {
        debug_assert_eq!(char_len(true_value), char_len(false_value));
        Self::with_kind(
            position,
            char_len(true_value),
            FieldKind::Boolean {
                true_value: true_value.to_string(),
                false_value: false_value.to_string(),
            },
        )
    }

    /// Sets the pad character of a text or numeric field; no effect on other kinds.
    pub fn pad(mut self, c: char) -> Self {
        match &mut self.kind {
            FieldKind::Text { pad, .. } | FieldKind::Numeric { pad, .. } => *pad = c,
            _ => {}
        }
        self
    }

    /// Sets the alignment of a text or numeric field; no effect on other kinds.
    pub fn align(mut self, a: Align) -> Self {
        match &mut self.kind {
            FieldKind::Text { align, .. } | FieldKind::Numeric { align, .. } => *align = a,
            _ => {}
        }
        self
    }

    /// Fixed literal preceding the digits of a numeric field; no effect on other kinds.
    pub fn head(mut self, literal: &str) -> Self {
        if let FieldKind::Numeric { head, .. } = &mut self.kind {
            *head = literal.to_string();
        }
        self
    }

    /// Fixed literal following the digits of a numeric field; no effect on other kinds.
    pub fn tail(mut self, literal: &str) -> Self {
        if let FieldKind::Numeric { tail, .. } = &mut self.kind {
            *tail = literal.to_string();
        }
        self
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Builder form of [`Field::set_value`].
    pub fn with_value(mut self, value: impl Into<Value>) -> Result<Self, FieldError> {
        self.set_value(value)?;
        Ok(self)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Offset one past the last character of the field.
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn tag_name(&self) -> Option<&'static str> {
        self.tag
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<(), FieldError> {
        let value = value.into();
        let expected = self.kind.value_kind();
        if value.kind_name() != expected {
            return Err(FieldError::WrongValueKind {
                expected,
                found: value.kind_name(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Schema constant; the caller guarantees the value kind matches.
    pub(crate) fn preset(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub(crate) fn put(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn decode(&mut self, raw: &str) -> Result<&Value, FieldError> {
        self.decode_with(raw, CodecOptions::standard())
    }

    /// Parses `raw` (exactly `length` characters) and stores the result.
    pub fn decode_with(&mut self, raw: &str, opts: &CodecOptions) -> Result<&Value, FieldError> {
        let actual = char_len(raw);
        if actual != self.length {
            return Err(FieldError::LengthMismatch {
                expected: self.length,
                actual,
            });
        }

        let value = match &self.kind {
            FieldKind::Text { .. } | FieldKind::Zeroes => {
                if !opts.is_text(raw) {
                    return Err(pattern("text characters", raw));
                }
                Value::Text(raw.to_string())
            }
            FieldKind::Empty => {
                if !raw.chars().all(char::is_whitespace) {
                    return Err(pattern("blank", raw));
                }
                Value::Text(raw.to_string())
            }
            FieldKind::Numeric { head, tail, .. } => {
                Value::Integer(decode_numeric(raw, head, tail)?)
            }
            FieldKind::Date { format } => Value::Date(decode_date(raw, format, opts)?),
            FieldKind::Balance => Value::Amount(decode_balance(raw)?),
            FieldKind::Boolean {
                true_value,
                false_value,
            } => {
                if raw == true_value {
                    Value::Flag(true)
                } else if raw == false_value {
                    Value::Flag(false)
                } else if opts.boolean_fallback {
                    tracing::warn!(
                        position = self.position,
                        found = raw,
                        "unrecognised boolean literal, reading as false"
                    );
                    Value::Flag(false)
                } else {
                    return Err(pattern(&format!("{true_value:?} or {false_value:?}"), raw));
                }
            }
        };

        let value: &Value = self.value.insert(value);
        Ok(value)
    }

    pub fn encode(&self) -> Result<String, FieldError> {
        self.encode_with(CodecOptions::standard())
    }

    /// Renders the value as exactly `length` characters.
    pub fn encode_with(&self, opts: &CodecOptions) -> Result<String, FieldError> {
        match &self.kind {
            FieldKind::Text { pad, align } => {
                let value = self.value.as_ref().and_then(Value::as_text).unwrap_or("");
                fit(value, self.length, *pad, *align, self.position, opts)
            }
            FieldKind::Empty => Ok(" ".repeat(self.length)),
            FieldKind::Zeroes => {
                let value = self.value.as_ref().and_then(Value::as_text).unwrap_or("");
                fit(value, self.length, '0', Align::Left, self.position, opts)
            }
            FieldKind::Numeric {
                head,
                tail,
                pad,
                align,
            } => {
                let width = self.digit_width(head, tail)?;
                let n = self.value.as_ref().and_then(Value::as_integer).unwrap_or(0);
                let digits = fit(&n.to_string(), width, *pad, *align, self.position, opts)?;
                Ok(format!("{head}{digits}{tail}"))
            }
            FieldKind::Date { format } => {
                let date = self
                    .value
                    .as_ref()
                    .and_then(Value::as_date)
                    .ok_or(FieldError::MissingValue)?;
                let mut out = String::with_capacity(self.length);
                write!(out, "{}", date.format(format)).map_err(|_| FieldError::InvalidDate {
                    format: format.clone(),
                    found: date.to_string(),
                })?;
                let actual = char_len(&out);
                if actual != self.length {
                    return Err(FieldError::LengthMismatch {
                        expected: self.length,
                        actual,
                    });
                }
                Ok(out)
            }
            FieldKind::Balance => {
                let mut amount = self
                    .value
                    .as_ref()
                    .and_then(Value::as_amount)
                    .unwrap_or(Decimal::ZERO);
                if amount.scale() < BALANCE_SCALE {
                    amount.rescale(BALANCE_SCALE);
                }
                // лишние знаки после запятой сдвигаются в мантиссу, без округления
                let digits = amount.mantissa().unsigned_abs().to_string();
                fit(&digits, self.length, '0', Align::Right, self.position, opts)
            }
            FieldKind::Boolean {
                true_value,
                false_value,
            } => {
                let flag = self.value.as_ref().and_then(Value::as_flag).unwrap_or(false);
                Ok(if flag { true_value } else { false_value }.clone())
            }
        }
    }

    fn digit_width(&self, head: &str, tail: &str) -> Result<usize, FieldError> {
        let literals = char_len(head) + char_len(tail);
        if literals >= self.length {
            return Err(FieldError::LengthMismatch {
                expected: self.length,
                actual: literals + 1,
            });
        }
        Ok(self.length - literals)
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn pattern(expected: &str, found: &str) -> FieldError {
    FieldError::PatternMismatch {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

/// Pads `value` to `width`; overflow keeps the first `width` characters.
fn fit(
    value: &str,
    width: usize,
    pad: char,
    align: Align,
    position: usize,
    opts: &CodecOptions,
) -> Result<String, FieldError> {
    let len = char_len(value);
    if len > width {
        if !opts.truncate_overflow {
            return Err(FieldError::LengthMismatch {
                expected: width,
                actual: len,
            });
        }
        tracing::debug!(position, width, value, "truncating overflowing value");
        return Ok(value.chars().take(width).collect());
    }

    let padding: String = std::iter::repeat(pad).take(width - len).collect();
    Ok(match align {
        Align::Left => format!("{value}{padding}"),
        Align::Right => format!("{padding}{value}"),
    })
}

fn decode_numeric(raw: &str, head: &str, tail: &str) -> Result<u64, FieldError> {
    let body = raw
        .strip_prefix(head)
        .and_then(|rest| rest.strip_suffix(tail))
        .ok_or_else(|| pattern(&format!("digits between {head:?} and {tail:?}"), raw))?;
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        return Err(pattern("digits or spaces", raw));
    }
    let digits = body.trim_matches(' ');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(pattern("contiguous digits", raw));
    }
    digits.parse().map_err(|_| pattern("integer within range", raw))
}

fn decode_date(raw: &str, format: &str, opts: &CodecOptions) -> Result<NaiveDate, FieldError> {
    let invalid = || FieldError::InvalidDate {
        format: format.to_string(),
        found: raw.to_string(),
    };
    let date = NaiveDate::parse_from_str(raw, format).map_err(|_| invalid())?;
    if !format.contains("%y") {
        return Ok(date);
    }
    let year = opts.expand_year(date.year().rem_euclid(100) as u32);
    date.with_year(year).ok_or_else(invalid)
}

fn decode_balance(raw: &str) -> Result<Decimal, FieldError> {
    let s = raw.trim();
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(pattern("optionally signed digits", raw));
    }
    let units: i128 = s
        .parse()
        .map_err(|_| pattern("amount within range", raw))?;
    Decimal::try_from_i128_with_scale(units, BALANCE_SCALE)
        .map_err(|_| pattern("amount within range", raw))
}
