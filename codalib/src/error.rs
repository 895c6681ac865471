//! Ошибки по уровням: поле, запись, файл.

use crate::records::RecordKind;
use thiserror::Error;

/// Failure while decoding or encoding a single fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("length mismatch: expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("pattern mismatch: expected {expected}, found {found:?}")]
    PatternMismatch { expected: String, found: String },

    #[error("no value to encode")]
    MissingValue,

    #[error("literal {literal:?} does not have the field length {expected}")]
    InvalidLiteralLength { literal: String, expected: usize },

    #[error("invalid date {found:?} for format {format:?}")]
    InvalidDate { format: String, found: String },

    #[error("wrong value kind: field holds {expected}, got {found}")]
    WrongValueKind {
        expected: &'static str,
        found: &'static str,
    },
}

/// Failure while decoding or encoding one 128-character record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{kind} record: expected {expected} characters, got {actual}")]
    LengthMismatch {
        kind: RecordKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} record, field `{field}` at offset {position}: {source}")]
    Field {
        kind: RecordKind,
        field: &'static str,
        position: usize,
        #[source]
        source: FieldError,
    },

    #[error("unknown record type {discriminant:?}")]
    UnknownRecordType { discriminant: String },

    #[error("{kind} record has no attribute `{name}`")]
    UnknownAttribute { kind: RecordKind, name: String },

    #[error("{kind} record: `{name}` is reserved and cannot be set")]
    ReservedAttribute { kind: RecordKind, name: String },
}

/// Error of the file-level API.
#[derive(Debug, Error)]
pub enum CodaError {
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CodaError>;
