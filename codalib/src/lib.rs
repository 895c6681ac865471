//! Чтение и запись банковских выписок в бельгийском формате CODA.
//!
//! Файл CODA состоит из строк ровно по 128 символов. Первые одна-две цифры
//! строки задают одну из одиннадцати схем записи, схема режет строку на
//! типизированные поля фиксированной ширины.

pub mod codafile;
pub mod config;
pub mod error;
pub mod fields;
pub mod records;
pub mod registry;
pub mod traits;

pub use codafile::CodaFile;
pub use config::{CodecConfig, CodecOptions};
pub use error::{CodaError, FieldError, RecordError, Result};
pub use fields::{Align, Field, FieldKind, Value};
pub use records::{CodaRecord, Record, RecordKind, RECORD_LENGTH};
