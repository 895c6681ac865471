//! Выбор схемы по началу строки.
//!
//! Первый символ строки это цифра идентификации. У записей 2 и 3 второй
//! символ это цифра артикула. По паре ищется строка таблицы [`RECORD_TYPES`],
//! неизвестная пара всегда ошибка.

use crate::{
    config::CodecOptions,
    error::RecordError,
    records::{
        ExtraMessageRecord, FinalRecord, InformationDetailRecord, InformationPurposeRecord,
        InformationRecord, InitialRecord, NewBalanceRecord, OldBalanceRecord, Record, RecordKind,
        TransactionDetailRecord, TransactionPurposeRecord, TransactionRecord,
    },
};

/// One row of the registration table.
#[derive(Debug, Clone, Copy)]
pub struct RecordType {
    pub identification: u8,
    pub article: Option<u8>,
    pub kind: RecordKind,
    pub construct: fn() -> Record,
}

macro_rules! record_type {
    ($ty:ident, $kind:ident) => {
        RecordType {
            identification: $ty::IDENTIFICATION,
            article: RecordKind::$kind.article(),
            kind: RecordKind::$kind,
            construct: || Record::from($ty::new()),
        }
    };
}

/// Every known schema, in file order.
pub static RECORD_TYPES: [RecordType; 11] = [
    record_type!(InitialRecord, Initial),
    record_type!(OldBalanceRecord, OldBalance),
    record_type!(TransactionRecord, Transaction),
    record_type!(TransactionPurposeRecord, TransactionPurpose),
    record_type!(TransactionDetailRecord, TransactionDetail),
    record_type!(InformationRecord, Information),
    record_type!(InformationPurposeRecord, InformationPurpose),
    record_type!(InformationDetailRecord, InformationDetail),
    record_type!(ExtraMessageRecord, ExtraMessage),
    record_type!(NewBalanceRecord, NewBalance),
    record_type!(FinalRecord, Final),
];

/// Table entry for an identification/article pair.
pub fn lookup(identification: u8, article: Option<u8>) -> Option<&'static RecordType> {
    RECORD_TYPES
        .iter()
        .find(|t| t.identification == identification && t.article == article)
}

/// Identification digits whose records carry an article digit.
fn has_article(identification: u8) -> bool {
    RECORD_TYPES
        .iter()
        .any(|t| t.identification == identification && t.article.is_some())
}

/// Schema of `line`, judged from its first one or two characters.
pub fn classify(line: &str) -> Result<RecordKind, RecordError> {
    let mut chars = line.chars();
    let unknown = |n: usize| RecordError::UnknownRecordType {
        discriminant: line.chars().take(n).collect(),
    };

    let identification = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| unknown(1))? as u8;

    let article = if has_article(identification) {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| unknown(2))?;
        Some(digit as u8)
    } else {
        None
    };

    lookup(identification, article)
        .map(|t| t.kind)
        .ok_or_else(|| unknown(if article.is_some() { 2 } else { 1 }))
}

pub fn dispatch(line: &str) -> Result<Record, RecordError> {
    dispatch_with(line, CodecOptions::standard())
}

/// Classifies `line` and decodes it into a fresh record of that schema.
pub fn dispatch_with(line: &str, opts: &CodecOptions) -> Result<Record, RecordError> {
    let kind = classify(line)?;
    let mut record = Record::empty(kind);
    record.decode_with(line, opts)?;
    Ok(record)
}
