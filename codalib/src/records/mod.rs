//! Схемы записей CODA.
//!
//! Запись это упорядоченный ряд полей [`Field`] без пропусков, покрывающий
//! все 128 символов строки. Конкретные схемы разложены по подмодулям по цифре
//! идентификации, [`Record`] объединяет их все.

use crate::{
    config::CodecOptions,
    error::{FieldError, RecordError},
    fields::{Field, Value},
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::{collections::BTreeMap, fmt};

/// Characters in every CODA line.
pub const RECORD_LENGTH: usize = 128;

/// Typed getter and chained setter per named field.
macro_rules! accessors {
    ($($kind:ident $getter:ident / $setter:ident;)*) => {
        $( accessors!(@ $kind $getter $setter); )*
    };
    (@ text $getter:ident $setter:ident) => {
        pub fn $getter(&self) -> Option<&str> {
            self.body.value(stringify!($getter)).and_then($crate::fields::Value::as_text)
        }

        pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
            self.body.put(stringify!($getter), $crate::fields::Value::Text(value.into()));
            self
        }
    };
    (@ integer $getter:ident $setter:ident) => {
        pub fn $getter(&self) -> Option<u64> {
            self.body.value(stringify!($getter)).and_then($crate::fields::Value::as_integer)
        }

        pub fn $setter(&mut self, value: u64) -> &mut Self {
            self.body.put(stringify!($getter), $crate::fields::Value::Integer(value));
            self
        }
    };
    (@ date $getter:ident $setter:ident) => {
        pub fn $getter(&self) -> Option<::chrono::NaiveDate> {
            self.body.value(stringify!($getter)).and_then($crate::fields::Value::as_date)
        }

        pub fn $setter(&mut self, value: ::chrono::NaiveDate) -> &mut Self {
            self.body.put(stringify!($getter), $crate::fields::Value::Date(value));
            self
        }
    };
    (@ amount $getter:ident $setter:ident) => {
        pub fn $getter(&self) -> Option<::rust_decimal::Decimal> {
            self.body.value(stringify!($getter)).and_then($crate::fields::Value::as_amount)
        }

        pub fn $setter(&mut self, value: ::rust_decimal::Decimal) -> &mut Self {
            self.body.put(stringify!($getter), $crate::fields::Value::Amount(value));
            self
        }
    };
}

/// Struct, constructor and trait plumbing shared by every schema.
macro_rules! schema {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $layout:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            body: $crate::records::RecordBody,
        }

        impl $name {
            /// Record with no values besides the schema constants.
            pub fn new() -> Self {
                Self {
                    body: $crate::records::RecordBody::new(
                        $crate::records::RecordKind::$kind,
                        $layout(),
                    ),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::records::CodaRecord for $name {
            const KIND: $crate::records::RecordKind = $crate::records::RecordKind::$kind;

            fn body(&self) -> &$crate::records::RecordBody {
                &self.body
            }

            fn body_mut(&mut self) -> &mut $crate::records::RecordBody {
                &mut self.body
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.body, s)
            }
        }
    };
}

mod header;
mod movement;
mod trailer;

pub use header::{InitialRecord, OldBalanceRecord};
pub use movement::{
    InformationDetailRecord, InformationPurposeRecord, InformationRecord,
    TransactionDetailRecord, TransactionPurposeRecord, TransactionRecord,
};
pub use trailer::{ExtraMessageRecord, FinalRecord, NewBalanceRecord};

/// The 11 record schemas, keyed by identification and article digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RecordKind {
    Initial,
    OldBalance,
    Transaction,
    TransactionPurpose,
    TransactionDetail,
    Information,
    InformationPurpose,
    InformationDetail,
    ExtraMessage,
    NewBalance,
    Final,
}

impl RecordKind {
    pub const ALL: [RecordKind; 11] = [
        RecordKind::Initial,
        RecordKind::OldBalance,
        RecordKind::Transaction,
        RecordKind::TransactionPurpose,
        RecordKind::TransactionDetail,
        RecordKind::Information,
        RecordKind::InformationPurpose,
        RecordKind::InformationDetail,
        RecordKind::ExtraMessage,
        RecordKind::NewBalance,
        RecordKind::Final,
    ];

    /// Digit at offset 0.
    pub const fn identification(self) -> u8 {
        match self {
            RecordKind::Initial => 0,
            RecordKind::OldBalance => 1,
            RecordKind::Transaction
            | RecordKind::TransactionPurpose
            | RecordKind::TransactionDetail => 2,
            RecordKind::Information
            | RecordKind::InformationPurpose
            | RecordKind::InformationDetail => 3,
            RecordKind::ExtraMessage => 4,
            RecordKind::NewBalance => 8,
            RecordKind::Final => 9,
        }
    }

    /// Digit at offset 1, only meaningful for identification 2 and 3.
    pub const fn article(self) -> Option<u8> {
        match self {
            RecordKind::Transaction | RecordKind::Information => Some(1),
            RecordKind::TransactionPurpose | RecordKind::InformationPurpose => Some(2),
            RecordKind::TransactionDetail | RecordKind::InformationDetail => Some(3),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Initial => "initial",
            RecordKind::OldBalance => "old balance",
            RecordKind::Transaction => "transaction",
            RecordKind::TransactionPurpose => "transaction purpose",
            RecordKind::TransactionDetail => "transaction detail",
            RecordKind::Information => "information",
            RecordKind::InformationPurpose => "information purpose",
            RecordKind::InformationDetail => "information detail",
            RecordKind::ExtraMessage => "extra message",
            RecordKind::NewBalance => "new balance",
            RecordKind::Final => "final",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name given to layout-only fields; they are never reachable by name.
const RESERVED: &str = "reserved";

/// Key of the record kind in the serialized map.
const KIND_KEY: &str = "kind";

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    name: &'static str,
    exposed: bool,
    field: Field,
}

/// Entry of a schema layout: a field plus how callers may reach it.
pub(crate) enum Layout {
    /// Accessible by name.
    Named(&'static str, Field),
    /// Decoded and checked, but not reachable by name.
    Internal(&'static str, Field),
    /// Layout filler.
    Reserved(Field),
}

/// Field storage behind every concrete record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBody {
    kind: RecordKind,
    slots: Vec<Slot>,
    attributes: BTreeMap<String, Value>,
}

impl RecordBody {
    pub(crate) fn new(kind: RecordKind, layout: Vec<Layout>) -> Self {
        let slots = layout
            .into_iter()
            .map(|entry| match entry {
                Layout::Named(name, field) => Slot {
                    name,
                    exposed: true,
                    field,
                },
                Layout::Internal(name, field) => Slot {
                    name,
                    exposed: false,
                    field,
                },
                Layout::Reserved(field) => Slot {
                    name: RESERVED,
                    exposed: false,
                    field,
                },
            })
            .collect();
        let body = Self {
            kind,
            slots,
            attributes: BTreeMap::new(),
        };
        debug_assert!(body.is_contiguous(), "{kind} layout has gaps or overlaps");
        body
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Whether the fields start at 0, abut one another and end at 128.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        for slot in &self.slots {
            if slot.field.position() != expected {
                return false;
            }
            expected = slot.field.end();
        }
        expected == RECORD_LENGTH
    }

    /// All fields in line order, layout fillers included.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.slots.iter().map(|slot| &slot.field)
    }

    /// Fields reachable through [`RecordBody::get`], in line order.
    pub fn named_fields(&self) -> impl Iterator<Item = (&'static str, &Field)> {
        self.slots
            .iter()
            .filter(|slot| slot.exposed)
            .map(|slot| (slot.name, &slot.field))
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Reads a named field or an auxiliary attribute; any other name is an error.
    pub fn get(&self, name: &str) -> Result<Option<&Value>, RecordError> {
        if let Some(slot) = self.exposed_slot(name) {
            return Ok(slot.field.value());
        }
        match self.attributes.get(name) {
            Some(value) => Ok(Some(value)),
            None => Err(RecordError::UnknownAttribute {
                kind: self.kind,
                name: name.to_string(),
            }),
        }
    }

    /// Writes a named field, or stores an auxiliary attribute under any other name.
    /// `kind` is taken by the serialized form and is rejected.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        let kind = self.kind;
        match self.slots.iter_mut().find(|slot| slot.exposed && slot.name == name) {
            Some(slot) => slot
                .field
                .set_value(value)
                .map_err(|source| RecordError::Field {
                    kind,
                    field: slot.name,
                    position: slot.field.position(),
                    source,
                }),
            None if name == KIND_KEY => Err(RecordError::ReservedAttribute {
                kind,
                name: name.to_string(),
            }),
            None => {
                self.attributes.insert(name.to_string(), value.into());
                Ok(())
            }
        }
    }

    pub(crate) fn value(&self, name: &str) -> Option<&Value> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .and_then(|slot| slot.field.value())
    }

    pub(crate) fn put(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.name == name) {
            slot.field.put(value);
        }
    }

    fn exposed_slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.exposed && slot.name == name)
    }

    pub fn decode_with(&mut self, line: &str, opts: &CodecOptions) -> Result<(), RecordError> {
        let kind = self.kind;
        let bounds = char_bounds(line);
        let actual = bounds.len() - 1;
        if actual != RECORD_LENGTH {
            return Err(RecordError::LengthMismatch {
                kind,
                expected: RECORD_LENGTH,
                actual,
            });
        }

        for slot in &mut self.slots {
            let (name, start, end) = (slot.name, slot.field.position(), slot.field.end());
            let raw = &line[bounds[start]..bounds[end]];
            let field_error = |source| RecordError::Field {
                kind,
                field: name,
                position: start,
                source,
            };
            let value = slot.field.decode_with(raw, opts).map_err(field_error)?;

            // цифры идентификации и артикула должны совпасть со схемой
            if let Some(digit) = discriminant_digit(kind, name) {
                let found = value.as_integer();
                if found != Some(u64::from(digit)) {
                    return Err(field_error(FieldError::PatternMismatch {
                        expected: digit.to_string(),
                        found: found.map(|n| n.to_string()).unwrap_or_default(),
                    }));
                }
            }
        }
        Ok(())
    }

    pub fn encode_with(&self, opts: &CodecOptions) -> Result<String, RecordError> {
        let mut line = String::with_capacity(RECORD_LENGTH);
        for slot in &self.slots {
            let part = slot.field.encode_with(opts).map_err(|source| RecordError::Field {
                kind: self.kind,
                field: slot.name,
                position: slot.field.position(),
                source,
            })?;
            line.push_str(&part);
        }
        Ok(line)
    }
}

impl Serialize for RecordBody {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let named: Vec<_> = self.named_fields().collect();
        let mut map = s.serialize_map(Some(1 + named.len() + self.attributes.len()))?;
        map.serialize_entry(KIND_KEY, &self.kind)?;
        for (name, field) in named {
            map.serialize_entry(name, &field.value())?;
        }
        for (name, value) in &self.attributes {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Digit a discriminant slot must hold for `kind`.
fn discriminant_digit(kind: RecordKind, slot: &str) -> Option<u8> {
    match slot {
        "identification" => Some(kind.identification()),
        "article" => kind.article(),
        _ => None,
    }
}

/// Byte offset of every character boundary, end of string included.
fn char_bounds(line: &str) -> Vec<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect()
}

/// Shared decode/encode surface of the concrete schemas.
pub trait CodaRecord: Default {
    const KIND: RecordKind;

    fn body(&self) -> &RecordBody;

    fn body_mut(&mut self) -> &mut RecordBody;

    fn decode(&mut self, line: &str) -> Result<(), RecordError> {
        self.decode_with(line, CodecOptions::standard())
    }

    fn decode_with(&mut self, line: &str, opts: &CodecOptions) -> Result<(), RecordError> {
        self.body_mut().decode_with(line, opts)
    }

    fn encode(&self) -> Result<String, RecordError> {
        self.encode_with(CodecOptions::standard())
    }

    fn encode_with(&self, opts: &CodecOptions) -> Result<String, RecordError> {
        self.body().encode_with(opts)
    }

    /// Fresh record decoded from `line`.
    fn from_line(line: &str) -> Result<Self, RecordError> {
        let mut record = Self::default();
        record.decode(line)?;
        Ok(record)
    }

    fn get(&self, name: &str) -> Result<Option<&Value>, RecordError> {
        self.body().get(name)
    }

    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        self.body_mut().set(name, value)
    }
}

macro_rules! record_enum {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        /// A decoded line of any schema.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Record {
            $($variant($ty),)*
        }

        impl Record {
            /// Empty record of the given schema, ready for decoding.
            pub fn empty(kind: RecordKind) -> Self {
                match kind {
                    $(RecordKind::$variant => Record::$variant($ty::new()),)*
                }
            }

            pub fn body(&self) -> &RecordBody {
                match self {
                    $(Record::$variant(r) => r.body(),)*
                }
            }

            pub fn body_mut(&mut self) -> &mut RecordBody {
                match self {
                    $(Record::$variant(r) => r.body_mut(),)*
                }
            }
        }

        $(
            impl From<$ty> for Record {
                fn from(r: $ty) -> Self {
                    Record::$variant(r)
                }
            }
        )*
    };
}

record_enum! {
    Initial(InitialRecord),
    OldBalance(OldBalanceRecord),
    Transaction(TransactionRecord),
    TransactionPurpose(TransactionPurposeRecord),
    TransactionDetail(TransactionDetailRecord),
    Information(InformationRecord),
    InformationPurpose(InformationPurposeRecord),
    InformationDetail(InformationDetailRecord),
    ExtraMessage(ExtraMessageRecord),
    NewBalance(NewBalanceRecord),
    Final(FinalRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        self.body().kind()
    }

    pub fn decode(&mut self, line: &str) -> Result<(), RecordError> {
        self.decode_with(line, CodecOptions::standard())
    }

    pub fn decode_with(&mut self, line: &str, opts: &CodecOptions) -> Result<(), RecordError> {
        self.body_mut().decode_with(line, opts)
    }

    pub fn encode(&self) -> Result<String, RecordError> {
        self.encode_with(CodecOptions::standard())
    }

    pub fn encode_with(&self, opts: &CodecOptions) -> Result<String, RecordError> {
        self.body().encode_with(opts)
    }

    pub fn get(&self, name: &str) -> Result<Option<&Value>, RecordError> {
        self.body().get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        self.body_mut().set(name, value)
    }
}

/// Identification digit field, pre-set to the schema constant.
pub(crate) fn identification(kind: RecordKind) -> Layout {
    Layout::Internal(
        "identification",
        Field::numeric(0, 1).preset(Value::Integer(kind.identification().into())),
    )
}

/// Article digit field for identification 2 and 3.
pub(crate) fn article(kind: RecordKind) -> Layout {
    let digit = kind.article().unwrap_or_default();
    Layout::Internal(
        "article",
        Field::numeric(1, 1).preset(Value::Integer(digit.into())),
    )
}

/// Four-digit zero-padded serial/detail counters at offsets 2 and 6.
pub(crate) fn sequence_numbers() -> [Layout; 2] {
    [
        Layout::Named(
            "serial_number",
            Field::numeric(2, 4).pad('0').align(crate::fields::Align::Right),
        ),
        Layout::Named(
            "detail_number",
            Field::numeric(6, 4).pad('0').align(crate::fields::Align::Right),
        ),
    ]
}
