mod common;

use chrono::NaiveDate;
use codalib::{
    records::{
        ExtraMessageRecord, FinalRecord, InitialRecord, NewBalanceRecord, OldBalanceRecord,
        TransactionRecord,
    },
    CodaRecord, FieldError, Record, RecordError, RecordKind, Value, RECORD_LENGTH,
};
use rust_decimal::Decimal;

#[test]
fn every_sample_roundtrips() {
    for (kind, line) in RecordKind::ALL.into_iter().zip(common::ALL) {
        let mut record = Record::empty(kind);
        record
            .decode(line)
            .unwrap_or_else(|e| panic!("{kind}: {e}"));
        assert_eq!(record.kind(), kind);
        assert_eq!(record.encode().expect("encode"), line, "{kind}");
    }
}

#[test]
fn every_layout_is_contiguous() {
    for kind in RecordKind::ALL {
        let record = Record::empty(kind);
        assert!(record.body().is_contiguous(), "{kind}");
        let total: usize = record.body().fields().map(|f| f.length()).sum();
        assert_eq!(total, RECORD_LENGTH, "{kind}");
    }
}

#[test]
fn initial_accessors() {
    let rec = InitialRecord::from_line(common::INITIAL).expect("initial");
    assert_eq!(rec.creation_date(), NaiveDate::from_ymd_opt(2016, 9, 19));
    assert_eq!(rec.bank_identification_number(), Some(725));
    assert_eq!(rec.application_code(), Some("05"));
    assert!(!rec.is_duplicate());
    assert_eq!(rec.reference().map(str::trim_end), Some("00417969"));
    assert_eq!(rec.addressee().map(str::trim_end), Some("VIKINGCO NV"));
    assert_eq!(rec.bic().map(str::trim_end), Some("KREDBEBB"));
    assert_eq!(rec.account_holder_reference(), Some(886_946_917));
    assert_eq!(rec.version_code(), Some(2));
}

#[test]
fn old_balance_accessors() {
    let rec = OldBalanceRecord::from_line(common::OLD_BALANCE).expect("old balance");
    assert_eq!(rec.account_structure(), Some(2));
    assert_eq!(rec.serial_number(), Some(256));
    assert_eq!(
        rec.account_number().map(str::trim_end),
        Some("BE02737026917240                  EUR")
    );
    assert_eq!(rec.balance_sign(), Some(0));
    assert_eq!(rec.old_balance(), Some(Decimal::new(5_020_346_650, 3)));
    assert_eq!(rec.balance_date(), NaiveDate::from_ymd_opt(2016, 9, 15));
    assert_eq!(
        rec.account_description().map(str::trim_end),
        Some("KBC-Bedrijfsrekening")
    );
    assert_eq!(rec.bank_statement_serial_number(), Some(119));
}

#[test]
fn transaction_accessors() {
    let rec = TransactionRecord::from_line(common::TRANSACTION).expect("transaction");
    assert_eq!(rec.serial_number(), Some(22));
    assert_eq!(rec.detail_number(), Some(0));
    assert_eq!(rec.balance(), Some(Decimal::new(460, 3)));
    assert_eq!(rec.transaction_code(), Some(10_550_000));
    assert_eq!(rec.booking_date(), NaiveDate::from_ymd_opt(2016, 9, 14));
    assert_eq!(rec.bank_statement_serial_number(), Some(256));
}

#[test]
fn trailer_accessors() {
    let rec = NewBalanceRecord::from_line(common::NEW_BALANCE).expect("new balance");
    assert_eq!(rec.serial_number(), Some(231));
    assert_eq!(rec.new_balance(), Some(Decimal::new(5_973_199_110, 3)));
    assert_eq!(rec.balance_date(), NaiveDate::from_ymd_opt(2016, 8, 18));

    let rec = FinalRecord::from_line(common::FINAL).expect("final");
    assert_eq!(rec.number_records(), Some(15));
    assert_eq!(rec.debit(), Some(Decimal::new(44_841_390, 3)));
    assert_eq!(rec.credit(), Some(Decimal::new(0, 3)));
    assert_eq!(rec.multiple_file_code(), Some(2));

    let rec = ExtraMessageRecord::from_line(common::EXTRA_MESSAGE).expect("extra message");
    assert_eq!(rec.serial_number(), Some(1));
    assert_eq!(
        rec.extra_message().map(str::trim_end),
        Some("Uw rekening werd gecrediteerd door een overschrijving")
    );
}

#[test]
fn built_record_encodes_to_full_line() {
    let mut rec = InitialRecord::new();
    rec.set_creation_date(NaiveDate::from_ymd_opt(2016, 9, 19).expect("date"))
        .set_bank_identification_number(725)
        .set_reference("00417969")
        .set_addressee("VIKINGCO NV")
        .set_bic("KREDBEBB")
        .set_account_holder_reference(886_946_917)
        .set_free("00000");

    let line = rec.encode().expect("encode");
    assert_eq!(line.chars().count(), RECORD_LENGTH);
    assert_eq!(line, common::INITIAL);

    rec.set_duplicate(true);
    let line = rec.encode().expect("encode");
    assert_eq!(&line[16..17], "D");
}

#[test]
fn built_final_record() {
    let mut rec = FinalRecord::new();
    rec.set_number_records(15)
        .set_debit(Decimal::new(4_484_139, 2))
        .set_credit(Decimal::ZERO)
        .set_multiple_file_code(2);
    assert_eq!(rec.encode().expect("encode"), common::FINAL);
}

#[test]
fn missing_date_fails_encode() {
    let rec = OldBalanceRecord::new();
    match rec.encode() {
        Err(RecordError::Field {
            kind: RecordKind::OldBalance,
            field: "balance_date",
            position: 58,
            source: FieldError::MissingValue,
        }) => {}
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn decode_rejects_other_schema() {
    let mut rec = OldBalanceRecord::new();
    match rec.decode(common::NEW_BALANCE) {
        Err(RecordError::Field { field, .. }) => assert_eq!(field, "identification"),
        other => panic!("unexpected {other:?}"),
    }

    // та же идентификация, другой артикул
    let mut rec = Record::empty(RecordKind::Transaction);
    match rec.decode(common::TRANSACTION_DETAIL) {
        Err(RecordError::Field { field, .. }) => assert_eq!(field, "article"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn decode_rejects_wrong_line_length() {
    let mut rec = FinalRecord::new();
    let short = &common::FINAL[..127];
    assert_eq!(
        rec.decode(short),
        Err(RecordError::LengthMismatch {
            kind: RecordKind::Final,
            expected: 128,
            actual: 127,
        })
    );
}

#[test]
fn field_error_reports_position() {
    let mut line = common::TRANSACTION.to_string();
    line.replace_range(53..54, "X");
    let mut rec = TransactionRecord::new();
    match rec.decode(&line) {
        Err(RecordError::Field {
            field, position, ..
        }) => {
            assert_eq!(field, "transaction_code");
            assert_eq!(position, 53);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_names_are_strict_on_read_permissive_on_write() {
    let mut rec = Record::empty(RecordKind::Initial);
    rec.decode(common::INITIAL).expect("decode");

    assert!(matches!(
        rec.get("no_such_field"),
        Err(RecordError::UnknownAttribute { .. })
    ));
    // служебные поля по имени тоже недоступны
    assert!(rec.get("reserved").is_err());
    assert!(rec.get("identification").is_err());

    rec.set("note", "checked").expect("auxiliary attribute");
    assert_eq!(rec.get("note").expect("note"), Some(&Value::from("checked")));
    // доп. атрибуты в строку не попадают
    assert_eq!(rec.encode().expect("encode"), common::INITIAL);

    rec.set("bank_identification_number", 1u64).expect("field");
    assert_eq!(
        rec.get("bank_identification_number").expect("field"),
        Some(&Value::Integer(1))
    );
    assert!(matches!(
        rec.set("creation_date", "yesterday"),
        Err(RecordError::Field {
            source: FieldError::WrongValueKind { .. },
            ..
        })
    ));
}

#[test]
fn serializes_named_fields_only() {
    let rec = FinalRecord::from_line(common::FINAL).expect("final");
    let json = serde_json::to_value(&rec).expect("json");
    assert_eq!(json["kind"], "Final");
    assert_eq!(json["number_records"], 15);
    assert_eq!(json["debit"], "44841.390");
    assert!(json.get("reserved").is_none());
    assert!(json.get("identification").is_none());
}

#[test]
fn kind_is_not_an_auxiliary_attribute() {
    let mut rec = FinalRecord::from_line(common::FINAL).expect("final");
    assert_eq!(
        rec.set("kind", "Initial"),
        Err(RecordError::ReservedAttribute {
            kind: RecordKind::Final,
            name: "kind".into(),
        })
    );
    assert!(rec.body().attributes().is_empty());

    rec.set("source", "bank export").expect("attribute");
    let json = serde_json::to_string(&rec).expect("json");
    assert_eq!(json.matches("\"kind\"").count(), 1);
    assert!(json.contains("\"source\":\"bank export\""));
}
