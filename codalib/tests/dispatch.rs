mod common;

use codalib::{
    registry::{self, RECORD_TYPES},
    Record, RecordError, RecordKind,
};

#[test]
fn dispatch_picks_schema_per_line() {
    for (kind, line) in RecordKind::ALL.into_iter().zip(common::ALL) {
        assert_eq!(registry::classify(line).expect("classify"), kind);
        let record = registry::dispatch(line).unwrap_or_else(|e| panic!("{kind}: {e}"));
        assert_eq!(record.kind(), kind);
        assert_eq!(record.encode().expect("encode"), line);
    }
}

#[test]
fn dispatch_returns_typed_variant() {
    match registry::dispatch(common::NEW_BALANCE).expect("dispatch") {
        Record::NewBalance(rec) => assert_eq!(rec.serial_number(), Some(231)),
        other => panic!("unexpected {:?}", other.kind()),
    }
}

#[test]
fn lookup_by_digits() {
    let t = registry::lookup(2, Some(2)).expect("registered");
    assert_eq!(t.kind, RecordKind::TransactionPurpose);
    assert!(registry::lookup(2, None).is_none());
    assert!(registry::lookup(8, Some(1)).is_none());
    assert_eq!(RECORD_TYPES.len(), RecordKind::ALL.len());
}

#[test]
fn unknown_identification_is_an_error() {
    let line = format!("7{}", &common::FINAL[1..]);
    assert_eq!(
        registry::dispatch(&line).map(|r| r.kind()),
        Err(RecordError::UnknownRecordType {
            discriminant: "7".into()
        })
    );
}

#[test]
fn unknown_article_is_an_error() {
    let line = format!("34{}", &common::INFORMATION[2..]);
    assert_eq!(
        registry::dispatch(&line).map(|r| r.kind()),
        Err(RecordError::UnknownRecordType {
            discriminant: "34".into()
        })
    );
}

#[test]
fn dispatch_reports_field_failures() {
    let line = common::OLD_BALANCE.replace("150916", "159916");
    assert!(matches!(
        registry::dispatch(&line),
        Err(RecordError::Field {
            kind: RecordKind::OldBalance,
            field: "balance_date",
            ..
        })
    ));
}
