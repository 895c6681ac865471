mod common;

use chrono::NaiveDate;
use codalib::{
    fields::Field, CodaError, CodaFile, CodecConfig, CodecOptions, FieldError, Record,
    RecordError, RecordKind,
};

#[test]
fn config_from_json_with_defaults() {
    let config: CodecConfig =
        serde_json::from_str(r#"{ "truncate_overflow": false }"#).expect("config");
    assert!(!config.truncate_overflow);
    assert!(config.boolean_fallback);
    assert_eq!(config.century_pivot, 50);
    assert_eq!(config.extra_characters, "");

    let back = serde_json::to_string(&config).expect("json");
    let again: CodecConfig = serde_json::from_str(&back).expect("config");
    assert_eq!(again, config);
}

#[test]
fn overflow_is_an_error_without_truncation() {
    let opts = CodecOptions::from_config(&CodecConfig {
        truncate_overflow: false,
        ..CodecConfig::default()
    })
    .expect("options");

    let f = Field::text(0, 3).with_value("abcdef").expect("value");
    assert_eq!(
        f.encode_with(&opts),
        Err(FieldError::LengthMismatch {
            expected: 3,
            actual: 6
        })
    );
    assert_eq!(f.encode().expect("truncated"), "abc");
}

#[test]
fn strict_booleans() {
    let opts = CodecOptions::from_config(&CodecConfig {
        boolean_fallback: false,
        ..CodecConfig::default()
    })
    .expect("options");

    let mut f = Field::boolean(0, 1, "D", " ").expect("field");
    assert!(matches!(
        f.decode_with("X", &opts),
        Err(FieldError::PatternMismatch { .. })
    ));
    assert!(f.decode_with("D", &opts).is_ok());
}

#[test]
fn extra_characters_widen_text_fields() {
    let mut line = common::TRANSACTION_DETAIL.to_string();
    line.replace_range(82..83, "+");

    let mut record = Record::empty(RecordKind::TransactionDetail);
    assert!(matches!(
        record.decode(&line),
        Err(RecordError::Field {
            field: "description",
            ..
        })
    ));

    let opts = CodecOptions::try_from(&CodecConfig {
        extra_characters: "+".into(),
        ..CodecConfig::default()
    })
    .expect("options");
    record.decode_with(&line, &opts).expect("decode");
    assert_eq!(record.encode_with(&opts).expect("encode"), line);
}

#[test]
fn custom_century_pivot() {
    let opts = CodecOptions::from_config(&CodecConfig {
        century_pivot: 90,
        ..CodecConfig::default()
    })
    .expect("options");
    let mut f = Field::date(0);
    assert_eq!(
        f.decode_with("280386", &opts).expect("decode").as_date(),
        NaiveDate::from_ymd_opt(2086, 3, 28)
    );
}

#[test]
fn file_uses_its_own_options() {
    let opts = CodecOptions::from_config(&CodecConfig {
        extra_characters: "+".into(),
        ..CodecConfig::default()
    })
    .expect("options");
    let mut line = common::TRANSACTION_DETAIL.to_string();
    line.replace_range(82..83, "+");

    let mut strict = CodaFile::new();
    assert!(matches!(
        strict.decode(&line),
        Err(CodaError::Record { line: 1, .. })
    ));

    let mut coda = CodaFile::with_options(opts);
    coda.decode(&line).expect("decode");
    assert_eq!(coda.encode().expect("encode"), line);
}

#[test]
fn invalid_pivot_is_rejected() {
    let err = CodecOptions::from_config(&CodecConfig {
        century_pivot: 100,
        ..CodecConfig::default()
    })
    .expect_err("pivot");
    assert!(matches!(err, CodaError::Config(_)));
}
