//! Движения по счёту (2) и дополнительная информация (3), по три артикула:
//! основная строка, назначение, детали.

use super::{article, identification, sequence_numbers, Layout, RecordKind};
use crate::fields::{Align, Field};

/// Identification and article digits followed by the serial/detail counters.
fn prefix(kind: RecordKind) -> Vec<Layout> {
    let mut layout = vec![identification(kind), article(kind)];
    layout.extend(sequence_numbers());
    layout
}

schema!(
    /// Main movement line: amount, dates and transaction code.
    TransactionRecord,
    Transaction,
    transaction_layout
);

impl TransactionRecord {
    pub const IDENTIFICATION: u8 = 2;
    pub const ARTICLE: u8 = 1;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text bank_reference_number / set_bank_reference_number;
        integer balance_sign / set_balance_sign;
        amount balance / set_balance;
        date balance_date / set_balance_date;
        integer transaction_code / set_transaction_code;
        integer reference_type / set_reference_type;
        text reference / set_reference;
        date booking_date / set_booking_date;
        integer bank_statement_serial_number / set_bank_statement_serial_number;
        integer globalisation_code / set_globalisation_code;
        integer transaction_sequence / set_transaction_sequence;
        integer information_sequence / set_information_sequence;
    }
}

fn transaction_layout() -> Vec<Layout> {
    let mut layout = prefix(RecordKind::Transaction);
    layout.extend([
        Layout::Named("bank_reference_number", Field::text(10, 21).tag("61/8")),
        Layout::Named("balance_sign", Field::numeric(31, 1).tag("61/3")),
        Layout::Named("balance", Field::balance(32).tag("61/5")),
        Layout::Named("balance_date", Field::date(47).tag("61/1")),
        Layout::Named(
            "transaction_code",
            Field::numeric(53, 8).pad('0').align(Align::Right).tag("61/6"),
        ),
        Layout::Named("reference_type", Field::numeric(61, 1)),
        Layout::Named("reference", Field::text(62, 53).tag("61/9")),
        Layout::Named("booking_date", Field::date(115).tag("61/2")),
        Layout::Named(
            "bank_statement_serial_number",
            Field::numeric(121, 3).pad('0').align(Align::Right).tag("28/c"),
        ),
        Layout::Named("globalisation_code", Field::numeric(124, 1)),
        Layout::Named("transaction_sequence", Field::numeric(125, 1)),
        Layout::Reserved(Field::empty(126, 1)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}

schema!(
    /// Counterparty references and purpose codes of a movement.
    TransactionPurposeRecord,
    TransactionPurpose,
    transaction_purpose_layout
);

impl TransactionPurposeRecord {
    pub const IDENTIFICATION: u8 = 2;
    pub const ARTICLE: u8 = 2;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text bank_statement / set_bank_statement;
        text client_reference / set_client_reference;
        text bic / set_bic;
        text purpose_category / set_purpose_category;
        text purpose / set_purpose;
        integer transaction_sequence / set_transaction_sequence;
        integer information_sequence / set_information_sequence;
    }
}

fn transaction_purpose_layout() -> Vec<Layout> {
    let mut layout = prefix(RecordKind::TransactionPurpose);
    layout.extend([
        Layout::Named("bank_statement", Field::text(10, 53)),
        Layout::Named("client_reference", Field::text(63, 35)),
        Layout::Named("bic", Field::text(98, 11)),
        Layout::Reserved(Field::empty(109, 8)),
        Layout::Named("purpose_category", Field::text(117, 4)),
        Layout::Named("purpose", Field::text(121, 4)),
        Layout::Named("transaction_sequence", Field::numeric(125, 1)),
        Layout::Reserved(Field::empty(126, 1)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}

schema!(
    /// Counterparty account and free description of a movement.
    TransactionDetailRecord,
    TransactionDetail,
    transaction_detail_layout
);

impl TransactionDetailRecord {
    pub const IDENTIFICATION: u8 = 2;
    pub const ARTICLE: u8 = 3;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text account_number / set_account_number;
        text account_holder_name / set_account_holder_name;
        text description / set_description;
        integer information_sequence / set_information_sequence;
    }
}

fn transaction_detail_layout() -> Vec<Layout> {
    let mut layout = prefix(RecordKind::TransactionDetail);
    layout.extend([
        Layout::Named("account_number", Field::text(10, 37)),
        Layout::Named("account_holder_name", Field::text(47, 35)),
        Layout::Named("description", Field::text(82, 43)),
        Layout::Reserved(Field::zeroes(125, 1)),
        Layout::Reserved(Field::empty(126, 1)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}

schema!(
    /// Structured communication attached to a movement.
    InformationRecord,
    Information,
    information_layout
);

impl InformationRecord {
    pub const IDENTIFICATION: u8 = 3;
    pub const ARTICLE: u8 = 1;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text reference_number / set_reference_number;
        integer transaction_code / set_transaction_code;
        integer reference_type / set_reference_type;
        text reference / set_reference;
        integer transaction_sequence / set_transaction_sequence;
        integer information_sequence / set_information_sequence;
    }
}

fn information_layout() -> Vec<Layout> {
    let mut layout = prefix(RecordKind::Information);
    layout.extend([
        Layout::Named("reference_number", Field::text(10, 21).tag("61/8")),
        Layout::Named(
            "transaction_code",
            Field::numeric(31, 8).pad('0').align(Align::Right).tag("61/6"),
        ),
        Layout::Named("reference_type", Field::numeric(39, 1)),
        Layout::Named("reference", Field::text(40, 73).tag("86")),
        Layout::Reserved(Field::empty(113, 12)),
        Layout::Named("transaction_sequence", Field::numeric(125, 1)),
        Layout::Reserved(Field::empty(126, 1)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}

schema!(
    InformationPurposeRecord,
    InformationPurpose,
    information_purpose_layout
);

impl InformationPurposeRecord {
    pub const IDENTIFICATION: u8 = 3;
    pub const ARTICLE: u8 = 2;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text bank_reference_number / set_bank_reference_number;
        integer transaction_sequence / set_transaction_sequence;
        integer information_sequence / set_information_sequence;
    }
}

fn information_purpose_layout() -> Vec<Layout> {
    let mut layout = prefix(RecordKind::InformationPurpose);
    layout.extend([
        Layout::Named("bank_reference_number", Field::text(10, 105)),
        Layout::Reserved(Field::empty(115, 10)),
        Layout::Named("transaction_sequence", Field::numeric(125, 1)),
        Layout::Reserved(Field::empty(126, 1)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}

schema!(
    InformationDetailRecord,
    InformationDetail,
    information_detail_layout
);

impl InformationDetailRecord {
    pub const IDENTIFICATION: u8 = 3;
    pub const ARTICLE: u8 = 3;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text bank_reference_number / set_bank_reference_number;
        integer information_sequence / set_information_sequence;
    }
}

fn information_detail_layout() -> Vec<Layout> {
    let mut layout = prefix(RecordKind::InformationDetail);
    layout.extend([
        Layout::Named("bank_reference_number", Field::text(10, 90)),
        Layout::Reserved(Field::empty(100, 25)),
        Layout::Reserved(Field::zeroes(125, 1)),
        Layout::Reserved(Field::empty(126, 1)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}
