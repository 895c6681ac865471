//! Заголовок выписки: начальная запись (0) и старый остаток (1).

use super::{identification, Layout, RecordKind};
use crate::fields::{Align, Field, Value};

schema!(
    /// Opening line of a statement file: creation date, bank and addressee.
    InitialRecord,
    Initial,
    initial_layout
);

impl InitialRecord {
    pub const IDENTIFICATION: u8 = 0;
    pub const APPLICATION_CODE: &'static str = "05";
    pub const VERSION_CODE: u64 = 2;
    /// Literal at offset 16 marking a duplicate file.
    pub const DUPLICATE_CODE: &'static str = "D";

    accessors! {
        date creation_date / set_creation_date;
        integer bank_identification_number / set_bank_identification_number;
        text application_code / set_application_code;
        text reference / set_reference;
        text addressee / set_addressee;
        text bic / set_bic;
        integer account_holder_reference / set_account_holder_reference;
        text free / set_free;
        text transaction_reference / set_transaction_reference;
        text related_reference / set_related_reference;
        integer version_code / set_version_code;
    }

    pub fn is_duplicate(&self) -> bool {
        self.body
            .value("duplicate")
            .and_then(Value::as_flag)
            .unwrap_or(false)
    }

    pub fn set_duplicate(&mut self, duplicate: bool) -> &mut Self {
        self.body.put("duplicate", Value::Flag(duplicate));
        self
    }
}

fn initial_layout() -> Vec<Layout> {
    vec![
        identification(RecordKind::Initial),
        Layout::Reserved(Field::zeroes(1, 4)),
        Layout::Named("creation_date", Field::date(5)),
        Layout::Named(
            "bank_identification_number",
            Field::numeric(11, 3).pad('0').align(Align::Right),
        ),
        Layout::Named(
            "application_code",
            Field::text(14, 2).preset(Value::from(InitialRecord::APPLICATION_CODE)),
        ),
        Layout::Named(
            "duplicate",
            Field::flag(16, InitialRecord::DUPLICATE_CODE, " "),
        ),
        Layout::Reserved(Field::empty(17, 7)),
        Layout::Named("reference", Field::text(24, 10)),
        Layout::Named("addressee", Field::text(34, 26)),
        Layout::Named("bic", Field::text(60, 11)),
        Layout::Named(
            "account_holder_reference",
            Field::numeric(71, 11).head("0").pad('0').align(Align::Right),
        ),
        Layout::Reserved(Field::empty(82, 1)),
        Layout::Named("free", Field::text(83, 5)),
        Layout::Named("transaction_reference", Field::text(88, 16).tag("20/1")),
        Layout::Named("related_reference", Field::text(104, 16).tag("21/1")),
        Layout::Reserved(Field::empty(120, 7)),
        Layout::Named(
            "version_code",
            Field::numeric(127, 1).preset(Value::Integer(InitialRecord::VERSION_CODE)),
        ),
    ]
}

schema!(
    /// Account and balance at the start of the statement.
    OldBalanceRecord,
    OldBalance,
    old_balance_layout
);

impl OldBalanceRecord {
    pub const IDENTIFICATION: u8 = 1;

    accessors! {
        integer account_structure / set_account_structure;
        integer serial_number / set_serial_number;
        text account_number / set_account_number;
        integer balance_sign / set_balance_sign;
        amount old_balance / set_old_balance;
        date balance_date / set_balance_date;
        text account_holder_name / set_account_holder_name;
        text account_description / set_account_description;
        integer bank_statement_serial_number / set_bank_statement_serial_number;
    }
}

fn old_balance_layout() -> Vec<Layout> {
    vec![
        identification(RecordKind::OldBalance),
        Layout::Named("account_structure", Field::numeric(1, 1)),
        Layout::Named(
            "serial_number",
            Field::numeric(2, 3).pad('0').align(Align::Right).tag("28c/1"),
        ),
        Layout::Named("account_number", Field::text(5, 37)),
        Layout::Named("balance_sign", Field::numeric(42, 1).tag("60F/1")),
        Layout::Named("old_balance", Field::balance(43).tag("60F/4")),
        Layout::Named("balance_date", Field::date(58).tag("60F/2")),
        Layout::Named("account_holder_name", Field::text(64, 26)),
        Layout::Named("account_description", Field::text(90, 35)),
        Layout::Named(
            "bank_statement_serial_number",
            Field::numeric(125, 3).pad('0').align(Align::Right),
        ),
    ]
}
