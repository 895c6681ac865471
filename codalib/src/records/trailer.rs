//! Конец выписки: свободное сообщение (4), новый остаток (8), итог (9).

use super::{identification, Layout, RecordKind};
use crate::fields::{Align, Field};

schema!(
    /// Free-form message from the bank, outside any movement.
    ExtraMessageRecord,
    ExtraMessage,
    extra_message_layout
);

impl ExtraMessageRecord {
    pub const IDENTIFICATION: u8 = 4;

    accessors! {
        integer serial_number / set_serial_number;
        integer detail_number / set_detail_number;
        text extra_message / set_extra_message;
        integer information_sequence / set_information_sequence;
    }
}

fn extra_message_layout() -> Vec<Layout> {
    let mut layout = vec![
        identification(RecordKind::ExtraMessage),
        Layout::Reserved(Field::empty(1, 1)),
    ];
    layout.extend(super::sequence_numbers());
    layout.extend([
        Layout::Reserved(Field::empty(10, 22)),
        Layout::Named("extra_message", Field::text(32, 80)),
        Layout::Reserved(Field::empty(112, 15)),
        Layout::Named("information_sequence", Field::numeric(127, 1)),
    ]);
    layout
}

schema!(
    /// Account balance after all movements of the statement.
    NewBalanceRecord,
    NewBalance,
    new_balance_layout
);

impl NewBalanceRecord {
    pub const IDENTIFICATION: u8 = 8;

    accessors! {
        integer serial_number / set_serial_number;
        text account_number / set_account_number;
        integer balance_sign / set_balance_sign;
        amount new_balance / set_new_balance;
        date balance_date / set_balance_date;
        integer sequence / set_sequence;
    }
}

fn new_balance_layout() -> Vec<Layout> {
    vec![
        identification(RecordKind::NewBalance),
        Layout::Named(
            "serial_number",
            Field::numeric(1, 3).pad('0').align(Align::Right).tag("28c/1"),
        ),
        Layout::Named("account_number", Field::text(4, 37)),
        Layout::Named("balance_sign", Field::numeric(41, 1).tag("62F/1")),
        Layout::Named("new_balance", Field::balance(42).tag("62F/4")),
        Layout::Named("balance_date", Field::date(57).tag("62F/2")),
        Layout::Reserved(Field::empty(63, 64)),
        Layout::Named("sequence", Field::numeric(127, 1)),
    ]
}

schema!(
    /// Trailer: record count and debit/credit totals.
    FinalRecord,
    Final,
    final_layout
);

impl FinalRecord {
    pub const IDENTIFICATION: u8 = 9;

    accessors! {
        integer number_records / set_number_records;
        amount debit / set_debit;
        amount credit / set_credit;
        integer multiple_file_code / set_multiple_file_code;
    }
}

fn final_layout() -> Vec<Layout> {
    vec![
        identification(RecordKind::Final),
        Layout::Reserved(Field::empty(1, 15)),
        Layout::Named(
            "number_records",
            Field::numeric(16, 6).pad('0').align(Align::Right),
        ),
        Layout::Named("debit", Field::balance(22)),
        Layout::Named("credit", Field::balance(37)),
        Layout::Reserved(Field::empty(52, 75)),
        Layout::Named("multiple_file_code", Field::numeric(127, 1)),
    ]
}
