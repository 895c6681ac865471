//! Строки из реальной выписки, по одной на схему где есть.

#![allow(dead_code)]

pub const INITIAL: &str = concat!(
    "0000019091672505        00417969  VIKINGCO NV               KRED",
    "BEBB   00886946917 00000                                       2",
);

pub const OLD_BALANCE: &str = concat!(
    "12256BE02737026917240                  EUR0000005020346650150916",
    "VIKINGCO NV               KBC-Bedrijfsrekening               119",
);

pub const TRANSACTION: &str = concat!(
    "2100220000AQQE12627 BHKDGLGTESC0000000000000460140916105500000  ",
    "                                                   14091625611 0",
);

pub const TRANSACTION_PURPOSE: &str = concat!(
    "2200220000                                                     C",
    "20160903040112-0001F                                         0 0",
);

pub const TRANSACTION_DETAIL: &str = concat!(
    "2300230105BEBEBEBEBEBEBEBE                     mvstagingpos20iii",
    "iiiiiiiii Test    1-trtrtrtr                            0    0 1",
);

pub const INFORMATION: &str = concat!(
    "3100230106AQPJ06455 SDDBCDBCRFN505500001001mvstagingpos20iiiiiii",
    "iiiii Test                                                   0 0",
);

pub const INFORMATION_PURPOSE: &str = concat!(
    "3200230106BE12 3456 7890 AQPJ06455                              ",
    "                                                             0 0",
);

pub const INFORMATION_DETAIL: &str = concat!(
    "3300230106Verzonden door KBC Bank                               ",
    "                                                             0 1",
);

pub const EXTRA_MESSAGE: &str = concat!(
    "4 00010000                      Uw rekening werd gecrediteerd do",
    "or een overschrijving                                          0",
);

pub const NEW_BALANCE: &str = concat!(
    "8231BE02737026917240                  EUR0000005973199110180816 ",
    "                                                               0",
);

pub const FINAL: &str = concat!(
    "9               000015000000044841390000000000000000            ",
    "                                                               2",
);

pub const ALL: [&str; 11] = [
    INITIAL,
    OLD_BALANCE,
    TRANSACTION,
    TRANSACTION_PURPOSE,
    TRANSACTION_DETAIL,
    INFORMATION,
    INFORMATION_PURPOSE,
    INFORMATION_DETAIL,
    EXTRA_MESSAGE,
    NEW_BALANCE,
    FINAL,
];
