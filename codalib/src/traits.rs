//! Адаптеры `CodaFile` к потокам ввода-вывода.

use crate::{
    codafile::{CodaFile, WIRE_SEPARATOR},
    error::Result,
};
use std::io::{BufRead, Write};

pub trait ReadFormat: Sized {
    fn read<R: BufRead>(r: R) -> Result<Self>;
}

pub trait WriteFormat {
    fn write<W: Write>(&self, w: W) -> Result<()>;
}

impl ReadFormat for CodaFile {
    fn read<R: BufRead>(mut r: R) -> Result<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;
        let mut coda = CodaFile::new();
        coda.decode(&text)?;
        Ok(coda)
    }
}

/// Writes CR/LF-terminated lines, the wire form of a CODA file.
impl WriteFormat for CodaFile {
    fn write<W: Write>(&self, mut w: W) -> Result<()> {
        let mut text = self.encode_with_separator(WIRE_SEPARATOR)?;
        if !self.is_empty() {
            text.push_str(WIRE_SEPARATOR);
        }
        w.write_all(text.as_bytes())?;
        w.flush()?;
        Ok(())
    }
}
