use codalib::{
    traits::{ReadFormat, WriteFormat},
    CodaFile,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdin -> CodaFile -> stdout, строки пишутся с CR/LF
    let coda = CodaFile::read(std::io::BufReader::new(std::io::stdin()))?;
    for record in &coda {
        eprintln!("{}", record.kind());
    }
    coda.write(std::io::stdout())?;
    Ok(())
}
