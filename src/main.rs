use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use addressbook::record::{InputRow, Record};
use color_eyre::eyre::{eyre, WrapErr};
use tracing::{error, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const OUTPUT_ENV: &str = "ADDRESSBOOK_OUTPUT";
const DEFAULT_OUTPUT: &str = "result/addresses.csv";

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("cannot install error report handler: {:?}", e);
    }
    init_tracing();

    if let Err(e) = run() {
        error!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(ErrorLayer::default())
        .init();
}

fn run() -> color_eyre::Result<()> {
    let (in_file, out_file) = paths(std::env::args_os().skip(1), std::env::var_os(OUTPUT_ENV))?;

    info!("reading addresses from [{}]", in_file.display());
    let file = std::fs::File::open(&in_file)
        .wrap_err_with(|| format!("cannot open [{}]", in_file.display()))?;
    let rows = load_rows(file)?;

    let records = validate_rows(rows);
    let invalid = records.iter().filter(|r| !r.valid).count();
    info!("validated [{}] addresses, [{}] invalid", records.len(), invalid);

    info!("saving records to [{}]", out_file.display());
    save_records(records, &out_file)
}

/// input path from the first argument, output path from `ADDRESSBOOK_OUTPUT`
///
/// * `args` - command line arguments, program name excluded
/// * `output` - value of `ADDRESSBOOK_OUTPUT`, if set
fn paths(
    mut args: impl Iterator<Item = OsString>,
    output: Option<OsString>,
) -> color_eyre::Result<(PathBuf, PathBuf)> {
    let in_file = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| eyre!("usage: addressbook <input.csv>"))?;
    let out_file = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    Ok((in_file, out_file))
}

fn load_rows(reader: impl io::Read) -> color_eyre::Result<Vec<InputRow>> {
    // rows may leave out the trailing `private` column
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    rdr.deserialize()
        .enumerate()
        .map(|(idx, row)| row.wrap_err_with(|| format!("malformed input row [{}]", idx + 1)))
        .collect()
}

fn validate_rows(rows: Vec<InputRow>) -> Vec<Record> {
    let total = rows.len();
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let record = Record::from_row(idx + 1, row);
            if let Some(err) = record.error() {
                warn!("[{}/{total}] rejected [{}]: {}", idx + 1, record.address, err);
            }
            record
        })
        .collect()
}

/// write result to CSV file
fn save_records(records: Vec<Record>, save_path: impl AsRef<Path>) -> color_eyre::Result<()> {
    if let Some(parent) = save_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(save_path.as_ref())
        .wrap_err_with(|| format!("cannot create [{}]", save_path.as_ref().display()))?;
    write_records(records, file)
}

fn write_records(mut records: Vec<Record>, writer: impl io::Write) -> color_eyre::Result<()> {
    // valid first, then by address
    records.sort_by(|r1, r2| (!r1.valid, &r1.address).cmp(&(!r2.valid, &r2.address)));
    let mut wtr = csv::Writer::from_writer(writer);
    for record in &records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
