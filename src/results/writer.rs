//! Prediction file output
//!
//! One line per sample, every score printed in `%g` style (six significant
//! digits, trailing zeros removed) and followed by a single space:
//! `0.5 0.25 \n`

use crate::core::{DataIoError, Result};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write prediction scores to `path`, one row per line
pub fn write_predictions<P, R>(path: P, rows: &[R]) -> Result<()>
where
    P: AsRef<Path>,
    R: AsRef<[f64]>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(DataIoError::IoError)?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, rows)?;
    writer.flush().map_err(DataIoError::IoError)?;

    debug!("Wrote {} prediction rows to {:?}", rows.len(), path);
    Ok(())
}

/// Write prediction rows to any writer
pub fn write_rows<W: Write, R: AsRef<[f64]>>(writer: &mut W, rows: &[R]) -> Result<()> {
    for row in rows {
        for &value in row.as_ref() {
            write!(writer, "{} ", format_general(value)).map_err(DataIoError::IoError)?;
        }
        writeln!(writer).map_err(DataIoError::IoError)?;
    }
    Ok(())
}

/// Format a float like C's `%g`
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // the exponent after rounding to PRECISION significant digits
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
