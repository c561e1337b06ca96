//! CSV batch conversion.
//!
//! Input needs an `amount` column; other columns are ignored. Output has
//! the header `amount,text` and one row per converted amount, in input order.

use crate::amount::parse_amount;
use crate::convert::to_baht_text;
use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::{Read, Write};

/// Raw input row.
#[derive(Debug, Deserialize)]
pub struct AmountRecord {
    pub amount: String,
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Converts every amount in `reader`, writing CSV to `writer`.
///
/// Rows that cannot be read, parsed, or converted are logged at warn level
/// and skipped.
pub fn convert_csv<R: Read, W: Write>(reader: R, writer: W) -> Result<BatchSummary> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["amount", "text"])?;

    let mut summary = BatchSummary::default();

    for (row_idx, result) in csv_reader.deserialize::<AmountRecord>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Row {}: CSV parse error: {}", row_num, e);
                summary.skipped += 1;
                continue;
            }
        };

        let converted = parse_amount(&record.amount).and_then(|amount| {
            let text = to_baht_text(&amount)?;
            Ok((amount, text))
        });

        match converted {
            Ok((amount, text)) => {
                csv_writer.write_record([amount.to_string(), text])?;
                summary.converted += 1;
                debug!("Row {}: Converted {}", row_num, amount);
            }
            Err(e) => {
                warn!("Row {}: {}", row_num, e);
                summary.skipped += 1;
            }
        }
    }

    csv_writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_batch(csv: &str) -> (String, BatchSummary) {
        let mut output = Vec::new();
        let summary = convert_csv(Cursor::new(csv), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_converts_rows_in_order() {
        let (output, summary) = run_batch("amount\n11\n0.05\n");
        assert_eq!(
            output,
            "amount,text\n11,สิบเอ็ดบาทถ้วน\n0.05,ศูนย์บาทห้าสตางค์\n"
        );
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_skips_bad_rows() {
        let (output, summary) = run_batch("amount\n1.234\nabc\n  2  \n");
        assert_eq!(output, "amount,text\n2,สองบาทถ้วน\n");
        assert_eq!(
            summary,
            BatchSummary {
                converted: 1,
                skipped: 2
            }
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let (output, _) = run_batch("invoice,amount\nA-1,100\n");
        assert_eq!(output, "amount,text\n100,หนึ่งร้อยบาทถ้วน\n");
    }

    #[test]
    fn test_empty_input_writes_header() {
        let (output, summary) = run_batch("amount\n");
        assert_eq!(output, "amount,text\n");
        assert_eq!(summary, BatchSummary::default());
    }
}
