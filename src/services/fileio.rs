use crate::error::{QualifierError, Result};
use crate::models::{LoanOffer, RateSheet};
use csv::StringRecord;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Where qualifying loans are written when the applicant keeps the default
pub const DEFAULT_OUTPUT_PATH: &str = "./qualifying_loans.csv";

/// Column header shared by rate sheets and saved results
pub const HEADER: [&str; 6] = [
    "Lender",
    "Max Loan Amount",
    "Max LTV",
    "Max DTI",
    "Min Credit Score",
    "Interest Rate",
];

/// Load a rate sheet from a CSV file
///
/// The first row is treated as a header and discarded. Every remaining row
/// must hold the six rate sheet fields in order; any row that does not fails
/// the whole load.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<RateSheet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(QualifierError::RateSheetNotFound(path.to_path_buf()));
    }

    let file = fs::File::open(path)?;
    let offers = parse_rate_sheet(file)?;

    tracing::info!("Loaded {} offers from {}", offers.len(), path.display());
    Ok(offers)
}

/// Parse rate sheet rows from any reader, skipping the header row
///
/// The lender name is kept exactly as written; numeric fields may carry
/// surrounding whitespace.
pub fn parse_rate_sheet<R: Read>(reader: R) -> Result<RateSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut offers = Vec::new();
    for record in reader.records() {
        let record = record?;
        offers.push(parse_offer(&record)?);
    }

    Ok(offers)
}

fn parse_offer(record: &StringRecord) -> Result<LoanOffer> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();

    if record.len() != HEADER.len() {
        return Err(QualifierError::MalformedRow {
            line,
            reason: format!("expected {} fields, found {}", HEADER.len(), record.len()),
        });
    }

    let lender = record[0].to_string();
    if lender.trim().is_empty() {
        return Err(QualifierError::MalformedRow {
            line,
            reason: "lender name is empty".to_string(),
        });
    }

    Ok(LoanOffer {
        lender,
        max_loan_amount: parse_number(record, 1, line)?,
        max_ltv: parse_number(record, 2, line)?,
        max_dti: parse_number(record, 3, line)?,
        min_credit_score: parse_field(record, 4, line)?,
        interest_rate: parse_number(record, 5, line)?,
    })
}

fn parse_field<T: FromStr>(record: &StringRecord, index: usize, line: u64) -> Result<T> {
    let raw = &record[index];
    raw.trim().parse().map_err(|_| QualifierError::MalformedRow {
        line,
        reason: format!("{} is not a valid value: {:?}", HEADER[index], raw),
    })
}

// Rejects NaN and infinity, which f64::from_str would otherwise accept.
fn parse_number(record: &StringRecord, index: usize, line: u64) -> Result<f64> {
    let value: f64 = parse_field(record, index, line)?;
    if !value.is_finite() {
        return Err(QualifierError::MalformedRow {
            line,
            reason: format!("{} must be a finite number", HEADER[index]),
        });
    }
    Ok(value)
}

/// Save qualifying loans to a CSV file, creating parent directories as needed
///
/// Returns whether the file was written. Failures are logged and reported
/// as `false` so the caller can show its own message.
pub fn save_csv<P: AsRef<Path>>(rows: &[LoanOffer], path: P) -> bool {
    let path = path.as_ref();

    match write_csv(rows, path) {
        Ok(()) => {
            tracing::info!("Saved {} qualifying loans to {}", rows.len(), path.display());
            true
        }
        Err(e) => {
            tracing::error!("Failed to save qualifying loans to {}: {}", path.display(), e);
            false
        }
    }
}

fn write_csv(rows: &[LoanOffer], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for offer in rows {
        writer.write_record(offer.to_record())?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Lender,Max Loan Amount,Max LTV,Max DTI,Min Credit Score,Interest Rate
Bank of Big - Premier Option,300000,0.85,0.47,740,3.6
West Central Credit Union - Starter Plus,300000,0.85,0.42,640,4.35
";

    #[test]
    fn test_parse_skips_header() {
        let sheet = parse_rate_sheet(SAMPLE.as_bytes()).unwrap();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet[0].lender, "Bank of Big - Premier Option");
        assert_eq!(sheet[0].max_loan_amount, 300_000.0);
        assert_eq!(sheet[0].min_credit_score, 740);
        assert_eq!(sheet[1].max_dti, 0.42);
        assert_eq!(sheet[1].interest_rate, 4.35);
    }

    #[test]
    fn test_parse_trims_numbers_but_not_lender() {
        let data = "h1,h2,h3,h4,h5,h6\n Lender A , 1000 ,0.8, 0.4 , 700 ,3.1\n";
        let sheet = parse_rate_sheet(data.as_bytes()).unwrap();

        assert_eq!(sheet[0].lender, " Lender A ");
        assert_eq!(sheet[0].max_loan_amount, 1000.0);
        assert_eq!(sheet[0].min_credit_score, 700);
    }

    #[test]
    fn test_parse_rejects_blank_lender() {
        let data = "h1,h2,h3,h4,h5,h6\n   ,1000,0.8,0.4,700,3.1\n";
        assert!(parse_rate_sheet(data.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let data = "h1,h2,h3,h4,h5,h6\nLender A,lots,0.8,0.4,700,3.1\n";
        let err = parse_rate_sheet(data.as_bytes()).unwrap_err();

        match err {
            QualifierError::MalformedRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("Max Loan Amount"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let data = "h1,h2,h3,h4,h5,h6\nLender A,1000,0.8\n";
        let err = parse_rate_sheet(data.as_bytes()).unwrap_err();

        assert!(matches!(err, QualifierError::MalformedRow { .. }));
    }

    #[test]
    fn test_parse_rejects_fractional_credit_score() {
        let data = "h1,h2,h3,h4,h5,h6\nLender A,1000,0.8,0.4,700.5,3.1\n";
        assert!(parse_rate_sheet(data.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_rejects_nan() {
        let data = "h1,h2,h3,h4,h5,h6\nLender A,NaN,0.8,0.4,700,3.1\n";
        assert!(parse_rate_sheet(data.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_is_empty_sheet() {
        let sheet = parse_rate_sheet("h1,h2,h3,h4,h5,h6\n".as_bytes()).unwrap();
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_csv("/definitely/not/here/rate_sheet.csv").unwrap_err();
        assert!(matches!(err, QualifierError::RateSheetNotFound(_)));
        assert!(err.to_string().starts_with("Oops! Can't find this path"));
    }
}
