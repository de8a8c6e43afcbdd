//! CSV Dataset Loader Module
//! Reads a delimited bank-marketing table into typed records.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::record::{Dataset, Record, COLUMNS};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read '{path}': {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("header is missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("column '{field}' has non-numeric value '{value}' at record {record}")]
    Type {
        field: &'static str,
        record: usize,
        value: String,
    },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load a delimited text file into a [`Dataset`].
///
/// The first line must be a header containing every schema column, in any
/// order. Integer columns fail with [`DataError::Type`] on the first value
/// that does not parse; text columns are taken verbatim. No filtering or
/// reordering happens here: record order matches file order.
pub fn load_csv(path: &Path, delimiter: u8) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|source| DataError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let positions = column_positions(&headers)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        records.push(parse_record(&row, &positions, index)?);
    }

    Ok(Dataset::new(records))
}

/// Locate every schema column in the header, collecting all absences into a
/// single [`DataError::Schema`].
fn column_positions(headers: &csv::StringRecord) -> Result<[usize; COLUMNS.len()], DataError> {
    let mut positions = [0usize; COLUMNS.len()];
    let mut missing = Vec::new();

    for (slot, name) in COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h.trim() == *name) {
            Some(pos) => positions[slot] = pos,
            None => missing.push((*name).to_string()),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(DataError::Schema { missing })
    }
}

fn parse_record(
    row: &csv::StringRecord,
    positions: &[usize; COLUMNS.len()],
    index: usize,
) -> Result<Record, DataError> {
    let [age, job, marital, education, default, balance, housing, loan, contact, day, month, duration, campaign, pdays, previous, poutcome, deposit] =
        *positions;

    let text = |pos: usize| row.get(pos).unwrap_or("").to_string();
    let int = |pos: usize, field: &'static str| -> Result<i64, DataError> {
        let raw = row.get(pos).unwrap_or("");
        raw.trim().parse().map_err(|_| DataError::Type {
            field,
            record: index,
            value: raw.to_string(),
        })
    };

    Ok(Record {
        age: int(age, "age")?,
        job: text(job),
        marital: text(marital),
        education: text(education),
        default: text(default),
        balance: int(balance, "balance")?,
        housing: text(housing),
        loan: text(loan),
        contact: text(contact),
        day: int(day, "day")?,
        month: text(month),
        duration: int(duration, "duration")?,
        campaign: int(campaign, "campaign")?,
        pdays: int(pdays, "pdays")?,
        previous: int(previous, "previous")?,
        poutcome: text(poutcome),
        deposit: text(deposit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "age,job,marital,education,default,balance,housing,loan,contact,day,month,duration,campaign,pdays,previous,poutcome,deposit";

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = csv_file(&format!(
            "{HEADER}\n\
             30,admin.,single,tertiary,no,1200,yes,no,cellular,5,may,200,1,-1,0,unknown,yes\n\
             40,technician,married,secondary,no,-50,no,yes,telephone,12,jun,100,2,30,1,failure,no\n"
        ));

        let dataset = load_csv(file.path(), b',').unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.age, 30);
        assert_eq!(first.job, "admin.");
        assert_eq!(first.balance, 1200);
        assert_eq!(first.deposit, "yes");
        assert!(first.is_subscribed());

        let second = &dataset.records()[1];
        assert_eq!(second.age, 40);
        assert_eq!(second.pdays, 30);
        assert!(!second.is_subscribed());
    }

    #[test]
    fn header_may_be_in_any_order() {
        let file = csv_file(
            "deposit,age,job,marital,education,default,balance,housing,loan,contact,day,month,duration,campaign,pdays,previous,poutcome\n\
             yes,30,admin.,single,tertiary,no,1200,yes,no,cellular,5,may,200,1,-1,0,unknown\n",
        );

        let dataset = load_csv(file.path(), b',').unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.age, 30);
        assert_eq!(record.deposit, "yes");
        assert_eq!(record.poutcome, "unknown");
    }

    #[test]
    fn semicolon_delimiter_is_honored() {
        let content = format!(
            "{}\n30;admin.;single;tertiary;no;1200;yes;no;cellular;5;may;200;1;-1;0;unknown;yes\n",
            HEADER.replace(',', ";")
        );
        let file = csv_file(&content);

        let dataset = load_csv(file.path(), b';').unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].duration, 200);
    }

    #[test]
    fn missing_file_is_access_error() {
        let err = load_csv(Path::new("/no/such/bank.csv"), b',').unwrap_err();
        assert!(matches!(err, DataError::Access { .. }));
    }

    #[test]
    fn missing_columns_are_all_listed() {
        let file = csv_file(
            "age,job,education,default,balance,housing,loan,contact,day,month,duration,campaign,pdays,previous,poutcome\n",
        );

        let err = load_csv(file.path(), b',').unwrap_err();
        match err {
            DataError::Schema { missing } => {
                assert_eq!(missing, vec!["marital".to_string(), "deposit".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_names_field_and_record() {
        let file = csv_file(&format!(
            "{HEADER}\n\
             30,admin.,single,tertiary,no,1200,yes,no,cellular,5,may,200,1,-1,0,unknown,yes\n\
             forty,technician,married,secondary,no,0,no,no,cellular,1,jun,100,1,-1,0,unknown,no\n"
        ));

        let err = load_csv(file.path(), b',').unwrap_err();
        match err {
            DataError::Type {
                field,
                record,
                value,
            } => {
                assert_eq!(field, "age");
                assert_eq!(record, 1);
                assert_eq!(value, "forty");
            }
            other => panic!("expected type error, got {other:?}"),
        }
    }

    #[test]
    fn empty_data_section_is_an_empty_dataset() {
        let file = csv_file(&format!("{HEADER}\n"));
        let dataset = load_csv(file.path(), b',').unwrap();
        assert!(dataset.is_empty());
    }
}
