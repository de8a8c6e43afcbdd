//! CSV Dataset Export Module
//! Writes the dataset back to delimited text for download.

use std::path::Path;

use super::loader::DataError;
use super::record::Dataset;

/// Write the dataset to a delimited text file.
///
/// The header and column order follow the record schema; values round-trip
/// through their typed representation rather than byte-for-byte.
pub fn write_csv(dataset: &Dataset, path: &Path, delimiter: u8) -> Result<(), DataError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;

    for record in dataset.records() {
        writer.serialize(record)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::loader::load_csv;
    use super::super::record::COLUMNS;
    use super::*;
    use std::fs;

    const HEADER: &str =
        "age,job,marital,education,default,balance,housing,loan,contact,day,month,duration,campaign,pdays,previous,poutcome,deposit";

    #[test]
    fn round_trips_through_the_same_format() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bank.csv");
        let exported = dir.path().join("export.csv");

        fs::write(
            &source,
            format!(
                "{HEADER}\n\
                 30,admin.,single,tertiary,no,1200,yes,no,cellular,5,may,200,1,-1,0,unknown,yes\n\
                 40,technician,married,secondary,no,-50,no,yes,telephone,12,jun,100,2,30,1,failure,no\n"
            ),
        )
        .unwrap();

        let dataset = load_csv(&source, b',').unwrap();
        write_csv(&dataset, &exported, b',').unwrap();

        let reloaded = load_csv(&exported, b',').unwrap();
        assert_eq!(dataset, reloaded);
    }

    #[test]
    fn header_preserves_schema_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bank.csv");
        let exported = dir.path().join("export.csv");

        // Input columns deliberately shuffled; export normalizes to schema order.
        fs::write(
            &source,
            "deposit,age,job,marital,education,default,balance,housing,loan,contact,day,month,duration,campaign,pdays,previous,poutcome\n\
             yes,30,admin.,single,tertiary,no,1200,yes,no,cellular,5,may,200,1,-1,0,unknown\n",
        )
        .unwrap();

        let dataset = load_csv(&source, b',').unwrap();
        write_csv(&dataset, &exported, b',').unwrap();

        let text = fs::read_to_string(&exported).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn export_delimiter_is_configurable() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bank.csv");
        let exported = dir.path().join("export.csv");

        fs::write(
            &source,
            format!(
                "{HEADER}\n30,admin.,single,tertiary,no,1200,yes,no,cellular,5,may,200,1,-1,0,unknown,yes\n"
            ),
        )
        .unwrap();

        let dataset = load_csv(&source, b',').unwrap();
        write_csv(&dataset, &exported, b';').unwrap();

        let text = fs::read_to_string(&exported).unwrap();
        assert!(text.lines().next().unwrap().contains("age;job;marital"));

        let reloaded = load_csv(&exported, b';').unwrap();
        assert_eq!(dataset, reloaded);
    }
}
