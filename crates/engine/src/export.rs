//! CSV export serializer.
//!
//! The delimited-text format is the one bit-exact artifact the engine owns:
//! header `Date,Category,Type,Amount,Note`, records sorted by date
//! descending, day-granularity dates, two-decimal amounts, and standard CSV
//! escaping (fields quoted only when needed, embedded quotes doubled — the
//! `csv` crate's default style).

use csv::Writer;

use crate::{LedgerError, ResultLedger, Transaction};

const HEADER: [&str; 5] = ["Date", "Category", "Type", "Amount", "Note"];

/// Serializes the snapshot to CSV text.
///
/// Fails with [`LedgerError::EmptyLedger`] ("nothing to export") when the
/// snapshot is empty. The sort is stable: records sharing a date keep their
/// snapshot order.
pub fn to_csv(records: &[Transaction]) -> ResultLedger<String> {
    if records.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }

    let mut sorted: Vec<&Transaction> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut writer = Writer::from_writer(vec![]);
    writer
        .write_record(HEADER)
        .map_err(|err| LedgerError::Serialize(err.to_string()))?;

    for tx in sorted {
        writer
            .write_record([
                tx.date.format("%Y-%m-%d").to_string(),
                tx.category.clone(),
                tx.kind.label().to_string(),
                tx.amount.to_string(),
                tx.note.clone().unwrap_or_default(),
            ])
            .map_err(|err| LedgerError::Serialize(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| LedgerError::Serialize(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| LedgerError::Serialize(err.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::{Amount, categories::kind_for_category};

    fn tx(amount: i64, category: &str, day: u32, note: Option<&str>) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            amount: Amount::new(amount),
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            note: note.map(str::to_string),
            kind: kind_for_category(category),
        }
    }

    #[test]
    fn empty_snapshot_is_nothing_to_export() {
        assert_eq!(to_csv(&[]), Err(LedgerError::EmptyLedger));
    }

    #[test]
    fn rows_are_sorted_date_descending() {
        let records = vec![
            tx(7550, "Food & Dining", 3, None),
            tx(200_000, "Income", 10, Some("salary")),
        ];
        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Category,Type,Amount,Note");
        assert_eq!(lines[1], "2026-03-10,Income,Income,2000.00,salary");
        assert_eq!(lines[2], "2026-03-03,Food & Dining,Expense,75.50,");
    }

    #[test]
    fn equal_dates_keep_snapshot_order() {
        let records = vec![
            tx(100, "Travel", 5, Some("first")),
            tx(200, "Travel", 5, Some("second")),
        ];
        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].ends_with("first"));
        assert!(lines[2].ends_with("second"));
    }

    #[test]
    fn fields_with_delimiters_are_quoted_and_doubled() {
        let records = vec![tx(500, "Other", 1, Some(r#"coffee, "to go""#))];
        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[1],
            r#"2026-03-01,Other,Expense,5.00,"coffee, ""to go""""#
        );
    }

    #[test]
    fn export_round_trips_through_a_csv_reader() {
        let records = vec![
            tx(7550, "Food & Dining", 3, Some("lunch, downtown")),
            tx(200_000, "Income", 10, None),
        ];
        let csv = to_csv(&records).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "2026-03-10");
        assert_eq!(&rows[0][2], "Income");
        assert_eq!(&rows[0][3], "2000.00");
        assert_eq!(&rows[1][1], "Food & Dining");
        assert_eq!(&rows[1][3], "75.50");
        assert_eq!(&rows[1][4], "lunch, downtown");
    }
}
