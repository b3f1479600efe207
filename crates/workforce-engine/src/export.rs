//! Dataset export.
//!
//! Rows are written in history order, which is `(employee_id, year)`
//! ascending. Both formats use the same column order, given by
//! [`COLUMNS`].
//!
//! - CSV: a header row, then one line per snapshot. Fields containing a
//!   comma, quote, or line break are quoted with embedded quotes doubled.
//!   Dates are `YYYY-MM-DD`; absent values are empty cells.
//! - JSON Lines: one object per snapshot, absent values as `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use workforce_core::OutputFormat;
use workforce_types::EmployeeSnapshot;

use crate::error::EngineError;

/// Column names in output order.
pub const COLUMNS: [&str; 25] = [
    "year",
    "employee_id",
    "first_name",
    "last_name",
    "gender",
    "marital_status",
    "citizenship_country",
    "recruitment_source",
    "country",
    "city",
    "department",
    "job_title",
    "hire_date",
    "birth_date",
    "age",
    "status",
    "termination_date",
    "exit_reason",
    "tenure_days",
    "salary",
    "bonus",
    "performance_rating",
    "employee_engagement",
    "employee_satisfaction",
    "absence_count",
];

/// Write `rows` to the file at `path`, replacing it.
///
/// Returns the number of data rows written.
pub fn export_to_path<'a, I>(path: &Path, format: OutputFormat, rows: I) -> Result<usize, EngineError>
where
    I: IntoIterator<Item = &'a EmployeeSnapshot>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_rows(&mut writer, format, rows)?;
    writer.flush()?;
    Ok(written)
}

/// Write `rows` to `writer` in the requested format.
pub fn write_rows<'a, W, I>(writer: &mut W, format: OutputFormat, rows: I) -> Result<usize, EngineError>
where
    W: Write,
    I: IntoIterator<Item = &'a EmployeeSnapshot>,
{
    match format {
        OutputFormat::Csv => write_csv(writer, rows),
        OutputFormat::Jsonl => write_jsonl(writer, rows),
    }
}

fn write_csv<'a, W, I>(writer: &mut W, rows: I) -> Result<usize, EngineError>
where
    W: Write,
    I: IntoIterator<Item = &'a EmployeeSnapshot>,
{
    writeln!(writer, "{}", COLUMNS.join(","))?;
    let mut written = 0_usize;
    for row in rows {
        let line = csv_record(row)
            .iter()
            .map(|field| quote(field))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{line}")?;
        written = written.saturating_add(1);
    }
    Ok(written)
}

fn write_jsonl<'a, W, I>(writer: &mut W, rows: I) -> Result<usize, EngineError>
where
    W: Write,
    I: IntoIterator<Item = &'a EmployeeSnapshot>,
{
    let mut written = 0_usize;
    for row in rows {
        serde_json::to_writer(&mut *writer, row)?;
        writer.write_all(b"\n")?;
        written = written.saturating_add(1);
    }
    Ok(written)
}

/// Render one snapshot as CSV cells, in [`COLUMNS`] order.
fn csv_record(row: &EmployeeSnapshot) -> [String; 25] {
    fn optional<T: ToString>(value: Option<&T>) -> String {
        value.map(ToString::to_string).unwrap_or_default()
    }

    [
        row.year.to_string(),
        row.employee_id.to_string(),
        row.first_name.clone(),
        row.last_name.clone(),
        row.gender.to_string(),
        row.marital_status.to_string(),
        row.citizenship_country.clone(),
        row.recruitment_source.clone(),
        row.country.clone(),
        row.city.clone(),
        row.department.clone(),
        row.job_title.clone(),
        row.hire_date.to_string(),
        row.birth_date.to_string(),
        row.age.to_string(),
        row.status.to_string(),
        optional(row.termination_date.as_ref()),
        optional(row.exit_reason.as_ref()),
        row.tenure_days.to_string(),
        row.salary.to_string(),
        optional(row.bonus.as_ref()),
        optional(row.performance_rating.as_ref()),
        row.employee_engagement.to_string(),
        row.employee_satisfaction.to_string(),
        row.absence_count.to_string(),
    ]
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use workforce_types::{EmployeeId, EmploymentStatus, Gender, MaritalStatus};

    use super::*;

    fn snapshot() -> EmployeeSnapshot {
        EmployeeSnapshot {
            year: 2019,
            employee_id: EmployeeId::new(7),
            first_name: "Priya".to_owned(),
            last_name: "Sharma".to_owned(),
            gender: Gender::Female,
            marital_status: MaritalStatus::Married,
            citizenship_country: "India".to_owned(),
            recruitment_source: "LinkedIn".to_owned(),
            country: "India".to_owned(),
            city: "Pune".to_owned(),
            department: "IT".to_owned(),
            job_title: "Software Engineer".to_owned(),
            hire_date: NaiveDate::from_ymd_opt(2016, 2, 29).unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1990, 2, 28).unwrap(),
            age: 29,
            status: EmploymentStatus::Active,
            termination_date: None,
            exit_reason: None,
            tenure_days: 1401,
            salary: dec!(70000.00),
            bonus: Some(dec!(5833.33)),
            performance_rating: Some(4),
            employee_engagement: 3,
            employee_satisfaction: 5,
            absence_count: 2,
        }
    }

    fn leaver() -> EmployeeSnapshot {
        EmployeeSnapshot {
            status: EmploymentStatus::VoluntaryAttrition,
            termination_date: NaiveDate::from_ymd_opt(2019, 6, 3),
            exit_reason: Some("Relocation/Migration".to_owned()),
            bonus: None,
            performance_rating: None,
            ..snapshot()
        }
    }

    fn csv(rows: &[EmployeeSnapshot]) -> String {
        let mut out = Vec::new();
        let written = write_rows(&mut out, OutputFormat::Csv, rows).unwrap();
        assert_eq!(written, rows.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_lists_every_column_in_order() {
        let text = csv(&[]);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("year,employee_id,first_name,last_name,gender,"));
        assert!(text.trim_end().ends_with("employee_satisfaction,absence_count"));
    }

    #[test]
    fn active_row_uses_iso_dates_and_labels() {
        let text = csv(&[snapshot()]);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2019,7,Priya,Sharma,F,Married,India,LinkedIn,India,Pune,IT,Software Engineer,\
             2016-02-29,1990-02-28,29,Active,,,1401,70000.00,5833.33,4,3,5,2"
        );
    }

    #[test]
    fn absent_values_are_empty_cells() {
        let text = csv(&[leaver()]);
        let cells: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[15], "Voluntary Attrition");
        assert_eq!(cells[16], "2019-06-03");
        assert_eq!(cells[17], "Relocation/Migration");
        assert_eq!(cells[20], "");
        assert_eq!(cells[21], "");
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("Smith, Jr."), "\"Smith, Jr.\"");
        assert_eq!(quote("the \"boss\""), "\"the \"\"boss\"\"\"");
        assert_eq!(quote("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn jsonl_writes_one_object_per_line_with_nulls() {
        let mut out = Vec::new();
        let written =
            write_rows(&mut out, OutputFormat::Jsonl, &[snapshot(), leaver()]).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["termination_date"], serde_json::Value::Null);
        assert_eq!(lines[0]["hire_date"], "2016-02-29");
        assert_eq!(lines[1]["status"], "Voluntary Attrition");
        assert_eq!(lines[1]["bonus"], serde_json::Value::Null);
        assert_eq!(lines[1]["performance_rating"], serde_json::Value::Null);
    }
}
