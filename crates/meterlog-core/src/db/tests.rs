//! Database tests

use super::*;
use crate::error::Error;
use crate::models::{ChartPeriod, NewReading, ReadingUpdate};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample(date_str: &str) -> NewReading {
    NewReading {
        date: date(date_str),
        electricity_high: 1500.5,
        electricity_low: 800.25,
        gas: 320.0,
        water: 95.75,
        synthetic: false,
    }
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    let readings = db
        .list_readings(SortOrder::Ascending, None, 0, None, None)
        .unwrap();
    assert!(readings.is_empty());
}

#[test]
fn test_readings_schema_exists() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('readings') WHERE name IN ('id', 'date', 'electricity_high', 'electricity_low', 'gas', 'water', 'synthetic', 'created_at')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 8, "readings table should have 8 expected columns");
}

#[test]
fn test_create_and_get_reading() {
    let db = Database::in_memory().unwrap();

    let created = db.create_reading(&sample("2023-05-01")).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.date, date("2023-05-01"));
    assert_eq!(created.electricity_high, 1500.5);
    assert!(!created.synthetic);

    let fetched = db.get_reading(created.id).unwrap().unwrap();
    assert_eq!(fetched.date, created.date);
    assert_eq!(fetched.water, 95.75);

    assert!(db.get_reading(9999).unwrap().is_none());
}

#[test]
fn test_duplicate_date_conflict() {
    let db = Database::in_memory().unwrap();

    db.create_reading(&sample("2023-05-01")).unwrap();
    let err = db.create_reading(&sample("2023-05-01")).unwrap_err();

    assert!(matches!(err, Error::Conflict(_)));
    assert_eq!(db.count_readings(None).unwrap(), 1);
}

#[test]
fn test_create_rejects_invalid_reading() {
    let db = Database::in_memory().unwrap();

    let mut reading = sample("2023-05-01");
    reading.water = -1.0;

    let err = db.create_reading(&reading).unwrap_err();
    assert!(matches!(err, Error::InvalidReading(_)));
    assert_eq!(db.count_readings(None).unwrap(), 0);
}

#[test]
fn test_find_by_date() {
    let db = Database::in_memory().unwrap();
    db.create_reading(&sample("2023-05-01")).unwrap();

    assert!(db
        .find_reading_by_date(date("2023-05-01"))
        .unwrap()
        .is_some());
    assert!(db
        .find_reading_by_date(date("2023-05-02"))
        .unwrap()
        .is_none());
}

#[test]
fn test_update_reading() {
    let db = Database::in_memory().unwrap();
    let created = db.create_reading(&sample("2023-05-01")).unwrap();

    let updated = db
        .update_reading(
            created.id,
            &ReadingUpdate {
                gas: Some(325.5),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.gas, 325.5);
    // Untouched fields unchanged
    assert_eq!(updated.electricity_high, 1500.5);
    assert_eq!(updated.date, date("2023-05-01"));
}

#[test]
fn test_update_date_reassignment_conflict() {
    let db = Database::in_memory().unwrap();
    db.create_reading(&sample("2023-05-01")).unwrap();
    let second = db.create_reading(&sample("2023-06-01")).unwrap();

    let err = db
        .update_reading(
            second.id,
            &ReadingUpdate {
                date: Some(date("2023-05-01")),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // Reassigning to a free date works
    let moved = db
        .update_reading(
            second.id,
            &ReadingUpdate {
                date: Some(date("2023-07-01")),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(moved.date, date("2023-07-01"));
}

#[test]
fn test_update_missing_reading() {
    let db = Database::in_memory().unwrap();

    let err = db
        .update_reading(42, &ReadingUpdate::default())
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_delete_reading() {
    let db = Database::in_memory().unwrap();
    let created = db.create_reading(&sample("2023-05-01")).unwrap();

    db.delete_reading(created.id).unwrap();
    assert!(db.get_reading(created.id).unwrap().is_none());

    let err = db.delete_reading(created.id).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_list_ordering_and_pagination() {
    let db = Database::in_memory().unwrap();
    for d in ["2023-03-01", "2023-01-01", "2023-02-01"] {
        db.create_reading(&sample(d)).unwrap();
    }

    let asc = db
        .list_readings(SortOrder::Ascending, None, 0, None, None)
        .unwrap();
    let dates: Vec<_> = asc.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date("2023-01-01"), date("2023-02-01"), date("2023-03-01")]
    );

    let desc = db
        .list_readings(SortOrder::Descending, Some(2), 0, None, None)
        .unwrap();
    assert_eq!(desc.len(), 2);
    assert_eq!(desc[0].date, date("2023-03-01"));

    let page2 = db
        .list_readings(SortOrder::Descending, Some(2), 2, None, None)
        .unwrap();
    assert_eq!(page2.len(), 1);
    assert_eq!(page2[0].date, date("2023-01-01"));
}

#[test]
fn test_list_filters() {
    let db = Database::in_memory().unwrap();
    db.create_reading(&sample("2023-01-01")).unwrap();
    let mut synthetic = sample("2023-02-01");
    synthetic.synthetic = true;
    db.create_reading(&synthetic).unwrap();
    db.create_reading(&sample("2023-03-01")).unwrap();

    let manual = db
        .list_readings(SortOrder::Ascending, None, 0, None, Some(false))
        .unwrap();
    assert_eq!(manual.len(), 2);

    let generated = db
        .list_readings(SortOrder::Ascending, None, 0, None, Some(true))
        .unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].date, date("2023-02-01"));

    let recent = db
        .list_readings(SortOrder::Ascending, None, 0, Some(date("2023-02-01")), None)
        .unwrap();
    assert_eq!(recent.len(), 2);

    assert_eq!(db.count_readings(None).unwrap(), 3);
    assert_eq!(db.count_readings(Some(true)).unwrap(), 1);
    assert_eq!(db.count_readings(Some(false)).unwrap(), 2);
}

#[test]
fn test_chart_series() {
    let db = Database::in_memory().unwrap();
    db.create_reading(&sample("2023-01-15")).unwrap();
    let mut second = sample("2023-02-15");
    second.electricity_high = 1600.5;
    second.synthetic = true;
    db.create_reading(&second).unwrap();

    let series = db.chart_series(ChartPeriod::All).unwrap();
    assert_eq!(series.labels, vec!["15.01.2023", "15.02.2023"]);
    assert_eq!(series.electricity_high, vec![1500.5, 1600.5]);
    assert_eq!(series.synthetic_flags, vec![false, true]);
}

#[test]
fn test_year_over_year() {
    let db = Database::in_memory().unwrap();

    let mut r1 = sample("2022-01-01");
    r1.electricity_high = 1000.0;
    r1.water = 50.0;
    db.create_reading(&r1).unwrap();

    let mut r2 = sample("2022-12-01");
    r2.electricity_high = 1240.6;
    r2.water = 62.5;
    db.create_reading(&r2).unwrap();

    let mut r3 = sample("2023-01-01");
    r3.electricity_high = 1260.0;
    r3.water = 63.0;
    db.create_reading(&r3).unwrap();

    let years = db.year_over_year().unwrap();
    assert_eq!(years.len(), 2);

    assert_eq!(years[0].year, 2022);
    assert_eq!(years[0].readings_count, 2);
    assert_eq!(years[0].electricity_high, 240.6);
    assert_eq!(years[0].water, 12.5);

    assert_eq!(years[1].year, 2023);
    assert_eq!(years[1].readings_count, 1);
    assert_eq!(years[1].electricity_high, 0.0);
}

#[test]
fn test_summary() {
    let db = Database::in_memory().unwrap();

    let empty = db.summary().unwrap();
    assert_eq!(empty.total_readings, 0);
    assert!(empty.first_date.is_none());
    assert!(empty.last_date.is_none());

    db.create_reading(&sample("2023-01-01")).unwrap();
    let mut synthetic = sample("2023-02-01");
    synthetic.synthetic = true;
    db.create_reading(&synthetic).unwrap();

    let summary = db.summary().unwrap();
    assert_eq!(summary.total_readings, 2);
    assert_eq!(summary.manual_readings, 1);
    assert_eq!(summary.synthetic_readings, 1);
    assert_eq!(summary.first_date, Some(date("2023-01-01")));
    assert_eq!(summary.last_date, Some(date("2023-02-01")));
}
