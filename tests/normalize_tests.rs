mod common;

use chrono::NaiveDate;
use common::{date_cell, dt, vertical_table};
use shiftrecon::core::normalize::{candidate_timestamp, normalize, sort_punches};
use shiftrecon::models::{CellValue, Row, Table};

#[test]
fn test_horizontal_row_becomes_vertical_stream() {
    let row = Row::new()
        .with("Nome", "Ana")
        .with("Grupo", "RH")
        .with("Entrada", date_cell("2024-03-04 08:00"))
        .with("Saída Almoço", date_cell("2024-03-04 12:05"))
        .with("Volta Almoço", date_cell("2024-03-04 13:10"))
        .with("Saída", date_cell("2024-03-04 17:00"))
        .with("Horas Trab", date_cell("2024-03-04 07:55"))
        .with("Obs", "2024-03-04 09:00");
    let table = Table::new("ponto.xlsx", vec![row]);

    let punches = normalize(&table);

    let times: Vec<_> = punches.iter().map(|p| p.timestamp).collect();
    assert_eq!(
        times,
        vec![
            dt("2024-03-04 08:00"),
            dt("2024-03-04 12:05"),
            dt("2024-03-04 13:10"),
            dt("2024-03-04 17:00"),
        ]
    );
    assert!(punches.iter().all(|p| p.person == "Ana" && p.group == "RH"));
    assert!(punches.iter().all(|p| std::ptr::eq(p.source, &table.rows[0])));
}

#[test]
fn test_rows_without_person_are_dropped() {
    let table = Table::new(
        "x.csv",
        vec![
            Row::new().with("Data", "2024-03-04 08:00"),
            Row::new().with("Nome", "   ").with("Batida", "2024-03-04 08:00"),
            Row::new().with("Empregado", " Bruno ").with("Batida", "2024-03-04 09:00"),
        ],
    );

    let punches = normalize(&table);

    assert_eq!(punches.len(), 1);
    assert_eq!(punches[0].person, "Bruno");
    assert_eq!(punches[0].group, "Default");
}

#[test]
fn test_midnight_and_epoch_candidates_are_rejected() {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("epoch date");

    assert_eq!(candidate_timestamp(&CellValue::Text("2024-03-04".into())), None);
    assert_eq!(candidate_timestamp(&date_cell("2024-03-04 00:00")), None);
    assert_eq!(candidate_timestamp(&CellValue::DateTime(epoch)), None);
    assert_eq!(candidate_timestamp(&CellValue::Text("2019-12-31 08:00".into())), None);
    assert_eq!(candidate_timestamp(&CellValue::Text("08:00".into())), None);
    assert_eq!(candidate_timestamp(&CellValue::Number(45355.5)), None);
    assert_eq!(candidate_timestamp(&CellValue::Text("not a date at all".into())), None);

    assert_eq!(
        candidate_timestamp(&CellValue::Text("04/03/2024 08:00".into())),
        Some(dt("2024-03-04 08:00"))
    );
    assert_eq!(
        candidate_timestamp(&CellValue::Text("2024-03-04T08:00:00".into())),
        Some(dt("2024-03-04 08:00"))
    );
}

#[test]
fn test_timestamps_are_rounded_to_the_second() {
    let noisy = dt("2024-03-04 07:59") + chrono::Duration::milliseconds(59_999);
    assert_eq!(
        candidate_timestamp(&CellValue::DateTime(noisy)),
        Some(dt("2024-03-04 08:00"))
    );
}

#[test]
fn test_stream_sorted_by_person_then_time() {
    let table = vertical_table(&[
        ("Bruno", "2024-03-04 16:00"),
        ("Ana", "2024-03-04 17:00"),
        ("Bruno", "2024-03-04 08:00"),
        ("Ana", "2024-03-04 08:00"),
    ]);

    let punches = normalize(&table);
    let order: Vec<_> = punches
        .iter()
        .map(|p| (p.person.as_str(), p.timestamp))
        .collect();

    assert_eq!(
        order,
        vec![
            ("Ana", dt("2024-03-04 08:00")),
            ("Ana", dt("2024-03-04 17:00")),
            ("Bruno", dt("2024-03-04 08:00")),
            ("Bruno", dt("2024-03-04 16:00")),
        ]
    );
}

#[test]
fn test_resorting_is_idempotent() {
    let table = vertical_table(&[
        ("Carla", "2024-03-05 08:00"),
        ("Ana", "2024-03-04 12:00"),
        ("Ana", "2024-03-04 08:00"),
        ("Carla", "2024-03-04 22:00"),
    ]);

    let punches = normalize(&table);
    let mut again = punches.clone();
    sort_punches(&mut again);

    assert_eq!(punches, again);
}
