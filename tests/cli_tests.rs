mod common;

use common::{no_config, sr, write_file};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

const ANA_CSV: &str = "Nome;Batida\n\
Ana;2024-03-04 08:00\n\
Ana;2024-03-04 12:05\n\
Ana;2024-03-04 13:10\n\
Ana;2024-03-04 17:00\n";

#[test]
fn test_shifts_to_csv() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "ponto.csv", ANA_CSV);
    let out = dir.path().join("turnos.csv");

    sr().args(["--config", &no_config(dir.path()), "shifts"])
        .arg(&input)
        .args(["--format", "csv", "--seed", "7", "-f", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Shifts: 1"))
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("output written");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("person,group,date,start,end"));
    assert!(lines[1].starts_with("Ana,Default,2024-03-04,"));
    assert!(lines[1].contains("NORMAL"));
    assert!(lines[1].contains("07:55"));
    assert!(lines[1].contains("08:00 12:05 13:10 17:00"));
}

#[test]
fn test_shifts_print_table() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "ponto.csv", ANA_CSV);

    sr().args(["--config", &no_config(dir.path()), "shifts"])
        .arg(&input)
        .args(["--format", "json", "--print", "-f", "--file"])
        .arg(dir.path().join("turnos.json"))
        .assert()
        .success()
        .stdout(contains("Person"))
        .stdout(contains("12:05-13:10"));
}

#[test]
fn test_printed_table_has_no_escape_codes_when_piped() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "ponto.csv", ANA_CSV);

    sr().args(["--config", &no_config(dir.path()), "shifts"])
        .arg(&input)
        .args(["--format", "json", "--print", "-f", "--file"])
        .arg(dir.path().join("turnos.json"))
        .assert()
        .success()
        .stdout(contains("NORMAL"))
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_huge_threshold_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "ponto.csv", ANA_CSV);

    sr().args(["--config", &no_config(dir.path()), "shifts"])
        .arg(&input)
        .args(["--threshold", "1e300"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_invalid_lunch_bounds_fail() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "ponto.csv", ANA_CSV);

    sr().args(["--config", &no_config(dir.path()), "shifts"])
        .arg(&input)
        .args(["--lunch-min", "90", "--lunch-max", "60"])
        .assert()
        .failure()
        .stderr(contains("lunch min"));
}

#[test]
fn test_daily_to_csv() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(
        dir.path(),
        "diaristas.csv",
        "Nome;CPF;Função;Batida\n\
Carla;12345678900;Vigia;2024-03-04 22:00\n\
Carla;12345678900;Vigia;2024-03-05 02:00\n\
Carla;12345678900;Vigia;2024-03-05 06:30\n",
    );
    let out = dir.path().join("diaristas_out.csv");

    sr().args(["--config", &no_config(dir.path()), "daily"])
        .arg(&input)
        .args(["--format", "csv", "-f", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("output written");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "Carla,12345678900,2024-03-04,2024-03-04 22:00,2024-03-05 06:30,08:30,Vigia,"
    );
}

#[test]
fn test_identify_writes_workbook() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(
        dir.path(),
        "ponto.csv",
        "Nome;Batida\n\
Ana;2024-03-04 08:00\n\
Ana;2024-03-04 17:00\n\
Diego;2024-03-04 20:00\n\
Diego;2024-03-05 07:30\n",
    );
    let out = dir.path().join("identificacao.xlsx");

    sr().args(["--config", &no_config(dir.path()), "identify"])
        .arg(&input)
        .args(["--format", "xlsx", "--seed", "1", "-f", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Manhã: 1 shift(s)"))
        .stdout(contains("Noite: 1 shift(s)"));

    let table = shiftrecon::import::read_table(&out).expect("workbook readable");
    assert_eq!(table.len(), 1);
}

#[test]
fn test_intersect_keeps_common_names() {
    let dir = tempdir().expect("tempdir");
    let a = write_file(
        dir.path(),
        "a.csv",
        "Nome,Batida\nAna,2024-03-04 08:00\nDiego,2024-03-04 08:00\n",
    );
    let b = write_file(dir.path(), "b.csv", "Colaborador\nana\nBruno\n");
    let out = dir.path().join("filtrado.csv");

    sr().args(["--config", &no_config(dir.path()), "intersect"])
        .arg(&a)
        .arg(&b)
        .args(["--format", "csv", "-f", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("1 of 2 rows"));

    let content = fs::read_to_string(&out).expect("output written");
    assert!(content.contains("Ana"));
    assert!(!content.contains("Diego"));
}

#[test]
fn test_intersect_with_empty_file_fails() {
    let dir = tempdir().expect("tempdir");
    let a = write_file(dir.path(), "a.csv", "Nome\nAna\n");
    let b = write_file(dir.path(), "b.csv", "");

    sr().args(["--config", &no_config(dir.path()), "intersect"])
        .arg(&a)
        .arg(&b)
        .assert()
        .failure()
        .stderr(contains("b.csv"));
}

#[test]
fn test_merge_concatenates_inputs() {
    let dir = tempdir().expect("tempdir");
    let a = write_file(dir.path(), "a.csv", "Nome;Batida\nAna;2024-03-04 08:00\n");
    let b = write_file(dir.path(), "b.csv", "Nome;Depto\nBruno;Cozinha\n");
    let out = dir.path().join("mesclado.csv");

    sr().args(["--config", &no_config(dir.path()), "merge"])
        .arg(&a)
        .arg(&b)
        .args(["--format", "csv", "-f", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Merged 2 files: 2 rows"));

    let content = fs::read_to_string(&out).expect("output written");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "Nome,Batida,Depto");
    assert_eq!(lines[1], "Ana,2024-03-04 08:00,");
    assert_eq!(lines[2], "Bruno,,Cozinha");
}

#[test]
fn test_missing_input_is_unreadable() {
    let dir = tempdir().expect("tempdir");

    sr().args(["--config", &no_config(dir.path()), "shifts"])
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(contains("Unreadable"));
}

#[test]
fn test_init_then_check_config() {
    let dir = tempdir().expect("tempdir");
    let conf = dir.path().join("shiftrecon.conf");
    let conf_arg = conf.to_string_lossy().to_string();

    sr().args(["--config", &conf_arg, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
    assert!(conf.exists());

    sr().args(["--config", &conf_arg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    fs::write(&conf, "shift_threshold_hours: 6\n").expect("write");
    sr().args(["--config", &conf_arg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"));

    sr().args(["--config", &conf_arg, "config", "--migrate"])
        .assert()
        .success();
    sr().args(["--config", &conf_arg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("shift_threshold_hours: 6"))
        .stdout(contains("lunch_min_duration: 45"));
}
