use shiftrecon::core::Core;
use shiftrecon::core::intersect::name_set;
use shiftrecon::models::{Row, Table};

fn table_a() -> Table {
    Table::new(
        "a.csv",
        vec![
            Row::new().with("Nome", "Ana").with("Batida", "2024-03-04 08:00"),
            Row::new().with("Nome", "  bruno ").with("Batida", "2024-03-04 08:00"),
            Row::new().with("Nome", "Carla").with("Batida", "2024-03-04 08:00"),
            Row::new().with("Batida", "2024-03-04 08:00"),
            Row::new().with("Nome", "ANA").with("Batida", "2024-03-05 08:00"),
        ],
    )
}

fn table_b() -> Table {
    Table::new(
        "b.csv",
        vec![
            Row::new().with("Colaborador", "ana"),
            Row::new().with("Colaborador", "Bruno"),
            Row::new().with("Colaborador", "Diego"),
            Row::new().with("Cargo", "Vigia"),
        ],
    )
}

#[test]
fn test_keeps_rows_whose_name_is_in_b() {
    let a = table_a();
    let b = table_b();

    let kept = Core::intersect(&a, &b);

    let names: Vec<_> = kept
        .iter()
        .filter_map(|r| r.get("Nome").map(|v| v.as_text()))
        .collect();
    assert_eq!(names, vec!["Ana", "bruno", "ANA"]);
}

#[test]
fn test_result_is_a_subset_by_identity() {
    let a = table_a();
    let b = table_b();
    let names = name_set(&b);

    let kept = Core::intersect(&a, &b);

    for row in kept {
        assert!(a.rows.iter().any(|r| std::ptr::eq(r, row)));
        let name = shiftrecon::core::intersect::row_name(row).expect("named row");
        assert!(names.contains(&name));
    }
}

#[test]
fn test_empty_b_keeps_nothing() {
    let a = table_a();
    let b = Table::new("b.csv", Vec::new());

    assert!(Core::intersect(&a, &b).is_empty());
}
