mod common;

use chrono::Duration;
use common::{dt, vertical_table};
use rand::SeedableRng;
use rand::rngs::StdRng;
use shiftrecon::config::ProcessingConfig;
use shiftrecon::core::Core;
use shiftrecon::core::meal_window::MealPeriod;
use shiftrecon::models::{BreakInterval, LunchKind};

#[test]
fn test_ana_normal_lunch_scenario() {
    let table = vertical_table(&[
        ("Ana", "2024-03-04 08:00"),
        ("Ana", "2024-03-04 12:05"),
        ("Ana", "2024-03-04 13:10"),
        ("Ana", "2024-03-04 17:00"),
    ]);
    let mut rng = StdRng::seed_from_u64(11);

    let shifts = Core::shifts(&table, &ProcessingConfig::baseline(), &mut rng);

    assert_eq!(shifts.len(), 1);
    let s = &shifts[0];
    assert_eq!(s.person(), "Ana");
    assert_eq!(s.start, dt("2024-03-04 08:00"));
    assert_eq!(s.end, dt("2024-03-04 17:00"));
    assert_eq!(s.lunch_kind, LunchKind::Normal);
    assert_eq!(
        s.lunch,
        Some(BreakInterval::new(dt("2024-03-04 12:05"), dt("2024-03-04 13:10")))
    );
    assert_eq!(s.worked, Duration::hours(7) + Duration::minutes(55));
}

#[test]
fn test_bruno_artificial_lunch_scenario() {
    let table = vertical_table(&[("Bruno", "2024-03-04 08:00"), ("Bruno", "2024-03-04 16:00")]);
    let mut rng = StdRng::seed_from_u64(5);

    let shifts = Core::shifts(&table, &ProcessingConfig::baseline(), &mut rng);

    assert_eq!(shifts.len(), 1);
    let s = &shifts[0];
    assert_eq!(s.lunch_kind, LunchKind::Artificial);
    let lunch = s.lunch.expect("synthetic lunch");
    assert!(lunch.start >= dt("2024-03-04 10:30") && lunch.end <= dt("2024-03-04 14:30"));
    assert!(lunch.duration() >= Duration::minutes(60) && lunch.duration() <= Duration::minutes(65));
    assert_eq!(s.period, MealPeriod::Morning);
}

#[test]
fn test_shifts_sorted_by_person_and_start() {
    let table = vertical_table(&[
        ("Bruno", "2024-03-05 08:00"),
        ("Ana", "2024-03-05 08:00"),
        ("Ana", "2024-03-05 17:00"),
        ("Bruno", "2024-03-05 17:00"),
        ("Ana", "2024-03-04 08:00"),
        ("Ana", "2024-03-04 17:00"),
    ]);
    let mut rng = StdRng::seed_from_u64(2);

    let shifts = Core::shifts(&table, &ProcessingConfig::baseline(), &mut rng);
    let keys: Vec<_> = shifts.iter().map(|s| (s.person().to_string(), s.start)).collect();

    assert_eq!(
        keys,
        vec![
            ("Ana".to_string(), dt("2024-03-04 08:00")),
            ("Ana".to_string(), dt("2024-03-05 08:00")),
            ("Bruno".to_string(), dt("2024-03-05 08:00")),
        ]
    );
}

#[test]
fn test_identification_threshold_folds_on_call_span() {
    let table = vertical_table(&[("Diego", "2024-03-04 20:00"), ("Diego", "2024-03-05 07:30")]);

    let mut rng = StdRng::seed_from_u64(4);
    let full = Core::shifts(&table, &ProcessingConfig::baseline(), &mut rng);
    assert_eq!(full.len(), 2);

    let mut rng = StdRng::seed_from_u64(4);
    let groups = Core::identify(&table, &ProcessingConfig::identification(), &mut rng);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, MealPeriod::Night);
    assert_eq!(groups[0].1.len(), 1);
    assert_eq!(groups[0].1[0].span(), Duration::minutes(11 * 60 + 30));
}

#[test]
fn test_identify_groups_by_period_in_order() {
    let table = vertical_table(&[
        ("Carla", "2024-03-04 22:00"),
        ("Carla", "2024-03-05 02:00"),
        ("Carla", "2024-03-05 06:30"),
        ("Ana", "2024-03-04 08:00"),
        ("Ana", "2024-03-04 17:00"),
    ]);
    let mut rng = StdRng::seed_from_u64(8);

    let groups = Core::identify(&table, &ProcessingConfig::identification(), &mut rng);
    let periods: Vec<_> = groups.iter().map(|(p, _)| *p).collect();

    assert_eq!(periods, vec![MealPeriod::Morning, MealPeriod::Night]);
    assert_eq!(groups[1].1[0].person(), "Carla");
    assert_eq!(groups[1].1[0].punches.len(), 3);
}

#[test]
fn test_table_without_person_columns_gives_no_shift() {
    let table = shiftrecon::models::Table::new(
        "x.csv",
        vec![shiftrecon::models::Row::new().with("Data", "2024-03-04 08:00")],
    );
    let mut rng = StdRng::seed_from_u64(0);

    assert!(Core::shifts(&table, &ProcessingConfig::baseline(), &mut rng).is_empty());
}
