use shiftrecon::utils::table::{Table, strip_ansi, visible_width};

#[test]
fn test_strip_ansi_colour_and_erase_codes() {
    assert_eq!(strip_ansi("\x1b[32mNORMAL\x1b[0m"), "NORMAL");
    assert_eq!(strip_ansi("\x1b[Kabc"), "abc");
    assert_eq!(strip_ansi("plain"), "plain");
}

#[test]
fn test_visible_width_ignores_escape_codes() {
    assert_eq!(visible_width("\x1b[Kabc"), 3);
    assert_eq!(visible_width("\x1b[1;33mManhã\x1b[0m"), 5);
}

#[test]
fn test_coloured_cells_keep_columns_aligned() {
    let mut t = Table::new(vec!["Kind", "Worked"]);
    t.add_row(vec!["\x1b[33mARTIFICIAL\x1b[0m".to_string(), "07:00".to_string()]);
    t.add_row(vec!["NONE".to_string(), "00:30".to_string()]);

    let rendered = t.render();
    let plain: Vec<String> = rendered.lines().map(|l| strip_ansi(l).into_owned()).collect();

    let col = plain[2].find("07:00").expect("worked column");
    assert_eq!(plain[3].find("00:30"), Some(col));
    assert_eq!(plain[0].find("Worked"), Some(col));
}
