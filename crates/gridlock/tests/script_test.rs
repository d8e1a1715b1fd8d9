//! Headless script mode tests.

use gridlock::run_script;

fn output(moves: &[usize], json: bool) -> String {
    let mut out = Vec::new();
    run_script(moves, json, &mut out).expect("script runs");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn test_top_row_win() {
    let text = output(&[0, 4, 1, 5, 2], false);
    assert_eq!(text, "X|X|X\n-+-+-\n4|O|O\n-+-+-\n7|8|9\n\nWinner: X\n");
}

#[test]
fn test_invalid_moves_are_skipped() {
    // 0 twice, 12 out of range, then moves after the win.
    let text = output(&[0, 0, 12, 3, 1, 4, 2, 5, 6], false);
    assert_eq!(text, "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner: X\n");
}

#[test]
fn test_draw() {
    let text = output(&[0, 1, 2, 4, 3, 5, 7, 6, 8], false);
    assert!(text.ends_with("Draw\n"));
}

#[test]
fn test_json_snapshot() {
    let text = output(&[0, 4, 1, 5, 2], true);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["outcome"]["Win"]["mark"], "X");
    assert_eq!(value["cells"][2]["winning"], true);
    assert_eq!(value["cells"][4]["winning"], false);
}
