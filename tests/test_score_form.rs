use std::io::Cursor;

use canvas_arcade::display::scores::{report, run_form, PROMPT, TITLE};

fn form_output(input: &[u8]) -> String {
    let mut out = Vec::new();
    run_form(Cursor::new(input.to_vec()), &mut out).unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn form_reports_each_line_until_end_of_input() {
    let text = form_output(b"John:98, Jane:92\nA:50, B:60\n");
    assert!(text.contains(TITLE));
    assert!(text.contains("Highest Score > 95 by John 🏆"));
    assert!(text.contains("Highest Score: 60 by B"));
    // one prompt per line plus the one answered by end of input
    assert_eq!(text.matches(PROMPT).count(), 3);
}

#[test]
fn parse_errors_keep_the_form_open() {
    let text = form_output(b"\nA-1\nA:1\n");
    assert!(text.contains("Please enter at least one score."));
    assert!(text.contains("Error: Incorrect format. Please use 'Name:Score' format."));
    assert!(text.contains("Highest Score: 1 by A"));
}

#[test]
fn unreadable_line_is_reported_and_skipped() {
    let text = form_output(b"A:\xff\nJohn:98, Jane:92\n");
    assert!(text.contains("An unexpected error occurred: "));
    assert!(text.contains("Highest Score > 95 by John 🏆"));
    assert_eq!(text.matches(PROMPT).count(), 3);
}

#[test]
fn crlf_line_endings_are_stripped() {
    let text = form_output(b"A:97\r\n");
    assert!(text.contains("Highest Score > 95 by A 🏆"));
}

#[test]
fn one_shot_report_prints_the_verdict() {
    let mut out = Vec::new();
    report(&mut out, "Jane:92").unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("Highest Score: 92 by Jane"));
}
