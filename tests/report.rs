//! End-to-end: CSV text through the loader and board into a rendered report.

use chrono::Weekday;
use freeboard::render::{render_html_report, render_text_report};
use freeboard::schedule::{ClockTime, LoadOutcome, ScheduleBoard};
use freeboard::sheet::parse_sheet;
use freeboard::status::build_report_data;
use pretty_assertions::assert_eq;

const SHEET: &str = "\
Name,Day,Start,End,Activity,Location
Alice,Monday,9:00,10:30,Lecture,Hall B
Alice,Monday,14:00,16:00,Lab,\"Room 12, annex\"
Bob,Monday,09:30,11:00,Deep work,Library
Bob,Tuesday,09:00,17:00,Office,HQ
Carol,Monday,18:00,19:00,Choir,
,Monday,08:00,09:00,Ghost row,
Dave,Monday,noonish,13:00,Lunch,Cafeteria
";

fn query(token: &str) -> ClockTime {
    ClockTime::parse(token).unwrap()
}

#[test]
fn full_pipeline_produces_a_consistent_monday_report() {
    let LoadOutcome { board, diagnostics } = ScheduleBoard::load(&parse_sheet(SHEET));

    // one ghost row skipped, one malformed time flagged
    assert_eq!(diagnostics.len(), 2);

    let data = build_report_data(
        &board,
        Weekday::Mon,
        query("10:00"),
        &diagnostics,
        "2026-08-06 10:00:00".to_string(),
    );

    assert_eq!(data.people, vec!["Alice", "Bob", "Carol", "Dave"]);

    // At 10:00 on Monday: Alice is in her 9:00-10:30 lecture, Bob is in deep
    // work. Carol waits for choir; Dave's malformed block never matches.
    let busy: Vec<(&str, &str)> = data
        .busy
        .iter()
        .map(|e| (e.person.as_str(), e.until.as_str()))
        .collect();
    assert_eq!(busy, vec![("Alice", "10:30"), ("Bob", "11:00")]);

    let free: Vec<(&str, Option<&str>)> = data
        .free
        .iter()
        .map(|e| (e.person.as_str(), e.next_start.as_deref()))
        .collect();
    assert_eq!(free, vec![("Carol", Some("18:00")), ("Dave", None)]);

    // Personal view: Alice's day is start-sorted with the quoted location
    // intact; the zero-padded start shows as 09:00.
    let alice = &data.days["Alice"];
    assert_eq!(alice[0].start, "09:00");
    assert_eq!(alice[0].activity, "Lecture");
    assert_eq!(alice[1].location, "Room 12, annex");

    // Carol's empty Location cell falls back to the sentinel.
    assert_eq!(data.days["Carol"][0].location, "Unknown");
}

#[test]
fn busy_until_reflects_the_first_matching_block_not_the_longest() {
    let csv = "\
Name,Day,Start,End,Activity
P,Monday,09:00,10:00,Activity A
P,Monday,09:30,11:00,Activity B
";
    let LoadOutcome { board, .. } = ScheduleBoard::load(&parse_sheet(csv));
    let data = build_report_data(
        &board,
        Weekday::Mon,
        query("09:45"),
        &[],
        "t".to_string(),
    );
    assert_eq!(data.busy[0].activity, "Activity A");
    assert_eq!(data.busy[0].until, "10:00");
}

#[test]
fn renderers_accept_the_same_report_data() {
    let LoadOutcome { board, diagnostics } = ScheduleBoard::load(&parse_sheet(SHEET));
    let data = build_report_data(
        &board,
        Weekday::Tue,
        query("12:00"),
        &diagnostics,
        "2026-08-06 12:00:00".to_string(),
    );

    let html = render_html_report(&data).unwrap();
    assert!(html.contains("\"weekday\":\"Tuesday\""));
    assert!(html.contains("Bob"));

    let text = render_text_report(&data, Some("Bob"));
    assert!(text.starts_with("Tuesday 12:00 - 1 busy, 3 free"));
    assert!(text.contains("Bob - Office (until 17:00, @ HQ)"));
    assert!(text.contains("Your Tuesday (Bob)"));
}

#[test]
fn sheet_without_a_name_column_degrades_to_an_empty_report() {
    let csv = "Who,Day,Start,End\nAlice,Monday,09:00,10:00\n";
    let LoadOutcome { board, diagnostics } = ScheduleBoard::load(&parse_sheet(csv));

    assert!(board.is_empty());
    let data = build_report_data(
        &board,
        Weekday::Mon,
        query("09:30"),
        &diagnostics,
        "t".to_string(),
    );
    assert!(data.busy.is_empty());
    assert!(data.free.is_empty());
    assert_eq!(data.diagnostics.len(), 1);
    assert!(data.diagnostics[0].contains("Who, Day, Start, End"));
}
