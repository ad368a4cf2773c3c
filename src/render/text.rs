//! Plain-text presenter for the `status` subcommand.

use crate::status::ReportData;

/// Render the group report (and optionally one person's day) as text.
pub fn render_text_report(data: &ReportData, me: Option<&str>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} {} - {} busy, {} free",
        data.weekday,
        data.time,
        data.busy.len(),
        data.free.len()
    ));
    lines.push(String::new());

    if !data.busy.is_empty() {
        lines.push("BUSY".to_string());
        for entry in &data.busy {
            let activity = if entry.activity.is_empty() {
                "Busy"
            } else {
                entry.activity.as_str()
            };
            lines.push(format!(
                "  {} - {} (until {}, @ {})",
                entry.person, activity, entry.until, entry.location
            ));
        }
        lines.push(String::new());
    }

    if !data.free.is_empty() {
        lines.push("FREE".to_string());
        for entry in &data.free {
            match &entry.next_start {
                Some(next) => lines.push(format!("  {} - free until {}", entry.person, next)),
                None => lines.push(format!("  {} - free for the rest of the day", entry.person)),
            }
        }
        lines.push(String::new());
    }

    if let Some(me) = me {
        lines.push(format!("Your {} ({})", data.weekday, me));
        match data.days.get(me) {
            Some(blocks) if !blocks.is_empty() => {
                for b in blocks {
                    lines.push(format!(
                        "  {} - {}  {} (@ {})",
                        b.start, b.end, b.activity, b.location
                    ));
                }
            }
            _ => lines.push("  No scheduled blocks for you today!".to_string()),
        }
        lines.push(String::new());
    }

    for diagnostic in &data.diagnostics {
        lines.push(format!("note: {diagnostic}"));
    }

    let mut out = lines.join("\n");
    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{BusyEntry, FreeEntry};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn renders_busy_free_and_personal_sections() {
        let mut days = BTreeMap::new();
        days.insert(
            "Bob".to_string(),
            vec![crate::status::BlockView {
                start: "14:00".to_string(),
                end: "15:00".to_string(),
                activity: "Gym".to_string(),
                location: "Rec center".to_string(),
            }],
        );
        let data = ReportData {
            weekday: "Monday".to_string(),
            time: "09:45".to_string(),
            generated_at: "2026-08-06 09:45:00".to_string(),
            busy: vec![BusyEntry {
                person: "Alice".to_string(),
                activity: "Lecture".to_string(),
                until: "10:00".to_string(),
                location: "Hall B".to_string(),
            }],
            free: vec![FreeEntry {
                person: "Bob".to_string(),
                next_start: Some("14:00".to_string()),
            }],
            people: vec!["Alice".to_string(), "Bob".to_string()],
            days,
            diagnostics: vec!["skipped 1 row(s) with an empty or missing name".to_string()],
        };

        let text = render_text_report(&data, Some("Bob"));
        let expected = "\
Monday 09:45 - 1 busy, 1 free

BUSY
  Alice - Lecture (until 10:00, @ Hall B)

FREE
  Bob - free until 14:00

Your Monday (Bob)
  14:00 - 15:00  Gym (@ Rec center)

note: skipped 1 row(s) with an empty or missing name
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_report_is_just_the_header() {
        let data = ReportData {
            weekday: "Sunday".to_string(),
            time: "08:00".to_string(),
            generated_at: "now".to_string(),
            busy: vec![],
            free: vec![],
            people: vec![],
            days: BTreeMap::new(),
            diagnostics: vec![],
        };
        assert_eq!(
            render_text_report(&data, None),
            "Sunday 08:00 - 0 busy, 0 free\n"
        );
    }
}
