use std::io::{self, Write};

use chrono::NaiveDate;
use conference_content::logging::{DEFAULT_LOG_LEVEL, init_logging};
use conference_content::{
    ConferenceCalendar, ContentKind, ManualScheduleEntry, build_manual_schedule, entries_for_day,
    load_calendar_from_json, load_mapping_from_json, save_entries_to_csv, save_entries_to_json,
    timestamp, validate_content,
};

fn render_entries_as_text_table(entries: &[&ManualScheduleEntry]) -> String {
    let headers = ["start", "end", "group", "room", "title"];
    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|e| {
            [
                timestamp::format(&e.datetime),
                e.end_datetime.format("%H:%M").to_string(),
                e.group.to_string(),
                e.room.clone(),
                e.title.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[&str]| {
        let mut line = String::from("|");
        for (ci, cell) in cells.iter().enumerate() {
            let pad = widths[ci].saturating_sub(cell.chars().count());
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&headers));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render_row(&cells));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!("Commands:");
    println!("  help                               Show this help");
    println!(
        "  validate <kind> <path.json>        Validate a frontmatter mapping \
         (page|post|presenter|organizer|schedule)"
    );
    println!("  table                              Show the fixed schedule entries");
    println!("  day <YYYY-MM-DD>                   Show fixed entries starting on a date");
    println!(
        "  calendar <path.json>               Load conference days/rooms/timezone \
         and rebuild the table"
    );
    println!("  export <json|csv> <path>           Write the fixed schedule entries");
    println!("  quit|exit                          Exit");
}

fn main() {
    if let Err(err) = init_logging(DEFAULT_LOG_LEVEL) {
        eprintln!("{err}");
    }

    let mut entries = match build_manual_schedule(&ConferenceCalendar::default()) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Could not build the fixed schedule: {e}");
            Vec::new()
        }
    };

    println!("Conference Content (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "table" => {
                let all: Vec<&ManualScheduleEntry> = entries.iter().collect();
                println!("{}", render_entries_as_text_table(&all));
            }
            "day" => {
                let Some(date_s) = parts.next() else {
                    println!("Usage: day <YYYY-MM-DD>");
                    continue;
                };
                let date = match NaiveDate::parse_from_str(date_s, "%Y-%m-%d") {
                    Ok(d) => d,
                    Err(_) => {
                        println!("Invalid date (YYYY-MM-DD)");
                        continue;
                    }
                };
                let day = entries_for_day(&entries, date);
                if day.is_empty() {
                    println!("No fixed entries on {date}.");
                } else {
                    println!("{}", render_entries_as_text_table(&day));
                }
            }
            "validate" => {
                let (Some(kind_s), Some(path)) = (parts.next(), parts.next()) else {
                    println!("Usage: validate <kind> <path.json>");
                    continue;
                };
                let kind: ContentKind = match kind_s.parse() {
                    Ok(k) => k,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                let raw = match load_mapping_from_json(path) {
                    Ok(raw) => raw,
                    Err(e) => {
                        println!("Could not read {path}: {e}");
                        continue;
                    }
                };
                match validate_content(kind, &raw) {
                    Ok(record) => match serde_json::to_string_pretty(&record) {
                        Ok(json) => println!("Valid {kind}.\n{json}"),
                        Err(e) => println!("Error: {e}"),
                    },
                    Err(e) => println!("Validation failed: {e}"),
                }
            }
            "calendar" => {
                let Some(path) = parts.next() else {
                    println!("Usage: calendar <path.json>");
                    continue;
                };
                let calendar = match load_calendar_from_json(path) {
                    Ok(c) => c,
                    Err(e) => {
                        println!("Could not load calendar: {e}");
                        continue;
                    }
                };
                match build_manual_schedule(&calendar) {
                    Ok(rebuilt) => {
                        entries = rebuilt;
                        println!(
                            "Calendar loaded from {path} ({} entries, {}).",
                            entries.len(),
                            calendar.timezone
                        );
                    }
                    Err(e) => println!("Error: {e}"),
                }
            }
            "export" => {
                let (Some(format), Some(path)) = (parts.next(), parts.next()) else {
                    println!("Usage: export <json|csv> <path>");
                    continue;
                };
                let res = match format {
                    "json" => save_entries_to_json(&entries, path),
                    "csv" => save_entries_to_csv(&entries, path),
                    _ => {
                        println!("Unknown format '{format}' (json|csv)");
                        continue;
                    }
                };
                match res {
                    Ok(()) => println!("Exported {} entries to {path}.", entries.len()),
                    Err(e) => println!("Error: {e}"),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
