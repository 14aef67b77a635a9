//! Pretty output formatting.

use chrono::NaiveDate;
use kiosk_core::exhibition::{
    format_seed_summary, Exhibition, ExhibitionState, Language, ProgramByDate,
};

use crate::commands::{Dashboard, ProgramView};

/// Format an exhibition for display.
pub fn format_exhibition(exhibition: &Exhibition, today: NaiveDate, language: Language) -> String {
    let state = exhibition.state(today);
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Dates: {}",
        exhibition.title,
        state.label(language),
        exhibition.id,
        exhibition.date_label(language)
    );
    if let Some(subtitle) = &exhibition.subtitle {
        output.push_str(&format!("\n  Subtitle: {}", subtitle));
    }
    if let Some(artist) = &exhibition.artist {
        output.push_str(&format!("\n  Artist: {}", artist));
    }
    let djs = exhibition.djs();
    if !djs.is_empty() {
        output.push_str(&format!("\n  DJs: {}", djs.join(", ")));
    }
    if !exhibition.program.is_empty() {
        output.push_str(&format!("\n  Program entries: {}", exhibition.program.len()));
    }
    output
}

/// Format exhibitions for display.
pub fn format_exhibitions(
    exhibitions: &[Exhibition],
    today: NaiveDate,
    language: Language,
) -> String {
    if exhibitions.is_empty() {
        return "No exhibitions found.".to_string();
    }
    let mut output = format!("EXHIBITIONS ({})\n", exhibitions.len());
    output.push_str(&"-".repeat(40));
    for exhibition in exhibitions {
        output.push_str(&format!(
            "\n{}",
            format_exhibition(exhibition, today, language)
        ));
        output.push('\n');
    }
    output
}

fn format_day(day: &ProgramByDate) -> String {
    let mut output = format!("{} ({})", day.date, day.event_count());
    for event in &day.events {
        let time = event.time_label();
        if time.is_empty() {
            output.push_str(&format!("\n  {}", event.title));
        } else {
            output.push_str(&format!("\n  {}  {}", time, event.title));
        }
        for paragraph in event.paragraphs() {
            output.push_str(&format!("\n      {}", paragraph));
        }
    }
    output
}

/// Format the day-by-day program of an exhibition.
pub fn format_program(view: &ProgramView) -> String {
    let mut output = format!("PROGRAM: {}\n", view.exhibition.title);
    output.push_str(&"-".repeat(40));
    if view.days.is_empty() {
        output.push_str("\nNo program entries.");
        return output;
    }
    for day in &view.days {
        output.push_str(&format!("\n{}", format_day(day)));
        output.push('\n');
    }
    output
}

/// Format the dashboard summary.
pub fn format_dashboard(dashboard: &Dashboard, language: Language) -> String {
    let mut output = format!("DASHBOARD ({})\n", dashboard.today);
    output.push_str(&"-".repeat(40));
    for state in ExhibitionState::ALL {
        output.push_str(&format!(
            "\n{}: {}",
            state.label(language),
            dashboard.counts.get(state)
        ));
    }
    output.push_str(&format!("\nTotal: {}", dashboard.counts.total()));

    if let Some(featured) = &dashboard.featured {
        output.push_str(&format!(
            "\n\nFeatured:\n{}",
            format_exhibition(featured, dashboard.today, language)
        ));
    }
    if let Some(next) = &dashboard.next_upcoming {
        output.push_str(&format!(
            "\n\nNext opening:\n{}",
            format_exhibition(next, dashboard.today, language)
        ));
    }
    output
}

/// Format the result of the seed command.
pub fn format_seed(exhibitions: &[Exhibition]) -> String {
    let mut output = format!("SEEDED ({})\n", exhibitions.len());
    output.push_str(&"-".repeat(40));
    for exhibition in exhibitions {
        output.push_str(&format!("\n{}", format_seed_summary(exhibition)));
    }
    output
}
