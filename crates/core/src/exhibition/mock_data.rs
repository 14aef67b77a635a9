use chrono::{Duration, NaiveDate, NaiveTime};

use super::dates::{format_localized_date, Language};
use super::types::{Contributor, Exhibition, ProgramEntry};

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

fn day(date: NaiveDate) -> String {
    format_localized_date(date, Language::De)
}

/// Generates a demo catalog relative to `today`: one current exhibition,
/// two upcoming and two past ones, with programs spread over several days.
pub fn generate_seed_exhibitions(today: NaiveDate) -> Vec<Exhibition> {
    let mut exhibitions = Vec::new();

    // Current: opened yesterday, runs until the day after tomorrow
    let opening = today - Duration::days(1);
    exhibitions.push(
        Exhibition::new("Farben der Stadt", opening)
            .with_end_date(today + Duration::days(2))
            .with_subtitle("Urbane Abstraktionen")
            .with_artist("Maja Wiśniewski")
            .with_description(
                "Eine Sammlung urbaner Kunstwerke, die die Essenz Berlins durch \
                 abstrakte Farbkompositionen einfangen.",
            )
            .with_cover_image("/images/current-exhibition.jpg")
            .with_gallery_images(vec![
                "/images/current-detail-1.jpg".to_string(),
                "/images/current-detail-2.jpg".to_string(),
            ])
            .with_contributor(Contributor::new("DJ", "DJ Electric", "music"))
            .with_contributor(Contributor::new("DJ", "SoundMaster B", "music"))
            .with_program(vec![
                ProgramEntry::new("Vernissage", day(opening))
                    .starting_at(time(19, 0))
                    .ending_at(time(19, 30))
                    .with_description("Offizielle Eröffnung mit einer kurzen Ansprache der Künstlerin."),
                ProgramEntry::new("Vorbesichtigung und Begrüßungs-Drink", day(opening))
                    .starting_at(time(17, 0))
                    .ending_at(time(19, 0)),
                ProgramEntry::new("After-Party", day(opening))
                    .starting_at(time(22, 0))
                    .ending_at(time(2, 0))
                    .with_description("Musik mit DJ Electric\nund SoundMaster B"),
                ProgramEntry::new("Künstlerinnengespräch", day(today + Duration::days(1)))
                    .starting_at(time(18, 0)),
                ProgramEntry::new("Finissage", day(today + Duration::days(2))),
            ]),
    );

    let first_upcoming = today + Duration::days(14);
    exhibitions.push(
        Exhibition::new("Licht & Schatten", first_upcoming)
            .with_end_date(first_upcoming + Duration::days(1))
            .with_artist("Studio Kontrast")
            .with_description("Fotografische Arbeiten über Helligkeit und ihr Fehlen.")
            .with_program(vec![
                ProgramEntry::new("Brunch", day(first_upcoming + Duration::days(1)))
                    .starting_at(time(10, 0)),
                ProgramEntry::new("Opening", day(first_upcoming)).starting_at(time(20, 0)),
                ProgramEntry::new("Doors", day(first_upcoming)).starting_at(time(18, 0)),
            ]),
    );

    let second_upcoming = today + Duration::days(45);
    exhibitions.push(
        Exhibition::new("Textile Kunst Berlin", second_upcoming)
            .with_artist("Kollektiv Fadenwelt")
            .with_description(
                "Zeitgenössische textile Kunstwerke zwischen Tradition und Moderne.",
            )
            .with_program(vec![
                ProgramEntry::new("Offene Ausstellung", day(second_upcoming))
                    .starting_at(time(16, 0))
                    .ending_at(time(19, 0)),
                ProgramEntry::new("Workshop: Einführung in Textilkunst", day(second_upcoming))
                    .starting_at(time(19, 0))
                    .ending_at(time(20, 0)),
            ]),
    );

    let first_past = today - Duration::days(60);
    exhibitions.push(
        Exhibition::new("Urbane Geometrie", first_past)
            .with_end_date(first_past + Duration::days(3))
            .with_artist("Jonas Kreis")
            .with_description("Linien, Flächen und Raster der Stadt.")
            .with_contributor(Contributor::new("Kurator", "Paul Berger", "user")),
    );

    let second_past = today - Duration::days(120);
    exhibitions.push(
        Exhibition::new("Stille Räume", second_past)
            .with_artist("Ana Ruiz")
            .with_description("Installationen über Leere und Klang."),
    );

    exhibitions
}

/// Formats the program size of an exhibition for seed summaries.
pub fn format_seed_summary(exhibition: &Exhibition) -> String {
    format!(
        "{} ({} program entries)",
        exhibition.title,
        exhibition.program.len()
    )
}
