//! ASCII rendering of collision tables using the [`tabled`] crate

use tabled::builder::Builder;

/// Formats a collision table for the terminal, under an underlined heading.
///
/// The first row of `rows` is used as the table header.
pub fn format_collision_table(heading: &str, rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!("{}\n{}\nNo collisions recorded", heading, "=".repeat(heading.len()));
    }

    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row.iter().cloned());
    }
    let table = builder.build().to_string();

    format!("{}\n{}\n{}", heading, "=".repeat(heading.len()), table)
}
