//! Schedule rendering: range table and year overview.

use std::io::{self, Write};

use chrono::{Datelike, NaiveDate};

use rota_rotation::{RotationEngine, ScheduleEntry};

/// Writes the schedule table for `entries`: a header line, a separator,
/// then one row per date with tab-separated fixed-width columns.
///
/// `entries` is expected in the order `schedule_range` produces: two
/// entries per date, Red before Blue.
pub fn write_range_table(w: &mut impl Write, entries: &[ScheduleEntry]) -> io::Result<()> {
    writeln!(w, "Date         \tRed Crew  \tBlue Crew")?;
    writeln!(w, "{}", "-".repeat(48))?;
    for pair in entries.chunks_exact(2) {
        writeln!(
            w,
            "{:<12}\t{:<9}\t{:<9}",
            pair[0].date().to_string(),
            pair[0].status().label(),
            pair[1].status().label()
        )?;
    }
    Ok(())
}

/// Writes the year overview around `today`: the year-to-date schedule, the
/// rest of the year, and the next crew change.
pub fn write_year_overview(
    w: &mut impl Write,
    engine: &RotationEngine,
    today: NaiveDate,
) -> io::Result<()> {
    let year = today.year();
    let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 is valid in every year");
    let dec_31 = NaiveDate::from_ymd_opt(year, 12, 31).expect("Dec 31 is valid in every year");
    let config = engine.config();

    writeln!(w, "=== Rotational Schedule ({year}) ===")?;
    writeln!(
        w,
        "Anchor (first {} day): {}",
        config.starting_crew(),
        config.anchor()
    )?;
    writeln!(w)?;

    writeln!(w, "[A] Year-to-date ( {jan_1}  →  {today} )")?;
    write_range_table(w, &engine.schedule_range(jan_1, today))?;
    writeln!(w)?;

    if today < dec_31 {
        let from = today.succ_opt().expect("a date before Dec 31 has a successor");
        writeln!(w, "[B] Rest of the year ( {from}  →  {dec_31} )")?;
        write_range_table(w, &engine.schedule_range(from, dec_31))?;
        writeln!(w)?;
    } else {
        writeln!(w, "[B] Rest of the year: (none — today is Dec 31)")?;
        writeln!(w)?;
    }

    writeln!(
        w,
        "Next crew change after today: {}",
        engine.next_crew_change(today)
    )?;
    Ok(())
}
