use comfy_table::{Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    aggregate::{NetSummary, Period},
    fmt::{ClockTime, FinnishDate},
    quantity::temperature::Celsius,
    record::{NetReading, PhaseReading, Reservation},
    store::RecordStore,
};

pub fn phase_table(store: &RecordStore<PhaseReading>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![
            Cell::new("Timestamp"),
            Cell::new("v1\nin").set_alignment(CellAlignment::Right),
            Cell::new("v2\nin").set_alignment(CellAlignment::Right),
            Cell::new("v3\nin").set_alignment(CellAlignment::Right),
            Cell::new("v1\nout").set_alignment(CellAlignment::Right),
            Cell::new("v2\nout").set_alignment(CellAlignment::Right),
            Cell::new("v3\nout").set_alignment(CellAlignment::Right),
        ]);
    for reading in store {
        let mut row = vec![Cell::new(reading.timestamp)];
        for phase in reading.consumption.iter().chain(&reading.production) {
            row.push(Cell::new(phase).set_alignment(CellAlignment::Right));
        }
        table.add_row(row);
    }
    table
}

pub fn net_table(store: &RecordStore<NetReading>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![
            Cell::new("Timestamp"),
            Cell::new("Consumption").set_alignment(CellAlignment::Right),
            Cell::new("Production").set_alignment(CellAlignment::Right),
            Cell::new("Temperature").set_alignment(CellAlignment::Right),
        ]);
    for reading in store {
        table.add_row(vec![
            Cell::new(reading.timestamp),
            Cell::new(reading.consumption).set_alignment(CellAlignment::Right),
            Cell::new(reading.production).set_alignment(CellAlignment::Right),
            Cell::new(reading.temperature).set_alignment(CellAlignment::Right),
        ]);
    }
    let summary = NetSummary::over(store, Period::All);
    table.add_row(vec![
        Cell::new("Σ / mean"),
        Cell::new(summary.consumption).set_alignment(CellAlignment::Right),
        Cell::new(summary.production).set_alignment(CellAlignment::Right),
        Cell::new(summary.mean_temperature().unwrap_or(Celsius::ZERO))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn reservation_table(store: &RecordStore<Reservation>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![
            Cell::new("Id").set_alignment(CellAlignment::Right),
            Cell::new("Name"),
            Cell::new("Date"),
            Cell::new("Start"),
            Cell::new("End"),
            Cell::new("Hours").set_alignment(CellAlignment::Right),
            Cell::new("Total").set_alignment(CellAlignment::Right),
            Cell::new("Confirmed"),
            Cell::new("Venue"),
        ]);
    for reservation in store {
        table.add_row(vec![
            Cell::new(reservation.id).set_alignment(CellAlignment::Right),
            Cell::new(&reservation.name),
            Cell::new(FinnishDate(reservation.date)),
            Cell::new(ClockTime(reservation.start_time)),
            Cell::new(ClockTime(reservation.end_time())),
            Cell::new(reservation.duration_hours).set_alignment(CellAlignment::Right),
            Cell::new(reservation.total_price()).set_alignment(CellAlignment::Right),
            Cell::new(if reservation.confirmed { "Kyllä" } else { "Ei" }),
            Cell::new(&reservation.venue),
        ]);
    }
    table
}
