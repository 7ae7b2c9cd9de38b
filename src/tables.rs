use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{estimator::Estimate, request::EstimationRequest},
    quantity::{Zero, energy::WattHours},
};

#[must_use]
pub fn build_estimate_table(request: &EstimationRequest, estimate: &Estimate) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Input", "Value"]);
    table.add_row(vec![
        Cell::new("Battery percentage"),
        Cell::new(request.current_percentage).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Power consumption"),
        Cell::new(request.discharge_rate).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Battery capacity"),
        Cell::new(request.battery_capacity).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Battery voltage"),
        Cell::new(request.voltage).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Low threshold"),
        Cell::new(request.low_threshold).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Usable energy").add_attribute(Attribute::Dim),
        Cell::new(request.usable_energy().max(WattHours::ZERO))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Estimated time").add_attribute(Attribute::Bold),
        Cell::new(estimate.display_text())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(if estimate.error.is_some() { Color::Red } else { Color::Green }),
    ]);
    if let Some(error) = estimate.error {
        table.add_row(vec![Cell::new("Error"), Cell::new(error).fg(Color::Red)]);
    }
    table
}
