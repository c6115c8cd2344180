use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use comfy_table::Table;
use dispatch_engine::{json::types::JsonAssignmentOutcome, solver::scheduler_params::SchedulerParams};
use serde::Serialize;

pub const ASSIGNED_ORDERS_FILE: &str = "assigned_orders.json";
pub const UNASSIGNED_ORDERS_FILE: &str = "unassigned_orders.json";
pub const DRIVER_LOADS_FILE: &str = "driver_loads.json";

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), anyhow::Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}

pub fn write_outcome(out: &Path, outcome: &JsonAssignmentOutcome) -> Result<(), anyhow::Error> {
    std::fs::create_dir_all(out)?;

    write_json(&out.join(ASSIGNED_ORDERS_FILE), &outcome.assignments)?;
    write_json(&out.join(UNASSIGNED_ORDERS_FILE), &outcome.unassigned)?;
    write_json(&out.join(DRIVER_LOADS_FILE), &outcome.drivers)?;

    Ok(())
}

pub fn summary_table(outcome: &JsonAssignmentOutcome, params: &SchedulerParams) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Driver", "Orders", "Committed", "Remaining"]);

    for load in &outcome.drivers {
        table.add_row(vec![
            load.driver_id.clone(),
            load.orders.to_string(),
            load.committed.to_string(),
            params
                .work_time_ceiling
                .saturating_sub(load.committed)
                .to_string(),
        ]);
    }

    table.add_row(vec![
        String::from("unassigned"),
        outcome.unassigned.len().to_string(),
        String::new(),
        String::new(),
    ]);

    table
}
