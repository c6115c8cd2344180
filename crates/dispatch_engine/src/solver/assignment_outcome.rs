use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::{minutes::Minutes, order_book::OrderPayload};

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct AssignmentRecord {
    pub zone: String,
    pub order: OrderPayload,
    pub driver_id: String,
    pub delivery_duration: Minutes,
    /// Traffic volume the duration was computed from.
    pub traffic_volume: f64,
    /// Applied factor, `1 + traffic_volume / 10000`.
    pub traffic_multiplier: f64,
    pub deviation: f64,
}

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnassignedReason {
    #[serde(rename = "no eligible driver found")]
    NoEligibleDriver,
}

impl Display for UnassignedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnassignedReason::NoEligibleDriver => write!(f, "no eligible driver found"),
        }
    }
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct UnassignedRecord {
    pub zone: String,
    pub order: OrderPayload,
    pub reason: UnassignedReason,
}

/// Final tracker entry of one driver.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct DriverLoad {
    pub driver_id: String,
    pub committed: Minutes,
    pub orders: usize,
}

/// Result of a completed run. Both record lists are in emission order:
/// catalog zone order, then order input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOutcome {
    assignments: Vec<AssignmentRecord>,
    unassigned: Vec<UnassignedRecord>,
    driver_loads: Vec<DriverLoad>,
}

impl AssignmentOutcome {
    pub(crate) fn new(
        assignments: Vec<AssignmentRecord>,
        unassigned: Vec<UnassignedRecord>,
        driver_loads: Vec<DriverLoad>,
    ) -> Self {
        Self {
            assignments,
            unassigned,
            driver_loads,
        }
    }

    pub fn assignments(&self) -> &[AssignmentRecord] {
        &self.assignments
    }

    pub fn unassigned(&self) -> &[UnassignedRecord] {
        &self.unassigned
    }

    /// Roster order.
    pub fn driver_loads(&self) -> &[DriverLoad] {
        &self.driver_loads
    }

    pub fn assignments_for<'a>(
        &'a self,
        driver_id: &'a str,
    ) -> impl Iterator<Item = &'a AssignmentRecord> + 'a {
        self.assignments
            .iter()
            .filter(move |record| record.driver_id == driver_id)
    }

    pub fn committed_minutes(&self, driver_id: &str) -> Option<Minutes> {
        self.driver_loads
            .iter()
            .find(|load| load.driver_id == driver_id)
            .map(|load| load.committed)
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned.is_empty()
    }

    pub fn into_parts(self) -> (Vec<AssignmentRecord>, Vec<UnassignedRecord>, Vec<DriverLoad>) {
        (self.assignments, self.unassigned, self.driver_loads)
    }
}
