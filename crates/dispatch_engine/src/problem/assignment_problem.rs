use tracing::warn;

use crate::problem::{
    driver_roster::DriverRoster, order_book::OrderBook, traffic::TrafficMultipliers,
    zone_catalog::ZoneCatalog,
};

/// Snapshot of everything one assignment run reads.
pub struct AssignmentProblem {
    id: Option<String>,
    zone_catalog: ZoneCatalog,
    roster: DriverRoster,
    orders: OrderBook,
    traffic: TrafficMultipliers,
}

impl AssignmentProblem {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn zone_catalog(&self) -> &ZoneCatalog {
        &self.zone_catalog
    }

    pub fn roster(&self) -> &DriverRoster {
        &self.roster
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn traffic(&self) -> &TrafficMultipliers {
        &self.traffic
    }

    /// Orders filed under zones the catalog does not know. They are never
    /// assigned nor reported as unassigned.
    pub fn orders_in_unknown_zones(&self) -> usize {
        self.orders
            .zones()
            .filter(|zone| !self.zone_catalog.contains(zone))
            .map(|zone| self.orders.orders_for(zone).len())
            .sum()
    }

    /// Orders a run will visit.
    pub fn schedulable_orders(&self) -> usize {
        self.zone_catalog
            .zones()
            .iter()
            .map(|zone| self.orders.orders_for(zone.name()).len())
            .sum()
    }
}

#[derive(Default)]
pub struct AssignmentProblemBuilder {
    id: Option<String>,
    zone_catalog: Option<ZoneCatalog>,
    roster: Option<DriverRoster>,
    orders: Option<OrderBook>,
    traffic: Option<TrafficMultipliers>,
}

impl AssignmentProblemBuilder {
    pub fn set_id(&mut self, id: String) -> &mut AssignmentProblemBuilder {
        self.id = Some(id);
        self
    }

    pub fn set_zone_catalog(&mut self, zone_catalog: ZoneCatalog) -> &mut AssignmentProblemBuilder {
        self.zone_catalog = Some(zone_catalog);
        self
    }

    pub fn set_roster(&mut self, roster: DriverRoster) -> &mut AssignmentProblemBuilder {
        self.roster = Some(roster);
        self
    }

    pub fn set_orders(&mut self, orders: OrderBook) -> &mut AssignmentProblemBuilder {
        self.orders = Some(orders);
        self
    }

    pub fn set_traffic(&mut self, traffic: TrafficMultipliers) -> &mut AssignmentProblemBuilder {
        self.traffic = Some(traffic);
        self
    }

    /// Zones default to the Attica catalog, everything else to empty.
    pub fn build(self) -> AssignmentProblem {
        let problem = AssignmentProblem {
            id: self.id,
            zone_catalog: self.zone_catalog.unwrap_or_else(ZoneCatalog::attica),
            roster: self.roster.unwrap_or_default(),
            orders: self.orders.unwrap_or_default(),
            traffic: self.traffic.unwrap_or_default(),
        };

        let skipped = problem.orders_in_unknown_zones();
        if skipped > 0 {
            warn!(
                "AssignmentProblem: {} orders belong to zones outside the catalog and will be skipped",
                skipped
            );
        }

        problem
    }
}
