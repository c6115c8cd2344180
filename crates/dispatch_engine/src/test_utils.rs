use crate::problem::{
    assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
    driver::DriverDeviation,
    driver_roster::DriverRoster,
    minutes::Minutes,
    order_book::{OrderBook, OrderPayload},
    traffic::TrafficMultipliers,
    zone::ZoneDetail,
    zone_catalog::ZoneCatalog,
};

pub struct TestZone {
    pub name: &'static str,
    pub minutes: u32,
}

impl TestZone {
    pub fn new(name: &'static str, minutes: u32) -> Self {
        Self { name, minutes }
    }
}

pub fn create_zone_catalog(zones: Vec<TestZone>) -> ZoneCatalog {
    ZoneCatalog::from_zones(
        zones
            .into_iter()
            .map(|zone| ZoneDetail::new(zone.name, Minutes::new(zone.minutes), 0.0, 0.0))
            .collect(),
    )
    .unwrap()
}

pub fn create_order_book(orders: Vec<(&str, Vec<OrderPayload>)>) -> OrderBook {
    let mut book = OrderBook::default();
    for (zone, payloads) in orders {
        book.extend(zone, payloads);
    }
    book
}

pub fn create_test_problem_builder(
    zones: Vec<TestZone>,
    orders: Vec<(&str, Vec<OrderPayload>)>,
    drivers: Vec<&str>,
    deviations: Vec<DriverDeviation>,
) -> AssignmentProblemBuilder {
    let mut builder = AssignmentProblemBuilder::default();

    builder.set_zone_catalog(create_zone_catalog(zones));
    builder.set_orders(create_order_book(orders));
    builder.set_roster(DriverRoster::join(drivers, deviations).unwrap());

    builder
}

/// Problem without deviations, with explicit traffic volumes per zone.
pub fn create_test_problem(
    zones: Vec<TestZone>,
    orders: Vec<(&str, Vec<OrderPayload>)>,
    drivers: Vec<&str>,
    traffic: Vec<(&str, f64)>,
) -> AssignmentProblem {
    let mut builder = create_test_problem_builder(zones, orders, drivers, Vec::new());
    builder.set_traffic(traffic.into_iter().collect::<TrafficMultipliers>());
    builder.build()
}
