use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dispatch_engine::{
    problem::{
        assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
        driver_roster::DriverRoster,
        order_book::OrderBook,
        traffic::TrafficMultipliers,
        zone_catalog::ZoneCatalog,
    },
    solver::{greedy_scheduler::assign_orders, scheduler_params::SchedulerParams},
};
use serde_json::json;

fn create_problem(orders_per_zone: usize, drivers: usize) -> AssignmentProblem {
    let catalog = ZoneCatalog::attica();

    let mut orders = OrderBook::default();
    let mut traffic = TrafficMultipliers::default();
    for (i, zone) in catalog.zones().iter().enumerate() {
        orders.extend(
            zone.name(),
            (0..orders_per_zone).map(|order| json!(order)),
        );
        traffic.insert(zone.name(), (i * 150) as f64);
    }

    let mut builder = AssignmentProblemBuilder::default();
    builder.set_zone_catalog(catalog);
    builder.set_orders(orders);
    builder.set_roster(DriverRoster::from_drivers((0..drivers).map(|i| format!("D{i}"))).unwrap());
    builder.set_traffic(traffic);
    builder.build()
}

fn greedy_scheduler_benchmark(c: &mut Criterion) {
    let small = create_problem(10, 20);
    let large = create_problem(200, 400);

    c.bench_function("greedy assignment (140 orders, 20 drivers)", |b| {
        b.iter(|| assign_orders(black_box(&small), SchedulerParams::default()))
    });

    c.bench_function("greedy assignment (2800 orders, 400 drivers)", |b| {
        b.iter(|| assign_orders(black_box(&large), SchedulerParams::default()))
    });
}

criterion_group!(benches, greedy_scheduler_benchmark);
criterion_main!(benches);
