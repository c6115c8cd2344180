use std::{fs::File, io::BufReader, path::PathBuf};

use dispatch_engine::{
    json::types::JsonAssignmentBatch,
    problem::{
        assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
        driver_roster::DriverRoster,
        minutes::Minutes,
        order_book::OrderBook,
        traffic::TrafficMultipliers,
        zone::ZoneDetail,
        zone_catalog::ZoneCatalog,
    },
};
use dispatch_traffic::{
    traffic_client::TrafficClient, traffic_model::ConstantTrafficModel,
    traffic_provider::TrafficProvider,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde_json::json;

pub fn fixture_path(fixture: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("tests/fixtures")
        .join(fixture)
}

pub async fn create_problem_from_fixture(fixture: &str) -> AssignmentProblem {
    let file = File::open(fixture_path(fixture).join("input.json")).unwrap();
    let batch: JsonAssignmentBatch = serde_json::from_reader(BufReader::new(file)).unwrap();
    let client = TrafficClient::with_model(ConstantTrafficModel::new(0.0));

    batch
        .build_problem(&client, TrafficProvider::Neutral)
        .await
        .unwrap()
}

/// A batch of `zones` zones with random baselines, order counts and traffic,
/// served by `drivers` drivers. Zone `Z<zones>` is filed but not in the
/// catalog.
pub fn create_random_problem(seed: u64, zones: usize, drivers: usize) -> AssignmentProblem {
    let mut rng = SmallRng::seed_from_u64(seed);

    let catalog = ZoneCatalog::from_zones(
        (0..zones)
            .map(|i| {
                ZoneDetail::new(
                    format!("Z{i}"),
                    Minutes::new(rng.random_range(20..=400)),
                    0.0,
                    0.0,
                )
            })
            .collect(),
    )
    .unwrap();

    let mut orders = OrderBook::default();
    let mut traffic = TrafficMultipliers::default();
    for i in 0..=zones {
        let count = rng.random_range(0..8);
        orders.extend(
            format!("Z{i}"),
            (0..count).map(|order| json!(format!("Z{i}-{order}"))),
        );

        // Some zones are left without a volume
        if rng.random_bool(0.8) {
            traffic.insert(format!("Z{i}"), rng.random_range(0.0..3000.0));
        }
    }

    let roster = DriverRoster::from_drivers((0..drivers).map(|i| format!("D{i}"))).unwrap();

    let mut builder = AssignmentProblemBuilder::default();
    builder.set_zone_catalog(catalog);
    builder.set_orders(orders);
    builder.set_roster(roster);
    builder.set_traffic(traffic);
    builder.build()
}
