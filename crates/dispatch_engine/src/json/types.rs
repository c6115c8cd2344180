use std::collections::BTreeMap;

use dispatch_traffic::{
    traffic_client::TrafficClient, traffic_model::TrafficModel,
    traffic_provider::TrafficProvider,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    problem::{
        assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
        driver::DriverDeviation,
        driver_roster::DriverRoster,
        minutes::Minutes,
        order_book::{OrderBook, OrderPayload},
        traffic::TrafficMultipliers,
        zone::ZoneDetail,
        zone_catalog::ZoneCatalog,
    },
    solver::assignment_outcome::{
        AssignmentOutcome, AssignmentRecord, DriverLoad, UnassignedRecord,
    },
};

/// One day's batch: who is driving, what has to be delivered where.
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "AssignmentBatch")]
pub struct JsonAssignmentBatch {
    pub id: Option<String>,

    /// Zones in dispatch order. The built-in Attica zones when absent.
    pub zones: Option<Vec<JsonZone>>,

    pub orders: Vec<JsonZoneOrders>,

    /// Drivers in priority order.
    pub drivers: Vec<JsonDriver>,

    #[serde(default)]
    pub deviations: Vec<JsonDriverDeviation>,

    /// Known traffic volumes per zone; other zones are asked of the traffic
    /// client.
    pub traffic_volumes: Option<BTreeMap<String, f64>>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Zone")]
pub struct JsonZone {
    pub name: String,
    pub delivery_minutes: Minutes,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<JsonZone> for ZoneDetail {
    fn from(value: JsonZone) -> Self {
        ZoneDetail::new(
            value.name,
            value.delivery_minutes,
            value.latitude,
            value.longitude,
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "ZoneOrders")]
pub struct JsonZoneOrders {
    pub zone: String,
    /// Order payloads in input order. `null` entries are empty cells and
    /// are dropped.
    pub orders: Vec<OrderPayload>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Driver")]
pub struct JsonDriver {
    pub id: String,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "DriverDeviation")]
pub struct JsonDriverDeviation {
    pub driver_id: String,
    pub zones: BTreeMap<String, f64>,
}

impl From<JsonDriverDeviation> for DriverDeviation {
    fn from(value: JsonDriverDeviation) -> Self {
        DriverDeviation {
            driver_id: value.driver_id,
            zones: value.zones.into_iter().collect(),
        }
    }
}

impl JsonAssignmentBatch {
    #[instrument(skip_all, level = "debug")]
    pub async fn build_problem<M: TrafficModel>(
        self,
        client: &TrafficClient<M>,
        provider: TrafficProvider,
    ) -> Result<AssignmentProblem, anyhow::Error> {
        let mut builder = AssignmentProblemBuilder::default();

        if let Some(id) = self.id {
            builder.set_id(id);
        }

        let zone_catalog = match self.zones {
            Some(zones) => {
                ZoneCatalog::from_zones(zones.into_iter().map(ZoneDetail::from).collect())?
            }
            None => ZoneCatalog::attica(),
        };

        let roster = DriverRoster::join(
            self.drivers.into_iter().map(|driver| driver.id),
            self.deviations
                .into_iter()
                .map(DriverDeviation::from)
                .collect(),
        )?;

        let mut orders = OrderBook::default();
        for zone_orders in self.orders {
            orders.extend(
                zone_orders.zone,
                zone_orders
                    .orders
                    .into_iter()
                    .filter(|order| !order.is_null()),
            );
        }

        let mut traffic: TrafficMultipliers = self
            .traffic_volumes
            .unwrap_or_default()
            .into_iter()
            .collect();

        // Only zones that will actually be visited need a prediction
        let pending = zone_catalog
            .zones()
            .iter()
            .filter(|zone| {
                traffic.get(zone.name()).is_none()
                    && !orders.orders_for(zone.name()).is_empty()
            })
            .cloned()
            .collect::<Vec<_>>();

        if !pending.is_empty() {
            let volumes = client.fetch_volumes(&pending, provider).await;
            for (zone, volume) in pending.iter().zip(volumes) {
                debug!("Traffic volume for {}: {}", zone.name(), volume);
                traffic.insert(zone.name(), volume);
            }
        }

        builder.set_zone_catalog(zone_catalog);
        builder.set_roster(roster);
        builder.set_orders(orders);
        builder.set_traffic(traffic);

        Ok(builder.build())
    }
}

#[derive(Serialize, JsonSchema)]
#[serde(rename = "AssignmentOutcome")]
pub struct JsonAssignmentOutcome {
    pub id: Option<String>,
    pub assignments: Vec<AssignmentRecord>,
    pub unassigned: Vec<UnassignedRecord>,
    pub drivers: Vec<DriverLoad>,
}

impl JsonAssignmentOutcome {
    pub fn from_outcome(outcome: AssignmentOutcome, problem: &AssignmentProblem) -> Self {
        let (assignments, unassigned, drivers) = outcome.into_parts();

        JsonAssignmentOutcome {
            id: problem.id().map(str::to_owned),
            assignments,
            unassigned,
            drivers,
        }
    }
}
