use tracing::{debug, info, instrument};

use crate::{
    problem::{
        assignment_problem::AssignmentProblem, driver::DriverIdx, minutes::Minutes,
        time_tracker::DriverTimeTracker, traffic::adjusted_duration,
    },
    solver::{
        assignment_outcome::{
            AssignmentOutcome, AssignmentRecord, DriverLoad, UnassignedReason, UnassignedRecord,
        },
        scheduler_params::SchedulerParams,
    },
};

/// Single pass, first-fit allocation of orders to drivers.
///
/// Zones are visited in catalog order and their orders in input order. Each
/// order goes to the first driver in roster order whose committed time plus
/// the order's effective duration stays within the ceiling. Nothing is ever
/// reassigned.
///
/// [`run`](Self::run) consumes the scheduler: a run cannot be resumed or
/// repeated, and its tracker is not shared with any other run.
pub struct GreedyAssignmentScheduler<'a> {
    problem: &'a AssignmentProblem,
    params: SchedulerParams,
    tracker: DriverTimeTracker,
    orders_per_driver: Vec<usize>,
}

impl<'a> GreedyAssignmentScheduler<'a> {
    pub fn new(problem: &'a AssignmentProblem, params: SchedulerParams) -> Self {
        Self {
            problem,
            params,
            tracker: problem.roster().time_tracker(),
            orders_per_driver: vec![0; problem.roster().len()],
        }
    }

    /// Starts the run from minutes already committed to the drivers.
    /// Drivers the tracker does not cover start at zero.
    pub fn with_tracker(mut self, mut tracker: DriverTimeTracker) -> Self {
        tracker.ensure_len(self.problem.roster().len());
        self.tracker = tracker;
        self
    }

    #[instrument(skip_all, level = "debug")]
    pub fn run(mut self) -> AssignmentOutcome {
        let problem = self.problem;
        let catalog = problem.zone_catalog();
        let roster = problem.roster();

        info!(
            "Assignment: {} orders over {} zones for {} drivers, ceiling {}",
            problem.schedulable_orders(),
            catalog.len(),
            roster.len(),
            self.params.work_time_ceiling
        );

        let mut assignments = Vec::new();
        let mut unassigned = Vec::new();

        for zone in catalog.zones() {
            let orders = problem.orders().orders_for(zone.name());
            if orders.is_empty() {
                continue;
            }

            let adjusted = adjusted_duration(zone, problem.traffic().get(zone.name()));

            for order in orders {
                match self.first_fit(adjusted.duration) {
                    Some(driver_idx) => {
                        let driver = roster.driver(driver_idx);
                        self.tracker.commit(driver_idx, adjusted.duration);
                        self.orders_per_driver[driver_idx.get()] += 1;

                        debug!(
                            "Assignment: {} order {} -> {} ({}, committed {})",
                            zone.name(),
                            order,
                            driver.id(),
                            adjusted.duration,
                            self.tracker.committed(driver_idx)
                        );

                        assignments.push(AssignmentRecord {
                            zone: zone.name().to_owned(),
                            order: order.clone(),
                            driver_id: driver.id().to_owned(),
                            delivery_duration: adjusted.duration,
                            traffic_volume: adjusted.volume,
                            traffic_multiplier: adjusted.multiplier,
                            deviation: driver.deviation_for(zone.name()),
                        });
                    }
                    None => {
                        debug!(
                            "Assignment: {} order {} ({}) has no eligible driver",
                            zone.name(),
                            order,
                            adjusted.duration
                        );

                        unassigned.push(UnassignedRecord {
                            zone: zone.name().to_owned(),
                            order: order.clone(),
                            reason: UnassignedReason::NoEligibleDriver,
                        });
                    }
                }
            }
        }

        info!(
            "Assignment finished: assigned = {}, unassigned = {}",
            assignments.len(),
            unassigned.len()
        );

        let driver_loads = self
            .tracker
            .iter_idx()
            .take(roster.len())
            .map(|(driver_idx, committed)| DriverLoad {
                driver_id: roster.driver(driver_idx).id().to_owned(),
                committed,
                orders: self.orders_per_driver[driver_idx.get()],
            })
            .collect();

        AssignmentOutcome::new(assignments, unassigned, driver_loads)
    }

    /// First driver in roster order that can take `duration`.
    fn first_fit(&self, duration: Minutes) -> Option<DriverIdx> {
        let ceiling = self.params.work_time_ceiling;

        DriverIdx::range(self.problem.roster().len())
            .find(|&driver_idx| self.tracker.fits(driver_idx, duration, ceiling))
    }
}

/// Runs a fresh scheduler over `problem`.
pub fn assign_orders(problem: &AssignmentProblem, params: SchedulerParams) -> AssignmentOutcome {
    GreedyAssignmentScheduler::new(problem, params).run()
}
