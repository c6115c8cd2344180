mod setup;

use dispatch_engine::{
    problem::minutes::Minutes,
    solver::{
        assignment_outcome::UnassignedReason,
        greedy_scheduler::{GreedyAssignmentScheduler, assign_orders},
        scheduler_params::{SchedulerParams, WORK_TIME_CEILING},
    },
};
use serde_json::json;

#[tokio::test]
async fn test_attica_fixture() {
    let problem = setup::create_problem_from_fixture("attica_batch").await;
    let outcome = assign_orders(&problem, SchedulerParams::default());

    let assigned = outcome
        .assignments()
        .iter()
        .map(|record| {
            (
                record.order.clone(),
                record.driver_id.as_str(),
                record.delivery_duration.value(),
                record.deviation,
            )
        })
        .collect::<Vec<_>>();

    assert_eq!(
        assigned,
        vec![
            (json!("1001"), "D1", 126, 0.0),
            (json!("1002"), "D1", 126, 0.0),
            (json!("1003"), "D1", 126, 0.0),
            (json!("2001"), "D1", 160, 1.5),
            (json!("2002"), "D1", 160, 1.5),
            (json!("3001"), "D2", 374, 0.0),
        ]
    );

    let unassigned = outcome
        .unassigned()
        .iter()
        .map(|record| (record.zone.as_str(), record.order.clone(), record.reason))
        .collect::<Vec<_>>();

    assert_eq!(
        unassigned,
        vec![
            ("ΦΘΙΩΤ", json!("3002"), UnassignedReason::NoEligibleDriver),
            ("ΦΘΙΩΤ", json!("3003"), UnassignedReason::NoEligibleDriver),
        ]
    );

    assert_eq!(outcome.committed_minutes("D1"), Some(Minutes::new(698)));
    assert_eq!(outcome.committed_minutes("D2"), Some(Minutes::new(374)));
    assert_eq!(problem.orders_in_unknown_zones(), 1);
}

#[test]
fn test_capacity_invariant() {
    for seed in 0..50 {
        let problem = setup::create_random_problem(seed, 12, 4);
        let outcome = assign_orders(&problem, SchedulerParams::default());

        for load in outcome.driver_loads() {
            let total: Minutes = outcome
                .assignments_for(&load.driver_id)
                .map(|record| record.delivery_duration)
                .sum();
            assert!(total <= WORK_TIME_CEILING, "seed {seed}: {total}");
            assert_eq!(total, load.committed, "seed {seed}");
        }
    }
}

#[test]
fn test_every_known_order_is_reported_once() {
    for seed in 0..50 {
        let problem = setup::create_random_problem(seed, 10, 3);
        let outcome = assign_orders(&problem, SchedulerParams::default());

        let mut reported = outcome
            .assignments()
            .iter()
            .map(|record| record.order.clone())
            .chain(outcome.unassigned().iter().map(|record| record.order.clone()))
            .map(|order| order.as_str().unwrap().to_owned())
            .collect::<Vec<_>>();

        let mut expected = problem
            .zone_catalog()
            .zones()
            .iter()
            .flat_map(|zone| problem.orders().orders_for(zone.name()))
            .map(|order| order.as_str().unwrap().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(reported.len(), problem.schedulable_orders(), "seed {seed}");

        reported.sort();
        expected.sort();
        assert_eq!(reported, expected, "seed {seed}");

        // The zone outside the catalog never shows up
        assert!(reported.iter().all(|order| !order.starts_with("Z10-")));
    }
}

#[test]
fn test_runs_are_deterministic() {
    let problem = setup::create_random_problem(42, 14, 5);

    let first = assign_orders(&problem, SchedulerParams::default());
    let second = GreedyAssignmentScheduler::new(&problem, SchedulerParams::default()).run();

    assert_eq!(first, second);
}

#[test]
fn test_unassigned_order_had_no_room_anywhere() {
    for seed in 0..50 {
        let problem = setup::create_random_problem(seed, 12, 2);
        let outcome = assign_orders(&problem, SchedulerParams::default());

        // Loads only grow, so an order that fit nobody when it was visited
        // cannot fit anybody's final load either
        for record in outcome.unassigned() {
            let zone = problem.zone_catalog().lookup(&record.zone).unwrap();
            let duration = dispatch_engine::problem::traffic::effective_duration(
                zone,
                problem.traffic().get(zone.name()),
            );

            assert!(
                outcome
                    .driver_loads()
                    .iter()
                    .all(|load| load.committed + duration > WORK_TIME_CEILING),
                "seed {seed}: {} could have been assigned",
                record.order
            );
        }
    }
}
