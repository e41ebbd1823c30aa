use fleetroute_optimizer::{
    error::OptimizerError,
    problem::{kilometers::Kilometers, location::Location, priority::Priority, stop::StopIdx},
    solver::{
        ls::two_opt::TwoOptRefiner,
        optimizer::{optimize, optimize_with_time_windows},
        strategy::Strategy,
        tour::route_length,
    },
};
use jiff::{SignedDuration, Timestamp};

mod test_utils;

#[test]
fn test_urgent_stop_is_visited_first() {
    let depot = test_utils::santo_domingo_depot();
    let a = test_utils::stop(1, 18.4735, -69.8849, Priority::Urgent, 15);
    let b = test_utils::stop(2, 18.4648, -69.8932, Priority::Low, 20);
    let stops = vec![a.clone(), b.clone()];

    let tour = optimize(&depot, &stops, Strategy::NearestNeighbor).unwrap();

    assert_eq!(tour.stops(), &[a.clone(), b.clone()][..]);

    let expected = depot.haversine_distance(a.location()).value()
        + a.location().haversine_distance(b.location()).value();
    assert!((tour.total_distance().value() - expected).abs() < 0.01);
    assert_eq!(tour.total_time(), SignedDuration::from_mins(35));
    // (4 * 1 + 1 * 0.5) / 5
    assert!((tour.efficiency() - 90.0).abs() < 1e-9);
}

#[test]
fn test_reversed_line_is_restored() {
    let depot = Location::from_lat_lon(0.0, 0.0);
    let stops: Vec<_> = (0..5)
        .map(|k| test_utils::stop(k, 0.0, 0.01 * (k + 1) as f64, Priority::High, 5))
        .collect();

    let sequential: Vec<StopIdx> = (0..5).map(StopIdx::new).collect();
    let reversed: Vec<StopIdx> = [0, 4, 3, 2, 1].into_iter().map(StopIdx::new).collect();

    let refined = TwoOptRefiner::new(&stops).refine(reversed.clone());

    assert!(route_length(&depot, &stops, &refined) <= route_length(&depot, &stops, &reversed));
    assert!(
        route_length(&depot, &stops, &refined).value()
            <= route_length(&depot, &stops, &sequential).value() + 1e-9
    );
}

#[test]
fn test_time_window_filter_scenario() {
    let depot = Location::from_lat_lon(0.0, 0.0);
    let now: Timestamp = "2025-06-10T12:00:00Z".parse().unwrap();

    let stops = vec![
        test_utils::stop_due(1, 0.0, 0.01, Some(now - SignedDuration::from_mins(30))),
        test_utils::stop_due(2, 0.0, 0.02, None),
        test_utils::stop_due(3, 0.0, 0.03, Some(now + SignedDuration::from_hours(4))),
        test_utils::stop_due(4, 0.0, 0.04, Some(now + SignedDuration::from_hours(2))),
    ];

    let filtered = fleetroute_optimizer::solver::time_window_filter::filter_and_order(&stops, now);
    assert_eq!(
        filtered.iter().map(|stop| stop.id().get()).collect::<Vec<_>>(),
        vec![4, 3, 2]
    );

    let tour = optimize_with_time_windows(&depot, &stops, now).unwrap();
    let mut ids: Vec<_> = tour.stop_ids().map(|id| id.get()).collect();
    ids.sort();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_metrics_hold_for_every_strategy() {
    let depot = test_utils::santo_domingo_depot();
    let priorities = [
        Priority::Low,
        Priority::Urgent,
        Priority::Medium,
        Priority::High,
    ];
    let stops: Vec<_> = (0..20)
        .map(|k| {
            let lat = 18.40 + ((k * 7) % 11) as f64 * 0.01;
            let lon = -70.00 + ((k * 5) % 13) as f64 * 0.01;
            test_utils::stop(k, lat, lon, priorities[k as usize % 4], 10)
        })
        .collect();

    for strategy in [Strategy::NearestNeighbor, Strategy::TwoOpt, Strategy::Hybrid] {
        let tour = optimize(&depot, &stops, strategy).unwrap();

        let mut ids: Vec<_> = tour.stop_ids().map(|id| id.get()).collect();
        ids.sort();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());

        assert!(tour.total_distance() >= Kilometers::ZERO);
        assert_eq!(tour.total_time(), SignedDuration::from_mins(200));
        assert!((0.0..=100.0).contains(&tour.efficiency()));
    }
}

#[test]
fn test_empty_input_for_every_strategy() {
    let depot = test_utils::santo_domingo_depot();

    for strategy in [Strategy::NearestNeighbor, Strategy::TwoOpt, Strategy::Hybrid] {
        let tour = optimize(&depot, &[], strategy).unwrap();

        assert!(tour.is_empty());
        assert_eq!(tour.total_distance(), Kilometers::ZERO);
        assert_eq!(tour.total_time(), SignedDuration::ZERO);
        assert_eq!(tour.efficiency(), 0.0);
    }
}

#[test]
fn test_unknown_strategy_name_fails() {
    assert_eq!(
        Strategy::from_name(Some("nearest_neighbour")),
        Err(OptimizerError::InvalidStrategy(String::from(
            "nearest_neighbour"
        )))
    );
    assert_eq!(Strategy::from_name(None), Ok(Strategy::Hybrid));
}

#[test]
fn test_distance_is_symmetric() {
    let points = [
        Location::from_lat_lon(18.4861, -69.9312),
        Location::from_lat_lon(-33.8688, 151.2093),
        Location::from_lat_lon(51.5074, -0.1278),
        Location::from_lat_lon(0.0, 179.9),
    ];

    for a in &points {
        assert_eq!(a.haversine_distance(a), Kilometers::ZERO);

        for b in &points {
            let forward = a.haversine_distance(b).value();
            let backward = b.haversine_distance(a).value();
            assert!((forward - backward).abs() < 1e-9);
        }
    }
}
