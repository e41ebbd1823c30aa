use fleetroute_optimizer::{
    error::OptimizerError,
    json::types::{JsonOptimizationRequest, JsonTour},
    problem::stop::StopId,
    solver::{optimizer::RouteOptimizer, strategy::Strategy},
};

#[test]
fn test_request_to_response() {
    let input: JsonOptimizationRequest = serde_json::from_str(
        r#"{
            "truckId": 4,
            "depot": { "latitude": 18.4861, "longitude": -69.9312 },
            "now": "2025-06-10T12:00:00Z",
            "stops": [
                { "id": 1, "latitude": 18.4735, "longitude": -69.8849, "priority": "urgent", "estimatedTime": 15 },
                { "id": 2, "latitude": 18.4648, "longitude": -69.8932, "priority": "low", "estimatedTime": 20,
                  "latestDelivery": "2025-06-10T11:00:00Z" },
                { "id": 3, "latitude": 18.4900, "longitude": -69.9000, "priority": "high", "estimatedTime": 10,
                  "latestDelivery": "2025-06-10T15:00:00Z" }
            ]
        }"#,
    )
    .unwrap();

    let request = input.build_request().unwrap();
    let optimizer = RouteOptimizer::default();
    let tour = optimizer.solve(&request).unwrap();
    let response = JsonTour::from_tour(
        &tour,
        request.strategy.unwrap_or(optimizer.params().strategy),
        optimizer.params().average_speed,
        request.truck_id,
    )
    .unwrap();

    let mut ids = response.stop_ids.clone();
    ids.sort();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(response.total_time, 25.0);
    assert_eq!(response.algorithm, Strategy::Hybrid);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["algorithm"], "hybrid");
    assert_eq!(json["route"]["truckId"], 4);
    assert_eq!(json["route"]["status"], "planned");
}

#[test]
fn test_unknown_fields_are_rejected() {
    let result = serde_json::from_str::<JsonOptimizationRequest>(
        r#"{ "depot": { "latitude": 0, "longitude": 0 }, "stops": [], "strategy": "hybrid" }"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_service_time_that_does_not_fit_is_rejected() {
    let input: JsonOptimizationRequest = serde_json::from_str(
        r#"{
            "depot": { "latitude": 18.4861, "longitude": -69.9312 },
            "stops": [
                { "id": 9, "latitude": 18.4735, "longitude": -69.8849, "priority": "low",
                  "estimatedTime": 9223372036854775807 }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        input.build_request().unwrap_err(),
        OptimizerError::ServiceTimeOutOfRange(StopId::new(9))
    );
}

#[test]
fn test_total_service_time_overflow_is_an_error() {
    let input: JsonOptimizationRequest = serde_json::from_str(
        r#"{
            "depot": { "latitude": 18.4861, "longitude": -69.9312 },
            "stops": [
                { "id": 1, "latitude": 18.4735, "longitude": -69.8849, "priority": "low",
                  "estimatedTime": 100000000000000000 },
                { "id": 2, "latitude": 18.4648, "longitude": -69.8932, "priority": "low",
                  "estimatedTime": 100000000000000000 }
            ]
        }"#,
    )
    .unwrap();

    let request = input.build_request().unwrap();
    let error = RouteOptimizer::default().solve(&request).unwrap_err();

    assert_eq!(error.kind(), "ServiceTimeOutOfRange");
}
