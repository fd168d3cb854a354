mod common;

use common::{ids, metro_graph, names, sample_graph};
use metro_planner_lib::{
    compare_routes, plan_route, CostModel, Error, RouteAlgorithm, RouteRequest, SearchLimits,
};

#[test]
fn heuristic_plan_for_same_line_journey() {
    let graph = metro_graph();
    let plan = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("e1", "AZUL", "e6"),
    )
    .expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Heuristic);
    assert_eq!(
        names(&graph, &plan.stations()),
        ["E1", "E2", "E3", "E4", "E5", "E6"]
    );
    assert_eq!(plan.transfers, 0);
    assert!((plan.total_minutes() - 81.6).abs() < 1e-6);

    let azul = graph.line_id("azul");
    assert!(plan.stops.iter().all(|stop| stop.line == azul));
}

#[test]
fn heuristic_plan_counts_transfers() {
    let graph = metro_graph();
    let plan = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E1", "azul", "E7"),
    )
    .expect("route exists");

    assert_eq!(plan.transfers, 1);
    assert_eq!(plan.goal, graph.station_id("E7").unwrap());
    assert!((plan.total_minutes() - 84.4).abs() < 1e-6);
}

#[test]
fn blind_plan_ignores_line_and_has_no_annotations() {
    let graph = metro_graph();
    let plan = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::new("E1", "no-such-line", "E6", RouteAlgorithm::Blind),
    )
    .expect("blind search does not resolve the line");

    assert_eq!(plan.algorithm, RouteAlgorithm::Blind);
    assert_eq!(plan.stations(), ids(&graph, &["E1", "E2", "E3", "E4", "E5", "E6"]));
    assert!(plan.stops.iter().all(|stop| stop.line.is_none()));
    assert_eq!(plan.transfers, 0);
}

#[test]
fn unknown_station_reports_suggestions() {
    let graph = metro_graph();
    let error = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E1X", "azul", "E6"),
    )
    .expect_err("unknown origin");

    match &error {
        Error::UnknownStation { name, suggestions } => {
            assert_eq!(name, "E1X");
            assert!(suggestions.contains(&"E1".to_string()));
            assert!(suggestions.len() <= 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.to_string().contains("Did you mean"));
}

#[test]
fn unknown_destination_is_rejected() {
    let graph = metro_graph();
    let error = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::blind("E1", "E99"),
    )
    .expect_err("unknown destination");
    assert!(matches!(error, Error::UnknownStation { ref name, .. } if name == "E99"));
}

#[test]
fn unknown_line_reports_suggestions() {
    let graph = metro_graph();
    let error = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E1", "azull", "E6"),
    )
    .expect_err("unknown line");

    match error {
        Error::UnknownLine { name, suggestions } => {
            assert_eq!(name, "azull");
            assert_eq!(suggestions.first().map(String::as_str), Some("azul"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn origin_line_must_serve_origin() {
    let graph = metro_graph();
    let error = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E1", "verde", "E6"),
    )
    .expect_err("verde does not stop at E1");

    assert!(matches!(error, Error::StationNotOnLine { .. }));
    assert_eq!(
        error.to_string(),
        "station E1 is not served by line verde"
    );
}

#[test]
fn disconnected_stations_report_route_not_found() {
    let graph = sample_graph();
    for algorithm in [RouteAlgorithm::Blind, RouteAlgorithm::Heuristic] {
        let request = RouteRequest::new("R1", "red", "G2", algorithm);
        let error = plan_route(&graph, &CostModel::default(), &request)
            .expect_err("green line is isolated");
        assert!(
            matches!(
                error,
                Error::RouteNotFound { ref start, ref goal } if start == "R1" && goal == "G2"
            ),
            "{algorithm}: {error:?}"
        );
    }
}

#[test]
fn expansion_limit_is_enforced_for_both_algorithms() {
    let graph = metro_graph();
    let limits = SearchLimits {
        max_expansions: Some(2),
    };

    for algorithm in [RouteAlgorithm::Blind, RouteAlgorithm::Heuristic] {
        let request = RouteRequest::new("E1", "azul", "E14", algorithm).with_limits(limits);
        let error = plan_route(&graph, &CostModel::default(), &request)
            .expect_err("two expansions are not enough");
        match error {
            Error::SearchLimitExceeded {
                algorithm: reported,
                limit,
            } => {
                assert_eq!(reported, algorithm);
                assert_eq!(limit, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn unbounded_limits_still_find_routes() {
    let graph = metro_graph();
    let request =
        RouteRequest::heuristic("E11", "vermelha", "E14").with_limits(SearchLimits::unbounded());
    let plan = plan_route(&graph, &CostModel::default(), &request).expect("route exists");
    assert_eq!(plan.start, graph.station_id("E11").unwrap());
    assert_eq!(plan.goal, graph.station_id("E14").unwrap());
}

#[test]
fn origin_equal_to_destination_is_a_zero_hop_plan() {
    let graph = metro_graph();
    let plan = plan_route(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E5", "amarela", "E5"),
    )
    .expect("trivial route");
    assert_eq!(plan.hop_count(), 0);
    assert_eq!(plan.travel_hours, 0.0);
}

#[test]
fn compare_returns_both_results() {
    let graph = sample_graph();
    let comparison = compare_routes(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("R1", "red", "B3"),
    )
    .expect("valid query");

    let blind = comparison.blind.expect("blind route");
    let heuristic = comparison.heuristic.expect("heuristic route");

    assert_eq!(names(&graph, &blind.stations()), ["R1", "X", "B3"]);
    assert!((blind.total_minutes() - 10.0).abs() < 1e-6);
    assert_eq!(heuristic.transfers, 1);
    assert!((heuristic.total_minutes() - 14.0).abs() < 1e-6);
}

#[test]
fn compare_folds_missing_routes_into_none() {
    let graph = sample_graph();
    let comparison = compare_routes(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("G1", "green", "X"),
    )
    .expect("valid query");
    assert!(comparison.blind.is_none());
    assert!(comparison.heuristic.is_none());
    assert!(comparison.heuristic_skipped.is_none());
}

#[test]
fn compare_keeps_blind_route_when_origin_line_is_wrong() {
    let graph = metro_graph();
    let comparison = compare_routes(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E7", "azul", "E6"),
    )
    .expect("stations are valid");

    let blind = comparison.blind.expect("blind search ignores the line");
    assert_eq!(blind.start, graph.station_id("E7").unwrap());
    assert_eq!(blind.goal, graph.station_id("E6").unwrap());
    assert!(comparison.heuristic.is_none());
    assert_eq!(
        comparison.heuristic_skipped.as_deref(),
        Some("station E7 is not served by line azul")
    );
}

#[test]
fn compare_keeps_blind_route_when_origin_line_is_unknown() {
    let graph = metro_graph();
    let comparison = compare_routes(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E1", "azull", "E6"),
    )
    .expect("stations are valid");

    assert!(comparison.blind.is_some());
    assert!(comparison.heuristic.is_none());
    let reason = comparison.heuristic_skipped.expect("skip reason");
    assert!(reason.starts_with("unknown line: azull"), "{reason}");
}

#[test]
fn compare_still_fails_fast_on_unknown_stations() {
    let graph = metro_graph();
    let error = compare_routes(
        &graph,
        &CostModel::default(),
        &RouteRequest::heuristic("E1", "azul", "E66"),
    )
    .expect_err("station validation applies");
    assert!(matches!(error, Error::UnknownStation { ref name, .. } if name == "E66"));
}

#[test]
fn custom_cost_model_changes_heuristic_choice() {
    let graph = sample_graph();
    // Without a transfer penalty the route through X is cheapest on any line.
    let free_transfers = CostModel::new(30.0, 0.0).expect("valid cost model");
    let plan = plan_route(
        &graph,
        &free_transfers,
        &RouteRequest::heuristic("R1", "red", "B3"),
    )
    .expect("route exists");
    assert_eq!(names(&graph, &plan.stations()), ["R1", "X", "B3"]);
    assert!((plan.total_minutes() - 10.0).abs() < 1e-6);
}
