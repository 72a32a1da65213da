#![allow(dead_code)]

use shift_dispatch::models::{LoadSet, Position, Solution};

/// Every load appears in exactly one route, exactly once.
pub fn assert_covers_all(solution: &Solution, loads: &LoadSet) {
    let mut assigned: Vec<usize> = solution
        .routes()
        .iter()
        .flat_map(|r| r.load_ids().iter().copied())
        .collect();
    assigned.sort_unstable();
    let expected: Vec<usize> = loads.ids().collect();
    assert_eq!(assigned, expected);
    assert_eq!(solution.num_served(), solution.num_unique_served());
}

/// Replays every route, checking the recorded shift distance and that each
/// prefix (including the way home) stays under the budget. A route's first
/// load is exempt when it exceeds the budget on its own.
pub fn assert_routes_within_budget(solution: &Solution, loads: &LoadSet, budget: u64) {
    for route in solution.routes() {
        let mut shift = 0u64;
        let mut at = Position::Home;
        for (k, &id) in route.load_ids().iter().enumerate() {
            let with_home = shift
                + loads.distance(at, id)
                + loads.delivery_distance(id)
                + loads.distance_home(Position::At(id));
            let oversized_first = k == 0 && with_home >= budget;
            assert!(
                with_home < budget || oversized_first,
                "route {:?} exceeds budget at load {id}",
                route.load_ids()
            );
            shift += loads.distance(at, id) + loads.delivery_distance(id);
            at = Position::At(id);
        }
        shift += loads.distance_home(at);
        assert_eq!(shift, route.shift_squared_distance());
    }
}
