mod common;

use proptest::prelude::*;
use shift_dispatch::constructive::nearest_candidates;
use shift_dispatch::models::{Load, LoadSet, Point, Position};
use shift_dispatch::{DispatchConfig, MultiStartSolver};

use common::{assert_covers_all, assert_routes_within_budget};

fn generate_point() -> impl Strategy<Value = Point> {
    (-300.0..300.0f64, -300.0..300.0f64).prop_map(|(x, y)| Point::from_coordinates(x, y))
}

prop_compose! {
    fn generate_loads(max: usize)
    (
     ends in prop::collection::vec((generate_point(), generate_point()), 1..max)
    ) -> LoadSet {
        let loads = ends
            .into_iter()
            .enumerate()
            .map(|(k, (pickup, dropoff))| Load::new(k + 1, pickup, dropoff))
            .collect();
        LoadSet::new(loads)
    }
}

prop_compose! {
    fn generate_config()
    (
     shift in 200u64..1500,
     k in 1usize..6,
     seed in any::<u64>()
    ) -> DispatchConfig {
        DispatchConfig::default()
            .with_max_shift_squared_distance(shift * shift)
            .with_max_neighbors(k)
            .with_seed(seed)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_load_served_once_within_budget(loads in generate_loads(40), config in generate_config()) {
        let result = MultiStartSolver::new(config.clone())
            .expect("valid config")
            .run(&loads)
            .expect("has loads");

        assert_covers_all(result.best(), &loads);
        assert_routes_within_budget(result.best(), &loads, config.max_shift_squared_distance());
        prop_assert_eq!(result.trials().len(), 2 * config.max_neighbors());
        prop_assert!(result.trials().iter().all(|t| result.best().cost() <= t.cost));
    }

    #[test]
    fn ranked_trials_ignore_seed(loads in generate_loads(25), config in generate_config(), other in any::<u64>()) {
        let run = |c: DispatchConfig| {
            MultiStartSolver::new(c)
                .expect("valid config")
                .run(&loads)
                .expect("has loads")
                .trials()
                .iter()
                .filter(|t| t.variant >= 0)
                .copied()
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(run(config.clone()), run(config.with_seed(other)));
    }

    #[test]
    fn candidate_pool_is_bounded(
        loads in generate_loads(30),
        k in 1usize..12,
        mask in prop::collection::vec(any::<bool>(), 30),
        current in 0usize..30,
    ) {
        let mut loads = loads;
        for id in loads.ids().collect::<Vec<_>>() {
            if mask[id - 1] {
                loads.mark_completed(id);
            }
        }
        let from = if current == 0 || current > loads.len() {
            Position::Home
        } else {
            Position::At(current)
        };

        let open = loads
            .ids()
            .filter(|&id| !loads.is_completed(id) && Position::At(id) != from)
            .count();
        let hood = nearest_candidates(&loads, from, k);

        prop_assert_eq!(hood.len(), k.min(open));
        let distances: Vec<u64> = hood.iter().map(|n| n.distance).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(hood.iter().all(|n| !loads.is_completed(n.item)));
    }
}
