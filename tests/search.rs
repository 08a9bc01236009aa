use a_star_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sums the Cost of every Step of `path` the way the search does.
fn path_cost<G: Graph>(graph: &G, path: &[G::Label]) -> Cost {
    path.windows(2)
        .map(|step| {
            let from = graph.create_node(step[0].clone(), None).unwrap();
            let to = graph.create_node(step[1].clone(), None).unwrap();
            from.get_cost_to_leave(&to).expect("consecutive labels must be neighbours")
        })
        .sum()
}

fn random_grid(seed: u64, size: usize, diagonality: bool, heuristic: Heuristic) -> SquareGrid {
    let mut rng = WyRand::new_seed(seed);
    let mut cells: Vec<Vec<f64>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.generate_range(0_u32..10) {
                    0 | 1 => 0.0,
                    weight => weight as f64,
                })
                .collect()
        })
        .collect();
    let corner = (size - 1, size - 1);
    // both corners are used as endpoints
    cells[0][0] = 1.0;
    cells[corner.0][corner.1] = 1.0;
    let mut grid = SquareGrid::new(cells, diagonality, heuristic).unwrap();
    grid.set_start((0, 0)).unwrap();
    grid.set_end(corner).unwrap();
    grid
}

#[test]
fn open_grid_straight_line() {
    init();
    let mut grid = SquareGrid::new(vec![vec![1.0; 4]; 4], false, Heuristic::Euclidean).unwrap();
    grid.set_start((0, 0)).unwrap();
    grid.set_end((0, 3)).unwrap();

    let outcome = grid.solve(&SearchConfig::default()).unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.path, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(path.cost, 3.0);
}

#[test]
fn network_detour() {
    init();
    let mut network =
        Network::from_csv("A,B,1\nB,C,1\nA,C,5\n".as_bytes()).unwrap();
    network.set_start("A").unwrap();
    network.set_end("C").unwrap();

    let outcome = network.solve(&SearchConfig::default()).unwrap().clone();
    let path = outcome.path().unwrap();
    assert_eq!(path.path, vec!["A", "B", "C"]);
    assert_eq!(path.cost, 2.0);
    assert_eq!(path_cost(&network, &path.path), 2.0);
    assert_eq!(network.solution(), Some(&outcome));
}

#[test]
fn disjoint_network() {
    init();
    let mut network = Network::from_edges(vec![
        ("J", "K", 1.0),
        ("K", "L", 2.0),
        ("L", "J", 2.5),
        ("M", "N", 1.0),
    ])
    .unwrap();
    network.set_start("J").unwrap();
    network.set_end("N").unwrap();

    let outcome = network.solve(&SearchConfig::default()).unwrap();
    assert_eq!(outcome, &Outcome::NotFound { iterations: 3 });
}

#[test]
fn wall_between_start_and_end() {
    init();
    let mut cells = vec![vec![1.0; 6]; 5];
    for row in cells.iter_mut() {
        row[3] = 0.0;
    }
    let mut grid = SquareGrid::new(cells, true, Heuristic::Euclidean).unwrap();
    grid.set_start((2, 0)).unwrap();
    grid.set_end((2, 5)).unwrap();

    match grid.solve(&SearchConfig::default()).unwrap() {
        // 5 rows * 3 columns can be reached from the start
        Outcome::NotFound { iterations } => assert!(*iterations >= 15),
        other => panic!("expected no path, got {:?}", other),
    }
    assert!(grid.solved_cells().is_none());
}

#[test]
fn diagonal_and_straight_steps() {
    let grid = SquareGrid::new(vec![vec![3.0; 2]; 2], true, Heuristic::Octile).unwrap();
    let origin = grid.create_node((0, 0), None).unwrap();
    let straight = grid.create_node((0, 1), None).unwrap();
    let diagonal = grid.create_node((1, 1), None).unwrap();

    assert_eq!(origin.get_cost_to_leave(&straight), Some(3.0));
    assert_eq!(
        origin.get_cost_to_leave(&diagonal),
        Some(3.0 * std::f64::consts::SQRT_2)
    );
}

#[test]
fn network_rejects_duplicates_at_load() {
    for source in ["A,B,1\nA,B,1\n", "A,B,1\nB,C,2\nB,A,1\n"] {
        assert!(matches!(
            Network::from_csv(source.as_bytes()),
            Err(Error::DuplicateEdge { .. })
        ));
    }
}

#[test]
fn found_paths_are_valid() {
    init();
    let mut found = 0;
    for seed in 0..40 {
        let diagonality = seed % 2 == 0;
        let heuristic = if diagonality {
            Heuristic::Octile
        } else {
            Heuristic::Manhattan
        };
        let grid = random_grid(seed, 12, diagonality, heuristic);
        let (start, end) = grid.endpoints().unwrap();

        match run_search(&grid, heuristic, &SearchConfig::default()).unwrap() {
            Outcome::Found(path) => {
                found += 1;
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                for step in path.windows(2) {
                    let neighbours = grid.find_neighbours(&step[0]).unwrap();
                    assert!(neighbours.iter().any(|(label, _)| *label == step[1]));
                    assert!(grid.is_accessible(&step[1]));
                }
                let cost = path_cost(&grid, &path.path);
                assert!((cost - path.cost).abs() < 1e-9, "{} != {}", cost, path.cost);
            }
            Outcome::NotFound { iterations } => assert!(iterations >= 1),
            Outcome::LimitReached(_) => panic!("the limit is never reached on a 12x12 grid"),
        }
    }
    assert!(found > 0);
}

#[test]
fn matches_dijkstra_cost() {
    // with an admissible Heuristic A* finds Paths as cheap as those found without one
    for seed in 100..120 {
        let grid = random_grid(seed, 10, true, Heuristic::Octile);
        let informed = run_search(&grid, Heuristic::Octile, &SearchConfig::default()).unwrap();
        let uninformed = run_search(&grid, Heuristic::Zero, &SearchConfig::default()).unwrap();
        match (informed, uninformed) {
            (Outcome::Found(a), Outcome::Found(b)) => assert!((a.cost - b.cost).abs() < 1e-9),
            (Outcome::NotFound { .. }, Outcome::NotFound { .. }) => {}
            other => panic!("searches disagree: {:?}", other),
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let grid = random_grid(7, 16, true, Heuristic::Euclidean);
    let first = run_search(&grid, Heuristic::Euclidean, &SearchConfig::default()).unwrap();
    for _ in 0..3 {
        let again = run_search(&grid, Heuristic::Euclidean, &SearchConfig::default()).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn iteration_limit_returns_best_effort() {
    init();
    let mut grid = SquareGrid::new(vec![vec![1.0; 30]; 30], true, Heuristic::Zero).unwrap();
    grid.set_start((0, 0)).unwrap();
    grid.set_end((29, 29)).unwrap();

    let config = SearchConfig::with_max_iterations(50);
    match grid.solve(&config).unwrap() {
        Outcome::LimitReached(path) => {
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_ne!(path.last(), Some(&(29, 29)));
        }
        other => panic!("expected the limit to be reached, got {:?}", other),
    }
}

#[test]
fn faithful_duplicates_expand_more() {
    let grid = random_grid(3, 14, false, Heuristic::Zero);
    let suppressed = run_search(&grid, Heuristic::Zero, &SearchConfig::default()).unwrap();
    let faithful = run_search(&grid, Heuristic::Zero, &SearchConfig::FAITHFUL).unwrap();
    match (suppressed, faithful) {
        (Outcome::Found(a), Outcome::Found(b)) => assert!((a.cost - b.cost).abs() < 1e-9),
        (Outcome::NotFound { iterations: a }, Outcome::NotFound { iterations: b }) => {
            assert!(a <= b)
        }
        other => panic!("searches disagree: {:?}", other),
    }
}

#[test]
fn solve_requires_configuration() {
    let mut grid = SquareGrid::new(vec![vec![1.0; 3]], false, Heuristic::Zero).unwrap();
    assert!(matches!(
        grid.solve(&SearchConfig::default()),
        Err(Error::Configuration(_))
    ));
    grid.set_start((0, 0)).unwrap();
    assert!(matches!(
        grid.solve(&SearchConfig::default()),
        Err(Error::Configuration(_))
    ));
}
