//! End-to-end tests: tile map + graph adapter + bounded BFS + placement.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use marga::search::{self, Graph};
use marga::{choose_spawn, PlacementConfig, TileCoord, TileKind, TileMap, TileMapGraph};

fn init_logs() {
    env_logger::try_init().ok();
}

fn land_graph(map: &TileMap) -> TileMapGraph<'_, TileMap, impl Fn(&TileKind) -> bool> {
    TileMapGraph::new(map, |tile: &TileKind| tile.is_land())
}

fn open_5x5() -> TileMap {
    TileMap::filled(5, 5, TileKind::Grass)
}

/// 5x5 map with row y = 2 impassable except a gap at x = 2.
fn gapped_5x5() -> TileMap {
    TileMap::from_ascii(
        ".....\n\
         .....\n\
         ##.##\n\
         .....\n\
         .....",
    )
    .unwrap()
}

#[test]
fn open_grid_diagonal_corners_are_nine_nodes_apart() {
    init_logs();
    let map = open_5x5();
    let graph = land_graph(&map);

    let path = search::shortest_path(&graph, TileCoord::new(0, 0), TileCoord::new(4, 4), 1000);

    // Manhattan distance 8 edges, so 9 nodes inclusive
    assert_eq!(path.len(), 9);
    assert_eq!(path.first(), Some(&TileCoord::new(0, 0)));
    assert_eq!(path.last(), Some(&TileCoord::new(4, 4)));
}

#[test]
fn blocked_row_routes_through_the_gap() {
    init_logs();
    let map = gapped_5x5();
    let graph = land_graph(&map);

    let path = search::shortest_path(&graph, TileCoord::new(0, 0), TileCoord::new(4, 4), 1000);

    assert!(!path.is_empty());
    assert!(path.contains(&TileCoord::new(2, 2)));
}

#[test]
fn returned_path_is_a_chain_of_graph_edges() {
    let map = gapped_5x5();
    let graph = land_graph(&map);

    let path = search::shortest_path(&graph, TileCoord::new(0, 0), TileCoord::new(4, 4), 1000);

    for pair in path.windows(2) {
        assert!(
            graph.neighbors(&pair[0]).contains(&pair[1]),
            "{:?} -> {:?} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn reachable_covers_the_whole_open_grid() {
    let map = open_5x5();
    let graph = land_graph(&map);

    let region = search::reachable(&graph, TileCoord::new(0, 0), 1000);

    assert_eq!(region.len(), 25);
    let as_set: HashSet<TileCoord> = region.into_iter().collect();
    let expected: HashSet<TileCoord> = map.coords().collect();
    assert_eq!(as_set, expected);
}

#[test]
fn reachable_order_is_nondecreasing_in_distance() {
    let map = open_5x5();
    let graph = land_graph(&map);
    let start = TileCoord::new(2, 2);

    let region = search::reachable(&graph, start, 1000);

    let distances: Vec<i32> = region.iter().map(|c| start.manhattan_distance(c)).collect();
    for pair in distances.windows(2) {
        assert!(pair[0] <= pair[1], "distances not layered: {:?}", distances);
    }
}

#[test]
fn zero_budget_degenerate_cases() {
    let map = open_5x5();
    let graph = land_graph(&map);
    let start = TileCoord::new(1, 1);

    assert_eq!(search::reachable(&graph, start, 0), vec![start]);
    assert_eq!(search::shortest_path(&graph, start, start, 0), vec![start]);
    assert!(search::shortest_path(&graph, start, TileCoord::new(2, 1), 0).is_empty());
}

#[test]
fn start_off_the_map_is_a_singleton_region() {
    let map = open_5x5();
    let graph = land_graph(&map);
    let off = TileCoord::new(-3, 9);

    assert_eq!(search::reachable(&graph, off, 1000), vec![off]);
    assert!(search::shortest_path(&graph, off, TileCoord::new(0, 0), 1000).is_empty());
}

#[test]
fn disjoint_components_are_mutually_unreachable() {
    let map = TileMap::from_ascii(
        "..w..\n\
         ..w..\n\
         ..w..",
    )
    .unwrap();
    let graph = land_graph(&map);

    let west = TileCoord::new(0, 1);
    let east = TileCoord::new(4, 1);

    assert!(search::shortest_path(&graph, west, east, 10_000).is_empty());
    let region = search::reachable(&graph, west, 10_000);
    assert_eq!(region.len(), 6);
    assert!(!region.contains(&east));
}

#[test]
fn growing_the_budget_never_shrinks_results() {
    let map = gapped_5x5();
    let graph = land_graph(&map);
    let start = TileCoord::new(0, 0);
    let goal = TileCoord::new(4, 4);

    let mut prev_region = 0;
    let mut found_len: Option<usize> = None;
    for budget in 0..40 {
        let region = search::reachable(&graph, start, budget);
        assert!(region.len() >= prev_region, "region shrank at budget {budget}");
        prev_region = region.len();

        let path = search::shortest_path(&graph, start, goal, budget);
        match (found_len, path.is_empty()) {
            (None, false) => found_len = Some(path.len()),
            (Some(len), false) => assert_eq!(path.len(), len),
            (Some(_), true) => panic!("found path lost at budget {budget}"),
            (None, true) => {}
        }
    }
    assert!(found_len.is_some(), "path never found within tested budgets");
}

/// The engine is not tied to tile maps: an implicit, unbounded graph.
struct IntegerLine;

impl Graph for IntegerLine {
    type Node = i64;

    fn neighbors(&self, node: &i64) -> Vec<i64> {
        vec![node - 1, node + 1]
    }
}

#[test]
fn budget_bounds_traversal_of_an_unbounded_graph() {
    let region = search::reachable(&IntegerLine, 0, 50);
    // 50 expansions discover at most one new node each side per step
    assert!(region.len() <= 102);
    assert!(region.contains(&0));

    let path = search::shortest_path(&IntegerLine, -3, 4, 1000);
    assert_eq!(path.len(), 8);
    assert!(search::shortest_path(&IntegerLine, 0, 1_000_000, 100).is_empty());
}

#[test]
fn placement_lands_on_the_mainland() {
    init_logs();
    // 4-tile pond-side pocket on the left, 20-tile mainland on the right
    let map = TileMap::from_ascii(
        "..ww.....\n\
         ..ww.....\n\
         wwww.....\n\
         .www.....",
    )
    .unwrap();
    let graph = land_graph(&map);
    let candidates = map.tiles_matching(TileKind::is_land);

    let config = PlacementConfig {
        min_reachable: 10,
        max_attempts: 64,
        max_iterations: 1000,
    };

    let mut rng = StdRng::seed_from_u64(42);
    let mainland: HashSet<TileCoord> = search::reachable(&graph, TileCoord::new(8, 0), 1000)
        .into_iter()
        .collect();

    if let Some(spawn) = choose_spawn(&graph, &candidates, &config, &mut rng) {
        assert!(mainland.contains(&spawn), "spawn {spawn:?} not on mainland");
    }
}

#[test]
fn placement_gives_up_on_an_all_island_map() {
    let map = TileMap::from_ascii(
        ".w.w.\n\
         wwwww\n\
         .w.w.",
    )
    .unwrap();
    let graph = land_graph(&map);
    let candidates = map.tiles_matching(TileKind::is_land);

    let config = PlacementConfig {
        min_reachable: 2,
        max_attempts: 16,
        max_iterations: 1000,
    };

    let mut rng = StdRng::seed_from_u64(1);
    assert!(choose_spawn(&graph, &candidates, &config, &mut rng).is_none());
}
