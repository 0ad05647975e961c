//! A* search over a [`HexMap`].
use rustc_hash::FxHashMap;
use slab::Slab;

use crate::{
    coord::HexCoord, map::HexMap, neighbor::Neighborhood, node::SearchNode, path::HexPath,
    queue::PriorityQueue, NodeId,
};

/// A* search between two cells of a [`HexMap`].
///
/// Walkability is only enforced through [`HexMap::neighbors_into`], so the start cell
/// is expanded even when blocked, while a blocked goal can only be reached when it is
/// the start itself.
///
/// # Arguments
/// * `map` - The map to search. Its [`Neighborhood`] supplies the heuristic and edge costs.
/// * `start` - The starting position.
/// * `goal` - The goal position.
/// * `size_hint` - Initial capacity for the open and closed sets.
///
/// # Returns
/// * [`Option<HexPath>`] - The path from `start` to `goal` inclusive, or `None` once every reachable cell is closed.
pub(crate) fn astar_hex<N: Neighborhood>(
    map: &HexMap<N>,
    start: HexCoord,
    goal: HexCoord,
    size_hint: usize,
) -> Option<HexPath> {
    let neighborhood = map.neighborhood();

    let mut open = PriorityQueue::with_capacity(size_hint / 2);
    // Finalized nodes. Parent links index into this arena.
    let mut closed: Slab<SearchNode> = Slab::with_capacity(size_hint);
    let mut closed_ids: FxHashMap<HexCoord, NodeId> = FxHashMap::default();
    let mut best_costs: FxHashMap<HexCoord, f32> = FxHashMap::default();
    let mut neighbors = Vec::with_capacity(6);

    let start_node = SearchNode::start(start, neighborhood.heuristic(start, goal));
    best_costs.insert(start, start_node.g_cost);
    open.enqueue(start_node, start_node.f_cost());

    while let Some(current) = open.dequeue() {
        if current.coord == goal {
            return Some(retrace(&closed, current));
        }

        // A stale entry left behind by a cheaper re-enqueue.
        if closed_ids.contains_key(&current.coord) {
            continue;
        }

        let index = closed.insert(current);
        closed_ids.insert(current.coord, index);

        neighbors.clear();
        map.neighbors_into(current.coord, &mut neighbors);

        for &neighbor in neighbors.iter() {
            if closed_ids.contains_key(&neighbor) {
                continue;
            }

            let mut node = SearchNode::new(neighbor);
            let tentative_cost = current.g_cost + neighborhood.cost(current.coord, neighbor);
            let known_cost = best_costs.get(&neighbor).copied().unwrap_or(node.g_cost);

            if tentative_cost >= known_cost && open.contains(&node) {
                continue;
            }

            node.g_cost = tentative_cost;
            node.h_cost = neighborhood.heuristic(neighbor, goal);
            node.parent = Some(index);

            best_costs.insert(neighbor, tentative_cost);
            open.enqueue(node, node.f_cost());
        }
    }

    None
}

fn retrace(closed: &Slab<SearchNode>, goal: SearchNode) -> HexPath {
    let mut steps = vec![goal.coord];
    let mut current = goal.parent;

    while let Some(index) = current {
        let node = &closed[index];
        steps.push(node.coord);
        current = node.parent;
    }

    steps.reverse();
    HexPath::new(steps, goal.g_cost)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::{
        cell::Cell,
        coord::hex_distance,
        map::MapSettingsBuilder,
    };

    fn grid(width: u32, height: u32) -> HexMap {
        HexMap::new(&MapSettingsBuilder::new(width, height).build())
    }

    fn assert_connected(path: &HexPath) {
        for pair in path.path().windows(2) {
            assert!(
                pair[0].is_adjacent(pair[1]),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    /// Breadth-first step count, used as the reference for optimal path lengths.
    fn bfs_steps(map: &HexMap, start: HexCoord, goal: HexCoord) -> Option<usize> {
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back((start, 0));

        while let Some((pos, steps)) = queue.pop_front() {
            if pos == goal {
                return Some(steps);
            }
            for cell in map.neighbors(pos) {
                if seen.insert(cell.coord()) {
                    queue.push_back((cell.coord(), steps + 1));
                }
            }
        }

        None
    }

    #[test]
    fn test_astar_start_is_goal() {
        let map = grid(3, 3);
        let start = HexCoord::new(1, 1);

        let path = astar_hex(&map, start, start, 16).unwrap();

        assert_eq!(path.path(), &[start]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn test_astar_blocked_start_is_goal() {
        let mut map = grid(3, 3);
        let start = HexCoord::new(1, 1);
        map.toggle_walkable(start).unwrap();

        let path = astar_hex(&map, start, start, 16).unwrap();

        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_astar_small_grid() {
        let mut map: HexMap = HexMap::default();
        for x in 0..3 {
            for z in 0..2 {
                map.add_cell(Cell::new(x, z));
            }
        }

        let start = HexCoord::new(0, 0);
        let goal = HexCoord::new(2, 1);

        let path = astar_hex(&map, start, goal, 16).unwrap();

        assert_eq!(path.path()[0], start);
        assert_eq!(path.goal(), Some(goal));
        assert_connected(&path);
        assert_eq!(path.steps(), hex_distance(start, goal) as usize);
        assert_eq!(path.steps(), 3);
        assert_eq!(path.cost(), 3.0);
    }

    #[test]
    fn test_astar_3x3_every_pair_is_optimal() {
        let map = grid(3, 3);
        let coords: Vec<HexCoord> = map.cells().map(Cell::coord).collect();

        for &start in &coords {
            for &goal in &coords {
                let path = astar_hex(&map, start, goal, 16).unwrap();

                assert_eq!(path.start(), Some(start));
                assert_eq!(path.goal(), Some(goal));
                assert_connected(&path);
                assert_eq!(path.steps(), hex_distance(start, goal) as usize);
                assert_eq!(path.cost(), path.steps() as f32);
            }
        }
    }

    #[test]
    fn test_astar_with_wall() {
        let mut map = grid(5, 5);
        // Wall across column 2, leaving only the top row open.
        for z in 0..4 {
            map.set_walkable(HexCoord::new(2, z), false).unwrap();
        }

        let start = HexCoord::new(0, 0);
        let goal = HexCoord::new(4, 0);

        let path = astar_hex(&map, start, goal, 64).unwrap();

        assert_connected(&path);
        assert!(path.is_position_in_path(HexCoord::new(2, 4)));
        assert_eq!(Some(path.steps()), bfs_steps(&map, start, goal));
        for pos in path.path() {
            if *pos != start {
                assert!(map.cell(*pos).unwrap().is_walkable());
            }
        }
    }

    #[test]
    fn test_astar_goal_surrounded() {
        let mut map = grid(5, 5);
        let goal = HexCoord::new(2, 2);
        for pos in goal.neighbors() {
            map.set_walkable(pos, false).unwrap();
        }

        assert!(astar_hex(&map, HexCoord::new(0, 0), goal, 64).is_none());
    }

    #[test]
    fn test_astar_blocked_goal() {
        let mut map = grid(4, 4);
        let goal = HexCoord::new(3, 3);
        map.toggle_walkable(goal).unwrap();

        assert!(astar_hex(&map, HexCoord::new(0, 0), goal, 64).is_none());
    }

    #[test]
    fn test_astar_blocked_start_still_expands() {
        let mut map = grid(4, 4);
        let start = HexCoord::new(0, 0);
        map.toggle_walkable(start).unwrap();

        let path = astar_hex(&map, start, HexCoord::new(3, 3), 64).unwrap();

        assert_eq!(path.start(), Some(start));
        assert_connected(&path);
    }

    #[test]
    fn test_astar_disconnected_islands() {
        let mut map: HexMap = HexMap::default();
        map.add_cell(Cell::new(0, 0));
        map.add_cell(Cell::new(1, 0));
        map.add_cell(Cell::new(5, 5));
        map.add_cell(Cell::new(6, 5));

        assert!(astar_hex(&map, HexCoord::new(0, 0), HexCoord::new(6, 5), 8).is_none());
        assert_eq!(
            astar_hex(&map, HexCoord::new(0, 0), HexCoord::new(1, 0), 8)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_astar_random_obstacles_match_bfs() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..40 {
            let mut map = grid(12, 12);
            for x in 0..12 {
                for z in 0..12 {
                    if rng.random_bool(0.3) {
                        map.set_walkable(HexCoord::new(x, z), false).unwrap();
                    }
                }
            }

            let start = HexCoord::new(rng.random_range(0..12), rng.random_range(0..12));
            let goal = HexCoord::new(rng.random_range(0..12), rng.random_range(0..12));
            map.set_walkable(start, true).unwrap();
            map.set_walkable(goal, true).unwrap();

            let expected = bfs_steps(&map, start, goal);
            let path = astar_hex(&map, start, goal, 64);

            match (path, expected) {
                (Some(path), Some(steps)) => {
                    assert_connected(&path);
                    assert_eq!(path.steps(), steps);
                    assert_eq!(path.start(), Some(start));
                    assert_eq!(path.goal(), Some(goal));
                }
                (None, None) => {}
                (path, expected) => panic!(
                    "astar {:?} disagrees with bfs {:?} for {} -> {}",
                    path.map(|p| p.steps()),
                    expected,
                    start,
                    goal
                ),
            }
        }
    }

    #[test]
    fn test_astar_large_open_grid() {
        let map = grid(32, 32);
        let start = HexCoord::new(0, 0);
        let goal = HexCoord::new(31, 31);

        let path = astar_hex(&map, start, goal, 256).unwrap();

        assert_connected(&path);
        assert_eq!(path.steps(), hex_distance(start, goal) as usize);
    }
}
