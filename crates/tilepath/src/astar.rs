use crate::config::CostModel;
use crate::error::PathError;
use crate::estimate::estimate;
use crate::path::Path;
use crate::pathfinder::{NodeState, Pathfinder};
use crate::traits::{GridLookup, GridNode};

impl<N: GridNode> Pathfinder<N> {
    /// Search a least-cost route from `origin` to `target` over `grid`.
    ///
    /// Returns the route (both endpoints included), `Ok(None)` when the
    /// target cannot be reached, or an error when either handle does not
    /// belong to `grid`. When `origin == target` the route is that single
    /// node.
    ///
    /// The frontier is expanded cheapest total first; among equal totals the
    /// node that joined the frontier first wins, which makes the
    /// [`NEIGHBOR_OFFSETS`](crate::NEIGHBOR_OFFSETS) order observable.
    pub fn find_path<G>(
        &mut self,
        grid: &G,
        origin: N,
        target: N,
    ) -> Result<Option<Path<N>>, PathError>
    where
        G: GridLookup<Node = N> + ?Sized,
    {
        if !grid.owns(origin) {
            return Err(PathError::UnknownOrigin(origin.pos()));
        }
        if !grid.owns(target) {
            return Err(PathError::UnknownTarget(target.pos()));
        }

        self.reset();
        self.open(origin, 0, estimate(origin, target), None);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(entry) = self.frontier.pop() else {
                break 'search false;
            };
            let current = entry.node;

            // Skip stale entries.
            let Some(cs) = self.scratch.get_mut(&current) else {
                continue;
            };
            if cs.state == NodeState::Visited || entry.total != cs.total() {
                continue;
            }

            cs.state = NodeState::Visited;
            let current_g = cs.g;
            let current_h = cs.h;
            self.open_count -= 1;
            self.stats.expanded += 1;
            log::trace!("expand {} g={current_g} h={current_h}", current.pos());

            if current == target {
                break 'search true;
            }

            for &neighbor in nbuf.of(grid, current) {
                let step = match self.config.cost_model {
                    CostModel::Legacy => grid.terrain_cost(neighbor).saturating_add(current_h),
                    CostModel::Edge => grid.terrain_cost(neighbor),
                };
                let tentative = current_g.saturating_add(step);

                match self.scratch.get_mut(&neighbor) {
                    None => {
                        let h = estimate(neighbor, target);
                        self.open(neighbor, tentative, h, Some(current));
                    }
                    Some(ns) => {
                        let NodeState::Open { seq } = ns.state else {
                            continue;
                        };
                        if tentative >= ns.g {
                            continue;
                        }
                        ns.g = tentative;
                        ns.h = estimate(neighbor, target);
                        ns.previous = Some(current);
                        let total = ns.total();
                        self.frontier.requeue(neighbor, total, seq);
                    }
                }
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "route {} -> {}: {} (expanded {}, discovered {}, frontier peak {})",
            origin.pos(),
            target.pos(),
            if found { "found" } else { "unreachable" },
            self.stats.expanded,
            self.stats.discovered,
            self.stats.frontier_peak,
        );

        if !found {
            return Ok(None);
        }

        let scratch = &self.scratch;
        Ok(Some(Path::backtrack(target, origin, |n| {
            scratch.get(&n).and_then(|s| s.previous)
        })))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use tilepath_core::{Point, Range};

    use super::*;
    use crate::config::PathfinderConfig;
    use crate::neighbors::NEIGHBOR_OFFSETS;
    use crate::tilemap::{TileMap, TileRef};
    use crate::traits::Cost;

    fn at(map: &TileMap, x: i32, y: i32) -> TileRef {
        map.node(x, y).unwrap()
    }

    fn positions(path: &Path<TileRef>) -> Vec<Point> {
        path.positions().collect()
    }

    fn assert_well_formed(map: &TileMap, path: &Path<TileRef>, origin: TileRef, target: TileRef) {
        assert_eq!(path.origin(), origin);
        assert_eq!(path.target(), target);
        assert!(path.is_contiguous());
        for step in path.steps() {
            assert!(NEIGHBOR_OFFSETS.contains(&step), "bad step {step}");
        }
        for &n in &path.nodes()[1..] {
            assert_eq!(map.try_get_node(n.pos().x, n.pos().y), Some(n));
        }
        let distinct: HashSet<_> = path.iter().collect();
        assert_eq!(distinct.len(), path.len());
    }

    /// Plain flood fill over the same 8-connectivity.
    fn reachable(map: &TileMap, from: Point, to: Point) -> bool {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return true;
            }
            for d in NEIGHBOR_OFFSETS {
                let n = p + d;
                if map.try_get_node(n.x, n.y).is_some() && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        false
    }

    #[test]
    fn open_grid_goes_diagonal() {
        let map = TileMap::new(3, 3, 10);
        let (origin, target) = (at(&map, 0, 0), at(&map, 2, 2));
        let mut pf = Pathfinder::new();
        let path = pf.find_path(&map, origin, target).unwrap().unwrap();

        assert_well_formed(&map, &path, origin, target);
        assert_eq!(path.len(), 3);
        assert!(path.steps().all(|s| s == Point::new(1, 1)));
    }

    #[test]
    fn routes_around_hole() {
        let mut map = TileMap::new(3, 3, 10);
        map.set_walkable(Point::new(1, 1), false);
        let (origin, target) = (at(&map, 0, 0), at(&map, 2, 2));
        let mut pf = Pathfinder::new();
        let path = pf.find_path(&map, origin, target).unwrap().unwrap();

        assert_well_formed(&map, &path, origin, target);
        // (1, 0) is discovered before (0, 1), so the route leaves along x.
        assert_eq!(
            positions(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn origin_is_target() {
        let map = TileMap::new(3, 3, 10);
        let n = at(&map, 1, 2);
        let mut pf = Pathfinder::new();
        let path = pf.find_path(&map, n, n).unwrap().unwrap();
        assert_eq!(path.nodes(), &[n]);
        assert_eq!(pf.last_stats().expanded, 1);
    }

    #[test]
    fn blocked_target_is_unreachable() {
        let map = TileMap::parse("...\n...\n..#", 10).unwrap();
        let mut pf = Pathfinder::new();
        let got = pf.find_path(&map, at(&map, 0, 0), at(&map, 2, 2)).unwrap();
        assert!(got.is_none());
        // Every open tile was expanded before giving up.
        assert_eq!(pf.last_stats().expanded, 8);
    }

    #[test]
    fn wall_partition_is_unreachable() {
        let map = TileMap::parse(
            "\
..#..
..#..
..#..",
            10,
        )
        .unwrap();
        let mut pf = Pathfinder::new();
        let got = pf.find_path(&map, at(&map, 0, 1), at(&map, 4, 1)).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn diagonal_gap_is_passable() {
        // Walls touch only at corners; diagonal moves slip between them.
        let map = TileMap::parse(
            "\
.#.
#..
...",
            10,
        )
        .unwrap();
        let (origin, target) = (at(&map, 0, 0), at(&map, 2, 0));
        let mut pf = Pathfinder::new();
        let path = pf.find_path(&map, origin, target).unwrap().unwrap();
        assert_well_formed(&map, &path, origin, target);
        assert_eq!(path.nodes()[1].pos(), Point::new(1, 1));
    }

    #[test]
    fn repeated_searches_agree() {
        let map = TileMap::parse(
            "\
.....#....
.###.#.##.
...#...#..
.#.#####..
.#........",
            10,
        )
        .unwrap();
        let (origin, target) = (at(&map, 0, 0), at(&map, 9, 0));
        let mut pf = Pathfinder::new();
        let first = pf.find_path(&map, origin, target).unwrap().unwrap();
        let stats = pf.last_stats();

        // An unrelated search in between must not leak into the next one.
        pf.find_path(&map, at(&map, 9, 4), at(&map, 0, 4)).unwrap();

        let second = pf.find_path(&map, origin, target).unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(pf.last_stats(), stats);
        assert_well_formed(&map, &first, origin, target);

        let fresh = Pathfinder::new().find_path(&map, origin, target).unwrap();
        assert_eq!(fresh, Some(first));
    }

    #[test]
    fn foreign_handles_are_errors() {
        let map = TileMap::new(3, 3, 1);
        let other = TileMap::new(8, 8, 1);
        let mut pf = Pathfinder::new();
        let inside = at(&map, 0, 0);

        assert_eq!(
            pf.find_path(&map, at(&other, 5, 5), inside),
            Err(PathError::UnknownOrigin(Point::new(5, 5)))
        );
        assert_eq!(
            pf.find_path(&map, inside, at(&other, 1, 1)),
            Err(PathError::UnknownTarget(Point::new(1, 1)))
        );
    }

    #[test]
    fn edge_model_tracks_terrain() {
        // A cheap detour below a costly straight corridor.
        let map = TileMap::parse(
            "\
.999.
.111.",
            1,
        )
        .unwrap();
        let (origin, target) = (at(&map, 0, 0), at(&map, 4, 0));
        let cfg = PathfinderConfig::default().with_cost_model(CostModel::Edge);
        let mut pf = Pathfinder::with_config(cfg);
        let path = pf.find_path(&map, origin, target).unwrap().unwrap();

        assert_well_formed(&map, &path, origin, target);
        assert_eq!(path.terrain_cost(&map), 4);
        assert!(path.iter().all(|n| n.pos().y == 1 || n.pos().x % 4 == 0));
    }

    #[test]
    fn legacy_g_includes_expanding_estimate() {
        let map = TileMap::new(3, 1, 10);
        let (origin, target) = (at(&map, 0, 0), at(&map, 2, 0));
        let mut pf = Pathfinder::new();
        pf.find_path(&map, origin, target).unwrap().unwrap();

        let mid = pf.scratch[&at(&map, 1, 0)];
        // origin.g 0 + terrain 10 + origin.h 20
        assert_eq!(mid.g, 30);
        assert_eq!(mid.h, 10);
        let end = pf.scratch[&target];
        // mid.g 30 + terrain 10 + mid.h 10
        assert_eq!(end.g, 50);

        pf.set_config(PathfinderConfig::default().with_cost_model(CostModel::Edge));
        pf.find_path(&map, origin, target).unwrap().unwrap();
        assert_eq!(pf.scratch[&target].g, 20);
    }

    #[test]
    fn visited_nodes_are_expanded_once() {
        let map = TileMap::new(6, 6, 3);
        let mut pf = Pathfinder::new();
        pf.find_path(&map, at(&map, 0, 5), at(&map, 5, 0))
            .unwrap()
            .unwrap();
        let stats = pf.last_stats();
        let visited = pf
            .scratch
            .values()
            .filter(|s| s.state == NodeState::Visited)
            .count();
        assert_eq!(stats.expanded, visited);
        assert!(stats.expanded <= stats.discovered);
        assert!(stats.discovered <= 36);
    }

    /// Coordinate-keyed grid: an open field with an L-shaped wall.
    struct Field {
        bounds: Range,
        walls: HashSet<Point>,
    }

    impl GridLookup for Field {
        type Node = Point;

        fn try_get_node(&self, x: i32, y: i32) -> Option<Point> {
            let p = Point::new(x, y);
            (self.bounds.contains(p) && !self.walls.contains(&p)).then_some(p)
        }

        fn terrain_cost(&self, _node: Point) -> Cost {
            10
        }
    }

    #[test]
    fn coordinate_nodes() {
        let walls = (0..4)
            .map(|y| Point::new(3, y))
            .chain((3..7).map(|x| Point::new(x, 3)))
            .collect();
        let field = Field {
            bounds: Range::new(0, 0, 8, 8),
            walls,
        };
        let origin = Point::new(1, 1);
        let target = Point::new(5, 1);
        let mut pf = Pathfinder::new();
        let path = pf.find_path(&field, origin, target).unwrap().unwrap();

        assert_eq!(path.origin(), origin);
        assert_eq!(path.target(), target);
        for w in path.nodes().windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
        assert!(path.iter().all(|p| !field.walls.contains(p)));
        // The wall forces the route below y = 3.
        assert!(path.iter().any(|p| p.y > 3));
    }

    /// Three cells hugging the positive end of the x axis.
    struct EdgeStrip;

    impl GridLookup for EdgeStrip {
        type Node = Point;

        fn try_get_node(&self, x: i32, y: i32) -> Option<Point> {
            (y == 0 && x >= i32::MAX - 2).then_some(Point::new(x, y))
        }

        fn terrain_cost(&self, _node: Point) -> Cost {
            10
        }
    }

    #[test]
    fn search_from_coordinate_space_edge() {
        let origin = Point::new(i32::MAX, 0);
        let target = Point::new(i32::MAX - 2, 0);
        let mut pf = Pathfinder::new();
        let path = pf.find_path(&EdgeStrip, origin, target).unwrap().unwrap();
        assert_eq!(
            path.nodes(),
            &[origin, Point::new(i32::MAX - 1, 0), target]
        );
        assert!(path.is_contiguous());
    }

    #[test]
    fn random_maps_agree_with_flood_fill() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pf = Pathfinder::new();
        let mut found = 0;

        for _ in 0..200 {
            let mut map = TileMap::new(12, 9, 10);
            for p in map.bounds() {
                if rng.random_range(0..100) < 30 {
                    map.set_walkable(p, false);
                }
                map.set_terrain_cost(p, rng.random_range(1..20));
            }
            let pick = |rng: &mut StdRng| {
                Point::new(rng.random_range(0..12), rng.random_range(0..9))
            };
            let (a, b) = (pick(&mut rng), pick(&mut rng));
            map.set_walkable(a, true);
            let (origin, target) = (at(&map, a.x, a.y), at(&map, b.x, b.y));

            let got = pf.find_path(&map, origin, target).unwrap();
            let blocked = map.try_get_node(b.x, b.y).is_none();
            if blocked || !reachable(&map, a, b) {
                assert!(got.is_none(), "{a} -> {b} should be unreachable");
                continue;
            }
            let path = got.unwrap_or_else(|| panic!("{a} -> {b} should be reachable"));
            assert_well_formed(&map, &path, origin, target);
            found += 1;
        }

        assert!(found > 0);
    }
}
