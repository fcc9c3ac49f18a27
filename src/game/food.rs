use super::grid::{Grid, Point};
use crate::consts;
use rand::Rng;
use std::collections::HashSet;

/// The food currently on the board, kept at up to `target` items.
///
/// Placement samples random cells and gives up on an item after
/// [`PLACEMENT_ATTEMPTS`][consts::PLACEMENT_ATTEMPTS] misses, so on a
/// crowded board the set can run short of its target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    items: HashSet<Point>,
    target: usize,
}

impl Food {
    pub(crate) fn new(target: usize) -> Food {
        Food {
            items: HashSet::with_capacity(target),
            target,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_items<I: IntoIterator<Item = Point>>(target: usize, items: I) -> Food {
        Food {
            items: items.into_iter().collect(),
            target,
        }
    }

    /// Discard all current food and place up to `target` new items on cells
    /// not in `occupied`
    pub(crate) fn seed<R: Rng>(&mut self, grid: Grid, occupied: &HashSet<Point>, rng: &mut R) {
        self.items.clear();
        for _ in 0..self.target {
            let _ = self.replenish_one(grid, occupied, rng);
        }
    }

    /// Try to place a single food item on a cell that is neither in
    /// `occupied` nor already food.  Returns `false` if the set is already at
    /// its target or no free cell was found within the attempt budget.
    pub(crate) fn replenish_one<R: Rng>(
        &mut self,
        grid: Grid,
        occupied: &HashSet<Point>,
        rng: &mut R,
    ) -> bool {
        if !self.is_short() {
            return false;
        }
        for _ in 0..consts::PLACEMENT_ATTEMPTS {
            let p = grid.random_point(rng);
            if !occupied.contains(&p) && self.items.insert(p) {
                return true;
            }
        }
        false
    }

    /// Place items one at a time until the set reaches its target or a
    /// placement fails.  Returns the number of items placed.
    pub(crate) fn top_up<R: Rng>(
        &mut self,
        grid: Grid,
        occupied: &HashSet<Point>,
        rng: &mut R,
    ) -> usize {
        let mut placed = 0;
        while self.is_short() && self.replenish_one(grid, occupied, rng) {
            placed += 1;
        }
        placed
    }

    /// Remove the item at `p`, returning whether there was one
    pub(crate) fn remove(&mut self, p: Point) -> bool {
        self.items.remove(&p)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, p: Point) -> bool {
        self.items.contains(&p)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn target(&self) -> usize {
        self.target
    }

    pub(crate) fn is_short(&self) -> bool {
        self.items.len() < self.target
    }

    /// Iterate over the food items in no particular order
    pub(crate) fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.items.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> &HashSet<Point> {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(RNG_SEED)
    }

    fn grid() -> Grid {
        Grid::new(640, 480, 20).expect("grid should be valid")
    }

    #[test]
    fn seed_fills_to_target() {
        let mut food = Food::new(8);
        let occupied = HashSet::from([Point::new(320, 240), Point::new(300, 240)]);
        food.seed(grid(), &occupied, &mut rng());
        assert_eq!(food.len(), 8);
        assert!(!food.is_short());
        for &p in food.positions() {
            assert!(grid().in_bounds(p), "{p:?} is off the board");
            assert!(!occupied.contains(&p), "food placed on occupied cell {p:?}");
        }
    }

    /// A 4x2 board with every cell but the given ones occupied
    fn all_but(free: &[Point]) -> (Grid, HashSet<Point>) {
        let grid = Grid::new(80, 40, 20).expect("grid should be valid");
        let occupied = grid.cells().filter(|p| !free.contains(p)).collect();
        (grid, occupied)
    }

    #[test]
    fn seed_replaces_existing_food() {
        let grid = Grid::new(80, 40, 20).expect("grid should be valid");
        let mut food = Food::new(1);
        food.seed(grid, &HashSet::new(), &mut rng());
        let occupied = food.positions().clone();
        food.seed(grid, &occupied, &mut rng());
        assert_eq!(food.len(), 1);
        assert!(food.positions().is_disjoint(&occupied));
    }

    #[test]
    fn seed_on_full_board_comes_up_short() {
        let grid = Grid::new(80, 40, 20).expect("grid should be valid");
        let occupied = grid.cells().collect::<HashSet<_>>();
        let mut food = Food::new(3);
        food.seed(grid, &occupied, &mut rng());
        assert_eq!(food.len(), 0);
        assert!(food.is_short());
    }

    #[test]
    fn seed_fills_every_free_cell_on_tiny_board() {
        let (grid, occupied) = all_but(&[Point::new(40, 0), Point::new(60, 0)]);
        let mut food = Food::new(2);
        food.seed(grid, &occupied, &mut rng());
        assert_eq!(
            food.positions(),
            &HashSet::from([Point::new(40, 0), Point::new(60, 0)])
        );
    }

    #[test]
    fn replenish_one_after_removal() {
        let mut food = Food::new(3);
        let occupied = HashSet::new();
        let mut rng = rng();
        food.seed(grid(), &occupied, &mut rng);
        let eaten = *food
            .positions()
            .iter()
            .next()
            .expect("food should not be empty");
        assert!(food.remove(eaten));
        assert!(!food.remove(eaten));
        assert_eq!(food.len(), 2);
        assert!(food.replenish_one(grid(), &occupied, &mut rng));
        assert_eq!(food.len(), 3);
    }

    #[test]
    fn replenish_one_stops_at_target() {
        let mut food = Food::new(2);
        let mut rng = rng();
        food.seed(grid(), &HashSet::new(), &mut rng);
        assert!(!food.replenish_one(grid(), &HashSet::new(), &mut rng));
        assert_eq!(food.len(), 2);
    }

    #[test]
    fn replenish_one_avoids_existing_food() {
        let (grid, occupied) = all_but(&[Point::new(40, 0), Point::new(60, 0)]);
        let mut food = Food::new(2);
        let mut rng = rng();
        assert!(food.replenish_one(grid, &occupied, &mut rng));
        assert!(food.replenish_one(grid, &occupied, &mut rng));
        assert_eq!(
            food.positions(),
            &HashSet::from([Point::new(40, 0), Point::new(60, 0)])
        );
    }

    #[test]
    fn top_up_refills_once_space_frees() {
        let (grid, full) = all_but(&[]);
        let mut rng = rng();
        let mut food = Food::new(2);
        food.seed(grid, &full, &mut rng);
        assert_eq!(food.len(), 0);
        let (_, occupied) = all_but(&[Point::new(40, 0), Point::new(60, 0)]);
        assert_eq!(food.top_up(grid, &occupied, &mut rng), 2);
        assert!(food.contains(Point::new(40, 0)));
        assert!(food.contains(Point::new(60, 0)));
        assert_eq!(food.top_up(grid, &occupied, &mut rng), 0);
        assert_eq!(food.target(), 2);
    }
}
