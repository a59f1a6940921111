//! Neighborhoods that materialize all their moves up front.

use super::types::{Move, Neighborhood};
use crate::random::RandomStream;
use crate::solution::Solution;

/// Produces every move of the neighborhood at once.
///
/// Wrap an implementation in [`Eager`] to use it as a [`Neighborhood`].
pub trait EagerNeighborhood<S: Solution, M: Move<S>>: Send + Sync {
    /// All moves for `solution`, in a fixed order.
    fn moves(&self, solution: &S) -> Vec<M>;
}

/// Adapter exposing an [`EagerNeighborhood`] as a [`Neighborhood`].
#[derive(Debug, Clone, Default)]
pub struct Eager<N>(pub N);

impl<S, M, N> Neighborhood<S, M> for Eager<N>
where
    S: Solution,
    M: Move<S>,
    N: EagerNeighborhood<S, M>,
{
    fn stream<'a>(&'a self, solution: &'a S) -> Box<dyn Iterator<Item = M> + 'a>
    where
        M: 'a,
    {
        Box::new(self.0.moves(solution).into_iter())
    }

    fn random_move(&self, solution: &S, rng: &mut RandomStream) -> Option<M> {
        let mut valid: Vec<M> = self
            .0
            .moves(solution)
            .into_iter()
            .filter(|m| m.is_valid(solution))
            .collect();
        let i = rng.index(valid.len())?;
        Some(valid.swap_remove(i))
    }

    fn name(&self) -> &str {
        std::any::type_name::<N>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomSource;
    use crate::testing::{line_solution, LineInstance, StepNeighborhood};

    #[test]
    fn test_stream_order_is_fixed() {
        let s = line_solution(LineInstance::linear(10), 5);
        let n = Eager(StepNeighborhood);
        let a: Vec<usize> = n.stream(&s).map(|m| m.to).collect();
        let b: Vec<usize> = n.stream(&s).map(|m| m.to).collect();
        assert_eq!(a, vec![4, 6]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_move_at_boundary() {
        let s = line_solution(LineInstance::linear(10), 0);
        let n = Eager(StepNeighborhood);
        let mut rng = RandomSource::new(1).stream(0);
        for _ in 0..20 {
            assert_eq!(n.random_move(&s, &mut rng).map(|m| m.to), Some(1));
        }
    }

    #[test]
    fn test_random_move_covers_both_sides() {
        let s = line_solution(LineInstance::linear(10), 5);
        let n = Eager(StepNeighborhood);
        let mut rng = RandomSource::new(3).stream(0);
        let mut seen = [false; 2];
        for _ in 0..100 {
            match n.random_move(&s, &mut rng).map(|m| m.to) {
                Some(4) => seen[0] = true,
                Some(6) => seen[1] = true,
                other => panic!("unexpected move {other:?}"),
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_random_move_on_single_point_line() {
        let s = line_solution(LineInstance::linear(1), 0);
        let n = Eager(StepNeighborhood);
        let mut rng = RandomSource::new(3).stream(0);
        assert!(n.random_move(&s, &mut rng).is_none());
    }
}
