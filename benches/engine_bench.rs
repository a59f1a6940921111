//! Criterion benchmarks for u-vns search components.
//!
//! Uses a synthetic permutation problem (displacement from the identity,
//! swap neighborhood) to measure engine overhead independent of any
//! domain.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use u_vns::algorithm::{Algorithm, Constructive, SolutionBuilder};
use u_vns::improve::{Improver, LocalSearch};
use u_vns::neighborhood::{Eager, EagerNeighborhood, Move, Neighborhood};
use u_vns::random::{RandomSource, RandomStream};
use u_vns::shake::{NoRepair, RandomMoveShake};
use u_vns::solution::Solution;
use u_vns::termination::{Termination, TerminationConfig};
use u_vns::vns::{Vns, VnsConfig};

// ===========================================================================
// Permutation displacement: minimize sum |p[i] - i|
// ===========================================================================

struct PermInstance {
    n: usize,
}

#[derive(Clone)]
struct PermSolution {
    instance: Arc<PermInstance>,
    perm: Vec<usize>,
    cost: f64,
    termination: Termination,
}

impl PermSolution {
    fn displacement(&self, i: usize, value: usize) -> f64 {
        i.abs_diff(value) as f64
    }
}

impl Solution for PermSolution {
    type Instance = PermInstance;

    fn instance(&self) -> &PermInstance {
        &self.instance
    }

    fn score(&self) -> f64 {
        self.cost
    }

    fn stop(&self) -> u_vns::Result<bool> {
        Ok(self.termination.should_stop())
    }
}

struct SwapMove {
    i: usize,
    j: usize,
    delta: f64,
}

impl Move<PermSolution> for SwapMove {
    fn score_change(&self) -> f64 {
        self.delta
    }

    fn execute(self, s: &mut PermSolution) {
        s.perm.swap(self.i, self.j);
        s.cost += self.delta;
    }
}

struct SwapNeighborhood;

impl EagerNeighborhood<PermSolution, SwapMove> for SwapNeighborhood {
    fn moves(&self, s: &PermSolution) -> Vec<SwapMove> {
        let n = s.perm.len();
        let mut moves = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in i + 1..n {
                let (a, b) = (s.perm[i], s.perm[j]);
                let delta = s.displacement(i, b) + s.displacement(j, a)
                    - s.displacement(i, a)
                    - s.displacement(j, b);
                moves.push(SwapMove { i, j, delta });
            }
        }
        moves
    }
}

struct IdentityBuilder {
    termination: TerminationConfig,
}

impl SolutionBuilder<PermSolution> for IdentityBuilder {
    fn initialize_solution(&self, instance: &Arc<PermInstance>) -> PermSolution {
        PermSolution {
            instance: instance.clone(),
            perm: (0..instance.n).collect(),
            cost: 0.0,
            termination: Termination::start(&self.termination),
        }
    }
}

struct Shuffle;

impl Constructive<PermSolution> for Shuffle {
    fn construct(&self, mut s: PermSolution, rng: &mut RandomStream) -> PermSolution {
        s.perm.shuffle(rng);
        s.cost = (0..s.perm.len())
            .map(|i| s.displacement(i, s.perm[i]))
            .sum();
        s
    }
}

fn swaps() -> Vec<Box<dyn Neighborhood<PermSolution, SwapMove>>> {
    vec![Box::new(Eager(SwapNeighborhood))]
}

fn vns(max_checks: u64) -> Vns<PermSolution> {
    let shake = RandomMoveShake::new(1, swaps(), NoRepair).expect("neighborhoods");
    let ls = LocalSearch::best_improvement(swaps()).expect("neighborhoods");
    Vns::new(
        &VnsConfig::new([1, 2, 4]),
        Box::new(IdentityBuilder {
            termination: TerminationConfig::default().with_max_checks(max_checks),
        }),
        Box::new(Shuffle),
        vec![Box::new(shake)],
        vec![Box::new(ls)],
    )
    .expect("valid config")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search_swap");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let instance = Arc::new(PermInstance { n });
        let builder = IdentityBuilder {
            termination: TerminationConfig::default(),
        };
        let ls = LocalSearch::best_improvement(swaps()).expect("neighborhoods");
        let start = Shuffle.construct(
            builder.initialize_solution(&instance),
            &mut RandomSource::new(42).stream(0),
        );
        group.bench_with_input(BenchmarkId::from_parameter(n), &start, |b, s| {
            b.iter(|| {
                let result = ls.improve(black_box(s.clone()));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_vns(c: &mut Criterion) {
    let mut group = c.benchmark_group("vns_swap");
    group.sample_size(10);

    for (n, checks) in [(20usize, 50u64), (50, 30)] {
        let instance = Arc::new(PermInstance { n });
        let algorithm = vns(checks);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_c{}", n, checks), n),
            &instance,
            |b, instance| {
                b.iter(|| {
                    let mut rng = RandomSource::new(42).stream(0);
                    let result = algorithm.algorithm(black_box(instance), &mut rng);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_local_search, bench_vns);
criterion_main!(benches);
