//! Run-and-tumble update rules.
//!
//! One elementary update picks a particle, tries to move it one site along
//! its orientation (rejected if the target is occupied), then independently
//! tumbles it with the given probability. Three execution strategies apply
//! that rule:
//!
//! - [`Lattice::step`]: one update, the reference implementation.
//! - [`Lattice::bulk_step`]: `speed` independent updates in one tight loop.
//!   Same distribution as `speed` calls to `step`, but draws through
//!   precomputed samplers, so traces differ for equal seeds.
//! - [`Lattice::sweep`]: random-sequential sweeps, each updating every
//!   particle exactly once in a freshly shuffled order.

use rand::distr::{Bernoulli, Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use runtumble_core::{LatticeError, TumbleProbability};

use crate::lattice::Lattice;
use crate::metrics::UpdateMetrics;

/// Disjoint borrows of everything an update touches.
struct Buffers<'a> {
    table: &'a [u32],
    connectivity: usize,
    occupancy: &'a mut [u8],
    particles: &'a mut [u32],
    orientation: &'a mut [u32],
    order: &'a mut [u32],
    rng: &'a mut ChaCha8Rng,
    metrics: &'a mut UpdateMetrics,
}

/// Move particle `p` one site along its orientation if the target is empty.
///
/// Returns whether the particle moved. A self-loop target is the particle's
/// own (occupied) site and is therefore rejected.
#[inline(always)]
fn try_move(
    table: &[u32],
    connectivity: usize,
    occupancy: &mut [u8],
    particles: &mut [u32],
    orientation: &[u32],
    p: usize,
) -> bool {
    let site = particles[p] as usize;
    let target = table[site * connectivity + orientation[p] as usize];
    if occupancy[target as usize] != 0 {
        return false;
    }
    occupancy[site] = 0;
    occupancy[target as usize] = 1;
    particles[p] = target;
    true
}

fn check_count(name: &'static str, count: u64) -> Result<(), LatticeError> {
    if count == 0 {
        return Err(LatticeError::invalid_argument(name, "must be at least 1"));
    }
    Ok(())
}

/// Samplers shared by the batched and sweep loops.
struct Samplers {
    heading: Uniform<u32>,
    /// `None` when the tumble probability is exactly zero: the draw is
    /// skipped, which leaves the distribution unchanged.
    tumble: Option<Bernoulli>,
}

impl Samplers {
    fn new(connectivity: usize, tumble: TumbleProbability) -> Result<Self, LatticeError> {
        let heading = Uniform::new(0, connectivity as u32)
            .map_err(|e| LatticeError::invalid_argument("connectivity", e.to_string()))?;
        let tumble = if tumble.get() > 0.0 {
            Some(
                Bernoulli::new(tumble.get()).map_err(|e| {
                    LatticeError::invalid_argument("tumble_probability", e.to_string())
                })?,
            )
        } else {
            None
        };
        Ok(Self { heading, tumble })
    }

    #[inline(always)]
    fn tumble(&self, rng: &mut ChaCha8Rng, orientation: &mut u32) -> bool {
        match &self.tumble {
            Some(coin) if coin.sample(rng) => {
                *orientation = self.heading.sample(rng);
                true
            }
            _ => false,
        }
    }
}

impl Lattice {
    fn buffers(&mut self, operation: &'static str) -> Result<Buffers<'_>, LatticeError> {
        let phase = self.phase();
        let connectivity = self.connectivity();
        let Lattice {
            topology,
            occupancy,
            particles,
            orientation,
            order,
            rng,
            metrics,
            ..
        } = self;
        match topology {
            Some(t) if phase.is_ready() => Ok(Buffers {
                table: t.table.as_flat(),
                connectivity,
                occupancy,
                particles,
                orientation,
                order,
                rng,
                metrics,
            }),
            _ => Err(LatticeError::NotInitialized { operation, phase }),
        }
    }

    fn assert_invariants(&self) {
        debug_assert_eq!(self.check_invariants(), Ok(()));
    }

    /// Perform one elementary update.
    ///
    /// 1. Pick a particle uniformly at random.
    /// 2. Move it to the neighbor along its orientation if that site is
    ///    empty; otherwise leave the state unchanged.
    /// 3. Independently, with probability `tumble_probability`, redraw its
    ///    orientation uniformly (the old value may be drawn again).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `tumble_probability` is NaN or outside `[0, 1]`;
    /// `NotInitialized` unless the lattice is ready.
    pub fn step(&mut self, tumble_probability: f64) -> Result<(), LatticeError> {
        let tumble = TumbleProbability::new(tumble_probability)?;
        let b = self.buffers("step")?;

        let p = b.rng.random_range(0..b.particles.len());
        let moved = try_move(
            b.table,
            b.connectivity,
            b.occupancy,
            b.particles,
            b.orientation,
            p,
        );
        let tumbled = b.rng.random::<f64>() < tumble.get();
        if tumbled {
            b.orientation[p] = b.rng.random_range(0..b.connectivity as u32);
        }

        b.metrics.attempted += 1;
        if moved {
            b.metrics.moved += 1;
        } else {
            b.metrics.blocked += 1;
        }
        if tumbled {
            b.metrics.tumbles += 1;
        }
        self.assert_invariants();
        Ok(())
    }

    /// Perform `speed` independent elementary updates in place.
    ///
    /// Distributed exactly like `speed` consecutive calls to
    /// [`step`](Self::step). The loop allocates nothing and cannot fail.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `speed` is zero or `tumble_probability` is
    /// invalid; `NotInitialized` unless the lattice is ready.
    pub fn bulk_step(&mut self, tumble_probability: f64, speed: u64) -> Result<(), LatticeError> {
        let tumble = TumbleProbability::new(tumble_probability)?;
        check_count("speed", speed)?;
        let Buffers {
            table,
            connectivity,
            occupancy,
            particles,
            orientation,
            rng,
            metrics,
            ..
        } = self.buffers("bulk_step")?;

        let pick = Uniform::new(0, particles.len())
            .map_err(|e| LatticeError::invalid_argument("n_particles", e.to_string()))?;
        let samplers = Samplers::new(connectivity, tumble)?;

        let mut tally = UpdateMetrics {
            attempted: speed,
            ..UpdateMetrics::default()
        };
        for _ in 0..speed {
            let p = pick.sample(rng);
            if try_move(table, connectivity, occupancy, particles, orientation, p) {
                tally.moved += 1;
            }
            if samplers.tumble(rng, &mut orientation[p]) {
                tally.tumbles += 1;
            }
        }
        tally.blocked = speed - tally.moved;
        metrics.absorb(&tally);

        self.assert_invariants();
        Ok(())
    }

    /// Perform `sweeps` random-sequential sweeps.
    ///
    /// Each sweep shuffles the particle order and applies one elementary
    /// update to every particle in that order, so every particle is
    /// attempted exactly once per sweep (`n_particles` updates). This is a
    /// different dynamics from [`bulk_step`](Self::bulk_step), where the
    /// same particle may be drawn repeatedly.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `sweeps` is zero or `tumble_probability` is
    /// invalid; `NotInitialized` unless the lattice is ready.
    pub fn sweep(&mut self, tumble_probability: f64, sweeps: u64) -> Result<(), LatticeError> {
        let tumble = TumbleProbability::new(tumble_probability)?;
        check_count("sweeps", sweeps)?;
        let Buffers {
            table,
            connectivity,
            occupancy,
            particles,
            orientation,
            order,
            rng,
            metrics,
        } = self.buffers("sweep")?;

        let samplers = Samplers::new(connectivity, tumble)?;
        let mut tally = UpdateMetrics {
            attempted: sweeps * order.len() as u64,
            ..UpdateMetrics::default()
        };
        for _ in 0..sweeps {
            order.shuffle(rng);
            for &p in order.iter() {
                let p = p as usize;
                if try_move(table, connectivity, occupancy, particles, orientation, p) {
                    tally.moved += 1;
                }
                if samplers.tumble(rng, &mut orientation[p]) {
                    tally.tumbles += 1;
                }
            }
        }
        tally.blocked = tally.attempted - tally.moved;
        metrics.absorb(&tally);

        self.assert_invariants();
        Ok(())
    }
}
