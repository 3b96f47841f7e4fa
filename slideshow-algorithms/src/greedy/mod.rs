mod config;
mod ordering;
mod pairing;
mod pool;
mod runner;

pub use config::{Config, DEFAULT_SAMPLE_SIZE};
pub use ordering::order_slides;
pub use pairing::pair_vertical_photos;
pub use pool::Pool;
pub use runner::Solver;

use anyhow::Result;
use serde_json::{Map, Value};
use slideshow_challenges::{Instance, Solution};

pub fn solve_challenge(
    instance: &Instance,
    seed: &[u8; 32],
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let solution = Solver::solve_challenge_instance(instance, seed, hyperparameters)?;
    save_solution(&solution)
}
