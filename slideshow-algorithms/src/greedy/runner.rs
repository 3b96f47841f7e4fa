use super::{config::Config, ordering::order_slides, pairing::pair_vertical_photos};
use anyhow::Result;
use log::{debug, info};
use logging_timer::time;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::{Map, Value};
use slideshow_challenges::{Instance, Slide, Solution};

pub struct Solver;

impl Solver {
    #[time]
    pub fn solve(instance: &Instance, params: &Config, seed: &[u8; 32]) -> Result<Solution> {
        params.validate()?;
        debug!("Instance '{}': solving with {:?}", instance.name, params);
        let mut rng = SmallRng::from_seed(*seed);

        let mut slides = instance
            .photos
            .iter()
            .filter(|p| !p.is_vertical())
            .map(Slide::horizontal)
            .collect::<Result<Vec<Slide>>>()?;
        let num_vertical = instance.num_vertical();
        info!(
            "Instance '{}': {} horizontal, {} vertical photos",
            instance.name,
            slides.len(),
            num_vertical
        );
        if num_vertical > 0 {
            slides.extend(pair_vertical_photos(
                instance,
                params.sample_size_vertical_photos,
                &mut rng,
            )?);
        }

        let (slides, score) = order_slides(slides, params.sample_size_slides, &mut rng)?;
        let solution = Solution::from_slides(instance.name.clone(), slides, Some(score))?;
        info!(
            "Instance '{}': {} slides, score {}",
            instance.name,
            solution.slides.len(),
            solution.score
        );
        Ok(solution)
    }

    pub fn solve_challenge_instance(
        instance: &Instance,
        seed: &[u8; 32],
        hyperparameters: &Option<Map<String, Value>>,
    ) -> Result<Solution> {
        let params = Config::initialize(hyperparameters);
        Self::solve(instance, &params, seed)
    }
}
