use super::pool::Pool;
use anyhow::Result;
use log::{info, warn};
use logging_timer::time;
use rand::Rng;
use slideshow_challenges::{union_count, Instance, Photo, Slide, SlideshowError};

/// Greedily pairs the instance's vertical photos into two-photo slides.
///
/// Each step pops a photo and pairs it with the candidate, among the first
/// `sample_size` left in the pool, whose tags add the most to its own. With an
/// odd number of vertical photos the last one is left out of the slideshow.
#[time]
pub fn pair_vertical_photos<R: Rng + ?Sized>(
    instance: &Instance,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<Slide>> {
    let verticals = instance
        .photos
        .iter()
        .filter(|p| p.is_vertical())
        .collect::<Vec<&Photo>>();
    let mut slides = Vec::with_capacity(verticals.len() / 2);
    let mut pool = Pool::shuffled(verticals, rng);

    while pool.len() >= 2 {
        let photo = pool.pop().ok_or_else(|| {
            SlideshowError::SamplingExhausted("Vertical photo pool emptied early".to_string())
        })?;
        let (index, _) = pool
            .best_in_sample(sample_size, |other| union_count(&photo.tags, &other.tags))
            .ok_or_else(|| {
                SlideshowError::SamplingExhausted(format!(
                    "No pairing candidate for photo {} ({} photos left, sample size {})",
                    photo.id,
                    pool.len(),
                    sample_size
                ))
            })?;
        let other = pool.take(index);
        slides.push(Slide::vertical(photo, other)?);
    }

    if let Some(orphan) = pool.pop() {
        warn!(
            "Instance '{}': vertical photo {} has no partner and is left out",
            instance.name, orphan.id
        );
    }
    info!(
        "Instance '{}': paired {} vertical slides",
        instance.name,
        slides.len()
    );
    Ok(slides)
}
