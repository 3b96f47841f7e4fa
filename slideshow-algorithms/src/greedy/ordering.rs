use super::pool::Pool;
use anyhow::Result;
use logging_timer::time;
use rand::Rng;
use slideshow_challenges::{Slide, SlideshowError};

/// Greedy nearest-neighbour walk over the slides.
///
/// Starts from an arbitrary slide, then repeatedly appends the most
/// interesting of the first `sample_size` slides left in the pool. Returns the
/// full ordering and the score accumulated along the way.
#[time]
pub fn order_slides<R: Rng + ?Sized>(
    slides: Vec<Slide>,
    sample_size: usize,
    rng: &mut R,
) -> Result<(Vec<Slide>, u64)> {
    let mut ordered = Vec::with_capacity(slides.len());
    let mut pool = Pool::shuffled(slides, rng);
    let mut score = 0u64;

    let mut cur = match pool.pop() {
        Some(slide) => slide,
        None => return Ok((ordered, score)),
    };
    while !pool.is_empty() {
        let (index, interest) = pool
            .best_in_sample(sample_size, |candidate| cur.interest(candidate))
            .ok_or_else(|| {
                SlideshowError::SamplingExhausted(format!(
                    "No next slide found ({} slides left, sample size {})",
                    pool.len(),
                    sample_size
                ))
            })?;
        let next = pool.take(index);
        score += interest as u64;
        ordered.push(cur);
        cur = next;
    }
    ordered.push(cur);
    Ok((ordered, score))
}
