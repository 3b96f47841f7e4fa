use crate::{Instance, Slide, SlideshowError};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt,
    io::{Read, Write},
};

/// Sum of `interest` over every adjacent pair of slides.
pub fn calc_score(slides: &[Slide]) -> u64 {
    slides
        .windows(2)
        .map(|w| w[0].interest(&w[1]) as u64)
        .sum()
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct Solution {
    pub instance_name: String,
    pub slides: Vec<Slide>,
    pub score: u64,
}

/// Distribution summaries of a solution, keyed by value with occurrence counts.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SolutionStats {
    pub instance_name: String,
    pub score: u64,
    pub num_slides: usize,
    pub num_vertical_slides: usize,
    pub interest_histogram: BTreeMap<u32, usize>,
    pub tag_count_histogram: BTreeMap<usize, usize>,
    pub vertical_tag_count_histogram: BTreeMap<usize, usize>,
}

impl Solution {
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            slides: Vec::new(),
            score: 0,
        }
    }

    /// Wraps an ordered slide sequence. A supplied score must equal the
    /// recomputed one; otherwise the recomputed score is used.
    pub fn from_slides(
        instance_name: impl Into<String>,
        slides: Vec<Slide>,
        score: Option<u64>,
    ) -> Result<Self> {
        let actual = calc_score(&slides);
        if let Some(expected) = score {
            if expected != actual {
                return Err(SlideshowError::ScoreMismatch { expected, actual }.into());
            }
        }
        Ok(Self {
            instance_name: instance_name.into(),
            slides,
            score: actual,
        })
    }

    pub fn add_slide(&mut self, slide: Slide) {
        if let Some(last) = self.slides.last() {
            self.score += last.interest(&slide) as u64;
        }
        self.slides.push(slide);
    }

    pub fn calc_score(&self) -> u64 {
        calc_score(&self.slides)
    }

    pub fn verify_score(&self) -> Result<()> {
        let actual = self.calc_score();
        if actual != self.score {
            return Err(SlideshowError::ScoreMismatch {
                expected: self.score,
                actual,
            }
            .into());
        }
        Ok(())
    }

    pub fn interests(&self) -> impl Iterator<Item = u32> + '_ {
        self.slides.windows(2).map(|w| w[0].interest(&w[1]))
    }

    pub fn slide_tag_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.slides.iter().map(|s| s.tags().len())
    }

    pub fn vertical_slides(&self) -> impl Iterator<Item = &Slide> + '_ {
        self.slides.iter().filter(|s| s.is_vertical())
    }

    pub fn vertical_slide_tag_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertical_slides().map(|s| s.tags().len())
    }

    pub fn stats(&self) -> SolutionStats {
        SolutionStats {
            instance_name: self.instance_name.clone(),
            score: self.score,
            num_slides: self.slides.len(),
            num_vertical_slides: self.vertical_slides().count(),
            interest_histogram: histogram(self.interests()),
            tag_count_histogram: histogram(self.slide_tag_counts()),
            vertical_tag_count_histogram: histogram(self.vertical_slide_tag_counts()),
        }
    }

    /// Writes the slide count, then one line of space-separated photo ids per slide.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }

    /// Reads a written slide order back against `instance`. Photo ids resolve
    /// by index; `score`, when known, must match the recomputed score.
    pub fn read<R: Read>(mut reader: R, instance: &Instance, score: Option<u64>) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut lines = input.lines();
        let header = lines.next().unwrap_or("");
        let num_slides = header.trim().parse::<usize>().map_err(|_| {
            SlideshowError::MalformedInput(format!(
                "Expected slide count on line 1, got '{}'",
                header.trim()
            ))
        })?;

        let mut used = vec![false; instance.photos.len()];
        let mut slides = Vec::with_capacity(num_slides);
        for i in 0..num_slides {
            let line = lines.next().ok_or_else(|| {
                SlideshowError::MalformedInput(format!(
                    "Expected {} slides, found {}",
                    num_slides, i
                ))
            })?;
            let slide = parse_slide(line, instance, &mut used)
                .with_context(|| format!("Slide {} (line {})", i, i + 2))?;
            slides.push(slide);
        }
        Self::from_slides(instance.name.clone(), slides, score)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.slides.len())?;
        for slide in &self.slides {
            let ids = slide
                .photos()
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<String>>();
            writeln!(f, "{}", ids.join(" "))?;
        }
        Ok(())
    }
}

fn parse_slide(line: &str, instance: &Instance, used: &mut [bool]) -> Result<Slide> {
    let ids = line
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| {
                SlideshowError::MalformedInput(format!("Photo id must be an integer, got '{}'", token))
            })
        })
        .collect::<Result<Vec<usize>, SlideshowError>>()?;
    if ids.is_empty() || ids.len() > 2 {
        return Err(SlideshowError::MalformedInput(format!(
            "A slide line lists 1 or 2 photo ids, got {}",
            ids.len()
        ))
        .into());
    }
    let slide = instance.slide(&ids)?;
    for &id in &ids {
        if used[id] {
            return Err(SlideshowError::InvariantViolation(format!(
                "Photo {} appears in more than one slide",
                id
            ))
            .into());
        }
        used[id] = true;
    }
    Ok(slide)
}

fn histogram<K: Ord, I: Iterator<Item = K>>(values: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
