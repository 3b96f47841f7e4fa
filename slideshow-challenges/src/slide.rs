use crate::{Photo, SlideshowError};
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;

/// One horizontal photo, or two distinct vertical photos shown together.
///
/// A slide refers to its photos by id; the photos themselves stay in the
/// instance. The union of the photos' tags is cached at construction.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    photos: Vec<usize>,
    tags: Vec<u32>,
}

impl Slide {
    pub fn new(photos: &[&Photo]) -> Result<Self> {
        match photos {
            [photo] => Self::horizontal(photo),
            [a, b] => Self::vertical(a, b),
            _ => Err(SlideshowError::InvariantViolation(format!(
                "A slide holds 1 or 2 photos, got {}",
                photos.len()
            ))
            .into()),
        }
    }

    pub fn horizontal(photo: &Photo) -> Result<Self> {
        if photo.is_vertical() {
            return Err(SlideshowError::InvariantViolation(format!(
                "Photo {} is vertical and cannot form a slide alone",
                photo.id
            ))
            .into());
        }
        Ok(Self {
            photos: vec![photo.id],
            tags: photo.tags.clone(),
        })
    }

    pub fn vertical(a: &Photo, b: &Photo) -> Result<Self> {
        if !a.is_vertical() || !b.is_vertical() {
            return Err(SlideshowError::InvariantViolation(format!(
                "Photos {} and {} must both be vertical to share a slide",
                a.id, b.id
            ))
            .into());
        }
        if a.id == b.id {
            return Err(SlideshowError::InvariantViolation(format!(
                "Photo {} cannot be paired with itself",
                a.id
            ))
            .into());
        }
        Ok(Self {
            photos: vec![a.id, b.id],
            tags: union(&a.tags, &b.tags),
        })
    }

    pub fn photos(&self) -> &[usize] {
        &self.photos
    }

    pub fn tags(&self) -> &[u32] {
        &self.tags
    }

    pub fn is_vertical(&self) -> bool {
        self.photos.len() == 2
    }

    /// Adjacency score of two slides: the smallest of the shared tag count and
    /// the two one-sided difference counts.
    ///
    /// The checks run in a fixed order and bail out with 0 as soon as no tag is
    /// shared, or this slide has no tag of its own.
    pub fn interest(&self, other: &Slide) -> u32 {
        let common = common_count(&self.tags, &other.tags);
        if common == 0 {
            return 0;
        }
        let mut worst = common;
        let only_self = self.tags.len() - common;
        if only_self < worst {
            if only_self == 0 {
                return 0;
            }
            worst = only_self;
        }
        let only_other = other.tags.len() - common;
        worst.min(only_other) as u32
    }
}

/// Size of the intersection of two sorted, deduplicated tag lists.
pub(crate) fn common_count(a: &[u32], b: &[u32]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Size of the union of two sorted, deduplicated tag lists.
pub fn union_count(a: &[u32], b: &[u32]) -> usize {
    a.len() + b.len() - common_count(a, b)
}

fn union(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut tags = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                tags.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                tags.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                tags.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    tags.extend_from_slice(&a[i..]);
    tags.extend_from_slice(&b[j..]);
    tags
}
