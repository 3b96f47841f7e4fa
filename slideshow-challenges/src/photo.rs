use crate::SlideshowError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "H" => Ok(Orientation::Horizontal),
            "V" => Ok(Orientation::Vertical),
            other => Err(SlideshowError::MalformedInput(format!(
                "Orientation must be 'H' or 'V', got '{}'",
                other
            ))
            .into()),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        }
    }
}

/// A photo with its tags interned as ids into the owning instance's tag table.
/// `tags` is kept sorted and free of duplicates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: usize,
    pub orientation: Orientation,
    pub tags: Vec<u32>,
}

impl Photo {
    pub fn new(id: usize, orientation: Orientation, mut tags: Vec<u32>) -> Self {
        tags.sort_unstable();
        tags.dedup();
        Self {
            id,
            orientation,
            tags,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }
}
