use crate::{calc_score, Orientation, Photo, Slide, SlideshowError, Solution};
use anyhow::{anyhow, Context, Result};
use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    io::{Read, Write},
};

/// Parameters of a synthetic instance.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Track {
    pub num_photos: usize,
    pub vertical_percent: u32,
    pub num_tags: usize,
    pub max_tags_per_photo: usize,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_photos: 1000,
            vertical_percent: 50,
            num_tags: 500,
            max_tags_per_photo: 20,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Instance {
    pub name: String,
    pub photos: Vec<Photo>,
    pub tag_names: Vec<String>,
    #[serde(skip)]
    tag_ids: HashMap<String, u32>,
}

impl Instance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
            tag_names: Vec::new(),
            tag_ids: HashMap::new(),
        }
    }

    /// Appends a photo and returns its id, which is its position in input order.
    pub fn add_photo<I, S>(&mut self, orientation: Orientation, tags: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|tag| self.intern(tag.as_ref()))
            .collect::<Vec<u32>>();
        let id = self.photos.len();
        self.photos.push(Photo::new(id, orientation, tags));
        id
    }

    fn intern(&mut self, tag: &str) -> u32 {
        if let Some(&id) = self.tag_ids.get(tag) {
            return id;
        }
        let id = self.tag_names.len() as u32;
        self.tag_names.push(tag.to_string());
        self.tag_ids.insert(tag.to_string(), id);
        id
    }

    /// Parses the line-oriented photo format: a record count followed by one
    /// `orientation tag_count tag...` record per line. The declared tag count
    /// is read but not checked against the tags that follow.
    pub fn parse(name: impl Into<String>, input: &str) -> Result<Self> {
        let mut instance = Self::new(name);
        let mut lines = input.lines();
        let header = lines.next().unwrap_or("");
        let num_photos = header.trim().parse::<usize>().map_err(|_| {
            SlideshowError::MalformedInput(format!(
                "Expected photo count on line 1, got '{}'",
                header.trim()
            ))
        })?;
        instance.photos.reserve(num_photos);

        for i in 0..num_photos {
            let line = lines.next().ok_or_else(|| {
                SlideshowError::MalformedInput(format!(
                    "Expected {} photo records, found {}",
                    num_photos, i
                ))
            })?;
            let (orientation, tags) = parse_record(line)
                .with_context(|| format!("Photo record {} (line {})", i, i + 2))?;
            instance.add_photo(orientation, tags);
        }
        debug!(
            "Parsed instance '{}': {} photos ({} vertical), {} distinct tags",
            instance.name,
            instance.photos.len(),
            instance.num_vertical(),
            instance.tag_names.len()
        );
        Ok(instance)
    }

    pub fn read<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(name, &input)
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.photos.len())?;
        for photo in &self.photos {
            write!(
                writer,
                "{} {}",
                photo.orientation.token(),
                photo.tags.len()
            )?;
            for &tag in &photo.tags {
                write!(writer, " {}", self.tag_names[tag as usize])?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.num_photos == 0 {
            return Err(anyhow!("Number of photos must be at least 1"));
        }
        if track.num_tags == 0 || track.max_tags_per_photo == 0 {
            return Err(anyhow!("Tag pool and tags per photo must be at least 1"));
        }
        if track.vertical_percent > 100 {
            return Err(anyhow!(
                "Vertical percentage ({}) must be at most 100",
                track.vertical_percent
            ));
        }
        let mut rng = SmallRng::from_seed(*seed);
        let mut instance = Self::new("generated");
        for _ in 0..track.num_photos {
            let orientation = if rng.gen_ratio(track.vertical_percent, 100) {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let num_tags = rng.gen_range(1..=track.max_tags_per_photo);
            let tags = (0..num_tags)
                .map(|_| format!("t{}", rng.gen_range(0..track.num_tags)))
                .collect::<Vec<String>>();
            instance.add_photo(orientation, tags);
        }
        Ok(instance)
    }

    pub fn photo(&self, id: usize) -> Result<&Photo> {
        self.photos.get(id).ok_or_else(|| {
            SlideshowError::MalformedInput(format!(
                "Photo id {} is out of range (instance '{}' has {} photos)",
                id,
                self.name,
                self.photos.len()
            ))
            .into()
        })
    }

    /// Builds the slide made of the given photo ids, in order.
    pub fn slide(&self, ids: &[usize]) -> Result<Slide> {
        let photos = ids
            .iter()
            .map(|&id| self.photo(id))
            .collect::<Result<Vec<&Photo>>>()?;
        Slide::new(&photos)
    }

    pub fn num_vertical(&self) -> usize {
        self.photos.iter().filter(|p| p.is_vertical()).count()
    }

    pub fn num_horizontal(&self) -> usize {
        self.photos.len() - self.num_vertical()
    }

    pub fn tag_name(&self, tag: u32) -> Option<&str> {
        self.tag_names.get(tag as usize).map(String::as_str)
    }

    /// Checks that every slide is a valid grouping of this instance's photos,
    /// that no photo is shown twice, and that the recorded score is exact.
    pub fn verify_solution(&self, solution: &Solution) -> Result<u64> {
        let mut used = vec![false; self.photos.len()];
        for (i, slide) in solution.slides.iter().enumerate() {
            let rebuilt = self
                .slide(slide.photos())
                .with_context(|| format!("Slide {}", i))?;
            if rebuilt.tags() != slide.tags() {
                return Err(SlideshowError::InvariantViolation(format!(
                    "Slide {} tags do not match instance '{}'",
                    i, self.name
                ))
                .into());
            }
            for &id in slide.photos() {
                if used[id] {
                    return Err(SlideshowError::InvariantViolation(format!(
                        "Photo {} appears in more than one slide",
                        id
                    ))
                    .into());
                }
                used[id] = true;
            }
        }
        let actual = calc_score(&solution.slides);
        if actual != solution.score {
            return Err(SlideshowError::ScoreMismatch {
                expected: solution.score,
                actual,
            }
            .into());
        }
        Ok(actual)
    }
}

fn parse_record(line: &str) -> Result<(Orientation, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let orientation = tokens
        .next()
        .ok_or_else(|| SlideshowError::MalformedInput("Missing orientation".to_string()))?;
    let orientation = Orientation::from_token(orientation)?;
    let tag_count = tokens
        .next()
        .ok_or_else(|| SlideshowError::MalformedInput("Missing tag count".to_string()))?;
    tag_count.parse::<usize>().map_err(|_| {
        SlideshowError::MalformedInput(format!("Tag count must be an integer, got '{}'", tag_count))
    })?;
    Ok((orientation, tokens.collect()))
}
