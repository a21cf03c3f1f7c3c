//! Core data models for the places explorer.
//! Places are plain immutable records; markers pin a place to a canvas point.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Hotel,
    Attraction,
    /// Anything we do not have a pool for, including unknown tags read from storage.
    #[serde(other)]
    Other,
}

impl Category {
    /// Categories the generator picks from when none is requested.
    pub const GENERATED: [Category; 3] = [Category::Restaurant, Category::Hotel, Category::Attraction];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Hotel => "hotel",
            Category::Attraction => "attraction",
            Category::Other => "other",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Restaurant => "#e74c3c",
            Category::Hotel => "#3498db",
            Category::Attraction => "#2ecc71",
            Category::Other => "#f39c12",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    /// Always within [0.0, 5.0]; stored ratings may be numeric strings.
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: f64,
    pub category: Category,
    pub description: String,
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        rating: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            rating: clamp_rating(rating),
            category,
            description: description.into(),
        }
    }

    /// Dedup identity: two places are the same bookmark when name and address match.
    pub fn same_identity(&self, other: &Place) -> bool {
        self.name == other.name && self.address == other.address
    }

    /// Whole stars shown for this place.
    pub fn stars(&self) -> usize {
        self.rating.round() as usize
    }
}

pub const MAX_RATING: f64 = 5.0;

pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() { 0.0 } else { rating.clamp(0.0, MAX_RATING) }
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Number(f64),
        Text(String),
    }
    let value = match RawRating::deserialize(deserializer)? {
        RawRating::Number(n) => n,
        RawRating::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom)?,
    };
    Ok(clamp_rating(value))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0) }
    }

    /// Point at fractional coordinates of the canvas.
    pub fn at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Point,
    pub place: Place,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Map,
    Saved,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Map => "Map",
            View::Saved => "Saved Places",
        }
    }
}
