//! Placeholder place data. Nothing here is real: names, streets and ratings are
//! drawn from small fixed pools so the map has something to show.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Category, Extent, Place, Point};

const RESTAURANT_NAMES: [&str; 4] = ["Tasty Bites", "Spice Garden", "Ocean Delight", "Urban Kitchen"];
const HOTEL_NAMES: [&str; 4] = ["Comfort Inn", "Luxury Suites", "City View Hotel", "Riverside Lodge"];
const ATTRACTION_NAMES: [&str; 4] = ["Adventure Park", "Art Gallery", "Historic Tower", "Botanical Garden"];
const STREETS: [&str; 4] = ["Main St", "Park Ave", "River Rd", "Market St"];

fn name_pool(category: Category) -> Vec<&'static str> {
    match category {
        Category::Restaurant => RESTAURANT_NAMES.to_vec(),
        Category::Hotel => HOTEL_NAMES.to_vec(),
        Category::Attraction => ATTRACTION_NAMES.to_vec(),
        Category::Other => RESTAURANT_NAMES
            .iter()
            .chain(HOTEL_NAMES.iter())
            .chain(ATTRACTION_NAMES.iter())
            .copied()
            .collect(),
    }
}

fn adjective(category: Category) -> &'static str {
    match category {
        Category::Restaurant => "delightful",
        Category::Hotel => "comfortable",
        Category::Attraction => "fascinating",
        Category::Other => "charming",
    }
}

pub fn describe(category: Category) -> String {
    format!("A {} {} located in the heart of the city.", adjective(category), category.tag())
}

pub struct PlaceGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> PlaceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A syntactically valid random place. `_position` is accepted so callers can
    /// later key data on location; the stock generator ignores it.
    pub fn generate(&mut self, category: Option<Category>, _position: Point) -> Place {
        let category = category.unwrap_or_else(|| {
            *Category::GENERATED.choose(&mut self.rng).unwrap_or(&Category::Other)
        });
        let pool = name_pool(category);
        let name = pool.choose(&mut self.rng).copied().unwrap_or("Unnamed Place");
        let number: u32 = self.rng.gen_range(1..=999);
        let street = STREETS.choose(&mut self.rng).copied().unwrap_or(STREETS[0]);
        let raw: f64 = self.rng.gen_range(3.0..=5.0);
        let rating = (raw * 10.0).round() / 10.0;
        Place::new(name, format!("{number} {street}"), rating, category, describe(category))
    }

    /// Uniform point inside `extent` keeping `margin` px off every edge.
    pub fn random_position(&mut self, extent: Extent, margin: f64) -> Point {
        let x = self.axis(extent.width, margin);
        let y = self.axis(extent.height, margin);
        Point::new(x, y)
    }

    pub fn count(&mut self, range: RangeInclusive<usize>) -> usize {
        if range.is_empty() { *range.start() } else { self.rng.gen_range(range) }
    }

    fn axis(&mut self, len: f64, margin: f64) -> f64 {
        let span = len - 2.0 * margin;
        if span <= 0.0 { len / 2.0 } else { margin + self.rng.gen_range(0.0..span) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> PlaceGenerator<StdRng> {
        PlaceGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generated_places_are_well_formed() {
        let mut g = generator(7);
        for _ in 0..200 {
            let p = g.generate(None, Point::new(0.0, 0.0));
            assert!(Category::GENERATED.contains(&p.category));
            assert!(name_pool(p.category).contains(&p.name.as_str()));
            assert!((3.0..=5.0).contains(&p.rating));
            assert_eq!(format!("{:.1}", p.rating).parse::<f64>().unwrap(), p.rating);
            let (num, street) = p.address.split_once(' ').unwrap();
            let num: u32 = num.parse().unwrap();
            assert!((1..=999).contains(&num));
            assert!(STREETS.contains(&street));
            assert_eq!(p.description, describe(p.category));
        }
    }

    #[test]
    fn requested_category_is_honoured() {
        let mut g = generator(1);
        for _ in 0..50 {
            let p = g.generate(Some(Category::Hotel), Point::new(5.0, 5.0));
            assert_eq!(p.category, Category::Hotel);
            assert!(HOTEL_NAMES.contains(&p.name.as_str()));
            assert_eq!(p.description, "A comfortable hotel located in the heart of the city.");
        }
    }

    #[test]
    fn same_seed_same_places() {
        let mut a = generator(42);
        let mut b = generator(42);
        for _ in 0..10 {
            assert_eq!(a.generate(None, Point::new(0.0, 0.0)), b.generate(None, Point::new(0.0, 0.0)));
        }
    }

    #[test]
    fn positions_respect_margin_and_tiny_canvas_falls_back_to_centre() {
        let mut g = generator(3);
        let extent = Extent::new(400.0, 300.0);
        for _ in 0..100 {
            let p = g.random_position(extent, 50.0);
            assert!(p.x >= 50.0 && p.x < 350.0);
            assert!(p.y >= 50.0 && p.y < 250.0);
        }
        let p = g.random_position(Extent::new(60.0, 80.0), 50.0);
        assert_eq!(p, Point::new(30.0, 40.0));
    }
}
