//! The one owner of application state. UI events arrive as method calls; the
//! renderer reads the results back through the accessors.

use rand::Rng;
use tracing::debug;

use crate::config::ExplorerConfig;
use crate::error::PlaceError;
use crate::generator::PlaceGenerator;
use crate::hit_test::hit_test;
use crate::model::{Category, Extent, Marker, MarkerId, Place, Point, View};
use crate::storage::{self, DARK_THEME_KEY, KeyValueStore};
use crate::store::PlaceStore;

/// Relative canvas positions of the stock markers, in insertion order.
pub const SAMPLE_POSITIONS: [(f64, f64); 4] = [(0.2, 0.3), (0.8, 0.2), (0.3, 0.7), (0.7, 0.6)];

pub fn sample_places() -> [Place; 4] {
    [
        Place::new(
            "Central Park",
            "123 Park Avenue",
            4.8,
            Category::Attraction,
            "A beautiful park in the center of the city with walking trails and picnic areas.",
        ),
        Place::new(
            "Grand Hotel",
            "456 Main Street",
            4.5,
            Category::Hotel,
            "A luxurious 5-star hotel with excellent amenities and stunning views.",
        ),
        Place::new(
            "Gourmet Restaurant",
            "789 Food Lane",
            4.7,
            Category::Restaurant,
            "An upscale dining experience with a diverse menu and excellent service.",
        ),
        Place::new(
            "City Museum",
            "101 History Road",
            4.6,
            Category::Attraction,
            "Explore the rich history of the city through interactive exhibits and artifacts.",
        ),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// An existing marker was under the pointer; its place is now selected.
    Selected(Place),
    /// Empty spot: a new random place was pinned there.
    Added(MarkerId),
}

pub struct ViewController<S: KeyValueStore, R: Rng> {
    view: View,
    dark_theme: bool,
    selected: Option<Place>,
    extent: Extent,
    config: ExplorerConfig,
    store: PlaceStore<S>,
    generator: PlaceGenerator<R>,
}

impl<S: KeyValueStore, R: Rng> ViewController<S, R> {
    /// Loads saved places and the theme flag, then lays out the stock markers.
    pub fn new(storage: S, rng: R, config: ExplorerConfig, extent: Extent) -> Self {
        let dark_theme = storage::read_flag(&storage, DARK_THEME_KEY);
        let mut ctl = Self {
            view: View::Map,
            dark_theme,
            selected: None,
            extent,
            config,
            store: PlaceStore::load(storage),
            generator: PlaceGenerator::new(rng),
        };
        ctl.reset_map();
        ctl
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn markers(&self) -> &[Marker] {
        self.store.markers()
    }

    pub fn saved_places(&self) -> &[Place] {
        self.store.list_saved()
    }

    #[cfg(test)]
    pub fn store(&self) -> &PlaceStore<S> {
        &self.store
    }

    pub fn change_view(&mut self, view: View) {
        debug!(from = ?self.view, to = ?view, "change view");
        self.view = view;
        if view == View::Map {
            self.reset_map();
        }
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        storage::write_flag(self.store.storage_mut(), DARK_THEME_KEY, self.dark_theme);
        self.dark_theme
    }

    /// Markers keep their absolute positions; only later placements use the new size.
    pub fn resize(&mut self, extent: Extent) {
        self.extent = extent;
    }

    pub fn reset_map(&mut self) {
        self.store.clear_markers();
        for (place, (fx, fy)) in sample_places().into_iter().zip(SAMPLE_POSITIONS) {
            self.store.add_marker(self.extent.at(fx, fy), place);
        }
        self.selected = None;
    }

    pub fn click(&mut self, point: Point) -> ClickOutcome {
        if let Some(marker) = hit_test(point, self.store.markers(), self.config.hit_radius) {
            let place = marker.place.clone();
            debug!(name = %place.name, "marker selected");
            self.selected = Some(place.clone());
            return ClickOutcome::Selected(place);
        }
        let place = self.generator.generate(None, point);
        ClickOutcome::Added(self.store.add_marker(point, place))
    }

    /// Replaces the markers with made-up hits named after `term`.
    /// A blank term is rejected with `None` and changes nothing.
    pub fn search(&mut self, term: &str) -> Option<usize> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        let prefix = capitalize(&term);
        self.store.clear_markers();
        let n = self.generator.count(self.config.search_results());
        for _ in 0..n {
            let pos = self.generator.random_position(self.extent, self.config.marker_margin);
            let place = self.generator.generate(None, pos);
            let place = Place { name: format!("{prefix} {}", place.name), ..place };
            self.store.add_marker(pos, place);
        }
        debug!(term = %term, results = n, "search");
        Some(n)
    }

    pub fn filter(&mut self, category: Category) -> usize {
        self.store.clear_markers();
        let n = self.generator.count(self.config.filter_results());
        for _ in 0..n {
            let pos = self.generator.random_position(self.extent, self.config.marker_margin);
            let place = self.generator.generate(Some(category), pos);
            self.store.add_marker(pos, place);
        }
        debug!(category = category.tag(), results = n, "filter");
        n
    }

    /// `Ok(false)` when nothing is selected. A successful save closes the details.
    pub fn save_selected(&mut self) -> Result<bool, PlaceError> {
        let Some(place) = self.selected.clone() else {
            return Ok(false);
        };
        self.store.save(place)?;
        self.selected = None;
        Ok(true)
    }

    pub fn remove_saved(&mut self, index: usize) -> Result<Place, PlaceError> {
        self.store.remove(index)
    }

    /// Back to the (reset) map with the saved place pinned somewhere and selected.
    pub fn view_saved(&mut self, index: usize) -> Result<Place, PlaceError> {
        let place = self.store.saved(index)?.clone();
        self.change_view(View::Map);
        let pos = self.generator.random_position(self.extent, self.config.marker_margin);
        self.store.add_marker(pos, place.clone());
        self.selected = Some(place.clone());
        Ok(place)
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, SAVED_PLACES_KEY};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type Ctl = ViewController<MemoryStorage, StdRng>;

    fn controller(seed: u64) -> Ctl {
        ViewController::new(
            MemoryStorage::default(),
            StdRng::seed_from_u64(seed),
            ExplorerConfig::default(),
            Extent::new(1000.0, 500.0),
        )
    }

    fn canonical_positions(extent: Extent) -> Vec<Point> {
        SAMPLE_POSITIONS.iter().map(|&(fx, fy)| extent.at(fx, fy)).collect()
    }

    #[test]
    fn starts_on_map_with_stock_markers() {
        let ctl = controller(0);
        assert_eq!(ctl.view(), View::Map);
        let positions: Vec<Point> = ctl.markers().iter().map(|m| m.position).collect();
        assert_eq!(positions, canonical_positions(ctl.extent()));
        assert_eq!(ctl.markers()[1].place.name, "Grand Hotel");
    }

    #[test]
    fn reset_restores_exactly_four_markers_regardless_of_history() {
        let mut ctl = controller(1);
        ctl.filter(Category::Restaurant);
        ctl.click(Point::new(500.0, 10.0));
        ctl.click(Point::new(200.0, 150.0));
        ctl.reset_map();
        assert_eq!(ctl.markers().len(), 4);
        let positions: Vec<Point> = ctl.markers().iter().map(|m| m.position).collect();
        assert_eq!(positions, canonical_positions(ctl.extent()));
        assert!(ctl.selected().is_none());
    }

    #[test]
    fn filter_forces_category_and_count() {
        for seed in 0..20 {
            let mut ctl = controller(seed);
            let n = ctl.filter(Category::Hotel);
            assert!((3..=6).contains(&n));
            assert_eq!(ctl.markers().len(), n);
            assert!(ctl.markers().iter().all(|m| m.place.category == Category::Hotel));
        }
    }

    #[test]
    fn search_prefixes_capitalized_term() {
        for seed in 0..20 {
            let mut ctl = controller(seed);
            let n = ctl.search("  CAFE ").unwrap();
            assert!((2..=4).contains(&n));
            assert_eq!(ctl.markers().len(), n);
            assert!(ctl.markers().iter().all(|m| m.place.name.starts_with("Cafe ")));
        }
    }

    #[test]
    fn blank_search_changes_nothing() {
        let mut ctl = controller(2);
        let before = ctl.markers().to_vec();
        assert_eq!(ctl.search("   "), None);
        assert_eq!(ctl.markers(), before.as_slice());
    }

    #[test]
    fn click_on_marker_selects_and_elsewhere_adds() {
        let mut ctl = controller(3);
        let park = ctl.extent().at(0.2, 0.3);
        match ctl.click(Point::new(park.x + 5.0, park.y)) {
            ClickOutcome::Selected(p) => assert_eq!(p.name, "Central Park"),
            other => panic!("expected selection, got {other:?}"),
        }
        assert_eq!(ctl.selected().map(|p| p.name.as_str()), Some("Central Park"));

        let empty = Point::new(500.0, 480.0);
        assert!(matches!(ctl.click(empty), ClickOutcome::Added(_)));
        assert_eq!(ctl.markers().len(), 5);
        assert_eq!(ctl.markers()[4].position, empty);
    }

    #[test]
    fn saving_twice_reports_duplicate() {
        let mut ctl = controller(4);
        let museum = ctl.extent().at(0.7, 0.6);
        ctl.click(museum);
        assert_eq!(ctl.save_selected(), Ok(true));
        assert!(ctl.selected().is_none());

        ctl.click(museum);
        assert_eq!(ctl.save_selected(), Err(PlaceError::AlreadySaved));
        assert_eq!(ctl.saved_places().len(), 1);
        assert_eq!(ctl.save_selected(), Err(PlaceError::AlreadySaved));

        ctl.close_details();
        assert_eq!(ctl.save_selected(), Ok(false));
    }

    #[test]
    fn view_saved_returns_to_map_with_place_selected() {
        let mut ctl = controller(5);
        ctl.click(ctl.extent().at(0.8, 0.2));
        ctl.save_selected().unwrap();
        ctl.change_view(View::Saved);
        assert_eq!(ctl.view(), View::Saved);

        let place = ctl.view_saved(0).unwrap();
        assert_eq!(place.name, "Grand Hotel");
        assert_eq!(ctl.view(), View::Map);
        assert_eq!(ctl.markers().len(), 5);
        assert_eq!(ctl.selected(), Some(&place));
        assert_eq!(ctl.view_saved(3), Err(PlaceError::OutOfRange { index: 3, len: 1 }));
    }

    #[test]
    fn remove_saved_out_of_range_is_reported() {
        let mut ctl = controller(6);
        assert_eq!(ctl.remove_saved(0), Err(PlaceError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn theme_toggle_persists_and_is_restored() {
        let mut ctl = controller(7);
        assert!(!ctl.is_dark_theme());
        assert!(ctl.toggle_theme());
        ctl.click(ctl.extent().at(0.3, 0.7));
        ctl.save_selected().unwrap();

        let kv = ctl.store().storage().clone();
        assert_eq!(kv.get(DARK_THEME_KEY).as_deref(), Some("true"));
        assert!(kv.get(SAVED_PLACES_KEY).is_some());

        let restored = ViewController::new(kv, StdRng::seed_from_u64(0), ExplorerConfig::default(), Extent::default());
        assert!(restored.is_dark_theme());
        assert_eq!(restored.saved_places(), ctl.saved_places());
    }

    #[test]
    fn entering_map_view_is_idempotent_reset() {
        let mut ctl = controller(8);
        ctl.filter(Category::Attraction);
        ctl.change_view(View::Map);
        ctl.change_view(View::Map);
        assert_eq!(ctl.markers().len(), 4);
        ctl.change_view(View::Saved);
        ctl.change_view(View::Saved);
        assert_eq!(ctl.view(), View::Saved);
        assert_eq!(ctl.markers().len(), 4);
    }

    #[test]
    fn capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize("cafe"), "Cafe");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}
