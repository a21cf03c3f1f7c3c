//! Tunables for the explorer. Defaults reproduce the stock demo; a partial JSON
//! object under `explorerConfig` in local storage overrides individual fields.

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::hit_test::DEFAULT_HIT_RADIUS;
use crate::storage::{self, CONFIG_KEY, KeyValueStore};

/// Upper bound on markers a single search or filter may place.
pub const MAX_RESULTS: usize = 50;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// Clicks closer than this (strictly) to a marker select it.
    pub hit_radius: f64,
    /// Random result markers stay this far from the canvas edge.
    pub marker_margin: f64,
    pub search_results_min: usize,
    pub search_results_max: usize,
    pub filter_results_min: usize,
    pub filter_results_max: usize,
    /// How long a notification stays visible.
    pub notification_ms: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
            marker_margin: 50.0,
            search_results_min: 2,
            search_results_max: 4,
            filter_results_min: 3,
            filter_results_max: 6,
            notification_ms: 3000,
        }
    }
}

impl ExplorerConfig {
    pub fn load(store: &impl KeyValueStore) -> Self {
        storage::read_json::<ExplorerConfig>(store, CONFIG_KEY)
            .unwrap_or_default()
            .sanitized()
    }

    pub fn search_results(&self) -> RangeInclusive<usize> {
        self.search_results_min..=self.search_results_max
    }

    pub fn filter_results(&self) -> RangeInclusive<usize> {
        self.filter_results_min..=self.filter_results_max
    }

    fn sanitized(mut self) -> Self {
        if !(self.hit_radius > 0.0) {
            self.hit_radius = Self::default().hit_radius;
        }
        self.marker_margin = self.marker_margin.max(0.0);
        self.search_results_min = self.search_results_min.min(MAX_RESULTS);
        self.search_results_max = self.search_results_max.clamp(self.search_results_min, MAX_RESULTS);
        self.filter_results_min = self.filter_results_min.min(MAX_RESULTS);
        self.filter_results_max = self.filter_results_max.clamp(self.filter_results_min, MAX_RESULTS);
        self
    }
}
