//! Saved places (persisted bookmarks) and the active map markers.

use tracing::{debug, info, warn};

use crate::error::PlaceError;
use crate::model::{Marker, MarkerId, Place, Point};
use crate::storage::{self, KeyValueStore, SAVED_PLACES_KEY};

pub struct PlaceStore<S: KeyValueStore> {
    saved: Vec<Place>,
    markers: Vec<Marker>,
    next_marker_id: u64,
    storage: S,
}

impl<S: KeyValueStore> PlaceStore<S> {
    /// Restore saved places from `storage`. Entries are decoded one by one so a
    /// single bad record only costs itself; a value that is not an array at all
    /// starts an empty list. Duplicates are dropped, first one wins.
    pub fn load(storage: S) -> Self {
        let stored: Vec<serde_json::Value> = storage::read_json(&storage, SAVED_PLACES_KEY).unwrap_or_default();
        let mut saved: Vec<Place> = Vec::with_capacity(stored.len());
        for (index, raw) in stored.into_iter().enumerate() {
            let place = match serde_json::from_value::<Place>(raw) {
                Ok(place) => place,
                Err(err) => {
                    warn!(index, %err, "skipping unreadable saved place");
                    continue;
                }
            };
            if !saved.iter().any(|p| p.same_identity(&place)) {
                saved.push(place);
            }
        }
        debug!(count = saved.len(), "loaded saved places");
        Self { saved, markers: Vec::new(), next_marker_id: 0, storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    // ---------------- Markers -----------------

    pub fn add_marker(&mut self, position: Point, place: Place) -> MarkerId {
        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;
        self.markers.push(Marker { id, position, place });
        id
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    // ---------------- Saved places -----------------

    pub fn save(&mut self, place: Place) -> Result<(), PlaceError> {
        if self.is_saved(&place) {
            return Err(PlaceError::AlreadySaved);
        }
        info!(name = %place.name, address = %place.address, "saving place");
        self.saved.push(place);
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Place, PlaceError> {
        self.check_index(index)?;
        let place = self.saved.remove(index);
        info!(index, name = %place.name, "removed saved place");
        self.persist();
        Ok(place)
    }

    pub fn saved(&self, index: usize) -> Result<&Place, PlaceError> {
        self.check_index(index)?;
        Ok(&self.saved[index])
    }

    pub fn list_saved(&self) -> &[Place] {
        &self.saved
    }

    pub fn is_saved(&self, place: &Place) -> bool {
        self.saved.iter().any(|p| p.same_identity(place))
    }

    fn check_index(&self, index: usize) -> Result<(), PlaceError> {
        if index < self.saved.len() {
            Ok(())
        } else {
            Err(PlaceError::OutOfRange { index, len: self.saved.len() })
        }
    }

    fn persist(&mut self) {
        storage::write_json(&mut self.storage, SAVED_PLACES_KEY, &self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::storage::MemoryStorage;

    fn place(name: &str, address: &str) -> Place {
        Place::new(name, address, 4.0, Category::Hotel, "A comfortable hotel.")
    }

    fn store() -> PlaceStore<MemoryStorage> {
        PlaceStore::load(MemoryStorage::default())
    }

    #[test]
    fn second_save_of_same_place_is_rejected() {
        let mut s = store();
        s.save(place("Comfort Inn", "10 Main St")).unwrap();
        let err = s.save(place("Comfort Inn", "10 Main St")).unwrap_err();
        assert_eq!(err, PlaceError::AlreadySaved);
        assert_eq!(s.list_saved().len(), 1);
    }

    #[test]
    fn same_name_at_other_address_is_a_different_place() {
        let mut s = store();
        s.save(place("Comfort Inn", "10 Main St")).unwrap();
        s.save(place("Comfort Inn", "11 Main St")).unwrap();
        assert_eq!(s.list_saved().len(), 2);
    }

    #[test]
    fn remove_takes_exactly_the_indexed_entry() {
        let mut s = store();
        for n in ["a", "b", "c"] {
            s.save(place(n, "1 Road")).unwrap();
        }
        let removed = s.remove(1).unwrap();
        assert_eq!(removed.name, "b");
        let names: Vec<&str> = s.list_saved().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn out_of_range_remove_leaves_list_alone() {
        let mut s = store();
        s.save(place("a", "1 Road")).unwrap();
        let err = s.remove(1).unwrap_err();
        assert_eq!(err, PlaceError::OutOfRange { index: 1, len: 1 });
        assert_eq!(s.list_saved().len(), 1);
        assert!(s.saved(5).is_err());
    }

    #[test]
    fn every_mutation_is_flushed_and_reloads_in_order() {
        let mut s = store();
        s.save(place("first", "1 Road")).unwrap();
        s.save(place("second", "2 Road")).unwrap();
        s.save(place("third", "3 Road")).unwrap();
        s.remove(0).unwrap();
        let before = s.list_saved().to_vec();

        let reloaded = PlaceStore::load(s.storage().clone());
        assert_eq!(reloaded.list_saved(), before.as_slice());
    }

    #[test]
    fn load_drops_duplicates_and_survives_garbage() {
        let mut kv = MemoryStorage::default();
        let dup = vec![place("x", "1 Road"), place("x", "1 Road"), place("y", "2 Road")];
        storage::write_json(&mut kv, SAVED_PLACES_KEY, &dup);
        assert_eq!(PlaceStore::load(kv).list_saved().len(), 2);

        let mut bad = MemoryStorage::default();
        bad.set(SAVED_PLACES_KEY, "null-ish");
        assert!(PlaceStore::load(bad).list_saved().is_empty());
    }

    #[test]
    fn one_bad_entry_does_not_cost_the_others() {
        let mut kv = MemoryStorage::default();
        kv.set(
            SAVED_PLACES_KEY,
            r#"[
                {"name":"A","address":"1 Road","rating":"4.2","category":"hotel","description":"first"},
                {"name":"B","address":"2 Road","rating":null,"category":"hotel","description":"no rating"},
                {"name":"D","address":"4 Road","rating":"n/a","category":"hotel","description":"bad rating"},
                {"name":"E","address":"5 Road","rating":3,"category":"restaurant"},
                {"name":"F","address":"6 Road","rating":4.5,"category":"attraction","description":"last"}
            ]"#,
        );
        let mut s = PlaceStore::load(kv);
        let names: Vec<&str> = s.list_saved().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "F"]);

        s.save(place("C", "3 Road")).unwrap();
        let reloaded = PlaceStore::load(s.storage().clone());
        let names: Vec<&str> = reloaded.list_saved().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "F", "C"]);
    }

    #[test]
    fn markers_get_fresh_ids_and_clear_wholesale() {
        let mut s = store();
        let a = s.add_marker(Point::new(1.0, 1.0), place("a", "1"));
        let b = s.add_marker(Point::new(2.0, 2.0), place("b", "2"));
        assert_ne!(a, b);
        assert_eq!(s.markers().len(), 2);
        s.clear_markers();
        assert!(s.markers().is_empty());
        let c = s.add_marker(Point::new(3.0, 3.0), place("c", "3"));
        assert!(c > b);
    }
}
