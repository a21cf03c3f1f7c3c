pub mod notice;

pub use notice::Notice;

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use rand::rngs::StdRng;
use yew::Reducible;

use crate::controller::ViewController;
use crate::model::{Category, Extent, Point, View};
use crate::storage::{KeyValueStore, LocalStorage};

/// What the browser build runs on.
pub type AppState = ExplorerState<LocalStorage, StdRng>;

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum ExplorerAction {
    ChangeView(View),
    ResetMap,
    ToggleTheme,
    Click(Point),
    Search(String),
    Filter(Category),
    SaveSelected,
    RemoveSaved(usize),
    ViewSaved(usize),
    CloseDetails,
    Resize(Extent),
    DismissNotice(u64),
}

/// Reducer wrapper around the controller. The controller itself is shared and
/// mutated in place; `version` bumps on every action so yew re-renders.
pub struct ExplorerState<S: KeyValueStore, R: Rng> {
    pub ctl: Rc<RefCell<ViewController<S, R>>>,
    pub version: u64,
    pub notice: Option<Notice>,
}

impl<S: KeyValueStore, R: Rng> ExplorerState<S, R> {
    pub fn new(ctl: ViewController<S, R>) -> Self {
        Self { ctl: Rc::new(RefCell::new(ctl)), version: 0, notice: None }
    }

    fn announce(&self, message: Option<String>) -> Option<Notice> {
        match message {
            Some(message) => Some(Notice { id: self.version + 1, message }),
            None => self.notice.clone(),
        }
    }
}

// Cheap identity: same shared controller at the same version with the same notice.
impl<S: KeyValueStore, R: Rng> PartialEq for ExplorerState<S, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ctl, &other.ctl) && self.version == other.version && self.notice == other.notice
    }
}

impl<S: KeyValueStore + 'static, R: Rng + 'static> Reducible for ExplorerState<S, R> {
    type Action = ExplorerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ExplorerAction::*;
        let mut dismiss = false;
        let message = {
            let mut ctl = self.ctl.borrow_mut();
            match action {
                ChangeView(view) => { ctl.change_view(view); None }
                ResetMap => { ctl.reset_map(); None }
                ToggleTheme => { ctl.toggle_theme(); None }
                Click(point) => { ctl.click(point); None }
                Search(term) => match ctl.search(&term) {
                    Some(n) => Some(format!("Found {} results for \"{}\"", n, term.trim().to_lowercase())),
                    None => Some("Please enter a search term".to_string()),
                },
                Filter(category) => {
                    let n = ctl.filter(category);
                    Some(format!("Showing {} {}s", n, category.tag()))
                }
                SaveSelected => match ctl.save_selected() {
                    Ok(true) => Some("Place saved successfully!".to_string()),
                    Ok(false) => None,
                    Err(err) => Some(err.to_string()),
                },
                RemoveSaved(index) => match ctl.remove_saved(index) {
                    Ok(_) => Some("Place removed successfully!".to_string()),
                    Err(err) => Some(err.to_string()),
                },
                ViewSaved(index) => match ctl.view_saved(index) {
                    Ok(_) => Some("Showing saved place on map".to_string()),
                    Err(err) => Some(err.to_string()),
                },
                CloseDetails => { ctl.close_details(); None }
                Resize(extent) => { ctl.resize(extent); None }
                DismissNotice(id) => {
                    if self.notice.as_ref().is_some_and(|n| n.id == id) { dismiss = true; }
                    None
                }
            }
        };
        let notice = if dismiss { None } else { self.announce(message) };
        Rc::new(Self { ctl: self.ctl.clone(), version: self.version + 1, notice })
    }
}
