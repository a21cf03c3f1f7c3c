pub mod app;
pub mod filter_bar;
pub mod map_view;
pub mod notification;
pub mod place_details;
pub mod saved_view;
pub mod theme;
pub mod top_bar;
