mod components;
mod config;
mod controller;
mod error;
mod generator;
mod logging;
mod model;
mod state;
mod storage;
mod store;
mod util;

use components::app::App;

fn main() {
    logging::init(tracing::Level::DEBUG);
    tracing::info!("places explorer starting");
    yew::Renderer::<App>::new().render();
}
