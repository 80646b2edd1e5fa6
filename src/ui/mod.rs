//! Terminal UI: the app loop and the game view. Draws the board and
//! relays column choices to the engine; holds no game rules.

mod app;
mod game_view;

pub use app::App;
