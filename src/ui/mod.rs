mod renderer;
mod state;
pub mod theme;
mod widgets;

pub use renderer::{render, tab_at_click};
pub use state::{AppState, Tab};
pub use theme::Theme;
