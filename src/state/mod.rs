//! Application state module

mod app_state;
mod carousel;
mod forms;
mod nav;
mod notices;
mod ui_area;

pub use app_state::*;
pub use carousel::*;
pub use forms::*;
pub use nav::*;
pub use notices::*;
pub use ui_area::*;
