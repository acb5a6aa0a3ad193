pub mod favorites;
pub mod list;
pub mod menu;
pub mod open;
pub mod settings;

pub use favorites::*;
pub use list::*;
pub use menu::*;
pub use open::*;
pub use settings::*;
