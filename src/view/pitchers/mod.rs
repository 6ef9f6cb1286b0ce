pub mod color_box;
pub mod split_bar;
pub mod table;
pub mod template;
pub mod types;
pub mod winloss;

pub use color_box::*;
pub use split_bar::*;
pub use table::*;
pub use template::*;
pub use types::*;
pub use winloss::*;
