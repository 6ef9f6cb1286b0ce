pub mod http_handlers;
pub mod pipeline;
pub mod report;
pub mod selection;

pub use http_handlers::*;
pub use pipeline::*;
pub use report::*;
pub use selection::*;
