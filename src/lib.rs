pub mod args;
pub mod model;
pub mod controller {
    pub mod pitchers;
}
pub mod mvu {
    pub mod error;
    pub mod pitchers;
    pub mod runtime;
}
pub mod view {
    pub mod index;
    pub mod pitchers;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use mvu::error::AppError;
