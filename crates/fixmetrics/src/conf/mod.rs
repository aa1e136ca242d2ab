/// Configuration — model and loading.

pub mod model;
pub mod load;

pub use model::Config;
