pub mod rules;
pub mod settings;

pub use rules::*;
pub use settings::*;
