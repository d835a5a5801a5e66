pub mod payload;

pub use payload::Payload;
