mod gaming;
pub use gaming::{Gaming, Home};
