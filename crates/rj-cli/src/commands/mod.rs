pub mod translate;

pub use translate::*;
