//! Account profile entity.

pub mod model;

pub use model::Profile;
