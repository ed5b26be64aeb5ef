//! SeaORM entities for the persisted blog state.

pub mod blog;
pub mod post;
