//! The outward route surface: layout chrome and the two page routes.

pub mod layout;
pub mod routes;

pub use routes::{router, AppState};
