pub mod ballistics;
pub mod driver;
pub mod error;
pub mod plot;
pub mod prediction;
pub mod session;
pub mod target;
pub mod window;
