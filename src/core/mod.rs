pub mod ballistics;
pub mod error;
pub mod proximity;
pub mod solver;
pub mod window;
