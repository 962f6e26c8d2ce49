pub mod core;
pub mod form;
pub mod plot;
pub mod report;
