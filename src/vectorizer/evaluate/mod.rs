pub mod rank;
pub mod scoring;
