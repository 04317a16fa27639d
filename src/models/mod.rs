// Models module for data structures
pub mod meeting;
pub mod user;
