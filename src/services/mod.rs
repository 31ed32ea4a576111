pub mod analysis;
pub mod best_scores;
pub mod conversion;
pub mod import;
pub mod normalization;
pub mod resolution;
pub mod seeding;
pub mod store_admin;
