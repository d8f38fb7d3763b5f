//! Scoring engine for the "which cheese sauce are you?" personality quiz.

pub mod config;
pub mod quiz;

pub use quiz::{Quiz, QuizError, QuizSession, SessionState};
