// src/handlers/mod.rs

pub mod analyses;
pub mod answers;
pub mod logs;
pub mod ml;
pub mod qoptions;
pub mod questions;
pub mod quizzes;
pub mod schools;
pub mod topics;
pub mod users;
