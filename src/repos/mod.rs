// src/repos/mod.rs
//
// Data-access layer: one module per entity. Every function takes the pool,
// returns `Result<_, sqlx::Error>` and converts "no row" into `None` rather
// than an error. Inserts return the generated id and re-fetch the full row.

pub mod analyses;
pub mod answers;
pub mod logs;
pub mod qoptions;
pub mod questions;
pub mod quizzes;
pub mod schools;
pub mod topics;
pub mod users;
