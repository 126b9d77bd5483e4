// src/models/mod.rs

pub mod analysis;
pub mod answer;
pub mod log;
pub mod qoption;
pub mod question;
pub mod quiz;
pub mod school;
pub mod topic;
pub mod user;

use serde::Deserialize;

/// Offset/limit window shared by every list endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}
