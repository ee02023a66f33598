// src/core/mod.rs

pub mod corpus;
pub mod tagger;
pub mod types;
