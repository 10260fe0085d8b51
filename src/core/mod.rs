// src/core/mod.rs
pub mod assembler;
pub mod engine;
pub mod explain;
pub mod normalizer;
pub mod resolver;
pub mod tokenizer;
pub mod types;
