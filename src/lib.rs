pub mod app;
pub mod config;
pub mod cosmic;
pub mod domain;
pub mod enrichment;
pub mod error;
pub mod grouping;
pub mod identity;
pub mod input;
pub mod merge;
pub mod output;
pub mod study;
