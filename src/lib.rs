pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod harvest;
pub mod sink;
