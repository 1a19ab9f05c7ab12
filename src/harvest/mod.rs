pub mod queue;
pub mod runner;
pub mod sampler;

pub use queue::CandidateQueue;
pub use runner::{HarvestOutcome, Harvester};
pub use sampler::{category_slugs, collect_random_slugs};
