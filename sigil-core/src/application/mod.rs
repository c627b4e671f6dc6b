pub mod pipeline;

pub use pipeline::SigningPipeline;
