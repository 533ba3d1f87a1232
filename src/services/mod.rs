pub mod generation_cache;
pub mod preview;

pub use generation_cache::GenerationCache;
pub use preview::{Preview, PreviewError, PreviewService, ResolvedColor, RANDOM_TOKEN};
