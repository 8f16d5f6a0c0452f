pub mod engine;
pub mod matcher;
pub mod processor;

pub use engine::{search_content, search_names};
pub use matcher::{LineMatch, PatternSet};
pub use processor::{FileProcessor, LineHit};
