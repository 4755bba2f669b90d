pub mod chunker;
pub mod extractor;

pub use chunker::chunk;
pub use extractor::extract_text;
