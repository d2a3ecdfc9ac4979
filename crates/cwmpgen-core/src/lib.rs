pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod source;
pub mod transform;

/// A generated file with a relative path and rendered content.
///
/// Emitters never touch the filesystem; persisting these pairs is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that project a canonical device model into files.
///
/// Generators are pure: the same model and config always yield byte-identical
/// output, so regeneration stays diffable.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        model: &ir::DeviceModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
