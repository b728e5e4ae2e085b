//! Analysis record assembly

mod assembler;

pub use assembler::AnalysisAssembler;
