mod analysis;
mod compiled;
mod error;
mod matcher;
mod parser;
mod token;

pub use analysis::PatternShape;
pub use compiled::CompiledPattern;
pub use error::{CaptureDefect, GroupKind, PatternError, PatternResult};
pub use matcher::{Binding, Bindings, match_tokens};
pub use parser::parse_pattern;
pub use token::{CaptureName, CharSet, PatternToken};
