pub mod input;
pub mod output;

pub use input::{HookContext, HookOpts};
pub use output::HookOutput;
