pub mod script;
pub mod script_file;

pub use script::{Script, ScriptLine};
pub use script_file::ScriptFile;
