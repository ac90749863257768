pub mod classify;
pub mod io;
pub mod models;
pub mod xml;

// Re-export key types for easier usage
pub use classify::{ElementCategory, classify, classify_after};
pub use io::{ExportError, IoError};
pub use models::{Script, ScriptFile, ScriptLine};
pub use xml::{escape_text, to_xml};
