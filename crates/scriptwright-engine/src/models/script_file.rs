use relative_path::{RelativePath, RelativePathBuf};

/// Extensions recognised as screenplay source files.
pub const SCRIPT_EXTENSIONS: [&str; 2] = ["fountain", "txt"];

/// A screenplay source file with a relative path and display-friendly name.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ScriptFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without its script extension, used in list panes and as the
    /// default title for exports.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| {
                SCRIPT_EXTENSIONS
                    .iter()
                    .find_map(|ext| name.strip_suffix(&format!(".{ext}")))
                    .unwrap_or(name)
            })
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for ScriptFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ScriptFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
