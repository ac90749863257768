use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::{Script, ScriptFile, script_file::SCRIPT_EXTENSIONS};
use crate::xml::to_xml;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scripts directory: {0}")]
    InvalidScriptsDir(String),
}

/// Rejected export requests. Title, content, and filename are all required;
/// the engine never substitutes defaults for them.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export requires a title")]
    MissingTitle,
    #[error("Export requires content")]
    MissingContent,
    #[error("Export requires an output filename")]
    MissingFilename,
    #[error("Failed to write exported document: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes raw screenplay text and writes it under `scripts_root`.
///
/// Validation happens before any serialization work: a blank title, content,
/// or filename rejects the whole request and nothing is written. On success
/// the document is serialized fully and written in one step, so there are
/// never partial files. Returns the path that was written.
pub fn export_script(
    title: &str,
    content: &str,
    filename: &str,
    scripts_root: &Path,
) -> Result<PathBuf, ExportError> {
    if title.trim().is_empty() {
        return Err(ExportError::MissingTitle);
    }
    if content.trim().is_empty() {
        return Err(ExportError::MissingContent);
    }
    if filename.trim().is_empty() {
        return Err(ExportError::MissingFilename);
    }

    let script = Script::from_text(title, content);
    let xml = to_xml(&script);

    let mut path = scripts_root.join(filename);
    if path.extension().is_none() {
        path.set_extension("fdx");
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, xml)?;
    Ok(path)
}

/// Read a screenplay source file and return its content
pub fn read_script(relative_path: &RelativePath, scripts_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(scripts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for screenplay source files in the scripts directory
pub fn scan_script_files(scripts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !scripts_root.exists() {
        return Err(IoError::InvalidScriptsDir(
            "scripts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(scripts_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// List screenplay source files as [`ScriptFile`]s relative to the root
pub fn list_script_files(scripts_root: &Path) -> Result<Vec<ScriptFile>, IoError> {
    let files = scan_script_files(scripts_root)?;
    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(scripts_root).ok())
        .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
        .map(ScriptFile::new)
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && SCRIPT_EXTENSIONS.contains(&ext)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_scripts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidScriptsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
