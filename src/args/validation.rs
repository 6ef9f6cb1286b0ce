use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::File::open(&path).is_err() {
        return Err(format!("The game file '{file}' is not readable."));
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the path is not a readable directory
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The data directory '{dir}' is not readable."));
    }
    Ok(path)
}
