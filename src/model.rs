pub mod era;
pub mod game;
pub mod pitcher;
pub mod request;
pub mod teams;

pub use era::*;
pub use game::*;
pub use pitcher::*;
pub use request::*;
pub use teams::*;

/// Empty (or whitespace-only) cells are treated as absent values.
pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Fails with the list of `required` headers that `headers` does not contain.
pub(crate) fn check_headers(
    headers: &csv::StringRecord,
    required: &[&str],
    source: &str,
) -> Result<(), crate::AppError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h.trim() == *col))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(crate::AppError::Csv(format!(
            "{source} is missing required columns: {missing:?}"
        )))
    }
}

/// A missing file is `NotFound`; any other read failure is `Io`.
pub(crate) fn read_failure(path: &std::path::Path, err: &std::io::Error) -> crate::AppError {
    let msg = format!("{}: {err}", path.display());
    if err.kind() == std::io::ErrorKind::NotFound {
        crate::AppError::NotFound(msg)
    } else {
        crate::AppError::Io(msg)
    }
}
