use anyhow::{bail, Result};

// a title becomes a filename component in both the data and assets
// directories, so anything that could leave those directories is rejected
// before a path is ever built from it
pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        bail!("empty title");
    }
    if title.contains('/') || title.contains('\\') || title.contains('\0') {
        bail!("title contains a path separator");
    }
    if title.contains("..") {
        bail!("title contains a parent directory sequence");
    }
    if title.starts_with('.') {
        bail!("hidden file names are not valid titles");
    }
    Ok(())
}
