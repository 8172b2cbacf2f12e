use crate::domain::{validate_title, Page};
use crate::store::{ImageStore, PageStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct LocalPageStore {
    data_dir: PathBuf,
}

impl LocalPageStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    fn page_path(&self, title: &str) -> Result<PathBuf> {
        // the store is the persistence boundary; it does not trust callers
        validate_title(title)?;
        Ok(self.data_dir.join(format!("{}.txt", title)))
    }
}

#[async_trait]
impl PageStore for LocalPageStore {
    async fn load(&self, title: &str) -> Result<Option<Page>> {
        let path = self.page_path(title)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read page file {}", path.display()));
            }
        };

        Ok(Some(Page {
            title: title.to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
            image_path: format!("/assets/{}.jpg", title),
        }))
    }

    async fn save(&self, title: &str, body: &[u8]) -> Result<()> {
        let path = self.page_path(title)?;
        replace_file(&self.data_dir, &path, body, 0o600)
            .with_context(|| format!("Failed to write page file {}", path.display()))
    }
}

pub struct LocalImageStore {
    assets_dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Result<Self> {
        let assets_dir = assets_dir.into();
        fs::create_dir_all(&assets_dir).with_context(|| {
            format!("Failed to create assets directory {}", assets_dir.display())
        })?;
        Ok(Self { assets_dir })
    }

    fn image_path(&self, title: &str) -> Result<PathBuf> {
        validate_title(title)?;
        Ok(self.assets_dir.join(format!("{}.jpg", title)))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, title: &str, bytes: &[u8]) -> Result<()> {
        let path = self.image_path(title)?;
        // images are served by the static file service, so world-readable
        replace_file(&self.assets_dir, &path, bytes, 0o644)
            .with_context(|| format!("Failed to write image file {}", path.display()))
    }
}

// write the full contents to a temp file in the same directory, then rename
// it over the destination; a concurrent reader observes either the old file
// or the new one, never a partial write
fn replace_file(dir: &Path, dest: &Path, bytes: &[u8], mode: u32) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    set_mode(tmp.as_file(), mode)?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &fs::File, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_file: &fs::File, _mode: u32) -> Result<()> {
    Ok(())
}
