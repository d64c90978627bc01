// SPDX-License-Identifier: MPL-2.0
//! Image references and asynchronous loading for the carousel.
//!
//! An [`ImageSource`] is either a local file or an http(s) URL. [`load_source`]
//! reads or downloads the bytes and decodes them on tokio's blocking pool so
//! the UI loop never waits on I/O or decoding.

pub mod image;

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

pub use image::{decode_bytes, load_image, ImageData};

/// File extensions the carousel accepts when scanning directories.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "ico", "tiff", "tif", "webp", "svg",
];

/// Timeout applied to each remote image request.
const REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Reference to one carousel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image on the local filesystem.
    File(PathBuf),
    /// Image served over http or https.
    Remote(String),
}

impl ImageSource {
    /// Interprets a command-line argument or config entry as an image reference.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Short label for logs and the position caption.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Remote(url) => url
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string(),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Returns whether the path carries a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Loads and decodes one image source.
///
/// # Errors
///
/// Propagates read, download and decode failures as [`Error`] values.
pub async fn load_source(source: ImageSource) -> Result<ImageData> {
    match source {
        ImageSource::File(path) => {
            tokio::task::spawn_blocking(move || load_image(&path))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        }
        ImageSource::Remote(url) => {
            let bytes = fetch_remote(&url).await?;
            tokio::task::spawn_blocking(move || decode_bytes(&bytes))
                .await
                .map_err(|e| Error::Decode(e.to_string()))?
        }
    }
}

/// HTTP client shared by every remote load.
fn http_client() -> Result<&'static reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(REMOTE_TIMEOUT)
        .build()?;
    Ok(CLIENT.get_or_init(|| client))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = http_client()?.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
