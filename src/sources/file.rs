use std::path::Path;
use url::Url;

use super::Snapshot;
use crate::error::Error;

/// Loads a saved HTML file.
///
/// The snapshot URL is `base_url` when given, otherwise the file's own
/// `file://` URL.
pub async fn load(path: impl AsRef<Path>, base_url: Option<&str>) -> Result<Snapshot, Error> {
    let path = path.as_ref();
    let html = tokio::fs::read_to_string(path).await?;

    let url = match base_url {
        Some(base) => Url::parse(base)?,
        None => {
            let absolute = tokio::fs::canonicalize(path).await?;
            Url::from_file_path(&absolute)
                .map_err(|_| Error::InvalidUrl(absolute.display().to_string()))?
        }
    };

    ::log::debug!("Loaded {} bytes from {} as {}", html.len(), path.display(), url);
    Ok(Snapshot { html, url })
}
