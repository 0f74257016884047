//! Recipe image storage.
//!
//! Images arrive as base64 data URIs (`data:image/<ext>;base64,<payload>`). They are decoded
//! and written under `<media root>/recipes/` with a random file name; the database stores the
//! path relative to the media root, which is served at [`MEDIA_URL`].

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{distr::Alphanumeric, Rng};

use crate::server::error::{recipe::RecipeError, Error};

/// URL prefix the media root is served under
pub const MEDIA_URL: &str = "/media";
/// Directory below the media root holding recipe images
pub const RECIPE_IMAGE_DIR: &str = "recipes";

const IMAGE_NAME_LEN: usize = 16;
const MAX_EXTENSION_LEN: usize = 10;

/// A decoded data URI
#[derive(Debug, PartialEq, Eq)]
pub struct DecodedImage {
    /// File extension taken from the MIME subtype, lowercased
    pub extension: String,
    pub bytes: Vec<u8>,
}

/// Decodes a `data:image/<ext>;base64,<payload>` URI.
///
/// # Returns
/// - `Ok(DecodedImage)` - Extension and raw bytes of the image
/// - `Err(RecipeError::InvalidImage)` - Not an image data URI, bad extension, invalid or
///   empty base64 payload
pub fn decode_data_uri(uri: &str) -> Result<DecodedImage, RecipeError> {
    let (header, payload) = uri
        .trim()
        .split_once(";base64,")
        .ok_or_else(|| RecipeError::InvalidImage("expected a base64 data URI".to_string()))?;

    let extension = header
        .strip_prefix("data:image/")
        .ok_or_else(|| RecipeError::InvalidImage("expected an image MIME type".to_string()))?
        .to_ascii_lowercase();

    if extension.is_empty()
        || extension.len() > MAX_EXTENSION_LEN
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(RecipeError::InvalidImage(format!(
            "unsupported image type {:?}",
            extension
        )));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| RecipeError::InvalidImage(e.to_string()))?;

    if bytes.is_empty() {
        return Err(RecipeError::InvalidImage("image is empty".to_string()));
    }

    Ok(DecodedImage { extension, bytes })
}

/// Decodes a data URI and writes it below `media_root`, returning the relative path
pub async fn store_image(media_root: &Path, uri: &str) -> Result<String, Error> {
    let image = decode_data_uri(uri)?;

    let file_name: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(IMAGE_NAME_LEN)
        .map(char::from)
        .collect();
    let relative_path = format!("{}/{}.{}", RECIPE_IMAGE_DIR, file_name, image.extension);

    tokio::fs::create_dir_all(media_root.join(RECIPE_IMAGE_DIR)).await?;
    tokio::fs::write(media_root.join(&relative_path), &image.bytes).await?;

    tracing::debug!(path = %relative_path, size = image.bytes.len(), "Stored recipe image");

    Ok(relative_path)
}

/// Removes a stored image, logging instead of failing when the file cannot be removed
pub async fn remove_image(media_root: &Path, relative_path: &str) {
    if relative_path.is_empty() {
        return;
    }

    if let Err(e) = tokio::fs::remove_file(media_root.join(relative_path)).await {
        tracing::warn!(path = %relative_path, "Failed to remove recipe image: {}", e);
    }
}

/// Public URL of a stored image, empty when the recipe has no image
pub fn image_url(relative_path: &str) -> String {
    if relative_path.is_empty() {
        return String::new();
    }

    format!("{}/{}", MEDIA_URL, relative_path)
}
