//! Browser File Helpers
//!
//! Reading user-selected files and offering text downloads.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Mime type used when the browser reports none
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("No file selected")]
    NoFile,

    #[error("Failed to read file: {0}")]
    Read(String),

    #[error("Browser document unavailable")]
    NoDocument,
}

/// Encode bytes as a `data:` URI
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime.trim()
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// First file chosen in an `<input type="file">`
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Result<web_sys::File, FileError> {
    input
        .files()
        .and_then(|files| files.get(0))
        .ok_or(FileError::NoFile)
}

/// Read a whole file into memory as a data URI
pub async fn read_as_data_uri(file: &web_sys::File) -> Result<String, FileError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| FileError::Read(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    tracing::info!(
        file = %file.name(),
        mime = %file.type_(),
        bytes = bytes.len(),
        "Read image into memory"
    );

    Ok(encode_data_uri(&file.type_(), &bytes))
}

/// Read a whole file as UTF-8 text
pub async fn read_as_text(file: &web_sys::File) -> Result<String, FileError> {
    JsFuture::from(file.text())
        .await
        .map_err(|e| FileError::Read(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| FileError::Read("file did not decode as text".to_string()))
}

/// Offer `contents` as a file download
pub fn download_text(file_name: &str, contents: &str) -> Result<(), FileError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(FileError::NoDocument)?;

    let blob = web_sys::Blob::new_with_str_sequence(&js_sys::Array::of1(&contents.into()))
        .map_err(|e| FileError::Read(format!("{:?}", e)))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| FileError::Read(format!("{:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|_| FileError::NoDocument)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| FileError::NoDocument)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(
            encode_data_uri("image/png", b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_encode_data_uri_without_mime() {
        assert_eq!(
            encode_data_uri("", &[0xff, 0x00]),
            "data:application/octet-stream;base64,/wA="
        );
    }

    #[test]
    fn test_encode_empty_file() {
        assert_eq!(encode_data_uri("text/plain", &[]), "data:text/plain;base64,");
    }
}
