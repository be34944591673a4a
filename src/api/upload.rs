//! Image upload.

use super::{endpoint, with_auth};
use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Upload one image through the multipart endpoint; resolves to the hosted
/// URL.
pub async fn upload_image(file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| "FormData unavailable".to_string())?;
    form.append_with_blob("image", &file)
        .map_err(|_| "Failed to attach file".to_string())?;

    let request = with_auth(Request::post(&endpoint("/upload")))
        .body(form)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    let parsed: UploadResponse = response.json().await.map_err(|e| e.to_string())?;

    if !parsed.success {
        return Err(parsed
            .message
            .unwrap_or_else(|| format!("Upload failed ({status})")));
    }
    parsed
        .url
        .ok_or_else(|| "Upload response carried no URL".to_string())
}
