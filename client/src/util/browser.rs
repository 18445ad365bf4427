//! Browser glue for alerts and file pickers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Modals call these helpers instead of touching `web_sys` directly so the
//! component bodies stay identical between SSR and hydrate builds.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// MIME types accepted by the image and avatar pickers.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// Value for an `<input type="file" accept=...>` attribute.
#[must_use]
pub fn accept_attr() -> String {
    ACCEPTED_IMAGE_TYPES.join(",")
}

/// True when `mime` is one of [`ACCEPTED_IMAGE_TYPES`].
#[must_use]
pub fn is_accepted_image(mime: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&mime.trim().to_ascii_lowercase().as_str())
}

/// Show a blocking browser alert. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Read the first file selected in a file input into memory.
///
/// Returns `Ok(None)` when nothing is selected.
///
/// # Errors
///
/// Returns an error string for unsupported types or when the browser fails to
/// read the file.
#[cfg(feature = "hydrate")]
pub async fn read_selected_file(
    input: &web_sys::HtmlInputElement,
) -> Result<Option<crate::net::client::Upload>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let mime = file.type_();
    if !is_accepted_image(&mime) {
        return Err(format!("Unsupported file type: {mime}"));
    }
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(crate::net::client::Upload { file_name: file.name(), mime, bytes }))
}
