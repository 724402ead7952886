//! Client-side file export through a temporary object URL.

/// Offers `contents` to the user as a downloaded file named `file_name`.
///
/// # Errors
///
/// Returns a host error description when the document, blob, or object URL cannot be created.
/// On non-wasm targets this always fails because there is no document to download into.
pub fn download_text_file(file_name: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| format!("blob creation failed: {e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("object url creation failed: {e:?}"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_string())?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("anchor creation failed: {e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "created element is not an anchor".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url)
            .map_err(|e| format!("object url revoke failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (file_name, mime_type, contents);
        Err("file download requires a browser document".to_string())
    }
}
