//! Save server-produced export blobs to the browser's downloads.
//!
//! The CSV bytes are wrapped in a `Blob`, exposed through a temporary object
//! URL, and clicked through a synthetic anchor element. No client-side CSV
//! parsing or validation happens here.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Download filename for a survey export, e.g. `survey-3-responses.csv`.
pub fn export_filename(survey_id: i64, suffix: &str) -> String {
    format!("survey-{survey_id}-{suffix}.csv")
}

/// Trigger a browser download of `bytes` as `filename`. Browser only; a
/// no-op under SSR.
pub fn save_blob(bytes: &[u8], filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let bag = web_sys::BlobPropertyBag::new();
        bag.set_type("text/csv");
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &bag) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                let _ = body.remove_child(&anchor);
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename);
    }
}
