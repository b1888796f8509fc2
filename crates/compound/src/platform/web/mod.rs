//! Browser export via a temporary object URL and a hidden download link.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::export::{CSV_MIME_TYPE, CsvExport};
use crate::platform::{ExportError, Exporter};

/// Triggers a browser download for each export.
#[derive(Default)]
pub struct BrowserDownload;

impl BrowserDownload {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for BrowserDownload {
    fn export(&self, export: &CsvExport) -> Result<String, ExportError> {
        let window =
            web_sys::window().ok_or_else(|| ExportError::NotAvailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ExportError::NotAvailable("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| ExportError::NotAvailable("no document body".into()))?;

        let parts = js_sys::Array::of1(&JsValue::from_str(&export.contents));
        let options = BlobPropertyBag::new();
        options.set_type(CSV_MIME_TYPE);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ExportError::NotAvailable("download links unsupported".into()))?;
        link.set_href(&url);
        link.set_download(&export.filename);
        link.style()
            .set_property("visibility", "hidden")
            .map_err(js_error)?;

        body.append_child(&link).map_err(js_error)?;
        link.click();
        body.remove_child(&link).map_err(js_error)?;
        Url::revoke_object_url(&url).map_err(js_error)?;

        Ok(format!("download {}", export.filename))
    }
}

fn js_error(value: JsValue) -> ExportError {
    ExportError::Io(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
