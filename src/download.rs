//! Download sinks: where finished export payloads go.
//!
//! The dialog hands each payload to a sink exactly once and never waits for
//! or observes completion; anything past that point (file pickers, browser
//! downloads, disk writes) is the sink's business.

use std::cell::RefCell;
use std::rc::Rc;

/// Accepts finished export payloads.
///
/// Delivery is fire-and-forget: implementations perform whatever I/O they
/// need on their own time and report failures themselves.
pub trait DownloadSink {
    /// Accepts one artifact as a (filename, content) pair.
    fn deliver(&mut self, filename: &str, content: &str);
}

/// Records deliveries in memory.
///
/// Useful for tests and headless hosts; clones share the same buffer, so a
/// host can keep one handle while the dialog owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    deliveries: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemorySink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all deliveries so far, in order.
    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.deliveries.borrow().clone()
    }

    /// Number of deliveries so far.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.borrow().len()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, filename: &str, content: &str) {
        self.deliveries
            .borrow_mut()
            .push((filename.to_string(), content.to_string()));
    }
}

/// Native sink: asks where to save via a file dialog, then writes the file.
///
/// The dialog and the write run on a background task so the UI thread never
/// blocks; the suggested filename is the payload's.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct SaveDialogSink;

#[cfg(not(target_arch = "wasm32"))]
impl DownloadSink for SaveDialogSink {
    fn deliver(&mut self, filename: &str, content: &str) {
        let filename = filename.to_string();
        let content = content.to_string();
        tokio::spawn(async move {
            if let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name(&filename)
                .save_file()
                .await
            {
                let path = handle.path();
                if let Err(e) = std::fs::write(path, content.as_bytes()) {
                    eprintln!("Failed to save export: {}", e);
                }
            }
        });
    }
}

/// Browser sink: triggers a download via a temporary anchor element.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserSink;

#[cfg(target_arch = "wasm32")]
impl DownloadSink for BrowserSink {
    fn deliver(&mut self, filename: &str, content: &str) {
        if let Err(e) = trigger_download(filename, content) {
            eprintln!("Failed to start download: {}", e);
        }
    }
}

/// Creates a blob URL for the content and clicks a hidden anchor pointing at
/// it, which the browser turns into a file download.
#[cfg(target_arch = "wasm32")]
fn trigger_download(filename: &str, content: &str) -> Result<(), String> {
    use eframe::wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("No window found")?;
    let document = window.document().ok_or("No document found")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&eframe::wasm_bindgen::JsValue::from_str(content));

    let mut blob_options = web_sys::BlobPropertyBag::new();
    blob_options.type_("application/json");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options)
        .map_err(|_| "Failed to create blob")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL")?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create anchor element")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast to anchor element")?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body found")?;
    body.append_child(&anchor)
        .map_err(|_| "Failed to append anchor")?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|_| "Failed to remove anchor")?;

    web_sys::Url::revoke_object_url(&url).map_err(|_| "Failed to revoke object URL")?;

    Ok(())
}

/// The natural sink for the current platform: a browser download on wasm, a
/// save dialog everywhere else.
pub fn platform_sink() -> Box<dyn DownloadSink> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserSink)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(SaveDialogSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_deliveries_in_order() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();

        handle.deliver("network.json", "{}");
        handle.deliver("template.json", "{\"label\":\"Box\"}");

        assert_eq!(sink.delivery_count(), 2);
        let deliveries = sink.deliveries();
        assert_eq!(deliveries[0].0, "network.json");
        assert_eq!(deliveries[1], ("template.json".to_string(), "{\"label\":\"Box\"}".to_string()));
    }
}
