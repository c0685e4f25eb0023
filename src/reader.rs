use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use thiserror::Error;
use tracing::warn;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "doc"];

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unsupported file extension `{extension}` (supported: {})", SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedFormat { extension: String },
}

/// Extract raw text from a document, dispatching on the (case-insensitive)
/// file extension. Only an unsupported extension is an error; any decoder
/// fault is logged and degraded to empty text, so the caller falls through
/// to the sentinel result instead of surfacing an opaque crash.
pub fn extract_text(path: &Path) -> Result<String, ReadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "pdf" => Ok(pdf_text(path)),
        // Legacy .doc is routed through the OOXML reader; a genuine binary
        // .doc fails the zip open and degrades to empty text.
        "docx" | "doc" => Ok(docx_text(path)),
        _ => Err(ReadError::UnsupportedFormat { extension }),
    }
}

fn pdf_text(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("pdf extraction failed for {}: {e}", path.display());
            String::new()
        }
    }
}

fn docx_text(path: &Path) -> String {
    match read_docx(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("docx extraction failed for {}: {e}", path.display());
            String::new()
        }
    }
}

/// Pull paragraph text out of `word/document.xml`: collect character data
/// inside `<w:t>` runs, newline at each paragraph end.
fn read_docx(path: &Path) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut entry = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run_text = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}
