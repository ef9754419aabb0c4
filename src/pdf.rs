use std::path::Path;

use lopdf::Document;
use thiserror::Error;

use crate::difficulty;
use crate::formats::Difficulty;
use crate::read_time;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse document: {0}")]
    Parse(#[from] lopdf::Error),
}

/// Fields extracted (or derived) from one source PDF. `None` fields mark an
/// extraction failure; the title-keyed fields are filled in by the scanner.
#[derive(Debug, Clone)]
pub struct DocumentData {
    pub num_pages: Option<usize>,
    pub author: String,
    pub creation_date: String,
    pub read_time: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl DocumentData {
    fn degraded() -> Self {
        Self {
            num_pages: None,
            author: "Unknown".to_owned(),
            creation_date: "Unknown".to_owned(),
            read_time: None,
            difficulty: None,
        }
    }
}

/// Extracts metadata and derived metrics from the PDF at `path`.
///
/// Any failure (unreadable file, malformed PDF, text extraction error) is
/// logged and recovered into a degraded record so a single bad file never
/// aborts the scan.
pub fn extract(path: &Path) -> DocumentData {
    match parse_document(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "document extraction failed; recording degraded entry"
            );
            DocumentData::degraded()
        }
    }
}

fn parse_document(path: &Path) -> Result<DocumentData, DocumentError> {
    let bytes = std::fs::read(path)?;
    let doc = Document::load_mem(&bytes)?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let num_pages = page_numbers.len();

    let mut text = String::new();
    for page_number in &page_numbers {
        text.push_str(&doc.extract_text(&[*page_number])?);
        text.push('\n');
    }

    let info = info_dictionary(&doc);
    let author = info
        .and_then(|dict| info_text(dict, "Author"))
        .unwrap_or_else(|| "Unknown".to_owned());
    let creation_date_raw = info
        .and_then(|dict| info_text(dict, "CreationDate"))
        .unwrap_or_else(|| "Unknown".to_owned());

    // Word tokens are literal space-separated runs; the same rule drives the
    // difficulty ratio.
    let word_count = text.split(' ').count();

    Ok(DocumentData {
        num_pages: Some(num_pages),
        author,
        creation_date: parse_creation_date(&creation_date_raw),
        read_time: Some(read_time::estimate(word_count)),
        difficulty: Some(difficulty::classify(&text)),
    })
}

fn info_dictionary(doc: &Document) -> Option<&lopdf::Dictionary> {
    let reference = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    doc.get_object(reference).ok()?.as_dict().ok()
}

fn info_text(dict: &lopdf::Dictionary, key: &str) -> Option<String> {
    dict.get(key.as_bytes())
        .ok()
        .and_then(|obj| obj.as_str().ok())
        .map(decode_pdf_string)
}

// PDF text strings carrying a UTF-16BE BOM are decoded as such; everything
// else falls back to lossy UTF-8.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let (cow, ..) = encoding_rs::UTF_16BE.decode(&bytes[2..]);
        cow.into_owned()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Reformats a PDF `D:YYYYMMDD...` creation date to `MM/DD/YYYY`. Any other
/// shape (missing prefix, short value, non-digits) yields "Unknown"; the
/// digits themselves are not validated further.
pub fn parse_creation_date(raw: &str) -> String {
    let Some(rest) = raw.strip_prefix("D:") else {
        return "Unknown".to_owned();
    };
    let Some(digits) = rest.get(..8) else {
        return "Unknown".to_owned();
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return "Unknown".to_owned();
    }

    format!("{}/{}/{}", &digits[4..6], &digits[6..8], &digits[..4])
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn creation_date_reformats_the_standard_shape() {
        assert_eq!(parse_creation_date("D:20230115103000"), "01/15/2023");
        assert_eq!(parse_creation_date("D:20230115"), "01/15/2023");
    }

    #[test]
    fn creation_date_rejects_other_shapes() {
        assert_eq!(parse_creation_date("20230115"), "Unknown");
        assert_eq!(parse_creation_date("Unknown"), "Unknown");
        assert_eq!(parse_creation_date("D:2023"), "Unknown");
        assert_eq!(parse_creation_date("D:2023011x"), "Unknown");
        assert_eq!(parse_creation_date(""), "Unknown");
    }

    #[test]
    fn creation_date_does_not_validate_calendar_values() {
        assert_eq!(parse_creation_date("D:20231345"), "13/45/2023");
    }

    #[test]
    fn unreadable_file_degrades() {
        let data = extract(Path::new("/nonexistent/book.pdf"));
        assert_eq!(data.num_pages, None);
        assert_eq!(data.author, "Unknown");
        assert_eq!(data.creation_date, "Unknown");
        assert_eq!(data.read_time, None);
        assert_eq!(data.difficulty, None);
    }

    #[test]
    fn malformed_pdf_degrades() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"this is not a pdf")?;

        let data = extract(file.path());
        assert_eq!(data.num_pages, None);
        assert_eq!(data.difficulty, None);

        Ok(())
    }

    #[test]
    fn utf16be_info_strings_decode() {
        // "Ada" as UTF-16BE with BOM.
        let bytes = [0xFE, 0xFF, 0x00, b'A', 0x00, b'd', 0x00, b'a'];
        assert_eq!(decode_pdf_string(&bytes), "Ada");
        assert_eq!(decode_pdf_string(b"Ada"), "Ada");
    }
}
