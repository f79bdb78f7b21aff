//! Document payload parsing.

use serde::Serialize;

const POSTSCRIPT_MAGIC: &str = "!PS";
const DEFAULT_AUTHOR: &str = "Unknown";
const DEFAULT_TITLE: &str = "Untitled";

/// Format of a printed document, detected from the payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DocumentFormat {
    /// `!PS`-prefixed payload with embedded `author:`/`title:` fields.
    Postscript,
    /// Anything else, treated as plain ASCII text.
    Ascii,
}

/// A print job extracted from a packet payload.
#[derive(Clone, Debug, Serialize)]
pub struct PrintJob {
    /// Document author, `"Unknown"` when the payload does not name one.
    pub author: String,
    /// Document title, `"Untitled"` when the payload does not name one.
    pub title: String,
    /// Detected payload format.
    pub format: DocumentFormat,
}

impl PrintJob {
    /// Parses a payload into a print job.
    ///
    /// Never fails: absent or malformed fields fall back to the defaults.
    pub fn parse(payload: &str) -> Self {
        if payload.starts_with(POSTSCRIPT_MAGIC) {
            Self {
                author: scan_field(payload, "author:").unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
                title: scan_field(payload, "title:").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                format: DocumentFormat::Postscript,
            }
        } else {
            // ASCII convention: the author occupies character positions 8..16.
            let author = if payload.chars().count() >= 16 {
                payload.chars().skip(8).take(8).collect()
            } else {
                DEFAULT_AUTHOR.to_string()
            };
            Self {
                author,
                title: "ASCII DOCUMENT".to_string(),
                format: DocumentFormat::Ascii,
            }
        }
    }

    /// Note written to the report once the job has been printed.
    pub fn completion_note(&self) -> &'static str {
        match self.format {
            DocumentFormat::Postscript => ">>> Postscript job delivered.\n\n",
            DocumentFormat::Ascii => ">>> ASCII Print job delivered.\n\n",
        }
    }
}

// The field value runs from the marker to the next '.', or to the end of the
// payload when no '.' follows.
fn scan_field(payload: &str, marker: &str) -> Option<String> {
    let start = payload.find(marker)? + marker.len();
    let rest = &payload[start..];
    let end = rest.find('.').unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::{DocumentFormat, PrintJob};

    #[test]
    fn postscript_with_author_and_title() {
        let job = PrintJob::parse("!PS author:Alice.title:Report.");
        assert_eq!(job.author, "Alice");
        assert_eq!(job.title, "Report");
        assert_eq!(job.format, DocumentFormat::Postscript);
    }

    #[test]
    fn postscript_without_author_defaults() {
        let job = PrintJob::parse("!PS title:OnlyTitle.");
        assert_eq!(job.author, "Unknown");
        assert_eq!(job.title, "OnlyTitle");
    }

    #[test]
    fn postscript_without_markers_defaults() {
        let job = PrintJob::parse("!PS nothing useful here");
        assert_eq!(job.author, "Unknown");
        assert_eq!(job.title, "Untitled");
        assert_eq!(job.format, DocumentFormat::Postscript);
    }

    #[test]
    fn postscript_unterminated_field_runs_to_end() {
        let job = PrintJob::parse("!PS author:Bob");
        assert_eq!(job.author, "Bob");
        assert_eq!(job.title, "Untitled");
    }

    #[test]
    fn ascii_author_window() {
        let job = PrintJob::parse("01234567ABCDEFGHij");
        assert_eq!(job.author, "ABCDEFGH");
        assert_eq!(job.title, "ASCII DOCUMENT");
        assert_eq!(job.format, DocumentFormat::Ascii);
    }

    #[test]
    fn ascii_short_payload_keeps_default_author() {
        let job = PrintJob::parse("short");
        assert_eq!(job.author, "Unknown");
        assert_eq!(job.title, "ASCII DOCUMENT");
    }

    #[test]
    fn completion_notes_differ_by_format() {
        assert_eq!(
            PrintJob::parse("!PS title:T.").completion_note(),
            ">>> Postscript job delivered.\n\n"
        );
        assert_eq!(
            PrintJob::parse("plain").completion_note(),
            ">>> ASCII Print job delivered.\n\n"
        );
    }
}
