use serde::Deserialize;

/// Subject shown to the receiving application when the caller provides none.
pub const DEFAULT_TITLE: &str = "Compartir archivo";

/// Chooser dialog title used when the caller provides none.
pub const DEFAULT_DIALOG_TITLE: &str = "Compartir";

/// A request to hand one local file to the system share dialog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareFileRequest {
    /// A `file://` URI or absolute path to the file. Must resolve to an
    /// existing file at call time. An omitted field deserializes to an
    /// empty string so the handler rejects it like an explicit `""`.
    #[serde(default)]
    pub file_uri: String,
    /// Subject handed to the receiving application.
    pub title: Option<String>,
    /// Title of the chooser dialog itself.
    pub dialog_title: Option<String>,
}

impl ShareFileRequest {
    /// The subject to share under. Falls back to [`DEFAULT_TITLE`] when the
    /// caller omitted the field or passed an empty string.
    pub fn effective_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }

    /// The chooser dialog title, falling back to [`DEFAULT_DIALOG_TITLE`].
    pub fn effective_dialog_title(&self) -> &str {
        match self.dialog_title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_DIALOG_TITLE,
        }
    }
}
