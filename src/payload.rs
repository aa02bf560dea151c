use std::{collections::HashMap, hash::Hash, path::PathBuf};

/// Metadata for a file submitted with a form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileUpload {
    /// The file name as submitted by the client.
    pub file_name: String,
    /// The content type declared by the client. Declared, not
    /// sniffed: the [mimetype](crate::rules::mimetype) rule checks
    /// this value as-is.
    pub content_type: String,
    /// Size of the file in bytes.
    pub size: u64,
    /// Where the upload was spooled to while the request is handled.
    pub temp_path: PathBuf,
}

impl FileUpload {
    /// Create a new `FileUpload`.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        size: u64,
        temp_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size,
            temp_path: temp_path.into(),
        }
    }
}

/// The submitted contents of a single request: text values and file
/// uploads, each addressed by field key.
///
/// ## Example
/// ```
/// use form_rules::{FileUpload, Payload};
///
/// let mut payload: Payload<String> = Payload::new();
/// payload.insert_text("subject".to_string(), "Hello");
/// payload.insert_file(
///     "attachment".to_string(),
///     FileUpload::new("photo.png", "image/png", 52_288, "/tmp/upload_0"),
/// );
///
/// assert_eq!(Some("Hello"), payload.text(&"subject".to_string()));
/// assert!(payload.file(&"attachment".to_string()).is_some());
/// assert_eq!(None, payload.text(&"missing".to_string()));
/// ```
pub struct Payload<Key> {
    text: HashMap<Key, String>,
    files: HashMap<Key, FileUpload>,
}

impl<Key> Payload<Key> {
    /// Create a new, empty `Payload`.
    pub fn new() -> Self {
        Self {
            text: HashMap::new(),
            files: HashMap::new(),
        }
    }
}

impl<Key> Payload<Key>
where
    Key: Eq + Hash,
{
    /// Record the submitted text value for a field.
    pub fn insert_text(&mut self, key: Key, value: impl Into<String>) {
        self.text.insert(key, value.into());
    }

    /// Record the submitted file for a field.
    pub fn insert_file(&mut self, key: Key, file: FileUpload) {
        self.files.insert(key, file);
    }

    /// The raw submitted text value for a field, if one was
    /// submitted.
    pub fn text(&self, key: &Key) -> Option<&str> {
        self.text.get(key).map(|value| value.as_str())
    }

    /// The submitted file for a field, if one was submitted.
    pub fn file(&self, key: &Key) -> Option<&FileUpload> {
        self.files.get(key)
    }
}

impl<Key> Default for Payload<Key> {
    fn default() -> Self {
        Payload::new()
    }
}

/// A value that a [Field](crate::Field) can extract from a
/// [Payload](Payload) when binding.
pub trait FromPayload<Key>: Sized {
    /// Extract the value for the given field key, or `None` if the
    /// payload has no entry for it.
    fn from_payload(payload: &Payload<Key>, key: &Key) -> Option<Self>;
}

impl<Key> FromPayload<Key> for String
where
    Key: Eq + Hash,
{
    fn from_payload(payload: &Payload<Key>, key: &Key) -> Option<Self> {
        payload.text(key).map(sanitize)
    }
}

impl<Key> FromPayload<Key> for FileUpload
where
    Key: Eq + Hash,
{
    fn from_payload(payload: &Payload<Key>, key: &Key) -> Option<Self> {
        payload.file(key).cloned()
    }
}

/// Trim a submitted value and escape the HTML metacharacters, so the
/// value is safe to echo back into the form that is re-rendered with
/// the validation messages.
///
/// ## Example
/// ```
/// use form_rules::sanitize;
///
/// assert_eq!("hello", sanitize("  hello  "));
/// assert_eq!("&lt;b&gt;hi&lt;/b&gt;", sanitize("<b>hi</b>"));
/// ```
pub fn sanitize(input: &str) -> String {
    let trimmed = input.trim();
    let mut output = String::with_capacity(trimmed.len());

    for character in trimmed.chars() {
        match character {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(character),
        }
    }

    output
}
