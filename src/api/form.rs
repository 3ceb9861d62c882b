//! Form-field serialization into a URL query string

/// An ordered list of form fields
///
/// Serialization follows standard query-string rules: fields appear in
/// declaration order, a repeated name produces a repeated key, and fields
/// with an empty value are omitted.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    fields: Vec<(String, String)>,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; call repeatedly with the same name for multi-value
    /// fields
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Builder-style `append`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Percent-encoded `name=value` pairs joined with `&`
    pub fn serialize(&self) -> String {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
