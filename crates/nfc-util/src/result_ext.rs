use std::fmt::Display;

pub trait ResultExt<T, InitialError> {
    /// Map an error into a variant that carries its message
    ///
    /// # Example
    /// ```rust
    /// use nfc_util::result_ext::ResultExt;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum TagError {
    ///     #[error("invalid tag json: {0}")]
    ///     Json(String),
    /// }
    ///
    /// fn tag_id(json: &str) -> Result<u64, TagError> {
    ///     json.trim().parse::<u64>().map_err_str(TagError::Json)
    /// }
    ///
    /// assert!(tag_id("not a number").is_err());
    /// ```
    fn map_err_str<FinalError, F>(self, f: F) -> Result<T, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError;
}

impl<Type, InitialError> ResultExt<Type, InitialError> for Result<Type, InitialError> {
    fn map_err_str<FinalError, F>(self, f: F) -> Result<Type, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError,
    {
        self.map_err(|e| f(e.to_string()))
    }
}
