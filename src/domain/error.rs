use thiserror::Error;

#[derive(Error, Debug)]
pub enum UrbanError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page `<title>` has something other than plain text inside it.
    #[error("child of title is not a text node")]
    MalformedTitle,

    /// The page `<title>` text does not follow the `"Label: Word"` shape.
    #[error("title text could not be parsed")]
    UnparseableTitle,

    /// Extraction ran cleanly but the page carried no matching content.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("no definitions for '{0}' returned")]
    NoDefinitions(String),

    #[error("no random definitions returned")]
    NoRandomDefinitions,
}
