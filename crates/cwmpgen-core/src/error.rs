use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("fetch of {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse data model XML: {0}")]
    Xml(#[from] quick_xml::errors::serialize::DeError),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("no models declared in the document")]
    SchemaEmpty,
}
