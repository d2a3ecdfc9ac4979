use std::fs;
use std::io::Read;
use std::time::Duration;

use crate::error::AcquireError;

/// Bound on how long a network fetch may take before it is treated as failed.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load raw schema bytes from a local file path or an http(s) URL.
///
/// Any failure (missing file, permission denied, connection error, non-2xx
/// status) is surfaced immediately with the source in context; nothing is
/// retried.
pub fn load(source: &str) -> Result<Vec<u8>, AcquireError> {
    if is_url(source) {
        fetch_from_url(source)
    } else {
        read_from_file(source)
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_from_url(url: &str) -> Result<Vec<u8>, AcquireError> {
    log::debug!("fetching data model from {url}");

    let agent = ureq::AgentBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .build();

    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => AcquireError::HttpStatus {
            url: url.to_string(),
            status,
        },
        other => AcquireError::Http {
            url: url.to_string(),
            source: Box::new(other),
        },
    })?;

    let mut data = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut data)
        .map_err(|e| AcquireError::Io {
            path: url.to_string(),
            source: e,
        })?;

    Ok(data)
}

fn read_from_file(path: &str) -> Result<Vec<u8>, AcquireError> {
    log::debug!("reading data model from {path}");

    fs::read(path).map_err(|e| AcquireError::Io {
        path: path.to_string(),
        source: e,
    })
}
