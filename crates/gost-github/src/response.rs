//! Response normalizers.
//!
//! Each executed response goes through exactly one of these, which reads or
//! drains its body and releases the connection.

use std::io;

use http::StatusCode;
use reqwest::blocking::Response;
use tracing::debug;

use crate::errors::GitHubError;

/// Read the whole body, whatever the status.
pub fn into_payload(response: Response) -> Result<Vec<u8>, GitHubError> {
    Ok(response.bytes()?.to_vec())
}

/// Compare the status against `expected`. A mismatch is `false`, not an error.
pub fn into_status_match(expected: StatusCode, response: Response) -> bool {
    let matched = response.status() == expected;
    drain(response);
    matched
}

/// Read and discard the remaining body so the connection can be reused.
pub(crate) fn drain(mut response: Response) {
    if let Err(e) = response.copy_to(&mut io::sink()) {
        debug!(error = %e, "Could not drain response body");
    }
}
