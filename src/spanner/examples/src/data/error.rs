// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use google_cloud_gax::error::rpc::Status;

/// The result type for the data client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the data client.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot create the default credentials: {0}")]
    Credentials(#[source] google_cloud_auth::build_errors::Error),

    #[error("cannot create the authentication headers: {0}")]
    Authentication(#[source] google_cloud_auth::errors::CredentialsError),

    /// The service rejected the request.
    #[error("the service returned {} ({}): {}", .status.code, .http_status_code, .status.message)]
    Service { status: Status, http_status_code: u16 },

    /// The service returned an error without a valid status payload.
    #[error("the service returned HTTP status {status_code}: {}", String::from_utf8_lossy(.payload))]
    Http {
        status_code: u16,
        payload: bytes::Bytes,
    },

    #[error("cannot send the request or receive the response: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("cannot serialize or deserialize a payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A value in a response does not match its declared type, or the
    /// application requested an incompatible Rust type.
    #[error("cannot decode value: {0}")]
    Decode(String),

    /// One of the statements in a batch DML request failed.
    ///
    /// `row_counts` contains the results for the statements that succeeded
    /// before the failure.
    #[error("batch update failed after {} statement(s): {} {}", .row_counts.len(), .status.code, .status.message)]
    BatchUpdate { status: Status, row_counts: Vec<i64> },
}

impl Error {
    /// The status returned by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Self::Service { status, .. } | Self::BatchUpdate { status, .. } => Some(status),
            _ => None,
        }
    }

    pub(crate) fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::error::rpc::Code;

    #[test]
    fn status() {
        let status = Status::default()
            .set_code(Code::Aborted)
            .set_message("transaction aborted");
        let err = Error::Service {
            status: status.clone(),
            http_status_code: 409,
        };
        assert_eq!(err.status(), Some(&status));
        let fmt = err.to_string();
        assert!(fmt.contains("ABORTED"), "{fmt}");
        assert!(fmt.contains("409"), "{fmt}");

        let err = Error::BatchUpdate {
            status: status.clone(),
            row_counts: vec![1, 2],
        };
        assert_eq!(err.status(), Some(&status));
        let fmt = err.to_string();
        assert!(fmt.contains("2 statement(s)"), "{fmt}");

        let err = Error::decode("bad value");
        assert!(err.status().is_none(), "{err:?}");
    }

    #[test]
    fn http() {
        let err = Error::Http {
            status_code: 502,
            payload: bytes::Bytes::from_static(b"bad gateway"),
        };
        let fmt = err.to_string();
        assert!(fmt.contains("502"), "{fmt}");
        assert!(fmt.contains("bad gateway"), "{fmt}");
    }
}
