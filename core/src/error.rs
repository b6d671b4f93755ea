// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use thiserror::Error;

/// The error type for paysign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
    status: Option<http::StatusCode>,
    body: Option<String>,
    business: Option<BusinessError>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials are missing or malformed (for example an unparseable RSA key)
    CredentialInvalid,

    /// Request cannot be signed (missing required parameters, unknown sign type, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Network failure or a non-200 HTTP status from the gateway
    Transport,

    /// The gateway returned a body that is not the expected JSON envelope
    Decode,

    /// The gateway answered with a non-success business code
    Business,

    /// The signature carried by a response or notification does not match
    SignatureInvalid,

    /// Unexpected errors
    Unexpected,
}

/// Structured code and message returned by a gateway on business failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessError {
    /// Gateway specific return code, such as `"0001"` or `"5001"`.
    pub code: String,
    /// Human readable message returned along with the code.
    pub msg: String,
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"{{"code":"{}","msg":"{}"}}"#, self.code, self.msg)
    }
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            status: None,
            body: None,
            business: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status returned by the gateway.
    pub fn with_status(mut self, status: http::StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the raw response body for diagnostics.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status of the failed response, if any.
    pub fn status(&self) -> Option<http::StatusCode> {
        self.status
    }

    /// Raw response body attached to transport and decode errors.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Business code and message, present only for [`ErrorKind::Business`].
    pub fn business(&self) -> Option<&BusinessError> {
        self.business.as_ref()
    }

    /// Check if this is a business error
    pub fn is_business_error(&self) -> bool {
        self.kind == ErrorKind::Business
    }

    /// Check if this is a signature verification failure
    pub fn is_signature_error(&self) -> bool {
        self.kind == ErrorKind::SignatureInvalid
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a decode error carrying the raw body that failed to decode
    pub fn decode(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message).with_body(body)
    }

    /// Create a business error from the gateway code and message
    pub fn business_error(code: impl Into<String>, msg: impl Into<String>) -> Self {
        let business = BusinessError {
            code: code.into(),
            msg: msg.into(),
        };
        let mut err = Self::new(ErrorKind::Business, format!("business error: {business}"));
        err.business = Some(business);
        err
    }

    /// Create a signature invalid error
    pub fn signature_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Decode => write!(f, "decode error"),
            ErrorKind::Business => write!(f, "business error"),
            ErrorKind::SignatureInvalid => write!(f, "invalid signature"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::request_invalid(format!("failed to serialize parameters: {err}"))
            .with_source(anyhow::Error::from(err))
    }
}
