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

//! Core components for signing bank payment gateway calls.
//!
//! This crate provides the foundational types shared by every bank client in
//! the paysign ecosystem.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for file reading, HTTP sending, and environment access
//! - **Credentials**: [`SigningCredential`] and [`ProvideCredential`] describe how bank identities are loaded
//! - **BodyMap**: The ordered parameter set every gateway call is built from
//! - **Signatures**: RSA ([`RsaSigner`], [`RsaVerifier`]) and HMAC ([`OpenBodySig`]) schemes
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use paysign_core::{BodyMap, Context, ProvideCredential, Result, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     app_id: String,
//!     app_key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.app_id.is_empty() && !self.app_key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             app_id: "my-app-id".to_string(),
//!             app_key: "my-app-key".to_string(),
//!         }))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new();
//! let cred = MyLoader.provide_credential(&ctx).await?;
//! assert!(cred.is_valid());
//!
//! let bm = BodyMap::new().with("merOrderId", "3194202405011234").with("totalAmount", 1);
//! assert_eq!(bm.encode_sign_params(), "merOrderId=3194202405011234&totalAmount=1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Hashing, HMAC and base64 helpers
//! - [`time`]: China Standard Time formatting
//! - [`utils`]: Redaction and random digits
//! - [`response`]: Status checks and JSON decoding of gateway replies
//! - [`notify`]: Digest signatures of China UMS notifications
//! - `test_utils`: A recording [`HttpSend`] mock, behind the `test-utils` feature

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod notify;
pub mod response;
pub mod time;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

mod context;
pub use context::{Context, Env, FileRead, HttpSend, OsEnv, StaticEnv};
mod error;
pub use error::{BusinessError, Error, ErrorKind, Result};
mod api;
pub use api::{ProvideCredential, SigningCredential};
mod params;
pub use params::BodyMap;
mod asymmetric;
pub use asymmetric::{RsaSigner, RsaVerifier, SignType};
mod open_body;
pub use open_body::{
    open_body_signature, open_body_string_to_sign, OpenBodySig, OPEN_BODY_SIG, OPEN_FORM_PARAM,
};
