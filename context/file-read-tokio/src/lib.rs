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

//! Tokio-based file reading implementation for paysign.
//!
//! This crate provides `TokioFileRead`, an async file reader that implements
//! the `FileRead` trait from `paysign_core` using Tokio's file system operations.
//! ICBC credentials use it to load RSA keys given as file paths.
//!
//! ## Example
//!
//! ```no_run
//! use paysign_core::{Context, OsEnv};
//! use paysign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     match ctx.file_read_as_string("/etc/paysign/icbc_private_key.pem").await {
//!         Ok(content) => println!("Read {} bytes", content.len()),
//!         Err(e) => eprintln!("Failed to read key: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use paysign_core::{Error, FileRead, Result};

/// Tokio-based implementation of the `FileRead` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::config_invalid(format!("failed to read file {path}")).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paysign_core::{Context, ErrorKind};

    #[tokio::test]
    async fn test_read_fixture() {
        let ctx = Context::new().with_file_read(TokioFileRead);
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/rsa/gateway_public_key.pem");

        let content = ctx.file_read_as_string(path).await.unwrap();
        assert!(content.starts_with("-----BEGIN PUBLIC KEY-----"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let ctx = Context::new().with_file_read(TokioFileRead);

        let err = ctx.file_read("/definitely/not/here.pem").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
