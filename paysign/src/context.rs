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

use paysign_core::{Context, OsEnv};
use paysign_file_read_tokio::TokioFileRead;
use paysign_http_send_reqwest::ReqwestHttpSend;

/// Create a [`Context`] backed by tokio, reqwest and the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_context_reads_files() {
        let path = format!(
            "{}/../testdata/rsa/gateway_public_key.pem",
            env!("CARGO_MANIFEST_DIR")
        );

        let ctx = default_context();
        let pem = ctx.file_read_as_string(&path).await.unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
        assert_eq!(ctx.env_vars().len(), std::env::vars().count());
    }
}
