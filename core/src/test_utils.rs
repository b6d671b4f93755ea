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

//! Test utilities for gateway clients.
//!
//! This module is only available with the `test-utils` feature or in test builds.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;

use crate::{Error, HttpSend, Result};

/// MockHttpSend replays queued gateway replies and records every request.
///
/// Replies are served in order; the last one is repeated once the queue
/// drains to it.
///
/// ```
/// use http::StatusCode;
/// use paysign_core::test_utils::MockHttpSend;
/// use paysign_core::Context;
///
/// let http = MockHttpSend::new().with_reply(StatusCode::OK, r#"{"errCode":"SUCCESS"}"#);
/// let ctx = Context::new().with_http_send(http.clone());
/// assert!(http.requests().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    replies: Arc<Mutex<VecDeque<(StatusCode, Bytes)>>>,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    /// Create a mock without replies; every request fails until one is queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply, builder style.
    pub fn with_reply(self, status: StatusCode, body: impl Into<Bytes>) -> Self {
        self.push_reply(status, body);
        self
    }

    /// Queue a reply.
    pub fn push_reply(&self, status: StatusCode, body: impl Into<Bytes>) {
        lock(&self.replies).push_back((status, body.into()));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> MutexGuard<'_, Vec<http::Request<Bytes>>> {
        lock(&self.requests)
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        lock(&self.requests).push(req);

        let reply = {
            let mut replies = lock(&self.replies);
            if replies.len() > 1 {
                replies.pop_front()
            } else {
                replies.front().cloned()
            }
        };
        let Some((status, body)) = reply else {
            return Err(Error::transport("no reply queued in MockHttpSend"));
        };

        Ok(http::Response::builder().status(status).body(body)?)
    }
}
