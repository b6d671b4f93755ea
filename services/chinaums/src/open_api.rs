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

//! Signed calls to the China UMS open platform.
//!
//! China UMS netpay and UnionPay netpay share this transport: a JSON body with
//! `msgId`, `mid`, `tid` and `requestTimestamp` injected, authorized with an
//! `OPEN-BODY-SIG` header (POST) or `OPEN-FORM-PARAM` query parameters (GET).
//! Only the authorization timestamp and the header separator differ, see
//! [`AuthStyle`].

use std::fmt::{Debug, Formatter};

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use log::debug;
use paysign_core::response::{check_status, decode_json};
use paysign_core::time::{format_timestamp, now, unix_nanos, unix_seconds, DateTime};
use paysign_core::utils::Redact;
use paysign_core::{BodyMap, Context, OpenBodySig, Result};
use serde::de::DeserializeOwned;

use crate::constants::CONTENT_TYPE_JSON;
use crate::model::UmsResponse;

/// How a product renders its `OPEN-BODY-SIG` authorization.
#[derive(Debug, Clone, Copy)]
pub struct AuthStyle {
    /// Formats the `Timestamp` field.
    pub timestamp: fn(DateTime) -> String,
    /// Sits between the header fields.
    pub separator: &'static str,
}

impl AuthStyle {
    /// China UMS netpay: unix seconds, fields separated by `","`.
    pub const CHINAUMS: AuthStyle = AuthStyle {
        timestamp: unix_seconds,
        separator: ",",
    };
}

/// OpenApi signs and sends calls for one merchant terminal.
#[derive(Clone, Copy)]
pub struct OpenApi<'a> {
    ctx: &'a Context,
    base_url: &'a str,
    style: AuthStyle,
    app_id: &'a str,
    app_key: &'a str,
    mid: &'a str,
    tid: &'a str,
}

impl Debug for OpenApi<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenApi")
            .field("base_url", &self.base_url)
            .field("style", &self.style)
            .field("app_id", &Redact::from(self.app_id))
            .field("app_key", &Redact::from(self.app_key))
            .field("mid", &self.mid)
            .field("tid", &self.tid)
            .finish()
    }
}

impl<'a> OpenApi<'a> {
    /// Create a new OpenApi against `base_url`.
    pub fn new(ctx: &'a Context, base_url: &'a str, style: AuthStyle) -> Self {
        Self {
            ctx,
            base_url,
            style,
            app_id: "",
            app_key: "",
            mid: "",
            tid: "",
        }
    }

    /// Set the AppId and AppKey issued by the open platform.
    pub fn with_app(mut self, app_id: &'a str, app_key: &'a str) -> Self {
        self.app_id = app_id;
        self.app_key = app_key;
        self
    }

    /// Set the merchant and terminal numbers injected as `mid` and `tid`.
    pub fn with_terminal(mut self, mid: &'a str, tid: &'a str) -> Self {
        self.mid = mid;
        self.tid = tid;
        self
    }

    /// Build the JSON body with the common fields injected at time `t`.
    pub fn build_body(&self, mut bm: BodyMap, t: DateTime) -> Result<String> {
        bm.set("msgId", unix_nanos(t))
            .set("mid", self.mid)
            .set("tid", self.tid)
            .set("requestTimestamp", format_timestamp(t));

        bm.to_json()
    }

    /// Sign `body` at time `t`; the nonce is the unix time in nanoseconds.
    pub fn authorize(&self, body: &str, t: DateTime) -> OpenBodySig {
        OpenBodySig::sign(
            self.app_id,
            self.app_key,
            &(self.style.timestamp)(t),
            &unix_nanos(t),
            body.as_bytes(),
        )
    }

    /// Build the `OPEN-FORM-PARAM` url of `path` carrying `bm`.
    pub fn signed_url(&self, path: &str, bm: BodyMap, t: DateTime) -> Result<String> {
        let body = self.build_body(bm, t)?;
        let query = self
            .authorize(&body, t)
            .to_form_params(&body)
            .encode_url_params();

        Ok(format!("{}{}?{}", self.base_url, path, query))
    }

    /// POST `bm` as JSON and decode a reply that passed the business check.
    pub async fn post<T>(&self, path: &str, bm: BodyMap) -> Result<T>
    where
        T: DeserializeOwned + UmsResponse,
    {
        let t = now();
        let body = self.build_body(bm, t)?;
        let authorization = self.authorize(&body, t).to_header(self.style.separator);
        let url = format!("{}{}", self.base_url, path);
        debug!("open platform request: POST {url}");

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(Bytes::from(body))?;
        let body = check_status(self.ctx.http_send(req).await?)?;

        let rsp: T = decode_json(&body)?;
        rsp.base().check()?;
        Ok(rsp)
    }

    /// GET `path` with `bm` in `OPEN-FORM-PARAM` query parameters.
    ///
    /// Returns the raw body of a `200 OK` reply.
    pub async fn get(&self, path: &str, bm: BodyMap) -> Result<Bytes> {
        let url = self.signed_url(path, bm, now())?;
        debug!("open platform request: GET {}{}", self.base_url, path);

        let req = http::Request::builder()
            .method(Method::GET)
            .uri(url)
            .body(Bytes::new())?;
        check_status(self.ctx.http_send(req).await?)
    }
}
