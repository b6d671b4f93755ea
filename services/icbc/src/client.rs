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

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use log::{debug, warn};
use paysign_core::response::{check_status, decode_json};
use paysign_core::time::{format_timestamp, now, unix_nanos, DateTime};
use paysign_core::{
    BodyMap, Context, Error, ProvideCredential, Result, RsaSigner, RsaVerifier, SignType,
    SigningCredential,
};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::constants::*;
use crate::model::{
    IcbcResponse, NotifyRequest, NotifyResponse, PayResponse, QueryResponse, RefundResponse,
    ResponseBase, ResponseEnvelope,
};
use crate::{Config, Credential};

/// Client talks to the ICBC aggregate payment gateway.
///
/// Requests are signed with the merchant private key, replies and
/// notifications are verified with the ICBC gateway public key.
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    config: Config,
    credential: Credential,
    signer: RsaSigner,
    verifier: RsaVerifier,
}

impl Client {
    /// Create a new client, parsing both RSA keys up front.
    pub fn new(ctx: Context, config: Config, credential: Credential) -> Result<Self> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(format!(
                "icbc credential is incomplete: {credential:?}"
            )));
        }

        let signer = RsaSigner::from_pem(&credential.private_key)?;
        let verifier = RsaVerifier::from_pem(&credential.icbc_public_key)?;

        Ok(Self {
            ctx,
            config,
            credential,
            signer,
            verifier,
        })
    }

    /// Create a new client with the credential loaded by `provider`.
    pub async fn from_provider(
        ctx: Context,
        config: Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let credential = provider
            .provide_credential(&ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no icbc credential found"))?;

        Self::new(ctx, config, credential)
    }

    /// Aggregate payment.
    ///
    /// Requires `out_trade_no`, `pay_mode` and `access_type`.
    pub async fn pay(&self, bm: BodyMap) -> Result<PayResponse> {
        bm.check_empty(&["out_trade_no", "pay_mode", "access_type"])?;

        self.do_post(PAY_PATH, bm).await
    }

    /// Query an aggregate payment order.
    ///
    /// Requires one of `out_trade_no` or `order_id`.
    pub async fn query(&self, bm: BodyMap) -> Result<QueryResponse> {
        bm.check_any(&["out_trade_no", "order_id"])?;

        self.do_post(QUERY_PATH, bm).await
    }

    /// Refund a paid order.
    ///
    /// Requires `outtrx_serial_no`, `ret_total_amt` and one of `order_id` or `out_trade_no`.
    pub async fn refund(&self, bm: BodyMap) -> Result<RefundResponse> {
        bm.check_empty(&["outtrx_serial_no", "ret_total_amt"])?;
        bm.check_any(&["order_id", "out_trade_no"])?;

        self.do_post(REFUND_PATH, bm).await
    }

    /// Verify an asynchronous notification received on `path`.
    ///
    /// ICBC signs notifications with SHA1 (`RSA`) whatever `sign_type` they carry.
    pub fn verify_notify(&self, path: &str, mut bm: BodyMap) -> Result<()> {
        let sign = bm
            .remove("sign")
            .and_then(|v| v.as_str().map(str::to_string))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::signature_invalid("notification carries no sign"))?;

        let content = format!("{path}?{}", bm.encode_sign_params());
        debug!("icbc notify string to verify: {content}");
        self.verifier
            .verify(SignType::Rsa, content.as_bytes(), &sign)
            .inspect_err(|e| warn!("icbc notify signature rejected: {e}"))
    }

    /// Decode the `biz_content` of a notification.
    pub fn parse_notify(biz_content: &str) -> Result<NotifyRequest> {
        decode_json(biz_content.as_bytes())
    }

    /// Build the signed reply to a notification.
    pub fn notify_response(&self, return_code: i64, return_msg: &str) -> Result<NotifyResponse> {
        let biz = BodyMap::new()
            .with("return_code", return_code)
            .with("return_msg", return_msg)
            .with("msg_id", unix_nanos(now()))
            .to_json()?;

        let params = BodyMap::new()
            .with("response_biz_content", biz.as_str())
            .with("sign_type", SignType::Rsa2.as_str());
        let sign = self
            .signer
            .sign(SignType::Rsa2, &params.encode_sign_params())?;

        Ok(NotifyResponse {
            response_biz_content: RawValue::from_string(biz)?,
            sign_type: SignType::Rsa2.to_string(),
            sign,
        })
    }

    /// Build the signed form body for `path` at time `t`.
    pub(crate) fn build_form(&self, path: &str, mut bm: BodyMap, t: DateTime) -> Result<String> {
        bm.set("mer_id", self.credential.mer_id.as_str())
            .set("mer_prtcl_no", self.credential.mer_prtcl_no.as_str())
            .set("icbc_appid", self.credential.app_id.as_str())
            .set("mer_acct", self.credential.mer_acct.as_str());

        let sign_type = self.config.sign_type();
        let mut params = BodyMap::new();
        params
            .set("app_id", self.credential.app_id.as_str())
            .set("msg_id", unix_nanos(t))
            .set("format", FORMAT_JSON)
            .set("charset", CHARSET_UTF8)
            .set("sign_type", sign_type.as_str())
            .set("timestamp", format_timestamp(t))
            .set("biz_content", bm.to_json()?);

        let string_to_sign = format!("{path}?{}", params.encode_sign_params());
        let sign = self.signer.sign(sign_type, &string_to_sign)?;
        params.set("sign", sign);

        Ok(params.encode_url_params())
    }

    async fn do_post<T>(&self, path: &str, bm: BodyMap) -> Result<T>
    where
        T: DeserializeOwned + IcbcResponse,
    {
        let form = self.build_form(path, bm, now())?;
        let url = format!("{}{}", self.config.base_url(), path);
        debug!("icbc request: POST {url}");

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .body(Bytes::from(form))?;
        let body = check_status(self.ctx.http_send(req).await?)?;

        let envelope: ResponseEnvelope = decode_json(&body)?;
        let biz_content = envelope.response_biz_content.get();
        let rsp: T = decode_json(biz_content.as_bytes())?;
        check_business(rsp.base())?;

        self.verifier
            .verify(SignType::Rsa, biz_content.as_bytes(), &envelope.sign)
            .inspect_err(|e| warn!("icbc response signature rejected: {e}"))?;
        Ok(rsp)
    }
}

fn check_business(base: &ResponseBase) -> Result<()> {
    if base.return_code == 0 {
        return Ok(());
    }

    warn!(
        "icbc business error: return_code={}, return_msg={}",
        base.return_code, base.return_msg
    );
    Err(Error::business_error(
        base.return_code.to_string(),
        base.return_msg.as_str(),
    ))
}
