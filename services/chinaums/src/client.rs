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

use paysign_core::notify::verify_notify_sign;
use paysign_core::time::{format_compact_millis, now, DateTime};
use paysign_core::utils::random_digits;
use paysign_core::{BodyMap, Context, Error, ProvideCredential, Result, SigningCredential};

use crate::constants::*;
use crate::model::{PayResponse, RefundResponse};
use crate::open_api::{AuthStyle, OpenApi};
use crate::{Config, Credential};

/// Client talks to the China UMS netpay gateway.
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    config: Config,
    credential: Credential,
}

impl Client {
    /// Create a new client.
    pub fn new(ctx: Context, config: Config, credential: Credential) -> Result<Self> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(format!(
                "chinaums credential is incomplete: {credential:?}"
            )));
        }

        Ok(Self {
            ctx,
            config,
            credential,
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
            .ok_or_else(|| Error::credential_invalid("no chinaums credential found"))?;

        Self::new(ctx, config, credential)
    }

    /// WeChat mini program unified order.
    ///
    /// Requires `merOrderId`, `totalAmount`, `tradeType`, `subOpenId` and `notifyUrl`.
    pub async fn mini_wechat_pay(&self, bm: BodyMap) -> Result<PayResponse> {
        bm.check_empty(&[
            "merOrderId",
            "totalAmount",
            "tradeType",
            "subOpenId",
            "notifyUrl",
        ])?;

        self.api().post(MINI_WECHAT_PAY_PATH, bm).await
    }

    /// WeChat H5 payment.
    ///
    /// Returns the cashier page served by the gateway.
    pub async fn h5_wechat_pay(&self, bm: BodyMap) -> Result<String> {
        self.h5_pay(H5_WECHAT_PAY_PATH, bm).await
    }

    /// Alipay H5 payment.
    ///
    /// Returns the cashier page served by the gateway.
    pub async fn h5_ali_pay(&self, bm: BodyMap) -> Result<String> {
        self.h5_pay(H5_ALI_PAY_PATH, bm).await
    }

    /// Refund a paid order.
    ///
    /// Requires `refundAmount`, `refundOrderId` and one of `merOrderId` or `targetOrderId`.
    pub async fn refund(&self, bm: BodyMap) -> Result<RefundResponse> {
        bm.check_empty(&["refundAmount", "refundOrderId"])?;
        bm.check_any(&["merOrderId", "targetOrderId"])?;

        self.api().post(REFUND_PATH, bm).await
    }

    /// Verify the `sign` of an asynchronous notification with the secret key.
    pub fn verify_notify(&self, bm: &BodyMap) -> Result<()> {
        if self.credential.secret_key.is_empty() {
            return Err(Error::credential_invalid(
                "secret_key is required to verify notifications",
            ));
        }

        verify_notify_sign(bm, &self.credential.secret_key)
    }

    /// Generate a merchant order id.
    ///
    /// The id starts with `msg_src_id`, followed by the UTC+8 time in
    /// milliseconds and random digits, 27 characters at most.
    pub fn new_order_id(&self) -> Result<String> {
        new_order_id(&self.credential.msg_src_id, now())
    }

    pub(crate) fn api(&self) -> OpenApi<'_> {
        OpenApi::new(&self.ctx, self.config.base_url(), AuthStyle::CHINAUMS)
            .with_app(&self.credential.app_id, &self.credential.app_key)
            .with_terminal(&self.credential.merchant_no, &self.credential.terminal_no)
    }

    async fn h5_pay(&self, path: &str, bm: BodyMap) -> Result<String> {
        bm.check_empty(&["merOrderId", "instMid", "totalAmount", "notifyUrl"])?;

        let body = self.api().get(path, bm).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

fn new_order_id(msg_src_id: &str, t: DateTime) -> Result<String> {
    if msg_src_id.is_empty() {
        return Err(Error::credential_invalid(
            "msg_src_id is required to generate order ids",
        ));
    }

    let mut id = format!("{msg_src_id}{}", format_compact_millis(t));
    if id.len() > ORDER_ID_MAX_LEN {
        return Err(Error::credential_invalid(format!(
            "msg_src_id {msg_src_id} is too long to generate order ids"
        )));
    }
    id.push_str(&random_digits(ORDER_ID_MAX_LEN - id.len()));
    Ok(id)
}
