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

use log::debug;
use paysign_chinaums::{AuthStyle, OpenApi, PayResponse, RefundResponse};
use paysign_core::notify::verify_notify_sign;
use paysign_core::response::decode_json;
use paysign_core::time::{format_compact_timestamp, now};
use paysign_core::{BodyMap, Context, Error, ProvideCredential, Result, SigningCredential};

use crate::constants::*;
use crate::{Config, Credential};

/// UnionPay netpay signs with a `yyyyMMddHHmmss` timestamp and `", "` between header fields.
pub(crate) const AUTH_STYLE: AuthStyle = AuthStyle {
    timestamp: format_compact_timestamp,
    separator: AUTHORIZATION_SEPARATOR,
};

/// Client talks to UnionPay netpay on the China UMS open platform.
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
                "unionpay credential is incomplete: {credential:?}"
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
            .ok_or_else(|| Error::credential_invalid("no unionpay credential found"))?;

        Self::new(ctx, config, credential)
    }

    /// WeChat mini program unified order.
    ///
    /// Requires `merOrderId`, `totalAmount`, `subOpenId` and `notifyUrl`;
    /// `instMid` and `tradeType` are filled in.
    pub async fn mini_wechat_pay(&self, mut bm: BodyMap) -> Result<PayResponse> {
        bm.check_empty(&["merOrderId", "totalAmount", "subOpenId", "notifyUrl"])?;
        bm.set("instMid", INST_MID_MINI).set("tradeType", TRADE_TYPE_MINI);

        self.api().post(MINI_WECHAT_PAY_PATH, bm).await
    }

    /// Web (PC) payment.
    ///
    /// Returns the signed cashier URL the payer should be redirected to. No
    /// request is sent.
    pub fn web_pay(&self, mut bm: BodyMap) -> Result<String> {
        bm.check_empty(&["merOrderId", "totalAmount", "notifyUrl"])?;
        bm.set("instMid", INST_MID_WEB);

        debug!("unionpay web pay url for {}", bm.get_string("merOrderId"));
        self.api().signed_url(WEB_PAY_PATH, bm, now())
    }

    /// WeChat H5 payment.
    pub async fn h5_wechat_pay(&self, bm: BodyMap) -> Result<PayResponse> {
        self.h5_pay(H5_WECHAT_PAY_PATH, bm).await
    }

    /// Alipay H5 payment.
    pub async fn h5_ali_pay(&self, bm: BodyMap) -> Result<PayResponse> {
        self.h5_pay(H5_ALI_PAY_PATH, bm).await
    }

    /// Refund a paid order.
    ///
    /// Requires `merOrderId`, `refundAmount` and `refundOrderId`.
    pub async fn refund(&self, bm: BodyMap) -> Result<RefundResponse> {
        bm.check_empty(&["merOrderId", "refundAmount", "refundOrderId"])?;

        self.api().post(REFUND_PATH, bm).await
    }

    /// Verify the `sign` of an asynchronous notification.
    ///
    /// MD5 is used unless the notification carries `signType=SHA256`.
    pub fn verify_notify(&self, bm: &BodyMap) -> Result<()> {
        if self.credential.secret_key.is_empty() {
            return Err(Error::credential_invalid(
                "secret_key is required to verify notifications",
            ));
        }

        verify_notify_sign(bm, &self.credential.secret_key)
    }

    pub(crate) fn api(&self) -> OpenApi<'_> {
        OpenApi::new(&self.ctx, self.config.base_url(), AUTH_STYLE)
            .with_app(&self.credential.app_id, &self.credential.app_key)
            .with_terminal(&self.credential.merchant_no, &self.credential.terminal_no)
    }

    async fn h5_pay(&self, path: &str, mut bm: BodyMap) -> Result<PayResponse> {
        bm.check_empty(&["merOrderId", "totalAmount", "notifyUrl"])?;
        bm.set("instMid", INST_MID_H5);

        let body = self.api().get(path, bm).await?;
        let rsp: PayResponse = decode_json(&body)?;
        rsp.base.check()?;
        Ok(rsp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use http::header::AUTHORIZATION;
    use http::{Method, StatusCode};
    use paysign_core::notify::{notify_sign, NotifySignType};
    use paysign_core::test_utils::MockHttpSend;
    use paysign_core::time::DateTime;
    use paysign_core::{ErrorKind, OpenBodySig};
    use pretty_assertions::assert_eq;

    const APP_ID: &str = "10037e6f6a4e6da4016a62a6e1b1000d";
    const APP_KEY: &str = "1c4e3b16066244ae9b236a09e5b312e8";
    const SECRET_KEY: &str = "fcAmtnx7MwismjWNhNKdHC44mNXtnEQeJkRrhKJwyrW2ysRR";

    fn credential() -> Credential {
        Credential {
            app_id: APP_ID.to_string(),
            app_key: APP_KEY.to_string(),
            merchant_no: "898201612345678".to_string(),
            terminal_no: "88880001".to_string(),
            secret_key: SECRET_KEY.to_string(),
        }
    }

    fn client_with(status: StatusCode, body: &str) -> (Client, MockHttpSend) {
        let http = MockHttpSend::new().with_reply(status, body.to_string());
        let ctx = Context::new().with_http_send(http.clone());
        let client = Client::new(ctx, Config::new(), credential()).unwrap();
        (client, http)
    }

    fn test_time() -> DateTime {
        chrono::Utc
            .with_ymd_and_hms(2024, 4, 30, 22, 5, 9)
            .single()
            .unwrap()
    }

    fn order_params() -> BodyMap {
        BodyMap::new()
            .with("merOrderId", "101720240501060509123456")
            .with("totalAmount", 1)
            .with("notifyUrl", "https://merchant.test/notify")
    }

    fn decode_query(query: &str) -> BodyMap {
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn test_authorize_uses_compact_timestamp() {
        let (client, _) = client_with(StatusCode::OK, "");
        let api = client.api();
        let body = api.build_body(order_params(), test_time()).unwrap();

        let sig = api.authorize(&body, test_time());
        assert_eq!(sig.timestamp, "20240501060509");
        assert_eq!(sig.nonce, "1714514709000000000");
        assert!(sig
            .to_header(AUTHORIZATION_SEPARATOR)
            .contains(r#"AppId="10037e6f6a4e6da4016a62a6e1b1000d", Timestamp="20240501060509""#));
        sig.verify(APP_KEY, body.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_mini_wechat_pay_injects_business_type() {
        let (client, http) = client_with(
            StatusCode::OK,
            r#"{"errCode":"SUCCESS","totalAmount":"1","miniPayRequest":{"paySign":"abc"}}"#,
        );

        let rsp = client
            .mini_wechat_pay(order_params().with("subOpenId", "oUpF8uMuAJO_M2pxb1Q9zNjWeS6o"))
            .await
            .unwrap();
        assert_eq!(rsp.mini_pay_request["paySign"], "abc");

        let requests = http.requests();
        let req = &requests[0];
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(
            req.uri().to_string(),
            format!("{SANDBOX_BASE_URL}{MINI_WECHAT_PAY_PATH}")
        );

        let body: BodyMap = serde_json::from_slice(req.body()).unwrap();
        assert_eq!(body.get_string("instMid"), INST_MID_MINI);
        assert_eq!(body.get_string("tradeType"), TRADE_TYPE_MINI);
        assert_eq!(body.get_string("mid"), "898201612345678");

        let authorization = req.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(authorization.contains(r#"", Timestamp=""#));
        let sig = OpenBodySig::parse(authorization).unwrap();
        sig.verify(APP_KEY, req.body()).unwrap();
    }

    #[tokio::test]
    async fn test_mini_wechat_pay_requires_open_id() {
        let (client, http) = client_with(StatusCode::OK, "");

        let err = client.mini_wechat_pay(order_params()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(err.to_string().contains("subOpenId"));
        assert!(http.requests().is_empty());
    }

    #[test]
    fn test_web_pay_builds_signed_url() {
        let (client, http) = client_with(StatusCode::OK, "");

        let url = client.web_pay(order_params()).unwrap();
        assert!(http.requests().is_empty());

        let (base, query) = url.split_once('?').unwrap();
        assert_eq!(base, format!("{SANDBOX_BASE_URL}{WEB_PAY_PATH}"));

        let query = decode_query(query);
        assert_eq!(query.get_string("authorization"), "OPEN-FORM-PARAM");
        let content = query.get_string("content");
        assert!(content.contains(r#""instMid":"YUEDANDEFAULT""#));

        let sig = OpenBodySig {
            app_id: query.get_string("appId"),
            timestamp: query.get_string("timestamp"),
            nonce: query.get_string("nonce"),
            signature: query.get_string("signature"),
        };
        assert_eq!(sig.timestamp.len(), 14);
        sig.verify(APP_KEY, content.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_h5_pay_decodes_reply() {
        let (client, http) = client_with(
            StatusCode::OK,
            r#"{"errCode":"0000","merOrderId":"101720240501060509123456","status":"NEW_ORDER"}"#,
        );

        let rsp = client.h5_wechat_pay(order_params()).await.unwrap();
        assert_eq!(rsp.status, "NEW_ORDER");

        let requests = http.requests();
        let uri = requests[0].uri();
        assert_eq!(requests[0].method(), &Method::GET);
        assert_eq!(uri.path(), H5_WECHAT_PAY_PATH);
        let query = decode_query(uri.query().unwrap());
        assert!(query
            .get_string("content")
            .contains(r#""instMid":"H5DEFAULT""#));
    }

    #[tokio::test]
    async fn test_h5_pay_business_error() {
        let (client, _) = client_with(
            StatusCode::OK,
            r#"{"errCode":"NO_SUCH_MERCHANT","errMsg":"merchant not found"}"#,
        );

        let err = client.h5_ali_pay(order_params()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Business);
        assert_eq!(err.business().unwrap().msg, "merchant not found");
    }

    #[tokio::test]
    async fn test_refund() {
        let (client, http) = client_with(
            StatusCode::OK,
            r#"{"errCode":"SUCCESS","refundStatus":"SUCCESS","refundAmount":1}"#,
        );

        let err = client
            .refund(BodyMap::new().with("refundAmount", 1).with("refundOrderId", "R1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        let rsp = client
            .refund(
                BodyMap::new()
                    .with("merOrderId", "101720240501060509123456")
                    .with("refundAmount", 1)
                    .with("refundOrderId", "R1"),
            )
            .await
            .unwrap();
        assert_eq!(rsp.refund_amount, "1");
        assert_eq!(http.requests().len(), 1);
    }

    #[test]
    fn test_verify_notify_md5_and_sha256() {
        let (client, _) = client_with(StatusCode::OK, "");
        let params = BodyMap::new()
            .with("merOrderId", "101720240501060509123456")
            .with("status", "TRADE_SUCCESS")
            .with("totalAmount", "1");

        let md5 = notify_sign(&params, SECRET_KEY, NotifySignType::Md5);
        client
            .verify_notify(&params.clone().with("sign", md5.to_lowercase()))
            .unwrap();

        let params = params.with("signType", "SHA256");
        let sha256 = notify_sign(&params, SECRET_KEY, NotifySignType::Sha256);
        client
            .verify_notify(&params.clone().with("sign", sha256.as_str()))
            .unwrap();

        let err = client
            .verify_notify(&params.with("sign", md5.as_str()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureInvalid);
    }

    #[test]
    fn test_verify_notify_requires_secret_key() {
        let mut cred = credential();
        cred.secret_key.clear();
        let client = Client::new(Context::new(), Config::new(), cred).unwrap();

        let err = client
            .verify_notify(&BodyMap::new().with("sign", "x"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
