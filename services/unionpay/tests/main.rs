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

use std::collections::HashMap;
use std::env;

use anyhow::Result;
use http::header::AUTHORIZATION;
use http::StatusCode;
use log::warn;
use paysign_core::notify::{notify_sign, NotifySignType};
use paysign_core::test_utils::MockHttpSend;
use paysign_core::{BodyMap, Context, ErrorKind, OpenBodySig, OsEnv, StaticEnv};
use paysign_http_send_reqwest::ReqwestHttpSend;
use paysign_unionpay::*;

const APP_KEY: &str = "1c4e3b16066244ae9b236a09e5b312e8";
const SECRET_KEY: &str = "fcAmtnx7MwismjWNhNKdHC44mNXtnEQeJkRrhKJwyrW2ysRR";

async fn init(gateway: &MockHttpSend) -> Result<Client> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_http_send(gateway.clone())
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter(
                [
                    (UNIONPAY_APP_ID, "10037e6f6a4e6da4016a62a6e1b1000d"),
                    (UNIONPAY_APP_KEY, APP_KEY),
                    (UNIONPAY_MERCHANT_NO, "898201612345678"),
                    (UNIONPAY_TERMINAL_NO, "88880001"),
                    (UNIONPAY_SECRET_KEY, SECRET_KEY),
                    (UNIONPAY_ENDPOINT, "https://unionpay.test/"),
                ]
                .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
        });
    let config = Config::new().from_env(&ctx)?;

    Ok(Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?)
}

#[tokio::test]
async fn test_pay_notify_refund_flow() -> Result<()> {
    let gateway = MockHttpSend::new().with_reply(
        StatusCode::OK,
        r#"{"errCode":"SUCCESS","merOrderId":"101720240501060509123456","refundStatus":"SUCCESS","refundAmount":"1","totalAmount":1}"#,
    );
    let client = init(&gateway).await?;

    let rsp = client
        .mini_wechat_pay(
            BodyMap::new()
                .with("merOrderId", "101720240501060509123456")
                .with("totalAmount", 1)
                .with("subOpenId", "oUpF8uMuAJO_M2pxb1Q9zNjWeS6o")
                .with("notifyUrl", "https://merchant.test/notify"),
        )
        .await?;
    assert_eq!(rsp.total_amount, "1");

    // The gateway notifies the merchant once the order is paid.
    let notification = BodyMap::new()
        .with("merOrderId", "101720240501060509123456")
        .with("status", "TRADE_SUCCESS")
        .with("totalAmount", "1");
    let sign = notify_sign(&notification, SECRET_KEY, NotifySignType::Md5);
    client.verify_notify(&notification.with("sign", sign))?;

    let rsp = client
        .refund(
            BodyMap::new()
                .with("merOrderId", "101720240501060509123456")
                .with("refundAmount", 1)
                .with("refundOrderId", "R1"),
        )
        .await?;
    assert_eq!(rsp.refund_status, "SUCCESS");

    let requests = gateway.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].uri().to_string(),
        "https://unionpay.test/v1/netpay/wx/unified-order"
    );
    assert_eq!(
        requests[1].uri().to_string(),
        "https://unionpay.test/v1/netpay/refund"
    );
    for req in requests.iter() {
        let sig = OpenBodySig::parse(req.headers()[AUTHORIZATION].to_str()?)?;
        sig.verify(APP_KEY, req.body())?;
    }
    Ok(())
}

#[tokio::test]
async fn test_gateway_failure_is_transport_error() -> Result<()> {
    let gateway = MockHttpSend::new().with_reply(StatusCode::SERVICE_UNAVAILABLE, "busy");
    let client = init(&gateway).await?;

    let err = client
        .h5_ali_pay(
            BodyMap::new()
                .with("merOrderId", "101720240501060509123456")
                .with("totalAmount", 1)
                .with("notifyUrl", "https://merchant.test/notify"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    Ok(())
}

#[tokio::test]
async fn test_missing_credential() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: HashMap::new(),
    });

    let err = Client::from_provider(ctx, Config::new(), EnvCredentialProvider::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    Ok(())
}

#[tokio::test]
async fn test_h5_pay_against_live_gateway() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAYSIGN_UNIONPAY_TEST").unwrap_or_default() != "on" {
        warn!("PAYSIGN_UNIONPAY_TEST is not set, skipped");
        return Ok(());
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx)?;
    let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;

    let rsp = client
        .h5_wechat_pay(
            BodyMap::new()
                .with(
                    "merOrderId",
                    format!("1017{}", chrono::Utc::now().format("%Y%m%d%H%M%S%3f")),
                )
                .with("totalAmount", 1)
                .with("notifyUrl", "https://merchant.example/notify"),
        )
        .await?;
    assert!(rsp.base.is_success());
    Ok(())
}
