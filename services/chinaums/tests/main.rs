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
use paysign_chinaums::*;
use paysign_core::test_utils::MockHttpSend;
use paysign_core::{BodyMap, Context, ErrorKind, OpenBodySig, OsEnv, StaticEnv};
use paysign_http_send_reqwest::ReqwestHttpSend;

const APP_KEY: &str = "775481e2556e4564985f5439a5e6a277";

async fn init(gateway: &MockHttpSend) -> Result<Client> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_http_send(gateway.clone())
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter(
                [
                    (CHINAUMS_APP_ID, "f0ec96ad2c3848b5b810e7aadf369e2f"),
                    (CHINAUMS_APP_KEY, APP_KEY),
                    (CHINAUMS_MERCHANT_NO, "898340149000005"),
                    (CHINAUMS_TERMINAL_NO, "88880001"),
                    (CHINAUMS_MSG_SRC_ID, "3194"),
                    (CHINAUMS_IS_PROD, "on"),
                ]
                .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
        });
    let config = Config::new().from_env(&ctx)?;

    Ok(Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?)
}

#[tokio::test]
async fn test_refund_against_production_gateway() -> Result<()> {
    let gateway = MockHttpSend::new().with_reply(
        StatusCode::OK,
        r#"{"errCode":"SUCCESS","refundStatus":"SUCCESS","refundAmount":1,"refundOrderId":"R1"}"#,
    );
    let client = init(&gateway).await?;

    let mer_order_id = client.new_order_id()?;
    let rsp = client
        .refund(
            BodyMap::new()
                .with("merOrderId", mer_order_id.as_str())
                .with("refundAmount", 1)
                .with("refundOrderId", "R1"),
        )
        .await?;
    assert_eq!(rsp.refund_status, "SUCCESS");
    assert_eq!(rsp.refund_amount, "1");

    let requests = gateway.requests();
    let req = &requests[0];
    assert_eq!(
        req.uri().to_string(),
        "https://api-mop.chinaums.com/v1/netpay/refund"
    );

    let body: serde_json::Value = serde_json::from_slice(req.body())?;
    assert_eq!(body["merOrderId"], mer_order_id.as_str());
    assert_eq!(body["mid"], "898340149000005");
    assert_eq!(body["tid"], "88880001");

    let sig = OpenBodySig::parse(req.headers()[AUTHORIZATION].to_str()?)?;
    sig.verify(APP_KEY, req.body())?;
    Ok(())
}

#[tokio::test]
async fn test_non_json_reply_is_decode_error() -> Result<()> {
    let gateway = MockHttpSend::new().with_reply(StatusCode::OK, "<html>maintenance</html>");
    let client = init(&gateway).await?;

    let err = client
        .refund(
            BodyMap::new()
                .with("merOrderId", "1")
                .with("refundAmount", 1)
                .with("refundOrderId", "R1"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.body(), Some("<html>maintenance</html>"));
    Ok(())
}

#[tokio::test]
async fn test_mini_wechat_pay_against_live_gateway() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAYSIGN_CHINAUMS_TEST").unwrap_or_default() != "on" {
        warn!("PAYSIGN_CHINAUMS_TEST is not set, skipped");
        return Ok(());
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx)?;
    let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;

    let sub_open_id =
        env::var("PAYSIGN_CHINAUMS_SUB_OPEN_ID").expect("env PAYSIGN_CHINAUMS_SUB_OPEN_ID must set");
    let rsp = client
        .mini_wechat_pay(
            BodyMap::new()
                .with("merOrderId", client.new_order_id()?)
                .with("totalAmount", 1)
                .with("tradeType", "MINI")
                .with("subOpenId", sub_open_id)
                .with("notifyUrl", "https://merchant.example/notify"),
        )
        .await?;
    assert!(rsp.base.is_success());
    Ok(())
}
