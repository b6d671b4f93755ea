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
use http::StatusCode;
use log::warn;
use paysign_core::test_utils::MockHttpSend;
use paysign_core::{BodyMap, Context, ErrorKind, OsEnv, RsaSigner, SignType, StaticEnv};
use paysign_file_read_tokio::TokioFileRead;
use paysign_http_send_reqwest::ReqwestHttpSend;
use paysign_icbc::*;

const TESTDATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/rsa");

fn signed_reply(biz_content: &str) -> String {
    let key = std::fs::read_to_string(format!("{TESTDATA}/gateway_private_key.pem"))
        .expect("fixture must exist");
    let sign = RsaSigner::from_pem(&key)
        .and_then(|s| s.sign(SignType::Rsa, biz_content))
        .expect("sign must succeed");
    format!(r#"{{"response_biz_content":{biz_content},"sign":"{sign}"}}"#)
}

fn init(gateway: &MockHttpSend) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(gateway.clone())
        .with_env(StaticEnv {
            home_dir: Some(TESTDATA.into()),
            envs: HashMap::from_iter(
                [
                    (ICBC_MER_ID, "020001020098"),
                    (ICBC_APP_ID, "10000000000004095503"),
                    (ICBC_MER_PRTCL_NO, "0200010200980201"),
                    (ICBC_MER_ACCT, "0200012345678901234"),
                    (ICBC_PRIVATE_KEY_FILE, "~/merchant_private_key_pkcs1.pem"),
                    (ICBC_PUBLIC_KEY_FILE, "~/gateway_public_key.pem"),
                    (ICBC_ENDPOINT, "https://icbc.test"),
                ]
                .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
        })
}

#[tokio::test]
async fn test_pay_then_refund_with_env_credentials() -> Result<()> {
    let gateway = MockHttpSend::new();
    let ctx = init(&gateway);
    let config = Config::new().from_env(&ctx)?;
    let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;

    gateway.push_reply(
        StatusCode::OK,
        signed_reply(r#"{"return_code":0,"return_msg":"success","msg_id":"1","order_id":"O1","out_trade_no":"T1","total_amt":"100"}"#),
    );
    gateway.push_reply(
        StatusCode::OK,
        signed_reply(r#"{"return_code":0,"return_msg":"success","msg_id":"2","intrx_serial_no":"R9"}"#),
    );

    let pay = client
        .pay(
            BodyMap::new()
                .with("out_trade_no", "T1")
                .with("pay_mode", "9")
                .with("access_type", "7")
                .with("order_amt", "100"),
        )
        .await?;
    assert_eq!(pay.order_id, "O1");

    let refund = client
        .refund(
            BodyMap::new()
                .with("outtrx_serial_no", "R1")
                .with("ret_total_amt", "100")
                .with("order_id", pay.order_id.as_str()),
        )
        .await?;
    assert_eq!(refund.intrx_serial_no, "R9");

    let requests = gateway.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[1].uri().to_string(),
        "https://icbc.test/api/cardbusiness/aggregatepay/b2c/online/merrefund/V1"
    );
    let form: HashMap<String, String> = form_urlencoded::parse(requests[1].body())
        .into_owned()
        .collect();
    assert!(form["biz_content"].contains(r#""order_id":"O1""#));
    assert!(!form["sign"].is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_credential() {
    let gateway = MockHttpSend::new();
    let ctx = init(&gateway).with_env(StaticEnv::default());

    let err = Client::from_provider(ctx, Config::new(), EnvCredentialProvider::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_query_against_live_gateway() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAYSIGN_ICBC_TEST").unwrap_or_default() != "on" {
        warn!("PAYSIGN_ICBC_TEST is not set, skipped");
        return Ok(());
    }

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx)?;
    let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;

    let out_trade_no =
        env::var("PAYSIGN_ICBC_OUT_TRADE_NO").expect("env PAYSIGN_ICBC_OUT_TRADE_NO must set");
    match client
        .query(BodyMap::new().with("out_trade_no", out_trade_no))
        .await
    {
        Ok(rsp) => assert_eq!(rsp.base.return_code, 0),
        // An unknown order still proves the request was accepted and signed.
        Err(err) => assert_eq!(err.kind(), ErrorKind::Business, "{err:?}"),
    }
    Ok(())
}
