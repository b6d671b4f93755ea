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

//! RSA PKCS#1 v1.5 signing and verification.

use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use log::debug;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::Sha256;

use crate::hash::{base64_decode, base64_encode};
use crate::{Error, Result};

/// Algorithm selector for asymmetric signatures.
///
/// - `RSA`: PKCS#1 v1.5 with SHA1
/// - `RSA2`: PKCS#1 v1.5 with SHA256
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignType {
    /// RSA with SHA1.
    Rsa,
    /// RSA with SHA256.
    Rsa2,
}

impl SignType {
    /// The wire value carried in the `sign_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignType::Rsa => "RSA",
            SignType::Rsa2 => "RSA2",
        }
    }
}

impl FromStr for SignType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RSA" => Ok(SignType::Rsa),
            "RSA2" => Ok(SignType::Rsa2),
            v => Err(Error::request_invalid(format!("unsupported sign_type: {v}"))),
        }
    }
}

impl std::fmt::Display for SignType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RsaSigner signs canonical strings with the merchant private key.
#[derive(Clone)]
pub struct RsaSigner {
    public_key: RsaPublicKey,
    sha1: SigningKey<Sha1>,
    sha256: SigningKey<Sha256>,
}

impl Debug for RsaSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl RsaSigner {
    /// Load the private key.
    ///
    /// Accepts PEM (`PRIVATE KEY` or `RSA PRIVATE KEY`) as well as the bare
    /// base64 body that bank consoles usually hand out.
    pub fn from_pem(content: &str) -> Result<Self> {
        let key = decode_private_key(content)?;
        Ok(Self::new(key))
    }

    /// Create a signer from an already decoded key.
    pub fn new(key: RsaPrivateKey) -> Self {
        Self {
            public_key: key.to_public_key(),
            sha1: SigningKey::<Sha1>::new(key.clone()),
            sha256: SigningKey::<Sha256>::new(key),
        }
    }

    /// Sign `content` and return the base64 encoded signature.
    pub fn sign(&self, sign_type: SignType, content: &str) -> Result<String> {
        debug!("rsa string to sign ({sign_type}): {content}");

        let signature = match sign_type {
            SignType::Rsa => self.sha1.try_sign(content.as_bytes()),
            SignType::Rsa2 => self.sha256.try_sign(content.as_bytes()),
        }
        .map_err(|e| Error::unexpected("failed to sign with rsa private key").with_source(e))?;

        Ok(base64_encode(&signature.to_bytes()))
    }

    /// Build a verifier for the public half of this key.
    pub fn verifier(&self) -> RsaVerifier {
        RsaVerifier::new(self.public_key.clone())
    }
}

/// RsaVerifier checks signatures produced by the counterparty.
#[derive(Debug, Clone)]
pub struct RsaVerifier {
    sha1: VerifyingKey<Sha1>,
    sha256: VerifyingKey<Sha256>,
}

impl RsaVerifier {
    /// Load the public key.
    ///
    /// Accepts PEM (`PUBLIC KEY` or `RSA PUBLIC KEY`) as well as the bare
    /// base64 body.
    pub fn from_pem(content: &str) -> Result<Self> {
        let key = decode_public_key(content)?;
        Ok(Self::new(key))
    }

    /// Create a verifier from an already decoded key.
    pub fn new(key: RsaPublicKey) -> Self {
        Self {
            sha1: VerifyingKey::<Sha1>::new(key.clone()),
            sha256: VerifyingKey::<Sha256>::new(key),
        }
    }

    /// Verify the base64 encoded `signature` over `content`.
    ///
    /// Any failure, including a signature that is not valid base64, is
    /// reported as [`crate::ErrorKind::SignatureInvalid`].
    pub fn verify(&self, sign_type: SignType, content: &[u8], signature: &str) -> Result<()> {
        let raw = base64_decode(signature.trim()).map_err(|e| {
            Error::signature_invalid("signature is not valid base64").with_source(e)
        })?;
        let signature = Signature::try_from(raw.as_slice()).map_err(|e| {
            Error::signature_invalid("signature has invalid length").with_source(e)
        })?;

        match sign_type {
            SignType::Rsa => self.sha1.verify(content, &signature),
            SignType::Rsa2 => self.sha256.verify(content, &signature),
        }
        .map_err(|e| {
            Error::signature_invalid(format!("{sign_type} signature mismatch")).with_source(e)
        })
    }
}

fn is_pem(content: &str) -> bool {
    content.starts_with("-----BEGIN")
}

fn decode_der(content: &str) -> Result<Vec<u8>> {
    let body: String = content.split_whitespace().collect();
    base64_decode(&body)
        .map_err(|e| Error::credential_invalid("rsa key is neither PEM nor base64").with_source(e))
}

fn decode_private_key(content: &str) -> Result<RsaPrivateKey> {
    let content = content.trim();
    let key = if is_pem(content) {
        RsaPrivateKey::from_pkcs8_pem(content)
            .ok()
            .or_else(|| RsaPrivateKey::from_pkcs1_pem(content).ok())
    } else {
        let der = decode_der(content)?;
        RsaPrivateKey::from_pkcs8_der(&der)
            .ok()
            .or_else(|| RsaPrivateKey::from_pkcs1_der(&der).ok())
    };

    key.ok_or_else(|| Error::credential_invalid("private key is neither PKCS#8 nor PKCS#1"))
}

fn decode_public_key(content: &str) -> Result<RsaPublicKey> {
    let content = content.trim();
    let key = if is_pem(content) {
        RsaPublicKey::from_public_key_pem(content)
            .ok()
            .or_else(|| RsaPublicKey::from_pkcs1_pem(content).ok())
    } else {
        let der = decode_der(content)?;
        RsaPublicKey::from_public_key_der(&der)
            .ok()
            .or_else(|| RsaPublicKey::from_pkcs1_der(&der).ok())
    };

    key.ok_or_else(|| Error::credential_invalid("public key is neither SPKI nor PKCS#1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    const MERCHANT_PRIVATE_KEY: &str =
        include_str!("../../testdata/rsa/merchant_private_key.pem");
    const MERCHANT_PRIVATE_KEY_PKCS1: &str =
        include_str!("../../testdata/rsa/merchant_private_key_pkcs1.pem");
    const MERCHANT_PUBLIC_KEY: &str = include_str!("../../testdata/rsa/merchant_public_key.pem");
    const GATEWAY_PUBLIC_KEY: &str = include_str!("../../testdata/rsa/gateway_public_key.pem");

    // Computed with `printf 'a=1&b=2' | openssl dgst -sha256 -sign merchant_private_key.pem | base64`
    const EXPECTED_RSA2: &str = "YKMp1axn5FTG8BrFkIts/nqK1VOfYz4eUu0iwucN5h4sDftCXC/H51THFm0dXgl4HTKYzP2PT1QqA1mdADzNXFp9c+8jHH3W2KlwBxlJCtkj/WJ9UBFsMRuNJ6d2krLpHxA2NBv6WqFMNkYMmwCNMlfYzXABJqW1f8IffVyArL/KiOmvs80twyKYHZ068VtFDnLRD8MFmuvA4nbjIaJ/K4jSmP72yFRQiw+6xRiGoGe7dYoTgOl4zxoWOLSR8ZprZpNRJnOz+aOwojbEg7mfwxAejZhJLTN39pCMQPsN21Smn3UyBbNFyBzH24Pmz0I872fhPL/C8uY1UJnJQE0LBQ==";
    const EXPECTED_RSA: &str = "M8aXJvRuf8BEQ4YRp8F59KLVddW4A91GCfPzvQtN741PiUg39Qzo5dSyCjb8xsofHOYY55zgfAlmvglKEGK4GMvqkvETji1T8Og+EG4mgwvDBt0REXtAhNVPxo66mZPFGtgTHE3jmOkqEQlx7iiyn/IMq+zDgfidsJHWfqxaf4d2dPCSMdubtjNcGNnSeQqzbLjw44XVSL+iXER11I15rEKFW1722jxIf5CZ+pV28ATY+1O68Fh595A23K34GT/2G9FtvpzuV8431qYAq4TxBcSCCXsWxgzHWxU83ELBxan+rJaEVG4YXfMuClrgWnHvc+1VzUm7gj/fTWRRqHlEcw==";

    fn pem_body(pem: &str) -> String {
        pem.lines().filter(|l| !l.starts_with("-----")).collect()
    }

    #[test]
    fn test_sign_type_parse() {
        assert_eq!("RSA".parse::<SignType>().unwrap(), SignType::Rsa);
        assert_eq!("RSA2".parse::<SignType>().unwrap(), SignType::Rsa2);
        let err = "MD5".parse::<SignType>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_sign_is_deterministic() -> Result<()> {
        let signer = RsaSigner::from_pem(MERCHANT_PRIVATE_KEY)?;

        assert_eq!(signer.sign(SignType::Rsa2, "a=1&b=2")?, EXPECTED_RSA2);
        assert_eq!(signer.sign(SignType::Rsa, "a=1&b=2")?, EXPECTED_RSA);
        Ok(())
    }

    #[test]
    fn test_key_formats_are_equivalent() -> Result<()> {
        let pkcs1 = RsaSigner::from_pem(MERCHANT_PRIVATE_KEY_PKCS1)?;
        let bare = RsaSigner::from_pem(&pem_body(MERCHANT_PRIVATE_KEY))?;

        assert_eq!(pkcs1.sign(SignType::Rsa2, "a=1&b=2")?, EXPECTED_RSA2);
        assert_eq!(bare.sign(SignType::Rsa2, "a=1&b=2")?, EXPECTED_RSA2);

        let verifier = RsaVerifier::from_pem(&pem_body(MERCHANT_PUBLIC_KEY))?;
        verifier.verify(SignType::Rsa2, b"a=1&b=2", EXPECTED_RSA2)?;
        Ok(())
    }

    #[test]
    fn test_verify_roundtrip_and_failures() -> Result<()> {
        let signer = RsaSigner::from_pem(MERCHANT_PRIVATE_KEY)?;
        let verifier = RsaVerifier::from_pem(MERCHANT_PUBLIC_KEY)?;
        let content = r#"{"return_code":0,"return_msg":"success"}"#;
        let sign = signer.sign(SignType::Rsa, content)?;

        verifier.verify(SignType::Rsa, content.as_bytes(), &sign)?;

        // Tampered content.
        let err = verifier
            .verify(
                SignType::Rsa,
                br#"{"return_code":0,"return_msg":"success!"}"#,
                &sign,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureInvalid);

        // Wrong hash.
        let err = verifier
            .verify(SignType::Rsa2, content.as_bytes(), &sign)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureInvalid);

        // Wrong key material.
        let other = RsaVerifier::from_pem(GATEWAY_PUBLIC_KEY)?;
        let err = other
            .verify(SignType::Rsa, content.as_bytes(), &sign)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureInvalid);

        // Garbage signature.
        let err = verifier
            .verify(SignType::Rsa, content.as_bytes(), "%%%")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureInvalid);
        Ok(())
    }

    #[test]
    fn test_invalid_keys() {
        let err = RsaSigner::from_pem("not a key").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);

        let err = RsaVerifier::from_pem(MERCHANT_PRIVATE_KEY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
