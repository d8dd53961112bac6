//! Wire types for the Tempus-style gateway surface.
//!
//! Field names follow the gateway's upper-case JSON keys; the Rust side keeps
//! snake_case and renames at the serde boundary.

use common_http_errors::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Payment action named by the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "CCAUTH")]
    CcAuth,
    #[serde(rename = "CCFORCEAUTH")]
    CcForceAuth,
    #[serde(rename = "CCREVERSE")]
    CcReverse,
    #[serde(rename = "CCCREDIT")]
    CcCredit,
    #[serde(rename = "CCRECEIPTRETRIEVE")]
    CcReceiptRetrieve,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CcAuth,
        Operation::CcForceAuth,
        Operation::CcReverse,
        Operation::CcCredit,
        Operation::CcReceiptRetrieve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CcAuth => "CCAUTH",
            Operation::CcForceAuth => "CCFORCEAUTH",
            Operation::CcReverse => "CCREVERSE",
            Operation::CcCredit => "CCCREDIT",
            Operation::CcReceiptRetrieve => "CCRECEIPTRETRIEVE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseError::Operation(s.to_owned()))
    }
}

/// Simulated gateway behaviour requested through `X-Mock-Scenario`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    Timeout,
    RetryableError,
    GatewayTimeoutReconcile,
    AutoReversed,
    Declined,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Timeout,
        Scenario::RetryableError,
        Scenario::GatewayTimeoutReconcile,
        Scenario::AutoReversed,
        Scenario::Declined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Timeout => "TIMEOUT",
            Scenario::RetryableError => "RETRYABLE_ERROR",
            Scenario::GatewayTimeoutReconcile => "GATEWAY_TIMEOUT_RECONCILE",
            Scenario::AutoReversed => "AUTO_REVERSED",
            Scenario::Declined => "DECLINED",
        }
    }

    /// Message and error code the gateway reports for this scenario, or
    /// `None` when the scenario only affects latency.
    pub fn failure(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Scenario::Timeout => None,
            Scenario::RetryableError => Some(("UNABLE TO CONNECT TO PROCESSOR", "-153")),
            Scenario::GatewayTimeoutReconcile => Some(("TIMED OUT WAITING FOR RESPONSE", "-155")),
            Scenario::AutoReversed => Some(("AUTO-REVERSED", "-159")),
            Scenario::Declined => Some(("DECLINED", "100")),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| ParseError::Scenario(s.to_owned()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unsupported operation `{0}`")]
    Operation(String),
    #[error("unsupported scenario `{0}`")]
    Scenario(String),
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Operation(_) => "invalid_operation",
            ParseError::Scenario(_) => "invalid_scenario",
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::unprocessable(err.code(), err.to_string())
    }
}

/// Boolean carried as the literal strings `"TRUE"` / `"FALSE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "FALSE")]
    False,
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::True
        } else {
            Flag::False
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(rename = "TRANRESP")]
    pub tran_resp: TranResp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranResp {
    #[serde(rename = "TRANSUCCESS")]
    pub success: Flag,
    #[serde(rename = "TRANRESPMESSAGE")]
    pub message: String,
    #[serde(rename = "SYSTEMTRACENUM")]
    pub trace_number: String,
    #[serde(rename = "CCAUTHCODE")]
    pub auth_code: String,
    #[serde(rename = "AUTHDATE")]
    pub auth_date: String,
    #[serde(rename = "TRANRESPERRCODE")]
    pub error_code: String,
    #[serde(
        rename = "ORIGINAL_TRANSACTION",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_transaction: Option<OriginalTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalTransaction {
    #[serde(rename = "TRANSUCCESS")]
    pub success: Flag,
    #[serde(rename = "CCAUTHCODE")]
    pub auth_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub cc_token: String,
    pub last_four: String,
    pub card_type: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IframeSessionResponse {
    #[serde(rename = "TRANRESP")]
    pub tran_resp: IframeSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IframeSession {
    #[serde(rename = "TRANSUCCESS")]
    pub success: Flag,
    #[serde(rename = "IFRAME_URL")]
    pub iframe_url: String,
    #[serde(rename = "SESSIONID")]
    pub session_id: String,
}
