//! Response generator for payment operations.
//!
//! A scenario override always wins over operation-specific shaping. Only the
//! success path looks at the operation.

use crate::model::{Flag, Operation, OriginalTransaction, Scenario, TranResp, TransactionResponse};
use chrono::Local;
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

pub const MOCK_AUTH_CODE: &str = "123456";
pub const AUTH_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
pub const SUCCESS_ERROR_CODE: &str = "0";

/// Default client-side timeout the simulated delay has to outlast.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_TIMEOUT_DELAY: Duration = Duration::from_secs(70);

#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    timeout_delay: Duration,
}

impl ResponseGenerator {
    pub fn new(timeout_delay: Duration) -> Self {
        Self { timeout_delay }
    }

    pub fn timeout_delay(&self) -> Duration {
        self.timeout_delay
    }

    /// Builds the gateway reply for one payment operation.
    ///
    /// `Scenario::Timeout` parks the request on a tokio timer before handing
    /// back an approval, so other requests keep being served meanwhile.
    pub async fn generate(
        &self,
        scenario: Option<Scenario>,
        operation: Operation,
        payload: &Map<String, Value>,
    ) -> TransactionResponse {
        debug!(%operation, fields = payload.len(), "payload received");

        if scenario == Some(Scenario::Timeout) {
            let response = approved();
            info!(%operation, delay_secs = self.timeout_delay.as_secs_f64(), "simulating gateway timeout");
            sleep(self.timeout_delay).await;
            return response;
        }

        shape_response(scenario, operation)
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_DELAY)
    }
}

/// Synchronous part of [`ResponseGenerator::generate`]: everything except the
/// timeout delay.
pub fn shape_response(scenario: Option<Scenario>, operation: Operation) -> TransactionResponse {
    let mut response = approved();
    let tran = &mut response.tran_resp;

    match scenario {
        Some(scenario) => {
            let failure = scenario.failure();
            tran.success = failure.is_none().into();
            if let Some((message, error_code)) = failure {
                tran.message = message.to_owned();
                tran.error_code = error_code.to_owned();
            }
        }
        None => match operation {
            Operation::CcAuth | Operation::CcForceAuth => {}
            Operation::CcReverse => tran.message = "REVERSED SUCCESSFULLY".to_owned(),
            Operation::CcCredit => tran.message = "REFUNDED SUCCESSFULLY".to_owned(),
            Operation::CcReceiptRetrieve => {
                tran.message = "RECEIPT RETRIEVED".to_owned();
                tran.original_transaction = Some(OriginalTransaction {
                    success: Flag::True,
                    auth_code: MOCK_AUTH_CODE.to_owned(),
                });
            }
        },
    }

    response
}

fn approved() -> TransactionResponse {
    TransactionResponse {
        tran_resp: TranResp {
            success: Flag::True,
            message: "APPROVED".to_owned(),
            trace_number: trace_number(),
            auth_code: MOCK_AUTH_CODE.to_owned(),
            auth_date: Local::now().format(AUTH_DATE_FORMAT).to_string(),
            error_code: SUCCESS_ERROR_CODE.to_owned(),
            original_transaction: None,
        },
    }
}

/// Eight hex characters from a v4 UUID. Not unique, not secret.
pub fn trace_number() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_owned()
}
