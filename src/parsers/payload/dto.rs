use rust_decimal::Decimal;
use serde_json::Value;

const CARD_BRAND: &str = "/cardBrand";
const CARD_TYPE: &str = "/cardType";
const IS_ZERO_AUTH: &str = "/isZeroAuth";
const IS_DEBIT: &str = "/isDebit";
const FAILED_CODE: &str = "/failedReason/code";
const PAYMENT_AMOUNT: &str = "/processorReason/processorRaw/Payment/Amount";

/// The `transaction_data` column: a JSON document written by the gateway
/// whose shape depends on the processor. Every attribute is optional and is
/// read from its own path, so a malformed attribute never hides its siblings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPayload {
    pub card_brand: Option<String>,
    pub card_type: Option<String>,
    pub is_zero_auth: Option<bool>,
    pub is_debit: Option<bool>,
    failed_code: Option<String>,
    /// Minor units
    amount: Option<Decimal>,
}

impl TransactionPayload {
    /// Decodes the payload column. Text that is not JSON decodes to the empty
    /// payload instead of failing the row.
    pub fn decode(raw: &str) -> Self {
        let value: Value = serde_json::from_str(raw).unwrap_or_default();

        TransactionPayload {
            card_brand: string_at(&value, CARD_BRAND),
            card_type: string_at(&value, CARD_TYPE),
            is_zero_auth: value.pointer(IS_ZERO_AUTH).map(truthy),
            is_debit: value.pointer(IS_DEBIT).map(truthy),
            failed_code: value.pointer(FAILED_CODE).and_then(code_text),
            amount: value
                .pointer(PAYMENT_AMOUNT)
                .and_then(|amount| serde_json::from_value(amount.clone()).ok()),
        }
    }

    /// `processorReason.processorRaw.Payment.Amount`, in minor units.
    pub fn minor_amount(&self) -> Option<Decimal> {
        self.amount
    }

    /// `failedReason.code`.
    pub fn failure_code(&self) -> Option<&str> {
        self.failed_code.as_deref()
    }
}

fn string_at(value: &Value, path: &str) -> Option<String> {
    value.pointer(path)?.as_str().map(str::to_string)
}

/// Numeric codes are kept as their JSON text.
fn code_text(code: &Value) -> Option<String> {
    match code {
        Value::String(code) => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}

fn truthy(flag: &Value) -> bool {
    match flag {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
