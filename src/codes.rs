//! ABECS decline codes known to the dashboard.

pub const UNKNOWN_ERROR: &str = "Unknown Error";
pub const DECLINE_ACTION: &str = "Check ABECS documentation";
pub const DECLINE_TYPE: &str = "Decline";

/// Human-readable description of a decline code.
pub fn describe(code: &str) -> &'static str {
    match code {
        "ABECS-46" => "Closed Account",
        "ABECS-51" => "Insufficient Funds",
        "ABECS-57" => "Card Expired",
        "ABECS-59" => "Suspected Fraud",
        "ABECS-82" => "Invalid Card Data",
        "ABECS-83" => "Invalid Password/PIN",
        "ABECS-91" => "Bank Offline",
        "GEN-002" => "System Error",
        _ => UNKNOWN_ERROR,
    }
}
