//! Payments taken through external gateways.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::types::{PaymentPlanType, PaymentStatus, text_enum, validate_decimal};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub user_id: String,
    /// Absent for general fees not tied to a listing.
    pub property_id: Option<String>,
    pub amount: String,
    pub currency: String,
    pub plan_type: PaymentPlanType,
    pub installments_total: Option<i32>,
    pub installment_number: Option<i32>,
    pub gateway: String,
    pub gateway_transaction_id: Option<String>,
    pub status: PaymentStatus,
    /// Opaque gateway response payload.
    pub metadata: Option<Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub user_id: String,
    pub property_id: Option<String>,
    #[validate(custom(function = validate_decimal))]
    pub amount: String,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub plan_type: Option<PaymentPlanType>,
    pub installments_total: Option<i32>,
    pub installment_number: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub gateway: String,
    pub gateway_transaction_id: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePayment {
    pub status: Option<PaymentStatus>,
    pub gateway_transaction_id: Option<String>,
    pub metadata: Option<Value>,
}

text_enum!(
    /// Columns a payment list may be sorted on.
    PaymentSortBy,
    default: CreatedAt,
    {
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
        Amount => "amount",
        Status => "status",
    }
);
