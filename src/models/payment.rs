use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::payment::{
    NewPayment as DomainNewPayment, Payment as DomainPayment, UpdatePayment as DomainUpdatePayment,
};
use crate::domain::types::{PaymentStatus, TypeConstraintError};
use crate::models::{decode_value, encode_value};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::payments)]
/// Diesel row for [`crate::domain::payment::Payment`].
pub struct Payment {
    pub id: String,
    pub user_id: String,
    pub property_id: Option<String>,
    pub amount: String,
    pub currency: String,
    pub plan_type: String,
    pub installments_total: Option<i32>,
    pub installment_number: Option<i32>,
    pub gateway: String,
    pub gateway_transaction_id: Option<String>,
    pub status: String,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment {
    pub id: String,
    pub user_id: String,
    pub property_id: Option<String>,
    pub amount: String,
    pub currency: String,
    pub plan_type: String,
    pub installments_total: Option<i32>,
    pub installment_number: Option<i32>,
    pub gateway: String,
    pub gateway_transaction_id: Option<String>,
    pub status: String,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewPayment {
    pub fn from_domain(new: &DomainNewPayment, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: new.user_id.clone(),
            property_id: new.property_id.clone(),
            amount: new.amount.clone(),
            currency: new.currency.clone().unwrap_or_else(|| "IDR".to_string()),
            plan_type: new.plan_type.unwrap_or_default().to_string(),
            installments_total: new.installments_total,
            installment_number: new.installment_number,
            gateway: new.gateway.clone(),
            gateway_transaction_id: new.gateway_transaction_id.clone(),
            status: PaymentStatus::default().to_string(),
            metadata: encode_value(new.metadata.as_ref()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::payments)]
pub struct UpdatePayment {
    pub status: Option<String>,
    pub gateway_transaction_id: Option<String>,
    pub metadata: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdatePayment {
    pub fn from_domain(updates: &DomainUpdatePayment, now: NaiveDateTime) -> Self {
        Self {
            status: updates.status.map(|s| s.to_string()),
            gateway_transaction_id: updates.gateway_transaction_id.clone(),
            metadata: encode_value(updates.metadata.as_ref()),
            updated_at: now,
        }
    }
}

impl TryFrom<Payment> for DomainPayment {
    type Error = TypeConstraintError;

    fn try_from(row: Payment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            property_id: row.property_id,
            amount: row.amount,
            currency: row.currency,
            plan_type: row.plan_type.parse()?,
            installments_total: row.installments_total,
            installment_number: row.installment_number,
            gateway: row.gateway,
            gateway_transaction_id: row.gateway_transaction_id,
            status: row.status.parse()?,
            metadata: decode_value(row.metadata),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::domain::types::PaymentPlanType;

    #[test]
    fn insertable_defaults_currency_plan_and_status() {
        let new = DomainNewPayment {
            user_id: "u1".to_string(),
            property_id: None,
            amount: "250.00".to_string(),
            currency: None,
            plan_type: None,
            installments_total: None,
            installment_number: None,
            gateway: "stripe".to_string(),
            gateway_transaction_id: None,
            metadata: Some(json!({"intent": "pi_123"})),
        };
        let row = NewPayment::from_domain(&new, "pay1".to_string(), Utc::now().naive_utc());
        assert_eq!(row.currency, "IDR");
        assert_eq!(row.plan_type, "full_payment");
        assert_eq!(row.status, "pending");
        assert_eq!(row.metadata.as_deref(), Some(r#"{"intent":"pi_123"}"#));
    }

    #[test]
    fn row_converts_to_domain() {
        let now = Utc::now().naive_utc();
        let row = Payment {
            id: "pay1".to_string(),
            user_id: "u1".to_string(),
            property_id: Some("p1".to_string()),
            amount: "250.00".to_string(),
            currency: "USD".to_string(),
            plan_type: "installment".to_string(),
            installments_total: Some(12),
            installment_number: Some(1),
            gateway: "stripe".to_string(),
            gateway_transaction_id: Some("tx1".to_string()),
            status: "completed".to_string(),
            metadata: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainPayment = row.try_into().unwrap();
        assert_eq!(domain.plan_type, PaymentPlanType::Installment);
        assert_eq!(domain.status, PaymentStatus::Completed);
        assert_eq!(domain.installments_total, Some(12));
    }
}
