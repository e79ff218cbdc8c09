//! Closed vocabularies shared by the domain entities.
//!
//! Status columns and sortable-column names are modelled as closed enums so
//! that unknown text is rejected at the API boundary instead of being indexed
//! into the schema at query time. Each enum round-trips through its wire/DB
//! text form via `Display` and `FromStr`.

use thiserror::Error;
use validator::ValidationError;

/// Errors produced when text from the outside fails to parse into a
/// constrained domain value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Text does not name a variant of the target enum.
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    /// Decimal-as-string value did not parse as a number.
    #[error("invalid decimal value: {0}")]
    InvalidDecimal(String),
}

/// Checks that a decimal-as-string field (price, rating, amount) holds a
/// parseable non-negative number. Used by `validator` derives.
pub fn validate_decimal(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("decimal")),
    }
}

/// Generates a closed text-backed enum with `Display`, `FromStr` and serde
/// renames matching the wire form.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident, default: $default:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($text),)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::types::TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err($crate::domain::types::TypeConstraintError::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use text_enum;

text_enum!(
    /// Direction applied to the resolved sort column.
    SortOrder,
    default: Desc,
    {
        Asc => "asc",
        Desc => "desc",
    }
);

text_enum!(
    /// Listing lifecycle state of a property.
    PropertyStatus,
    default: Draft,
    {
        Draft => "draft",
        Published => "published",
        Sold => "sold",
        Rented => "rented",
        Archived => "archived",
    }
);

text_enum!(
    /// Landlord identity verification state.
    VerificationStatus,
    default: Pending,
    {
        Pending => "pending",
        Verified => "verified",
        Rejected => "rejected",
    }
);

text_enum!(
    /// Scheduling state of a property tour.
    TourStatus,
    default: Pending,
    {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
        Completed => "completed",
    }
);

text_enum!(
    /// Settlement state of a payment.
    PaymentStatus,
    default: Pending,
    {
        Pending => "pending",
        Completed => "completed",
        Failed => "failed",
        Refunded => "refunded",
    }
);

text_enum!(
    /// Whether a payment settles in full or by installments.
    PaymentPlanType,
    default: FullPayment,
    {
        FullPayment => "full_payment",
        Installment => "installment",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            PropertyStatus::Draft,
            PropertyStatus::Published,
            PropertyStatus::Sold,
            PropertyStatus::Rented,
            PropertyStatus::Archived,
        ] {
            assert_eq!(status.to_string().parse::<PropertyStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "available".parse::<PropertyStatus>().unwrap_err();
        assert_eq!(
            err,
            TypeConstraintError::UnknownVariant {
                kind: "PropertyStatus",
                value: "available".to_string(),
            }
        );
    }

    #[test]
    fn plan_type_uses_snake_case_wire_form() {
        assert_eq!(PaymentPlanType::FullPayment.to_string(), "full_payment");
        assert_eq!(
            "installment".parse::<PaymentPlanType>(),
            Ok(PaymentPlanType::Installment)
        );
    }

    #[test]
    fn decimal_validator_accepts_numbers_only() {
        assert!(validate_decimal("100000.50").is_ok());
        assert!(validate_decimal("0.00").is_ok());
        assert!(validate_decimal("-1").is_err());
        assert!(validate_decimal("ten").is_err());
    }
}
