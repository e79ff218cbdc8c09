//! Repository traits and list-query builders.
//!
//! Each resource exposes a `Reader`/`Writer` trait pair plus a `*ListQuery`
//! builder carrying the typed filter predicates for its list endpoint. Every
//! filter field is optional; present fields are conjoined. Sorting is
//! restricted to the closed `*SortBy` enum of the resource, so a sort column
//! is never resolved dynamically against the schema.

use chrono::NaiveDateTime;

use crate::db::DbPool;
use crate::domain::audit_log::{AuditLog, AuditLogSortBy, NewAuditLog};
use crate::domain::landlord::{
    LandlordProfile, LandlordSortBy, NewLandlordProfile, UpdateLandlordProfile,
};
use crate::domain::notification::{NewNotification, Notification, NotificationSortBy};
use crate::domain::payment::{NewPayment, Payment, PaymentSortBy, UpdatePayment};
use crate::domain::property::{NewProperty, Property, PropertySortBy, UpdateProperty};
use crate::domain::tour::{NewTour, Tour, TourSortBy, UpdateTour};
use crate::domain::types::{
    PaymentStatus, PropertyStatus, SortOrder, TourStatus, VerificationStatus,
};
use crate::domain::user::{User, UserSortBy};
use crate::pagination::Page;
use crate::repository::errors::RepositoryResult;

pub mod audit_log;
pub mod errors;
pub mod landlord;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod notification;
pub mod payment;
pub mod property;
pub mod tour;
pub mod user;

/// Diesel-backed implementation of every repository trait in this module.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Applies `asc()`/`desc()` to a column depending on the requested order.
macro_rules! ordered {
    ($query:expr, $order:expr, $column:expr) => {
        match $order {
            $crate::domain::types::SortOrder::Asc => $query.order($column.asc()),
            $crate::domain::types::SortOrder::Desc => $query.order($column.desc()),
        }
    };
}

pub(crate) use ordered;

#[derive(Debug, Clone, Default)]
pub struct PropertyListQuery {
    pub search: Option<String>,
    pub status: Option<PropertyStatus>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<i32>,
    pub sort_by: PropertySortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl PropertyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn bedrooms(mut self, bedrooms: i32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn sort(mut self, by: PropertySortBy, order: SortOrder) -> Self {
        self.sort_by = by;
        self.sort_order = order;
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct LandlordListQuery {
    pub user_id: Option<String>,
    pub verification_status: Option<VerificationStatus>,
    pub min_rating: Option<f64>,
    pub sort_by: LandlordSortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl LandlordListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn verification_status(mut self, status: VerificationStatus) -> Self {
        self.verification_status = Some(status);
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TourListQuery {
    pub status: Option<TourStatus>,
    pub property_id: Option<String>,
    pub buyer_id: Option<String>,
    pub agent_id: Option<String>,
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
    pub sort_by: TourSortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl TourListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: TourStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn property_id(mut self, property_id: impl Into<String>) -> Self {
        self.property_id = Some(property_id.into());
        self
    }

    pub fn date_range(mut self, from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentListQuery {
    pub user_id: Option<String>,
    pub property_id: Option<String>,
    pub status: Option<PaymentStatus>,
    pub gateway: Option<String>,
    pub sort_by: PaymentSortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl PaymentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationListQuery {
    pub user_id: Option<String>,
    pub kind: Option<String>,
    pub read: Option<bool>,
    pub sort_by: NotificationSortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl NotificationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = Some(read);
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditLogListQuery {
    pub user_id: Option<String>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub sort_by: AuditLogSortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl AuditLogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn entity(mut self, entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub sort_by: UserSortBy,
    pub sort_order: SortOrder,
    pub page: Page,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self {
            // Directory listings read naturally in ascending name order.
            sort_order: SortOrder::Asc,
            ..Self::default()
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn paginate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

pub trait PropertyReader {
    fn get_property_by_id(&self, id: &str) -> RepositoryResult<Option<Property>>;
    fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<(usize, Vec<Property>)>;
}

pub trait PropertyWriter {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
    fn update_property(
        &self,
        id: &str,
        updates: &UpdateProperty,
    ) -> RepositoryResult<Option<Property>>;
    fn delete_property(&self, id: &str) -> RepositoryResult<Option<Property>>;
}

pub trait LandlordReader {
    fn get_landlord_by_id(&self, id: &str) -> RepositoryResult<Option<LandlordProfile>>;
    fn list_landlords(
        &self,
        query: LandlordListQuery,
    ) -> RepositoryResult<(usize, Vec<LandlordProfile>)>;
}

pub trait LandlordWriter {
    fn create_landlord(
        &self,
        new_landlord: &NewLandlordProfile,
    ) -> RepositoryResult<LandlordProfile>;
    fn update_landlord(
        &self,
        id: &str,
        updates: &UpdateLandlordProfile,
    ) -> RepositoryResult<Option<LandlordProfile>>;
    fn delete_landlord(&self, id: &str) -> RepositoryResult<Option<LandlordProfile>>;
}

pub trait TourReader {
    fn get_tour_by_id(&self, id: &str) -> RepositoryResult<Option<Tour>>;
    fn list_tours(&self, query: TourListQuery) -> RepositoryResult<(usize, Vec<Tour>)>;
}

pub trait TourWriter {
    fn create_tour(&self, new_tour: &NewTour) -> RepositoryResult<Tour>;
    fn update_tour(&self, id: &str, updates: &UpdateTour) -> RepositoryResult<Option<Tour>>;
    fn delete_tour(&self, id: &str) -> RepositoryResult<Option<Tour>>;
}

pub trait PaymentReader {
    fn get_payment_by_id(&self, id: &str) -> RepositoryResult<Option<Payment>>;
    fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)>;
}

pub trait PaymentWriter {
    fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment>;
    fn update_payment(
        &self,
        id: &str,
        updates: &UpdatePayment,
    ) -> RepositoryResult<Option<Payment>>;
    fn delete_payment(&self, id: &str) -> RepositoryResult<Option<Payment>>;
}

pub trait NotificationReader {
    fn get_notification_by_id(&self, id: &str) -> RepositoryResult<Option<Notification>>;
    fn list_notifications(
        &self,
        query: NotificationListQuery,
    ) -> RepositoryResult<(usize, Vec<Notification>)>;
}

pub trait NotificationWriter {
    fn create_notification(
        &self,
        new_notification: &NewNotification,
    ) -> RepositoryResult<Notification>;
    /// Writes the read flag. Notifications have no other mutable field.
    fn set_notification_read(&self, id: &str, read: bool)
    -> RepositoryResult<Option<Notification>>;
    fn delete_notification(&self, id: &str) -> RepositoryResult<Option<Notification>>;
}

/// Audit records are append-only, so there is no writer trait beyond
/// creation and no delete anywhere.
pub trait AuditLogReader {
    fn get_audit_log_by_id(&self, id: &str) -> RepositoryResult<Option<AuditLog>>;
    fn list_audit_logs(&self, query: AuditLogListQuery) -> RepositoryResult<(usize, Vec<AuditLog>)>;
}

pub trait AuditLogWriter {
    fn create_audit_log(&self, new_audit_log: &NewAuditLog) -> RepositoryResult<AuditLog>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}
