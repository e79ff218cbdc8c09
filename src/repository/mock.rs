//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::audit_log::{AuditLog, NewAuditLog};
use crate::domain::landlord::{LandlordProfile, NewLandlordProfile, UpdateLandlordProfile};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::payment::{NewPayment, Payment, UpdatePayment};
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::tour::{NewTour, Tour, UpdateTour};
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AuditLogListQuery, AuditLogReader, AuditLogWriter, LandlordListQuery, LandlordReader,
    LandlordWriter, NotificationListQuery, NotificationReader, NotificationWriter,
    PaymentListQuery, PaymentReader, PaymentWriter, PropertyListQuery, PropertyReader,
    PropertyWriter, TourListQuery, TourReader, TourWriter, UserListQuery, UserReader,
};

mock! {
    pub Repository {}

    impl PropertyReader for Repository {
        fn get_property_by_id(&self, id: &str) -> RepositoryResult<Option<Property>>;
        fn list_properties(&self, query: PropertyListQuery) -> RepositoryResult<(usize, Vec<Property>)>;
    }

    impl PropertyWriter for Repository {
        fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property>;
        fn update_property(&self, id: &str, updates: &UpdateProperty) -> RepositoryResult<Option<Property>>;
        fn delete_property(&self, id: &str) -> RepositoryResult<Option<Property>>;
    }

    impl LandlordReader for Repository {
        fn get_landlord_by_id(&self, id: &str) -> RepositoryResult<Option<LandlordProfile>>;
        fn list_landlords(&self, query: LandlordListQuery) -> RepositoryResult<(usize, Vec<LandlordProfile>)>;
    }

    impl LandlordWriter for Repository {
        fn create_landlord(&self, new_landlord: &NewLandlordProfile) -> RepositoryResult<LandlordProfile>;
        fn update_landlord(&self, id: &str, updates: &UpdateLandlordProfile) -> RepositoryResult<Option<LandlordProfile>>;
        fn delete_landlord(&self, id: &str) -> RepositoryResult<Option<LandlordProfile>>;
    }

    impl TourReader for Repository {
        fn get_tour_by_id(&self, id: &str) -> RepositoryResult<Option<Tour>>;
        fn list_tours(&self, query: TourListQuery) -> RepositoryResult<(usize, Vec<Tour>)>;
    }

    impl TourWriter for Repository {
        fn create_tour(&self, new_tour: &NewTour) -> RepositoryResult<Tour>;
        fn update_tour(&self, id: &str, updates: &UpdateTour) -> RepositoryResult<Option<Tour>>;
        fn delete_tour(&self, id: &str) -> RepositoryResult<Option<Tour>>;
    }

    impl PaymentReader for Repository {
        fn get_payment_by_id(&self, id: &str) -> RepositoryResult<Option<Payment>>;
        fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)>;
    }

    impl PaymentWriter for Repository {
        fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment>;
        fn update_payment(&self, id: &str, updates: &UpdatePayment) -> RepositoryResult<Option<Payment>>;
        fn delete_payment(&self, id: &str) -> RepositoryResult<Option<Payment>>;
    }

    impl NotificationReader for Repository {
        fn get_notification_by_id(&self, id: &str) -> RepositoryResult<Option<Notification>>;
        fn list_notifications(&self, query: NotificationListQuery) -> RepositoryResult<(usize, Vec<Notification>)>;
    }

    impl NotificationWriter for Repository {
        fn create_notification(&self, new_notification: &NewNotification) -> RepositoryResult<Notification>;
        fn set_notification_read(&self, id: &str, read: bool) -> RepositoryResult<Option<Notification>>;
        fn delete_notification(&self, id: &str) -> RepositoryResult<Option<Notification>>;
    }

    impl AuditLogReader for Repository {
        fn get_audit_log_by_id(&self, id: &str) -> RepositoryResult<Option<AuditLog>>;
        fn list_audit_logs(&self, query: AuditLogListQuery) -> RepositoryResult<(usize, Vec<AuditLog>)>;
    }

    impl AuditLogWriter for Repository {
        fn create_audit_log(&self, new_audit_log: &NewAuditLog) -> RepositoryResult<AuditLog>;
    }

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    }
}
