//! Typed HTTP client mirroring the `/api/v1` route tree.
//!
//! Every failure is terminal for that call; there is no retry layer.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::client::keys::Resource;
use crate::domain::audit_log::{AuditLog, NewAuditLog};
use crate::domain::landlord::{LandlordProfile, NewLandlordProfile, UpdateLandlordProfile};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::payment::{NewPayment, Payment, UpdatePayment};
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::tour::{NewTour, Tour, UpdateTour};
use crate::domain::user::User;
use crate::dto::{
    AuditLogFilterParams, LandlordFilterParams, NotificationFilterParams, PaymentFilterParams,
    PropertyFilterParams, TourFilterParams, UserFilterParams,
};
use crate::pagination::Paginated;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response; `message` carries the server's plain-text body.
    #[error("http {status}: {message}")]
    Http { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, resource: Resource, suffix: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if suffix.is_empty() {
            format!("{base}/api/v1/{}", resource.path())
        } else {
            format!("{base}/api/v1/{}/{suffix}", resource.path())
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    async fn list<T, P>(&self, resource: Resource, params: &P) -> ClientResult<Paginated<T>>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let response = self
            .http
            .get(self.url(resource, ""))
            .query(params)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_one<T: DeserializeOwned>(&self, resource: Resource, id: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(resource, id)).send().await?;
        Self::decode(response).await
    }

    async fn create<T, B>(&self, resource: Resource, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .http
            .post(self.url(resource, ""))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update<T, B>(&self, resource: Resource, id: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .http
            .patch(self.url(resource, id))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_one<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
    ) -> ClientResult<T> {
        let response = self.http.delete(self.url(resource, id)).send().await?;
        Self::decode(response).await
    }

    // Properties

    pub async fn list_properties(
        &self,
        params: &PropertyFilterParams,
    ) -> ClientResult<Paginated<Property>> {
        self.list(Resource::Properties, params).await
    }

    pub async fn get_property(&self, id: &str) -> ClientResult<Property> {
        self.get_one(Resource::Properties, id).await
    }

    pub async fn create_property(&self, body: &NewProperty) -> ClientResult<Property> {
        self.create(Resource::Properties, body).await
    }

    pub async fn update_property(
        &self,
        id: &str,
        body: &UpdateProperty,
    ) -> ClientResult<Property> {
        self.update(Resource::Properties, id, body).await
    }

    pub async fn delete_property(&self, id: &str) -> ClientResult<Property> {
        self.delete_one(Resource::Properties, id).await
    }

    // Landlord profiles

    pub async fn list_landlords(
        &self,
        params: &LandlordFilterParams,
    ) -> ClientResult<Paginated<LandlordProfile>> {
        self.list(Resource::Landlords, params).await
    }

    pub async fn get_landlord(&self, id: &str) -> ClientResult<LandlordProfile> {
        self.get_one(Resource::Landlords, id).await
    }

    pub async fn create_landlord(
        &self,
        body: &NewLandlordProfile,
    ) -> ClientResult<LandlordProfile> {
        self.create(Resource::Landlords, body).await
    }

    pub async fn update_landlord(
        &self,
        id: &str,
        body: &UpdateLandlordProfile,
    ) -> ClientResult<LandlordProfile> {
        self.update(Resource::Landlords, id, body).await
    }

    pub async fn delete_landlord(&self, id: &str) -> ClientResult<LandlordProfile> {
        self.delete_one(Resource::Landlords, id).await
    }

    // Tours

    pub async fn list_tours(&self, params: &TourFilterParams) -> ClientResult<Paginated<Tour>> {
        self.list(Resource::Tours, params).await
    }

    pub async fn get_tour(&self, id: &str) -> ClientResult<Tour> {
        self.get_one(Resource::Tours, id).await
    }

    pub async fn create_tour(&self, body: &NewTour) -> ClientResult<Tour> {
        self.create(Resource::Tours, body).await
    }

    pub async fn update_tour(&self, id: &str, body: &UpdateTour) -> ClientResult<Tour> {
        self.update(Resource::Tours, id, body).await
    }

    pub async fn delete_tour(&self, id: &str) -> ClientResult<Tour> {
        self.delete_one(Resource::Tours, id).await
    }

    // Payments

    pub async fn list_payments(
        &self,
        params: &PaymentFilterParams,
    ) -> ClientResult<Paginated<Payment>> {
        self.list(Resource::Payments, params).await
    }

    pub async fn get_payment(&self, id: &str) -> ClientResult<Payment> {
        self.get_one(Resource::Payments, id).await
    }

    pub async fn create_payment(&self, body: &NewPayment) -> ClientResult<Payment> {
        self.create(Resource::Payments, body).await
    }

    pub async fn update_payment(&self, id: &str, body: &UpdatePayment) -> ClientResult<Payment> {
        self.update(Resource::Payments, id, body).await
    }

    pub async fn delete_payment(&self, id: &str) -> ClientResult<Payment> {
        self.delete_one(Resource::Payments, id).await
    }

    // Notifications

    pub async fn list_notifications(
        &self,
        params: &NotificationFilterParams,
    ) -> ClientResult<Paginated<Notification>> {
        self.list(Resource::Notifications, params).await
    }

    pub async fn get_notification(&self, id: &str) -> ClientResult<Notification> {
        self.get_one(Resource::Notifications, id).await
    }

    pub async fn create_notification(&self, body: &NewNotification) -> ClientResult<Notification> {
        self.create(Resource::Notifications, body).await
    }

    pub async fn toggle_notification_read(&self, id: &str) -> ClientResult<Notification> {
        let suffix = format!("{id}/toggle-read");
        let response = self
            .http
            .post(self.url(Resource::Notifications, &suffix))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_notification(&self, id: &str) -> ClientResult<Notification> {
        self.delete_one(Resource::Notifications, id).await
    }

    // Audit logs (append-only: no update or delete methods)

    pub async fn list_audit_logs(
        &self,
        params: &AuditLogFilterParams,
    ) -> ClientResult<Paginated<AuditLog>> {
        self.list(Resource::AuditLogs, params).await
    }

    pub async fn get_audit_log(&self, id: &str) -> ClientResult<AuditLog> {
        self.get_one(Resource::AuditLogs, id).await
    }

    pub async fn create_audit_log(&self, body: &NewAuditLog) -> ClientResult<AuditLog> {
        self.create(Resource::AuditLogs, body).await
    }

    // Users (read-only directory)

    pub async fn list_users(&self, params: &UserFilterParams) -> ClientResult<Paginated<User>> {
        self.list(Resource::Users, params).await
    }

    pub async fn get_user(&self, id: &str) -> ClientResult<User> {
        self.get_one(Resource::Users, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_resource() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(
            client.url(Resource::Properties, ""),
            "http://localhost:8080/api/v1/properties"
        );
        assert_eq!(
            client.url(Resource::AuditLogs, "abc"),
            "http://localhost:8080/api/v1/audit-logs/abc"
        );
    }
}
