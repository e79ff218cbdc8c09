use crate::domain::notification::{NewNotification, Notification};
use crate::pagination::Paginated;
use crate::repository::{NotificationListQuery, NotificationReader, NotificationWriter};
use crate::services::ServiceResult;

pub fn list_notifications<R>(
    repo: &R,
    query: NotificationListQuery,
) -> ServiceResult<Paginated<Notification>>
where
    R: NotificationReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_notifications(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_notification<R>(repo: &R, id: &str) -> ServiceResult<Option<Notification>>
where
    R: NotificationReader + ?Sized,
{
    Ok(repo.get_notification_by_id(id)?)
}

pub fn create_notification<R>(
    repo: &R,
    new_notification: &NewNotification,
) -> ServiceResult<Notification>
where
    R: NotificationWriter + ?Sized,
{
    Ok(repo.create_notification(new_notification)?)
}

/// Flips the read flag of a notification. The new value is derived from the
/// stored row, not supplied by the caller.
pub fn toggle_notification_read<R>(repo: &R, id: &str) -> ServiceResult<Option<Notification>>
where
    R: NotificationReader + NotificationWriter + ?Sized,
{
    match repo.get_notification_by_id(id)? {
        Some(notification) => Ok(repo.set_notification_read(id, !notification.read)?),
        None => Ok(None),
    }
}

pub fn delete_notification<R>(repo: &R, id: &str) -> ServiceResult<Option<Notification>>
where
    R: NotificationWriter + ?Sized,
{
    Ok(repo.delete_notification(id)?)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

    fn sample(read: bool) -> Notification {
        Notification {
            id: "n1".into(),
            user_id: "u1".into(),
            kind: "tour_scheduled".into(),
            title: "Tour scheduled".into(),
            message: "A buyer booked a viewing".into(),
            read,
            data: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn toggle_flips_stored_flag() {
        let mut repo = MockRepository::new();
        repo.expect_get_notification_by_id()
            .returning(|_| Ok(Some(sample(false))));
        repo.expect_set_notification_read()
            .withf(|_, read| *read)
            .returning(|_, read| Ok(Some(sample(read))));

        let updated = toggle_notification_read(&repo, "n1").unwrap().unwrap();
        assert!(updated.read);
    }

    #[test]
    fn toggle_missing_notification_is_none() {
        let mut repo = MockRepository::new();
        repo.expect_get_notification_by_id().returning(|_| Ok(None));

        assert!(toggle_notification_read(&repo, "n1").unwrap().is_none());
    }
}
