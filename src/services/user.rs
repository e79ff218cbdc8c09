//! Users are managed by the external identity provider; this side only
//! reads the directory.

use crate::domain::user::User;
use crate::pagination::Paginated;
use crate::repository::{UserListQuery, UserReader};
use crate::services::ServiceResult;

pub fn list_users<R>(repo: &R, query: UserListQuery) -> ServiceResult<Paginated<User>>
where
    R: UserReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_users(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_user<R>(repo: &R, id: &str) -> ServiceResult<Option<User>>
where
    R: UserReader + ?Sized,
{
    Ok(repo.get_user_by_id(id)?)
}
