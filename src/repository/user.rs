use diesel::prelude::*;

use crate::domain::user::{User, UserSortBy};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, UserListQuery, UserReader, ordered};

fn filtered(
    query: &UserListQuery,
) -> crate::schema::users::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::users;

    let mut q = users::table.into_boxed();

    if let Some(search) = &query.search {
        let pattern = format!("%{search}%");
        q = q.filter(users::name.like(pattern.clone()).or(users::email.like(pattern)));
    }
    if let Some(role) = &query.role {
        q = q.filter(users::role.eq(role.clone()));
    }

    q
}

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as UserRow;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let row = users::table.find(id).first::<UserRow>(&mut conn).optional()?;

        Ok(row.map(Into::into))
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        use crate::models::user::User as UserRow;
        use crate::schema::users;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                UserSortBy::Name => ordered!(page_query, query.sort_order, users::name),
                UserSortBy::Email => ordered!(page_query, query.sort_order, users::email),
                UserSortBy::CreatedAt => ordered!(page_query, query.sort_order, users::created_at),
            };
            let page_query = page_query.then_order_by(users::id.asc());

            let items = page_query
                .load::<UserRow>(conn)?
                .into_iter()
                .map(Into::into)
                .collect();

            Ok((total as usize, items))
        })
    }
}
