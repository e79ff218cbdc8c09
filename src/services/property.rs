use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::pagination::Paginated;
use crate::repository::{PropertyListQuery, PropertyReader, PropertyWriter};
use crate::services::ServiceResult;

/// Returns one page of properties matching the filter, with pager metadata
/// computed from the same predicate set.
pub fn list_properties<R>(repo: &R, query: PropertyListQuery) -> ServiceResult<Paginated<Property>>
where
    R: PropertyReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_properties(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_property<R>(repo: &R, id: &str) -> ServiceResult<Option<Property>>
where
    R: PropertyReader + ?Sized,
{
    Ok(repo.get_property_by_id(id)?)
}

pub fn create_property<R>(repo: &R, new_property: &NewProperty) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    Ok(repo.create_property(new_property)?)
}

pub fn update_property<R>(
    repo: &R,
    id: &str,
    updates: &UpdateProperty,
) -> ServiceResult<Option<Property>>
where
    R: PropertyWriter + ?Sized,
{
    Ok(repo.update_property(id, updates)?)
}

pub fn delete_property<R>(repo: &R, id: &str) -> ServiceResult<Option<Property>>
where
    R: PropertyWriter + ?Sized,
{
    Ok(repo.delete_property(id)?)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::pagination::Page;
    use crate::repository::mock::MockRepository;

    #[test]
    fn list_wraps_repo_result_in_pagination_contract() {
        let mut repo = MockRepository::new();
        repo.expect_list_properties()
            .returning(|_| Ok((42, Vec::new())));

        let query = PropertyListQuery::new().paginate(Page {
            limit: 10,
            offset: 20,
        });
        let page = list_properties(&repo, query).unwrap();
        assert_eq!(page.meta.total, 42);
        assert_eq!(page.meta.page, 3);
        assert!(page.data.is_empty());
    }

    #[test]
    fn get_missing_property_is_none() {
        let mut repo = MockRepository::new();
        repo.expect_get_property_by_id().returning(|_| Ok(None));

        assert!(get_property(&repo, "nope").unwrap().is_none());
    }
}
