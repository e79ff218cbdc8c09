use crate::domain::landlord::{LandlordProfile, NewLandlordProfile, UpdateLandlordProfile};
use crate::pagination::Paginated;
use crate::repository::{LandlordListQuery, LandlordReader, LandlordWriter};
use crate::services::ServiceResult;

pub fn list_landlords<R>(
    repo: &R,
    query: LandlordListQuery,
) -> ServiceResult<Paginated<LandlordProfile>>
where
    R: LandlordReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_landlords(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_landlord<R>(repo: &R, id: &str) -> ServiceResult<Option<LandlordProfile>>
where
    R: LandlordReader + ?Sized,
{
    Ok(repo.get_landlord_by_id(id)?)
}

pub fn create_landlord<R>(
    repo: &R,
    new_landlord: &NewLandlordProfile,
) -> ServiceResult<LandlordProfile>
where
    R: LandlordWriter + ?Sized,
{
    Ok(repo.create_landlord(new_landlord)?)
}

pub fn update_landlord<R>(
    repo: &R,
    id: &str,
    updates: &UpdateLandlordProfile,
) -> ServiceResult<Option<LandlordProfile>>
where
    R: LandlordWriter + ?Sized,
{
    Ok(repo.update_landlord(id, updates)?)
}

pub fn delete_landlord<R>(repo: &R, id: &str) -> ServiceResult<Option<LandlordProfile>>
where
    R: LandlordWriter + ?Sized,
{
    Ok(repo.delete_landlord(id)?)
}
