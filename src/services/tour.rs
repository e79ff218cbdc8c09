use crate::domain::tour::{NewTour, Tour, UpdateTour};
use crate::pagination::Paginated;
use crate::repository::{TourListQuery, TourReader, TourWriter};
use crate::services::ServiceResult;

pub fn list_tours<R>(repo: &R, query: TourListQuery) -> ServiceResult<Paginated<Tour>>
where
    R: TourReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_tours(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_tour<R>(repo: &R, id: &str) -> ServiceResult<Option<Tour>>
where
    R: TourReader + ?Sized,
{
    Ok(repo.get_tour_by_id(id)?)
}

pub fn create_tour<R>(repo: &R, new_tour: &NewTour) -> ServiceResult<Tour>
where
    R: TourWriter + ?Sized,
{
    Ok(repo.create_tour(new_tour)?)
}

pub fn update_tour<R>(repo: &R, id: &str, updates: &UpdateTour) -> ServiceResult<Option<Tour>>
where
    R: TourWriter + ?Sized,
{
    Ok(repo.update_tour(id, updates)?)
}

pub fn delete_tour<R>(repo: &R, id: &str) -> ServiceResult<Option<Tour>>
where
    R: TourWriter + ?Sized,
{
    Ok(repo.delete_tour(id)?)
}
