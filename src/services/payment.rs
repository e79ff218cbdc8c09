use crate::domain::payment::{NewPayment, Payment, UpdatePayment};
use crate::pagination::Paginated;
use crate::repository::{PaymentListQuery, PaymentReader, PaymentWriter};
use crate::services::ServiceResult;

pub fn list_payments<R>(repo: &R, query: PaymentListQuery) -> ServiceResult<Paginated<Payment>>
where
    R: PaymentReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_payments(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_payment<R>(repo: &R, id: &str) -> ServiceResult<Option<Payment>>
where
    R: PaymentReader + ?Sized,
{
    Ok(repo.get_payment_by_id(id)?)
}

pub fn create_payment<R>(repo: &R, new_payment: &NewPayment) -> ServiceResult<Payment>
where
    R: PaymentWriter + ?Sized,
{
    Ok(repo.create_payment(new_payment)?)
}

pub fn update_payment<R>(
    repo: &R,
    id: &str,
    updates: &UpdatePayment,
) -> ServiceResult<Option<Payment>>
where
    R: PaymentWriter + ?Sized,
{
    Ok(repo.update_payment(id, updates)?)
}

pub fn delete_payment<R>(repo: &R, id: &str) -> ServiceResult<Option<Payment>>
where
    R: PaymentWriter + ?Sized,
{
    Ok(repo.delete_payment(id)?)
}
