use crate::{entities::service::Service, errors::AppError, repositories::service::ServiceRepository};

pub struct ServiceHandler<R>
where
    R: ServiceRepository,
{
    pub service_repo: R,
}

impl<R> ServiceHandler<R>
where
    R: ServiceRepository,
{
    pub fn new(service_repo: R) -> Self {
        ServiceHandler { service_repo }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        self.service_repo.list_services().await
    }
}
