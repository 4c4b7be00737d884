use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::guest::GuestRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use kernel::repository::guest::GuestRepository;
use kernel::repository::health::HealthCheckRepository;

#[derive(Clone)]
pub struct AppRegistry {
    guest_repository: Arc<dyn GuestRepository>,
    health_check_repository: Arc<dyn HealthCheckRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::from_parts(
            Arc::new(GuestRepositoryImpl::new(pool.clone())),
            Arc::new(HealthCheckRepositoryImpl::new(pool)),
        )
    }

    /// Assembles a registry from explicit repositories. The seam used to
    /// substitute the persistence layer, e.g. a stub store in tests.
    pub fn from_parts(
        guest_repository: Arc<dyn GuestRepository>,
        health_check_repository: Arc<dyn HealthCheckRepository>,
    ) -> Self {
        Self {
            guest_repository,
            health_check_repository,
        }
    }

    pub fn guest_repository(&self) -> Arc<dyn GuestRepository> {
        self.guest_repository.clone()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }
}
