use std::sync::Arc;

use crate::application::ports::account_repository::AccountRepository;
use crate::application::ports::booking_repository::BookingRepository;
use crate::application::ports::hostel_repository::HostelRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    account_repo: Arc<dyn AccountRepository>,
    hostel_repo: Arc<dyn HostelRepository>,
    booking_repo: Arc<dyn BookingRepository>,
}

impl AppServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        hostel_repo: Arc<dyn HostelRepository>,
        booking_repo: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            account_repo,
            hostel_repo,
            booking_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn account_repo(&self) -> Arc<dyn AccountRepository> {
        self.services.account_repo.clone()
    }

    pub fn hostel_repo(&self) -> Arc<dyn HostelRepository> {
        self.services.hostel_repo.clone()
    }

    pub fn booking_repo(&self) -> Arc<dyn BookingRepository> {
        self.services.booking_repo.clone()
    }
}
