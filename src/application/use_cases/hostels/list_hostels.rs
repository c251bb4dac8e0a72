use crate::application::ports::hostel_repository::{HostelRepository, HostelRow};

pub struct ListHostels<'a, R: HostelRepository + ?Sized> {
    pub hostels: &'a R,
}

impl<'a, R: HostelRepository + ?Sized> ListHostels<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<HostelRow>> {
        self.hostels.list_hostels().await
    }
}
