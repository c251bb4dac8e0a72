use crate::application::ports::hostel_repository::{HostelRepository, HostelRow};

#[derive(thiserror::Error, Debug)]
pub enum CreateHostelError {
    #[error("A hostel with this abbreviated name already exists")]
    AbbreviationTaken,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub struct CreateHostel<'a, R: HostelRepository + ?Sized> {
    pub hostels: &'a R,
}

impl<'a, R: HostelRepository + ?Sized> CreateHostel<'a, R> {
    pub async fn execute(
        &self,
        name: &str,
        abbreviated_name: &str,
    ) -> Result<HostelRow, CreateHostelError> {
        if self
            .hostels
            .find_by_abbreviation(abbreviated_name)
            .await?
            .is_some()
        {
            return Err(CreateHostelError::AbbreviationTaken);
        }
        let hostel = self.hostels.create_hostel(name, abbreviated_name).await?;
        Ok(hostel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryHostels;

    #[tokio::test]
    async fn duplicate_abbreviation_is_rejected() {
        let hostels = InMemoryHostels::default();
        let uc = CreateHostel { hostels: &hostels };
        uc.execute("Hostel X", "HX").await.unwrap();
        let err = uc.execute("Hostel X2", "HX").await.unwrap_err();
        assert!(matches!(err, CreateHostelError::AbbreviationTaken));
    }

    #[tokio::test]
    async fn created_hostel_resolves_by_abbreviation() {
        let hostels = InMemoryHostels::default();
        let uc = CreateHostel { hostels: &hostels };
        let created = uc.execute("Hostel X", "HX").await.unwrap();
        let found = hostels.find_by_abbreviation("HX").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Hostel X");
    }
}
