use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::ports::account_repository::{AccountRepository, AccountRow};
use crate::application::ports::hostel_repository::HostelRepository;
use crate::domain::accounts::Role;

#[derive(thiserror::Error, Debug)]
pub enum SignupError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Could not find the hostel you were looking for")]
    UnknownHostel,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Role-tagged signup shared by the student, cleaner and supervisor routers.
pub struct Signup<'a, A: AccountRepository + ?Sized, H: HostelRepository + ?Sized> {
    pub accounts: &'a A,
    pub hostels: &'a H,
}

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub hostel_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl<'a, A: AccountRepository + ?Sized, H: HostelRepository + ?Sized> Signup<'a, A, H> {
    pub async fn execute(&self, req: &SignupRequest) -> Result<AccountRow, SignupError> {
        if req.password != req.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        let hostel = self
            .hostels
            .find_by_abbreviation(&req.hostel_name)
            .await?
            .ok_or(SignupError::UnknownHostel)?;
        if self.accounts.find_by_email(&req.email).await?.is_some() {
            return Err(SignupError::EmailTaken);
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        let account = self
            .accounts
            .create_account(
                req.role,
                &req.name,
                &req.email,
                &req.phone_number,
                hostel.id,
                &hash,
            )
            .await?;
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryAccounts, InMemoryHostels};
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn req(hostel_name: &str, password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            role: Role::Cleaner,
            name: "A".into(),
            email: "a@x.com".into(),
            phone_number: "1".into(),
            hostel_name: hostel_name.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[tokio::test]
    async fn rejects_mismatched_passwords_without_creating_account() {
        let accounts = InMemoryAccounts::default();
        let hostels = InMemoryHostels::default();
        hostels.seed("Hostel X", "HX");
        let uc = Signup {
            accounts: &accounts,
            hostels: &hostels,
        };
        let err = uc.execute(&req("HX", "p", "q")).await.unwrap_err();
        assert!(matches!(err, SignupError::PasswordMismatch));
        assert_eq!(accounts.len(), 0);
    }

    #[tokio::test]
    async fn rejects_unknown_hostel_without_creating_account() {
        let accounts = InMemoryAccounts::default();
        let hostels = InMemoryHostels::default();
        let uc = Signup {
            accounts: &accounts,
            hostels: &hostels,
        };
        let err = uc.execute(&req("HX", "p", "p")).await.unwrap_err();
        assert!(matches!(err, SignupError::UnknownHostel));
        assert_eq!(accounts.len(), 0);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let accounts = InMemoryAccounts::default();
        let hostels = InMemoryHostels::default();
        hostels.seed("Hostel X", "HX");
        let uc = Signup {
            accounts: &accounts,
            hostels: &hostels,
        };
        uc.execute(&req("HX", "p", "p")).await.unwrap();
        let err = uc.execute(&req("HX", "p", "p")).await.unwrap_err();
        assert!(matches!(err, SignupError::EmailTaken));
        assert_eq!(accounts.len(), 1);
    }

    #[tokio::test]
    async fn creates_account_bound_to_resolved_hostel() {
        let accounts = InMemoryAccounts::default();
        let hostels = InMemoryHostels::default();
        let hostel = hostels.seed("Hostel X", "HX");
        let uc = Signup {
            accounts: &accounts,
            hostels: &hostels,
        };
        let account = uc.execute(&req("HX", "p", "p")).await.unwrap();
        assert_eq!(account.hostel_id, hostel.id);
        assert_eq!(account.role, Role::Cleaner);

        // Stored hash verifies against the submitted password, plaintext is gone.
        let hash = account.password_hash.unwrap();
        assert_ne!(hash, "p");
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"p", &parsed)
                .is_ok()
        );
    }
}
