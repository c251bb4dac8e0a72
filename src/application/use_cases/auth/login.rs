use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::account_repository::{AccountRepository, AccountRow};

pub struct Login<'a, R: AccountRepository + ?Sized> {
    pub accounts: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R: AccountRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<AccountRow>> {
        let row = match self.accounts.find_by_email(&req.email).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        let hash = row.password_hash.clone().unwrap_or_default();
        let parsed = PasswordHash::new(&hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_ok()
        {
            Ok(Some(AccountRow {
                password_hash: None,
                ..row
            }))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryAccounts, InMemoryHostels};
    use crate::application::use_cases::auth::signup::{Signup, SignupRequest};
    use crate::domain::accounts::Role;

    async fn seed_account(accounts: &InMemoryAccounts, hostels: &InMemoryHostels) {
        hostels.seed("Hostel X", "HX");
        let uc = Signup { accounts, hostels };
        uc.execute(&SignupRequest {
            role: Role::Student,
            name: "A".into(),
            email: "a@x.com".into(),
            phone_number: "1".into(),
            hostel_name: "HX".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn unknown_email_yields_none() {
        let accounts = InMemoryAccounts::default();
        let uc = Login {
            accounts: &accounts,
        };
        let out = uc
            .execute(&LoginRequest {
                email: "nobody@x.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn wrong_password_yields_none() {
        let accounts = InMemoryAccounts::default();
        let hostels = InMemoryHostels::default();
        seed_account(&accounts, &hostels).await;
        let uc = Login {
            accounts: &accounts,
        };
        let out = uc
            .execute(&LoginRequest {
                email: "a@x.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap();
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn correct_password_returns_account_without_hash() {
        let accounts = InMemoryAccounts::default();
        let hostels = InMemoryHostels::default();
        seed_account(&accounts, &hostels).await;
        let uc = Login {
            accounts: &accounts,
        };
        let out = uc
            .execute(&LoginRequest {
                email: "a@x.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(out.email, "a@x.com");
        assert_eq!(out.role, Role::Student);
        assert!(out.password_hash.is_none());
    }
}
