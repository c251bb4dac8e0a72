use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role tag distinguishing the three kinds of accounts sharing one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Cleaner,
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Cleaner => "cleaner",
            Role::Supervisor => "supervisor",
        }
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "student" => Ok(Role::Student),
            "cleaner" => Ok(Role::Cleaner),
            "supervisor" => Ok(Role::Supervisor),
            other => Err(anyhow::anyhow!("unknown account role: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
