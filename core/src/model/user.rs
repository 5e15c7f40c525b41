// core/src/model/user.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Donor,
  Admin,
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Role::Donor => f.write_str("donor"),
      Role::Admin => f.write_str("admin"),
    }
  }
}

impl FromStr for Role {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "donor" => Ok(Role::Donor),
      "admin" => Ok(Role::Admin),
      other => Err(format!("unknown role '{}'", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub name: String,
  pub email: String,
  pub avatar_url: String,
  pub role: Role,
}

impl User {
  /// The fixed account the simulated identity provider resolves for `role`.
  pub fn for_role(role: Role) -> Self {
    match role {
      Role::Donor => User {
        id: "user-123".to_string(),
        name: "Jane Donor".to_string(),
        email: "jane.donor@example.com".to_string(),
        avatar_url: "https://i.pravatar.cc/150?u=jane.donor@example.com".to_string(),
        role: Role::Donor,
      },
      Role::Admin => User {
        id: "admin-456".to_string(),
        name: "Admin User".to_string(),
        email: "admin@charityconnect.com".to_string(),
        avatar_url: "https://i.pravatar.cc/150?u=admin@charityconnect.com".to_string(),
        role: Role::Admin,
      },
    }
  }

  pub fn is_admin(&self) -> bool {
    self.role == Role::Admin
  }
}
