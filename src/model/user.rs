use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Account role, fixed at signup and editable from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Applicant,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "Applicant",
            Role::Recruiter => "Recruiter",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applicant" => Ok(Role::Applicant),
            "Recruiter" => Ok(Role::Recruiter),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Others => "others",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "others" => Ok(Gender::Others),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// The signed-in account as returned by the portal API.
///
/// The API owns the schema; optional fields are absent for accounts that never
/// filled in their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl User {
    /// Creates a user with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            age: None,
            gender: None,
            role,
            company: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Name shown in navigation; falls back to "User" for blank names.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }

    pub fn is_applicant(&self) -> bool {
        self.role == Role::Applicant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_underscore_id_on_the_wire() {
        let json = r#"{"_id":"u1","name":"Asha","email":"asha@example.com","role":"Recruiter","company":"TechCorp"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Recruiter);
        assert_eq!(user.company.as_deref(), Some("TechCorp"));
        assert!(user.phone.is_none());

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["_id"], "u1");
        assert!(back.get("phone").is_none());
    }

    #[test]
    fn test_display_name_falls_back_for_blank_names() {
        let user = User::new("u1", "  ", "x@example.com", Role::Applicant);
        assert_eq!(user.display_name(), "User");
    }

    #[test]
    fn test_gender_is_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Others).unwrap(), r#""others""#);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("Female".parse::<Gender>().is_err());
    }
}
