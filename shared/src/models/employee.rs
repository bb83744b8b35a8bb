//! Employee Model

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Employee record as returned by the API
///
/// The four mutable attributes are nullable: a replace that omits a field
/// stores null for it. `salary` keeps the JSON number as submitted, so
/// `50000` comes back as `50000`, not `50000.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned id (see [`crate::EmployeeId`])
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub office: Option<String>,
    #[serde(default)]
    pub salary: Option<Number>,
}

/// Create / replace payload
///
/// Missing fields deserialize as `None`, so a replace always overwrites all
/// four attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub office: Option<String>,
    #[serde(default)]
    pub salary: Option<Number>,
}

impl Employee {
    /// The mutable attributes of this record
    pub fn input(&self) -> EmployeeInput {
        EmployeeInput {
            name: self.name.clone(),
            position: self.position.clone(),
            office: self.office.clone(),
            salary: self.salary.clone(),
        }
    }
}

/// Editable form model
///
/// An empty `id` means the form describes a new record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub office: String,
    pub salary: Option<Number>,
}

impl EmployeeDraft {
    /// Blank template: empty id, empty strings, null salary
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Form values as a request body
    pub fn to_input(&self) -> EmployeeInput {
        EmployeeInput {
            name: Some(self.name.clone()),
            position: Some(self.position.clone()),
            office: Some(self.office.clone()),
            salary: self.salary.clone(),
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(emp: &Employee) -> Self {
        Self {
            id: emp.id.clone(),
            name: emp.name.clone().unwrap_or_default(),
            position: emp.position.clone().unwrap_or_default(),
            office: emp.office.clone().unwrap_or_default(),
            salary: emp.salary.clone(),
        }
    }
}
