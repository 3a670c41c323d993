//! Shop staff records.

use serde::{Deserialize, Serialize};

use crate::model::ProductId;

/// Opaque generated key for employees.
pub type EmployeeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Chef,
    Driver,
    Cashier,
}

/// An employee. A chef owns at most one oven (recorded on the oven product);
/// a driver owns at most one vehicle (recorded here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: EmployeeRole,
    pub vehicle: Option<ProductId>,
}

impl Employee {
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>, role: EmployeeRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            vehicle: None,
        }
    }
}

/// DTO for employee creation.
#[derive(Debug, Clone)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: EmployeeRole,
    pub vehicle: Option<ProductId>,
}

/// DTO for employee updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub vehicle: Option<ProductId>,
}
