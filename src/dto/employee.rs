use crate::entities::employee;
use crate::repository::employee::EmployeeWithDepartment;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of an employee, with its department flattened to a
/// summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<i64>,
    pub department_id: Option<i64>,
    pub department: Option<DepartmentSummary>,
}

/// Minimal department reference carried inside an employee payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub id: i64,
    pub department_name: Option<String>,
}

impl From<EmployeeWithDepartment> for EmployeeDto {
    fn from((entity, linked): EmployeeWithDepartment) -> Self {
        Self {
            id: Some(entity.id),
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
            salary: entity.salary,
            department_id: entity.department_id,
            department: linked.map(|d| DepartmentSummary {
                id: d.id,
                department_name: d.department_name,
            }),
        }
    }
}

impl EmployeeDto {
    /// Back-conversion to the persisted shape. Lossy by design: the nested
    /// department summary is dropped, only its foreign-key id survives.
    #[must_use]
    pub fn into_model(self) -> employee::Model {
        employee::Model {
            id: self.id.unwrap_or_default(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            salary: self.salary,
            department_id: self.department_id,
        }
    }
}

/// Create / update payload. Every field is optional on the wire; what an
/// absent field means depends on the operation (full update writes it as
/// NULL, partial update keeps the stored value).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<i64>,
    pub department_id: Option<i64>,
}

impl EmployeeInput {
    /// Full-replacement active model: every column is written, absent fields
    /// as NULL.
    #[must_use]
    pub fn into_active_model(self) -> employee::ActiveModel {
        employee::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone_number: Set(self.phone_number),
            salary: Set(self.salary),
            department_id: Set(self.department_id),
        }
    }

    /// Merge the provided fields onto an existing row. Absent fields keep
    /// the stored value; an absent field can never erase one.
    #[must_use]
    pub fn apply_to(self, existing: employee::Model) -> employee::ActiveModel {
        employee::ActiveModel {
            id: NotSet,
            first_name: Set(self.first_name.or(existing.first_name)),
            last_name: Set(self.last_name.or(existing.last_name)),
            email: Set(self.email.or(existing.email)),
            phone_number: Set(self.phone_number.or(existing.phone_number)),
            salary: Set(self.salary.or(existing.salary)),
            department_id: Set(self.department_id.or(existing.department_id)),
        }
    }
}

pub(crate) fn summary_of(model: &employee::Model) -> EmployeeRef {
    EmployeeRef {
        id: model.id,
        first_name: model.first_name.clone(),
        last_name: model.last_name.clone(),
    }
}

/// Minimal employee reference carried inside a job payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
