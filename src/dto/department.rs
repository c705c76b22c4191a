use crate::entities::department;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: Option<i64>,
    pub department_name: Option<String>,
}

impl From<department::Model> for DepartmentDto {
    fn from(entity: department::Model) -> Self {
        Self {
            id: Some(entity.id),
            department_name: entity.department_name,
        }
    }
}

impl DepartmentDto {
    #[must_use]
    pub fn into_model(self) -> department::Model {
        department::Model {
            id: self.id.unwrap_or_default(),
            department_name: self.department_name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentInput {
    pub id: Option<i64>,
    pub department_name: Option<String>,
}

impl DepartmentInput {
    #[must_use]
    pub fn into_active_model(self) -> department::ActiveModel {
        department::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            department_name: Set(self.department_name),
        }
    }

    /// Merge the provided fields onto an existing row; absent fields keep
    /// the stored value.
    #[must_use]
    pub fn apply_to(self, existing: department::Model) -> department::ActiveModel {
        department::ActiveModel {
            id: NotSet,
            department_name: Set(self.department_name.or(existing.department_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_keeps_the_stored_name() {
        let existing = department::Model {
            id: 3,
            department_name: Some("Engineering".into()),
        };
        let merged = DepartmentInput::default().apply_to(existing);
        assert_eq!(merged.department_name, Set(Some("Engineering".into())));
    }
}
