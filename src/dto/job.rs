use super::employee::{EmployeeRef, summary_of};
use crate::entities::job;
use crate::repository::job::JobWithEmployee;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a job, with its employee flattened to a summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: Option<i64>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub job_hours: Option<i64>,
    pub employee_id: Option<i64>,
    pub employee: Option<EmployeeRef>,
}

impl From<JobWithEmployee> for JobDto {
    fn from((entity, linked): JobWithEmployee) -> Self {
        Self {
            id: Some(entity.id),
            job_title: entity.job_title,
            job_description: entity.job_description,
            job_hours: entity.job_hours,
            employee_id: entity.employee_id,
            employee: linked.as_ref().map(summary_of),
        }
    }
}

impl JobDto {
    /// Lossy back-conversion: the employee summary is dropped, only its
    /// foreign-key id survives.
    #[must_use]
    pub fn into_model(self) -> job::Model {
        job::Model {
            id: self.id.unwrap_or_default(),
            job_title: self.job_title,
            job_description: self.job_description,
            job_hours: self.job_hours,
            employee_id: self.employee_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct JobInput {
    pub id: Option<i64>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub job_hours: Option<i64>,
    pub employee_id: Option<i64>,
}

impl JobInput {
    #[must_use]
    pub fn into_active_model(self) -> job::ActiveModel {
        job::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            job_title: Set(self.job_title),
            job_description: Set(self.job_description),
            job_hours: Set(self.job_hours),
            employee_id: Set(self.employee_id),
        }
    }

    /// Merge the provided fields onto an existing row; absent fields keep
    /// the stored value.
    #[must_use]
    pub fn apply_to(self, existing: job::Model) -> job::ActiveModel {
        job::ActiveModel {
            id: NotSet,
            job_title: Set(self.job_title.or(existing.job_title)),
            job_description: Set(self.job_description.or(existing.job_description)),
            job_hours: Set(self.job_hours.or(existing.job_hours)),
            employee_id: Set(self.employee_id.or(existing.employee_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> job::Model {
        job::Model {
            id: 12,
            job_title: Some("Analyst".into()),
            job_description: Some("Quarterly reporting".into()),
            job_hours: Some(160),
            employee_id: Some(7),
        }
    }

    #[test]
    fn patching_description_leaves_title_and_hours() {
        let patch = JobInput {
            job_description: Some("Annual reporting".into()),
            ..JobInput::default()
        };
        let merged = patch.apply_to(stored());
        assert_eq!(merged.job_description, Set(Some("Annual reporting".into())));
        assert_eq!(merged.job_title, Set(Some("Analyst".into())));
        assert_eq!(merged.job_hours, Set(Some(160)));
        assert_eq!(merged.employee_id, Set(Some(7)));
    }

    #[test]
    fn dto_round_trip_preserves_scalars_and_foreign_key() {
        let employee = crate::entities::employee::Model {
            id: 7,
            first_name: Some("Eve".into()),
            last_name: Some("Santos".into()),
            email: None,
            phone_number: None,
            salary: None,
            department_id: None,
        };
        let dto = JobDto::from((stored(), Some(employee)));
        assert_eq!(
            dto.employee.as_ref().map(|e| (e.id, e.first_name.clone())),
            Some((7, Some("Eve".into())))
        );
        assert_eq!(dto.clone().into_model(), stored());
    }
}
