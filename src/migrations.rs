//! Schema setup, applied programmatically at startup and by the test
//! harness. Column definitions reference the entity idens so the schema and
//! the models cannot drift apart silently.

use crate::entities::{department, employee, job};
use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateTables)]
    }
}

pub struct CreateTables;

impl MigrationName for CreateTables {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(department::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(department::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(department::Column::DepartmentName).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(employee::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(employee::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(employee::Column::FirstName).string())
                    .col(ColumnDef::new(employee::Column::LastName).string())
                    .col(ColumnDef::new(employee::Column::Email).string())
                    .col(ColumnDef::new(employee::Column::PhoneNumber).string())
                    .col(ColumnDef::new(employee::Column::Salary).big_integer())
                    .col(ColumnDef::new(employee::Column::DepartmentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee__department_id")
                            .from(employee::Entity, employee::Column::DepartmentId)
                            .to(department::Entity, department::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(job::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(job::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(job::Column::JobTitle).string())
                    .col(ColumnDef::new(job::Column::JobDescription).string())
                    .col(ColumnDef::new(job::Column::JobHours).big_integer())
                    .col(ColumnDef::new(job::Column::EmployeeId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job__employee_id")
                            .from(job::Entity, job::Column::EmployeeId)
                            .to(employee::Entity, employee::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee__department_id")
                    .table(employee::Entity)
                    .col(employee::Column::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job__employee_id")
                    .table(job::Entity)
                    .col(job::Column::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(job::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(employee::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(department::Entity).to_owned())
            .await
    }
}
