mod common;

use common::{seed_department, seed_employee, setup_test_db};
use personnel_api::StoreError;
use personnel_api::entities::employee;
use personnel_api::pagination::{Direction, PageRequest};
use personnel_api::repository::employee as employee_repo;
use sea_orm::ActiveValue::Set;

#[tokio::test]
async fn save_then_find_preserves_every_field() {
    let db = setup_test_db().await.expect("db setup failed");
    let department_id = seed_department(&db, "Engineering").await;

    let id = employee_repo::save(
        &db,
        employee::ActiveModel {
            first_name: Set(Some("Eve".into())),
            last_name: Set(Some("Santos".into())),
            email: Set(Some("eve@example.com".into())),
            phone_number: Set(None),
            salary: Set(Some(82_000)),
            department_id: Set(Some(department_id)),
            ..Default::default()
        },
    )
    .await
    .expect("save failed");

    let (found, department) = employee_repo::find_by_id(&db, id)
        .await
        .expect("find failed")
        .expect("employee missing after save");

    assert_eq!(found.id, id);
    assert_eq!(found.first_name.as_deref(), Some("Eve"));
    assert_eq!(found.last_name.as_deref(), Some("Santos"));
    assert_eq!(found.email.as_deref(), Some("eve@example.com"));
    assert_eq!(found.phone_number, None);
    assert_eq!(found.salary, Some(82_000));
    assert_eq!(found.department_id, Some(department_id));

    let department = department.expect("joined department missing");
    assert_eq!(department.id, department_id);
    assert_eq!(department.department_name.as_deref(), Some("Engineering"));
}

#[tokio::test]
async fn find_by_id_of_missing_row_is_none_not_an_error() {
    let db = setup_test_db().await.expect("db setup failed");
    let found = employee_repo::find_by_id(&db, 12345).await.expect("find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn update_on_missing_id_affects_zero_rows_and_creates_nothing() {
    let db = setup_test_db().await.expect("db setup failed");

    let affected = employee_repo::update(
        &db,
        999,
        employee::ActiveModel {
            first_name: Set(Some("Ghost".into())),
            ..Default::default()
        },
    )
    .await
    .expect("update failed");

    assert_eq!(affected, 0);
    assert_eq!(employee_repo::count(&db).await.expect("count failed"), 0);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let db = setup_test_db().await.expect("db setup failed");
    let id = seed_employee(&db, "Ada", "Byron", "ada@example.com", None, None).await;

    let first = employee_repo::delete_by_id(&db, id).await.expect("delete failed");
    assert_eq!(first, 1);

    let second = employee_repo::delete_by_id(&db, id).await.expect("second delete errored");
    assert_eq!(second, 0);
}

#[tokio::test]
async fn pagination_windows_never_error_past_the_end() {
    let db = setup_test_db().await.expect("db setup failed");
    for i in 0..15 {
        seed_employee(
            &db,
            &format!("First{i}"),
            &format!("Last{i}"),
            &format!("user{i}@example.com"),
            Some(1_000 * i),
            None,
        )
        .await;
    }

    let second_page = employee_repo::find_all(
        &db,
        &PageRequest {
            page: 1,
            size: 10,
            sort: Vec::new(),
        },
    )
    .await
    .expect("page 1 failed");
    assert_eq!(second_page.len(), 5);

    let far_page = employee_repo::find_all(
        &db,
        &PageRequest {
            page: 5,
            size: 10,
            sort: Vec::new(),
        },
    )
    .await
    .expect("page 5 failed");
    assert!(far_page.is_empty());

    assert_eq!(employee_repo::count(&db).await.expect("count failed"), 15);
}

#[tokio::test]
async fn explicit_sort_orders_the_page() {
    let db = setup_test_db().await.expect("db setup failed");
    seed_employee(&db, "Low", "Pay", "low@example.com", Some(10), None).await;
    seed_employee(&db, "High", "Pay", "high@example.com", Some(99), None).await;
    seed_employee(&db, "Mid", "Pay", "mid@example.com", Some(50), None).await;

    let page = PageRequest::default().sorted_by("salary", Direction::Desc);
    let rows = employee_repo::find_all(&db, &page).await.expect("sorted page failed");
    let salaries: Vec<_> = rows.iter().map(|(e, _)| e.salary).collect();
    assert_eq!(salaries, vec![Some(99), Some(50), Some(10)]);
}

#[tokio::test]
async fn search_is_case_insensitive_across_names_and_email() {
    let db = setup_test_db().await.expect("db setup failed");
    seed_employee(&db, "Eve", "Jones", "ej@example.com", None, None).await;
    seed_employee(&db, "Mark", "Hall", "steve@x.com", None, None).await;
    seed_employee(&db, "Bob", "Smith", "bob@y.com", None, None).await;

    let hits = employee_repo::search(&db, "eve").await.expect("search failed");
    assert_eq!(hits.len(), 2);
    let mut first_names: Vec<_> = hits
        .iter()
        .map(|(e, _)| e.first_name.clone().unwrap_or_default())
        .collect();
    first_names.sort();
    assert_eq!(first_names, vec!["Eve", "Mark"]);
}

#[tokio::test]
async fn department_is_null_finder_is_exact() {
    let db = setup_test_db().await.expect("db setup failed");
    let department_id = seed_department(&db, "Sales").await;
    seed_employee(&db, "In", "Dept", "a@example.com", None, Some(department_id)).await;
    seed_employee(&db, "No", "Dept", "b@example.com", None, None).await;
    seed_employee(&db, "Also", "None", "c@example.com", None, None).await;

    let unassigned = employee_repo::find_where_department_is_null(&db)
        .await
        .expect("finder failed");
    assert_eq!(unassigned.len(), 2);
    assert!(unassigned.iter().all(|(e, d)| e.department_id.is_none() && d.is_none()));

    let assigned = employee_repo::find_by_department(&db, department_id)
        .await
        .expect("by-department failed");
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].0.first_name.as_deref(), Some("In"));
}

#[tokio::test]
async fn salary_filter_is_strictly_greater() {
    let db = setup_test_db().await.expect("db setup failed");
    seed_employee(&db, "A", "A", "a@example.com", Some(50_000), None).await;
    seed_employee(&db, "B", "B", "b@example.com", Some(60_000), None).await;
    seed_employee(&db, "C", "C", "c@example.com", None, None).await;

    let rows = employee_repo::find_by_salary_greater_than(&db, 50_000)
        .await
        .expect("salary filter failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.salary, Some(60_000));
}

#[tokio::test]
async fn insert_with_colliding_preassigned_id_is_a_duplicate_key() {
    let db = setup_test_db().await.expect("db setup failed");

    let preassigned = employee::ActiveModel {
        id: Set(77),
        first_name: Set(Some("First".into())),
        ..Default::default()
    };
    employee_repo::insert(&db, preassigned).await.expect("first insert failed");

    let collision = employee::ActiveModel {
        id: Set(77),
        first_name: Set(Some("Second".into())),
        ..Default::default()
    };
    let err = employee_repo::insert(&db, collision)
        .await
        .expect_err("colliding insert succeeded");
    assert!(matches!(err, StoreError::DuplicateKey(_)));
}
