//! Employee Repository
//!
//! Each method makes one query round trip to the `employee` table. Every
//! query projects the record key as `_id`, so rows deserialize straight into
//! [`Employee`].

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::EMPLOYEE_TABLE;
use shared::models::{Employee, EmployeeId, EmployeeInput};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees, in whatever order the store returns them
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(
                "SELECT meta::id(id) AS _id, name, position, office, salary \
                 FROM type::table($table)",
            )
            .bind(("table", EMPLOYEE_TABLE))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &EmployeeId) -> RepoResult<Option<Employee>> {
        let emp: Option<Employee> = self
            .base
            .db()
            .query(
                "SELECT meta::id(id) AS _id, name, position, office, salary \
                 FROM type::thing($table, $id)",
            )
            .bind(("table", EMPLOYEE_TABLE))
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(emp)
    }

    /// Create a new employee; the store assigns the id
    pub async fn create(&self, data: EmployeeInput) -> RepoResult<Employee> {
        let created: Option<Employee> = self
            .base
            .db()
            .query(
                "CREATE type::table($table) CONTENT $data \
                 RETURN meta::id(id) AS _id, name, position, office, salary",
            )
            .bind(("table", EMPLOYEE_TABLE))
            .bind(("data", data))
            .await?
            .take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Overwrite all four attributes of an existing employee
    ///
    /// Returns `None` when no record has this id; nothing is created.
    pub async fn replace(
        &self,
        id: &EmployeeId,
        data: EmployeeInput,
    ) -> RepoResult<Option<Employee>> {
        let updated: Option<Employee> = self
            .base
            .db()
            .query(
                r#"UPDATE type::thing($table, $id) SET
                    name = $name,
                    position = $position,
                    office = $office,
                    salary = $salary
                RETURN meta::id(id) AS _id, name, position, office, salary"#,
            )
            .bind(("table", EMPLOYEE_TABLE))
            .bind(("id", id.to_string()))
            .bind(("name", data.name))
            .bind(("position", data.position))
            .bind(("office", data.office))
            .bind(("salary", data.salary))
            .await?
            .take(0)?;
        Ok(updated)
    }

    /// Hard delete an employee, returning the removed record
    ///
    /// Returns `None` when no record has this id.
    pub async fn delete(&self, id: &EmployeeId) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT meta::id(id) AS _id, name, position, office, salary \
                 FROM type::thing($table, $id);\
                 DELETE type::thing($table, $id);",
            )
            .bind(("table", EMPLOYEE_TABLE))
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        let removed: Option<Employee> = result.take(0)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::DbService;
    use serde_json::{Number, json};

    async fn repo() -> EmployeeRepository {
        let db = DbService::new(&Config::in_memory())
            .await
            .expect("in-memory store");
        EmployeeRepository::new(db.db)
    }

    fn input(name: &str, salary: Option<Number>) -> EmployeeInput {
        EmployeeInput {
            name: Some(name.to_string()),
            position: Some("Eng".to_string()),
            office: Some("HQ".to_string()),
            salary,
        }
    }

    fn id_of(emp: &Employee) -> EmployeeId {
        EmployeeId::parse(&emp.id).expect("store-assigned id is well-formed")
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = repo().await;
        let a = repo.create(input("Ann", Some(50000.into()))).await.unwrap();
        let b = repo.create(input("Bob", None)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(EmployeeId::is_valid(&a.id));
        assert_eq!(a.name.as_deref(), Some("Ann"));
        assert_eq!(a.salary, Some(Number::from(50000)));
        assert_eq!(b.salary, None);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_created_record() {
        let repo = repo().await;
        let created = repo.create(input("Ann", Some(50000.into()))).await.unwrap();
        let found = repo.find_by_id(&id_of(&created)).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_salary_number_kind_survives_the_store() {
        let repo = repo().await;
        let whole = repo.create(input("Ann", Some(50000.into()))).await.unwrap();
        let fraction = repo.create(input("Bob", Number::from_f64(1.5))).await.unwrap();

        let whole = repo.find_by_id(&id_of(&whole)).await.unwrap().unwrap();
        let fraction = repo.find_by_id(&id_of(&fraction)).await.unwrap().unwrap();

        assert_eq!(serde_json::to_value(&whole).unwrap()["salary"], json!(50000));
        assert_eq!(serde_json::to_value(&fraction).unwrap()["salary"], json!(1.5));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = repo().await;
        let id = EmployeeId::parse("aaaaaaaaaaaaaaaaaaaa").unwrap();
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_overwrites_all_fields() {
        let repo = repo().await;
        let created = repo.create(input("Ann", Some(50000.into()))).await.unwrap();
        let id = id_of(&created);

        let replaced = repo
            .replace(
                &id,
                EmployeeInput {
                    name: Some("Ann B".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name.as_deref(), Some("Ann B"));
        assert_eq!(replaced.position, None);
        assert_eq!(replaced.office, None);
        assert_eq!(replaced.salary, None);

        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn test_replace_missing_does_not_create() {
        let repo = repo().await;
        let id = EmployeeId::parse("bbbbbbbbbbbbbbbbbbbb").unwrap();
        assert_eq!(repo.replace(&id, input("Ghost", None)).await.unwrap(), None);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let repo = repo().await;
        let created = repo.create(input("Ann", Some(1.into()))).await.unwrap();
        let id = id_of(&created);

        assert_eq!(repo.delete(&id).await.unwrap(), Some(created));
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
        assert_eq!(repo.delete(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_counts_after_creates_and_deletes() {
        let repo = repo().await;
        let mut created = Vec::new();
        for i in 0..5 {
            created.push(repo.create(input(&format!("E{i}"), None)).await.unwrap());
        }
        for emp in created.iter().take(2) {
            repo.delete(&id_of(emp)).await.unwrap();
        }
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_on_disk_store_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("employees.db");
        let config = Config::with_overrides(path.to_string_lossy(), 0);

        let db = DbService::new(&config).await.unwrap();
        let repo = EmployeeRepository::new(db.db);
        let created = repo.create(input("Ann", None)).await.unwrap();
        let found = repo.find_by_id(&id_of(&created)).await.unwrap();
        assert_eq!(found, Some(created));
    }
}
