//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::Employee;
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, nombre, apellido_paterno, apellido_materno, curp, telefono, sexo, estatus";

/// All employees in storage order, regardless of status
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM empleados ORDER BY id");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM empleados WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_by_status(pool: &SqlitePool, status: i32) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM empleados WHERE estatus = ? ORDER BY id");
    let employees = sqlx::query_as::<_, Employee>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

/// Insert when `id` is `None`, otherwise upsert under the given id
///
/// Returns the stored row.
pub async fn save(pool: &SqlitePool, data: Employee) -> RepoResult<Employee> {
    let id = match data.id {
        None => {
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO empleados (nombre, apellido_paterno, apellido_materno, curp, telefono, sexo, estatus) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
            )
            .bind(&data.first_name)
            .bind(&data.paternal_surname)
            .bind(&data.maternal_surname)
            .bind(&data.national_id)
            .bind(&data.phone)
            .bind(&data.sex)
            .bind(data.status)
            .fetch_one(pool)
            .await?
        }
        Some(id) => {
            sqlx::query(
                "INSERT INTO empleados (id, nombre, apellido_paterno, apellido_materno, curp, telefono, sexo, estatus) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
                 ON CONFLICT(id) DO UPDATE SET \
                    nombre = excluded.nombre, \
                    apellido_paterno = excluded.apellido_paterno, \
                    apellido_materno = excluded.apellido_materno, \
                    curp = excluded.curp, \
                    telefono = excluded.telefono, \
                    sexo = excluded.sexo, \
                    estatus = excluded.estatus",
            )
            .bind(id)
            .bind(&data.first_name)
            .bind(&data.paternal_surname)
            .bind(&data.maternal_surname)
            .bind(&data.national_id)
            .bind(&data.phone)
            .bind(&data.sex)
            .bind(data.status)
            .execute(pool)
            .await?;
            id
        }
    };

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to save employee {id}")))
}

/// Physically remove a row
///
/// The service never calls this; deletion goes through the status flag.
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM empleados WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM empleados")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
