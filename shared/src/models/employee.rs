//! Employee Model

use serde::{Deserialize, Deserializer, Serialize};

/// Status flag of a visible employee
pub const STATUS_ACTIVE: i32 = 1;
/// Status flag of a logically deleted employee
pub const STATUS_DELETED: i32 = 0;

/// Employee entity (table `empleados`)
///
/// JSON and column names keep the Spanish naming of the public API.
/// The same type is used as request body: `id` is optional and ignored or
/// overridden depending on the endpoint, missing text fields are `null` and
/// a missing `estatus` defaults to `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    /// Surrogate key, assigned by the database on insert
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "nombre")]
    #[cfg_attr(feature = "db", sqlx(rename = "nombre"))]
    pub first_name: Option<String>,
    #[serde(default, rename = "apellidoPaterno")]
    #[cfg_attr(feature = "db", sqlx(rename = "apellido_paterno"))]
    pub paternal_surname: Option<String>,
    #[serde(default, rename = "apellidoMaterno")]
    #[cfg_attr(feature = "db", sqlx(rename = "apellido_materno"))]
    pub maternal_surname: Option<String>,
    /// CURP
    #[serde(default, rename = "curp")]
    #[cfg_attr(feature = "db", sqlx(rename = "curp"))]
    pub national_id: Option<String>,
    #[serde(default, rename = "telefono")]
    #[cfg_attr(feature = "db", sqlx(rename = "telefono"))]
    pub phone: Option<String>,
    #[serde(default, rename = "sexo")]
    #[cfg_attr(feature = "db", sqlx(rename = "sexo"))]
    pub sex: Option<String>,
    /// 1 = active, 0 = soft-deleted
    #[serde(default, rename = "estatus", deserialize_with = "null_as_zero")]
    #[cfg_attr(feature = "db", sqlx(rename = "estatus"))]
    pub status: i32,
}

/// `estatus` absent or `null` both read as 0
fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}

impl Employee {
    /// Whether the record is visible in listings
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Same record, pinned to `id`
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Drop an identifier equal to zero so the record is inserted as new
    pub fn without_zero_id(mut self) -> Self {
        if self.id == Some(0) {
            self.id = None;
        }
        self
    }
}
