//! 服务模块
//!
//! - [`EmployeeService`] - 员工业务逻辑 (列表、查询、保存、软删除)

pub mod employee;

pub use employee::{EmployeeService, ServiceError, ServiceResult};
