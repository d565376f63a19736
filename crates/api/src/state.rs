use std::sync::Arc;

use idm_core::record::RecordKind;
use idm_core::service::{RecordService, RecordUseCases};
use idm_db::repositories::RecordRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used by the health check.
    pub pool: idm_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Use cases for the `employee` table.
    pub employees: Arc<dyn RecordUseCases>,
    /// Use cases for the `role` table.
    pub roles: Arc<dyn RecordUseCases>,
}

impl AppState {
    /// Wire PostgreSQL-backed services for both record tables.
    pub fn from_pool(pool: idm_db::DbPool, config: ServerConfig) -> Self {
        let employees = RecordService::new(RecordRepo::employees(pool.clone()), RecordKind::Employee);
        let roles = RecordService::new(RecordRepo::roles(pool.clone()), RecordKind::Role);
        Self {
            pool,
            config: Arc::new(config),
            employees: Arc::new(employees),
            roles: Arc::new(roles),
        }
    }

    /// The use cases serving `kind`.
    pub fn records(&self, kind: RecordKind) -> &dyn RecordUseCases {
        match kind {
            RecordKind::Employee => self.employees.as_ref(),
            RecordKind::Role => self.roles.as_ref(),
        }
    }
}
