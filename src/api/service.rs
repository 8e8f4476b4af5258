//! Fleet Data Service
//!
//! Resource-level calls against the fleet REST backend.

use async_trait::async_trait;

use super::client::RestClient;
use super::error::ApiResult;
use crate::state::models::{
    AfternoonShiftVehicle, ChartStat, CountStat, Department, Role, UserRecord,
};

pub const CHARTS_PATH: &str = "charts";
pub const STATS_PATH: &str = "stats";
pub const AFTERNOON_SHIFTS_PATH: &str = "afternoonShifts";
pub const USERS_PATH: &str = "users";
pub const ROLES_PATH: &str = "roles";
pub const DEPARTMENTS_PATH: &str = "departments";

/// Data service bound to one REST backend
#[derive(Debug, Clone)]
pub struct FleetService {
    client: RestClient,
}

impl FleetService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    /// Fetch capacity statistics for the doughnut charts
    pub async fn chart_stats(&self) -> ApiResult<Vec<ChartStat>> {
        self.client.get_json(CHARTS_PATH).await
    }

    /// Fetch summary counts for the tiles
    pub async fn count_stats(&self) -> ApiResult<Vec<CountStat>> {
        self.client.get_json(STATS_PATH).await
    }

    /// Fetch the afternoon shift vehicle list
    pub async fn afternoon_shift_vehicles(&self) -> ApiResult<Vec<AfternoonShiftVehicle>> {
        self.client.get_json(AFTERNOON_SHIFTS_PATH).await
    }
}

/// User management surface used by the add-user form
#[async_trait(?Send)]
pub trait UserApi {
    async fn users(&self) -> ApiResult<Vec<UserRecord>>;

    async fn roles(&self) -> ApiResult<Vec<Role>>;

    async fn departments(&self) -> ApiResult<Vec<Department>>;

    async fn create_user(&self, user: &UserRecord) -> ApiResult<UserRecord>;

    async fn update_user(&self, id: &str, user: &UserRecord) -> ApiResult<UserRecord>;
}

#[async_trait(?Send)]
impl UserApi for FleetService {
    async fn users(&self) -> ApiResult<Vec<UserRecord>> {
        self.client.get_json(USERS_PATH).await
    }

    async fn roles(&self) -> ApiResult<Vec<Role>> {
        self.client.get_json(ROLES_PATH).await
    }

    async fn departments(&self) -> ApiResult<Vec<Department>> {
        self.client.get_json(DEPARTMENTS_PATH).await
    }

    async fn create_user(&self, user: &UserRecord) -> ApiResult<UserRecord> {
        self.client.post_json(USERS_PATH, user).await
    }

    async fn update_user(&self, id: &str, user: &UserRecord) -> ApiResult<UserRecord> {
        self.client
            .put_json(&format!("{}/{}", USERS_PATH, id), user)
            .await
    }
}

/// Everything the add-user form needs before it can prefill
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFormData {
    pub users: Vec<UserRecord>,
    pub roles: Vec<Role>,
    pub departments: Vec<Department>,
}

/// Fetch users, roles and departments concurrently.
///
/// The first failure fails the whole join; partial results are dropped.
pub async fn load_user_form_data<A: UserApi + ?Sized>(api: &A) -> ApiResult<UserFormData> {
    let (users, roles, departments) =
        futures::future::try_join3(api.users(), api.roles(), api.departments()).await?;

    Ok(UserFormData {
        users,
        roles,
        departments,
    })
}

/// Settle a list fetch: failures are logged and render as an empty list
pub fn or_empty<T>(result: ApiResult<Vec<T>>, resource: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %e, resource, "Error fetching list");
            Vec::new()
        }
    }
}
