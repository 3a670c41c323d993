use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::employee_actor::EmployeeError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeRole, EmployeeUpdate};

/// Client for interacting with the employee actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, employee))]
    pub async fn create_employee(&self, employee: EmployeeCreate) -> Result<EmployeeId, EmployeeError> {
        debug!(name = %employee.name, "Sending create_employee to actor");
        self.inner.create(employee).await.map_err(Self::map_error)
    }

    /// All employees with the given role, sorted by id for stable enumeration.
    #[instrument(skip(self))]
    pub async fn find_by_role(&self, role: EmployeeRole) -> Result<Vec<Employee>, EmployeeError> {
        let mut employees: Vec<Employee> = self
            .inner
            .list()
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .filter(|e| e.role == role)
            .collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(employees)
    }

    #[instrument(skip(self))]
    pub async fn update_employee(&self, id: EmployeeId, update: EmployeeUpdate) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => EmployeeError::NotFound(id),
            other => EmployeeError::ActorCommunicationError(other.to_string()),
        }
    }
}
