//! Entity trait implementation for the [`Employee`] domain type.

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Employee, EmployeeCreate, EmployeeUpdate};

#[async_trait]
impl ActorEntity for Employee {
    type Id = String;
    type CreateParams = EmployeeCreate;
    type UpdateParams = EmployeeUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: String, params: EmployeeCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("employee name must not be empty".to_string());
        }
        let mut employee = Employee::new(id, params.name, params.role);
        employee.vehicle = params.vehicle;
        Ok(employee)
    }

    async fn on_update(&mut self, update: EmployeeUpdate, _ctx: &Self::Context) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(vehicle) = update.vehicle {
            self.vehicle = Some(vehicle);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: Self::Action, _ctx: &Self::Context) -> Result<Self::ActionResult, String> {
        Ok(())
    }
}
