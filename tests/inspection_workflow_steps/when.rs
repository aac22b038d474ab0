//! When steps for inspection workflow BDD scenarios.

use super::world::{InspectionWorkflowWorld, run_async};
use eyre::WrapErr;
use inspection_desk::inspection::services::{
    CreateInspectionTaskRequest, UpdateInspectionTaskRequest,
};
use rstest_bdd_macros::when;

fn update_first_task(
    world: &mut InspectionWorkflowWorld,
    request: UpdateInspectionTaskRequest,
) -> Result<(), eyre::Report> {
    let id = world.task(0)?.id();
    let updated = run_async(world.service.update(id, request)).wrap_err("update inspection task")?;
    if let Some(slot) = world.tasks.first_mut() {
        *slot = updated;
    }
    Ok(())
}

#[when(r#"the task status is updated to "{status}""#)]
fn update_status(world: &mut InspectionWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    update_first_task(world, UpdateInspectionTaskRequest::new().with_status(status))
}

#[when(r#"the task email is updated to "{email}""#)]
fn update_email(world: &mut InspectionWorkflowWorld, email: String) -> Result<(), eyre::Report> {
    update_first_task(world, UpdateInspectionTaskRequest::new().with_email(email))
}

#[when("the inspection notice is sent")]
fn send_notice(world: &mut InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world.task(0)?.clone();
    world.last_send_result = Some(run_async(world.dispatcher.send(&task)));
    Ok(())
}

#[when("the first task is deleted")]
fn delete_first_task(world: &mut InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let id = world.task(0)?.id();
    run_async(world.service.delete(id)).wrap_err("delete first task")?;
    Ok(())
}

#[when(r#"a routine inspection task is requested for "{address}""#)]
fn request_task(world: &mut InspectionWorkflowWorld, address: String) {
    let result = run_async(
        world
            .service
            .create(CreateInspectionTaskRequest::new(address, "routine")),
    );
    world.last_create_result = Some(result);
}
