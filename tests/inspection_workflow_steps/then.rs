//! Then steps for inspection workflow BDD scenarios.

use super::world::{InspectionWorkflowWorld, run_async};
use inspection_desk::{
    inspection::{
        domain::{InspectionStatus, InspectionTaskFilter},
        services::InspectionTaskServiceError,
    },
    notification::services::NotificationError,
};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &InspectionWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = InspectionStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task(0)?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the task has no scheduled time")]
fn task_unscheduled(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world.task(0)?;
    eyre::ensure!(
        task.scheduled_at().is_none(),
        "expected no scheduled time, found {:?}",
        task.scheduled_at()
    );
    Ok(())
}

#[then(r#"the task address is "{address}""#)]
fn task_address_is(world: &InspectionWorkflowWorld, address: String) -> Result<(), eyre::Report> {
    let task = world.task(0)?;
    eyre::ensure!(
        task.address().as_str() == address,
        "expected address {address}, found {}",
        task.address()
    );
    Ok(())
}

#[then("sending fails because the task has no recipient")]
fn send_fails_missing_recipient(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_send_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing send result"))?;
    if !matches!(result, Err(NotificationError::MissingRecipient(_))) {
        return Err(eyre::eyre!("expected missing recipient error, got {result:?}"));
    }
    Ok(())
}

#[then("no email was delivered")]
fn nothing_delivered(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let delivered = world.transport.delivered()?;
    eyre::ensure!(delivered.is_empty(), "expected an empty outbox, found {}", delivered.len());
    Ok(())
}

#[then(r#"one email was delivered to "{recipient}" with a subject containing "{fragment}""#)]
fn one_email_delivered(
    world: &InspectionWorkflowWorld,
    recipient: String,
    fragment: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_send_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing send result"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected delivery to succeed, got {err}"));
    }

    let delivered = world.transport.delivered()?;
    let [email] = delivered.as_slice() else {
        return Err(eyre::eyre!("expected exactly one email, found {}", delivered.len()));
    };
    eyre::ensure!(
        email.recipient().as_str() == recipient,
        "expected recipient {recipient}, found {}",
        email.recipient().as_str()
    );
    eyre::ensure!(
        email.subject().contains(&fragment),
        "subject '{}' does not mention {fragment}",
        email.subject()
    );
    Ok(())
}

#[then("the first task can no longer be found")]
fn first_task_gone(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let id = world.task(0)?.id();
    match run_async(world.service.get(id)) {
        Err(InspectionTaskServiceError::NotFound(missing)) if missing == id => Ok(()),
        other => Err(eyre::eyre!("expected task {id} to be gone, got {other:?}")),
    }
}

#[then("the second task is unchanged")]
fn second_task_unchanged(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let expected = world.task(1)?;
    let stored = run_async(world.service.get(expected.id()))?;
    eyre::ensure!(
        &stored == expected,
        "second task changed: expected {expected:?}, found {stored:?}"
    );
    Ok(())
}

#[then("the request fails because the address is not registered")]
fn request_rejected_unknown_address(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    if !matches!(result, Err(InspectionTaskServiceError::UnknownAddress(_))) {
        return Err(eyre::eyre!("expected unknown address error, got {result:?}"));
    }
    Ok(())
}

#[then("no tasks are stored")]
fn no_tasks_stored(world: &InspectionWorkflowWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.service.list(InspectionTaskFilter::All))?;
    eyre::ensure!(stored.is_empty(), "expected an empty store, found {} tasks", stored.len());
    Ok(())
}
