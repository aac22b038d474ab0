//! `PostgreSQL` integration tests for the inspection task store.

use super::helpers::{
    SteppingClock, TestDatabase, address, october, postgres_cluster, task_at, test_runtime,
};
use inspection_desk::{
    inspection::{
        adapters::postgres::PostgresInspectionTaskRepository,
        domain::{
            EmailAddress, InspectionStatus, InspectionTask, InspectionTaskChanges,
            InspectionTaskFilter, InspectionTaskId, InspectionType, NewInspectionTask, PhoneNumber,
        },
        ports::{InspectionTaskRepository, InspectionTaskRepositoryError},
    },
    property::{adapters::postgres::PostgresAddressRegistry, ports::AddressRegistry},
};
use mockable::Clock;
use pg_embedded_setup_unpriv::TestCluster;
use rstest::rstest;
use tokio::runtime::Runtime;

const ADDRESS: &str = "12 Main St";

struct Store {
    repo: PostgresInspectionTaskRepository,
    runtime: Runtime,
    clock: SteppingClock,
}

/// Registers [`ADDRESS`] and opens a repository over `database`.
fn open_store(database: &TestDatabase) -> Result<Store, eyre::Report> {
    let runtime = test_runtime()?;
    let registry = PostgresAddressRegistry::new(database.pool(), SteppingClock::default());
    runtime.block_on(registry.register(&address(ADDRESS)?))?;
    Ok(Store {
        repo: PostgresInspectionTaskRepository::new(database.pool()),
        runtime,
        clock: SteppingClock::default(),
    })
}

fn ids(tasks: &[InspectionTask]) -> Vec<InspectionTaskId> {
    tasks.iter().map(InspectionTask::id).collect()
}

#[rstest]
fn stored_task_round_trips_with_every_field(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_round_trip")?;
    let store = open_store(&database)?;

    let mut input = NewInspectionTask::new(address(ADDRESS)?, InspectionType::MoveOut);
    input.phone = Some(PhoneNumber::new("+44 20 7946 0000")?);
    input.email = Some(EmailAddress::new("tenant@example.com")?);
    input.scheduled_at = Some(october(14, 10)?);
    input.status = Some(InspectionStatus::AwaitingInspection);
    input.notes = Some("Side gate is locked".to_owned());
    let task = InspectionTask::schedule(input, &store.clock);

    store.runtime.block_on(store.repo.store(&task))?;
    let stored = store
        .runtime
        .block_on(store.repo.find_by_id(task.id()))?
        .ok_or_else(|| eyre::eyre!("stored task not found"))?;
    let missing = store
        .runtime
        .block_on(store.repo.find_by_id(InspectionTaskId::new()))?;

    eyre::ensure!(stored == task, "expected {task:?}, found {stored:?}");
    eyre::ensure!(missing.is_none(), "unknown id should not resolve");
    Ok(())
}

#[rstest]
fn storing_the_same_task_twice_is_rejected(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_duplicate")?;
    let store = open_store(&database)?;
    let task = task_at(ADDRESS, InspectionStatus::NeedsScheduling, None, &store.clock)?;
    store.runtime.block_on(store.repo.store(&task))?;

    let result = store.runtime.block_on(store.repo.store(&task));

    eyre::ensure!(
        matches!(result, Err(InspectionTaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected duplicate rejection, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn each_filter_orders_scheduled_visits_before_unscheduled(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_ordering")?;
    let store = open_store(&database)?;
    let clock = &store.clock;

    // Creation order matters: the clock steps forward on every task.
    let later = task_at(ADDRESS, InspectionStatus::EmailSent, Some(october(20, 9)?), clock)?;
    let sooner = task_at(ADDRESS, InspectionStatus::NeedsScheduling, Some(october(6, 9)?), clock)?;
    let unscheduled_old = task_at(ADDRESS, InspectionStatus::NeedsScheduling, None, clock)?;
    let unscheduled_new = task_at(ADDRESS, InspectionStatus::AwaitingInspection, None, clock)?;
    let done_early = task_at(ADDRESS, InspectionStatus::Completed, Some(october(1, 9)?), clock)?;
    let done_late = task_at(ADDRESS, InspectionStatus::Completed, Some(october(3, 9)?), clock)?;
    let done_unscheduled = task_at(ADDRESS, InspectionStatus::Completed, None, clock)?;
    for task in [
        &later,
        &sooner,
        &unscheduled_old,
        &unscheduled_new,
        &done_early,
        &done_late,
        &done_unscheduled,
    ] {
        store.runtime.block_on(store.repo.store(task))?;
    }

    let active = store
        .runtime
        .block_on(store.repo.list(InspectionTaskFilter::Active))?;
    let completed = store
        .runtime
        .block_on(store.repo.list(InspectionTaskFilter::Completed))?;
    let all = store
        .runtime
        .block_on(store.repo.list(InspectionTaskFilter::All))?;

    eyre::ensure!(
        ids(&active) == [sooner.id(), later.id(), unscheduled_new.id(), unscheduled_old.id()],
        "active tasks out of order: {:?}",
        ids(&active)
    );
    eyre::ensure!(
        ids(&completed) == [done_late.id(), done_early.id(), done_unscheduled.id()],
        "completed tasks out of order: {:?}",
        ids(&completed)
    );
    eyre::ensure!(
        ids(&all)
            == [
                done_early.id(),
                done_late.id(),
                sooner.id(),
                later.id(),
                done_unscheduled.id(),
                unscheduled_new.id(),
                unscheduled_old.id(),
            ],
        "all tasks out of order: {:?}",
        ids(&all)
    );
    Ok(())
}

#[rstest]
fn partial_updates_clear_and_merge_fields(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_partial_update")?;
    let store = open_store(&database)?;

    let mut input = NewInspectionTask::new(address(ADDRESS)?, InspectionType::Routine);
    input.phone = Some(PhoneNumber::new("0412 345 678")?);
    input.email = Some(EmailAddress::new("tenant@example.com")?);
    input.scheduled_at = Some(october(14, 10)?);
    input.notes = Some("Ring the bell twice".to_owned());
    let task = InspectionTask::schedule(input, &store.clock);
    store.runtime.block_on(store.repo.store(&task))?;

    let clear_email = InspectionTaskChanges {
        email: Some(None),
        notes: Some(Some("Keys with the concierge".to_owned())),
        ..InspectionTaskChanges::default()
    };
    let first_update = store.clock.utc();
    let cleared = store
        .runtime
        .block_on(store.repo.apply_changes(task.id(), &clear_email, first_update))?;

    let advance = InspectionTaskChanges::status(InspectionStatus::EmailSent);
    let second_update = store.clock.utc();
    let merged = store
        .runtime
        .block_on(store.repo.apply_changes(task.id(), &advance, second_update))?;
    let stored = store
        .runtime
        .block_on(store.repo.find_by_id(task.id()))?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;

    eyre::ensure!(cleared.email().is_none(), "email should be cleared to NULL");
    eyre::ensure!(cleared.updated_at() == first_update, "update time not stamped");
    eyre::ensure!(stored == merged, "returned task differs from stored row");
    eyre::ensure!(stored.email().is_none(), "cleared email came back");
    eyre::ensure!(
        stored.notes() == Some("Keys with the concierge"),
        "notes change lost"
    );
    eyre::ensure!(
        stored.status() == InspectionStatus::EmailSent,
        "status change lost"
    );
    eyre::ensure!(stored.phone() == task.phone(), "untouched phone changed");
    eyre::ensure!(
        stored.scheduled_at() == task.scheduled_at(),
        "untouched visit time changed"
    );
    eyre::ensure!(stored.created_at() == task.created_at(), "creation time changed");
    eyre::ensure!(stored.updated_at() == second_update, "update time not refreshed");
    Ok(())
}

#[rstest]
fn empty_change_set_leaves_task_untouched(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_empty_update")?;
    let store = open_store(&database)?;
    let task = task_at(ADDRESS, InspectionStatus::NeedsScheduling, None, &store.clock)?;
    store.runtime.block_on(store.repo.store(&task))?;

    let unchanged = store.runtime.block_on(store.repo.apply_changes(
        task.id(),
        &InspectionTaskChanges::default(),
        store.clock.utc(),
    ))?;

    eyre::ensure!(unchanged == task, "empty change set modified the task");
    Ok(())
}

#[rstest]
fn update_and_delete_of_missing_task_are_not_found(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_missing")?;
    let store = open_store(&database)?;
    let missing = InspectionTaskId::new();

    let updated = store.runtime.block_on(store.repo.apply_changes(
        missing,
        &InspectionTaskChanges::status(InspectionStatus::Completed),
        store.clock.utc(),
    ));
    let deleted = store.runtime.block_on(store.repo.delete(missing));

    eyre::ensure!(
        matches!(updated, Err(InspectionTaskRepositoryError::NotFound(id)) if id == missing),
        "expected not found on update, got {updated:?}"
    );
    eyre::ensure!(
        matches!(deleted, Err(InspectionTaskRepositoryError::NotFound(id)) if id == missing),
        "expected not found on delete, got {deleted:?}"
    );
    Ok(())
}

#[rstest]
fn delete_removes_only_the_target_task(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "tasks_delete")?;
    let store = open_store(&database)?;
    let doomed = task_at(ADDRESS, InspectionStatus::NeedsScheduling, None, &store.clock)?;
    let kept = task_at(ADDRESS, InspectionStatus::NeedsScheduling, None, &store.clock)?;
    store.runtime.block_on(store.repo.store(&doomed))?;
    store.runtime.block_on(store.repo.store(&kept))?;

    store.runtime.block_on(store.repo.delete(doomed.id()))?;

    eyre::ensure!(
        store.runtime.block_on(store.repo.find_by_id(doomed.id()))?.is_none(),
        "deleted task is still retrievable"
    );
    let survivor = store.runtime.block_on(store.repo.find_by_id(kept.id()))?;
    eyre::ensure!(survivor.as_ref() == Some(&kept), "sibling task changed: {survivor:?}");
    Ok(())
}
