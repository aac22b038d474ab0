//! `PostgreSQL` repository implementation for inspection task storage.

use super::{
    models::{InspectionTaskChangeset, InspectionTaskRow, NewInspectionTaskRow},
    schema::inspection_tasks,
};
use crate::database::LazyPgPool;
use crate::inspection::{
    domain::{
        EmailAddress, InspectionStatus, InspectionTask, InspectionTaskChanges,
        InspectionTaskFilter, InspectionTaskId, InspectionType, PersistedInspectionTaskData,
        PhoneNumber,
    },
    ports::{
        InspectionTaskRepository, InspectionTaskRepositoryError, InspectionTaskRepositoryResult,
    },
};
use crate::property::domain::PropertyAddress;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed inspection task repository.
#[derive(Debug, Clone)]
pub struct PostgresInspectionTaskRepository {
    pool: LazyPgPool,
}

impl PostgresInspectionTaskRepository {
    /// Creates a repository over the shared lazy pool.
    #[must_use]
    pub const fn new(pool: LazyPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> InspectionTaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> InspectionTaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self
            .pool
            .acquire()
            .await
            .map_err(InspectionTaskRepositoryError::persistence)?;
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(InspectionTaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(InspectionTaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl InspectionTaskRepository for PostgresInspectionTaskRepository {
    async fn store(&self, task: &InspectionTask) -> InspectionTaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(inspection_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        InspectionTaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => InspectionTaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: InspectionTaskId,
    ) -> InspectionTaskRepositoryResult<Option<InspectionTask>> {
        self.run_blocking(move |connection| {
            let row = find_row(connection, id)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(
        &self,
        filter: InspectionTaskFilter,
    ) -> InspectionTaskRepositoryResult<Vec<InspectionTask>> {
        self.run_blocking(move |connection| {
            let completed = InspectionStatus::Completed.as_str();
            let base = inspection_tasks::table
                .select(InspectionTaskRow::as_select())
                .into_boxed();
            let query = match filter {
                InspectionTaskFilter::All => base.order((
                    inspection_tasks::scheduled_at.asc().nulls_last(),
                    inspection_tasks::created_at.desc(),
                )),
                InspectionTaskFilter::Active => base
                    .filter(inspection_tasks::status.ne(completed))
                    .order((
                        inspection_tasks::scheduled_at.asc().nulls_last(),
                        inspection_tasks::created_at.desc(),
                    )),
                InspectionTaskFilter::Completed => base
                    .filter(inspection_tasks::status.eq(completed))
                    .order((
                        inspection_tasks::scheduled_at.desc().nulls_last(),
                        inspection_tasks::created_at.desc(),
                    )),
            };
            let rows = query
                .load::<InspectionTaskRow>(connection)
                .map_err(InspectionTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn apply_changes(
        &self,
        id: InspectionTaskId,
        changes: &InspectionTaskChanges,
        updated_at: DateTime<Utc>,
    ) -> InspectionTaskRepositoryResult<InspectionTask> {
        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or(InspectionTaskRepositoryError::NotFound(id));
        }

        let changeset = to_changeset(changes, updated_at);
        self.run_blocking(move |connection| {
            let row = diesel::update(
                inspection_tasks::table.filter(inspection_tasks::id.eq(id.into_inner())),
            )
            .set(&changeset)
            .returning(InspectionTaskRow::as_returning())
            .get_result::<InspectionTaskRow>(connection)
            .optional()
            .map_err(InspectionTaskRepositoryError::persistence)?
            .ok_or(InspectionTaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: InspectionTaskId) -> InspectionTaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                inspection_tasks::table.filter(inspection_tasks::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(InspectionTaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(InspectionTaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn find_row(
    connection: &mut PgConnection,
    id: InspectionTaskId,
) -> InspectionTaskRepositoryResult<Option<InspectionTaskRow>> {
    inspection_tasks::table
        .filter(inspection_tasks::id.eq(id.into_inner()))
        .select(InspectionTaskRow::as_select())
        .first::<InspectionTaskRow>(connection)
        .optional()
        .map_err(InspectionTaskRepositoryError::persistence)
}

fn to_new_row(task: &InspectionTask) -> NewInspectionTaskRow {
    NewInspectionTaskRow {
        id: task.id().into_inner(),
        address: task.address().as_str().to_owned(),
        inspection_type: task.inspection_type().as_str().to_owned(),
        phone: task.phone().map(|phone| phone.as_str().to_owned()),
        email: task.email().map(|email| email.as_str().to_owned()),
        scheduled_at: task.scheduled_at(),
        status: task.status().as_str().to_owned(),
        notes: task.notes().map(str::to_owned),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(
    changes: &InspectionTaskChanges,
    updated_at: DateTime<Utc>,
) -> InspectionTaskChangeset {
    InspectionTaskChangeset {
        inspection_type: changes
            .inspection_type
            .map(|kind| kind.as_str().to_owned()),
        phone: changes
            .phone
            .as_ref()
            .map(|phone| phone.as_ref().map(|value| value.as_str().to_owned())),
        email: changes
            .email
            .as_ref()
            .map(|email| email.as_ref().map(|value| value.as_str().to_owned())),
        scheduled_at: changes.scheduled_at,
        status: changes.status.map(|status| status.as_str().to_owned()),
        notes: changes.notes.clone(),
        updated_at,
    }
}

fn row_to_task(row: InspectionTaskRow) -> InspectionTaskRepositoryResult<InspectionTask> {
    let InspectionTaskRow {
        id,
        address,
        inspection_type,
        phone,
        email,
        scheduled_at,
        status,
        notes,
        created_at,
        updated_at,
    } = row;

    let data = PersistedInspectionTaskData {
        id: InspectionTaskId::from_uuid(id),
        address: PropertyAddress::new(address)
            .map_err(InspectionTaskRepositoryError::persistence)?,
        inspection_type: InspectionType::try_from(inspection_type.as_str())
            .map_err(InspectionTaskRepositoryError::persistence)?,
        phone: PhoneNumber::parse_optional(phone.as_deref())
            .map_err(InspectionTaskRepositoryError::persistence)?,
        email: EmailAddress::parse_optional(email.as_deref())
            .map_err(InspectionTaskRepositoryError::persistence)?,
        scheduled_at,
        status: InspectionStatus::try_from(status.as_str())
            .map_err(InspectionTaskRepositoryError::persistence)?,
        notes,
        created_at,
        updated_at,
    };
    Ok(InspectionTask::from_persisted(data))
}
