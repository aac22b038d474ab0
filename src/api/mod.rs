//! HTTP/JSON interface.
//!
//! Every response is wrapped in [`ApiResponse`]. Validation failures map to
//! 400, unknown tasks (including unparseable identifiers) to 404, and store
//! or mail transport failures to 500.
//!
//! | Method | Path | Action |
//! |--------|------|--------|
//! | `GET` | `/health` | store round-trip check |
//! | `GET` | `/properties` | list registered addresses |
//! | `GET` | `/tasks?filter=` | list tasks, active by default |
//! | `POST` | `/tasks` | create a task |
//! | `GET` | `/tasks/completed` | list completed tasks |
//! | `POST` | `/tasks/send-email` | notify the tenant of a task |
//! | `GET` | `/tasks/{id}` | fetch a task |
//! | `PUT` | `/tasks/{id}` | partially update a task |
//! | `DELETE` | `/tasks/{id}` | delete a task |
//! | `POST` | `/tasks/{id}/advance` | move a task to its next status |

mod envelope;
mod error;
mod handlers;
pub mod payload;

pub use envelope::ApiResponse;
pub use error::ApiError;
pub use handlers::HealthReport;

use crate::inspection::{ports::InspectionTaskRepository, services::InspectionTaskService};
use crate::notification::{ports::MailTransport, services::NotificationDispatcher};
use crate::property::ports::AddressRegistry;
use axum::{
    Router,
    routing::{get, post},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service with its adapters erased behind their ports.
pub type SharedTaskService =
    InspectionTaskService<dyn InspectionTaskRepository, dyn AddressRegistry, DefaultClock>;

/// Dispatcher with its transport erased behind the port.
pub type SharedDispatcher = NotificationDispatcher<dyn MailTransport>;

/// Dependencies shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    tasks: SharedTaskService,
    registry: Arc<dyn AddressRegistry>,
    notifier: SharedDispatcher,
}

impl AppState {
    /// Bundles the services behind the router.
    #[must_use]
    pub const fn new(
        tasks: SharedTaskService,
        registry: Arc<dyn AddressRegistry>,
        notifier: SharedDispatcher,
    ) -> Self {
        Self {
            tasks,
            registry,
            notifier,
        }
    }
}

/// Builds the API router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/properties", get(handlers::list_properties))
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/tasks/completed", get(handlers::list_completed_tasks))
        .route("/tasks/send-email", post(handlers::send_email))
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/tasks/:id/advance", post(handlers::advance_task))
        .with_state(state)
}
