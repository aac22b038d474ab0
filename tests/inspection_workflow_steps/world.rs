//! Shared world state for inspection workflow BDD scenarios.

use std::sync::Arc;

use inspection_desk::{
    inspection::{
        adapters::memory::InMemoryInspectionTaskRepository,
        domain::InspectionTask,
        services::{InspectionTaskService, InspectionTaskServiceError},
    },
    notification::{
        adapters::memory::RecordingMailTransport,
        domain::{NoticeComposer, NoticeLanguage},
        services::{NotificationDispatcher, NotificationError},
    },
    property::adapters::memory::InMemoryAddressRegistry,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    InspectionTaskService<InMemoryInspectionTaskRepository, InMemoryAddressRegistry, DefaultClock>;

/// Scenario world for inspection workflow behaviour tests.
pub struct InspectionWorkflowWorld {
    pub registry: Arc<InMemoryAddressRegistry>,
    pub service: TestTaskService,
    pub transport: Arc<RecordingMailTransport>,
    pub dispatcher: NotificationDispatcher<RecordingMailTransport>,
    pub tasks: Vec<InspectionTask>,
    pub last_create_result: Option<Result<InspectionTask, InspectionTaskServiceError>>,
    pub last_send_result: Option<Result<(), NotificationError>>,
}

impl InspectionWorkflowWorld {
    /// Creates a world with an empty registry, store and outbox.
    ///
    /// # Panics
    ///
    /// Panics when the built-in notice templates fail to parse.
    #[must_use]
    pub fn new() -> Self {
        let registry = Arc::new(InMemoryAddressRegistry::new());
        let service = InspectionTaskService::new(
            Arc::new(InMemoryInspectionTaskRepository::new()),
            Arc::clone(&registry),
            Arc::new(DefaultClock),
        );
        let transport = Arc::new(RecordingMailTransport::new());
        let composer = NoticeComposer::new(NoticeLanguage::English, "Property Management")
            .expect("notice templates parse");
        let dispatcher = NotificationDispatcher::new(Arc::clone(&transport), composer);

        Self {
            registry,
            service,
            transport,
            dispatcher,
            tasks: Vec::new(),
            last_create_result: None,
            last_send_result: None,
        }
    }

    /// Returns the task created at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer tasks were created.
    pub fn task(&self, index: usize) -> Result<&InspectionTask, eyre::Report> {
        self.tasks
            .get(index)
            .ok_or_else(|| eyre::eyre!("scenario world has no task at position {index}"))
    }
}

impl Default for InspectionWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> InspectionWorkflowWorld {
    InspectionWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
