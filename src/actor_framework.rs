use std::fmt::{Debug, Display};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::query::{Page, PageRequest};

// =============================================================================
// 1. THE ABSTRACTION (Traits, Ids and Patches)
// =============================================================================

/// Identifier handed out by a [`ResourceActor`] when a record is created.
pub trait SequentialId: Copy + Ord + Send + Sync + Display + Debug + 'static {
    /// The id given to the first record of a store that never held one.
    fn first() -> Self;
    /// The id that follows `self`.
    fn next(self) -> Self;
}

/// Trait that any record kept by a [`ResourceActor`] must implement.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: SequentialId;
    type CreateParams: Send + Debug;
    type Patch: Send + Debug;
    type Query: Send + Debug;

    /// Get the ID of the record
    fn id(&self) -> Self::Id;

    /// Construct the full record from the assigned ID and the caller's params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Self;

    /// Shallow merge: fields present in the patch overwrite, the rest stay.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Filters and orders the records a list request sees. Pagination is
    /// applied afterwards by the actor.
    fn select(records: &[Self], _query: &Self::Query) -> Vec<Self> {
        records.to_vec()
    }
}

/// Failures of the request/response plumbing itself. Absence of a record is
/// never an error; it travels back as `None` or `false`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the request")]
    ActorDropped,
}

/// Artificial delay applied by the actor before serving each kind of request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            create: Duration::from_millis(700),
            update: Duration::from_millis(500),
            delete: Duration::from_millis(600),
        }
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        query: T::Query,
        page: PageRequest,
        respond_to: Response<Page<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Sole owner of one ordered collection. Requests are served one at a time,
/// so every read-modify-write (id assignment included) is atomic with
/// respect to all other callers.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: Vec<T>,
    /// Highest id this store has ever held. Never decreases, so deleting the
    /// newest record does not free its id.
    last_id: Option<T::Id>,
    latency: Latency,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, latency: Latency) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            last_id: None,
            latency,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Seeds the collection, keeping the given order.
    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.last_id = self.last_id.max(records.iter().map(T::id).max());
        self.records = records;
        self
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!(records = self.records.len(), "Actor starting");
        let latency = self.latency;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { query, page, respond_to } => {
                    pause(latency.list).await;
                    let _ = respond_to.send(Ok(self.handle_list(&query, page)));
                }
                ResourceRequest::Get { id, respond_to } => {
                    pause(latency.get).await;
                    let _ = respond_to.send(Ok(self.handle_get(id)));
                }
                ResourceRequest::Create { params, respond_to } => {
                    pause(latency.create).await;
                    let _ = respond_to.send(Ok(self.handle_create(params)));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    pause(latency.update).await;
                    let _ = respond_to.send(Ok(self.handle_update(id, patch)));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    pause(latency.delete).await;
                    let _ = respond_to.send(Ok(self.handle_delete(id)));
                }
                ResourceRequest::Shutdown => {
                    info!("Actor shutting down");
                    break;
                }
            }
        }

        info!("Actor stopped");
    }

    fn handle_list(&self, query: &T::Query, page: PageRequest) -> Page<T> {
        let selected = T::select(&self.records, query);
        let page = Page::slice(selected, page);
        debug!(total = page.total, returned = page.items.len(), "List served");
        page
    }

    fn handle_get(&self, id: T::Id) -> Option<T> {
        let record = self.records.iter().find(|r| r.id() == id).cloned();
        if record.is_none() {
            debug!(id = %id, "Record not found");
        }
        record
    }

    fn handle_create(&mut self, params: T::CreateParams) -> T {
        let id = self.last_id.map_or_else(<T::Id as SequentialId>::first, <T::Id as SequentialId>::next);
        let record = T::from_create_params(id, params);
        self.last_id = Some(id);
        self.records.push(record.clone());
        info!(id = %id, "Record created");
        record
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Option<T> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            debug!(id = %id, "Update target not found");
            return None;
        };
        record.apply_patch(patch);
        info!(id = %id, "Record updated");
        Some(record.clone())
    }

    fn handle_delete(&mut self, id: T::Id) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                info!(id = %id, "Record deleted");
                true
            }
            None => {
                debug!(id = %id, "Delete target not found");
                false
            }
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self, query: T::Query, page: PageRequest) -> Result<Page<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { query, page, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { params, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Update { id, patch, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Asks the actor to stop after the requests already queued.
    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender.send(ResourceRequest::Shutdown)
            .await.map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
