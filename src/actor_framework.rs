use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Record trait with lifecycle hooks and actions)
// =============================================================================

/// Trait that any stored record must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Construct the full record from the generated id and the creation parameters.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }

    /// Handle a record-specific action. On error the record is left as it was.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures surfaced by [`ResourceClient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Row predicate used by list and bulk delete requests.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<Filter<T>>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteWhere {
        filter: Filter<T>,
        respond_to: Response<Vec<T::Id>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Returns an id generator yielding `prefix_1`, `prefix_2`, ...
pub fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

/// Owns one table of records. Requests are applied one at a time, so every
/// request sees the effects of all earlier ones.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // insertion order, used to keep listings stable
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_list(filter)));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::DeleteWhere { filter, respond_to } => {
                    let _ = respond_to.send(self.handle_delete_where(filter));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }
        info!(remaining = self.store.len(), "Actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        debug!(id = %id, "Record created");
        self.store.insert(id.clone(), item);
        self.order.push(id.clone());
        Ok(id)
    }

    fn handle_list(&self, filter: Option<Filter<T>>) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|item| filter.as_ref().map_or(true, |f| f(*item)))
            .cloned()
            .collect()
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut updated = item.clone();
        updated.on_update(patch).map_err(FrameworkError::Rejected)?;
        *item = updated.clone();
        debug!(id = %id, "Record updated");
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete().map_err(FrameworkError::Rejected)?;
        self.store.remove(&id);
        self.order.retain(|existing| existing != &id);
        debug!(id = %id, "Record deleted");
        Ok(())
    }

    /// Removes every matching record, or none of them if any delete hook refuses.
    fn handle_delete_where(&mut self, filter: Filter<T>) -> Result<Vec<T::Id>, FrameworkError> {
        let doomed: Vec<T::Id> = self
            .order
            .iter()
            .filter(|id| self.store.get(*id).map_or(false, |item| filter(item)))
            .cloned()
            .collect();

        for id in &doomed {
            if let Some(item) = self.store.get(id) {
                if let Err(e) = item.on_delete() {
                    warn!(id = %id, error = %e, "Bulk delete refused");
                    return Err(FrameworkError::Rejected(e));
                }
            }
        }

        for id in &doomed {
            self.store.remove(id);
        }
        self.order.retain(|id| !doomed.contains(id));
        debug!(count = doomed.len(), "Records deleted");
        Ok(doomed)
    }

    fn handle_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut working = item.clone();
        let result = working.handle_action(action).map_err(FrameworkError::Rejected)?;
        *item = working;
        Ok(result)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derived Clone would require `T: Clone` on the request type as well.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter: None, respond_to }).await
    }

    pub async fn list_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::List { filter: Some(filter), respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn delete_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T::Id>, FrameworkError> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::DeleteWhere { filter, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Record Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        title: String,
        votes: u32,
        locked: bool,
    }

    #[derive(Debug)]
    struct TicketCreate {
        title: String,
    }

    #[derive(Debug)]
    struct TicketPatch {
        title: Option<String>,
    }

    #[derive(Debug)]
    enum TicketAction {
        Vote,
        Lock,
    }

    impl Entity for Ticket {
        type Id = String;
        type CreateParams = TicketCreate;
        type Patch = TicketPatch;
        type Action = TicketAction;
        type ActionResult = u32;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create_params(id: String, params: TicketCreate) -> Result<Self, String> {
            if params.title.is_empty() {
                return Err("title is required".to_string());
            }
            Ok(Self { id, title: params.title, votes: 0, locked: false })
        }

        fn on_update(&mut self, patch: TicketPatch) -> Result<(), String> {
            if let Some(title) = patch.title {
                // applied before the check so a rejected patch proves rollback
                self.title = title;
                if self.locked {
                    return Err("ticket is locked".to_string());
                }
            }
            Ok(())
        }

        fn on_delete(&self) -> Result<(), String> {
            if self.locked {
                Err("ticket is locked".to_string())
            } else {
                Ok(())
            }
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<u32, String> {
            match action {
                TicketAction::Vote => {
                    self.votes += 1;
                    Ok(self.votes)
                }
                TicketAction::Lock => {
                    self.locked = true;
                    Ok(self.votes)
                }
            }
        }
    }

    fn spawn_tickets() -> ResourceClient<Ticket> {
        let (actor, client) = ResourceActor::new(10, sequential_ids("ticket"));
        tokio::spawn(actor.run());
        client
    }

    async fn open(client: &ResourceClient<Ticket>, title: &str) -> String {
        client.create(TicketCreate { title: title.to_string() }).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let client = spawn_tickets();

        assert_eq!(open(&client, "first").await, "ticket_1");
        assert_eq!(open(&client, "second").await, "ticket_2");

        let ticket = client.get("ticket_2".to_string()).await.unwrap().unwrap();
        assert_eq!(ticket.title, "second");
        assert_eq!(client.get("ticket_9".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejected_by_constructor() {
        let client = spawn_tickets();

        let result = client.create(TicketCreate { title: String::new() }).await;
        assert_eq!(result, Err(FrameworkError::Rejected("title is required".to_string())));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_record_untouched() {
        let client = spawn_tickets();
        let id = open(&client, "original").await;
        client.perform_action(id.clone(), TicketAction::Lock).await.unwrap();

        let result = client.update(id.clone(), TicketPatch { title: Some("changed".into()) }).await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));

        let ticket = client.get(id).await.unwrap().unwrap();
        assert_eq!(ticket.title, "original");
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let client = spawn_tickets();

        let result = client.perform_action("ticket_7".to_string(), TicketAction::Vote).await;
        assert_eq!(result, Err(FrameworkError::NotFound("ticket_7".to_string())));
        let result = client.delete("ticket_7".to_string()).await;
        assert_eq!(result, Err(FrameworkError::NotFound("ticket_7".to_string())));
    }

    #[tokio::test]
    async fn test_list_where_keeps_insertion_order() {
        let client = spawn_tickets();
        for title in ["a", "b", "c", "d"] {
            open(&client, title).await;
        }
        client.perform_action("ticket_3".to_string(), TicketAction::Vote).await.unwrap();
        client.delete("ticket_2".to_string()).await.unwrap();

        let titles: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);

        let voted = client.list_where(|t: &Ticket| t.votes > 0).await.unwrap();
        assert_eq!(voted.len(), 1);
        assert_eq!(voted[0].id(), "ticket_3");
    }

    #[tokio::test]
    async fn test_delete_where_is_all_or_nothing() {
        let client = spawn_tickets();
        for title in ["keep", "drop", "drop"] {
            open(&client, title).await;
        }

        let removed = client.delete_where(|t: &Ticket| t.title == "drop").await.unwrap();
        assert_eq!(removed, vec!["ticket_2".to_string(), "ticket_3".to_string()]);

        open(&client, "drop").await;
        client.perform_action("ticket_4".to_string(), TicketAction::Lock).await.unwrap();
        let result = client.delete_where(|_: &Ticket| true).await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));
        assert_eq!(client.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Ticket>::new(1, sequential_ids("ticket"));
        drop(actor);

        let result = client.get("ticket_1".to_string()).await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}
