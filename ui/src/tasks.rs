//! Background API work.
//!
//! Requests run on the tokio runtime. Each finished request is sent back
//! as a [`TaskEvent`] over a `flume` channel and a repaint is requested, so
//! the UI thread picks the result up on its next frame without blocking.

use std::future::Future;

use log::{debug, warn};
use tipdesk_business::entities::{Business, PendingUser, Tippee, User};
use tipdesk_business::forms::CreateBusinessRequest;
use tipdesk_business::query::Mutation;
use tipdesk_business::{ApiClient, ApiResult, Session, UserStatusUpdate};
use tokio::runtime::Handle;

/// Result of one background request.
#[derive(Debug)]
pub enum TaskEvent {
    SignedIn(ApiResult<Session>),
    SignedOut,
    Users(ApiResult<Vec<User>>),
    PendingUsers(ApiResult<Vec<PendingUser>>),
    Businesses(ApiResult<Vec<Business>>),
    Tippees(ApiResult<Vec<Tippee>>),
    UserDetails(ApiResult<User>),
    Mutated {
        mutation: Mutation,
        result: ApiResult<String>,
    },
}

impl TaskEvent {
    /// The server rejected the bearer token. A failed sign-in does not count.
    pub fn is_unauthorized(&self) -> bool {
        fn rejected<T>(result: &ApiResult<T>) -> bool {
            result.as_ref().is_err_and(|err| err.is_unauthorized())
        }
        match self {
            Self::SignedIn(_) | Self::SignedOut => false,
            Self::Users(result) => rejected(result),
            Self::PendingUsers(result) => rejected(result),
            Self::Businesses(result) => rejected(result),
            Self::Tippees(result) => rejected(result),
            Self::UserDetails(result) => rejected(result),
            Self::Mutated { result, .. } => rejected(result),
        }
    }
}

/// A write confirmed by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    UpdateStatus {
        user_id: String,
        update: UserStatusUpdate,
    },
    AddRole {
        user_id: String,
        role: String,
        is_primary: bool,
    },
    RemoveRole {
        user_id: String,
        role_id: String,
    },
    SetPrimaryRole {
        user_id: String,
        role_id: String,
    },
    DeleteUser {
        user_id: String,
    },
    RestoreUser {
        user_id: String,
    },
    SetBusinessVerified {
        business_id: String,
        verified: bool,
    },
    CreateBusiness(CreateBusinessRequest),
}

impl Command {
    pub fn mutation(&self) -> Mutation {
        match self {
            Self::UpdateStatus { .. } => Mutation::UpdateUserStatus,
            Self::AddRole { .. } => Mutation::AddRole,
            Self::RemoveRole { .. } => Mutation::RemoveRole,
            Self::SetPrimaryRole { .. } => Mutation::SetPrimaryRole,
            Self::DeleteUser { .. } => Mutation::DeleteUser,
            Self::RestoreUser { .. } => Mutation::RestoreUser,
            Self::SetBusinessVerified { .. } => Mutation::VerifyBusiness,
            Self::CreateBusiness(_) => Mutation::CreateBusiness,
        }
    }

    /// Shown when the server answers without a message.
    pub fn success_message(&self) -> String {
        match self {
            Self::UpdateStatus { .. } => "User status updated".to_owned(),
            Self::AddRole { role, .. } => format!("Role {role} added"),
            Self::RemoveRole { .. } => "Role removed".to_owned(),
            Self::SetPrimaryRole { .. } => "Primary role updated".to_owned(),
            Self::DeleteUser { .. } => "User deleted".to_owned(),
            Self::RestoreUser { .. } => "User restored".to_owned(),
            Self::SetBusinessVerified { verified: true, .. } => {
                "Business marked as verified".to_owned()
            }
            Self::SetBusinessVerified { verified: false, .. } => {
                "Business marked as unverified".to_owned()
            }
            Self::CreateBusiness(request) => format!("Partner {} created", request.legal_name),
        }
    }

    pub async fn run(self, api: ApiClient) -> ApiResult<String> {
        let fallback = self.success_message();
        let message = match self {
            Self::UpdateStatus { user_id, update } => {
                api.update_user_status(&user_id, update).await?
            }
            Self::AddRole {
                user_id,
                role,
                is_primary,
            } => api.add_user_role(&user_id, &role, is_primary).await?,
            Self::RemoveRole { user_id, role_id } => {
                api.remove_user_role(&user_id, &role_id).await?
            }
            Self::SetPrimaryRole { user_id, role_id } => {
                api.set_primary_role(&user_id, &role_id).await?
            }
            Self::DeleteUser { user_id } => api.delete_user(&user_id).await?,
            Self::RestoreUser { user_id } => api.restore_user(&user_id).await?,
            Self::SetBusinessVerified {
                business_id,
                verified,
            } => api.set_business_verified(&business_id, verified).await?,
            Self::CreateBusiness(request) => {
                api.create_business(&request).await?;
                String::new()
            }
        };
        Ok(if message.is_empty() { fallback } else { message })
    }
}

pub struct Tasks {
    handle: Handle,
    /// Bumped when the session ends; events tagged with an older value are
    /// dropped on arrival.
    generation: u64,
    sender: flume::Sender<(u64, TaskEvent)>,
    receiver: flume::Receiver<(u64, TaskEvent)>,
}

impl Tasks {
    pub fn new(handle: Handle) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            handle,
            generation: 0,
            sender,
            receiver,
        }
    }

    pub fn spawn<F>(&self, ctx: &egui::Context, task: F)
    where
        F: Future<Output = TaskEvent> + Send + 'static,
    {
        let sender = self.sender();
        let ctx = ctx.clone();
        drop(self.handle.spawn(async move {
            sender.send(task.await);
            ctx.request_repaint();
        }));
    }

    /// Requests still running keep their old tag and are ignored.
    pub fn new_generation(&mut self) {
        self.generation += 1;
    }

    /// Events finished since the last call, minus those from an earlier
    /// generation.
    pub fn drain(&self) -> Vec<TaskEvent> {
        self.receiver
            .try_iter()
            .filter_map(|(generation, event)| {
                if generation == self.generation {
                    Some(event)
                } else {
                    debug!("dropping stale {event:?}");
                    None
                }
            })
            .collect()
    }

    /// A sender tagged with the current generation, for spawned work and
    /// for injecting events from tests.
    pub fn sender(&self) -> TaskSender {
        TaskSender {
            generation: self.generation,
            sender: self.sender.clone(),
        }
    }
}

#[derive(Clone)]
pub struct TaskSender {
    generation: u64,
    sender: flume::Sender<(u64, TaskEvent)>,
}

impl TaskSender {
    pub fn send(&self, event: TaskEvent) {
        if self.sender.send((self.generation, event)).is_err() {
            warn!("UI dropped before a background request finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_mutations() {
        let delete = Command::DeleteUser {
            user_id: "u-1".to_owned(),
        };
        assert_eq!(delete.mutation(), Mutation::DeleteUser);
        let verify = Command::SetBusinessVerified {
            business_id: "b-1".to_owned(),
            verified: false,
        };
        assert_eq!(verify.mutation(), Mutation::VerifyBusiness);
        assert_eq!(verify.success_message(), "Business marked as unverified");
    }

    #[tokio::test]
    async fn test_spawned_task_reaches_receiver() {
        let tasks = Tasks::new(Handle::current());
        let ctx = egui::Context::default();
        tasks.spawn(&ctx, async { TaskEvent::SignedOut });

        let (generation, event) = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            tasks.receiver.recv_async(),
        )
        .await
        .expect("task should finish")
        .expect("channel open");
        assert_eq!(generation, 0);
        assert!(matches!(event, TaskEvent::SignedOut));
    }

    #[tokio::test]
    async fn test_drain_drops_events_from_previous_generation() {
        let mut tasks = Tasks::new(Handle::current());
        let stale = tasks.sender();
        tasks.new_generation();
        stale.send(TaskEvent::Users(Ok(Vec::new())));
        tasks.sender().send(TaskEvent::SignedOut);

        let events = tasks.drain();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TaskEvent::SignedOut));
    }
}
