use log::{debug, info, warn};
use tipdesk_business::columns::{partners_table, pending_table, tippees_table, users_table};
use tipdesk_business::entities::{Business, PendingUser, Tippee, User};
use tipdesk_business::forms::CreateBusinessForm;
use tipdesk_business::query::{
    BusinessListQuery, Mutation, Paging, QueryKey, TippeeListQuery, UserListQuery,
};
use tipdesk_business::{ApiClient, ApiConfig, ApiResult, Session};
use tokio::runtime::Handle;

use crate::list_page::ListPage;
use crate::route::Route;
use crate::tasks::{Command, TaskEvent, Tasks};
use crate::widgets::{Dialog, DialogState, LoginState};

/// Lists are fetched once in bulk and paged on the client.
const LIST_LIMIT: u32 = 100;

fn list_paging() -> Paging {
    Paging::new(1, LIST_LIMIT)
}

/// A one-line message above the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct AddPartnerState {
    pub form: CreateBusinessForm,
    pub submitting: bool,
    pub error: Option<String>,
}

/// The main application state.
pub struct State {
    api: ApiClient,
    tasks: Tasks,
    session: Option<Session>,
    pub route: Route,
    pub login: LoginState,
    pub users: ListPage<User>,
    pub pending: ListPage<PendingUser>,
    pub partners: ListPage<Business>,
    pub tippees: ListPage<Tippee>,
    pub dialog: DialogState,
    pub add_partner: AddPartnerState,
    pub notice: Option<Notice>,
}

impl State {
    pub fn new(config: ApiConfig, runtime: Handle) -> ApiResult<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
            tasks: Tasks::new(runtime),
            session: None,
            route: Route::default(),
            login: LoginState::default(),
            users: ListPage::new(users_table()),
            pending: ListPage::new(pending_table()),
            partners: ListPage::new(partners_table()),
            tippees: ListPage::new(tippees_table()),
            dialog: DialogState::default(),
            add_partner: AddPartnerState::default(),
            notice: None,
        })
    }

    /// State against a mock server, on the current tokio runtime.
    pub fn test(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::new(ApiConfig::new(base_url), Handle::current())
    }

    /// Starts out signed in, e.g. with a session restored elsewhere.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.api.set_token(Some(session.token.clone()));
        self.session = Some(session);
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            info!("navigating to {}", route.path());
        }
        self.route = route;
        self.dialog.close();
    }

    /// Follows an add-button target.
    pub fn open_path(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.navigate(route),
            None => {
                warn!("no desktop page for {path}");
                self.notice = Some(Notice::error(format!(
                    "{path} is not available in the desktop console"
                )));
            }
        }
    }

    pub fn copy_id(&mut self, ctx: &egui::Context, id: &str) {
        ctx.copy_text(id.to_owned());
        self.notice = Some(Notice::success("ID copied to clipboard"));
    }

    pub fn submit_login(&mut self, ctx: &egui::Context) {
        let request = match self.login.form().validate() {
            Ok(request) => request,
            Err(err) => {
                self.login.error = Some(err.to_string());
                return;
            }
        };
        self.login.in_progress = true;
        self.login.error = None;
        let mut api = self.api.clone();
        self.tasks.spawn(ctx, async move {
            TaskEvent::SignedIn(api.sign_in(&request).await)
        });
    }

    /// Ends the session locally at once; the server call runs behind it.
    pub fn sign_out(&mut self, ctx: &egui::Context) {
        let mut api = self.api.clone();
        self.tasks.spawn(ctx, async move {
            if let Err(err) = api.sign_out().await {
                warn!("sign out request failed: {err}");
            }
            TaskEvent::SignedOut
        });
        self.clear_session();
        info!("signed out");
    }

    /// Fetches the current page's list the first time it is shown.
    pub fn fetch_current(&mut self, ctx: &egui::Context) {
        let Some(key) = self.route.query() else {
            return;
        };
        let needs_fetch = match key {
            QueryKey::Users => self.users.needs_fetch(),
            QueryKey::PendingUsers => self.pending.needs_fetch(),
            QueryKey::Businesses => self.partners.needs_fetch(),
            QueryKey::Tippees => self.tippees.needs_fetch(),
        };
        if needs_fetch {
            self.fetch(key, ctx);
        }
    }

    pub fn fetch(&mut self, key: QueryKey, ctx: &egui::Context) {
        debug!("fetching {key:?}");
        let api = self.api.clone();
        match key {
            QueryKey::Users => {
                self.users.set_fetching();
                let query = UserListQuery {
                    paging: list_paging(),
                    ..UserListQuery::default()
                };
                self.tasks.spawn(ctx, async move {
                    TaskEvent::Users(api.list_users(&query).await)
                });
            }
            QueryKey::PendingUsers => {
                self.pending.set_fetching();
                self.tasks.spawn(ctx, async move {
                    TaskEvent::PendingUsers(api.list_pending_users().await)
                });
            }
            QueryKey::Businesses => {
                self.partners.set_fetching();
                let query = BusinessListQuery {
                    paging: list_paging(),
                    ..BusinessListQuery::default()
                };
                self.tasks.spawn(ctx, async move {
                    TaskEvent::Businesses(api.list_businesses(&query).await)
                });
            }
            QueryKey::Tippees => {
                self.tippees.set_fetching();
                let query = TippeeListQuery {
                    paging: list_paging(),
                    ..TippeeListQuery::default()
                };
                self.tasks.spawn(ctx, async move {
                    TaskEvent::Tippees(api.list_tippees(&query).await)
                });
            }
        }
    }

    /// Opens the details dialog and loads the full record behind it.
    pub fn open_user_details(&mut self, user_id: &str, ctx: &egui::Context) {
        self.dialog.open(Dialog::UserDetails {
            user_id: user_id.to_owned(),
            user: None,
        });
        let api = self.api.clone();
        let user_id = user_id.to_owned();
        self.tasks.spawn(ctx, async move {
            TaskEvent::UserDetails(api.get_user(&user_id).await)
        });
    }

    pub fn run_command(&mut self, command: Command, ctx: &egui::Context) {
        let mutation = command.mutation();
        if mutation == Mutation::CreateBusiness {
            self.add_partner.submitting = true;
            self.add_partner.error = None;
        } else {
            self.dialog.submitting = true;
            self.dialog.error = None;
        }
        info!("running {mutation:?}");
        let api = self.api.clone();
        self.tasks.spawn(ctx, async move {
            TaskEvent::Mutated {
                mutation,
                result: command.run(api).await,
            }
        });
    }

    pub fn submit_partner(&mut self, ctx: &egui::Context) {
        match self.add_partner.form.validate() {
            Ok(request) => self.run_command(Command::CreateBusiness(request), ctx),
            Err(err) => self.add_partner.error = Some(err.to_string()),
        }
    }

    /// Applies every finished background request.
    pub fn poll(&mut self, ctx: &egui::Context) {
        for event in self.tasks.drain() {
            self.apply(event, ctx);
        }
    }

    fn apply(&mut self, event: TaskEvent, ctx: &egui::Context) {
        if self.session.is_some() && event.is_unauthorized() {
            warn!("session rejected by the server");
            self.clear_session();
            self.login.error = Some("Your session has expired. Please sign in again.".to_owned());
            return;
        }
        match event {
            TaskEvent::SignedIn(Ok(session)) => {
                info!("signed in as {}", session.user.display_name());
                self.api.set_token(Some(session.token.clone()));
                self.session = Some(session);
                self.login.finish(None);
                self.route = Route::default();
            }
            TaskEvent::SignedIn(Err(err)) => {
                warn!("sign in failed: {err}");
                self.login.finish(Some(err.to_string()));
            }
            TaskEvent::SignedOut => {}
            TaskEvent::Users(result) => self.users.finish(result),
            TaskEvent::PendingUsers(result) => self.pending.finish(result),
            TaskEvent::Businesses(result) => self.partners.finish(result),
            TaskEvent::Tippees(result) => self.tippees.finish(result),
            TaskEvent::UserDetails(result) => self.apply_user_details(result),
            TaskEvent::Mutated { mutation, result } => match result {
                Ok(message) => {
                    info!("{mutation:?} succeeded");
                    if mutation == Mutation::CreateBusiness {
                        self.add_partner = AddPartnerState::default();
                        self.navigate(Route::Partners);
                    }
                    self.dialog.close();
                    self.notice = Some(Notice::success(message));
                    for key in mutation.invalidates() {
                        self.fetch(*key, ctx);
                    }
                }
                Err(err) => {
                    warn!("{mutation:?} failed: {err}");
                    if mutation == Mutation::CreateBusiness {
                        self.add_partner.submitting = false;
                        self.add_partner.error = Some(err.to_string());
                    } else if self.dialog.is_open() {
                        self.dialog.submitting = false;
                        self.dialog.error = Some(err.to_string());
                    } else {
                        self.notice = Some(Notice::error(err.to_string()));
                    }
                }
            },
        }
    }

    fn apply_user_details(&mut self, result: ApiResult<User>) {
        let Some(Dialog::UserDetails { user_id, user }) = self.dialog.current.as_mut() else {
            return;
        };
        match result {
            Ok(loaded) if loaded.id == *user_id => *user = Some(loaded),
            Ok(_) => {}
            Err(err) => self.dialog.error = Some(err.to_string()),
        }
    }

    fn clear_session(&mut self) {
        self.tasks.new_generation();
        self.api.set_token(None);
        self.session = None;
        self.route = Route::default();
        self.users.reset();
        self.pending.reset();
        self.partners.reset();
        self.tippees.reset();
        self.dialog.close();
        self.add_partner = AddPartnerState::default();
        self.notice = None;
    }
}
