use std::future::Future;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::api::{
    resolve_dashboard, ApiResponse, MovieClient, MovieFilters, MovieSearch, ReviewQuery,
};
use crate::session::{self, TokenStore};
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::events::{AppEvent, FetchResult};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::movie_details::{MovieDetailsIntent, MovieDetailsReducer, MovieDetailsState};
use crate::ui::mvi::Reducer;
use crate::ui::route::Route;

const LOGIN_REQUIRED: &str = "Please log in to continue";

/// The active page and its state. Replaced wholesale on every navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    Login(FormState),
    Register(FormState),
    Dashboard(DashboardState),
    MovieDetails(MovieDetailsState),
    WriteReview { movie_id: String, form: FormState },
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::Home => Route::Home,
            Page::Login(_) => Route::Login,
            Page::Register(_) => Route::Register,
            Page::Dashboard(_) => Route::Dashboard,
            Page::MovieDetails(state) => Route::MovieDetails {
                movie_id: state.movie_id.clone(),
            },
            Page::WriteReview { movie_id, .. } => Route::WriteReview {
                movie_id: movie_id.clone(),
            },
        }
    }

    fn form_mut(&mut self) -> Option<&mut FormState> {
        match self {
            Page::Login(form) | Page::Register(form) | Page::WriteReview { form, .. } => Some(form),
            _ => None,
        }
    }
}

pub struct App {
    should_quit: bool,
    page: Page,
    /// Bumped on every navigation. Fetch results carry the value current
    /// when they were spawned.
    generation: u64,
    /// One-line message shown in the header until the next navigation.
    notice: Option<String>,
    client: MovieClient,
    tokens: TokenStore,
    events: Sender<AppEvent>,
    runtime: Handle,
}

impl App {
    pub fn new(client: MovieClient, tokens: TokenStore, events: Sender<AppEvent>, runtime: Handle) -> Self {
        Self {
            should_quit: false,
            page: Page::Home,
            generation: 0,
            notice: None,
            client,
            tokens,
            events,
            runtime,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.tokens.is_signed_in()
    }

    /// Activate `route` with fresh state and start its fetches.
    ///
    /// Protected routes without a stored access token land on the login
    /// page instead, and nothing is sent.
    pub fn navigate(&mut self, route: Route) {
        self.generation += 1;
        self.notice = None;

        let token = self.tokens.access_token();
        if route.is_protected() && token.is_none() {
            tracing::info!(route = route.title(), "no access token, redirecting to login");
            self.page = Page::Login(FormState::login());
            self.notice = Some(LOGIN_REQUIRED.to_string());
            return;
        }
        tracing::debug!(route = route.title(), generation = self.generation, "navigate");

        self.page = match route {
            Route::Home => Page::Home,
            Route::Login => Page::Login(FormState::login()),
            Route::Register => Page::Register(FormState::register()),
            Route::Dashboard => {
                if let Some(token) = token {
                    let client = self.client.clone();
                    self.spawn(async move {
                        FetchResult::Dashboard(resolve_dashboard(&client, &token).await)
                    });
                }
                self.fetch_movies(None);
                Page::Dashboard(DashboardState::default())
            }
            Route::MovieDetails { movie_id } => {
                let client = self.client.clone();
                let id = movie_id.clone();
                self.spawn(async move { FetchResult::Movie(client.get_movie(&id).await) });

                let client = self.client.clone();
                let id = movie_id.clone();
                self.spawn(async move {
                    FetchResult::Reviews(client.get_reviews(&id, &ReviewQuery::default()).await)
                });
                Page::MovieDetails(MovieDetailsState::new(movie_id))
            }
            Route::WriteReview { movie_id } => Page::WriteReview {
                movie_id,
                form: FormState::review(),
            },
        };
    }

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        let Page::Dashboard(state) = &mut self.page else {
            return;
        };
        let was_loading = state.movies.is_loading();
        *state = DashboardReducer::reduce(std::mem::take(state), intent);
        if !was_loading && state.movies.is_loading() {
            let query = state.active_query.clone();
            self.fetch_movies(query);
        }
    }

    pub fn dispatch_details(&mut self, intent: MovieDetailsIntent) {
        if let Page::MovieDetails(state) = &mut self.page {
            *state = MovieDetailsReducer::reduce(std::mem::take(state), intent);
        }
    }

    /// Feed the active form. A transition into `Submitting` sends the form.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        let Some(form) = self.page.form_mut() else {
            return;
        };
        let was_submitting = form.is_submitting();
        *form = FormReducer::reduce(std::mem::take(form), intent);
        if !was_submitting && form.is_submitting() {
            self.submit_form();
        }
    }

    pub fn open_selected_movie(&mut self) {
        let Page::Dashboard(state) = &self.page else {
            return;
        };
        if let Some(movie) = state.selected_movie() {
            let movie_id = movie.id.clone();
            self.navigate(Route::MovieDetails { movie_id });
        }
    }

    /// Sign out in the background. Local tokens are cleared whatever the
    /// server says, then the app lands on the login page.
    pub fn logout(&mut self) {
        self.notice = Some("Signing out...".to_string());
        let client = self.client.clone();
        let tokens = self.tokens.clone();
        self.spawn(async move {
            session::logout(&client, &tokens).await;
            FetchResult::LoggedOut
        });
    }

    pub fn on_fetched(&mut self, generation: u64, result: FetchResult) {
        let logged_out = matches!(result, FetchResult::LoggedOut);
        if generation != self.generation && !logged_out {
            tracing::debug!(generation, current = self.generation, "dropping stale fetch result");
            return;
        }

        match result {
            FetchResult::Dashboard(response) => {
                self.dispatch_dashboard(DashboardIntent::DashboardSettled(response))
            }
            FetchResult::Movies(response) => {
                self.dispatch_dashboard(DashboardIntent::MoviesSettled(response))
            }
            FetchResult::Movie(response) => {
                self.dispatch_details(MovieDetailsIntent::MovieSettled(response))
            }
            FetchResult::Reviews(response) => {
                if let ApiResponse::Error(message) = &response {
                    tracing::warn!(%message, "reviews unavailable");
                }
                self.dispatch_details(MovieDetailsIntent::ReviewsSettled(response))
            }
            FetchResult::Login(ApiResponse::Data(_)) => self.navigate(Route::Dashboard),
            FetchResult::Register(ApiResponse::Data(_)) => {
                self.navigate(Route::Login);
                self.notice = Some("Registration successful. Please log in.".to_string());
            }
            FetchResult::ReviewPosted(ApiResponse::Data(_)) => {
                if let Page::WriteReview { movie_id, .. } = &self.page {
                    let movie_id = movie_id.clone();
                    self.navigate(Route::MovieDetails { movie_id });
                    self.notice = Some("Review posted".to_string());
                }
            }
            FetchResult::Login(ApiResponse::Error(message))
            | FetchResult::Register(ApiResponse::Error(message))
            | FetchResult::ReviewPosted(ApiResponse::Error(message)) => {
                self.dispatch_form(FormIntent::Settled {
                    error: Some(message),
                })
            }
            FetchResult::LoggedOut => {
                self.navigate(Route::Login);
                self.notice = Some("You have been logged out".to_string());
            }
        }
    }

    fn submit_form(&mut self) {
        let client = self.client.clone();
        match &self.page {
            Page::Login(form) => {
                let form = form.to_login();
                let tokens = self.tokens.clone();
                self.spawn(async move {
                    FetchResult::Login(session::login(&client, &tokens, &form).await)
                });
            }
            Page::Register(form) => {
                let registration = form.to_registration();
                self.spawn(async move {
                    FetchResult::Register(client.register(&registration).await)
                });
            }
            Page::WriteReview { movie_id, form } => {
                let movie_id = movie_id.clone();
                let draft = form.to_review_draft();
                let Some(token) = self.tokens.access_token() else {
                    self.dispatch_form(FormIntent::Settled {
                        error: Some(LOGIN_REQUIRED.to_string()),
                    });
                    return;
                };
                self.spawn(async move {
                    FetchResult::ReviewPosted(client.add_review(&movie_id, &draft, &token).await)
                });
            }
            Page::Home | Page::Dashboard(_) | Page::MovieDetails(_) => {}
        }
    }

    fn fetch_movies(&self, query: Option<String>) {
        let client = self.client.clone();
        self.spawn(async move {
            let response = match query {
                Some(title) => client.search_movies(&MovieSearch::title(title)).await,
                None => client.list_movies(&MovieFilters::top_rated()).await,
            };
            FetchResult::Movies(response)
        });
    }

    /// Run `fetch` on the runtime and post its result tagged with the
    /// current generation. The task is never cancelled.
    fn spawn<F>(&self, fetch: F)
    where
        F: Future<Output = FetchResult> + Send + 'static,
    {
        let generation = self.generation;
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = fetch.await;
            if events.send(AppEvent::Fetched { generation, result }).is_err() {
                tracing::debug!(generation, "event loop gone, dropping fetch result");
            }
        });
    }
}
