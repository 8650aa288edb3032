/// Where the app is. Each activation of a route starts a fresh page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    MovieDetails { movie_id: String },
    WriteReview { movie_id: String },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Dashboard => "Dashboard",
            Route::MovieDetails { .. } => "Movie",
            Route::WriteReview { .. } => "Write Review",
        }
    }

    /// Pages that need a stored access token before anything is fetched.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::WriteReview { .. })
    }
}
