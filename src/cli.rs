use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ui::route::Route;

/// CineDeck - browse movies and reviews from the terminal
#[derive(Parser, Debug)]
#[command(name = "cinedeck")]
#[command(version)]
#[command(about = "Terminal client for the movie review service", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Service address, overriding `api.base_url` from the config file
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Page to open at startup
    #[arg(long = "page", value_enum, default_value_t = StartPage::Home)]
    pub page: StartPage,

    /// Open this movie's page at startup (takes precedence over --page)
    #[arg(long = "movie")]
    pub movie: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    Home,
    Login,
    Register,
    Dashboard,
}

impl Cli {
    pub fn start_route(&self) -> Route {
        if let Some(movie_id) = &self.movie {
            return Route::MovieDetails {
                movie_id: movie_id.clone(),
            };
        }
        match self.page {
            StartPage::Home => Route::Home,
            StartPage::Login => Route::Login,
            StartPage::Register => Route::Register,
            StartPage::Dashboard => Route::Dashboard,
        }
    }
}
