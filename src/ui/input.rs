use crate::ui::app::{App, Page};
use crate::ui::dashboard::DashboardIntent;
use crate::ui::form::FormIntent;
use crate::ui::movie_details::MovieDetailsIntent;
use crate::ui::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.page() {
        Page::Home => handle_home(app, key),
        Page::Login(_) | Page::Register(_) | Page::WriteReview { .. } => handle_form(app, key),
        Page::Dashboard(state) => {
            if state.is_searching() {
                handle_search(app, key);
            } else {
                let failed = state.dashboard.error().is_some();
                handle_dashboard(app, key, failed);
            }
        }
        Page::MovieDetails(_) => handle_details(app, key),
    }
}

fn handle_home(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') => app.navigate(Route::Login),
        KeyCode::Char('r') => app.navigate(Route::Register),
        KeyCode::Char('d') => app.navigate(Route::Dashboard),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_form(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => {
            let back = match app.route() {
                Route::WriteReview { movie_id } => Route::MovieDetails { movie_id },
                _ => Route::Home,
            };
            app.navigate(back);
            return;
        }
        KeyCode::Enter => FormIntent::Submit,
        KeyCode::Tab | KeyCode::Down => FormIntent::NextField,
        KeyCode::BackTab | KeyCode::Up => FormIntent::PrevField,
        KeyCode::Left => FormIntent::CycleChoice { forward: false },
        KeyCode::Right => FormIntent::CycleChoice { forward: true },
        KeyCode::Backspace => FormIntent::Backspace,
        KeyCode::Char(ch) if !has_command_modifier(key) => FormIntent::Input(ch),
        _ => return,
    };
    app.dispatch_form(intent);
}

fn handle_search(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => DashboardIntent::CancelSearch,
        KeyCode::Enter => DashboardIntent::SubmitSearch,
        KeyCode::Backspace => DashboardIntent::SearchBackspace,
        KeyCode::Char(ch) if !has_command_modifier(key) => DashboardIntent::SearchInput(ch),
        _ => return,
    };
    app.dispatch_dashboard(intent);
}

fn handle_dashboard(app: &mut App, key: KeyEvent, failed: bool) {
    match key.code {
        KeyCode::Enter if failed => app.navigate(Route::Login),
        KeyCode::Enter => app.open_selected_movie(),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_dashboard(DashboardIntent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_dashboard(DashboardIntent::SelectPrev),
        KeyCode::Char('/') => app.dispatch_dashboard(DashboardIntent::OpenSearch),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Esc => app.navigate(Route::Home),
        _ => {}
    }
}

fn handle_details(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_details(MovieDetailsIntent::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_details(MovieDetailsIntent::ScrollUp),
        KeyCode::Char('b') | KeyCode::Esc => app.navigate(Route::Dashboard),
        KeyCode::Char('w') => {
            if let Route::MovieDetails { movie_id } = app.route() {
                app.navigate(Route::WriteReview { movie_id });
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
