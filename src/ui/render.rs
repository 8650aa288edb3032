use crate::ui::app::{App, Page};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::{dashboard, form, home, movie_details};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.route();

    frame.render_widget(
        Header::new(&route, app.is_signed_in(), app.notice()).widget(),
        header,
    );
    frame.render_widget(Clear, body);

    match app.page() {
        Page::Home => home::render(frame, body, app.is_signed_in()),
        Page::Login(state) => form::view::render(frame, body, "Log In", state),
        Page::Register(state) => {
            form::view::render(frame, body, "Create Account", state)
        }
        Page::WriteReview { form: state, .. } => {
            form::view::render(frame, body, "Write a Review", state)
        }
        Page::Dashboard(state) => dashboard::view::render(frame, body, state),
        Page::MovieDetails(state) => movie_details::view::render(frame, body, state),
    }

    frame.render_widget(Footer::new(&route).widget(footer), footer);
}
