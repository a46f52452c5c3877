use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::navigation::Tab;
use crate::core::router::{Screen, route};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::login_form::CONNECTING_MESSAGE;
use crate::tui::components::nav_bar::NAV_BAR_HEIGHT;
use crate::tui::components::{
    ChatView, FarmingLoader, Home, LoginForm, MarketPanel, NavBar, ProfilePanel, TitleBar,
    WeatherPanel,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.profile().map(|p| p.name.clone()),
        app.notification
            .as_ref()
            .map(|n| (n.title.clone(), n.description.clone())),
    );
    title_bar.render(frame, title_area);

    match route(app) {
        Screen::Login { pending: true } => {
            FarmingLoader::new(CONNECTING_MESSAGE, spinner_frame).render(frame, main_area);
        }
        Screen::Login { pending: false } => {
            LoginForm::new(&mut tui.login_form).render(frame, main_area);
        }
        Screen::Shell(tab) => {
            let [content_area, nav_area] =
                Layout::vertical([Min(0), Length(NAV_BAR_HEIGHT)]).areas(main_area);
            draw_tab(frame, content_area, app, tui, tab, spinner_frame);
            NavBar::new(tab).render(frame, nav_area);
        }
    }
}

fn draw_tab(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    tab: Tab,
    spinner_frame: usize,
) {
    match tab {
        Tab::Home => Home::new(&mut tui.home).render(frame, area),
        Tab::Chat => {
            if let Some(conversation) = app.conversation.as_ref() {
                ChatView::new(&mut tui.chat, conversation, spinner_frame).render(frame, area);
            }
        }
        Tab::Weather => WeatherPanel.render(frame, area),
        Tab::Market => MarketPanel.render(frame, area),
        Tab::Profile => {
            if let Some(profile) = app.profile() {
                ProfilePanel::new(profile).render(frame, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::profile::LoginFields;
    use crate::test_support::{chat_app, logged_in_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.sync(app);
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn logged_out_shows_login_form() {
        let app = App::new();
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Farmer Details"));
    }

    #[test]
    fn pending_login_shows_loader() {
        let mut app = App::new();
        update(&mut app, Action::SubmitLogin(LoginFields::default()));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Connecting to Kerala Krishi AI"));
        assert!(!text.contains("Farmer Details"));
    }

    #[test]
    fn shell_shows_home_and_nav() {
        let app = logged_in_app();
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Common Problems"));
        assert!(text.contains("Weather"));
        assert!(text.contains("Profile"));
    }

    #[test]
    fn chat_tab_shows_greeting() {
        let app = chat_app();
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("agriculture assistant"));
    }

    #[test]
    fn profile_tab_shows_default_name() {
        let mut app = logged_in_app();
        update(&mut app, Action::SelectTab(Tab::Profile));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Kottayam, Kerala"));
        assert!(text.contains("Logout"));
    }
}
