// ABOUTME: Render the layout into a test backend and check what lands on screen

use caprae::app::{App, EventHandler};
use caprae::components::LayoutComponent;
use caprae::config::AppConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

fn app_at(path: &str) -> App {
    App::new(AppConfig {
        start_path: path.to_string(),
        ..AppConfig::default()
    })
}

fn press(app: &mut App, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(event) = EventHandler::handle_key_event(key, &mut app.state) {
        EventHandler::process_event(event, &mut app.state);
    }
}

/// Draw one frame and return the screen as text, one line per row
fn render(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal
        .draw(|frame| {
            layout.render(frame, &app.state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_landing_shows_actions_without_sidebar() {
    let app = app_at("/");
    let screen = render(&app, 140, 45);

    assert!(screen.contains("Get Started"));
    assert!(screen.contains("Sell My Business"));
    assert!(screen.contains("$2.3B"));
    assert!(!screen.contains("Anne Smith"), "landing page has no sidebar");
}

#[test]
fn test_dashboard_shows_sidebar_and_buyers() {
    let app = app_at("/dashboard");
    let screen = render(&app, 140, 45);

    assert!(screen.contains("Caprae Capital"));
    assert!(screen.contains("Anne Smith"));
    assert!(screen.contains("Seller Account"));
    assert!(screen.contains("Log out"));
    assert!(screen.contains("Showing 4 qualified buyers"));
    assert!(screen.contains("Sarah Chen"));
    assert!(screen.contains("/dashboard"));
}

#[test]
fn test_collapsed_sidebar_hides_labels() {
    let mut app = app_at("/tasks");
    press(&mut app, KeyCode::Char('b'));
    let screen = render(&app, 140, 45);

    assert!(!screen.contains("Anne Smith"));
    assert!(screen.contains("Total Tasks"));
}

#[test]
fn test_empty_dashboard_filter_explains_itself() {
    let mut app = app_at("/dashboard");
    press(&mut app, KeyCode::Char('/'));
    for c in "zzz".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app, 160, 45);

    assert!(screen.contains("Showing 0 qualified buyers"));
    assert!(screen.contains("No buyers found."));
}

#[test]
fn test_wizard_shows_progress_and_step() {
    let app = app_at("/onboarding/buyer");
    let screen = render(&app, 120, 45);

    assert!(screen.contains("Step 1 of 5"));
    assert!(screen.contains("20% complete"));
    assert!(screen.contains("Let's get started!"));
    assert!(screen.contains("Full Name"));
    assert!(screen.contains("Continue"));
}

#[test]
fn test_unknown_path_renders_not_found() {
    let app = app_at("/nowhere");
    let screen = render(&app, 120, 40);

    assert!(screen.contains("404"));
    assert!(screen.contains("/nowhere"));
    assert!(screen.contains("Return to Home"));
}

#[test]
fn test_help_overlay_and_toasts_draw_on_top() {
    let mut app = app_at("/dashboard");
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&app, 140, 45);
    assert!(screen.contains("Press ? or Esc to close"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Tab);
    for _ in 0..8 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    app.tick();

    let screen = render(&app, 140, 45);
    assert!(screen.contains("Logged out successfully"));
    assert!(screen.contains("Welcome back"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    for path in [
        "/",
        "/signin",
        "/onboarding",
        "/onboarding/seller",
        "/dashboard",
        "/matches",
        "/messages",
        "/tasks",
        "/documents",
        "/profile",
        "/settings",
        "/missing",
    ] {
        let app = app_at(path);
        let _ = render(&app, 30, 10);
        let _ = render(&app, 1, 1);
    }
}
