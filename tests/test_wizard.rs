// ABOUTME: Onboarding wizard scenarios for both personas, from the controller up to key presses

use std::cell::RefCell;

use caprae::app::{App, EventHandler};
use caprae::config::AppConfig;
use caprae::notify::{Notification, Notifier};
use caprae::pages::{Page, PageAction, PageContext, WizardPage};
use caprae::router::{Navigator, Route};
use caprae::wizard::{fields, Persona, StepTransition, WizardController, BUYER, SELLER};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingNavigator(Vec<Route>);

impl Navigator for RecordingNavigator {
    fn push(&mut self, route: Route) {
        self.0.push(route);
    }
}

#[derive(Default)]
struct RecordingNotifier(RefCell<Vec<Notification>>);

impl Notifier for RecordingNotifier {
    fn emit(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

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

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn wizard(app: &App) -> &WizardPage {
    match &app.state.page {
        Page::Wizard(page) => page,
        other => panic!("expected wizard page, got {other:?}"),
    }
}

fn current_step(app: &App) -> usize {
    wizard(app).controller().current_step()
}

#[test]
fn test_every_step_opens_exactly_when_its_minimum_is_met() {
    let mut buyer = WizardController::new(&BUYER);
    for step in 1..=5 {
        assert!(!buyer.can_proceed_at(step, buyer.form()), "buyer step {step}");
    }
    buyer.set_single_value(fields::FULL_NAME, "Sarah Chen").unwrap();
    buyer.toggle_multi_select(fields::INDUSTRIES, "Healthcare").unwrap();
    buyer.set_single_value(fields::BUDGET_RANGE, "$5M - $10M").unwrap();
    buyer.set_single_value(fields::LOCATION, "Remote").unwrap();
    buyer.set_single_value(fields::TIMELINE, "Long-term (12+ months)").unwrap();
    for step in 1..=5 {
        assert!(buyer.can_proceed_at(step, buyer.form()), "buyer step {step}");
    }

    let mut seller = WizardController::new(&SELLER);
    seller.set_single_value(fields::FULL_NAME, "John Doe").unwrap();
    // Seller step 1 also needs the business name
    assert!(!seller.can_proceed_at(1, seller.form()));
    seller.set_single_value(fields::BUSINESS_NAME, "TechFlow").unwrap();
    assert!(seller.can_proceed_at(1, seller.form()));
    seller.set_single_value(fields::BUSINESS_TYPE, "Other").unwrap();
    seller.set_single_value(fields::ANNUAL_REVENUE, "$50M+").unwrap();
    seller.set_single_value(fields::ASKING_PRICE, "$750,000").unwrap();
    assert!(!seller.can_proceed_at(5, seller.form()));
    seller.toggle_multi_select(fields::BUYER_TRAITS, "Local Buyer").unwrap();
    for step in 1..=5 {
        assert!(seller.can_proceed_at(step, seller.form()), "seller step {step}");
    }
}

#[test]
fn test_double_toggle_restores_empty_selection() {
    for (config, field, value) in [
        (&BUYER, fields::INDUSTRIES, "Retail"),
        (&SELLER, fields::BUYER_TRAITS, "Private Equity"),
    ] {
        let mut wizard = WizardController::new(config);
        assert_eq!(wizard.toggle_multi_select(field, value).unwrap(), true);
        assert_eq!(wizard.toggle_multi_select(field, value).unwrap(), false);
        assert!(wizard.form().selections(field).is_empty());
    }
}

#[test]
fn test_steps_stay_within_bounds() {
    let mut wizard = WizardController::new(&BUYER);
    for _ in 0..3 {
        wizard.retreat();
    }
    assert_eq!(wizard.current_step(), 1);

    for _ in 0..10 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step(), 5);
    assert_eq!(wizard.advance(), StepTransition::Completed);
    assert_eq!(wizard.current_step(), 5);
}

#[test]
fn test_finishing_navigates_to_dashboard_once() {
    let mut page = WizardPage::new(Persona::Seller);
    let mut navigator = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let mut ctx = PageContext {
        navigator: &mut navigator,
        notifier: &notifier,
    };

    // Full name, then business name on the next row
    for c in "Jo".chars() {
        page.handle(PageAction::Char(c), &mut ctx);
    }
    page.handle(PageAction::Down, &mut ctx);
    for c in "Acme".chars() {
        page.handle(PageAction::Char(c), &mut ctx);
    }
    page.handle(PageAction::Confirm, &mut ctx);
    for _ in 2..=4 {
        page.handle(PageAction::Toggle, &mut ctx);
        page.handle(PageAction::Confirm, &mut ctx);
    }
    page.handle(PageAction::Toggle, &mut ctx);
    assert_eq!(page.controller().current_step(), 5);
    assert_eq!(page.primary_label(), "Complete Setup");

    page.handle(PageAction::Confirm, &mut ctx);

    assert_eq!(navigator.0, vec![Route::Dashboard]);
    assert_eq!(page.controller().current_step(), 5);
    assert!(notifier.0.borrow().is_empty());
}

#[test]
fn test_buyer_flow_by_keyboard_ends_on_dashboard() {
    let mut app = app_at("/onboarding/buyer");

    // Next is ignored while the name is empty
    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 1);

    type_text(&mut app, "Sarah");
    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 2);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Austin, TX");
    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 5);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state.current_route(), &Route::Dashboard);
    assert!(matches!(app.state.page, Page::Dashboard(_)));
    let dashboards = app
        .state
        .router
        .history()
        .iter()
        .filter(|route| **route == Route::Dashboard)
        .count();
    assert_eq!(dashboards, 1);
}

#[test]
fn test_buyer_industry_toggle_gates_next() {
    let mut app = app_at("/onboarding/buyer");
    type_text(&mut app, "Sarah");
    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 2);
    assert!(!wizard(&app).controller().can_proceed());

    // First option is Technology
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(
        wizard(&app).controller().form().selections(fields::INDUSTRIES),
        ["Technology".to_string()]
    );
    assert!(wizard(&app).controller().can_proceed());

    press(&mut app, KeyCode::Char(' '));
    assert!(!wizard(&app).controller().can_proceed());

    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 2);
}

/// Seller wizard on the asking price step with "$1M - $5M" picked and the
/// custom amount input focused
fn seller_with_preset_price() -> App {
    let mut app = app_at("/onboarding/seller");
    type_text(&mut app, "Jo");
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "Acme");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 4);

    // Third preset is "$1M - $5M"
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(asking_price(&app), "$1M - $5M");

    // The custom amount input sits below the presets
    for _ in 0..10 {
        press(&mut app, KeyCode::Down);
    }
    assert!(app.state.wants_text_input());
    app
}

fn asking_price(app: &App) -> &str {
    wizard(app).controller().form().text(fields::ASKING_PRICE)
}

#[test]
fn test_seller_custom_amount_replaces_preset() {
    let mut app = seller_with_preset_price();
    type_text(&mut app, "$2,500,000");

    assert_eq!(asking_price(&app), "$2,500,000");
    assert!(wizard(&app).controller().can_proceed());
}

#[test]
fn test_backspace_after_preset_keeps_asking_price() {
    let mut app = seller_with_preset_price();
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);

    assert_eq!(asking_price(&app), "$1M - $5M");
    assert!(wizard(&app).controller().can_proceed());
}

#[test]
fn test_typed_amount_matching_a_preset_survives_more_typing() {
    let mut app = seller_with_preset_price();
    type_text(&mut app, "$50M+");
    assert_eq!(asking_price(&app), "$50M+");

    press(&mut app, KeyCode::Char('0'));
    assert_eq!(asking_price(&app), "$50M+0");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(asking_price(&app), "$50M+");
}

#[test]
fn test_backspace_on_empty_custom_box_keeps_word_preset() {
    let mut app = seller_with_preset_price();
    // Back up to the first preset, "Under $500K", which the box does not echo
    for _ in 0..12 {
        press(&mut app, KeyCode::Up);
    }
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(asking_price(&app), "Under $500K");
    // Leave the step and come back so the pick is no longer fresh
    press(&mut app, KeyCode::Enter);
    assert_eq!(current_step(&app), 5);
    press(&mut app, KeyCode::Esc);
    assert_eq!(current_step(&app), 4);
    for _ in 0..10 {
        press(&mut app, KeyCode::Down);
    }
    assert!(app.state.wants_text_input());
    press(&mut app, KeyCode::Backspace);

    assert_eq!(asking_price(&app), "Under $500K");
}

#[test]
fn test_esc_goes_back_a_step() {
    let mut app = app_at("/onboarding/buyer");
    press(&mut app, KeyCode::Esc);
    assert_eq!(current_step(&app), 1);
    assert_eq!(app.state.current_route(), &Route::BuyerOnboarding);

    type_text(&mut app, "Sarah");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(current_step(&app), 1);
    // Answers survive going back
    assert_eq!(wizard(&app).controller().form().text(fields::FULL_NAME), "Sarah");
}
