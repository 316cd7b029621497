// ABOUTME: Filtering scenarios over the seed data, directly and through the list pages

use caprae::app::{App, EventHandler};
use caprae::config::AppConfig;
use caprae::filter::{filter, CategoryFilter};
use caprae::models::{seed, BuyerStatus, DocumentCategory, MatchStatus, ReadState, TaskStatus};
use caprae::pages::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

fn names<'a>(rows: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    rows.into_iter().map(String::as_str).collect()
}

fn press(app: &mut App, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(event) = EventHandler::handle_key_event(key, &mut app.state) {
        EventHandler::process_event(event, &mut app.state);
    }
}

#[test]
fn test_sarah_search_finds_only_sarah_chen() {
    let buyers = seed::buyers();
    let rows = filter(&buyers, "Sarah", CategoryFilter::All);
    assert_eq!(names(rows.iter().map(|b| &b.name)), vec!["Sarah Chen"]);
}

#[test]
fn test_status_filter_keeps_source_order() {
    let buyers = seed::buyers();
    let rows = filter(&buyers, "", CategoryFilter::Only(BuyerStatus::ResearchPhase));
    let expected: Vec<_> = buyers
        .iter()
        .filter(|b| b.status == BuyerStatus::ResearchPhase)
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(names(rows.iter().map(|b| &b.name)), expected);
    assert!(!rows.is_empty());

    let ready = filter(&buyers, "", CategoryFilter::Only(BuyerStatus::ReadyToBuy));
    assert_eq!(
        names(ready.iter().map(|b| &b.name)),
        vec!["Sarah Chen", "David Thompson"]
    );
}

#[test]
fn test_filtering_twice_changes_nothing() {
    let buyers = seed::buyers();
    let once: Vec<_> = filter(&buyers, "tech", CategoryFilter::All)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter(&once, "tech", CategoryFilter::All);
    assert_eq!(twice.len(), once.len());

    let tasks = seed::tasks();
    let once: Vec<_> = filter(&tasks, "review", CategoryFilter::Only(TaskStatus::Pending))
        .into_iter()
        .cloned()
        .collect();
    let twice = filter(&once, "review", CategoryFilter::Only(TaskStatus::Pending));
    let ids = |rows: &[&caprae::models::Task]| rows.iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
}

#[test]
fn test_search_is_case_insensitive_and_covers_industries() {
    let buyers = seed::buyers();
    let upper = filter(&buyers, "HEALTHCARE", CategoryFilter::All);
    let lower = filter(&buyers, "healthcare", CategoryFilter::All);
    assert_eq!(upper.len(), lower.len());
    assert!(!upper.is_empty());
    assert!(upper.iter().all(|b| b.industries.iter().any(|i| i == "Healthcare")));
}

#[test]
fn test_each_list_searches_its_own_fields() {
    let matches = seed::matches();
    let by_company = filter(&matches, "rodriguez capital", CategoryFilter::All);
    assert_eq!(names(by_company.iter().map(|m| &m.name)), vec!["Michael Rodriguez"]);
    let pending = filter(&matches, "", CategoryFilter::Only(MatchStatus::PendingResponse));
    assert_eq!(names(pending.iter().map(|m| &m.name)), vec!["Emily Park"]);

    let conversations = seed::conversations();
    let unread = filter(&conversations, "", CategoryFilter::Only(ReadState::Unread));
    assert_eq!(
        names(unread.iter().map(|c| &c.name)),
        vec!["Sarah Chen", "Emily Park"]
    );

    let tasks = seed::tasks();
    // Description only
    let by_description = filter(&tasks, "data room", CategoryFilter::All);
    assert_eq!(by_description.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);

    let documents = seed::documents();
    let financial = filter(&documents, "", CategoryFilter::Only(DocumentCategory::Financial));
    assert_eq!(financial.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 4]);
    // Status text is not searched
    assert!(filter(&documents, "verified", CategoryFilter::All).is_empty());
}

#[test]
fn test_no_match_is_an_empty_list() {
    let buyers = seed::buyers();
    assert!(filter(&buyers, "zzz", CategoryFilter::All).is_empty());
    assert!(filter(&buyers, "Sarah", CategoryFilter::Only(BuyerStatus::ResearchPhase)).is_empty());
}

#[test]
fn test_dashboard_search_and_status_by_keyboard() {
    let mut app = App::new(AppConfig {
        start_path: "/dashboard".to_string(),
        ..AppConfig::default()
    });

    press(&mut app, KeyCode::Char('/'));
    for c in "Sarah".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let Page::Dashboard(page) = &app.state.page else {
        panic!("expected dashboard");
    };
    assert_eq!(page.result_line(), "Showing 1 qualified buyers");
    assert_eq!(page.selected().map(|b| b.name.as_str()), Some("Sarah Chen"));

    // Clear the search, then step from All to Ready to Buy to Research Phase
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);

    let Page::Dashboard(page) = &app.state.page else {
        panic!("expected dashboard");
    };
    assert_eq!(page.list.filter.category, CategoryFilter::Only(BuyerStatus::ResearchPhase));
    assert!(page.visible().iter().all(|b| b.status == BuyerStatus::ResearchPhase));
    assert_eq!(page.visible().len(), 1);
}
