// ABOUTME: Top-level layout: optional sidebar, the current page, status bar and overlays

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::dashboard::DashboardComponent;
use super::documents::DocumentsComponent;
use super::help::HelpComponent;
use super::landing::LandingComponent;
use super::matches::MatchesComponent;
use super::messages::MessagesComponent;
use super::not_found::NotFoundComponent;
use super::profile::ProfileComponent;
use super::selection::SelectionComponent;
use super::settings::SettingsComponent;
use super::sidebar::{SidebarComponent, SidebarItem};
use super::sign_in::SignInComponent;
use super::tasks::TasksComponent;
use super::theme::{CORNFLOWER_BLUE, DARK_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE};
use super::toast::ToastComponent;
use super::wizard::WizardComponent;
use crate::app::AppState;
use crate::pages::Page;

pub struct LayoutComponent {
    sidebar: SidebarComponent,
    help: HelpComponent,
    toasts: ToastComponent,
    landing: LandingComponent,
    sign_in: SignInComponent,
    selection: SelectionComponent,
    wizard: WizardComponent,
    dashboard: DashboardComponent,
    matches: MatchesComponent,
    messages: MessagesComponent,
    tasks: TasksComponent,
    documents: DocumentsComponent,
    profile: ProfileComponent,
    settings: SettingsComponent,
    not_found: NotFoundComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarComponent::new(),
            help: HelpComponent::new(),
            toasts: ToastComponent::new(),
            landing: LandingComponent::new(),
            sign_in: SignInComponent::new(),
            selection: SelectionComponent::new(),
            wizard: WizardComponent::new(),
            dashboard: DashboardComponent::new(),
            matches: MatchesComponent::new(),
            messages: MessagesComponent::new(),
            tasks: TasksComponent::new(),
            documents: DocumentsComponent::new(),
            profile: ProfileComponent::new(),
            settings: SettingsComponent::new(),
            not_found: NotFoundComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let content = if state.shows_sidebar() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SidebarComponent::recommended_width(&state.sidebar)),
                    Constraint::Min(0),
                ])
                .split(rows[0]);
            let active = SidebarItem::for_route(state.current_route());
            self.sidebar.render(frame, columns[0], &state.sidebar, active);
            inset(columns[1])
        } else {
            inset(rows[0])
        };

        self.render_page(frame, content, &state.page);
        self.render_status_bar(frame, rows[1], state);

        if state.help_visible {
            self.help.render(frame, area);
        }

        self.toasts.render(frame, area, state.toasts.current());
    }

    fn render_page(&self, frame: &mut Frame, area: Rect, page: &Page) {
        match page {
            Page::Landing(p) => self.landing.render(frame, area, p),
            Page::SignIn(p) => self.sign_in.render(frame, area, p),
            Page::Selection(p) => self.selection.render(frame, area, p),
            Page::Wizard(p) => self.wizard.render(frame, area, p),
            Page::Dashboard(p) => self.dashboard.render(frame, area, p),
            Page::Matches(p) => self.matches.render(frame, area, p),
            Page::Messages(p) => self.messages.render(frame, area, p),
            Page::Tasks(p) => self.tasks.render(frame, area, p),
            Page::Documents(p) => self.documents.render(frame, area, p),
            Page::Profile(p) => self.profile.render(frame, area, p),
            Page::Settings(p) => self.settings.render(frame, area, p),
            Page::NotFound(p) => self.not_found.render(frame, area, p),
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let route = state.current_route();
        let focus = if !state.shows_sidebar() {
            ""
        } else if state.sidebar.is_focused {
            "  focus: sidebar"
        } else {
            "  focus: page"
        };
        let status = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", route.path()),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(route.title(), Style::default().fg(SOFT_WHITE)),
            Span::styled(focus, Style::default().fg(MUTED_GRAY)),
            Span::styled("   ? help · q quit", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Left)
        .style(Style::default().bg(PANEL_BG));
        frame.render_widget(status, area);
    }
}

/// Leave a one-cell margin around page content
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
