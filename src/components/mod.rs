// ABOUTME: UI components: the layout shell, sidebar, overlays and one renderer per page

pub mod common;
pub mod dashboard;
pub mod documents;
pub mod help;
pub mod landing;
pub mod layout;
pub mod matches;
pub mod messages;
pub mod not_found;
pub mod profile;
pub mod selection;
pub mod settings;
pub mod sidebar;
pub mod sign_in;
pub mod tasks;
pub mod theme;
pub mod toast;
pub mod wizard;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use sidebar::{SidebarComponent, SidebarItem, SidebarState};
pub use toast::ToastComponent;
