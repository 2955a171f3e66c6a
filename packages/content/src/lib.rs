pub mod config;
pub mod disclosure;
pub mod document;
pub mod error;
pub mod layout;
pub mod nav;
pub mod normalize;
pub mod observe;
pub mod print;
pub mod reveal;
pub mod theme;
pub mod view_model;

mod memory;
pub use memory::MemoryThemeStore;

pub use config::SiteConfig;
pub use disclosure::DisclosureState;
pub use document::ResumeDocument;
pub use error::ContentError;
pub use layout::{NameParts, RoleBlock};
pub use nav::ActiveSection;
pub use normalize::normalize;
pub use observe::Intersection;
pub use print::PrintCoordinator;
pub use reveal::RevealTracker;
pub use theme::{Theme, ThemeStore};
pub use view_model::{ResumeViewModel, RoleView};
