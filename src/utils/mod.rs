pub mod presentation;
pub mod storage;
pub mod theme_controller;
pub mod theme_state;
pub mod upload_state;

pub use presentation::{ BodyClassScope, PresentationScope, PAGE_CLASS };
pub use storage::{ LocalStorage, PreferenceStore };
pub use theme_controller::ThemePreferenceController;
pub use theme_state::{ ControlId, Theme, ThemeControl, ThemeControls, UnknownTheme };
pub use upload_state::UploadState;

/// The controller wired to the real browser page.
pub type PageThemeController = ThemePreferenceController<LocalStorage, BodyClassScope>;
