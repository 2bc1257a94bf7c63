use crate::utils::presentation::PresentationScope;
use crate::utils::storage::PreferenceStore;
use crate::utils::theme_state::{ ControlId, Theme, ThemeControls, THEME_STORAGE_KEY };

/// Keeps the applied theme, the persisted preference and the active menu
/// control consistent with each other.
#[derive(Debug)]
pub struct ThemePreferenceController<S, P> {
    controls: ThemeControls,
    store: S,
    scope: P,
    active: Option<Theme>,
    restored: Option<Option<Theme>>,
}

impl<S: PreferenceStore, P: PresentationScope> ThemePreferenceController<S, P> {
    pub fn new(controls: ThemeControls, store: S, scope: P) -> Self {
        Self {
            controls,
            store,
            scope,
            active: None,
            restored: None,
        }
    }

    pub fn select_theme(&mut self, theme: Theme) {
        self.controls.clear();
        self.scope.apply_theme(theme);
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("Theme {} applied but not persisted: {}", theme, e);
        }
        if !self.controls.mark(theme) {
            log::warn!("No control bound to theme {}", theme);
        }
        self.active = Some(theme);
        log::info!("Theme set to {}", theme);
    }

    /// Handles a click on a menu control.
    pub fn select_control(&mut self, id: ControlId) {
        match self.controls.theme_of(id) {
            Some(theme) => self.select_theme(theme),
            None => log::warn!("Ignoring click on unknown theme control {:?}", id),
        }
    }

    /// Applies the stored preference, if any. Runs once; later calls return
    /// the theme restored by the first call without touching anything.
    pub fn restore_on_load(&mut self) -> Option<Theme> {
        if let Some(restored) = self.restored {
            log::debug!("Theme already restored, skipping");
            return restored;
        }

        let stored = match self.store.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not read stored theme: {}", e);
                None
            }
        };

        let theme = match stored.as_deref().map(str::parse::<Theme>) {
            None => None,
            Some(Ok(theme)) => Some(theme),
            Some(Err(e)) => {
                log::warn!("Ignoring stored preference: {}", e);
                None
            }
        };

        if let Some(theme) = theme {
            self.select_theme(theme);
        }
        self.restored = Some(theme);
        theme
    }

    pub fn active_theme(&self) -> Option<Theme> {
        self.active
    }

    pub fn controls(&self) -> &ThemeControls {
        &self.controls
    }

    pub fn is_restored(&self) -> bool {
        self.restored.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scope(&self) -> &P {
        &self.scope
    }

    /// Splits the controller back into its dependencies.
    pub fn into_parts(self) -> (ThemeControls, S, P) {
        (self.controls, self.store, self.scope)
    }
}
