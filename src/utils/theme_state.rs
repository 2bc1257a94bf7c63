use std::fmt::{ Display, Formatter };
use std::str::FromStr;

/// Storage key holding the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Prefix shared by every theme class applied to the page body.
pub const THEME_CLASS_PREFIX: &str = "theme_";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Body class for this theme, e.g. `theme_dark`.
    pub fn css_class(&self) -> String {
        format!("{}{}", THEME_CLASS_PREFIX, self.as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeControl {
    pub id: ControlId,
    pub theme: Theme,
    pub active: bool,
    pub disabled: bool,
}

impl ThemeControl {
    /// Classes matching the header markup of the page stylesheet.
    pub fn class_name(&self) -> String {
        let mut class = format!(
            "header__theme-menu-button header__theme-menu-button_type_{}",
            self.theme.as_str()
        );
        if self.active {
            class.push_str(" header__theme-menu-button_active");
        }
        class
    }
}

/// The theme menu buttons. Each control is bound to exactly one theme and
/// the binding never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeControls {
    controls: Vec<ThemeControl>,
}

impl ThemeControls {
    /// Builds one control per theme. Duplicate themes are dropped so the
    /// mapping stays one-to-one.
    pub fn new(themes: &[Theme]) -> Self {
        let mut controls: Vec<ThemeControl> = Vec::with_capacity(themes.len());
        for theme in themes {
            if controls.iter().any(|c| c.theme == *theme) {
                log::warn!("Duplicate theme control for {}, skipping", theme);
                continue;
            }
            controls.push(ThemeControl {
                id: ControlId(controls.len()),
                theme: *theme,
                active: false,
                disabled: false,
            });
        }
        Self { controls }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeControl> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn theme_of(&self, id: ControlId) -> Option<Theme> {
        self.controls.iter().find(|c| c.id == id).map(|c| c.theme)
    }

    pub fn control_for(&self, theme: Theme) -> Option<&ThemeControl> {
        self.controls.iter().find(|c| c.theme == theme)
    }

    pub fn active(&self) -> Option<&ThemeControl> {
        self.controls.iter().find(|c| c.active)
    }

    pub fn clear(&mut self) {
        for control in self.controls.iter_mut() {
            control.active = false;
            control.disabled = false;
        }
    }

    /// Marks the control bound to `theme`. Returns false if no control
    /// carries that theme.
    pub fn mark(&mut self, theme: Theme) -> bool {
        match self.controls.iter_mut().find(|c| c.theme == theme) {
            Some(control) => {
                control.active = true;
                control.disabled = true;
                true
            }
            None => false,
        }
    }
}

impl Default for ThemeControls {
    fn default() -> Self {
        Self::new(&Theme::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_only() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("auto".parse::<Theme>(), Ok(Theme::Auto));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn css_class_uses_prefix() {
        assert_eq!(Theme::Light.css_class(), "theme_light");
    }

    #[test]
    fn duplicate_themes_are_dropped() {
        let controls = ThemeControls::new(&[Theme::Dark, Theme::Dark, Theme::Light]);
        assert_eq!(controls.len(), 2);
        assert_eq!(controls.theme_of(ControlId(1)), Some(Theme::Light));
    }

    #[test]
    fn active_control_class() {
        let mut controls = ThemeControls::default();
        controls.mark(Theme::Auto);
        let auto = controls.control_for(Theme::Auto).unwrap();
        assert!(auto.class_name().ends_with("header__theme-menu-button_active"));
        assert!(auto.disabled);
    }
}
