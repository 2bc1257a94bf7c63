use crate::utils::theme_state::{ Theme, THEME_CLASS_PREFIX };

/// Base class every page body carries; the stylesheet hangs its theme
/// variables off it.
pub const PAGE_CLASS: &str = "page";

/// The page-level scope a theme is applied to.
pub trait PresentationScope {
    /// Replaces any previously applied theme tag with the one for `theme`.
    fn apply_theme(&mut self, theme: Theme);

    fn current_theme_tag(&self) -> Option<String>;
}

/// Theme tags present in `classes`.
pub fn stale_theme_classes<'a>(classes: impl Iterator<Item = &'a str>) -> Vec<String> {
    classes
        .filter(|class| class.starts_with(THEME_CLASS_PREFIX))
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassChanges {
    pub remove: Vec<String>,
    pub add: Vec<String>,
}

/// Edits that leave `classes` with the page class and exactly one theme tag,
/// the one for `theme`. Unrelated classes are untouched.
pub fn theme_class_changes<'a>(
    classes: impl Iterator<Item = &'a str> + Clone,
    theme: Theme
) -> ClassChanges {
    let mut add = Vec::with_capacity(2);
    if !classes.clone().any(|class| class == PAGE_CLASS) {
        add.push(PAGE_CLASS.to_string());
    }
    add.push(theme.css_class());
    ClassChanges {
        remove: stale_theme_classes(classes),
        add,
    }
}

/// Applies themes as a class on `document.body`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyClassScope;

impl BodyClassScope {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
    }

    fn classes(list: &web_sys::DomTokenList) -> Vec<String> {
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    /// Puts the page class on the body. Called once at startup so the
    /// default presentation is styled before any theme is chosen.
    pub fn mark_page() {
        match Self::body() {
            Some(body) => {
                if let Err(e) = body.class_list().add_1(PAGE_CLASS) {
                    log::error!("Failed to add page class: {:?}", e);
                }
            }
            None => log::warn!("No document body, cannot add page class"),
        }
    }
}

impl PresentationScope for BodyClassScope {
    fn apply_theme(&mut self, theme: Theme) {
        let Some(body) = Self::body() else {
            log::warn!("No document body, cannot apply theme {}", theme);
            return;
        };
        let list = body.class_list();
        let current = Self::classes(&list);
        let changes = theme_class_changes(current.iter().map(String::as_str), theme);
        for class in &changes.remove {
            let _ = list.remove_1(class);
        }
        for class in &changes.add {
            if let Err(e) = list.add_1(class) {
                log::error!("Failed to add class {}: {:?}", class, e);
            }
        }
    }

    fn current_theme_tag(&self) -> Option<String> {
        let body = Self::body()?;
        let current = Self::classes(&body.class_list());
        stale_theme_classes(current.iter().map(String::as_str)).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_theme_tag() {
        let classes = ["page", "theme_dark", "menu-open", "theme_auto"];
        assert_eq!(stale_theme_classes(classes.into_iter()), vec!["theme_dark", "theme_auto"]);
    }

    #[test]
    fn replaces_all_prior_tags() {
        let classes = ["page", "theme_dark", "theme_auto"];
        let changes = theme_class_changes(classes.into_iter(), Theme::Light);

        assert_eq!(changes.remove, vec!["theme_dark", "theme_auto"]);
        assert_eq!(changes.add, vec!["theme_light"]);
    }

    #[test]
    fn adds_page_class_when_missing() {
        let changes = theme_class_changes(["menu-open"].into_iter(), Theme::Dark);

        assert!(changes.remove.is_empty());
        assert_eq!(changes.add, vec!["page", "theme_dark"]);
    }

    #[test]
    fn reapplying_same_theme_is_stable() {
        let changes = theme_class_changes(["page", "theme_auto"].into_iter(), Theme::Auto);

        assert_eq!(changes.remove, vec!["theme_auto"]);
        assert_eq!(changes.add, vec!["theme_auto"]);
    }
}
