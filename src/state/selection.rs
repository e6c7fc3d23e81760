//! Selection of the application subtree to display.

use crate::filter::{filter_config_query, FilterQuery};
use crate::model::{ConfigRoot, HueConfigSnapshot};

/// Application whose presence in a snapshot always wins the initial selection.
pub const DESKTOP_APP: &str = "desktop";

/// Application selected after a load when the snapshot has no `desktop` app
/// and no other default is configured.
pub const DEFAULT_SELECTED_APP: &str = DESKTOP_APP;

/// Choose the application to select after a successful load.
///
/// Starts from `default_app`; a snapshot listing [`DESKTOP_APP`] overrides it.
#[must_use]
pub fn initial_app(default_app: &str, snapshot: &HueConfigSnapshot) -> String {
    if snapshot.has_app(DESKTOP_APP) {
        DESKTOP_APP.to_string()
    } else {
        default_app.to_string()
    }
}

/// What the presentation layer should show for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayDirective<'a> {
    /// The selected app has no root, or the filter removed it.
    Nothing,
    /// The selected root survived but has no entries to list.
    EmptySection(&'a ConfigRoot),
    /// The selected root with at least one entry.
    Tree(&'a ConfigRoot),
}

impl DisplayDirective<'_> {
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

/// Derives the filtered roots and the selected root from the current
/// application id and filter text.
///
/// Derived data is recomputed synchronously whenever an input changes. A
/// change of application only re-runs the selection scan; a change of filter
/// text re-filters every root first.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected_app: String,
    filter_text: String,
    filtered_config: Vec<ConfigRoot>,
    selected_index: Option<usize>,
}

impl SelectionController {
    /// Create a controller with an empty filter and no derived data.
    pub fn new(selected_app: impl Into<String>) -> Self {
        Self {
            selected_app: selected_app.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn selected_app(&self) -> &str {
        &self.selected_app
    }

    /// Filter text exactly as entered.
    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Case-folded form of the filter text.
    #[must_use]
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(&self.filter_text)
    }

    /// Roots that survive the current filter, in snapshot order.
    #[must_use]
    pub fn filtered_config(&self) -> &[ConfigRoot] {
        &self.filtered_config
    }

    /// Filtered root of the selected application.
    ///
    /// `None` is a valid state: the app may have no configuration, or the
    /// filter may have removed all of it.
    #[must_use]
    pub fn selected_config(&self) -> Option<&ConfigRoot> {
        self.selected_index
            .and_then(|idx| self.filtered_config.get(idx))
    }

    #[must_use]
    pub fn display(&self) -> DisplayDirective<'_> {
        match self.selected_config() {
            None => DisplayDirective::Nothing,
            Some(root) if root.children().map_or(true, <[ConfigRoot]>::is_empty) => {
                DisplayDirective::EmptySection(root)
            }
            Some(root) => DisplayDirective::Tree(root),
        }
    }

    /// Switch application and re-run selection.
    pub fn select_app(&mut self, app: impl Into<String>) {
        self.selected_app = app.into();
        self.reselect();
    }

    /// Change the filter text and re-derive against `snapshot`.
    pub fn set_filter_text(
        &mut self,
        text: impl Into<String>,
        snapshot: Option<&HueConfigSnapshot>,
    ) {
        self.filter_text = text.into();
        self.rebuild(snapshot);
    }

    /// Recompute everything from `snapshot`; no snapshot means nothing to show.
    pub fn rebuild(&mut self, snapshot: Option<&HueConfigSnapshot>) {
        self.filtered_config = match snapshot {
            Some(snapshot) => filter_config_query(&snapshot.config, &self.query()),
            None => Vec::new(),
        };
        self.reselect();
    }

    /// Drop derived data, keeping the selected app and filter text.
    pub fn clear(&mut self) {
        self.filtered_config.clear();
        self.selected_index = None;
    }

    fn reselect(&mut self) {
        self.selected_index = self
            .filtered_config
            .iter()
            .position(|root| root.key == self.selected_app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppDescriptor, ConfigNode};

    fn app(name: &str) -> AppDescriptor {
        AppDescriptor {
            name: name.to_string(),
            display_name: name.to_uppercase(),
            has_ui: true,
        }
    }

    fn snapshot() -> HueConfigSnapshot {
        HueConfigSnapshot {
            apps: vec![app("desktop"), app("beeswax"), app("about")],
            config: vec![
                ConfigNode::group(
                    "desktop",
                    vec![
                        ConfigNode::leaf("http_port", Some("8888".into()), None),
                        ConfigNode::leaf("secret_key", None, None),
                    ],
                ),
                ConfigNode::group(
                    "beeswax",
                    vec![ConfigNode::leaf("hive_server_port", Some("10000".into()), None)],
                ),
            ],
            conf_dir: "/etc/hue/conf".to_string(),
        }
    }

    #[test]
    fn test_initial_app_prefers_desktop() {
        assert_eq!(initial_app("beeswax", &snapshot()), "desktop");
    }

    #[test]
    fn test_initial_app_falls_back_to_default() {
        let mut snap = snapshot();
        snap.apps.retain(|a| a.name != "desktop");
        assert_eq!(initial_app("beeswax", &snap), "beeswax");
    }

    #[test]
    fn test_rebuild_selects_matching_root() {
        let snap = snapshot();
        let mut selection = SelectionController::new("beeswax");
        selection.rebuild(Some(&snap));

        assert_eq!(selection.filtered_config().len(), 2);
        assert_eq!(selection.selected_config().map(|r| r.key.as_str()), Some("beeswax"));
        assert!(matches!(selection.display(), DisplayDirective::Tree(_)));
    }

    #[test]
    fn test_app_without_root_shows_nothing() {
        let snap = snapshot();
        let mut selection = SelectionController::new("about");
        selection.rebuild(Some(&snap));

        assert!(selection.selected_config().is_none());
        assert!(selection.display().is_nothing());
    }

    #[test]
    fn test_filtered_out_app_shows_nothing() {
        let snap = snapshot();
        let mut selection = SelectionController::new("desktop");
        selection.set_filter_text("hive", Some(&snap));

        assert_eq!(selection.filtered_config().len(), 1);
        assert!(selection.selected_config().is_none());
        assert!(selection.display().is_nothing());
    }

    #[test]
    fn test_filter_text_is_case_folded() {
        let snap = snapshot();
        let mut selection = SelectionController::new("desktop");
        selection.set_filter_text("HTTP", Some(&snap));

        assert_eq!(selection.filter_text(), "HTTP");
        let root = selection.selected_config().unwrap();
        assert_eq!(root.children().unwrap().len(), 1);
        assert_eq!(root.children().unwrap()[0].key, "http_port");
    }

    #[test]
    fn test_select_app_reuses_filtered_roots() {
        let snap = snapshot();
        let mut selection = SelectionController::new("desktop");
        selection.set_filter_text("port", Some(&snap));
        selection.select_app("beeswax");

        assert_eq!(selection.selected_app(), "beeswax");
        assert_eq!(selection.selected_config().map(|r| r.key.as_str()), Some("beeswax"));
    }

    #[test]
    fn test_empty_group_root_is_empty_section() {
        let mut snap = snapshot();
        snap.config.push(ConfigNode::group("about", vec![]));
        let mut selection = SelectionController::new("about");
        selection.rebuild(Some(&snap));

        assert!(matches!(
            selection.display(),
            DisplayDirective::EmptySection(root) if root.key == "about"
        ));
    }

    #[test]
    fn test_rebuild_without_snapshot_is_empty() {
        let mut selection = SelectionController::new("desktop");
        selection.set_filter_text("port", None);
        assert!(selection.filtered_config().is_empty());
        assert!(selection.display().is_nothing());
    }

    #[test]
    fn test_clear_keeps_inputs() {
        let snap = snapshot();
        let mut selection = SelectionController::new("desktop");
        selection.set_filter_text("port", Some(&snap));
        selection.clear();

        assert_eq!(selection.selected_app(), "desktop");
        assert_eq!(selection.filter_text(), "port");
        assert!(selection.selected_config().is_none());
    }
}
