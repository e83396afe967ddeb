//! Integration tests for linkdeck
//!
//! These tests drive the store, the render engine and the controller through
//! the public API and verify the persisted state after each interaction.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linkdeck::app::Dashboard;
use linkdeck::core::defaults::builtin_bookmarks;
use linkdeck::core::{selected_index, Button, LinksTarget, Tab, ThemeId};
use linkdeck::dom::{attr, class, Document};
use linkdeck::error::Result;
use linkdeck::handler::action::handle_key;
use linkdeck::handler::{Controller, LinkOpener, Outcome, UiEvent};
use linkdeck::render::render_all;
use linkdeck::store::{BookmarkStore, FileStore, KeyValueStore, MemoryStore, BOOKMARKS_KEY};
use tempfile::TempDir;

const DOCS_TEMPLATE: &str = "https://example.com/docs/<v>/index.html";

/// Two tabs; `t1` has a versioned storybook button and a plain repo link
fn sample_tabs() -> Vec<Tab> {
    let mut one = Tab::new("t1", "One");
    one.github
        .buttons
        .push(Button::link("Repo", "https://github.com/x/one"));
    one.storybooks.buttons.push(Button::versioned(
        "Storybook",
        "https://sb.example.com",
        DOCS_TEMPLATE,
    ));
    let mut two = Tab::new("t2", "Two");
    two.website
        .buttons
        .push(Button::link("Site", "https://two.example.com"));
    vec![one, two]
}

fn memory_store() -> BookmarkStore<MemoryStore> {
    BookmarkStore::new(MemoryStore::new(), sample_tabs())
}

/// Render `tabs` into a fresh document the way the dashboard does at startup
fn rendered(tabs: &[Tab], theme: ThemeId) -> Document {
    let mut doc = Document::new();
    render_all(&mut doc, tabs, theme);
    doc.set_theme_class(theme);
    doc
}

// =============================================================================
// Persistence Store Tests
// =============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_round_trip_file_store() {
        let temp = TempDir::new().unwrap();
        let mut store = BookmarkStore::new(FileStore::new(temp.path()), Vec::new());

        let mut tabs = sample_tabs();
        tabs[1].selected = true;
        tabs[0].links_target = LinksTarget::Blank;
        store.save_bookmarks(&tabs).unwrap();

        assert_eq!(store.load_bookmarks(), tabs);
        assert!(temp.path().join(BOOKMARKS_KEY).exists());
    }

    #[test]
    fn test_corrupt_storage_self_heals() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileStore::new(temp.path());
        backend.set(BOOKMARKS_KEY, "{ not json").unwrap();

        let mut store = BookmarkStore::new(backend, sample_tabs());
        assert_eq!(store.load_bookmarks(), sample_tabs());
        // The heal was persisted, not just returned
        assert_eq!(store.load_bookmarks(), sample_tabs());
        let raw = store.backend().get(BOOKMARKS_KEY).unwrap().unwrap();
        let parsed: Vec<Tab> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, sample_tabs());
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let mut store = memory_store();
        assert!(store.backend().is_empty());

        let tabs = store.load_bookmarks();
        assert_eq!(tabs, sample_tabs());
        assert!(store.backend().get(BOOKMARKS_KEY).unwrap().is_some());

        // A second store over the same backend sees the written set
        let backend = store.backend().clone();
        let mut other = BookmarkStore::new(backend, Vec::new());
        assert_eq!(other.load_bookmarks(), sample_tabs());
    }

    #[test]
    fn test_theme_defaults_to_white() {
        let mut store = memory_store();
        assert_eq!(store.load_theme(), ThemeId::White);
        store.save_theme(ThemeId::G100).unwrap();
        assert_eq!(store.load_theme(), ThemeId::G100);
        store.reset().unwrap();
        assert_eq!(store.load_theme(), ThemeId::White);
    }

    #[test]
    fn test_builtin_defaults_are_valid() {
        let tabs = builtin_bookmarks().unwrap();
        assert!(!tabs.is_empty());
        assert!(tabs.iter().filter(|t| t.selected).count() <= 1);
    }
}

// =============================================================================
// Render Engine Tests
// =============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_render_all_is_idempotent() {
        let tabs = sample_tabs();
        let mut doc = Document::new();
        render_all(&mut doc, &tabs, ThemeId::G10);
        let first = doc.clone();
        render_all(&mut doc, &tabs, ThemeId::G10);
        assert_eq!(doc, first);
        assert_eq!(doc.outline(), first.outline());
    }

    #[test]
    fn test_one_header_and_panel_per_tab() {
        let doc = rendered(&sample_tabs(), ThemeId::White);
        assert_eq!(doc.tab_ids(), vec!["t1".to_string(), "t2".to_string()]);
        assert!(doc.find_by_id("t1-panel").is_some());
        assert!(doc.find_by_id("t2-panel").is_some());
        assert_eq!(doc.query_class(class::THEME_SELECTOR).len(), 2);
        assert_eq!(doc.query_class(class::LINK_TOGGLE).len(), 2);
    }

    #[test]
    fn test_selected_tab_drives_initial_view() {
        let mut tabs = sample_tabs();
        tabs[1].selected = true;
        let doc = rendered(&tabs, ThemeId::White);
        assert_eq!(doc.active_tab_id(), Some("t2"));

        let panel = doc.active_panel().unwrap();
        assert_eq!(doc.get(&panel).unwrap().id.as_deref(), Some("t2-panel"));
        let hidden = doc.find_by_id("t1-panel").unwrap();
        assert!(doc.get(&hidden).unwrap().hidden);
    }

    #[test]
    fn test_toggle_reflects_links_target() {
        let mut tabs = sample_tabs();
        tabs[0].links_target = LinksTarget::Blank;
        let doc = rendered(&tabs, ThemeId::White);
        let toggles = doc.query_class(class::LINK_TOGGLE);
        assert!(doc.get(&toggles[0]).unwrap().is_checked());
        assert!(!doc.get(&toggles[1]).unwrap().is_checked());
        assert_eq!(
            doc.get(&toggles[1]).unwrap().attr(attr::DATA_TAB_ID),
            Some("t2")
        );
    }
}

// =============================================================================
// Controller Tests
// =============================================================================

mod controller_tests {
    use super::*;

    fn setup() -> (Controller<MemoryStore>, Document) {
        let mut store = memory_store();
        let tabs = store.load_bookmarks();
        let theme = store.load_theme();
        (Controller::new(store), rendered(&tabs, theme))
    }

    #[test]
    fn test_tab_selection_keeps_single_selection() {
        let (mut controller, mut doc) = setup();
        for id in ["t2", "t1", "t2"] {
            let outcome = controller
                .dispatch(&mut doc, UiEvent::TabSelected { id: id.into() })
                .unwrap();
            assert_eq!(outcome, Outcome::Applied);
            let tabs = controller.store_mut().load_bookmarks();
            assert_eq!(tabs.iter().filter(|t| t.selected).count(), 1);
            assert_eq!(tabs[selected_index(&tabs).unwrap()].id, id);
        }
    }

    #[test]
    fn test_theme_propagates_to_every_selector() {
        let (mut controller, mut doc) = setup();
        let source = doc.query_class(class::THEME_SELECTOR)[1].clone();
        let outcome = controller
            .dispatch(
                &mut doc,
                UiEvent::ThemeChanged {
                    source,
                    value: "g90".into(),
                },
            )
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(doc.theme_class(), "theme-zone-g90");
        for path in doc.query_class(class::THEME_SELECTOR) {
            assert_eq!(doc.get(&path).unwrap().attr(attr::VALUE), Some("g90"));
        }
        assert_eq!(controller.store().load_theme(), ThemeId::G90);
    }

    #[test]
    fn test_theme_event_from_other_control_is_ignored() {
        let (mut controller, mut doc) = setup();
        let toggle = doc.query_class(class::LINK_TOGGLE)[0].clone();
        let outcome = controller
            .dispatch(
                &mut doc,
                UiEvent::ThemeChanged {
                    source: toggle,
                    value: "g100".into(),
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(doc.theme_class(), "theme-zone-white");
        assert_eq!(controller.store().load_theme(), ThemeId::White);
    }

    fn click_open_with_version(version: &str) -> Outcome {
        let (mut controller, mut doc) = setup();
        let input = doc.query_class(class::VERSION_INPUT)[0].clone();
        doc.get_mut(&input).unwrap().set_attr(attr::VALUE, version);
        let open = doc.query_class(class::OPEN_VERSION_BTN)[0].clone();
        controller
            .dispatch(&mut doc, UiEvent::PanelClicked { target: open })
            .unwrap()
    }

    #[test]
    fn test_versioned_url_default() {
        assert_eq!(
            click_open_with_version("latest"),
            Outcome::Open {
                url: "https://example.com/docs/latest/index.html".into(),
                target: LinksTarget::Current,
            }
        );
    }

    #[test]
    fn test_versioned_url_explicit_version() {
        assert_eq!(
            click_open_with_version(" 2.3.0 "),
            Outcome::Open {
                url: "https://example.com/docs/2.3.0/index.html".into(),
                target: LinksTarget::Current,
            }
        );
    }

    #[test]
    fn test_versioned_url_whitespace_means_latest() {
        assert_eq!(
            click_open_with_version("   "),
            Outcome::Open {
                url: "https://example.com/docs/latest/index.html".into(),
                target: LinksTarget::Current,
            }
        );
    }

    #[test]
    fn test_toggle_scenario_changes_only_its_tab() {
        let (mut controller, mut doc) = setup();
        let toggle = doc.query_class(class::LINK_TOGGLE)[0].clone();
        doc.get_mut(&toggle).unwrap().set_checked(true);

        let outcome = controller
            .dispatch(&mut doc, UiEvent::ToggleChanged { source: toggle })
            .unwrap();
        assert_eq!(outcome, Outcome::Applied);

        let tabs = controller.store_mut().load_bookmarks();
        assert_eq!(tabs[0].links_target, LinksTarget::Blank);
        assert_eq!(tabs[1].links_target, LinksTarget::Current);

        // Next click inside t1's panel opens in a new context
        let repo = doc
            .focusables()
            .into_iter()
            .find(|p| doc.get(p).unwrap().text.as_deref() == Some("Repo"))
            .unwrap();
        let outcome = controller
            .dispatch(&mut doc, UiEvent::PanelClicked { target: repo })
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Open {
                url: "https://github.com/x/one".into(),
                target: LinksTarget::Blank,
            }
        );
    }

    #[test]
    fn test_click_on_non_actionable_is_noop() {
        let (mut controller, mut doc) = setup();
        let panel = doc.active_panel().unwrap();
        let outcome = controller
            .dispatch(&mut doc, UiEvent::PanelClicked { target: panel })
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
    }
}

// =============================================================================
// Dashboard Key Flow Tests
// =============================================================================

mod dashboard_tests {
    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Vec<(String, LinksTarget)>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&mut self, url: &str, target: LinksTarget) -> Result<()> {
            self.opened.push((url.to_string(), target));
            Ok(())
        }
    }

    fn press(dash: &mut Dashboard<MemoryStore, RecordingOpener>, code: KeyCode) {
        handle_key(dash, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_switch_tab_then_open_link() {
        let mut dash = Dashboard::bootstrap(memory_store(), RecordingOpener::default());
        press(&mut dash, KeyCode::Char('l'));
        assert_eq!(dash.document().active_tab_id(), Some("t2"));

        // Dropdown, toggle, then the site button
        press(&mut dash, KeyCode::Down);
        press(&mut dash, KeyCode::Down);
        press(&mut dash, KeyCode::Enter);

        assert_eq!(
            dash.opener().opened,
            vec![("https://two.example.com".to_string(), LinksTarget::Current)]
        );
        // `_self` hands the session over
        assert!(dash.state.should_quit);

        let tabs = dash.controller_mut().store_mut().load_bookmarks();
        assert!(tabs[1].selected);
    }

    #[test]
    fn test_toggle_by_key_then_open_stays_running() {
        let mut dash = Dashboard::bootstrap(memory_store(), RecordingOpener::default());
        press(&mut dash, KeyCode::Down);
        press(&mut dash, KeyCode::Enter);
        press(&mut dash, KeyCode::Down);
        press(&mut dash, KeyCode::Enter);

        assert_eq!(
            dash.opener().opened,
            vec![("https://github.com/x/one".to_string(), LinksTarget::Blank)]
        );
        assert!(!dash.state.should_quit);
    }

    #[test]
    fn test_theme_picker_persists_across_sessions() {
        let mut dash = Dashboard::bootstrap(memory_store(), RecordingOpener::default());
        press(&mut dash, KeyCode::Char('t'));
        press(&mut dash, KeyCode::Down);
        press(&mut dash, KeyCode::Down);
        press(&mut dash, KeyCode::Enter);
        assert_eq!(dash.document().theme(), ThemeId::G90);

        let backend = dash.controller().store().backend().clone();
        let next = Dashboard::bootstrap(
            BookmarkStore::new(backend, sample_tabs()),
            RecordingOpener::default(),
        );
        assert_eq!(next.document().theme_class(), "theme-zone-g90");
        for path in next.document().query_class(class::THEME_SELECTOR) {
            assert_eq!(
                next.document().get(&path).unwrap().attr(attr::VALUE),
                Some("g90")
            );
        }
    }
}
