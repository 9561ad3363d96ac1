//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            handle_key_event(app, key);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Mode-specific handling
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Confirm => handle_confirm_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.selected = 0;
        }
        KeyCode::End | KeyCode::Char('G') => {
            if !app.matches.is_empty() {
                app.selected = app.matches.len() - 1;
            }
        }
        KeyCode::PageUp => {
            app.move_selection(-20);
        }
        KeyCode::PageDown => {
            app.move_selection(20);
        }

        // Actions
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete();
        }
        KeyCode::Char('r') => {
            app.rescan();
        }

        // Help
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_confirm_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.delete_selected();
            app.mode = Mode::Normal;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            // Declined: filesystem and list stay untouched
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ScanOptions;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn empty_app() -> App {
        App::new(PathBuf::from("/"), ScanOptions::default(), true)
    }

    fn app_with_match() -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("vendor")).unwrap();

        let mut app = App::new(tmp.path().to_path_buf(), ScanOptions::default(), true);
        app.rescan();
        (tmp, app)
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = empty_app();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        handle_key_event(&mut app, key);
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_esc() {
        let mut app = empty_app();
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        handle_key_event(&mut app, key);
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = empty_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key_event(&mut app, key);
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_requires_selection() {
        let mut app = empty_app();
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        handle_key_event(&mut app, key);
        // Empty list: stays in normal mode
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_delete_opens_confirm_dialog() {
        let (_tmp, mut app) = app_with_match();

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
        );
        assert_eq!(app.mode, Mode::Confirm);
    }

    #[test]
    fn test_confirm_yes_deletes() {
        let (tmp, mut app) = app_with_match();
        app.mode = Mode::Confirm;

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
        );

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.matches.is_empty());
        assert!(!tmp.path().join("vendor").exists());
    }

    #[test]
    fn test_confirm_no_leaves_match_untouched() {
        let (tmp, mut app) = app_with_match();
        app.mode = Mode::Confirm;

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
        );

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.matches.len(), 1);
        assert!(tmp.path().join("vendor").exists());
    }

    #[test]
    fn test_confirm_esc_cancels() {
        let (_tmp, mut app) = app_with_match();
        app.mode = Mode::Confirm;

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.matches.len(), 1);
    }

    #[test]
    fn test_navigation_keys() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/vendor")).unwrap();
        fs::create_dir_all(tmp.path().join("b/vendor")).unwrap();
        fs::create_dir_all(tmp.path().join("c/vendor")).unwrap();

        let mut app = App::new(tmp.path().to_path_buf(), ScanOptions::default(), true);
        app.rescan();

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
        );
        assert_eq!(app.selected, 1);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
        );
        assert_eq!(app.selected, 0);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE),
        );
        assert_eq!(app.selected, 2);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
        );
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_rescan_key_refreshes_list() {
        let (tmp, mut app) = app_with_match();

        fs::create_dir_all(tmp.path().join("extra/node_modules")).unwrap();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
        );

        assert_eq!(app.matches.len(), 2);
    }

    #[test]
    fn test_enter_and_exit_help_mode() {
        let mut app = empty_app();

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        );
        assert_eq!(app.mode, Mode::Help);

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_ctrl_c_works_in_any_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        // Normal mode
        let mut app = empty_app();
        handle_key_event(&mut app, ctrl_c);
        assert!(app.should_quit);

        // Help mode
        let mut app = empty_app();
        app.mode = Mode::Help;
        handle_key_event(&mut app, ctrl_c);
        assert!(app.should_quit);

        // Confirm mode
        let mut app = empty_app();
        app.mode = Mode::Confirm;
        handle_key_event(&mut app, ctrl_c);
        assert!(app.should_quit);
    }
}
