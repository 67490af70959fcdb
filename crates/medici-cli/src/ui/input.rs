//! Input handling for the TUI.

use super::state::App;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// Handle input events
pub(crate) fn handle_input(app: &mut App) -> io::Result<()> {
    if let Event::Key(key) = event::read()? {
        handle_key(app, key);
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c' | 'd'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q') | KeyCode::Esc, _) => app.should_quit = true,

        // Number keys pick a tab directly
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            if let Some(index) = c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(|d| d.checked_sub(1))
            {
                app.select(index);
            }
        },

        (KeyCode::Tab | KeyCode::Right, _) => app.next_tab(),
        (KeyCode::BackTab | KeyCode::Left, _) => app.prev_tab(),
        (KeyCode::Char('r') | KeyCode::Enter, _) => app.replay(),

        _ => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medici_config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn finish(app: &mut App) {
        let end = app.player.run_until_idle(app.now());
        app.update(end);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::new(&Config::default(), 0, 1);
            press(&mut app, code);
            assert!(app.should_quit);
        }

        let mut app = App::new(&Config::default(), 0, 1);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut app = App::new(&Config::default(), 0, 1);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.player.active_scenario(), 2);
        finish(&mut app);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.player.active_scenario(), 0);
    }

    #[test]
    fn test_out_of_range_number_is_ignored() {
        let mut app = App::new(&Config::default(), 0, 1);
        press(&mut app, KeyCode::Char('9'));
        assert!(!app.player.is_running());
        assert!(app.player.surface().is_empty());
    }

    #[test]
    fn test_keys_ignored_while_playing() {
        let mut app = App::new(&Config::default(), 0, 1);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.player.active_scenario(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_replay_restarts_active_scenario() {
        let mut app = App::new(&Config::default(), 0, 1);
        press(&mut app, KeyCode::Char('2'));
        finish(&mut app);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.player.is_running());
        assert_eq!(app.player.active_scenario(), 1);
        assert_eq!(app.player.completed_plays(), 1);
    }
}
