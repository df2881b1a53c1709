use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use roast_flap::{DifficultyProfile, Intent, Phase};

use crate::render::{Viewport, menu_item_at};

/// What the shell should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Resize(u16, u16),
    Quit,
}

/// Turns keys and clicks into intents. Only the menu highlight lives here;
/// everything else is decided by the round.
#[derive(Debug, Default)]
pub struct InputRouter {
    highlighted: usize,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu entry drawn as selected.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn route(&mut self, event: &Event, phase: Phase, vp: &Viewport) -> Option<Command> {
        match event {
            Event::Key(key) => self.key(key, phase),
            Event::Mouse(mouse) => self.mouse(mouse, phase, vp),
            Event::Resize(cols, rows) => Some(Command::Resize(*cols, *rows)),
            _ => None,
        }
    }

    fn key(&mut self, key: &KeyEvent, phase: Phase) -> Option<Command> {
        // Held keys must not auto-flap.
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            return Some(Command::Quit);
        }

        let intent = match phase {
            Phase::Menu => match key.code {
                KeyCode::Char('1' | 'e' | 'E') => Intent::Select(DifficultyProfile::Easy),
                KeyCode::Char('2' | 'h' | 'H') => Intent::Select(DifficultyProfile::Hard),
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_highlight(-1);
                    return None;
                }
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                    self.move_highlight(1);
                    return None;
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Intent::Select(DifficultyProfile::ALL[self.highlighted])
                }
                _ => return None,
            },
            Phase::Playing => match key.code {
                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Intent::Flap,
                _ => return None,
            },
            Phase::GameOver => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Intent::Dismiss,
                _ => return None,
            },
        };
        Some(Command::Intent(intent))
    }

    fn mouse(&mut self, mouse: &MouseEvent, phase: Phase, vp: &Viewport) -> Option<Command> {
        let (x, y) = vp.cell_to_logical(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved if phase == Phase::Menu => {
                if let Some(i) = menu_item_at(x, y, vp.playfield) {
                    self.highlighted = i;
                }
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let intent = match phase {
                    Phase::Menu => {
                        let i = menu_item_at(x, y, vp.playfield)?;
                        self.highlighted = i;
                        Intent::Select(DifficultyProfile::ALL[i])
                    }
                    Phase::Playing => Intent::Flap,
                    Phase::GameOver => Intent::Dismiss,
                };
                Some(Command::Intent(intent))
            }
            _ => None,
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        let n = DifficultyProfile::ALL.len() as isize;
        self.highlighted = (self.highlighted as isize + delta).rem_euclid(n) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::menu_item_rect;

    const FIELD: (f64, f64) = (400.0, 600.0);

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(col: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Terminal cell at the centre of a menu entry.
    fn menu_cell(vp: &Viewport, index: usize) -> (u16, u16) {
        let r = menu_item_rect(index, FIELD);
        vp.cell_at(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    #[test]
    fn test_space_flaps_only_while_playing() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        assert_eq!(
            router.route(&press(KeyCode::Char(' ')), Phase::Playing, &vp),
            Some(Command::Intent(Intent::Flap))
        );
        assert_eq!(
            router.route(&press(KeyCode::Char(' ')), Phase::GameOver, &vp),
            Some(Command::Intent(Intent::Dismiss))
        );
    }

    #[test]
    fn test_menu_shortcuts() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        assert_eq!(
            router.route(&press(KeyCode::Char('h')), Phase::Menu, &vp),
            Some(Command::Intent(Intent::Select(DifficultyProfile::Hard)))
        );
        assert_eq!(
            router.route(&press(KeyCode::Char('1')), Phase::Menu, &vp),
            Some(Command::Intent(Intent::Select(DifficultyProfile::Easy)))
        );
    }

    #[test]
    fn test_cursor_wraps_and_confirms() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        assert_eq!(router.route(&press(KeyCode::Up), Phase::Menu, &vp), None);
        assert_eq!(router.highlighted(), 1);
        assert_eq!(router.route(&press(KeyCode::Down), Phase::Menu, &vp), None);
        assert_eq!(router.highlighted(), 0);
        router.route(&press(KeyCode::Down), Phase::Menu, &vp);
        assert_eq!(
            router.route(&press(KeyCode::Enter), Phase::Menu, &vp),
            Some(Command::Intent(Intent::Select(DifficultyProfile::Hard)))
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(router.route(&Event::Key(key), Phase::Playing, &vp), None);
    }

    #[test]
    fn test_quit_keys() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        for phase in [Phase::Menu, Phase::Playing, Phase::GameOver] {
            assert_eq!(router.route(&press(KeyCode::Esc), phase, &vp), Some(Command::Quit));
        }
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(router.route(&ctrl_c, Phase::Playing, &vp), Some(Command::Quit));
    }

    #[test]
    fn test_click_on_menu_item_selects_it() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        let (col, row) = menu_cell(&vp, 1);
        assert_eq!(
            router.route(&click(col, row), Phase::Menu, &vp),
            Some(Command::Intent(Intent::Select(DifficultyProfile::Hard)))
        );
        assert_eq!(router.highlighted(), 1);
    }

    #[test]
    fn test_click_outside_menu_does_nothing() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        assert_eq!(router.route(&click(0, 0), Phase::Menu, &vp), None);
    }

    #[test]
    fn test_click_flaps_and_dismisses() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        assert_eq!(
            router.route(&click(3, 3), Phase::Playing, &vp),
            Some(Command::Intent(Intent::Flap))
        );
        assert_eq!(
            router.route(&click(3, 3), Phase::GameOver, &vp),
            Some(Command::Intent(Intent::Dismiss))
        );
    }

    #[test]
    fn test_hover_moves_highlight() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        let (col, row) = menu_cell(&vp, 1);
        let hover = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(router.route(&hover, Phase::Menu, &vp), None);
        assert_eq!(router.highlighted(), 1);
    }

    #[test]
    fn test_resize_passes_through() {
        let vp = Viewport::fit(200, 60, FIELD);
        let mut router = InputRouter::new();
        assert_eq!(
            router.route(&Event::Resize(100, 40), Phase::Playing, &vp),
            Some(Command::Resize(100, 40))
        );
    }
}
