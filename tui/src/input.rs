//! Input handling for the showcase TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use showcase_engine::{App, CursorMove, NavItem};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const WHEEL_ROWS: i32 = 3;
const OVERLAY_PAGE_ROWS: i32 = 10;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a send blocked on capacity unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into the app. Returns `true` once the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` once the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            if app.selection().is_empty() {
                handle_page_key(app, key);
            } else {
                handle_overlay_key(app, key);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
        _ => {}
    }
    app.should_quit()
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => {
            if app.menu_open() {
                app.toggle_menu();
            }
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.move_cursor(CursorMove::Right),
        KeyCode::BackTab => app.move_cursor(CursorMove::Left),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(CursorMove::Down),
        KeyCode::Home => app.move_cursor(CursorMove::First),
        KeyCode::End => app.move_cursor(CursorMove::Last),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor(),
        KeyCode::Char('o') => app.open_cursor_url(),
        KeyCode::Char('g') => app.scroll_to(NavItem::Home),
        KeyCode::Char('p') => app.scroll_to(NavItem::Portfolio),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::PageDown => app.scroll_page(true),
        KeyCode::PageUp => app.scroll_page(false),
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.dismiss_overlay(),
        KeyCode::Char('[' | 'h') | KeyCode::Left => app.select_adjacent(-1),
        KeyCode::Char(']' | 'l') | KeyCode::Right => app.select_adjacent(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_overlay_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_overlay_by(1),
        KeyCode::PageUp => app.scroll_overlay_by(-OVERLAY_PAGE_ROWS),
        KeyCode::PageDown => app.scroll_overlay_by(OVERLAY_PAGE_ROWS),
        KeyCode::Enter | KeyCode::Char('o') => app.open_selected_url(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.wheel(WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.wheel(-WHEEL_ROWS),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    use showcase_engine::{App, Catalog, HitMap, HitTarget, Region, UiOptions};

    use super::apply_event;
    use crate::test_support::{NoAssets, NullNavigator};

    fn still() -> UiOptions {
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn enter_opens_and_escape_closes() {
        let catalog = Catalog::builtin().unwrap();
        let mut app = App::new(&catalog, still(), Box::new(NullNavigator), &NoAssets);

        apply_event(&mut app, key(KeyCode::Right));
        apply_event(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.selection().entry().map(|e| e.title()),
            Some(catalog.entries()[1].title())
        );

        apply_event(&mut app, key(KeyCode::Char(']')));
        assert_eq!(
            app.selection().entry().map(|e| e.title()),
            Some(catalog.entries()[2].title())
        );

        // `q` closes the overlay rather than quitting.
        assert!(!apply_event(&mut app, key(KeyCode::Char('q'))));
        assert!(app.selection().is_empty());
        assert!(apply_event(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn releases_are_ignored() {
        let catalog = Catalog::builtin().unwrap();
        let mut app = App::new(&catalog, still(), Box::new(NullNavigator), &NoAssets);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        apply_event(&mut app, Event::Key(release));
        assert!(app.selection().is_empty());
    }

    #[test]
    fn ctrl_c_quits_from_the_overlay() {
        let catalog = Catalog::builtin().unwrap();
        let mut app = App::new(&catalog, still(), Box::new(NullNavigator), &NoAssets);
        app.select_card(0);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(apply_event(&mut app, ctrl_c));
        assert!(app.should_quit());
    }

    #[test]
    fn clicks_route_through_the_hit_map() {
        let catalog = Catalog::builtin().unwrap();
        let mut app = App::new(&catalog, still(), Box::new(NullNavigator), &NoAssets);
        let mut hits = HitMap::default();
        hits.push(Region::new(10, 10, 20, 5), HitTarget::Card(4));
        app.set_hit_map(hits);

        apply_event(&mut app, click(12, 11));
        assert_eq!(app.cursor(), 4);
        assert_eq!(
            app.selection().entry().map(|e| e.id()),
            Some(catalog.entries()[4].id())
        );
    }
}
