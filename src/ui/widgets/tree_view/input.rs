//! Keyboard and mouse input handling and the interactive loop.
//!
//! Keys map onto the same click rule table a pointer uses: Space is a
//! ctrl-click on the cursor row, `v` (or Shift+Space) a shift-click and `o`
//! a plain click.

use std::io::{self, Stdout};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::debug;

use crate::domain::entities::TreeNode;

use super::target::{RenderTarget, TerminalTarget, Viewport};
use super::view::{ClickModifiers, TreeView};

/// Tree view action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Up,
    Down,
    Expand,
    Collapse,
    /// Click the cursor row with the given modifiers
    Click(ClickModifiers),
    SelectAll,
    /// Escape: drop the selection
    Clear,
    StartSearch,
    Confirm,
    Quit,
}

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(TreeAction::Quit),
        KeyCode::Char('a') if ctrl => Some(TreeAction::SelectAll),
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(TreeAction::Collapse),
        KeyCode::Char(' ') if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(TreeAction::Click(ClickModifiers::SHIFT))
        }
        KeyCode::Char(' ') => Some(TreeAction::Click(ClickModifiers::CTRL)),
        KeyCode::Char('v') => Some(TreeAction::Click(ClickModifiers::SHIFT)),
        KeyCode::Char('o') => Some(TreeAction::Click(ClickModifiers::NONE)),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Esc => Some(TreeAction::Clear),
        KeyCode::Char('/') => Some(TreeAction::StartSearch),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Map a left-button press to `(visible row, modifiers)` through the rows
/// the terminal last drew. Presses on the header or footer are ignored.
pub fn mouse_to_click(mouse: MouseEvent, viewport: &Viewport) -> Option<(usize, ClickModifiers)> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let row = viewport.row_at(usize::from(mouse.row))?;
    let modifiers = ClickModifiers {
        shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: mouse
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER),
    };
    Some((row, modifiers))
}

/// Apply a navigation or selection action. `Confirm` and `Quit` are left to
/// the caller.
pub fn apply_action<T: RenderTarget>(view: &mut TreeView<T>, action: TreeAction) {
    match action {
        TreeAction::Up => view.move_cursor_up(),
        TreeAction::Down => view.move_cursor_down(),
        TreeAction::Expand => view.expand_cursor(),
        TreeAction::Collapse => view.collapse_cursor(),
        TreeAction::Click(modifiers) => view.click_cursor(modifiers),
        TreeAction::SelectAll => view.select_all(),
        TreeAction::Clear => view.clear_selection(),
        TreeAction::StartSearch => view.set_search_editing(true),
        TreeAction::Confirm | TreeAction::Quit => {}
    }
}

/// Edit the search query while the search line has focus. Enter keeps the
/// query, Esc drops it.
pub fn apply_search_key<T: RenderTarget>(view: &mut TreeView<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => view.set_search_editing(false),
        KeyCode::Esc => {
            view.set_search_query("");
            view.set_search_editing(false);
        }
        KeyCode::Backspace => {
            let mut query = view.search_query().to_string();
            query.pop();
            view.set_search_query(&query);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = view.search_query().to_string();
            query.push(c);
            view.set_search_query(&query);
        }
        _ => {}
    }
}

/// Run the tree view interactively.
/// Returns the selected nodes if confirmed, None if quit
pub fn run_interactive(
    view: &mut TreeView<TerminalTarget<Stdout>>,
) -> io::Result<Option<Vec<TreeNode>>> {
    use crossterm::{
        cursor,
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    };

    terminal::enable_raw_mode()?;
    let entered = execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    );

    let result = entered.and_then(|()| event_loop(view));

    let restored = execute!(
        io::stdout(),
        cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .and_then(|()| terminal::disable_raw_mode());

    let selection = result?;
    restored?;
    Ok(selection)
}

fn event_loop(view: &mut TreeView<TerminalTarget<Stdout>>) -> io::Result<Option<Vec<TreeNode>>> {
    view.render();

    loop {
        let footer = view.footer_lines();
        view.target_mut().flush(&footer)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if view.is_search_editing() {
                    apply_search_key(view, key);
                    continue;
                }
                let Some(action) = key_to_action(key) else {
                    continue;
                };
                debug!(?action, "tree action");
                match action {
                    TreeAction::Confirm => return Ok(Some(view.selected_nodes())),
                    TreeAction::Quit => return Ok(None),
                    _ => apply_action(view, action),
                }
            }
            Event::Mouse(mouse) => {
                let viewport = view.target().viewport();
                if let Some((row, modifiers)) = mouse_to_click(mouse, &viewport) {
                    view.click_visible_row(row, modifiers);
                }
            }
            Event::Resize(width, height) => {
                view.target_mut().set_size(width, height);
                view.render();
            }
            _ => {}
        }
    }
}
