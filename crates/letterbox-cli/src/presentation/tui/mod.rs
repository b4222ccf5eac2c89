//! Interactive letterbox screen.
//!
//! [`TuiApp`] is the `LetterView` the controller drives. Keys and clicks
//! are translated here: UI-local actions (typing, selection, scrolling)
//! change the app directly, everything else becomes a `UiEvent`.

mod app;
mod components;
mod form;
mod ui;

pub use app::TuiApp;
pub use form::FormState;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use is_terminal::IsTerminal;
use letterbox_runtime::{Clock, Controller, SystemClock, UiEvent, Workspace};
use letterbox_types::Section;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

use app::ClickTarget;

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub fn run(workspace: &Workspace) -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("letterbox tui needs an interactive terminal");
    }

    let mut controller = Controller::new(
        workspace.repository(),
        TuiApp::new(),
        SystemClock,
        workspace.config().ui.clone(),
    );
    controller.start();
    tracing::info!(
        letters = controller.repository().len(),
        "starting interactive session"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        std::process::exit(0);
    })?;

    let result = event_loop(&mut terminal, &mut controller);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("interactive session ended");
    result
}

fn event_loop<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    controller: &mut Controller<TuiApp, C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, controller.view_mut()))?;

        // Wake up in time for the next deferred action.
        let timeout = controller
            .timers()
            .next_due()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(TICK_RATE, |wait| wait.min(TICK_RATE));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(controller, key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(controller, mouse),
                _ => {}
            }
        }

        controller.tick();
    }
}

pub(crate) fn handle_key<C: Clock>(
    controller: &mut Controller<TuiApp, C>,
    key: KeyEvent,
) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    if controller.view().confirm_delete {
        controller.view_mut().confirm_delete = false;
        let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
        controller.handle(UiEvent::DeleteAll { confirmed });
        return Flow::Continue;
    }

    if controller.view().detail.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => {
                controller.handle(UiEvent::CloseDetail)
            }
            KeyCode::Down | KeyCode::Char('j') => scroll_detail(controller.view_mut(), 1),
            KeyCode::Up | KeyCode::Char('k') => scroll_detail(controller.view_mut(), -1),
            _ => {}
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::F(1) => controller.handle(UiEvent::Navigate(Section::Write)),
        KeyCode::F(2) => controller.handle(UiEvent::Navigate(Section::View)),
        _ => {
            return match controller.section() {
                Section::Write => handle_write_key(controller, key, ctrl),
                Section::View => handle_view_key(controller, key),
            };
        }
    }

    Flow::Continue
}

fn handle_write_key<C: Clock>(
    controller: &mut Controller<TuiApp, C>,
    key: KeyEvent,
    ctrl: bool,
) -> Flow {
    match key.code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Char('s') if ctrl => {
            if let Some(input) = controller.view_mut().form.submit() {
                controller.handle(UiEvent::Submit(input));
            }
        }
        KeyCode::Char('l') if ctrl => controller.handle(UiEvent::ClearForm),
        code => {
            let form = &mut controller.view_mut().form;
            match code {
                KeyCode::Tab => form.focus_next(),
                KeyCode::BackTab => form.focus_previous(),
                KeyCode::Enter => form.enter(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) if !ctrl => form.insert_char(c),
                _ => {}
            }
        }
    }

    Flow::Continue
}

fn handle_view_key<C: Clock>(controller: &mut Controller<TuiApp, C>, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Char('w') => controller.handle(UiEvent::Navigate(Section::Write)),
        KeyCode::Char('t') => controller.handle(UiEvent::ToggleDisplayMode),
        KeyCode::Char('D') => controller.view_mut().confirm_delete = true,
        KeyCode::Enter => {
            let app = controller.view();
            if !app.letters.is_empty() {
                let index = app.selected;
                controller.handle(UiEvent::OpenDetail(index));
            }
        }
        code => {
            let app = controller.view_mut();
            let step = app.row_step();
            match code {
                KeyCode::Right | KeyCode::Char('l') => app.select_next(1),
                KeyCode::Left | KeyCode::Char('h') => app.select_previous(1),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(step),
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(step),
                _ => {}
            }
        }
    }

    Flow::Continue
}

fn scroll_detail(app: &mut TuiApp, delta: i32) {
    app.detail_scroll = if delta < 0 {
        app.detail_scroll.saturating_sub(delta.unsigned_abs() as u16)
    } else {
        app.detail_scroll.saturating_add(delta as u16)
    };
}

pub(crate) fn handle_mouse<C: Clock>(controller: &mut Controller<TuiApp, C>, mouse: MouseEvent) {
    if controller.view().confirm_delete {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if controller.view().detail.is_some() => {
            return scroll_detail(controller.view_mut(), 1);
        }
        MouseEventKind::ScrollUp if controller.view().detail.is_some() => {
            return scroll_detail(controller.view_mut(), -1);
        }
        _ => return,
    }

    match controller.view().click_target(mouse.column, mouse.row) {
        ClickTarget::Overlay { inside_content } => {
            controller.handle(UiEvent::OverlayClick { inside_content })
        }
        ClickTarget::CloseControl => controller.handle(UiEvent::CloseDetail),
        ClickTarget::Nav(section) => controller.handle(UiEvent::Navigate(section)),
        ClickTarget::Card(index) => {
            controller.view_mut().selected = index;
            controller.handle(UiEvent::OpenDetail(index));
        }
        ClickTarget::Nothing => {}
    }
}
