use crate::common::{centered_rect, contains, render_popup, sized_rect};
use crate::theme::Palette;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use snape_core::{
    ClipboardSink, EventResult, PickerEvent, Result, SelectionController, Settings, Snippet,
    ViewRow, SELECTION_DELAY,
};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::thread;
use tracing::{trace, warn};

/// Terminal cells per unit of the configured window size.
const CELL_WIDTH: u32 = 8;
const CELL_HEIGHT: u32 = 16;

const PREVIEW_WIDTH: u16 = 40;

pub struct PickerOptions {
    pub settings: Settings,
    pub snippets_dir: PathBuf,
}

/// Presentation-only state. Everything about the selection itself lives in
/// the [`SelectionController`].
#[derive(Default)]
struct PickerView {
    list_state: ListState,
    list_area: Rect,
    show_help: bool,
    show_preview: bool,
    copied: bool,
}

/// Run the picker in the terminal until a snippet is chosen or the user
/// cancels. The chosen snippet's content is handed to `clipboard` before
/// returning.
pub fn display_snippet_picker(
    controller: SelectionController,
    options: &PickerOptions,
    clipboard: &mut dyn ClipboardSink,
) -> Result<Option<Snippet>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout());
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => run_picker(&mut terminal, controller, options, clipboard),
        Err(e) => Err(e.into()),
    };

    // Clean up terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

fn run_picker(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: SelectionController,
    options: &PickerOptions,
    clipboard: &mut dyn ClipboardSink,
) -> Result<Option<Snippet>> {
    let palette = Palette::for_theme(options.settings.theme);
    let mut view = PickerView::default();

    loop {
        terminal.draw(|f| draw(f, &controller, &mut view, options, &palette))?;

        let event = match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if view.show_help {
                    view.show_help = false;
                    continue;
                }
                if is_interrupt(&key) {
                    return Ok(None);
                }
                match to_picker_event(key) {
                    Some(event) => event,
                    None => continue,
                }
            }
            Event::Mouse(mouse) => match activated_position(&controller, &view, mouse) {
                Some(position) => PickerEvent::Activate(position),
                None => continue,
            },
            _ => continue,
        };

        let result = controller.handle(event);
        if let Some(selection) = after_event(result, event, &controller, &mut view, clipboard) {
            if selection.is_some() {
                terminal.draw(|f| draw(f, &controller, &mut view, options, &palette))?;
                thread::sleep(SELECTION_DELAY);
            }
            return Ok(selection);
        }
    }
}

/// Update the view for what the controller made of `event`. Returns the
/// session's outcome once it is over.
///
/// A chosen snippet is handed to `clipboard`. Failing to copy is logged and
/// the snippet is still returned.
fn after_event(
    result: EventResult,
    event: PickerEvent,
    controller: &SelectionController,
    view: &mut PickerView,
    clipboard: &mut dyn ClipboardSink,
) -> Option<Option<Snippet>> {
    match result {
        EventResult::Selected(snippet) => {
            match clipboard.set_text(&snippet.content) {
                Ok(()) => view.copied = true,
                Err(e) => warn!("Failed to copy {} to clipboard: {}", snippet.display_name, e),
            }
            Some(Some(snippet))
        }
        EventResult::Cancelled => Some(None),
        EventResult::Handled => {
            view.show_preview = matches!(event, PickerEvent::ArrowUp | PickerEvent::ArrowDown);
            None
        }
        EventResult::Unhandled => {
            if event == PickerEvent::Char('?') && !controller.is_filtering() {
                view.show_help = true;
            } else {
                trace!(?event, "ignoring unhandled picker event");
            }
            None
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Translate a key press into the event the picker understands.
pub fn to_picker_event(key: KeyEvent) -> Option<PickerEvent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(PickerEvent::ArrowUp),
        KeyCode::Down => Some(PickerEvent::ArrowDown),
        KeyCode::Enter => Some(PickerEvent::Enter),
        KeyCode::Esc => Some(PickerEvent::Escape),
        KeyCode::Backspace => Some(PickerEvent::Backspace),
        KeyCode::Char(c) => Some(PickerEvent::Char(c)),
        _ => None,
    }
}

/// The flat position of the snippet row under a left click, if any.
fn activated_position(
    controller: &SelectionController,
    view: &PickerView,
    mouse: MouseEvent,
) -> Option<usize> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || view.show_help {
        return None;
    }
    if !contains(view.list_area, mouse.column, mouse.row) {
        return None;
    }

    let row = view.list_state.offset() + (mouse.row - view.list_area.y) as usize;
    match controller.rows().get(row)? {
        ViewRow::Snippet { position, .. } => Some(*position),
        ViewRow::Separator(_) => None,
    }
}

fn picker_area(settings: &Settings, screen: Rect) -> Rect {
    let width = (settings.window_width / CELL_WIDTH) as u16;
    let height = (settings.window_height / CELL_HEIGHT) as u16;
    sized_rect(width, height, screen)
}

fn draw(
    f: &mut Frame,
    controller: &SelectionController,
    view: &mut PickerView,
    options: &PickerOptions,
    palette: &Palette,
) {
    let screen = f.size();
    let area = picker_area(&options.settings, screen);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Snape ")
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let header_height = if controller.is_filtering() { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Mode hints
            Constraint::Length(1),             // Divider
            Constraint::Min(1),                // Snippet list
            Constraint::Length(1),             // Divider
            Constraint::Length(1),             // Footer
        ])
        .split(inner);

    draw_header(f, controller, chunks[0], palette);
    draw_divider(f, chunks[1], palette);
    draw_list(f, controller, view, chunks[2], palette);
    draw_divider(f, chunks[3], palette);
    draw_footer(f, controller, options, chunks[4], palette);

    if view.show_preview {
        if let Some(snippet) = controller.selected_snippet() {
            draw_preview(f, snippet, area, screen, palette);
        }
    }

    if view.show_help {
        draw_help(f, options, screen, palette);
    }

    if view.copied {
        let popup = sized_rect(16, 3, area);
        render_popup(
            f,
            popup,
            "",
            Line::from(Span::styled(
                "✓ Copied!",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )),
            palette.base,
            Alignment::Center,
        );
    }
}

fn draw_header(f: &mut Frame, controller: &SelectionController, area: Rect, palette: &Palette) {
    let hint = Style::default().fg(palette.muted);

    let lines = if controller.is_filtering() {
        vec![
            Line::from(Span::styled(
                "Filter mode - ESC to quit | ↑↓ Enter to select",
                hint,
            )),
            Line::from(vec![
                Span::styled(
                    format!("Search: {}", controller.query()),
                    Style::default()
                        .fg(palette.filter)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("▌", Style::default().fg(palette.filter)),
            ]),
        ]
    } else {
        vec![Line::from(Span::styled(
            "↑↓ Enter or [index]  |  '/' to filter  |  '?' for help",
            hint,
        ))]
    };

    let alignment = if controller.is_filtering() {
        Alignment::Left
    } else {
        Alignment::Center
    };
    f.render_widget(Paragraph::new(lines).alignment(alignment), area);
}

fn draw_divider(f: &mut Frame, area: Rect, palette: &Palette) {
    let line = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(line).style(Style::default().fg(palette.muted)),
        area,
    );
}

fn draw_list(
    f: &mut Frame,
    controller: &SelectionController,
    view: &mut PickerView,
    area: Rect,
    palette: &Palette,
) {
    let rows = controller.rows();
    let mut selected_row = None;

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| match row {
            ViewRow::Separator(name) => {
                let label = format!("── {} ", name.to_uppercase());
                let fill = (area.width as usize).saturating_sub(label.chars().count());
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", label, "─".repeat(fill)),
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::BOLD),
                )))
            }
            ViewRow::Snippet {
                key,
                snippet,
                selected,
                ..
            } => {
                let line = Line::from(vec![
                    Span::styled(format!("[{}]", key), Style::default().fg(palette.accent)),
                    Span::raw("  "),
                    Span::raw(snippet.display_name.clone()),
                ]);
                if *selected {
                    selected_row = Some(i);
                    ListItem::new(line).style(palette.selected)
                } else {
                    ListItem::new(line)
                }
            }
        })
        .collect();

    view.list_area = area;
    if items.is_empty() {
        let message = if controller.query().is_empty() {
            "No snippets found"
        } else {
            "No matching snippets"
        };
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    view.list_state.select(selected_row);
    f.render_stateful_widget(List::new(items), area, &mut view.list_state);
}

fn draw_footer(
    f: &mut Frame,
    controller: &SelectionController,
    options: &PickerOptions,
    area: Rect,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let dir = Paragraph::new(options.snippets_dir.display().to_string())
        .style(Style::default().fg(palette.muted));
    let count = Paragraph::new(format!("{} snippets", controller.len()))
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Right);

    f.render_widget(dir, chunks[0]);
    f.render_widget(count, chunks[1]);
}

/// Show the selected snippet beside the picker, or over its lower half when
/// there is no room to the right.
fn draw_preview(f: &mut Frame, snippet: &Snippet, picker: Rect, screen: Rect, palette: &Palette) {
    let room_right = screen.right().saturating_sub(picker.right());
    let area = if room_right >= PREVIEW_WIDTH / 2 {
        Rect::new(
            picker.right(),
            picker.y,
            room_right.min(PREVIEW_WIDTH),
            picker.height,
        )
    } else {
        let half = picker.height / 2;
        Rect::new(picker.x, picker.y + half, picker.width, picker.height - half)
    };

    render_popup(
        f,
        area,
        &format!(" {} ", snippet.display_name),
        snippet.content.as_str(),
        palette.base,
        Alignment::Left,
    );
}

fn draw_help(f: &mut Frame, options: &PickerOptions, screen: Rect, palette: &Palette) {
    let key = Style::default().fg(palette.accent);
    let lines = vec![
        Line::from(Span::styled(
            "Snape - A Severus Snippet Manager",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Version: {}", env!("CARGO_PKG_VERSION"))),
        Line::from(""),
        Line::from(vec![Span::styled("↑/↓", key), Span::raw("      Navigate")]),
        Line::from(vec![Span::styled("Enter", key), Span::raw("    Copy to clipboard")]),
        Line::from(vec![Span::styled("a-z A-Z", key), Span::raw("  Quick select")]),
        Line::from(vec![Span::styled("/", key), Span::raw("        Filter")]),
        Line::from(vec![Span::styled("Esc", key), Span::raw("      Leave filter / quit")]),
        Line::from(vec![Span::styled("Click", key), Span::raw("    Copy a row")]),
        Line::from(""),
        Line::from(format!("Snippets: {}", options.snippets_dir.display())),
        Line::from("Each file becomes a snippet named after the file."),
        Line::from("Subfolders become groups; a '01-' prefix sets their order."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(palette.muted),
        )),
    ];

    render_popup(
        f,
        centered_rect(70, 70, screen),
        " Help ",
        lines,
        palette.base,
        Alignment::Left,
    );
}
