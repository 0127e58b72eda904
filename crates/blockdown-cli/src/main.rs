use anyhow::Result;
use blockdown_config::Config;
use blockdown_engine::{BlockKind, LocalStore, Note, NoteStore, Segment, format_line, render_block};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    store: LocalStore,
    notes: Vec<Note>,
    note_list_state: ListState,
    raw_view: bool,
}

impl App {
    fn new(store: LocalStore) -> Result<Self> {
        let notes = store.list_notes()?;
        let mut app = Self {
            store,
            notes,
            note_list_state: ListState::default(),
            raw_view: false,
        };

        if !app.notes.is_empty() {
            app.note_list_state.select(Some(0));
        }

        Ok(app)
    }

    fn next_note(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let i = match self.note_list_state.selected() {
            Some(i) => (i + 1) % self.notes.len(),
            None => 0,
        };
        self.note_list_state.select(Some(i));
    }

    fn previous_note(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let i = match self.note_list_state.selected() {
            Some(0) | None => self.notes.len() - 1,
            Some(i) => i - 1,
        };
        self.note_list_state.select(Some(i));
    }

    fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.note_list_state.selected()?)
    }

    fn reload(&mut self) -> Result<()> {
        self.notes = self.store.list_notes()?;
        let selected = if self.notes.is_empty() {
            None
        } else {
            let i = self.note_list_state.selected().unwrap_or(0);
            Some(i.min(self.notes.len() - 1))
        };
        self.note_list_state.select(selected);
        Ok(())
    }

    fn toggle_raw_view(&mut self) {
        self.raw_view = !self.raw_view;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Determine the notes directory from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let notes_dir;
    let from_config;

    if args.len() == 2 {
        notes_dir = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                notes_dir = config.notes_dir;
                from_config = true;
            }
            Ok(None) => {
                notes_dir = blockdown_config::default_notes_dir();
                from_config = false;
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [notes-folder-path]", args[0]);
                eprintln!("Or fix the config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [notes-folder-path]", args[0]);
        process::exit(1);
    };

    let store = match LocalStore::open(&notes_dir) {
        Ok(store) => store,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Notes path '{}'{} is unusable: {e}",
                notes_dir.display(),
                source
            );
            process::exit(1);
        }
    };

    let mut app = App::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_note(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_note(),
                KeyCode::Char('m') => app.toggle_raw_view(),
                KeyCode::Char('r') => {
                    if let Err(err) = app.reload() {
                        log::warn!("reload failed: {err}");
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Note list panel
    let note_items: Vec<ListItem> = app
        .notes
        .iter()
        .map(|note| {
            let title = if note.title.is_empty() {
                "(untitled)"
            } else {
                note.title.as_str()
            };
            let mut title_spans = Vec::new();
            if let Some(color) = &note.color {
                title_spans.push(Span::styled("● ", Style::default().fg(label_color(color))));
            }
            title_spans.push(Span::raw(title.to_string()));

            let mut item_lines = vec![Line::from(title_spans)];
            if !note.preview.is_empty() {
                item_lines.push(Line::from(Span::styled(
                    format!("  {}", note.preview),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(item_lines)
        })
        .collect();

    let notes_list = List::new(note_items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    let content_text = match app.selected_note() {
        Some(note) => note_lines(note, app.raw_view),
        None => vec![Line::from(
            "No notes here yet. Point the app at a notes folder or press r to reload.",
        )],
    };

    f.render_stateful_widget(notes_list, chunks[0], &mut app.note_list_state);

    // Content panel
    let panel_title = if app.raw_view { "Markdown" } else { "Content" };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(panel_title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("m: Toggle markdown | "),
        Span::raw("r: Reload"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

/// Renders a note body for the content panel: the markdown source in raw
/// view, styled block content otherwise.
fn note_lines(note: &Note, raw_view: bool) -> Vec<Line<'static>> {
    if raw_view {
        return note
            .markdown()
            .lines()
            .map(|line| Line::from(Span::raw(line.to_string())))
            .collect();
    }

    let mut lines = Vec::new();
    for block in &note.content {
        match &block.kind {
            BlockKind::Paragraph => {
                for line in content_lines(&block.content) {
                    lines.push(Line::from(inline_spans(line)));
                }
                lines.push(Line::default());
            }
            BlockKind::Heading { .. } => {
                lines.push(Line::from(Span::styled(
                    block.content.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::default());
            }
            BlockKind::Code {
                show_line_numbers, ..
            } => {
                for (i, line) in content_lines(&block.content).iter().enumerate() {
                    let text = if *show_line_numbers {
                        format!("{:>3}  {line}", i + 1)
                    } else {
                        (*line).to_string()
                    };
                    lines.push(Line::from(Span::styled(
                        text,
                        Style::default().fg(Color::Cyan),
                    )));
                }
                lines.push(Line::default());
            }
            BlockKind::Quote { depth } => {
                let bar = "│ ".repeat(depth + 1);
                for line in content_lines(&block.content) {
                    let mut spans = vec![Span::styled(
                        bar.clone(),
                        Style::default().fg(Color::DarkGray),
                    )];
                    spans.extend(inline_spans(line));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::default());
            }
            BlockKind::List { ordered, depth } => {
                let indent = "  ".repeat(*depth);
                for (i, item) in content_lines(&block.content).iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}. ", i + 1)
                    } else {
                        "• ".to_string()
                    };
                    let mut spans = vec![Span::raw(format!("{indent}{marker}"))];
                    spans.extend(inline_spans(item));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::default());
            }
            BlockKind::Checklist { checked, depth } => {
                let indent = "  ".repeat(*depth);
                let mark = if *checked { "[x] " } else { "[ ] " };
                for item in content_lines(&block.content) {
                    let mut spans = vec![Span::raw(format!("{indent}{mark}"))];
                    spans.extend(inline_spans(item));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::default());
            }
            BlockKind::Divider => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(24),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::default());
            }
            BlockKind::Image { url, title } => {
                let mut text = format!("[image: {}]", block.content);
                if let Some(title) = title {
                    text.push_str(&format!(" \"{title}\""));
                }
                text.push_str(&format!(" {url}"));
                lines.push(Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::default());
            }
            BlockKind::Table(_) => {
                for line in render_block(block).lines() {
                    lines.push(Line::from(Span::raw(line.to_string())));
                }
                lines.push(Line::default());
            }
        }
    }

    lines
}

fn content_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        vec![""]
    } else {
        content.lines().collect()
    }
}

fn inline_spans(text: &str) -> Vec<Span<'static>> {
    format_line(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(s) => Span::raw(s),
            Segment::Bold(s) => Span::styled(s, Style::default().add_modifier(Modifier::BOLD)),
            Segment::Italic(s) => Span::styled(s, Style::default().add_modifier(Modifier::ITALIC)),
            Segment::BoldItalic(s) => Span::styled(
                s,
                Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Segment::Code(s) => Span::styled(s, Style::default().fg(Color::Yellow)),
        })
        .collect()
}

fn label_color(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::White,
    }
}
