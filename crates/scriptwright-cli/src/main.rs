use anyhow::Result;
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
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use scriptwright_config::Config;
use scriptwright_engine::{ElementCategory, ScriptFile, classify_after, io};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    scripts_path: PathBuf,
    files: Vec<ScriptFile>,
    file_list_state: ListState,
    /// Classified preview of the selected script, one entry per non-blank line.
    current_preview: Vec<(ElementCategory, String)>,
    status: Option<String>,
}

impl App {
    fn new(scripts_path: PathBuf) -> Result<Self> {
        let files = io::list_script_files(&scripts_path)?;

        let mut app = Self {
            scripts_path,
            files,
            file_list_state: ListState::default(),
            current_preview: Vec::new(),
            status: None,
        };

        // Select first script if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_preview_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_preview_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_preview_for_selection();
    }

    fn selected_file(&self) -> Option<ScriptFile> {
        self.file_list_state
            .selected()
            .and_then(|i| self.files.get(i).cloned())
    }

    fn update_preview_for_selection(&mut self) {
        self.status = None;
        let Some(file) = self.selected_file() else {
            self.current_preview.clear();
            return;
        };

        match io::read_script(file.relative_path(), &self.scripts_path) {
            Ok(content) => {
                self.current_preview = classify_lines(&content);
            }
            Err(e) => {
                self.current_preview.clear();
                self.status = Some(format!("Error reading file: {e}"));
            }
        }
    }

    /// Exports the selected script next to its source, reporting the outcome
    /// in the status line.
    fn export_selected(&mut self) {
        let Some(file) = self.selected_file() else {
            return;
        };
        let title = file.display_name().to_string();
        let filename = format!("{title}.fdx");

        let result = io::read_script(file.relative_path(), &self.scripts_path)
            .map_err(anyhow::Error::from)
            .and_then(|content| {
                io::export_script(&title, &content, &filename, &self.scripts_path)
                    .map_err(anyhow::Error::from)
            });

        self.status = Some(match result {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }

    fn reload_files(&mut self) {
        match io::list_script_files(&self.scripts_path) {
            Ok(files) => {
                self.files = files;
                if self.files.is_empty() {
                    self.file_list_state.select(None);
                } else if self.file_list_state.selected().is_none() {
                    self.file_list_state.select(Some(0));
                }
                self.update_preview_for_selection();
            }
            Err(e) => self.status = Some(format!("Error scanning scripts: {e}")),
        }
    }
}

/// Classifies editor text line by line, threading the previous category so
/// dialogue after a character cue is styled as dialogue.
fn classify_lines(content: &str) -> Vec<(ElementCategory, String)> {
    let mut prev = None;
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let category = classify_after(line, prev);
            prev = Some(category);
            (category, line.to_string())
        })
        .collect()
}

fn category_style(category: ElementCategory) -> Style {
    match category {
        ElementCategory::SceneHeading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ElementCategory::Action => Style::default(),
        ElementCategory::Character => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        ElementCategory::Dialogue => Style::default().fg(Color::Green),
        ElementCategory::Parenthetical => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
        ElementCategory::Transition => Style::default().fg(Color::Magenta),
    }
}

fn main() -> Result<()> {
    // Determine scripts path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let scripts_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        scripts_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                scripts_path = config.scripts_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No scripts path provided and no config file found");
                eprintln!("Usage: {} <scripts-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <scripts-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [scripts-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate scripts directory using engine
    if let Err(e) = io::validate_scripts_dir(&scripts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Scripts path '{}'{} is invalid: {e}",
            scripts_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(scripts_path)?;

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
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('e') => app.export_selected(),
                KeyCode::Char('r') => app.reload_files(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[0]);

    // Script list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| {
            ListItem::new(vec![Line::from(vec![Span::raw(format!(
                "🎬 {}",
                file.display_name()
            ))])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Scripts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Screenplay panel: each line styled by its classified element
    let content_text: Vec<Line> = if app.current_preview.is_empty() {
        vec![Line::from("Select a script to preview its elements")]
    } else {
        app.current_preview
            .iter()
            .map(|(category, text)| {
                Line::from(vec![
                    Span::styled(format!("{:>13} ", category.label()), Style::default().fg(Color::DarkGray)),
                    Span::styled(text.clone(), category_style(*category)),
                ])
            })
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Screenplay"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Status and key help
    let help_line = match &app.status {
        Some(status) => Line::from(Span::raw(status.clone())),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("e: Export | "),
            Span::raw("r: Reload"),
        ]),
    };

    let help = Paragraph::new(vec![help_line]).block(Block::default());
    f.render_widget(help, outer[1]);
}
