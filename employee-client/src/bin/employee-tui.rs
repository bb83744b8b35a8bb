//! Employee TUI - terminal front end for the employee API
//!
//! Run: EMPLOYEE_API_URL=http://localhost:3000 cargo run -p employee-client --bin employee-tui

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use employee_client::{ClientConfig, EmployeeBook, EmployeeClient, Notice};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

/// 提示显示时长
const TOAST_TTL: Duration = Duration::from_secs(3);

const FIELD_LABELS: [&str; 4] = ["Name", "Position", "Office", "Salary"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// 浏览列表
    Browse,
    /// 编辑表单
    Form,
    /// 等待删除确认
    ConfirmDelete(String),
}

struct App {
    book: EmployeeBook<EmployeeClient>,
    mode: Mode,
    table_state: TableState,
    /// 表单输入框: name / position / office / salary
    fields: [Input; 4],
    focus: usize,
    toast: Option<(Notice, Instant)>,
    logger_state: TuiWidgetState,
}

impl App {
    fn new(book: EmployeeBook<EmployeeClient>) -> Self {
        Self {
            book,
            mode: Mode::Browse,
            table_state: TableState::default(),
            fields: Default::default(),
            focus: 0,
            toast: None,
            logger_state: TuiWidgetState::new(),
        }
    }

    fn highlighted(&self) -> Option<&employee_client::Employee> {
        self.table_state
            .selected()
            .and_then(|i| self.book.employees().get(i))
    }

    /// 用当前选中记录填充输入框
    fn load_form(&mut self) {
        let draft = self.book.selected();
        self.fields = [
            Input::new(draft.name.clone()),
            Input::new(draft.position.clone()),
            Input::new(draft.office.clone()),
            Input::new(
                draft
                    .salary
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            ),
        ];
        self.focus = 0;
    }

    /// 输入框写回表单模型
    fn store_form(&mut self) {
        let salary = self.fields[3].value().trim();
        let salary = if salary.is_empty() {
            None
        } else {
            match salary.parse::<serde_json::Number>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Salary '{}' is not a number, sending null", salary);
                    None
                }
            }
        };

        let form = self.book.selected_mut();
        form.name = self.fields[0].value().to_string();
        form.position = self.fields[1].value().to_string();
        form.office = self.fields[2].value().to_string();
        form.salary = salary;
    }

    fn show(&mut self, notice: Notice) {
        self.toast = Some((notice, Instant::now()));
    }

    fn clamp_selection(&mut self) {
        let len = self.book.employees().len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);
    }

    async fn refresh(&mut self) {
        if let Err(e) = self.book.refresh().await {
            tracing::error!("Refresh failed: {}", e);
        }
        self.clamp_selection();
    }

    async fn submit(&mut self) {
        self.store_form();
        match self.book.submit().await {
            Ok(notice) => {
                self.show(notice);
                self.mode = Mode::Browse;
            }
            Err(e) => tracing::error!("Submit failed: {}", e),
        }
        self.clamp_selection();
    }

    async fn delete(&mut self, id: String, confirm: bool) {
        match self.book.delete(&id, confirm).await {
            Ok(Some(notice)) => self.show(notice),
            Ok(None) => tracing::debug!("Delete cancelled"),
            Err(e) => tracing::error!("Delete failed: {}", e),
        }
        self.mode = Mode::Browse;
        self.clamp_selection();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize TUI Logger with Tracing
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let config = ClientConfig::from_env();
    let client = EmployeeClient::new(&config)?;
    let mut app = App::new(EmployeeBook::new(client));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Connected to {}", config.base_url);
    tracing::info!("n: new  e: edit  d: delete  r: refresh  q: quit");
    app.refresh().await;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        if app
            .toast
            .as_ref()
            .is_some_and(|(_, at)| at.elapsed() >= TOAST_TTL)
        {
            app.toast = None;
        }

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }

        match app.mode.clone() {
            Mode::Browse => {
                if handle_browse(app, key).await {
                    return Ok(());
                }
            }
            Mode::Form => handle_form(app, key).await,
            Mode::ConfirmDelete(id) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => app.delete(id, true).await,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.delete(id, false).await
                }
                _ => {}
            },
        }
    }
}

/// 返回 true 表示退出
async fn handle_browse(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('n') => {
            app.book.reset();
            app.load_form();
            app.mode = Mode::Form;
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(emp) = app.highlighted().cloned() {
                app.book.edit(&emp);
                app.load_form();
                app.mode = Mode::Form;
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.highlighted().map(|e| e.id.clone()) {
                app.mode = Mode::ConfirmDelete(id);
            }
        }
        KeyCode::Char('r') => app.refresh().await,
        KeyCode::Up => app.table_state.select_previous(),
        KeyCode::Down => app.table_state.select_next(),
        KeyCode::PageUp => app.logger_state.transition(TuiWidgetEvent::PrevPageKey),
        KeyCode::PageDown => app.logger_state.transition(TuiWidgetEvent::NextPageKey),
        _ => {}
    }
    false
}

async fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.book.reset();
            app.mode = Mode::Browse;
        }
        KeyCode::Enter => app.submit().await,
        KeyCode::Tab | KeyCode::Down => app.focus = (app.focus + 1) % app.fields.len(),
        KeyCode::BackTab | KeyCode::Up => {
            app.focus = (app.focus + app.fields.len() - 1) % app.fields.len()
        }
        _ => {
            app.fields[app.focus].handle_event(&Event::Key(key));
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Table + Form
            Constraint::Length(8), // Logs
            Constraint::Length(1), // Help / toast
        ])
        .split(f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    // Header
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Employee Manager "),
        Span::styled(
            format!(" {} employees ", app.book.employees().len()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, chunks[0]);

    render_table(f, app, main_chunks[0]);
    render_form(f, app, main_chunks[1]);

    // Logs (TuiLoggerWidget)
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, chunks[2]);

    // Footer: confirmation prompt, toast or key help
    let footer = match (&app.mode, &app.toast) {
        (Mode::ConfirmDelete(_), _) => Paragraph::new("Delete this employee? (y/n)")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        (_, Some((notice, _))) => {
            Paragraph::new(notice.message()).style(Style::default().fg(Color::Green))
        }
        (Mode::Form, None) => {
            Paragraph::new("Tab: next field  Enter: submit  Esc: cancel")
                .style(Style::default().fg(Color::DarkGray))
        }
        (Mode::Browse, None) => Paragraph::new(
            "n: new  e/Enter: edit  d: delete  r: refresh  PgUp/PgDn: logs  q: quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer, chunks[3]);
}

fn render_table(f: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(["Name", "Position", "Office", "Salary"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .book
        .employees()
        .iter()
        .map(|e| {
            Row::new(vec![
                e.name.clone().unwrap_or_default(),
                e.position.clone().unwrap_or_default(),
                e.office.clone().unwrap_or_default(),
                e.salary.as_ref().map(|s| s.to_string()).unwrap_or_default(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Employees ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::Form;
    let title = if app.book.selected().is_new() {
        " New employee "
    } else {
        " Edit employee "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(inner);

    for (i, (input, label)) in app.fields.iter().zip(FIELD_LABELS).enumerate() {
        let focused = editing && app.focus == i;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let width = rows[i].width.max(3) - 3;
        let scroll = input.visual_scroll(width as usize);
        let field = Paragraph::new(input.value())
            .style(style)
            .scroll((0, scroll as u16))
            .block(Block::default().borders(Borders::ALL).title(label));
        f.render_widget(field, rows[i]);

        if focused {
            f.set_cursor_position((
                rows[i].x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                rows[i].y + 1,
            ));
        }
    }
}
