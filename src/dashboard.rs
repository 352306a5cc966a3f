use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame, Terminal,
};

use demographic_analyzer::{
    logging, AnalyzerConfig, Dataset, DemographicAnalyzer, ResultSet, StatValue,
};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Terminal view of the census statistics", long_about = None)]
struct Cli {
    /// Path to the census CSV (defaults to $ADULT_DATA_PATH, then adult.data.csv)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,
}

enum Event<I> {
    Input(I),
    Tick,
}

#[derive(Copy, Clone, Debug)]
enum MenuItem {
    Races,
    Statistics,
}

impl From<MenuItem> for usize {
    fn from(input: MenuItem) -> usize {
        match input {
            MenuItem::Races => 0,
            MenuItem::Statistics => 1,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_tracing(false);

    let config = AnalyzerConfig::from_env(false).with_data_path(cli.data);
    let dataset = Dataset::load(&config.data_path)?;
    let results = DemographicAnalyzer::new(&dataset).analyze()?;
    let source = format!("{} ({} records)", config.data_path.display(), dataset.len());

    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let outcome = run_app(&mut terminal, &results, &source);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;
    outcome
}

fn spawn_input_thread(tick_rate: Duration) -> mpsc::Receiver<Event<event::KeyEvent>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if let Ok(true) = event::poll(timeout) {
                if let Ok(CEvent::Key(key)) = event::read() {
                    if tx.send(Event::Input(key)).is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });
    rx
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    results: &ResultSet,
    source: &str,
) -> Result<(), Box<dyn Error>> {
    let rx = spawn_input_thread(Duration::from_millis(200));
    let mut active_menu_item = MenuItem::Races;

    loop {
        terminal.draw(|rect| draw(rect, results, source, active_menu_item))?;

        match rx.recv()? {
            Event::Input(event) => match event.code {
                KeyCode::Char('q') => break,
                KeyCode::Char('r') => active_menu_item = MenuItem::Races,
                KeyCode::Char('s') => active_menu_item = MenuItem::Statistics,
                KeyCode::Tab => {
                    active_menu_item = match active_menu_item {
                        MenuItem::Races => MenuItem::Statistics,
                        MenuItem::Statistics => MenuItem::Races,
                    }
                }
                _ => {}
            },
            Event::Tick => {}
        }
    }
    Ok(())
}

fn draw<B: Backend>(rect: &mut Frame<B>, results: &ResultSet, source: &str, active: MenuItem) {
    let size = rect.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(3)].as_ref())
        .split(size);

    let menu_titles = ["Races", "Statistics", "Quit"];
    let menu = menu_titles
        .iter()
        .map(|t| {
            let (first, rest) = t.split_at(1);
            Spans::from(vec![
                Span::styled(
                    first,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(rest, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    let tabs = Tabs::new(menu)
        .select(active.into())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw("|"));
    rect.render_widget(tabs, chunks[0]);

    match active {
        MenuItem::Races => {
            let chart_data = results
                .race_count
                .iter()
                .map(|(race, count)| (race.as_str(), *count))
                .collect::<Vec<_>>();
            let chart = BarChart::default()
                .block(Block::default().title("Number of each race").borders(Borders::ALL))
                .data(&chart_data)
                .bar_width(18)
                .bar_gap(2)
                .bar_style(Style::default().fg(Color::Yellow))
                .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));
            rect.render_widget(chart, chunks[1]);
        }
        MenuItem::Statistics => {
            let rows = results
                .entries()
                .into_iter()
                .filter(|(_, value)| !matches!(value, StatValue::Counts(_)))
                .map(|(key, value)| Row::new(vec![Cell::from(key), Cell::from(value.to_string())]))
                .collect::<Vec<_>>();
            let table = Table::new(rows)
                .header(
                    Row::new(vec![Cell::from("Statistic"), Cell::from("Value")]).style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                )
                .block(Block::default().title("Statistics").borders(Borders::ALL))
                .widths(&[Constraint::Percentage(60), Constraint::Percentage(40)]);
            rect.render_widget(table, chunks[1]);
        }
    }

    let footer = Paragraph::new(source)
        .block(Block::default().title("Source").borders(Borders::ALL))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    rect.render_widget(footer, chunks[2]);
}
