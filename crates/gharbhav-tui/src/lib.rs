// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use gharbhav_app::{
    AppCommand, AppEvent, AppState, FieldId, FieldInput, FormState, NotificationCenter,
    NotificationPhase, PredictionSummary, ProfileSnapshot, ResultsVisibility, Severity, Theme,
    WorkflowPhase, apply_profile, locations,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionEvent {
    Completed {
        request_id: u64,
        prediction: PredictionSummary,
    },
    Failed {
        request_id: u64,
        error: String,
    },
}

impl PredictionEvent {
    const fn request_id(&self) -> u64 {
        match self {
            Self::Completed { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InternalEvent {
    Prediction(PredictionEvent),
}

/// Injected collaborator that performs the network call off the event loop
/// and reports back through the internal channel.
pub trait PredictRuntime {
    fn spawn_prediction(
        &mut self,
        request_id: u64,
        snapshot: &ProfileSnapshot,
        tx: Sender<InternalEvent>,
    ) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PredictInFlight {
    request_id: u64,
}

#[derive(Debug, Default)]
struct ViewData {
    cursor: usize,
    editing: Option<String>,
    in_flight: Option<PredictInFlight>,
    next_request_id: u64,
    notifications: NotificationCenter,
    help_visible: bool,
}

pub fn run_app<R: PredictRuntime>(
    state: &mut AppState,
    form: &mut FormState,
    runtime: &mut R,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        let now = OffsetDateTime::now_utc();
        view_data.notifications.prune(now);
        process_internal_events(state, &mut view_data, &internal_rx, now);

        if let Err(error) = terminal.draw(|frame| render(frame, state, form, &view_data, now)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    let now = OffsetDateTime::now_utc();
                    if handle_key_event(state, form, &mut view_data, runtime, &internal_tx, key, now)
                    {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
    now: OffsetDateTime,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::Prediction(event) => {
                handle_prediction_event(state, view_data, event, now);
            }
        }
    }
}

fn handle_prediction_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    event: PredictionEvent,
    now: OffsetDateTime,
) {
    let Some(in_flight) = view_data.in_flight else {
        return;
    };
    if event.request_id() != in_flight.request_id {
        return;
    }
    view_data.in_flight = None;

    match event {
        PredictionEvent::Completed { prediction, .. } => {
            state.dispatch(AppCommand::AcceptPrediction(prediction));
            view_data.notifications.notify(
                "price prediction completed successfully",
                Severity::Success,
                now,
            );
        }
        PredictionEvent::Failed { error, .. } => {
            state.dispatch(AppCommand::RejectPrediction(error.clone()));
            view_data.notifications.notify(error, Severity::Error, now);
        }
    }
}

fn handle_key_event<R: PredictRuntime>(
    state: &mut AppState,
    form: &mut FormState,
    view_data: &mut ViewData,
    runtime: &mut R,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: OffsetDateTime,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        view_data.help_visible = false;
        return false;
    }

    if view_data.editing.is_some() {
        handle_edit_key(state, form, view_data, key);
        return false;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_cursor(state, view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(state, view_data, -1),
        KeyCode::Char('h') | KeyCode::Left => cycle_field(state, form, view_data, -1),
        KeyCode::Char('l') | KeyCode::Right => cycle_field(state, form, view_data, 1),
        KeyCode::Enter => begin_edit(state, form, view_data),
        KeyCode::Char('m') => fill_sample(state, form, view_data, "mumbai", now),
        KeyCode::Char('b') => fill_sample(state, form, view_data, "bangalore", now),
        KeyCode::Char('p') => {
            begin_prediction(state, form, view_data, runtime, internal_tx, now);
        }
        KeyCode::Char('r') => reset_form(state, form, view_data, now),
        KeyCode::Char('t') => {
            state.dispatch(AppCommand::ToggleTheme);
        }
        KeyCode::Char('?') => view_data.help_visible = true,
        KeyCode::Esc => {
            if state.results == ResultsVisibility::Visible {
                state.dispatch(AppCommand::HideResults);
            }
        }
        _ => {}
    }
    false
}

fn handle_edit_key(
    state: &mut AppState,
    form: &mut FormState,
    view_data: &mut ViewData,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.editing = None;
            state.dispatch(AppCommand::SetStatus("edit canceled".to_owned()));
        }
        KeyCode::Enter => {
            let value = view_data.editing.take().unwrap_or_default();
            let field = selected_field(view_data);
            form.set(field, value.trim());
            state.dispatch(AppCommand::SetStatus(format!("{} updated", field.label())));
        }
        KeyCode::Backspace => {
            if let Some(buffer) = view_data.editing.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(buffer) = view_data.editing.as_mut() {
                buffer.push(ch);
            }
        }
        _ => {}
    }
}

fn selected_field(view_data: &ViewData) -> FieldId {
    FieldId::ALL[view_data.cursor.min(FieldId::ALL.len() - 1)]
}

fn move_cursor(state: &mut AppState, view_data: &mut ViewData, delta: isize) {
    let len = FieldId::ALL.len() as isize;
    view_data.cursor = (view_data.cursor as isize + delta).rem_euclid(len) as usize;
    let field = selected_field(view_data);
    state.dispatch(AppCommand::SetStatus(format!(
        "field {} ({}/{})",
        field.label(),
        view_data.cursor + 1,
        FieldId::ALL.len()
    )));
}

fn cycle_field(state: &mut AppState, form: &mut FormState, view_data: &ViewData, delta: isize) {
    let field = selected_field(view_data);
    let status = match field.input() {
        FieldInput::Region => {
            let mut options: Vec<String> = vec![String::new()];
            options.extend(locations::region_keys().map(str::to_owned));
            let next = next_option(&options, form.get(FieldId::State), delta);
            form.set_region(&next);
            cycle_status(field, &next)
        }
        FieldInput::Locality => {
            if form.locality_options().is_empty() {
                "choose a state first".to_owned()
            } else {
                let mut options: Vec<String> = vec![String::new()];
                options.extend(
                    form.locality_options()
                        .iter()
                        .map(|option| option.value.clone()),
                );
                let next = next_option(&options, form.get(FieldId::City), delta);
                form.set_locality(&next);
                cycle_status(field, &next)
            }
        }
        FieldInput::Choice(list) => {
            let mut options: Vec<String> = vec![String::new()];
            options.extend(list.iter().map(|choice| (*choice).to_owned()));
            let next = next_option(&options, form.get(field), delta);
            form.set(field, &next);
            cycle_status(field, &next)
        }
        FieldInput::Numeric => format!("press enter to edit {}", field.label()),
        FieldInput::Derived => "age follows year built".to_owned(),
    };
    state.dispatch(AppCommand::SetStatus(status));
}

fn next_option(options: &[String], current: &str, delta: isize) -> String {
    let len = options.len() as isize;
    let position = options
        .iter()
        .position(|option| option == current)
        .unwrap_or(0) as isize;
    options[(position + delta).rem_euclid(len) as usize].clone()
}

fn cycle_status(field: FieldId, value: &str) -> String {
    if value.is_empty() {
        format!("{} cleared", field.label())
    } else {
        format!("{} {}", field.label(), value)
    }
}

fn begin_edit(state: &mut AppState, form: &FormState, view_data: &mut ViewData) {
    let field = selected_field(view_data);
    let status = match field.input() {
        FieldInput::Numeric => {
            view_data.editing = Some(form.get(field).to_owned());
            format!("editing {} -- enter to apply, esc to cancel", field.label())
        }
        FieldInput::Derived => "age follows year built".to_owned(),
        FieldInput::Region | FieldInput::Locality | FieldInput::Choice(_) => {
            format!("use h/l to choose {}", field.label())
        }
    };
    state.dispatch(AppCommand::SetStatus(status));
}

fn fill_sample(
    state: &mut AppState,
    form: &mut FormState,
    view_data: &mut ViewData,
    name: &str,
    now: OffsetDateTime,
) {
    if let Some(profile) = apply_profile(form, name) {
        view_data.cursor = 0;
        view_data.editing = None;
        view_data.notifications.notify(
            format!("sample data loaded: {}", profile.description),
            Severity::Success,
            now,
        );
        state.dispatch(AppCommand::SetStatus(format!("sample {}", profile.name)));
    }
}

fn reset_form(
    state: &mut AppState,
    form: &mut FormState,
    view_data: &mut ViewData,
    now: OffsetDateTime,
) {
    form.reset();
    view_data.editing = None;
    view_data.cursor = 0;
    state.dispatch(AppCommand::HideResults);
    view_data
        .notifications
        .notify("form reset successfully", Severity::Info, now);
}

fn begin_prediction<R: PredictRuntime>(
    state: &mut AppState,
    form: &FormState,
    view_data: &mut ViewData,
    runtime: &mut R,
    internal_tx: &Sender<InternalEvent>,
    now: OffsetDateTime,
) {
    let events = state.dispatch(AppCommand::StartSubmission);
    if events.contains(&AppEvent::SubmissionBlocked) {
        view_data.notifications.notify(
            "a prediction is already in progress",
            Severity::Info,
            now,
        );
        return;
    }

    let request_id = next_request_id(view_data);
    view_data.in_flight = Some(PredictInFlight { request_id });
    let snapshot = form.snapshot();
    if let Err(error) = runtime.spawn_prediction(request_id, &snapshot, internal_tx.clone()) {
        // The exit to idle must run on every path, spawn errors included.
        view_data.in_flight = None;
        let message = error.to_string();
        state.dispatch(AppCommand::RejectPrediction(message.clone()));
        view_data.notifications.notify(message, Severity::Error, now);
    }
}

fn next_request_id(view_data: &mut ViewData) -> u64 {
    view_data.next_request_id = view_data.next_request_id.saturating_add(1);
    if view_data.next_request_id == 0 {
        view_data.next_request_id = 1;
    }
    view_data.next_request_id
}

struct Palette {
    base: Style,
    accent: Style,
    selected: Style,
    status: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Style::default().fg(Color::Blue).bg(Color::White),
                selected: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                status: Style::default().fg(Color::DarkGray).bg(Color::White),
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Style::default().fg(Color::Cyan).bg(Color::Black),
                selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                status: Style::default().fg(Color::Yellow).bg(Color::Black),
            },
        }
    }
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    form: &FormState,
    view_data: &ViewData,
    now: OffsetDateTime,
) {
    let palette = Palette::for_theme(state.theme);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new("Indian house price estimator")
        .style(palette.base)
        .block(
            Block::default()
                .title(format!(" gharbhav {} ", state.theme.icon()))
                .borders(Borders::ALL)
                .style(palette.accent),
        );
    frame.render_widget(header, layout[0]);

    render_form_table(frame, layout[1], form, view_data, &palette);

    let status_widget = Paragraph::new(status_text(state))
        .style(palette.status)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if state.results == ResultsVisibility::Visible
        && let Some(prediction) = &state.prediction
    {
        let area = centered_rect(52, 40, frame.area());
        frame.render_widget(Clear, area);
        let results = Paragraph::new(results_text(prediction)).style(palette.base).block(
            Block::default()
                .title("estimated price")
                .borders(Borders::ALL)
                .style(palette.accent),
        );
        frame.render_widget(results, area);
    }

    if view_data.help_visible {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .style(palette.base)
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }

    render_notifications(frame, view_data, now);
}

fn render_form_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    form: &FormState,
    view_data: &ViewData,
    palette: &Palette,
) {
    let rows: Vec<Row> = FieldId::ALL
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let value = field_display_value(form, view_data, index, field);
            let row = Row::new(vec![Cell::from(field.label().to_owned()), Cell::from(value)]);
            if index == view_data.cursor {
                row.style(palette.selected)
            } else {
                row.style(palette.base)
            }
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(10)])
        .block(Block::default().title("property").borders(Borders::ALL))
        .style(palette.base);
    frame.render_widget(table, area);
}

fn field_display_value(
    form: &FormState,
    view_data: &ViewData,
    index: usize,
    field: FieldId,
) -> String {
    if index == view_data.cursor
        && let Some(buffer) = &view_data.editing
    {
        return format!("{buffer}▏");
    }

    let value = form.get(field);
    match field.input() {
        FieldInput::Locality if value.is_empty() => {
            let count = form.locality_options().len();
            if count == 0 {
                "(choose a state first)".to_owned()
            } else {
                format!("({count} options -- h/l to choose)")
            }
        }
        _ if value.is_empty() => "-".to_owned(),
        FieldInput::Region | FieldInput::Locality | FieldInput::Choice(_) => {
            locations::humanize(value)
        }
        _ => value.to_owned(),
    }
}

fn status_text(state: &AppState) -> String {
    let hints = if state.phase == WorkflowPhase::Submitting {
        "predicting...".to_owned()
    } else {
        "j/k move | h/l choose | enter edit | m/b sample | p predict | r reset | t theme | ? help | ctrl+q quit"
            .to_owned()
    };
    match &state.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints,
    }
}

fn results_text(prediction: &PredictionSummary) -> String {
    [
        prediction.formatted_price.clone(),
        prediction.formatted_price_inr.clone(),
        format!("{}% Confidence", prediction.confidence),
        String::new(),
        "esc to close".to_owned(),
    ]
    .join("\n")
}

fn help_overlay_text() -> String {
    [
        "j/k or arrows  move between fields",
        "h/l or arrows  cycle choices (state, city, ...)",
        "enter          edit a numeric field",
        "m              load the mumbai sample",
        "b              load the bangalore sample",
        "p              request a price prediction",
        "r              reset the form",
        "t              toggle light/dark theme",
        "esc            close results / cancel edit",
        "ctrl+q         quit",
    ]
    .join("\n")
}

fn render_notifications(frame: &mut ratatui::Frame<'_>, view_data: &ViewData, now: OffsetDateTime) {
    let frame_area = frame.area();
    for (index, entry) in view_data.notifications.entries().iter().enumerate() {
        let Some(phase) = entry.phase(now) else {
            continue;
        };
        let width = (entry.message.chars().count() as u16 + 4)
            .min(44)
            .min(frame_area.width);
        let y = 1 + index as u16 * 3;
        if y + 3 > frame_area.height {
            break;
        }
        let area = Rect {
            x: frame_area.width.saturating_sub(width + 1),
            y,
            width,
            height: 3,
        };
        frame.render_widget(Clear, area);
        let widget = Paragraph::new(entry.message.clone())
            .style(notification_style(entry.severity, phase))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, area);
    }
}

fn notification_style(severity: Severity, phase: NotificationPhase) -> Style {
    let color = match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Blue,
    };
    let style = Style::default().fg(color);
    match phase {
        NotificationPhase::Entering | NotificationPhase::Leaving => {
            style.add_modifier(Modifier::DIM)
        }
        NotificationPhase::Visible => style.add_modifier(Modifier::BOLD),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
