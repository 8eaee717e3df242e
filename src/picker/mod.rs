use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::debug;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::directory::{Directory, start_fetch_worker};
use self::domain::models::{
    DataSource, FetchKind, FetchRequest, FetchResponse, FetchResponseKind, Item, Selection,
    SelectionMode,
};
use self::ui::{
    app_state::PickerState, commands::Command, components::Component, events::Message,
    renderer::Renderer, view_model::ViewModel,
};

/// The interactive picker screen: owns the controller state, the
/// renderer, the fetch worker, and the two debounce timers.
pub struct InteractivePicker {
    state: PickerState,
    renderer: Renderer,
    directory: Arc<dyn Directory>,
    fetch_sender: Option<Sender<FetchRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    search_timer: Option<Instant>,
    scheduled_search_delay: Option<u64>,
    load_more_timer: Option<Instant>,
    scheduled_load_more_delay: Option<u64>,
    outcome: Option<Selection>,
    done: bool,
}

impl InteractivePicker {
    pub fn new(
        source: DataSource,
        mode: SelectionMode,
        initial_items: Vec<Item>,
        initial_selected: Vec<Item>,
        directory: Arc<dyn Directory>,
    ) -> Self {
        Self {
            state: PickerState::new(source, mode, initial_items, initial_selected),
            renderer: Renderer::new(),
            directory,
            fetch_sender: None,
            fetch_receiver: None,
            search_timer: None,
            scheduled_search_delay: None,
            load_more_timer: None,
            scheduled_load_more_delay: None,
            outcome: None,
            done: false,
        }
    }

    /// Run the picker until the user confirms or cancels. Returns the
    /// selection, or `None` when the screen was dismissed.
    pub fn run(&mut self) -> Result<Option<Selection>> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = start_fetch_worker(self.directory.clone());
        self.fetch_sender = Some(tx);
        self.fetch_receiver = Some(rx);

        let command = self.state.initialize();
        self.execute_command(command);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result?;
        Ok(self.outcome.take())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let vm = ViewModel::derive(&self.state);
            terminal.draw(|f| {
                self.renderer.render(f, &vm);
            })?;

            // Fetch completions. Stale ones are dropped inside update()
            // by comparing the carried generation id.
            while let Some(msg) = self.poll_fetch_response() {
                self.handle_message(msg);
            }

            // Search debounce: only the most recently armed timer exists,
            // so the last keystroke wins.
            if let (Some(timer), Some(delay)) = (self.search_timer, self.scheduled_search_delay) {
                if timer.elapsed() >= Duration::from_millis(delay) {
                    self.search_timer = None;
                    self.scheduled_search_delay = None;
                    self.handle_message(Message::SearchRequested);
                }
            }

            // Load-more debounce collapses repeated scroll hits.
            if let (Some(timer), Some(delay)) =
                (self.load_more_timer, self.scheduled_load_more_delay)
            {
                if timer.elapsed() >= Duration::from_millis(delay) {
                    self.load_more_timer = None;
                    self.scheduled_load_more_delay = None;
                    self.handle_message(Message::LoadMore);
                }
            }

            if self.done {
                break;
            }

            if poll(Duration::from_millis(constants::EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_input(key);
                    if self.done {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn poll_fetch_response(&mut self) -> Option<Message> {
        let receiver = self.fetch_receiver.as_ref()?;
        let response = receiver.try_recv().ok()?;
        Some(response_to_message(response))
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_message(Message::Close);
            return;
        }
        if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.state.mode == SelectionMode::Multi {
                self.handle_message(Message::Submit);
            }
            return;
        }
        if key.code == KeyCode::Esc {
            self.handle_message(Message::Close);
            return;
        }

        let message = match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.get_item_list_mut().handle_key(key),
            KeyCode::Char('p') | KeyCode::Char('n')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.renderer.get_item_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay) => {
                self.search_timer = Some(Instant::now());
                self.scheduled_search_delay = Some(delay);
            }
            Command::ExecuteSearch { id } => {
                if !self.directory.supports_search(self.state.source) {
                    // A missing search backend is a valid configuration,
                    // not an error.
                    self.handle_message(Message::SearchSkipped);
                    return;
                }
                debug!(id, term = %self.state.term, "dispatching search");
                self.send_request(FetchRequest {
                    id,
                    source: self.state.source,
                    kind: FetchKind::Search {
                        term: self.state.term.to_lowercase(),
                    },
                });
            }
            Command::ScheduleLoadMore(delay) => {
                self.load_more_timer = Some(Instant::now());
                self.scheduled_load_more_delay = Some(delay);
            }
            Command::ExecutePageFetch { id, page } => {
                debug!(id, page, "dispatching page fetch");
                self.send_request(FetchRequest {
                    id,
                    source: self.state.source,
                    kind: FetchKind::Page {
                        page,
                        per_page: self.state.source.page_size(),
                    },
                });
            }
            Command::Complete(selection) => {
                self.outcome = Some(selection);
                self.done = true;
            }
            Command::Close => {
                self.done = true;
            }
        }
    }

    fn send_request(&mut self, request: FetchRequest) {
        if let Some(sender) = &self.fetch_sender {
            let _ = sender.send(request);
        }
    }
}

fn response_to_message(response: FetchResponse) -> Message {
    match response.kind {
        FetchResponseKind::Page(Ok(items)) => Message::PageLoaded {
            id: response.id,
            items,
        },
        FetchResponseKind::Page(Err(error)) => Message::PageFailed {
            id: response.id,
            error,
        },
        FetchResponseKind::Search(Ok(items)) => Message::SearchCompleted {
            id: response.id,
            items,
        },
        FetchResponseKind::Search(Err(error)) => Message::SearchFailed {
            id: response.id,
            error,
        },
    }
}
