use std::time::Duration;

use iced::task;
use iced::widget::{column, container, image, operation};
use iced::{Alignment, Element, Fill, Size, Subscription, Task, Theme};

use crate::config::Config;
use crate::error::SearchError;
use crate::search::client::SearchClient;
use crate::search::controller::{InputController, PendingQuery, Settled};
use crate::search::{self, SearchResult};
use crate::ui::{result_list, rows, search_input, theme};

/// Interval between loading-indicator frames
const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

pub struct State {
    config: Config,
    /// Client, or the reason it could not be built from config
    client: Result<SearchClient, SearchError>,
    controller: InputController,

    /// Handle of the armed quiet-period task; aborted on every edit
    debounce: Option<task::Handle>,
    spinner_frame: usize,
    /// Result row under the pointer
    hovered: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Enter in the search bar: search immediately
    SearchNow,
    QuietPeriodElapsed(u64),
    SearchCompleted {
        request: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    },
    /// A result row was clicked; carries the row's detail link
    OpenResult(String),
    RowHovered(Option<usize>),
    SpinnerTick,
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let client = SearchClient::new(&config.api);
        match &client {
            Ok(_) => tracing::info!(
                "Searching {}{} with a {:?} quiet period",
                config.api.base_url,
                config.api.endpoint,
                config.search.quiet_period()
            ),
            Err(e) => tracing::error!("Search disabled: {}", e),
        }

        let state = Self {
            controller: InputController::new(config.search.quiet_period()),
            config,
            client,
            debounce: None,
            spinner_frame: 0,
            hovered: None,
        };

        (state, operation::focus(search_input::SEARCH_INPUT_ID))
    }

    pub fn title(&self) -> String {
        String::from("Probably Genetics")
    }

    pub fn window_size(config: &Config) -> Size {
        Size::new(config.window.width, config.window.height)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                tracing::debug!("QueryChanged: '{}'", query);
                let generation = self.controller.text_changed(query);
                self.arm_debounce(generation)
            }
            Message::SearchNow => {
                self.cancel_debounce();
                let pending = self.controller.submit();
                self.perform_search(pending)
            }
            Message::QuietPeriodElapsed(generation) => {
                match self.controller.quiet_period_elapsed(generation) {
                    Some(pending) => {
                        self.debounce = None;
                        self.perform_search(pending)
                    }
                    // A newer edit owns the armed timer
                    None => Task::none(),
                }
            }
            Message::SearchCompleted { request, outcome } => {
                let settled = self.controller.search_completed(request, outcome);
                if settled == Settled::Applied {
                    self.hovered = None;
                }
                tracing::debug!(
                    "SearchCompleted: request={}, {:?}, {} results shown",
                    request,
                    settled,
                    self.controller.results().len()
                );
                Task::none()
            }
            Message::OpenResult(link) => {
                let target = match &self.client {
                    Ok(client) => client.resolve_link(&link),
                    Err(_) => link,
                };
                tracing::info!("Opening {}", target);
                if let Err(e) = open::that(&target) {
                    tracing::error!("Failed to open {}: {}", target, e);
                }
                Task::none()
            }
            Message::RowHovered(index) => {
                self.hovered = index;
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = column![].spacing(14).align_x(Alignment::Start);

        if let Some(logo) = self.config.window.logo.as_deref().filter(|p| p.exists()) {
            content = content.push(
                container(image(image::Handle::from_path(logo)).width(100))
                    .center_x(theme::CARD_WIDTH)
                    .padding(iced::Padding {
                        bottom: 25.0,
                        ..iced::Padding::ZERO
                    }),
            );
        }

        content = content.push(search_input::view(
            self.controller.text(),
            self.controller.is_loading(),
            self.spinner_frame,
        ));

        if let Some(error) = self.controller.last_error() {
            content = content.push(search_input::error_line(error.summary()));
        }

        content = content.push(result_list::view(
            rows::layout(self.controller.results()),
            self.hovered,
            self.config.window.empty_state.as_deref(),
        ));

        let page = container(content).padding(iced::Padding {
            top: 50.0,
            ..iced::Padding::ZERO
        });

        container(page)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .style(theme::page)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.controller.is_loading() {
            iced::time::every(SPINNER_INTERVAL).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    // ---- Debounce / requests ----

    fn arm_debounce(&mut self, generation: u64) -> Task<Message> {
        self.cancel_debounce();
        let delay = self.controller.quiet_period();
        let (task, handle) = Task::perform(
            search::quiet_period(generation, delay),
            Message::QuietPeriodElapsed,
        )
        .abortable();
        self.debounce = Some(handle);
        task
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }

    fn perform_search(&mut self, pending: PendingQuery) -> Task<Message> {
        let PendingQuery { request, text } = pending;
        tracing::debug!("Issuing request={} for '{}'", request, text);

        match &self.client {
            Ok(client) => {
                let client = client.clone();
                Task::perform(
                    async move { client.search(&text).await },
                    move |outcome| Message::SearchCompleted { request, outcome },
                )
            }
            Err(e) => {
                let e = e.clone();
                self.controller.search_completed(request, Err(e));
                Task::none()
            }
        }
    }
}
