use probably::app::State;
use probably::config;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = config::load();
    let window_size = State::window_size(&config);

    tracing::info!("Starting Probably Genetics search");

    iced::application(move || State::new(config.clone()), State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .window_size(window_size)
        .centered()
        .run()
}
