use iced::widget::{container, row, text, text_input};
use iced::{Alignment, Element, Padding};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "probably-search-input";

/// Frames of the loading indicator, advanced by the spinner subscription
const SPINNER_FRAMES: [&str; 4] = ["·  ", "·· ", "···", " ··"];

/// Build the search bar: the input plus a loading indicator while a request is in flight
pub fn view<'a>(query: &'a str, loading: bool, spinner_frame: usize) -> Element<'a, Message> {
    let input = text_input("what are your symptoms...", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchNow)
        .id(SEARCH_INPUT_ID)
        .size(14)
        .style(theme::search_input);

    let mut bar = row![input].spacing(6).align_y(Alignment::Center);
    if loading {
        let frame = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        bar = bar.push(text(frame).size(14).color(theme::TEXT_PRIMARY));
    }

    container(bar)
        .padding(Padding::from([4, 10]))
        .width(theme::CARD_WIDTH)
        .style(theme::card)
        .into()
}

/// Muted line describing the last failed search
pub fn error_line<'a>(summary: &'a str) -> Element<'a, Message> {
    text(format!("{summary}. Press Enter to retry."))
        .size(11)
        .color(theme::TEXT_ERROR)
        .into()
}
