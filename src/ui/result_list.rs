use std::path::Path;

use iced::widget::{column, container, image, mouse_area, row, scrollable, text, Column};
use iced::{mouse, Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::rows::{ResultRow, ResultsView, LEARN_MORE};
use crate::ui::theme;

/// Width of the empty-state illustration
const PLACEHOLDER_WIDTH: f32 = 380.0;
/// Width of the label column inside a row
const LABEL_WIDTH: f32 = 195.0;

/// Build the results area from a prepared [`ResultsView`].
/// `hovered` is the row under the pointer, drawn faded.
pub fn view<'a>(
    results: ResultsView,
    hovered: Option<usize>,
    empty_state: Option<&'a Path>,
) -> Element<'a, Message> {
    match results {
        ResultsView::Placeholder => placeholder(empty_state),
        ResultsView::Rows(rows) => {
            let mut list = Column::new().spacing(14);
            for (i, result) in rows.into_iter().enumerate() {
                list = list.push(result_row(i, result, hovered == Some(i)));
            }
            scrollable(list).height(Fill).into()
        }
    }
}

fn result_row<'a>(index: usize, result: ResultRow, is_hovered: bool) -> Element<'a, Message> {
    let (primary, secondary) = if is_hovered {
        (theme::faded(theme::TEXT_PRIMARY), theme::faded(theme::TEXT_SECONDARY))
    } else {
        (theme::TEXT_PRIMARY, theme::TEXT_SECONDARY)
    };

    let label = container(text(result.label).size(14).color(primary)).width(LABEL_WIDTH);

    let meta = row![
        text(result.match_label).size(10).color(primary),
        text(LEARN_MORE).size(10).color(secondary),
    ]
    .spacing(7)
    .align_y(Alignment::Center);

    let style = if is_hovered {
        theme::card_hovered as fn(&iced::Theme) -> container::Style
    } else {
        theme::card
    };

    let card = container(
        row![label, meta]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(Padding::from([5, 10]))
    .width(theme::CARD_WIDTH)
    .style(style);

    mouse_area(card)
        .on_press(Message::OpenResult(result.link))
        .on_enter(Message::RowHovered(Some(index)))
        .on_exit(Message::RowHovered(None))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn placeholder<'a>(empty_state: Option<&'a Path>) -> Element<'a, Message> {
    match empty_state.filter(|path| path.exists()) {
        Some(path) => image(image::Handle::from_path(path))
            .width(PLACEHOLDER_WIDTH)
            .into(),
        None => column![
            text("No matches yet").size(16).color(theme::TEXT_SECONDARY),
            text("Describe a symptom to see likely disorders")
                .size(11)
                .color(theme::TEXT_SECONDARY),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(theme::CARD_WIDTH)
        .into(),
    }
}
