use letterbox_types::Section;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app::TuiApp;
use super::components::{
    Component, DetailComponent, FooterComponent, FormComponent, GalleryComponent, NavComponent,
    NotificationComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut TuiApp) {
    state.areas = Default::default();

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .split(f.area());

    NavComponent.render(f, chunks[0], state);

    match state.section {
        Section::Write => FormComponent.render(f, chunks[1], state),
        Section::View => GalleryComponent.render(f, chunks[1], state),
    }

    FooterComponent.render(f, chunks[2], state);

    if state.detail.is_some() {
        DetailComponent.render(f, f.area(), state);
    }

    NotificationComponent.render(f, chunks[1], state);
}
