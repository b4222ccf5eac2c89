use ratatui::{Frame, layout::Rect};

use super::app::TuiApp;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp);
}

pub(crate) mod detail;
pub(crate) mod footer;
pub(crate) mod form;
pub(crate) mod gallery;
pub(crate) mod nav;
pub(crate) mod notification;

pub(crate) use detail::DetailComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use form::FormComponent;
pub(crate) use gallery::GalleryComponent;
pub(crate) use nav::NavComponent;
pub(crate) use notification::NotificationComponent;
