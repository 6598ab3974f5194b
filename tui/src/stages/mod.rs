//! One renderer per stage.

mod access;
mod contract;
mod invite;
mod reject;
mod sign;

use ratatui::Frame;
use ratatui::layout::Rect;

use ubers_engine::Screen;

use crate::shared::DrawContext;

pub(crate) fn draw(frame: &mut Frame, screen: &Screen, area: Rect, ctx: &DrawContext) {
    match screen {
        Screen::Invite(s) => invite::draw(frame, s, area, ctx),
        Screen::Contract(s) => contract::draw(frame, s, area, ctx),
        Screen::Sign(s) => sign::draw(frame, s, area, ctx),
        Screen::Reject(s) => reject::draw(frame, s, area, ctx),
        Screen::Access(s) => access::draw(frame, s, area, ctx),
    }
}
