use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen split, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub footer: Rect,
}

/// Fixed-height header, form and footer; the list takes what is left.
///
/// On tiny terminals the fixed rows are cut from the bottom up, so the
/// header survives longest and the list may end up zero-height.
pub fn layout_regions(area: Rect) -> Regions {
    let header_height = HEADER_HEIGHT.min(area.height);
    let form_height = FORM_HEIGHT.min(area.height.saturating_sub(header_height));
    let footer_height =
        FOOTER_HEIGHT.min(area.height.saturating_sub(header_height + form_height));
    let list_height = area
        .height
        .saturating_sub(header_height + form_height + footer_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let form = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: form_height,
    };
    let list = Rect {
        x: area.x,
        y: form.y + form_height,
        width: area.width,
        height: list_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    Regions {
        header,
        form,
        list,
        footer,
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
