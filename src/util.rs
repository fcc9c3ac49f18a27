use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the area in which to draw a screen whose content needs `content`
/// cells, centered within `buffer_area`.  The area is never smaller than
/// [`DISPLAY_SIZE`][consts::DISPLAY_SIZE].
pub(crate) fn get_display_area(buffer_area: Rect, content: Size) -> Rect {
    let size = Size {
        width: content.width.max(consts::DISPLAY_SIZE.width),
        height: content.height.max(consts::DISPLAY_SIZE.height),
    };
    center_rect(buffer_area, size)
}

/// Return a rectangle of size `size` centered within `area`, clipped to
/// `area` if it doesn't fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}

/// Stepping through the variants of a field-less enum in declaration order
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::GameMode;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(0, 0, 30, 10), Size::new(40, 12), Rect::new(0, 0, 30, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }

    #[test]
    fn display_area_has_minimum_size() {
        assert_eq!(
            get_display_area(Rect::new(0, 0, 100, 30), Size::new(10, 5)),
            Rect::new(10, 3, 80, 24)
        );
    }

    #[test]
    fn enum_ext() {
        assert_eq!(GameMode::min(), GameMode::Classic);
        assert_eq!(GameMode::max(), GameMode::Fun);
        assert_eq!(GameMode::Classic.next(), Some(GameMode::Fun));
        assert_eq!(GameMode::Fun.next(), None);
        assert_eq!(GameMode::Fun.prev(), Some(GameMode::Classic));
        assert_eq!(GameMode::Classic.prev(), None);
        assert_eq!(
            GameMode::iter().collect::<Vec<_>>(),
            vec![GameMode::Classic, GameMode::Fun]
        );
    }
}
