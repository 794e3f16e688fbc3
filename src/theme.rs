use ggez::graphics::Color;

/// Colours for one interaction state of a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetColors {
    pub border: Color,
    pub base: Color,
    pub text: Color,
}

/// Cosmetic style for the window and the parameter panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub label: Color,
    pub normal: WidgetColors,
    pub focused: WidgetColors,
    pub pressed: WidgetColors,
    pub text_size: f32,
}

impl Theme {
    /// Green-on-black terminal look.
    pub fn terminal() -> Self {
        Theme {
            background: Color::BLACK,
            label: Color::from_rgb(0, 117, 44),
            normal: WidgetColors {
                border: Color::from_rgb_u32(0x1c8d00),
                base: Color::from_rgb_u32(0x161313),
                text: Color::from_rgb_u32(0x38f620),
            },
            focused: WidgetColors {
                border: Color::from_rgb_u32(0xc3fbc6),
                base: Color::from_rgb_u32(0x43bf2e),
                text: Color::from_rgb_u32(0xdcfadc),
            },
            pressed: WidgetColors {
                border: Color::from_rgb_u32(0x1f5b19),
                base: Color::from_rgb_u32(0x43ff28),
                text: Color::from_rgb_u32(0x1e6f15),
            },
            text_size: 12.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::terminal()
    }
}
