use ratatui::style::Color;

/// All colors used by the TUI, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // ── Board ──────────────────────────────────────────────────────
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    pub board_border: Color,
    pub board_label: Color,

    // ── Overlays (light-square variant, dark-square variant) ──────
    pub overlay_selected: (Color, Color),
    pub overlay_last_move: (Color, Color),
    /// Border drawn around legal destinations
    pub highlight_border: Color,

    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Theme {
    /// Dark theme, for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            light_square: Color::Rgb(240, 217, 181),
            dark_square: Color::Rgb(181, 136, 99),
            // Explicit RGB instead of ANSI White/Black: many terminals
            // remap ANSI colors, causing pieces to blend into the board.
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(0, 0, 0),
            board_border: Color::Cyan,
            board_label: Color::Yellow,

            overlay_selected: (Color::LightYellow, Color::Yellow),
            overlay_last_move: (Color::Rgb(205, 210, 106), Color::Rgb(170, 162, 58)),
            highlight_border: Color::Blue,

            panel_border: Color::Cyan,

            positive: Color::Green,
            warning: Color::Yellow,
            negative: Color::Red,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Light theme, for terminals with a light background.
    /// Uses explicit RGB to avoid ANSI color remapping, and darker board
    /// squares so white pieces have sufficient contrast.
    pub fn light() -> Self {
        Self {
            light_square: Color::Rgb(210, 180, 140),
            dark_square: Color::Rgb(150, 110, 70),
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(30, 30, 30),
            board_border: Color::Rgb(60, 60, 60),
            board_label: Color::Rgb(100, 80, 50),

            overlay_selected: (Color::Rgb(220, 200, 80), Color::Rgb(180, 160, 40)),
            overlay_last_move: (Color::Rgb(190, 190, 110), Color::Rgb(150, 150, 70)),
            highlight_border: Color::Rgb(40, 90, 180),

            panel_border: Color::Rgb(60, 120, 140),

            positive: Color::Rgb(30, 140, 30),
            warning: Color::Rgb(180, 140, 0),
            negative: Color::Rgb(200, 40, 40),
            muted: Color::Rgb(150, 150, 150),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(100, 100, 100),
        }
    }

    /// Returns true if this is the dark theme variant.
    pub fn is_dark(&self) -> bool {
        // Dark theme uses ANSI Color::White for text_primary;
        // light theme uses Rgb(30,30,30).
        self.text_primary == Color::White
    }

    /// Background for a square, innermost overlay winning.
    pub fn square_bg(&self, is_light_square: bool, selected: bool, last_move: bool) -> Color {
        let pick = |(light, dark): (Color, Color)| if is_light_square { light } else { dark };
        if selected {
            pick(self.overlay_selected)
        } else if last_move {
            pick(self.overlay_last_move)
        } else {
            pick((self.light_square, self.dark_square))
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
