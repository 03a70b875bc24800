//! Terminal styling
//!
//! Two halves share one palette intent:
//! - [`WpselStyle`] styles plain CLI output (`wpsel list`) through crossterm
//! - [`Theme`] carries the picker's colors into the ratatui renderer
//!
//! There is no global style state. The picker receives its `Theme` at
//! construction.

use crossterm::style::Stylize;

/// Extension trait for consistent CLI styling
///
/// # Examples
///
/// ```
/// use crossterm::style::Stylize;
/// use wpsel::style::WpselStyle;
///
/// println!("{}", "SINKS:".header());
/// println!("{}", "46".technical());
/// ```
pub trait WpselStyle: Stylize {
    /// Section headers (cyan bold)
    fn header(self) -> <<Self as Stylize>::Styled as Stylize>::Styled
    where
        Self: Sized,
        <Self as Stylize>::Styled: Stylize,
    {
        self.cyan().bold()
    }

    /// Positive states such as the current default (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Identifiers and other technical values (cyan)
    fn technical(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.cyan()
    }

    /// Secondary information such as volume (dark grey)
    fn secondary(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.dark_grey()
    }
}

impl<T: Stylize> WpselStyle for T {}

#[cfg(feature = "tui")]
pub use theme::Theme;

#[cfg(feature = "tui")]
mod theme {
    use ratatui::style::{Color, Modifier, Style};

    /// Picker color scheme
    ///
    /// `Color::Reset` anywhere means "terminal default".
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Theme {
        pub background: Color,
        pub title: Color,
        pub item: Color,
        pub selected_item: Color,
        pub help_key: Color,
        pub help_desc: Color,
        pub help_separator: Color,
        pub active_dot: Color,
        pub inactive_dot: Color,
        pub message: Color,
    }

    impl Default for Theme {
        /// Zenburn-style palette on a dark grey background
        fn default() -> Self {
            Self {
                background: Color::Rgb(0x3f, 0x3f, 0x3f),
                title: Color::Rgb(0xef, 0xef, 0x8f),
                item: Color::Rgb(0xdc, 0xdc, 0xcc),
                selected_item: Color::Rgb(0x7f, 0x9f, 0x7f),
                help_key: Color::Rgb(0x8c, 0xd0, 0xd3),
                help_desc: Color::Rgb(0xe3, 0xce, 0xab),
                help_separator: Color::Rgb(0xdf, 0xdf, 0xdf),
                active_dot: Color::Rgb(0xcc, 0x93, 0x93),
                inactive_dot: Color::Rgb(0xdf, 0xdf, 0xdf),
                message: Color::Rgb(0xef, 0xef, 0x8f),
            }
        }
    }

    impl Theme {
        /// Terminal default colors only, for `--no-color`
        #[must_use]
        pub const fn plain() -> Self {
            Self {
                background: Color::Reset,
                title: Color::Reset,
                item: Color::Reset,
                selected_item: Color::Reset,
                help_key: Color::Reset,
                help_desc: Color::Reset,
                help_separator: Color::Reset,
                active_dot: Color::Reset,
                inactive_dot: Color::DarkGray,
                message: Color::Reset,
            }
        }

        fn on_background(self, fg: Color) -> Style {
            Style::new().fg(fg).bg(self.background)
        }

        #[must_use]
        pub fn base(self) -> Style {
            Style::new().bg(self.background)
        }

        #[must_use]
        pub fn title(self) -> Style {
            self.on_background(self.title).add_modifier(Modifier::BOLD)
        }

        #[must_use]
        pub fn item(self) -> Style {
            self.on_background(self.item)
        }

        #[must_use]
        pub fn selected_item(self) -> Style {
            self.on_background(self.selected_item)
                .add_modifier(Modifier::BOLD)
        }

        #[must_use]
        pub fn help_key(self) -> Style {
            self.on_background(self.help_key)
        }

        #[must_use]
        pub fn help_desc(self) -> Style {
            self.on_background(self.help_desc)
        }

        #[must_use]
        pub fn help_separator(self) -> Style {
            self.on_background(self.help_separator)
        }

        #[must_use]
        pub fn dot(self, active: bool) -> Style {
            if active {
                self.on_background(self.active_dot)
            } else {
                self.on_background(self.inactive_dot)
            }
        }

        #[must_use]
        pub fn message(self) -> Style {
            self.on_background(self.message)
        }
    }
}
