//! Side-by-side layout of the logo and the info column.

use crate::ui::style::{visible_width, Style};
use std::fmt;

const INDENT: &str = "  ";
const GAP: &str = "   ";

/// Logo lines next to info lines
#[derive(Debug, Clone)]
pub struct Report {
    logo: Vec<String>,
    info: Vec<String>,
    style: Style,
    logo_width: usize,
}

impl Report {
    pub fn new<L, I>(logo: L, info: I, style: Style) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let logo: Vec<String> = logo.into_iter().map(Into::into).collect();
        let info: Vec<String> = info.into_iter().map(Into::into).collect();
        let logo_width = logo.iter().map(|line| visible_width(line)).max().unwrap_or(0);
        Self {
            logo,
            info,
            style,
            logo_width,
        }
    }

    /// Width of the logo column in terminal cells
    pub fn logo_width(&self) -> usize {
        self.logo_width
    }

    /// One string per output row, without the surrounding blank lines
    pub fn rows(&self) -> Vec<String> {
        let height = self.logo.len().max(self.info.len());
        (0..height)
            .map(|i| {
                let logo = self.logo.get(i).map(String::as_str).unwrap_or("");
                let info = self.info.get(i).map(String::as_str).unwrap_or("");
                let padding = self.logo_width.saturating_sub(visible_width(logo));
                let cell = format!("{}{}", logo, " ".repeat(padding));
                format!("{}{}{}{}", INDENT, self.style.logo(&cell), GAP, info)
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        writeln!(f)
    }
}
