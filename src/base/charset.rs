#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub tree_sideways_t: &'static str,
    pub tree_corner: &'static str,
    pub tree_pipe_gap: &'static str,
    pub tree_space: &'static str,
    pub table_rule: char,
    pub chart_axis: char,
    pub chart_bar_income: char,
    pub chart_bar_expense: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            tree_sideways_t: "|-- ",
            tree_corner: "`-- ",
            tree_pipe_gap: "|   ",
            tree_space: "    ",
            table_rule: '=',
            chart_axis: '|',
            chart_bar_income: '+',
            chart_bar_expense: '-',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            tree_sideways_t: "\u{251c}\u{2500}\u{2500} ",
            tree_corner: "\u{2514}\u{2500}\u{2500} ",
            tree_pipe_gap: "\u{2502}   ",
            tree_space: "    ",
            table_rule: '\u{2550}',
            chart_axis: '\u{2502}',
            chart_bar_income: '\u{2588}',
            chart_bar_expense: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Paints `s` green, if color is enabled.
    pub fn positive(&self, s: &str) -> String {
        match self.color {
            true => colored::Colorize::green(s).to_string(),
            false => s.to_string(),
        }
    }

    /// Paints `s` red, if color is enabled.
    pub fn negative(&self, s: &str) -> String {
        match self.color {
            true => colored::Colorize::red(s).to_string(),
            false => s.to_string(),
        }
    }

    /// Paints `s` yellow, if color is enabled.
    pub fn warning(&self, s: &str) -> String {
        match self.color {
            true => colored::Colorize::yellow(s).to_string(),
            false => s.to_string(),
        }
    }
}
