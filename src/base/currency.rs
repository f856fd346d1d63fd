use crate::base;

/// How monetary amounts are presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    pub symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
}

impl Default for Currency {
    /// Brazilian real without grouping, e.g. `R$ 1234,56`.
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            thousands_separator: String::new(),
        }
    }
}

impl Currency {
    /// Formats `cents` with the symbol first, then the sign, e.g. `R$ -60,00`.
    /// An empty symbol yields the bare number.
    pub fn format(&self, cents: base::Cents) -> String {
        let abs = cents.0.unsigned_abs();
        let whole = (abs / 100).to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(c);
        }

        let mut s = String::new();
        if !self.symbol.is_empty() {
            s.push_str(&self.symbol);
            s.push(' ');
        }
        if cents.0 < 0 {
            s.push('-');
        }
        s.push_str(&grouped);
        s.push_str(&self.decimal_separator);
        s.push_str(&format!("{:02}", abs % 100));
        s
    }
}
