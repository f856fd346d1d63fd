use crate::base;

/// Everything known about one period, in a single printable document.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub sum: base::tree::forsum::Config,
    pub chart: base::barchart::Config,
    pub view: base::table::forview::Config,
}

pub struct Report<'a> {
    title: String,
    rule: String,
    tree: base::Tree<'a>,
    chart: Option<base::Barchart>,
    view: base::table::forview::View<'a>,
}

impl Config {
    pub const NO_RECORDS: &str = "No records for this period.";

    pub fn to_report(&self) -> Report<'_> {
        let title = format!("Driver report: {}", self.sum.period.label());
        let rule = self
            .sum
            .charset
            .table_rule
            .to_string()
            .repeat(base::util::charlen(&title));
        Report {
            title,
            rule,
            tree: self.sum.to_tree(),
            chart: (!self.chart.is_empty()).then(|| self.chart.to_barchart()),
            view: self.view.to_view(),
        }
    }
}

impl std::fmt::Display for Report<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.rule)?;
        writeln!(f)?;
        write!(f, "{}", self.tree)?;
        writeln!(f)?;
        match &self.chart {
            Some(chart) => write!(f, "{}", chart)?,
            None => writeln!(f, "{}", Config::NO_RECORDS)?,
        }
        writeln!(f)?;
        write!(f, "{}", self.view)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn config(rl: &str, period: &str, term: &str) -> Config {
        let rl = rl.parse::<base::Recordlist>().unwrap();
        let period = period.parse::<base::Period>().unwrap();
        Config {
            sum: base::tree::forsum::Config {
                charset: Default::default(),
                currency: Default::default(),
                period,
                rl: rl.clone(),
            },
            chart: base::barchart::Config {
                charset: Default::default(),
                currency: Default::default(),
                period,
                term_width: 60,
                rl: rl.clone(),
            },
            view: base::table::forview::Config {
                charset: Default::default(),
                currency: Default::default(),
                period: Some(period),
                term: term.to_string(),
                sections: Default::default(),
                marker: None,
                rl,
            },
        }
    }

    #[test]
    fn test_report() {
        let config = config(
            r#"
                {"id":1,"date":"2024-03-05","amount":10000,"kind":"income","client":"Ana","destination":"Airport"}
                {"id":2,"date":"2024-03-10","amount":4000,"kind":"expense","category":"Fuel"}
                {"id":3,"date":"2024-04-01","amount":2000,"kind":"income","client":"Pedro","destination":"Centro"}
            "#,
            "2024-03",
            "",
        );
        assert_eq!(
            config.to_report().to_string(),
            indoc!(
                "
                Driver report: March 2024
                =========================

                March 2024
                |-- Income --- R$ 100,00
                |-- Expenses -- R$ 40,00
                |-- Balance --- R$ 60,00
                `-- Clients served --- 1
                Expenses by category
                `-- Fuel ------ R$ 40,00

                Gross income |++++++++++++++++++++++++++++++++++++ R$ 100,00
                Fuel         |-------------- R$ 40,00

                Income (March 2024)
                ID  Client  Destination     Amount  Date
                ==  ======  ===========  =========  ==========
                1   Ana     Airport      R$ 100,00  2024-03-05

                Expenses (March 2024)
                ID  Category  Description         Amount  Date
                ==  ========  ================  ========  ==========
                2   Fuel      (no description)  R$ 40,00  2024-03-10
                "
            )
        );
    }

    #[test]
    fn test_empty_period() {
        let config = config("", "2024-05", "");
        let s = config.to_report().to_string();
        assert!(s.starts_with("Driver report: May 2024\n"), "{}", s);
        assert!(s.contains(&format!("\n{}\n", Config::NO_RECORDS)), "{}", s);
        assert!(s.ends_with("No expenses found for this period.\n"), "{}", s);
    }
}
