use crate::base;

/// Which tables to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sections {
    #[default]
    Both,
    Income,
    Expenses,
}

/// Row annotation for records about to be, or just, removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    WouldBeRemoved,
    Removed,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub currency: base::Currency,
    /// If `None`, every record in `rl` is shown and empty tables are skipped.
    pub period: Option<base::Period>,
    /// Filters income rows by client or destination.
    pub term: String,
    pub sections: Sections,
    pub marker: Option<Marker>,
    pub rl: base::Recordlist,
}

pub struct View<'a> {
    sections: Vec<Section<'a>>,
}

struct Section<'a> {
    title: String,
    body: Result<base::Table<'a>, String>,
}

impl Config {
    const INCOME_HEADER: [&str; 5] = ["ID", "Client", "Destination", "Amount", "Date"];
    const EXPENSE_HEADER: [&str; 5] = ["ID", "Category", "Description", "Amount", "Date"];
    const AMOUNT_COL: usize = 3;
    const NO_DESCRIPTION: &str = "(no description)";

    pub fn to_view(&self) -> View<'_> {
        let (incomes, expenses) = match self.period {
            Some(period) => {
                let summary = base::Summary::new(&self.rl, period, &self.term);
                (summary.incomes, summary.expenses)
            }
            None => (
                base::aggregator::sort_descending_by_date(base::aggregator::search_income(
                    self.rl.iter(),
                    &self.term,
                )),
                base::aggregator::sort_descending_by_date(
                    self.rl
                        .iter()
                        .filter(|r| r.kind() == base::Kind::Expense)
                        .collect(),
                ),
            ),
        };
        let mut sections = Vec::new();

        if self.sections != Sections::Expenses {
            let mut table = self.table(&Self::INCOME_HEADER, base::table::Paint::Positive);
            for r in incomes.iter() {
                let (client, destination) = r.trip().unwrap_or_default();
                self.add_row(&mut table, r, client, destination);
            }
            let empty = if self.term.trim().is_empty() {
                "No income found"
            } else {
                "No income found matching the search"
            };
            self.push_section(&mut sections, "Income", table, !incomes.is_empty(), empty);
        }

        if self.sections != Sections::Income {
            let mut table = self.table(&Self::EXPENSE_HEADER, base::table::Paint::Negative);
            for r in expenses.iter() {
                let category = r.category().unwrap_or_default();
                let description = r.description().unwrap_or(Self::NO_DESCRIPTION);
                self.add_row(&mut table, r, category, description);
            }
            self.push_section(
                &mut sections,
                "Expenses",
                table,
                !expenses.is_empty(),
                "No expenses found",
            );
        }

        View { sections }
    }

    fn table(&self, header: &[&'static str], paint: base::table::Paint) -> base::Table<'_> {
        let mut table = base::Table::new(&self.charset, header.to_vec());
        table.right_align(Self::AMOUNT_COL);
        table.paint(Self::AMOUNT_COL, paint);
        table
    }

    fn add_row(&self, table: &mut base::Table, r: &base::Record, col1: &str, col2: &str) {
        let suffix = match self.marker {
            Some(Marker::WouldBeRemoved) => self.charset.warning(" <- [WOULD BE REMOVED]"),
            Some(Marker::Removed) => self.charset.negative(" <- [REMOVED]"),
            None => String::new(),
        };
        table.add_row(
            vec![
                r.id().to_string(),
                col1.to_string(),
                col2.to_string(),
                self.currency.format(r.amount()),
                r.raw_date().to_string(),
            ],
            suffix,
        );
    }

    fn push_section<'a>(
        &self,
        sections: &mut Vec<Section<'a>>,
        name: &str,
        table: base::Table<'a>,
        has_rows: bool,
        empty: &str,
    ) {
        match (self.period, has_rows) {
            (_, true) => sections.push(Section {
                title: self.title(name),
                body: Ok(table),
            }),
            (Some(_), false) => sections.push(Section {
                title: self.title(name),
                body: Err(format!("{} for this period.", empty)),
            }),
            (None, false) => {}
        }
    }

    fn title(&self, name: &str) -> String {
        match self.period {
            Some(period) => format!("{} ({})", name, period.label()),
            None => name.to_string(),
        }
    }
}

impl std::fmt::Display for View<'_> {
    /// Writes a terminating newline, unless there is nothing to show.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            match &section.body {
                Ok(table) => write!(f, "{}", table)?,
                Err(msg) => writeln!(f, "{}", msg)?,
            }
        }
        Ok(())
    }
}
