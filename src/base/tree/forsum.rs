use crate::base;

/// Totals of one period, followed by its expenses by category.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub currency: base::Currency,
    pub period: base::Period,
    pub rl: base::Recordlist,
}

enum Paint {
    None,
    Sign(base::Cents),
}

impl Config {
    const INCOME: &str = "Income";
    const EXPENSES: &str = "Expenses";
    const BALANCE: &str = "Balance";
    const CLIENTS: &str = "Clients served";
    const BY_CATEGORY: &str = "Expenses by category";

    pub fn to_tree(&self) -> base::Tree<'_> {
        let summary = base::Summary::new(&self.rl, self.period, "");
        let totals = summary.totals;
        let totv = vec![
            (Self::INCOME, self.currency.format(totals.income), Paint::None),
            (Self::EXPENSES, self.currency.format(totals.expense), Paint::None),
            (
                Self::BALANCE,
                self.currency.format(totals.balance),
                Paint::Sign(totals.balance),
            ),
            (Self::CLIENTS, totals.income_count.to_string(), Paint::None),
        ];
        let catv = summary
            .categories
            .iter()
            .map(|(label, amount)| (label, self.currency.format(amount), Paint::None))
            .collect::<Vec<_>>();

        let alignment_charlen = totv
            .iter()
            .chain(catv.iter())
            .map(|(label, value, _)| {
                base::util::charlen(label)
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + base::util::charlen(value)
            })
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        self.add_vec_to_tree(&mut root, self.period.label(), totv, alignment_charlen);
        if !summary.categories.is_empty() {
            self.add_vec_to_tree(
                &mut root,
                Self::BY_CATEGORY.to_string(),
                catv,
                alignment_charlen,
            );
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }

    fn leaf_data(
        &self,
        label: &str,
        value: &str,
        paint: &Paint,
        alignment_charlen: usize,
    ) -> String {
        let dash_count = alignment_charlen
            - base::util::charlen(label)
            - base::util::BOUNDING_SPACES_COUNT
            - base::util::charlen(value);
        let mut s = String::with_capacity(alignment_charlen);
        s.push_str(label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        match paint {
            Paint::Sign(c) if c.0 < 0 => s.push_str(&self.charset.negative(value)),
            Paint::Sign(_) => s.push_str(&self.charset.positive(value)),
            Paint::None => s.push_str(value),
        }
        s
    }

    fn add_vec_to_tree(
        &self,
        root: &mut base::tree::Node,
        name: String,
        v: Vec<(&str, String, Paint)>,
        alignment_charlen: usize,
    ) {
        let node = root.push(name.into());
        for (label, value, paint) in v {
            let data = self.leaf_data(label, &value, &paint, alignment_charlen);
            node.push(data.into());
        }
    }
}
