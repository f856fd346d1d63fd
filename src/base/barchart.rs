use crate::base;

/// Horizontal bars comparing a period's gross income with each of its expense
/// categories.
pub struct Barchart {
    charset: base::Charset,
    bars: Vec<Bar>,
    label_charlen: usize,
    max_abs_val: base::Cents,
    max_barlen: usize,
}

struct Bar {
    label: String,
    kind: base::Kind,
    val: base::Cents,
    val_string: String,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub currency: base::Currency,
    pub period: base::Period,
    pub term_width: usize,
    pub rl: base::Recordlist,
}

impl Config {
    const GROSS_INCOME: &str = "Gross income";

    /// Whether the period has anything to plot.
    pub fn is_empty(&self) -> bool {
        base::aggregator::filter_by_period(self.rl.iter(), self.period).is_empty()
    }

    pub fn to_barchart(&self) -> Barchart {
        let summary = base::Summary::new(&self.rl, self.period, "");
        let bar = |label: &str, kind, val| Bar {
            label: label.to_string(),
            kind,
            val,
            val_string: self.currency.format(val),
        };
        let mut bars = vec![bar(
            Self::GROSS_INCOME,
            base::Kind::Income,
            summary.totals.income,
        )];
        bars.extend(
            summary
                .categories
                .iter()
                .map(|(category, val)| bar(category, base::Kind::Expense, val)),
        );

        let label_charlen = bars
            .iter()
            .map(|b| base::util::charlen(&b.label))
            .max()
            .unwrap_or_default();
        let val_charlen = bars
            .iter()
            .map(|b| base::util::charlen(&b.val_string))
            .max()
            .unwrap_or_default();
        let max_abs_val = bars.iter().map(|b| b.val.abs()).max().unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(base::util::BOUNDING_SPACES_COUNT)
            .saturating_sub(1) // vertical divider just before bar
            .saturating_sub(val_charlen);

        Barchart {
            charset: self.charset.clone(),
            bars,
            label_charlen,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, val: base::Cents) -> usize {
        if self.max_abs_val == base::Cents::ZERO {
            return 0;
        }
        let x = (val.abs().0 as f64) / (self.max_abs_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, bar: &Bar) -> std::fmt::Result {
        let pad = self.label_charlen - base::util::charlen(&bar.label);
        write!(
            w,
            "{}{} {}",
            bar.label,
            " ".repeat(pad),
            self.charset.chart_axis
        )?;
        let barlen = self.barlen(bar.val);
        if barlen > 0 {
            let bars = match bar.kind {
                base::Kind::Income => self
                    .charset
                    .positive(&self.charset.chart_bar_income.to_string().repeat(barlen)),
                base::Kind::Expense => self
                    .charset
                    .negative(&self.charset.chart_bar_expense.to_string().repeat(barlen)),
            };
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", bar.val_string)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bar in self.bars.iter() {
            self.draw(f, bar)?;
        }
        Ok(())
    }
}
