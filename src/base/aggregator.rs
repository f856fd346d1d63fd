//! Period views over the record list: filtering by month, totals, expenses by
//! category, client search and newest-first ordering.
//!
//! Every function here is pure. Malformed data never raises an error: records
//! with unparseable dates are left out of period views and unparseable amounts
//! count as zero.

use crate::base;

/// Expense sums per category, in order of first appearance.
pub type CategorySums<'a> = base::Aggregate<&'a str, base::Cents>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: base::Cents,
    pub expense: base::Cents,
    pub balance: base::Cents,
    /// Number of income records, i.e. clients served.
    pub income_count: usize,
}

/// Keeps the records whose date parses and falls within `period`.
pub fn filter_by_period<'a, I>(records: I, period: base::Period) -> Vec<&'a base::Record>
where
    I: IntoIterator<Item = &'a base::Record>,
{
    records
        .into_iter()
        .filter(|r| match r.date() {
            Some(dt) => period.contains(dt),
            None => {
                tracing::trace!(
                    id = r.id(),
                    date = r.raw_date(),
                    "skipping record with invalid date"
                );
                false
            }
        })
        .collect()
}

pub fn compute_totals<'a, I>(records: I) -> Totals
where
    I: IntoIterator<Item = &'a base::Record>,
{
    let mut totals = records
        .into_iter()
        .fold(Totals::default(), |mut acc, r| {
            match r.kind() {
                base::Kind::Income => {
                    acc.income += r.amount();
                    acc.income_count += 1;
                }
                base::Kind::Expense => acc.expense += r.amount(),
            }
            acc
        });
    totals.balance = totals.income - totals.expense;
    totals
}

pub fn group_expenses_by_category<'a, I>(records: I) -> CategorySums<'a>
where
    I: IntoIterator<Item = &'a base::Record>,
{
    records
        .into_iter()
        .filter_map(|r| r.category().map(|c| (c, r.amount())))
        .collect()
}

/// Keeps the income records whose client or destination contains `term`,
/// ignoring case. Surrounding whitespace in `term` is significant, but a
/// blank term keeps every income record.
pub fn search_income<'a, I>(records: I, term: &str) -> Vec<&'a base::Record>
where
    I: IntoIterator<Item = &'a base::Record>,
{
    let keep_all = term.trim().is_empty();
    let term = term.to_lowercase();
    records
        .into_iter()
        .filter(|r| match r.trip() {
            Some((client, destination)) => {
                keep_all
                    || client.to_lowercase().contains(&term)
                    || destination.to_lowercase().contains(&term)
            }
            None => false,
        })
        .collect()
}

/// Newest first. Records sharing a date keep their relative order, and
/// records without a valid date go last.
pub fn sort_descending_by_date(mut records: Vec<&base::Record>) -> Vec<&base::Record> {
    records.sort_by_key(|r| std::cmp::Reverse(r.date()));
    records
}

/// Everything needed to present one period.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub period: base::Period,
    pub totals: Totals,
    pub categories: CategorySums<'a>,
    /// Income records matching the search term, newest first.
    pub incomes: Vec<&'a base::Record>,
    /// Expense records, newest first.
    pub expenses: Vec<&'a base::Record>,
}

impl<'a> Summary<'a> {
    pub fn new(rl: &'a base::Recordlist, period: base::Period, term: &str) -> Self {
        let filtered = filter_by_period(rl.iter(), period);
        let expenses = filtered
            .iter()
            .copied()
            .filter(|r| r.kind() == base::Kind::Expense)
            .collect();
        Self {
            period,
            totals: compute_totals(filtered.iter().copied()),
            categories: group_expenses_by_category(filtered.iter().copied()),
            incomes: sort_descending_by_date(search_income(filtered.iter().copied(), term)),
            expenses: sort_descending_by_date(expenses),
        }
    }
}
