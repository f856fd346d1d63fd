pub mod forview;

use crate::base;

/// Column-aligned text grid with a header row and a rule beneath it.
pub struct Table<'a> {
    charset: &'a base::Charset,
    header: Vec<&'static str>,
    right_aligned: Vec<bool>,
    paint: Vec<Option<Paint>>,
    rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Positive,
    Negative,
}

struct Row {
    cells: Vec<String>,
    suffix: String,
}

impl<'a> Table<'a> {
    pub fn new(charset: &'a base::Charset, header: Vec<&'static str>) -> Self {
        let n = header.len();
        Self {
            charset,
            header,
            right_aligned: vec![false; n],
            paint: vec![None; n],
            rows: Vec::new(),
        }
    }

    pub fn right_align(&mut self, col: usize) {
        self.right_aligned[col] = true;
    }

    pub fn paint(&mut self, col: usize, paint: Paint) {
        self.paint[col] = Some(paint);
    }

    /// `suffix` is written verbatim after the last cell.
    pub fn add_row(&mut self, cells: Vec<String>, suffix: String) {
        debug_assert_eq!(cells.len(), self.header.len());
        self.rows.push(Row { cells, suffix });
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = self
            .header
            .iter()
            .map(|h| base::util::charlen(h))
            .collect::<Vec<_>>();
        for row in self.rows.iter() {
            for (w, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *w = (*w).max(base::util::charlen(cell));
            }
        }
        widths
    }

    fn write_line<S>(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        widths: &[usize],
        cells: &[S],
        painted: bool,
    ) -> std::fmt::Result
    where
        S: AsRef<str>,
    {
        let last = cells.len().saturating_sub(1);
        for (i, cell) in cells.iter().enumerate() {
            let cell = cell.as_ref();
            let pad = widths[i] - base::util::charlen(cell);
            let cell = match (painted, self.paint[i]) {
                (true, Some(Paint::Positive)) => self.charset.positive(cell),
                (true, Some(Paint::Negative)) => self.charset.negative(cell),
                _ => cell.to_string(),
            };
            if i > 0 {
                f.write_str(base::util::COLUMN_GAP)?;
            }
            if self.right_aligned[i] {
                write!(f, "{}{}", " ".repeat(pad), cell)?;
            } else if i < last {
                write!(f, "{}{}", cell, " ".repeat(pad))?;
            } else {
                f.write_str(&cell)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        self.write_line(f, &widths, &self.header, false)?;
        writeln!(f)?;
        let rules = widths
            .iter()
            .map(|&w| self.charset.table_rule.to_string().repeat(w))
            .collect::<Vec<_>>();
        self.write_line(f, &widths, &rules, false)?;
        writeln!(f)?;
        for row in self.rows.iter() {
            self.write_line(f, &widths, &row.cells, true)?;
            writeln!(f, "{}", row.suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_to_string() {
        let charset = base::Charset::default();
        let mut table = Table::new(&charset, vec!["ID", "Name", "Amount", "Date"]);
        assert_eq!(
            table.to_string(),
            indoc!(
                "
                ID  Name  Amount  Date
                ==  ====  ======  ====
                "
            )
        );

        table.right_align(2);
        table.paint(2, Paint::Positive);
        table.add_row(
            vec![
                "1".to_string(),
                "Ana Silva".to_string(),
                "R$ 100,00".to_string(),
                "2024-03-05".to_string(),
            ],
            String::new(),
        );
        table.add_row(
            vec![
                "12".to_string(),
                "Bia".to_string(),
                "R$ 5,00".to_string(),
                "2024-03-01".to_string(),
            ],
            " <- note".to_string(),
        );
        assert_eq!(
            table.to_string(),
            indoc!(
                "
                ID  Name          Amount  Date
                ==  =========  =========  ==========
                1   Ana Silva  R$ 100,00  2024-03-05
                12  Bia          R$ 5,00  2024-03-01 <- note
                "
            )
        );
    }
}
