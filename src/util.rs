use std::fmt::{self, Display};

const TRUNCATE_AT: usize = 497;

/// Truncate long SQL strings for logging and error messages purpose.
///
/// Yields at most 497 bytes from the start of the input, cut floored to a
/// character boundary, followed by `...` when truncation occurred.
#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        $crate::TruncatedSql::new(&$query)
    };
}

/// Display adapter behind [`truncate_long!`](crate::truncate_long).
pub struct TruncatedSql<'a> {
    sql: &'a str,
    cut: usize,
}

impl<'a> TruncatedSql<'a> {
    pub fn new(sql: &'a str) -> Self {
        let mut cut = TRUNCATE_AT.min(sql.len());
        while !sql.is_char_boundary(cut) {
            cut -= 1;
        }
        Self { sql, cut }
    }
}

impl Display for TruncatedSql<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.sql[..self.cut].trim(),
            if self.cut < self.sql.len() { "..." } else { "" },
        )
    }
}
