/// Prefix that switches the palette from remote search to the command table.
pub const COMMAND_PREFIX: char = '>';

/// Shortest query that is sent to the search endpoint.
pub const MIN_SEARCH_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// `>` prefix; `filter` is the lower-cased remainder.
    Command { filter: String },
    /// Nothing typed: recents, or quick actions when there are none.
    Empty,
    /// A single character. Nothing is shown and no request is made.
    TooShort,
    Search { query: String },
}

impl QueryMode {
    #[must_use]
    pub fn is_command(&self) -> bool {
        matches!(self, QueryMode::Command { .. })
    }
}

#[must_use]
pub fn classify(query: &str) -> QueryMode {
    if let Some(rest) = query.strip_prefix(COMMAND_PREFIX) {
        return QueryMode::Command {
            filter: rest.to_lowercase(),
        };
    }

    match query.chars().count() {
        0 => QueryMode::Empty,
        n if n < MIN_SEARCH_LEN => QueryMode::TooShort,
        _ => QueryMode::Search {
            query: query.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_mode_iff_prefix() {
        for q in [">", ">the", ">> x", ">A"] {
            assert!(classify(q).is_command(), "{q:?} should be command mode");
        }
        for q in ["", "a", "ab", " >x", "x>", "the>"] {
            assert!(!classify(q).is_command(), "{q:?} should not be command mode");
        }
    }

    #[test]
    fn test_command_filter_is_lowercased() {
        assert_eq!(
            classify(">New ART"),
            QueryMode::Command {
                filter: "new art".to_string()
            }
        );
    }

    #[test]
    fn test_length_thresholds() {
        assert_eq!(classify(""), QueryMode::Empty);
        assert_eq!(classify("a"), QueryMode::TooShort);
        assert_eq!(classify("é"), QueryMode::TooShort);
        assert_eq!(
            classify("ab"),
            QueryMode::Search {
                query: "ab".to_string()
            }
        );
    }
}
