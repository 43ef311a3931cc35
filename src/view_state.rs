//! Main panel selection.

/// What the area below the add form shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Error(String),
    List,
}

impl Panel {
    /// Loading wins over an error; the list only shows when neither applies
    pub fn select(loading: bool, error: Option<&str>) -> Self {
        match (loading, error) {
            (true, _) => Panel::Loading,
            (false, Some(msg)) => Panel::Error(msg.to_string()),
            (false, None) => Panel::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_shows_list() {
        assert_eq!(Panel::select(false, None), Panel::List);
    }

    #[test]
    fn test_loading_hides_error() {
        assert_eq!(Panel::select(true, None), Panel::Loading);
        assert_eq!(Panel::select(true, Some("Failed to fetch todos")), Panel::Loading);
    }

    #[test]
    fn test_error_when_idle() {
        assert_eq!(
            Panel::select(false, Some("Failed to fetch todos")),
            Panel::Error("Failed to fetch todos".to_string())
        );
    }
}
