//! Chart hover state management.

use serde::{Deserialize, Serialize};

/// State related to hover feedback on the year chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    /// Election year under the cursor on the chart, if any
    hovered_chart_year: Option<i32>,
}

impl SelectionState {
    /// Creates a new selection state with nothing hovered.
    pub fn new() -> Self {
        Self { hovered_chart_year: None }
    }

    /// Returns the hovered chart year, if any.
    pub fn hovered_chart_year(&self) -> Option<i32> {
        self.hovered_chart_year
    }

    /// Sets the hovered chart year, or clears it with `None`.
    pub fn set_hovered_chart_year(&mut self, year: Option<i32>) {
        self.hovered_chart_year = year;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_set_and_clear() {
        let mut selection = SelectionState::new();
        assert_eq!(selection.hovered_chart_year(), None);
        selection.set_hovered_chart_year(Some(2008));
        assert_eq!(selection.hovered_chart_year(), Some(2008));
        selection.set_hovered_chart_year(None);
        assert_eq!(selection.hovered_chart_year(), None);
    }
}
