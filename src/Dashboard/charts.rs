use crate::Ledger::reaction_ledger::ReactionTable;
use log::warn;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("No reactions to plot.")]
    Empty,
}

/// one bar chart: a bar per reaction, labelled by its reactants
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: &str, y_label: &str, bars: Vec<(String, f64)>) -> Self {
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            bars,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    /// Horizontal bars, the longest one is `width` characters.
    /// Negative values (reactions below 0 °C) are drawn as empty bars.
    pub fn render(&self, width: usize) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let max = self.max_value();
        let mut out = format!("{} ({})\n", self.title, self.y_label);
        for (label, value) in &self.bars {
            let len = if max > 0.0 && *value > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<lw$} | {} {}\n",
                label,
                "#".repeat(len),
                value,
                lw = label_width
            ));
        }
        out
    }
}

/// rate vs reactants and yield vs reactants
pub fn reaction_charts(table: &ReactionTable) -> Result<(BarChart, BarChart), ChartError> {
    if table.is_empty() {
        warn!("{}", ChartError::Empty);
        return Err(ChartError::Empty);
    }
    let rates = table
        .rows()
        .iter()
        .map(|row| (row.reactants.clone(), row.rate))
        .collect();
    let yields = table
        .rows()
        .iter()
        .map(|row| (row.reactants.clone(), row.yield_percent))
        .collect();
    Ok((
        BarChart::new("Reaction Rates", "mol/s", rates),
        BarChart::new("Reaction Yields", "% Yield", yields),
    ))
}
