use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::estimator::{EstimatorComparison, StudyReport};

/// `"<label>: <value>"`, the line format of the demo output.
pub fn labeled(label: &str, value: impl Display) -> String {
    format!("{label}: {value}")
}

fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn title(text: &str) -> Table {
    let mut title_table = table();
    title_table.add_row(vec![Cell::new(text).set_alignment(CellAlignment::Center)]);
    title_table
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| Cell::new(name).set_alignment(CellAlignment::Center))
        .collect()
}

fn number(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

impl EstimatorComparison {
    /// Population mean first, then one `"<method>: <mean>"` line per design.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(labeled("Population mean", format!("{:.2}", self.population_mean)))
            .chain(self.iter().map(|(method, mean)| labeled(method.label(), format!("{mean:.2}"))))
            .collect()
    }

    pub fn display(&self) -> String {
        let mut table = table();
        table.set_header(header(&["Estimator", "n", "Mean", "Sampling error (μ - x̄)"]));
        table.add_row(vec![
            Cell::new("Population (μ)").set_alignment(CellAlignment::Left),
            Cell::new(self.population_size).set_alignment(CellAlignment::Right),
            number(self.population_mean),
            Cell::new("").set_alignment(CellAlignment::Right),
        ]);
        for estimate in &self.estimates {
            table.add_row(vec![
                Cell::new(estimate.method.label()).set_alignment(CellAlignment::Left),
                Cell::new(estimate.sample.len()).set_alignment(CellAlignment::Right),
                number(estimate.mean),
                Cell::new(format!("{:+.2}", self.population_mean - estimate.mean))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        format!("{}\n{}", title("Sample means vs population mean"), table)
    }
}

impl Display for EstimatorComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl StudyReport {
    pub fn display(&self) -> String {
        let mut table = table();
        table.set_header(header(&["Design", "Mean of x̄", "Bias", "Variance", "MSE"]));
        for summary in &self.summaries {
            table.add_row(vec![
                Cell::new(summary.method.label()).set_alignment(CellAlignment::Left),
                number(summary.mean_estimate),
                Cell::new(format!("{:+.3}", summary.bias)).set_alignment(CellAlignment::Right),
                number(summary.variance),
                number(summary.mse),
            ]);
        }

        let heading = format!(
            "{} replications, n = {}, μ = {:.2}",
            self.replications, self.sample_size, self.population_mean
        );
        format!("{}\n{}", title(&heading), table)
    }
}

impl Display for StudyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
