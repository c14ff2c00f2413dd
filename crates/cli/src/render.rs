//! Table and JSON output.

use clap::ValueEnum;
use serde::Serialize;

use bolzano_solvers::{
    RunResult, Status, bisection, precondition::BolzanoReport, rounding::to_fixed, secant,
};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// A finished run together with the inputs that produced it.
#[derive(Debug, Serialize)]
pub struct Report<'a, C, R> {
    pub function: &'a str,
    pub method: &'static str,
    pub config: &'a C,
    #[serde(flatten)]
    pub result: &'a RunResult<R>,
}

/// Serializes `value` as pretty-printed JSON.
pub fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders a bisection run as an iteration table followed by a summary.
pub fn bisection_table(run: &RunResult<bisection::Record>, decimals: u32) -> String {
    let fixed = |value: f64| to_fixed(value, decimals);

    let mut table = Table::new(["i", "xi", "xs", "xr", "f(xi)", "f(xs)", "f(xr)", "error", ""]);
    for record in &run.iterations {
        table.push([
            record.iteration.to_string(),
            fixed(record.xi),
            fixed(record.xs),
            fixed(record.xr),
            fixed(record.fxi),
            fixed(record.fxs),
            fixed(record.fxr),
            error_cell(record.error),
            root_cell(record.is_root),
        ]);
    }

    let mut out = table.render();
    out.push_str(&summary(run, decimals));
    out
}

/// Renders a secant run as an iteration table followed by a summary.
pub fn secant_table(run: &RunResult<secant::Record>, decimals: u32) -> String {
    let fixed = |value: f64| to_fixed(value, decimals);

    let mut table = Table::new([
        "i", "x(i-1)", "x(i)", "x(i+1)", "f(x(i-1))", "f(x(i))", "f(x(i+1))", "error", "",
    ]);
    for record in &run.iterations {
        table.push([
            record.iteration.to_string(),
            fixed(record.x_prev),
            fixed(record.x_curr),
            fixed(record.x_next),
            fixed(record.f_prev),
            fixed(record.f_curr),
            record.f_next.map_or_else(|| "-".to_owned(), fixed),
            error_cell(record.error),
            root_cell(record.is_root),
        ]);
    }

    let mut out = table.render();
    out.push_str(&summary(run, decimals));
    out
}

/// Renders the outcome of a Bolzano check.
pub fn bolzano(report: &BolzanoReport, decimals: u32) -> String {
    let (a, b) = (to_fixed(report.a, decimals), to_fixed(report.b, decimals));
    let verdict = if report.satisfied {
        format!("f changes sign on [{a}, {b}]: a root lies inside")
    } else {
        format!("f does not change sign on [{a}, {b}]: no root is guaranteed")
    };
    format!(
        "f({a}) = {}\nf({b}) = {}\n{verdict}\n",
        to_fixed(report.fa, decimals),
        to_fixed(report.fb, decimals),
    )
}

fn summary<R>(run: &RunResult<R>, decimals: u32) -> String {
    let status = match run.status {
        Status::Converged => "converged",
        Status::MaxIters => "iteration limit reached",
        Status::StoppedByObserver => "stopped early",
    };
    format!(
        "\nroot ≈ {}  f(root) = {}  ({status} after {} iterations)\n",
        to_fixed(run.root, decimals),
        run.f_root
            .map_or_else(|| "undefined".to_owned(), |fx| to_fixed(fx, decimals)),
        run.iters()
    )
}

fn error_cell(error: Option<f64>) -> String {
    error.map_or_else(|| "-".to_owned(), |error| format!("{error:.4e}"))
}

fn root_cell(is_root: bool) -> String {
    if is_root { "root".to_owned() } else { String::new() }
}

/// Right-aligned columns separated by two spaces.
struct Table<const N: usize> {
    header: [String; N],
    rows: Vec<[String; N]>,
}

impl<const N: usize> Table<N> {
    fn new(header: [&str; N]) -> Self {
        Self {
            header: header.map(str::to_owned),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: [String; N]) {
        self.rows.push(row);
    }

    fn render(&self) -> String {
        let mut widths = [0; N];
        for row in std::iter::once(&self.header).chain(&self.rows) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&self.header).chain(&self.rows) {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
