//! Text rendering of result lists and dimension choices.
//!
//! Templates are minijinja. Two filters are registered on top of the
//! builtins:
//!
//! - `money`: formats a number as `$<amount>` with two decimals
//! - `style(name)`: applies the named console style (`name`, `label`,
//!   `empty`) when the render is styled, and passes the text through
//!   otherwise
//!
//! Structured output modes skip templates and go through
//! [`vitrine_dispatch::serialize_results`].

use console::Style;
use minijinja::{context, Environment, State, Value};
use thiserror::Error;
use tracing::debug;
use vitrine_dispatch::{
    serialize_dimensions, serialize_results, OutputMode, SerializeError, TextMode,
};
use vitrine_seeker::{DimensionUniverse, Item};

const RESULTS_TEMPLATE: &str = "results";
const DIMENSIONS_TEMPLATE: &str = "dimensions";

/// Errors raised while producing output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Renders results and dimensions to strings.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the built-in templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);

        env.add_template(RESULTS_TEMPLATE, include_str!("templates/results.jinja"))?;
        env.add_template(
            DIMENSIONS_TEMPLATE,
            include_str!("templates/dimensions.jinja"),
        )?;
        Ok(Renderer { env })
    }

    /// Creates a renderer whose result list uses `source` as its template.
    ///
    /// The template sees `items` (the result list) and `styled`. Syntax
    /// errors are reported here rather than at render time.
    pub fn with_template(source: impl Into<String>) -> Result<Self, RenderError> {
        let mut renderer = Self::new()?;
        renderer
            .env
            .add_template_owned(RESULTS_TEMPLATE, source.into())?;
        Ok(renderer)
    }

    /// Renders a result list as text.
    pub fn render_results(&self, items: &[Item], mode: TextMode) -> Result<String, RenderError> {
        let template = self.env.get_template(RESULTS_TEMPLATE)?;
        let output = template.render(context! {
            items => items,
            styled => is_styled(mode),
        })?;
        Ok(output.trim_end().to_string())
    }

    /// Renders the category and brand choices as text.
    pub fn render_dimensions(
        &self,
        universe: &DimensionUniverse,
        mode: TextMode,
    ) -> Result<String, RenderError> {
        let template = self.env.get_template(DIMENSIONS_TEMPLATE)?;
        let output = template.render(context! {
            categories => &universe.categories,
            brands => &universe.brands,
            styled => is_styled(mode),
        })?;
        Ok(output.trim_end().to_string())
    }

    /// Renders a result list in any output mode.
    pub fn render_output(&self, items: &[Item], mode: OutputMode) -> Result<String, RenderError> {
        match mode.to_text_mode() {
            Some(text_mode) => {
                debug!(mode = %mode, ?text_mode, items = items.len(), "rendering template");
                self.render_results(items, text_mode)
            }
            None => {
                debug!(mode = %mode, items = items.len(), "serializing results");
                Ok(serialize_results(items, mode)?.trim_end().to_string())
            }
        }
    }

    /// Renders the dimensions view in any output mode.
    pub fn render_dimensions_output(
        &self,
        universe: &DimensionUniverse,
        mode: OutputMode,
    ) -> Result<String, RenderError> {
        match mode.to_text_mode() {
            Some(text_mode) => self.render_dimensions(universe, text_mode),
            None => Ok(serialize_dimensions(universe, mode)?.trim_end().to_string()),
        }
    }
}

fn is_styled(mode: TextMode) -> bool {
    matches!(mode, TextMode::Styled)
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("money", |value: f64| -> String { format!("${}", two_decimals(value)) });

    // Reads the `styled` flag from the render context.
    env.add_filter(
        "style",
        |state: &State, value: Value, name: String| -> String {
            let text = value.to_string();
            let styled = state.lookup("styled").is_some_and(|v| v.is_true());
            match (styled, style_for(&name)) {
                (true, Some(style)) => style.apply_to(text).to_string(),
                _ => text,
            }
        },
    );
}

/// Formats with two decimals the way JavaScript's `toFixed(2)` does.
///
/// `{:.2}` already rounds the exact binary value correctly. The one
/// difference is an exact half cent, which `toFixed` rounds away from zero
/// and `{:.2}` rounds to even. A value is an exact half cent when it is an
/// odd number of eighths.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    let half_cent = eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0;
    if !half_cent || value.abs() >= 1e13 {
        return format!("{:.2}", value);
    }

    let cents = (value.abs() * 100.0 + 0.5).floor() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

fn style_for(name: &str) -> Option<Style> {
    let style = match name {
        "name" => Style::new().bold(),
        "label" => Style::new().dim(),
        "empty" => Style::new().yellow(),
        _ => return None,
    };
    Some(style.force_styling(true))
}
