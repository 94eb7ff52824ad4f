// Portfolio renderer: structured resume mapping -> one standalone HTML document.
// Pure apart from reading the current year; see `render_portfolio_for_year`.

pub mod context;
pub mod template;

use chrono::{Datelike, Local};
use serde_json::Value;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::error;

use crate::render::context::PortfolioContext;
use crate::render::template::{PORTFOLIO_TEMPLATE, TEMPLATE_NAME};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::TemplateRender(e.to_string())
    }
}

/// Renders the portfolio stamped with the current local year.
pub fn render_portfolio(data: &Value) -> String {
    render_portfolio_for_year(data, Local::now().year())
}

/// Renders the portfolio with an explicit footer year. Same input, same output.
///
/// A rendering failure is logged and yields an empty string.
pub fn render_portfolio_for_year(data: &Value, year: i32) -> String {
    let context = PortfolioContext::from_mapping(data, year);
    match render_template(TEMPLATE_NAME, PORTFOLIO_TEMPLATE, &context) {
        Ok(html) => html,
        Err(e) => {
            error!("Portfolio rendering failed: {e}");
            String::new()
        }
    }
}

fn render_template(
    template_name: &str,
    template_content: &str,
    portfolio: &PortfolioContext<'_>,
) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(portfolio)?;
    Ok(tera.render(template_name, &context)?)
}
