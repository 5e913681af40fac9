//! Minijinja-backed renderer for projector views.

use super::templates;
use crate::shipment::{
    domain::LifecycleStatus,
    services::{ActiveOrderRecord, DriverRecord, LaneStatus, SearchHit, SummaryReport},
};
use minijinja::{Environment, Value, context};
use serde::Serialize;
use thiserror::Error;

/// Timestamp layout of the report header.
const REPORT_TIMESTAMP: &str = "%d.%m.%Y %H:%M";

/// Errors raised while preparing or rendering templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A built-in template failed to compile.
    #[error("failed to load template '{template}': {reason}")]
    TemplateLoad {
        /// Template name.
        template: &'static str,
        /// Compiler message.
        reason: String,
    },

    /// A template failed while rendering.
    #[error("failed to render template '{template}': {reason}")]
    TemplateRender {
        /// Template name.
        template: &'static str,
        /// Renderer message.
        reason: String,
    },
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Serialize)]
struct StatusLegend {
    glyph: &'static str,
    status: LifecycleStatus,
    label: &'static str,
}

/// Turns presentation models into the text blocks sent to operators.
#[derive(Debug)]
pub struct ViewRenderer {
    environment: Environment<'static>,
}

impl ViewRenderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateLoad`] if a template does not compile.
    pub fn new() -> RenderResult<Self> {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        environment.set_lstrip_blocks(true);
        for (name, source) in templates::ALL {
            environment
                .add_template(name, source)
                .map_err(|error| RenderError::TemplateLoad {
                    template: name,
                    reason: error.to_string(),
                })?;
        }
        Ok(Self { environment })
    }

    /// Renders the summary report with its `dd.mm.YYYY HH:MM` header.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn summary_report(&self, report: &SummaryReport) -> RenderResult<String> {
        let generated_at = report.generated_at.format(REPORT_TIMESTAMP).to_string();
        self.render(
            templates::REPORT,
            context! { report => report, generated_at => generated_at },
        )
    }

    /// Renders the active orders listing, or the empty notice.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn active_orders(&self, orders: &[ActiveOrderRecord]) -> RenderResult<String> {
        if orders.is_empty() {
            return self.render(templates::ORDERS_EMPTY, context! {});
        }
        self.render(templates::ORDERS, context! { orders => orders })
    }

    /// Renders the drivers listing, or the empty notice.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn drivers_in_transit(&self, drivers: &[DriverRecord]) -> RenderResult<String> {
        if drivers.is_empty() {
            return self.render(templates::DRIVERS_EMPTY, context! {});
        }
        self.render(templates::DRIVERS, context! { drivers => drivers })
    }

    /// Renders lane counts.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn lane_status(&self, lanes: &LaneStatus) -> RenderResult<String> {
        self.render(templates::STATUS, context! { lanes => lanes })
    }

    /// Renders search hits under a header echoing `term`, or the not-found
    /// notice.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn search(&self, term: &str, hits: &[SearchHit]) -> RenderResult<String> {
        let echoed = term.trim();
        if hits.is_empty() {
            return self.render(templates::SEARCH_EMPTY, context! { term => echoed });
        }
        self.render(templates::SEARCH, context! { term => echoed, hits => hits })
    }

    /// Renders the greeting with the command list.
    ///
    /// Each command must serialise with `usage` and `description` fields.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn start<T: Serialize>(&self, commands: &[T]) -> RenderResult<String> {
        self.render(templates::START, context! { commands => commands })
    }

    /// Renders usage examples and the status legend.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when rendering fails.
    pub fn help(&self) -> RenderResult<String> {
        let statuses: Vec<StatusLegend> = LifecycleStatus::ALL
            .into_iter()
            .map(|status| StatusLegend {
                glyph: status.glyph(),
                status,
                label: status.description(),
            })
            .collect();
        self.render(templates::HELP, context! { statuses => statuses })
    }

    fn render(&self, template: &'static str, context: Value) -> RenderResult<String> {
        let rendered = self
            .environment
            .get_template(template)
            .and_then(|compiled| compiled.render(context))
            .map_err(|error| RenderError::TemplateRender {
                template,
                reason: error.to_string(),
            })?;
        Ok(rendered.trim_end().to_owned())
    }
}
