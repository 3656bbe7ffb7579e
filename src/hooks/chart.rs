use serde_json::Value;
use tracing::{debug, warn};

use crate::dom::{Element, attrs};
use crate::host::{ChartHandle, ChartSpec};

use super::{Hook, HookContext, json_attribute};

/// Binds a chart rendered by the injected engine to the element.
///
/// Attach constructs the chart from `data-chart-type`, `data-chart-data`, and
/// `data-chart-options` (structured attributes fail soft to empty objects).
/// Refresh replaces the chart's data in place when a new payload is present.
/// Detach releases the engine-side object. Without an injected engine or a
/// chart type attribute the hook does nothing.
#[derive(Default)]
pub struct ChartHook {
    chart: Option<Box<dyn ChartHandle>>,
}

impl ChartHook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }
}

impl<E: Element> Hook<E> for ChartHook {
    fn attach(&mut self, ctx: &mut HookContext<'_, E>) {
        let Some(kind) = ctx.element.attribute(attrs::CHART_TYPE) else {
            debug!("element carries no chart type, skipping chart construction");
            return;
        };
        let kind = kind.to_owned();
        let Some(factory) = ctx.services.chart_factory.as_mut() else {
            debug!("no charting engine injected, skipping chart construction");
            return;
        };
        let spec = ChartSpec {
            kind,
            data: json_attribute(ctx.element, attrs::CHART_DATA),
            options: json_attribute(ctx.element, attrs::CHART_OPTIONS),
        };
        self.chart = Some(factory.create(ctx.element, spec));
    }

    fn refresh(&mut self, ctx: &mut HookContext<'_, E>) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        let Some(raw) = ctx.element.attribute(attrs::CHART_DATA) else {
            return;
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(data) => {
                chart.set_data(data);
                chart.update();
            }
            Err(err) => {
                warn!(error = %err, "malformed chart data on refresh, keeping previous data");
            }
        }
    }

    fn detach(&mut self, _ctx: &mut HookContext<'_, E>) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }
}
