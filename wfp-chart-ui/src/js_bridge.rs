//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes nothing itself; callers hand it the JSON
//! produced by [`crate::chart_spec::ChartSpec`].

use wasm_bindgen::JsValue;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

fn report(context: &str, err: JsValue) {
    log::warn!("{context} failed: {err:?}");
}

/// Evaluate a JS expression inside try/catch and return its value.
///
/// `None` when the expression threw or evaluated to `undefined`.
pub fn call_js(expr: &str) -> Option<JsValue> {
    let wrapped = format!(
        "(function() {{ try {{ return ({expr}); }} \
         catch(e) {{ console.warn('WFP JS call failed:', e); }} }})()"
    );
    match js_sys::eval(&wrapped) {
        Ok(value) if value.is_undefined() => None,
        Ok(value) => Some(value),
        Err(err) => {
            report("call_js", err);
            None
        }
    }
}

/// Initialize chart scripts once D3 has loaded.
///
/// The chart files define `function` declarations. They are evaluated at
/// global scope through an indirect `eval` inside the polling callback and
/// then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, AREA_CHART_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__wfpChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    if let Err(err) = js_sys::eval(&store_js) {
        report("storing chart scripts", err);
        return;
    }

    let init_js = r#"
        (function() {
            if (window.__wfpChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wfpChartScripts);
                    delete window.__wfpChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__wfpChartsReady = true;
                    console.log('WFP charts initialized');
                }
            }, 100);
        })();
    "#;
    if let Err(err) = js_sys::eval(init_js) {
        report("init_charts", err);
    }
}

/// Poll until D3, the chart scripts and the container all exist, then call `render_fn`.
///
/// The container appears only after Dioxus has re-rendered the results
/// panel, so the call cannot be made synchronously. Returns the id of the
/// polling interval so a chart destroyed before it was drawn can cancel it.
fn render_when_ready(
    render_fn: &str,
    container_id: &str,
    data_json: &str,
    config_json: &str,
) -> Option<i32> {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    let timer = call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wfpChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[WFP] {render_fn} error:', e); }}
                }}
            }}, 100);
            return poll;
        }})()
        "#,
    ))?;
    timer.as_f64().map(|id| id as i32)
}

/// Render the composition pie chart. Returns the pending render timer.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) -> Option<i32> {
    render_when_ready("renderPieChart", container_id, data_json, config_json)
}

/// Render the filled line (area) chart.
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) -> Option<i32> {
    render_when_ready("renderAreaChart", container_id, data_json, config_json)
}

/// Render the comparison bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) -> Option<i32> {
    render_when_ready("renderBarChart", container_id, data_json, config_json)
}

fn container(container_id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
}

/// Whether an element with this id is currently in the document.
pub fn region_exists(container_id: &str) -> bool {
    container(container_id).is_some()
}

/// Destroy/clean up a chart in the given container.
///
/// Cancels the pending render first, if any, so a late poll cannot draw into
/// a region that has already been handed to another chart. A missing
/// container is not an error; the results panel may already have been
/// replaced by an error panel.
pub fn destroy_chart(container_id: &str, timer: Option<i32>) {
    if let (Some(timer), Some(window)) = (timer, web_sys::window()) {
        window.clear_interval_with_handle(timer);
    }
    match container(container_id) {
        Some(el) => el.set_inner_html(""),
        None => log::debug!("no container {container_id} to clear"),
    }
}
