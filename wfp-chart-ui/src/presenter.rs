//! Reads the form, runs the calculator, and writes cards and charts back.

use crate::chart_spec::ChartSpec;
use crate::surface::{ChartHandle, ChartKind, DisplaySurface, ResultsView};
use wfp_calc::{calculate, FootprintError, FootprintInput, FootprintReport, InputField, Result};

/// The only message a user ever sees for a failed calculation.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Unable to calculate water footprint. Please check your inputs.";

/// Clamp a field value as it is typed: negative numbers become `"0"`.
///
/// Returns `None` when the value should be kept as typed (including text
/// that does not parse yet, such as `"-"` or `""`).
pub fn sanitize_field_value(raw: &str) -> Option<String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value < 0.0 => Some("0".to_string()),
        _ => None,
    }
}

/// Parse a single field's text into a finite, non-negative number.
pub fn parse_field(field: InputField, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(FootprintError::InvalidNumber {
            field: field.name(),
            value: raw.to_string(),
        }),
    }
}

/// At most one live chart per kind.
#[derive(Debug, Default)]
struct ChartSlots {
    pie: Option<ChartHandle>,
    line: Option<ChartHandle>,
    bar: Option<ChartHandle>,
}

impl ChartSlots {
    fn slot(&mut self, kind: ChartKind) -> &mut Option<ChartHandle> {
        match kind {
            ChartKind::Pie => &mut self.pie,
            ChartKind::Line => &mut self.line,
            ChartKind::Bar => &mut self.bar,
        }
    }

    fn len(&self) -> usize {
        [&self.pie, &self.line, &self.bar]
            .iter()
            .filter(|h| h.is_some())
            .count()
    }
}

/// Owns the display surface and the charts drawn on it.
///
/// Charts are released when the presenter is dropped.
pub struct Presenter<S: DisplaySurface> {
    surface: S,
    charts: ChartSlots,
}

impl<S: DisplaySurface> Presenter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            charts: ChartSlots::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of charts currently alive on the surface.
    pub fn active_charts(&self) -> usize {
        self.charts.len()
    }

    /// Read and validate all five fields.
    ///
    /// Stops at the first bad field, marking it invalid. No partial input is returned.
    pub fn collect_input(&mut self) -> Result<FootprintInput> {
        let mut input = FootprintInput::default();
        for field in InputField::ALL {
            let raw = self
                .surface
                .read_field(field)
                .ok_or(FootprintError::MissingField { field: field.name() })?;
            match parse_field(field, &raw) {
                Ok(value) => input.set(field, value),
                Err(err) => {
                    log::warn!("rejecting {field}: {raw:?}");
                    self.surface.mark_invalid(field);
                    return Err(err);
                }
            }
        }
        Ok(input)
    }

    /// Handle a click on Calculate.
    ///
    /// Every failure is logged in full and shown to the user as
    /// [`GENERIC_ERROR_MESSAGE`].
    pub fn run_calculation(&mut self) -> Option<FootprintReport> {
        self.surface.clear_invalid();
        match self.try_calculation() {
            Ok(report) => Some(report),
            Err(err) => {
                log::error!("Calculation error: {err}");
                if let FootprintError::DegenerateInput { .. } = err {
                    self.surface.mark_invalid(InputField::LandArea);
                }
                self.surface.show_error(GENERIC_ERROR_MESSAGE);
                None
            }
        }
    }

    fn try_calculation(&mut self) -> Result<FootprintReport> {
        let input = self.collect_input()?;
        let report = calculate(&input)?;
        self.render(&report);
        Ok(report)
    }

    /// Write the result cards, then replace all three charts.
    pub fn render(&mut self, report: &FootprintReport) {
        self.surface.show_results(ResultsView::from(report));
        self.release_charts();
        for kind in ChartKind::ALL {
            let spec = ChartSpec::for_components(kind, &report.components);
            self.draw_chart(&spec);
        }
    }

    /// Release the chart of this kind, if any, then draw the new one.
    fn draw_chart(&mut self, spec: &ChartSpec) {
        if let Some(old) = self.charts.slot(spec.kind).take() {
            self.surface.destroy_chart(old);
        }
        match self.surface.create_chart(spec) {
            Some(handle) => *self.charts.slot(spec.kind) = Some(handle),
            None => log::error!(
                "chart region {} not found for the {} chart",
                spec.region,
                spec.kind
            ),
        }
    }

    /// Destroy every live chart.
    pub fn release_charts(&mut self) {
        for kind in ChartKind::ALL {
            if let Some(handle) = self.charts.slot(kind).take() {
                self.surface.destroy_chart(handle);
            }
        }
    }
}

impl<S: DisplaySurface> Drop for Presenter<S> {
    fn drop(&mut self) {
        self.release_charts();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CardKind;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    /// What the test surface has been asked to do.
    #[derive(Debug, Default)]
    struct Recorded {
        invalid: BTreeSet<InputField>,
        results: Option<ResultsView>,
        error: Option<String>,
        live: BTreeMap<u64, (ChartKind, &'static str)>,
        created: u64,
        destroyed: u64,
        chart_values: Vec<Vec<f64>>,
    }

    struct TestSurface {
        fields: BTreeMap<InputField, String>,
        missing_regions: BTreeSet<&'static str>,
        log: Rc<RefCell<Recorded>>,
    }

    impl TestSurface {
        fn with_values(values: [(InputField, &str); 5]) -> Self {
            Self {
                fields: values.iter().map(|(f, v)| (*f, v.to_string())).collect(),
                missing_regions: BTreeSet::new(),
                log: Rc::new(RefCell::new(Recorded::default())),
            }
        }

        fn reference() -> Self {
            Self::with_values([
                (InputField::LandArea, "10"),
                (InputField::Precipitation, "800"),
                (InputField::Runoff, "200"),
                (InputField::Irrigation, "300"),
                (InputField::Fertilizer, "100"),
            ])
        }
    }

    impl DisplaySurface for TestSurface {
        fn read_field(&self, field: InputField) -> Option<String> {
            self.fields.get(&field).cloned()
        }

        fn mark_invalid(&mut self, field: InputField) {
            self.log.borrow_mut().invalid.insert(field);
        }

        fn clear_invalid(&mut self) {
            self.log.borrow_mut().invalid.clear();
        }

        fn show_results(&mut self, view: ResultsView) {
            let mut log = self.log.borrow_mut();
            log.results = Some(view);
            log.error = None;
        }

        fn show_error(&mut self, message: &str) {
            let mut log = self.log.borrow_mut();
            log.results = None;
            log.error = Some(message.to_string());
        }

        fn create_chart(&mut self, spec: &ChartSpec) -> Option<ChartHandle> {
            if self.missing_regions.contains(spec.region) {
                return None;
            }
            let mut log = self.log.borrow_mut();
            log.created += 1;
            let id = log.created;
            let stale = log.live.values().any(|(_, region)| *region == spec.region);
            assert!(!stale, "region {} still holds a chart", spec.region);
            log.live.insert(id, (spec.kind, spec.region));
            log.chart_values.push(spec.data.iter().map(|d| d.value).collect());
            Some(ChartHandle {
                id,
                kind: spec.kind,
                region: spec.region,
            })
        }

        fn destroy_chart(&mut self, handle: ChartHandle) {
            let mut log = self.log.borrow_mut();
            assert!(log.live.remove(&handle.id).is_some(), "double destroy of {handle:?}");
            log.destroyed += 1;
        }
    }

    #[test]
    fn test_reference_scenario_renders_cards_and_charts() {
        let surface = TestSurface::reference();
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);

        let report = presenter.run_calculation().unwrap();
        assert_eq!(report.components.total_water_footprint, 9650.0);

        let log = log.borrow();
        assert!(log.error.is_none());
        let cards = &log.results.as_ref().unwrap().cards;
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].kind, CardKind::Green);
        assert_eq!(cards[0].value, "600.00 mm");
        assert_eq!(cards[2].value, "65.00 mm");
        assert_eq!(cards[3].kind, CardKind::Total);
        assert_eq!(cards[3].value, "9650.00 mm");
        assert_eq!(cards[3].caption, "Excellent - Highly efficient water usage");
        assert_eq!(cards[3].background, Some("#27ae60"));

        assert_eq!(log.live.len(), 3);
        assert!(log.chart_values.iter().all(|v| v == &vec![600.0, 300.0, 65.0]));
    }

    #[test]
    fn test_repeated_calculation_replaces_charts() {
        let surface = TestSurface::reference();
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);

        presenter.run_calculation().unwrap();
        presenter.run_calculation().unwrap();
        presenter.run_calculation().unwrap();

        let log = log.borrow();
        assert_eq!(log.created, 9);
        assert_eq!(log.destroyed, 6);
        assert_eq!(log.live.len(), 3);
        assert_eq!(presenter.active_charts(), 3);
    }

    #[test]
    fn test_negative_input_is_rejected_before_calculation() {
        for field in InputField::ALL {
            let mut surface = TestSurface::reference();
            surface.fields.insert(field, "-1".to_string());
            let log = Rc::clone(&surface.log);
            let mut presenter = Presenter::new(surface);

            assert!(presenter.run_calculation().is_none());

            let log = log.borrow();
            assert_eq!(log.invalid, BTreeSet::from([field]));
            assert_eq!(log.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
            assert!(log.results.is_none());
            assert_eq!(log.created, 0);
        }
    }

    #[test]
    fn test_unparsable_input_marks_first_bad_field_only() {
        let mut surface = TestSurface::reference();
        surface.fields.insert(InputField::Precipitation, "lots".to_string());
        surface.fields.insert(InputField::Fertilizer, "".to_string());
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);

        assert_eq!(
            presenter.collect_input(),
            Err(FootprintError::InvalidNumber {
                field: "precipitation",
                value: "lots".to_string(),
            })
        );
        assert_eq!(log.borrow().invalid, BTreeSet::from([InputField::Precipitation]));
    }

    #[test]
    fn test_missing_field_shows_generic_error() {
        let mut surface = TestSurface::reference();
        surface.fields.remove(&InputField::Runoff);
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);

        assert_eq!(
            presenter.collect_input(),
            Err(FootprintError::MissingField { field: "runoff" })
        );
        assert!(presenter.run_calculation().is_none());
        assert_eq!(log.borrow().error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn test_zero_land_area_is_rejected() {
        let mut surface = TestSurface::reference();
        surface.fields.insert(InputField::LandArea, "0".to_string());
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);

        assert!(presenter.run_calculation().is_none());
        let log = log.borrow();
        assert_eq!(log.invalid, BTreeSet::from([InputField::LandArea]));
        assert_eq!(log.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(log.created, 0);
    }

    #[test]
    fn test_overflowing_total_renders_critical_without_marking_fields() {
        let mut surface = TestSurface::reference();
        surface.fields.insert(InputField::LandArea, "1e300".to_string());
        surface.fields.insert(InputField::Irrigation, "1e10".to_string());
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);

        let report = presenter.run_calculation().unwrap();
        assert_eq!(report.tier.color, "#c0392b");

        let log = log.borrow();
        assert!(log.invalid.is_empty());
        assert!(log.error.is_none());
        let total = &log.results.as_ref().unwrap().cards[3];
        assert!(total.caption.starts_with("Critical - "));
        assert_eq!(total.background, Some("#c0392b"));
    }

    #[test]
    fn test_error_after_success_keeps_previous_charts_owned() {
        let surface = TestSurface::reference();
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);
        presenter.run_calculation().unwrap();

        presenter
            .surface_mut()
            .fields
            .insert(InputField::Irrigation, "-3".to_string());
        assert!(presenter.run_calculation().is_none());
        assert_eq!(presenter.active_charts(), 3);

        drop(presenter);
        let log = log.borrow();
        assert!(log.live.is_empty());
        assert_eq!(log.destroyed, 3);
    }

    #[test]
    fn test_invalid_marks_cleared_on_next_run() {
        let mut surface = TestSurface::reference();
        surface.fields.insert(InputField::Runoff, "x".to_string());
        let log = Rc::clone(&surface.log);
        let mut presenter = Presenter::new(surface);
        assert!(presenter.run_calculation().is_none());

        presenter
            .surface_mut()
            .fields
            .insert(InputField::Runoff, "200".to_string());
        assert!(presenter.run_calculation().is_some());
        assert!(log.borrow().invalid.is_empty());
        assert!(log.borrow().error.is_none());
    }

    #[test]
    fn test_missing_region_skips_only_that_chart() {
        let mut surface = TestSurface::reference();
        surface.missing_regions.insert(ChartKind::Line.region_id());
        let mut presenter = Presenter::new(surface);

        presenter.run_calculation().unwrap();
        assert_eq!(presenter.active_charts(), 2);
    }

    #[test]
    fn test_whitespace_around_numbers_is_accepted() {
        assert_eq!(parse_field(InputField::Runoff, " 12.5 "), Ok(12.5));
        assert!(parse_field(InputField::Runoff, "inf").is_err());
        assert!(parse_field(InputField::Runoff, "NaN").is_err());
    }

    #[test]
    fn test_sanitize_field_value() {
        assert_eq!(sanitize_field_value("-5"), Some("0".to_string()));
        assert_eq!(sanitize_field_value("-0.1"), Some("0".to_string()));
        assert_eq!(sanitize_field_value("5"), None);
        assert_eq!(sanitize_field_value("-"), None);
        assert_eq!(sanitize_field_value(""), None);
    }
}
