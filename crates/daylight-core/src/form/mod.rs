pub mod dialog;

pub use dialog::{DialogState, SettingsDialog};

use crate::error::FormError;
use crate::host::{Level, UnitConverter};
use crate::settings::{ExecutionMode, SettingsRecord, Transmission};

/// Largest difference, in millimetres, at which a level still matches a stored elevation.
pub const ELEVATION_TOLERANCE: f64 = 0.001;

/// Editable field values of the settings form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    /// Levels offered by the host, read once when the form is populated.
    pub levels: Vec<Level>,
    /// Index into `levels`.
    pub selected_level: Option<usize>,
    pub multilayer_wall: bool,
    /// Raw text of the transmission field; validated on submit.
    pub transmission_text: String,
    pub execution_mode: ExecutionMode,
    pub write_results: bool,
}

impl FormState {
    /// Fill the form from a persisted record and the live level list.
    pub fn populate(levels: Vec<Level>, record: &SettingsRecord, converter: &dyn UnitConverter) -> Self {
        let selected_level = select_level(&levels, record.level_elevation, converter);

        Self {
            levels,
            selected_level,
            multilayer_wall: record.multilayer_wall,
            transmission_text: record.transmission_value.to_string(),
            execution_mode: record.execution_mode,
            write_results: record.write_results,
        }
    }

    pub fn selected(&self) -> Option<&Level> {
        self.selected_level.and_then(|i| self.levels.get(i))
    }

    pub fn execution_mode_index(&self) -> usize {
        self.execution_mode.index()
    }

    pub fn set_execution_mode_index(&mut self, index: usize) {
        self.execution_mode = ExecutionMode::from_index(index);
    }

    /// Snapshot the fields for submission. Fails when no level is selected.
    pub fn collect(&self) -> Result<UiData, FormError> {
        let selected_level = self.selected().cloned().ok_or(FormError::MissingLevel)?;

        Ok(UiData {
            multilayer_wall: self.multilayer_wall,
            transmission_text: self.transmission_text.clone(),
            execution_mode: self.execution_mode,
            write_results: self.write_results,
            selected_level,
        })
    }
}

/// Field values captured at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct UiData {
    pub multilayer_wall: bool,
    pub transmission_text: String,
    pub execution_mode: ExecutionMode,
    pub write_results: bool,
    pub selected_level: Level,
}

impl UiData {
    pub fn validate(self) -> Result<ValidatedForm, FormError> {
        let transmission_value = parse_transmission(&self.transmission_text)?;
        Ok(ValidatedForm { data: self, transmission_value })
    }
}

/// Submission whose transmission text parsed to a value in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub data: UiData,
    pub transmission_value: Transmission,
}

impl ValidatedForm {
    /// Assemble the record, storing the level elevation as whole millimetres.
    pub fn to_record(&self, converter: &dyn UnitConverter) -> SettingsRecord {
        let elevation_mm = converter.elevation_to_millimetres(self.data.selected_level.elevation).round();

        SettingsRecord {
            execution_mode: self.data.execution_mode,
            level_elevation: Some(elevation_mm),
            multilayer_wall: self.data.multilayer_wall,
            transmission_value: self.transmission_value,
            write_results: self.data.write_results,
        }
    }
}

/// Parse the transmission field as an integer percentage.
pub fn parse_transmission(raw: &str) -> Result<Transmission, FormError> {
    let invalid = |reason: String| FormError::InvalidTransmission { raw: raw.to_string(), reason };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(format!("not an integer: {}", e)))?;

    Transmission::new(value).map_err(|e| invalid(e.to_string()))
}

/// Pick the level whose elevation matches `stored_mm`, else the first level.
///
/// An exact millimetre match anywhere in the list wins. Only when there is none
/// are the rounded millimetre elevations compared, since saved elevations are
/// rounded to whole millimetres.
pub fn select_level(levels: &[Level], stored_mm: Option<f64>, converter: &dyn UnitConverter) -> Option<usize> {
    if levels.is_empty() {
        return None;
    }

    let matched = stored_mm.and_then(|stored| {
        let elevations: Vec<f64> = levels
            .iter()
            .map(|level| converter.elevation_to_millimetres(level.elevation))
            .collect();

        elevations
            .iter()
            .position(|mm| (mm - stored).abs() < ELEVATION_TOLERANCE)
            .or_else(|| elevations.iter().position(|mm| (mm.round() - stored).abs() < ELEVATION_TOLERANCE))
    });

    Some(matched.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm(value: f64) -> f64 {
        value
    }

    fn levels_mm() -> Vec<Level> {
        vec![
            Level::new("Ground", 0.0),
            Level::new("First", 3000.0),
            Level::new("Second", 6000.0),
        ]
    }

    fn feet_to_mm(value: f64) -> f64 {
        value * 304.8
    }

    #[test]
    fn test_every_in_range_integer_validates() {
        for t in 0..=100i64 {
            let parsed = parse_transmission(&t.to_string()).unwrap();
            assert_eq!(i64::from(parsed.value()), t);
        }
    }

    #[test]
    fn test_invalid_transmission_carries_raw_text() {
        for raw in ["150", "-1", "101", "abc", "7.5", "", "1e2", "99999999999999999999999"] {
            match parse_transmission(raw) {
                Err(FormError::InvalidTransmission { raw: carried, .. }) => assert_eq!(carried, raw),
                other => panic!("expected rejection of {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_transmission_tolerates_surrounding_whitespace() {
        assert_eq!(parse_transmission(" 85 ").unwrap().value(), 85);
        assert_eq!(parse_transmission("+5").unwrap().value(), 5);
    }

    #[test]
    fn test_out_of_range_reason() {
        let err = parse_transmission("150").unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn test_select_exact_level() {
        assert_eq!(select_level(&levels_mm(), Some(3000.0), &mm), Some(1));
        assert_eq!(select_level(&levels_mm(), Some(6000.0), &mm), Some(2));
    }

    #[test]
    fn test_select_falls_back_to_first_level() {
        assert_eq!(select_level(&levels_mm(), Some(3050.0), &mm), Some(0));
        assert_eq!(select_level(&levels_mm(), None, &mm), Some(0));
    }

    #[test]
    fn test_select_with_no_levels() {
        assert_eq!(select_level(&[], Some(3000.0), &mm), None);
    }

    #[test]
    fn test_select_matches_rounded_elevation() {
        let levels = vec![Level::new("Ground", 0.0), Level::new("Mezzanine", 3.2)];
        // 3.2 ft is 975.36 mm, saved as 975
        assert_eq!(select_level(&levels, Some(975.0), &feet_to_mm), Some(1));
        assert_eq!(select_level(&levels, Some(975.36), &feet_to_mm), Some(1));
    }

    #[test]
    fn test_exact_match_beats_earlier_rounded_match() {
        let levels = vec![Level::new("Near", 2999.6), Level::new("Exact", 3000.0)];
        assert_eq!(select_level(&levels, Some(3000.0), &mm), Some(1));
    }

    #[test]
    fn test_rounded_match_boundary() {
        // 2999.6 rounds to 3000, 2999.4 rounds to 2999
        let rounds_up = vec![Level::new("Ground", 0.0), Level::new("First", 2999.6)];
        assert_eq!(select_level(&rounds_up, Some(3000.0), &mm), Some(1));

        let rounds_down = vec![Level::new("Ground", 0.0), Level::new("First", 2999.4)];
        assert_eq!(select_level(&rounds_down, Some(3000.0), &mm), Some(0));
    }

    #[test]
    fn test_populate_maps_fields() {
        let record = SettingsRecord {
            execution_mode: ExecutionMode::Local,
            level_elevation: Some(6000.0),
            multilayer_wall: true,
            transmission_value: Transmission::new(33).unwrap(),
            write_results: false,
        };
        let form = FormState::populate(levels_mm(), &record, &mm);

        assert_eq!(form.selected().map(|l| l.name.as_str()), Some("Second"));
        assert!(form.multilayer_wall);
        assert_eq!(form.transmission_text, "33");
        assert_eq!(form.execution_mode_index(), 1);
        assert!(!form.write_results);
    }

    #[test]
    fn test_collect_requires_level() {
        let mut form = FormState::populate(levels_mm(), &SettingsRecord::default(), &mm);
        form.selected_level = None;
        assert_eq!(form.collect(), Err(FormError::MissingLevel));

        form.selected_level = Some(7);
        assert_eq!(form.collect(), Err(FormError::MissingLevel));
    }

    #[test]
    fn test_to_record_rounds_elevation() {
        let mut form = FormState::populate(
            vec![Level::new("Ground", 0.0), Level::new("Mezzanine", 3.2)],
            &SettingsRecord::default(),
            &feet_to_mm,
        );
        form.selected_level = Some(1);
        form.multilayer_wall = true;
        form.transmission_text = "85".to_string();
        form.set_execution_mode_index(1);
        form.write_results = false;

        let record = form.collect().unwrap().validate().unwrap().to_record(&feet_to_mm);
        assert_eq!(record.level_elevation, Some(975.0));
        assert_eq!(record.transmission_value.value(), 85);
        assert_eq!(record.execution_mode, ExecutionMode::Local);
        assert!(record.multilayer_wall);
        assert!(!record.write_results);
    }
}
