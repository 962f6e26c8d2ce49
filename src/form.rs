use crate::core::ballistics::LaunchParameters;
use crate::core::error::{Error, Result};
use crate::core::proximity::TargetQuery;

pub const INVALID_INPUT_HINT: &str =
    "Please enter valid numbers: Speed ≥ 0, Angle 0–90°, Height ≥ 0";
pub const INVALID_TARGET_HINT: &str =
    "Please enter valid target X,Y (meters, ≥ 0) or leave blank.";

/// Raw text of the launch form as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchForm {
    pub speed: String,
    pub angle: String,
    pub height: String,
    pub target_x: String,
    pub target_y: String,
}

impl LaunchForm {
    pub fn with_defaults() -> Self {
        Self {
            speed: "30".to_string(),
            angle: "45".to_string(),
            height: "0".to_string(),
            target_x: String::new(),
            target_y: String::new(),
        }
    }

    pub fn parse(&self) -> Result<(LaunchParameters, TargetQuery)> {
        let params = LaunchParameters::new(
            parse_f64(&self.speed, "speed").map_err(Error::InvalidParameters)?,
            parse_f64(&self.angle, "angle").map_err(Error::InvalidParameters)?,
            parse_f64(&self.height, "height").map_err(Error::InvalidParameters)?,
        )?;
        let target = TargetQuery::from_coordinates(
            parse_optional_f64(&self.target_x, "target X").map_err(Error::InvalidTarget)?,
            parse_optional_f64(&self.target_y, "target Y").map_err(Error::InvalidTarget)?,
        )?;
        Ok((params, target))
    }
}

pub fn input_hint(err: &Error) -> &'static str {
    match err {
        Error::InvalidParameters(_) => INVALID_INPUT_HINT,
        Error::InvalidTarget(_) => INVALID_TARGET_HINT,
    }
}

pub fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    let value = value.trim();
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_optional_f64(value: &str, label: &str) -> Result<Option<f64>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_f64(value, label).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{INVALID_INPUT_HINT, INVALID_TARGET_HINT, LaunchForm, input_hint};
    use crate::core::ballistics::LaunchParameters;
    use crate::core::error::Error;
    use crate::core::proximity::TargetQuery;

    fn form(speed: &str, angle: &str, height: &str, target_x: &str, target_y: &str) -> LaunchForm {
        LaunchForm {
            speed: speed.to_string(),
            angle: angle.to_string(),
            height: height.to_string(),
            target_x: target_x.to_string(),
            target_y: target_y.to_string(),
        }
    }

    #[test]
    fn defaults_parse_without_target() {
        let (params, target) = LaunchForm::with_defaults()
            .parse()
            .expect("defaults should be valid");

        assert_eq!(
            params,
            LaunchParameters {
                speed_mps: 30.0,
                angle_deg: 45.0,
                height_m: 0.0,
            }
        );
        assert_eq!(target, TargetQuery::Neither);
    }

    #[test]
    fn blank_target_fields_are_absent() {
        let (_, target) = form(" 20 ", "30", "1.5", "  ", "5")
            .parse()
            .expect("form should be valid");
        assert_eq!(target, TargetQuery::YOnly(5.0));
    }

    #[test]
    fn garbage_launch_value_is_invalid_parameters() {
        let err = form("fast", "45", "0", "", "")
            .parse()
            .expect_err("speed is not a number");

        assert!(matches!(&err, Error::InvalidParameters(msg) if msg.contains("'fast'")));
        assert_eq!(input_hint(&err), INVALID_INPUT_HINT);
    }

    #[test]
    fn out_of_domain_angle_is_invalid_parameters() {
        let err = form("20", "95", "0", "", "")
            .parse()
            .expect_err("angle is above 90");
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn negative_or_garbage_target_is_invalid_target() {
        for (x, y) in [("-3", "1"), ("3", "up")] {
            let err = form("20", "45", "0", x, y)
                .parse()
                .expect_err("target should be rejected");

            assert!(matches!(err, Error::InvalidTarget(_)), "{err:?}");
            assert_eq!(input_hint(&err), INVALID_TARGET_HINT);
        }
    }
}
