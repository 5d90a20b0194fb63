// ============================================================================
// BigDouble Formatting
// ============================================================================

use super::{pow10, BigDouble, INFINITE_EXPONENT};
use crate::domain::config::{FormatConfig, MAX_FRACTION_DIGITS};
use crate::numeric::errors::{NumericError, NumericResult};
use std::fmt;

impl BigDouble {
    /// Render with an explicit format configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation.
    ///
    /// # Example
    /// ```
    /// use generic_math::domain::FormatConfig;
    /// use generic_math::numeric::BigDouble;
    ///
    /// let v = BigDouble::new(1.234567, 20);
    /// let text = v.to_string_with(&FormatConfig::precise()).unwrap();
    /// assert_eq!(text, "1.234567e20");
    /// ```
    pub fn to_string_with(&self, config: &FormatConfig) -> NumericResult<String> {
        if let Err(reason) = config.validate() {
            tracing::debug!(%reason, "format config rejected");
            return Err(NumericError::InvalidConfig);
        }

        Ok(self.format_with(config))
    }

    fn format_with(&self, config: &FormatConfig) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }

        if self.mantissa == 0.0 {
            return "0".to_string();
        }

        if self.exponent == INFINITE_EXPONENT {
            return if self.mantissa > 0.0 { "Inf" } else { "-Inf" }.to_string();
        }

        let digits = config.fraction_digits;

        if self.exponent >= 0 && self.exponent < config.plain_max_exponent {
            return format_plain(self.to_f64(), digits);
        }

        if self.exponent < 0 && self.exponent > config.plain_min_exponent {
            let places = digits + self.exponent.unsigned_abs() as usize;
            return format_plain(self.to_f64(), places);
        }

        // rounding 9.999 at two places gives 10, which belongs to the next decade
        let scale = pow10(digits as i64);
        let mut mantissa = (self.mantissa * scale).round() / scale;
        let mut exponent = self.exponent;
        if mantissa.abs() >= 10.0 {
            mantissa /= 10.0;
            exponent = exponent.saturating_add(1);
        }

        format!("{}e{}", format_plain(mantissa, digits), exponent)
    }
}

fn format_plain(value: f64, places: usize) -> String {
    let text = format!("{:.*}", places, value);
    if !text.contains('.') {
        return text;
    }

    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for BigDouble {
    /// Default format. A precision flag (`{:.4}`) overrides the fraction
    /// digits, capped at what an f64 mantissa carries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = match f.precision() {
            Some(digits) => {
                FormatConfig::new().with_fraction_digits(digits.min(MAX_FRACTION_DIGITS))
            }
            None => FormatConfig::new(),
        };

        f.write_str(&self.format_with(&config))
    }
}
