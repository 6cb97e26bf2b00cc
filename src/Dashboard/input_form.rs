use thiserror::Error;

/// absolute zero, °C
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Please enter reactants.")]
    EmptyReactants,
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("Temperature {0} °C is below absolute zero (-273.15 °C)")]
    BelowAbsoluteZero(f64),
    #[error("Pressure {0} atm is negative")]
    NegativePressure(f64),
}

/// raw values of the input form
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionInput {
    pub reactants: String,
    /// °C
    pub temperature: f64,
    /// atm
    pub pressure: f64,
    /// may be empty
    pub catalyst: String,
}

impl ReactionInput {
    pub fn new(reactants: &str, temperature: f64, pressure: f64, catalyst: &str) -> Self {
        Self {
            reactants: reactants.to_string(),
            temperature,
            pressure,
            catalyst: catalyst.to_string(),
        }
    }

    /// Builds the input from text fields as they are typed. Blank numeric fields take the
    /// defaults; reactants and catalyst are kept as typed (reactants are exact table keys).
    pub fn from_fields(
        reactants: &str,
        temperature: &str,
        pressure: &str,
        catalyst: &str,
        default_temperature: f64,
        default_pressure: f64,
    ) -> Result<Self, InputError> {
        let temperature = parse_number("Temperature", temperature, default_temperature)?;
        let pressure = parse_number("Pressure", pressure, default_pressure)?;
        Ok(Self::new(reactants, temperature, pressure, catalyst))
    }

    /// Range checks done before the reaction reaches the ledger.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.reactants.is_empty() {
            return Err(InputError::EmptyReactants);
        }
        if !self.temperature.is_finite() {
            return Err(InputError::NotFinite {
                field: "Temperature",
            });
        }
        if !self.pressure.is_finite() {
            return Err(InputError::NotFinite { field: "Pressure" });
        }
        if self.temperature < ABSOLUTE_ZERO_C {
            return Err(InputError::BelowAbsoluteZero(self.temperature));
        }
        if self.pressure < 0.0 {
            return Err(InputError::NegativePressure(self.pressure));
        }
        Ok(())
    }
}

fn parse_number(field: &'static str, text: &str, default: f64) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    text.parse::<f64>().map_err(|_| InputError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}
