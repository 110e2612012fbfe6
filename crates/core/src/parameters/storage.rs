//! Parameter store
//!
//! Name-keyed typed values loaded at boot. Persistence and ground-station
//! access live in the firmware; the preset subsystem registers its defaults
//! and reads the loaded values once.

use super::error::ParameterError;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
const PARAM_NAME_LEN: usize = 16;

/// Store capacity (power of two)
const MAX_PARAMS: usize = 16;

type ParamName = String<PARAM_NAME_LEN>;

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Numeric value as integer, truncating floats
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::Float(v) if v.is_finite() => Some(*v as i32),
            _ => None,
        }
    }
}

/// Key/value parameter store
#[derive(Debug, Default)]
pub struct ParameterStore {
    values: FnvIndexMap<ParamName, ParamValue, MAX_PARAMS>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            values: FnvIndexMap::new(),
        }
    }

    fn name(name: &str) -> Result<ParamName, ParameterError> {
        let mut key = ParamName::new();
        key.push_str(name).map_err(|_| ParameterError::NameTooLong)?;
        Ok(key)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(&Self::name(name).ok()?)
    }

    /// Overwrite a registered parameter
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = Self::name(name)?;
        match self.values.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ParameterError::Unknown),
        }
    }

    /// Register a parameter with its default value
    ///
    /// Registering an existing name keeps the stored value.
    pub fn register(&mut self, name: &str, default_value: ParamValue) -> Result<(), ParameterError> {
        let key = Self::name(name)?;
        if self.values.contains_key(&key) {
            return Ok(());
        }
        self.values
            .insert(key, default_value)
            .map(|_| ())
            .map_err(|_| ParameterError::StoreFull)
    }
}
