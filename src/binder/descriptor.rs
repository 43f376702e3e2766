use derive_new::new;
use strum_macros::Display;

use crate::resolver::BindHint;
use crate::types::ParamValue;

/// Whether the call supplies the parameter or populates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    #[strum(serialize = "IN")]
    In,
    #[strum(serialize = "OUT")]
    Out,
}

impl Direction {
    pub fn is_out(&self) -> bool {
        matches!(self, Direction::Out)
    }
}

/// The (length, type, value) description of one parameter.
#[derive(new, Debug, Clone, PartialEq)]
pub struct BindDescriptor {
    /// Capacity hint for the bound buffer
    pub(crate) length: Option<i64>,
    /// Declared type, if any
    pub(crate) bind_type: Option<BindHint>,
    pub(crate) value: ParamValue,
}

impl BindDescriptor {
    /// A descriptor for a plain value: no length and no declared type.
    pub fn plain(value: ParamValue) -> Self {
        Self::new(None, None, value)
    }

    pub fn length(&self) -> Option<i64> {
        self.length
    }

    pub fn hint(&self) -> Option<&BindHint> {
        self.bind_type.as_ref()
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }
}
