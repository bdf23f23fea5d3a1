use crate::value::{Float64, Value};

///
/// IndexKey
///
/// Canonical comparable form of a scalar [`Value`]. The same key form is used
/// as the index map key and as the scan-path equality relation, so the two
/// search paths cannot disagree about what "equal" means.
///
/// Coercion table:
/// - `Bool(b)`      → `Bool(b)`; booleans compare only with booleans.
/// - `Int`/`Uint`   → `Int`.
/// - `Float(f)`     → `Int` when `f` is integral and in `i128` range,
///   otherwise `Float`.
/// - `Text(s)`      → `Int` when `s` parses fully as an `i128`; otherwise the
///   `Float` normalization when `s` parses as a finite `f64`; otherwise
///   `Text(s)` verbatim (case-sensitive).
/// - `Null`/`List`  → no key. Lists are keyed element-by-element via
///   [`IndexKey::element_keys`].
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IndexKey {
    Bool(bool),
    Int(i128),
    Float(Float64),
    Text(String),
}

impl IndexKey {
    /// Canonical key for one scalar value, or `None` for unkeyable shapes.
    #[must_use]
    pub fn for_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Int(i) => Some(Self::Int(i128::from(*i))),
            Value::Uint(u) => Some(Self::Int(i128::from(*u))),
            Value::Float(f) => Some(Self::from_float(*f)),
            Value::Text(s) => Some(Self::from_text(s)),
            Value::List(_) | Value::Null => None,
        }
    }

    /// Keys contributed by one attribute value: one per list element, one for
    /// a scalar, none for `Null` or unkeyable elements.
    #[must_use]
    pub fn element_keys(value: &Value) -> Vec<Self> {
        match value {
            Value::List(items) => items.iter().filter_map(Self::for_value).collect(),
            _ => Self::for_value(value).into_iter().collect(),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_precision_loss)]
    fn from_float(f: Float64) -> Self {
        let v = f.get();
        if f.is_integral() && v >= i128::MIN as f64 && v <= i128::MAX as f64 {
            return Self::Int(v as i128);
        }

        Self::Float(f)
    }

    fn from_text(s: &str) -> Self {
        if let Ok(i) = s.parse::<i128>() {
            return Self::Int(i);
        }

        // parse::<f64> accepts "inf"/"NaN"; Float64 rejects them back to Text
        if let Ok(f) = s.parse::<f64>() {
            if let Some(f) = Float64::try_new(f) {
                return Self::from_float(f);
            }
        }

        Self::Text(s.to_string())
    }
}
