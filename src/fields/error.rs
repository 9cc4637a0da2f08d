use std::fmt;

/// Failures that can surface from arithmetic anywhere in the tower.
///
/// There is no "invalid input" category: every value of a field type is a valid field
/// element, so the only failures are field-theoretic singularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// An inversion was requested for the zero element (at any level of the tower, including
    /// a vanishing product inside a batched inversion).
    ZeroInversion,
    /// The shared denominator `4·g2` of a compressed cyclotomic element is zero, so the
    /// missing coefficients cannot be recovered.
    DegenerateCompression,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::ZeroInversion => write!(f, "attempted to invert the zero element"),
            FieldError::DegenerateCompression => {
                write!(f, "compressed element has a zero decompression denominator")
            }
        }
    }
}

impl std::error::Error for FieldError {}
