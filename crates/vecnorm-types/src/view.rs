//! Borrowed views over host-owned numeric storage
//!
//! Registered functions never own their operands. Each invocation receives
//! a parameter list of views that borrow from the evaluator's bindings for
//! the duration of that single call.

use std::fmt;
use std::ops::Index;

/// Kind of a single operand, as spelled in signature patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `V`: a vector operand
    Vector,
    /// `T`: a scalar operand
    Scalar,
}

impl ParamKind {
    /// Pattern token for this kind
    pub fn token(self) -> char {
        match self {
            ParamKind::Vector => 'V',
            ParamKind::Scalar => 'T',
        }
    }

    /// Parse a pattern token
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'V' => Some(ParamKind::Vector),
            'T' => Some(ParamKind::Scalar),
            _ => None,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Vector => write!(f, "Vector"),
            ParamKind::Scalar => write!(f, "Scalar"),
        }
    }
}

/// Read-only handle over a contiguous numeric buffer
///
/// Length and indexed access only. The view is `Copy`, so passing it
/// around never touches the underlying storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorView<'a, T> {
    data: &'a [T],
}

impl<'a, T: Copy> VectorView<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, or `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Iterate elements by value
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, T>> {
        self.data.iter().copied()
    }

    /// The borrowed slice itself
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T> Index<usize> for VectorView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T: Copy> From<&'a [T]> for VectorView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Copy> From<&'a Vec<T>> for VectorView<'a, T> {
    fn from(data: &'a Vec<T>) -> Self {
        Self::new(data.as_slice())
    }
}

/// Handle over a single borrowed numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarView<'a, T> {
    value: &'a T,
}

impl<'a, T: Copy> ScalarView<'a, T> {
    pub fn new(value: &'a T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> T {
        *self.value
    }
}

/// One entry of a parameter list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenericParam<'a, T> {
    Vector(VectorView<'a, T>),
    Scalar(ScalarView<'a, T>),
}

impl<'a, T: Copy> GenericParam<'a, T> {
    pub fn kind(&self) -> ParamKind {
        match self {
            GenericParam::Vector(_) => ParamKind::Vector,
            GenericParam::Scalar(_) => ParamKind::Scalar,
        }
    }

    pub fn as_vector(&self) -> Option<VectorView<'a, T>> {
        match self {
            GenericParam::Vector(view) => Some(*view),
            GenericParam::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<T> {
        match self {
            GenericParam::Scalar(view) => Some(view.value()),
            GenericParam::Vector(_) => None,
        }
    }
}

/// Spell the kinds of a parameter list as a pattern alternative, e.g. `"VT"`
pub fn kinds_token(kinds: &[ParamKind]) -> String {
    kinds.iter().map(|k| k.token()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_view_access() {
        let data = vec![1.0, -2.0, 3.5];
        let view = VectorView::from(&data);

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view[1], -2.0);
        assert_eq!(view.get(2), Some(3.5));
        assert_eq!(view.get(3), None);
        assert_eq!(view.iter().collect::<Vec<_>>(), data);
    }

    #[test]
    fn test_empty_vector_view() {
        let data: [f64; 0] = [];
        let view = VectorView::new(&data[..]);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_generic_param_kinds() {
        let data = [1.0f64, 2.0];
        let p = 3.0f64;
        let params = [
            GenericParam::Vector(VectorView::new(&data)),
            GenericParam::Scalar(ScalarView::new(&p)),
        ];

        let kinds: Vec<ParamKind> = params.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec![ParamKind::Vector, ParamKind::Scalar]);
        assert_eq!(kinds_token(&kinds), "VT");

        assert_eq!(params[1].as_scalar(), Some(3.0));
        assert!(params[1].as_vector().is_none());
        assert_eq!(params[0].as_vector().map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_param_kind_tokens() {
        assert_eq!(ParamKind::from_token('V'), Some(ParamKind::Vector));
        assert_eq!(ParamKind::from_token('T'), Some(ParamKind::Scalar));
        assert_eq!(ParamKind::from_token('S'), None);
        assert_eq!(ParamKind::Scalar.token(), 'T');
    }
}
