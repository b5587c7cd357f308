//! # Value Model — Explicit Record Schema
//!
//! A record is validated through the view it gives of itself: the
//! [`Inspect`] trait maps a Rust value onto a [`Value`]. Aggregates map to
//! [`Value::Record`], whose [`Field`]s carry the per-field tag string and
//! visibility. Everything else maps onto one of the scalar or sequence
//! variants.
//!
//! Implementations are provided for strings, integers, sequences and a few
//! common scalars. Record types either implement [`Inspect`] by hand or are
//! declared through the `record!` macro of the `tagcheck` crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a [`Value`], as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// A struct-like aggregate with named fields.
    Record,
    /// A UTF-8 string.
    Str,
    /// A signed integer that fits in 64 bits.
    Int,
    /// A homogeneous sequence of values.
    Seq,
    /// Any kind the rules do not interpret (bool, float, option, ...).
    Other,
}

impl Kind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Str => "str",
            Self::Int => "int",
            Self::Seq => "seq",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a field may be read by the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Readable; rules are applied.
    #[default]
    Exported,
    /// Not readable from outside the record's module.
    Unexported,
}

impl Visibility {
    /// Derives visibility from a declared Rust visibility qualifier.
    ///
    /// An empty qualifier (private field) is [`Visibility::Unexported`];
    /// `pub`, `pub(crate)` and friends are [`Visibility::Exported`].
    pub fn from_declared(qualifier: &str) -> Self {
        if qualifier.trim().is_empty() {
            Self::Unexported
        } else {
            Self::Exported
        }
    }
}

/// A borrowed view of a value, shaped for rule evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// An aggregate and its fields in declaration order.
    Record(Vec<Field<'a>>),
    /// A string slice.
    Str(&'a str),
    /// An integer widened to `i64`.
    Int(i64),
    /// Sequence elements in order.
    Seq(Vec<Value<'a>>),
    /// An uninterpreted value, labelled with its type name.
    Other(&'static str),
}

impl<'a> Value<'a> {
    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Record(_) => Kind::Record,
            Self::Str(_) => Kind::Str,
            Self::Int(_) => Kind::Int,
            Self::Seq(_) => Kind::Seq,
            Self::Other(_) => Kind::Other,
        }
    }

    /// Returns true for [`Value::Record`].
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns the string slice if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the fields if this is a [`Value::Record`].
    pub fn fields(&self) -> Option<&[Field<'a>]> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Seq`].
    pub fn elements(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::Seq(elements) => Some(elements),
            _ => None,
        }
    }
}

/// One named member of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    name: &'a str,
    tag: &'a str,
    visibility: Visibility,
    value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Creates an exported, untagged field from any inspectable value.
    pub fn new<T: Inspect + ?Sized>(name: &'a str, value: &'a T) -> Self {
        Self::from_value(name, value.inspect())
    }

    /// Creates an exported, untagged field from an already built [`Value`].
    pub fn from_value(name: &'a str, value: Value<'a>) -> Self {
        Self {
            name,
            tag: "",
            visibility: Visibility::Exported,
            value,
        }
    }

    /// Attaches the raw validation tag, e.g. `"len:5;in:a,b"`.
    pub fn with_tag(mut self, tag: &'a str) -> Self {
        self.tag = tag;
        self
    }

    /// Sets the field's visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the field as unexported.
    pub fn unexported(self) -> Self {
        self.with_visibility(Visibility::Unexported)
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }
}

/// Types that can present themselves to the validator.
///
/// Only values whose view is a [`Value::Record`] are accepted at the top
/// level; every other view is rejected as "not a struct".
pub trait Inspect {
    /// Returns the validator's view of `self`.
    fn inspect(&self) -> Value<'_>;
}

impl Inspect for str {
    fn inspect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Inspect for String {
    fn inspect(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> Value<'_> {
        Value::Seq(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Value<'_> {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Value<'_> {
        self.as_slice().inspect()
    }
}

/// `Option` is not interpreted; it reports itself as an unsupported kind.
///
/// `Option::inspect` from the standard library shadows this method, so
/// `Some(3).inspect()` does not resolve here. Call `Inspect::inspect(&opt)`.
impl<T> Inspect for Option<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Other("Option")
    }
}

macro_rules! inspect_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> Value<'_> {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

inspect_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

// Out-of-range values are not integers as far as the rules are concerned.
macro_rules! inspect_narrowing_int {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> Value<'_> {
                    i64::try_from(*self).map_or(Value::Other(stringify!($ty)), Value::Int)
                }
            }
        )*
    };
}

inspect_narrowing_int!(isize, usize, u64, i128, u128);

macro_rules! inspect_other {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> Value<'_> {
                    Value::Other(stringify!($ty))
                }
            }
        )*
    };
}

inspect_other!(bool, char, f32, f64);
