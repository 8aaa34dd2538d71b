//! Dynamic values handed out by record accessors.
//!
//! Record types describe their layout statically (see [`super::schema`]) and
//! expose their data through [`Record::field`], which returns a [`Value`].
//! Optional and boxed fields surface as [`Value::Ref`] / [`Value::Nil`] so the
//! extractor can unwrap indirection uniformly.

use std::borrow::Cow;
use std::fmt;

/// Accessor implemented by every type that can be rendered.
pub trait Record {
    /// Returns the value stored under `key`, or [`Value::Nil`] when the key is unknown.
    fn field(&self, key: &str) -> Value<'_>;

    /// Text used when the record itself ends up in a cell without a formatter.
    fn display_text(&self) -> String {
        String::new()
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }

    fn display_text(&self) -> String {
        (**self).display_text()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }

    fn display_text(&self) -> String {
        (**self).display_text()
    }
}

/// A single field value.
#[derive(Clone)]
pub enum Value<'a> {
    /// Missing or null.
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    List(Vec<Value<'a>>),
    /// A nested record; group fields and formatted composites resolve to this.
    Record(&'a dyn Record),
    /// One level of optional/pointer indirection.
    Ref(Box<Value<'a>>),
}

impl<'a> Value<'a> {
    pub fn record<R: Record>(record: &'a R) -> Self {
        Value::Record(record)
    }

    pub fn str(text: &'a str) -> Self {
        Value::Str(Cow::Borrowed(text))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Follows `Ref` links until a concrete value or `Nil` is reached.
    pub fn deref(&self) -> &Value<'a> {
        let mut current = self;
        while let Value::Ref(inner) = current {
            current = inner.as_ref();
        }
        current
    }

    /// Numeric view used by the built-in formatters.
    pub fn as_f64(&self) -> Option<f64> {
        match self.deref() {
            Value::Int(i) => Some(*i as f64),
            Value::UInt(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Ref(_) => "ref",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(i) => write!(f, "Int({i})"),
            Value::UInt(u) => write!(f, "UInt({u})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Record(_) => write!(f, "Record(..)"),
            Value::Ref(inner) => write!(f, "Ref({inner:?})"),
        }
    }
}

/// Conversion used by hand-written [`Record::field`] implementations.
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_to_value {
    ($variant:ident as $target:ty => $($t:ty),+) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_to_value!(Int as i64 => i8, i16, i32, i64, isize);
impl_to_value!(UInt as u64 => u8, u16, u32, u64, usize);
impl_to_value!(Float as f64 => f32, f64);

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => Value::Ref(Box::new(inner.to_value())),
            None => Value::Nil,
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Ref(Box::new((**self).to_value()))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

// JSON documents are records when they are objects; everything else maps onto
// the scalar variants.
impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(Cow::Borrowed(s.as_str())),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(ToValue::to_value).collect())
            }
            serde_json::Value::Object(_) => Value::Record(self),
        }
    }
}

impl Record for serde_json::Value {
    fn field(&self, key: &str) -> Value<'_> {
        match self.get(key) {
            Some(value) => value.to_value(),
            None => Value::Nil,
        }
    }

    fn display_text(&self) -> String {
        self.to_string()
    }
}
