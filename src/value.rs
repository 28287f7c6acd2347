use std::fmt;

/// A literal payload carried by a query tree node.
///
/// Every node in a targeting expression carries one value: an operator
/// keyword (`"AND"`, `"NOT"`, `"<="`), a segment or property name
/// (`"female"`, `"age"`), or a literal the expression compares against.
/// The set of kinds is closed so that passes inspecting values can match
/// exhaustively.
///
/// # Examples
///
/// ```
/// use adsquery::Value;
///
/// let op = Value::String("AND".to_string());
/// let threshold = Value::Integer(18);
///
/// assert_eq!(op.as_str(), Some("AND"));
/// assert!(Value::Null.is_null());
/// assert_eq!(threshold.to_string(), "18");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value assigned yet.
    ///
    /// Freshly constructed nodes hold `Null` until `set_value` is called.
    #[default]
    Null,

    /// Boolean literal (true/false)
    Boolean(bool),

    /// Integer literal (preserved separately from floats)
    Integer(i64),

    /// Floating-point literal
    Float(f64),

    /// String token: operator keyword, segment name, or property name
    String(String),
}

impl Value {
    /// Returns the string token if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// True if no value has been assigned.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
