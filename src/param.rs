use std::fmt;

/// Значение, привязываемое к плейсхолдеру снаружи билдера.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    // целые
    I64(i64),
    I32(i32),

    F64(f64),

    Bool(bool),

    // строки/байты
    Str(String),
    Bytes(Vec<u8>),

    // JSON / UUID — опционально
    #[cfg(feature = "serde_json")]
    Json(serde_json::Value),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),

    Null,
}

impl Param {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::I64(v) => write!(f, "{v}"),
            Param::I32(v) => write!(f, "{v}"),
            Param::F64(v) => write!(f, "{v}"),
            Param::Bool(v) => write!(f, "{v}"),
            Param::Str(v) => f.write_str(v),
            Param::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            #[cfg(feature = "serde_json")]
            Param::Json(v) => write!(f, "{v}"),
            #[cfg(feature = "uuid")]
            Param::Uuid(v) => write!(f, "{v}"),
            Param::Null => f.write_str("NULL"),
        }
    }
}

// ---- From impls ----
impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::I32(v)
    }
}
impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::I64(v)
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::F64(v)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Str(v.to_string())
    }
}
impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Str(v)
    }
}
impl From<&String> for Param {
    fn from(v: &String) -> Self {
        Param::Str(v.clone())
    }
}
impl<'a> From<std::borrow::Cow<'a, str>> for Param {
    fn from(v: std::borrow::Cow<'a, str>) -> Self {
        Param::Str(v.into_owned())
    }
}

impl From<Vec<u8>> for Param {
    fn from(v: Vec<u8>) -> Self {
        Param::Bytes(v)
    }
}
impl From<&[u8]> for Param {
    fn from(v: &[u8]) -> Self {
        Param::Bytes(v.to_vec())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map_or(Param::Null, Into::into)
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Value> for Param {
    fn from(v: serde_json::Value) -> Self {
        Param::Json(v)
    }
}
#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Param {
    fn from(v: uuid::Uuid) -> Self {
        Param::Uuid(v)
    }
}
