//! Canonical textual encoding of attribute values
//!
//! Round-trip byte stability depends on every attribute using one fixed
//! textual form: integers in plain decimal, booleans as "0"/"1" (the HWPX
//! convention), strings verbatim. Values that cannot be encoded fail fast
//! instead of emitting truncated data.

use crate::error::{Error, Result};
use std::borrow::Cow;

/// A value that has a canonical attribute representation.
pub trait AttrValue {
    fn canonical(&self) -> Result<Cow<'_, str>>;
}

impl AttrValue for str {
    fn canonical(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AttrValue for String {
    fn canonical(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl AttrValue for bool {
    fn canonical(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(if *self { "1" } else { "0" }))
    }
}

impl AttrValue for f64 {
    fn canonical(&self) -> Result<Cow<'_, str>> {
        if !self.is_finite() {
            return Err(Error::InvalidAttributeValue(format!(
                "non-finite float {self}"
            )));
        }
        Ok(Cow::Owned(self.to_string()))
    }
}

macro_rules! attr_value_int {
    ($($t:ty),*) => {
        $(impl AttrValue for $t {
            fn canonical(&self) -> Result<Cow<'_, str>> {
                Ok(Cow::Owned(self.to_string()))
            }
        })*
    };
}

attr_value_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<T: AttrValue + ?Sized> AttrValue for &T {
    fn canonical(&self) -> Result<Cow<'_, str>> {
        (**self).canonical()
    }
}
