//! Writer for hh:trackchangeConfig

use crate::error::Result;
use crate::model::{ObjectRef, ObjectType};
use crate::writer::{type_mismatch, ElementWriter, WriteContext};
use crate::xml::names::{attribute, element};

/// Writer for hh:trackchangeConfig.
pub struct TrackChangeConfigWriter;

impl TrackChangeConfigWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ElementWriter for TrackChangeConfigWriter {
    fn sort(&self) -> ObjectType {
        ObjectType::TrackChangeConfig
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let config = match obj {
            ObjectRef::TrackChangeConfig(c) => c,
            other => return Err(type_mismatch(ObjectType::TrackChangeConfig, other.tag())),
        };

        let xsb = ctx.xsb();
        xsb.open_element(element::HH_TRACK_CHANGE_CONFIG)?;
        if let Some(flags) = config.flags {
            xsb.attribute(attribute::FLAGS, flags)?;
        }
        xsb.close_element()
    }
}
