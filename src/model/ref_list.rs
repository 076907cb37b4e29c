//! Reference list (hh:refList) and its item groups

use crate::model::{ChildList, ObjectRef, ObjectType, TaggedChild};

/// Font face definitions group (hh:fontfaces).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fontfaces {
    pub item_cnt: Option<u32>,
}

/// Border/fill definitions group (hh:borderFills).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BorderFills {
    pub item_cnt: Option<u32>,
}

/// Character property definitions group (hh:charProperties).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharProperties {
    pub item_cnt: Option<u32>,
}

/// Heterogeneous child of hh:refList.
#[derive(Clone, Debug)]
pub enum RefChild {
    Fontfaces(Fontfaces),
    BorderFills(BorderFills),
    CharProperties(CharProperties),
}

impl TaggedChild for RefChild {
    fn tag(&self) -> ObjectType {
        match self {
            RefChild::Fontfaces(_) => ObjectType::Fontfaces,
            RefChild::BorderFills(_) => ObjectType::BorderFills,
            RefChild::CharProperties(_) => ObjectType::CharProperties,
        }
    }
}

impl RefChild {
    pub fn as_object_ref(&self) -> ObjectRef<'_> {
        match self {
            RefChild::Fontfaces(n) => ObjectRef::Fontfaces(n),
            RefChild::BorderFills(n) => ObjectRef::BorderFills(n),
            RefChild::CharProperties(n) => ObjectRef::CharProperties(n),
        }
    }
}

/// Reference list (hh:refList): the shared definition groups of the
/// document, replayed in source order.
#[derive(Clone, Debug, Default)]
pub struct RefList {
    children: ChildList<RefChild>,
}

impl RefList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &ChildList<RefChild> {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut ChildList<RefChild> {
        &mut self.children
    }

    pub fn fontfaces(&self) -> Option<&Fontfaces> {
        match self.children.first(ObjectType::Fontfaces) {
            Some(RefChild::Fontfaces(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_fontfaces(&mut self, fontfaces: Option<Fontfaces>) {
        match fontfaces {
            Some(n) => {
                self.children.set_first(RefChild::Fontfaces(n));
            }
            None => {
                self.children.remove_first(ObjectType::Fontfaces);
            }
        }
    }

    pub fn border_fills(&self) -> Option<&BorderFills> {
        match self.children.first(ObjectType::BorderFills) {
            Some(RefChild::BorderFills(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_border_fills(&mut self, border_fills: Option<BorderFills>) {
        match border_fills {
            Some(n) => {
                self.children.set_first(RefChild::BorderFills(n));
            }
            None => {
                self.children.remove_first(ObjectType::BorderFills);
            }
        }
    }

    pub fn char_properties(&self) -> Option<&CharProperties> {
        match self.children.first(ObjectType::CharProperties) {
            Some(RefChild::CharProperties(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_char_properties(&mut self, char_properties: Option<CharProperties>) {
        match char_properties {
            Some(n) => {
                self.children.set_first(RefChild::CharProperties(n));
            }
            None => {
                self.children.remove_first(ObjectType::CharProperties);
            }
        }
    }
}
