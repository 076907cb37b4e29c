//! Compatible document block (hh:compatibleDocument)

/// Target program for compatibility mode; encoded as a fixed token set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetProgram {
    /// Current HWP (2011 format and later)
    Hwp201x,
    /// Older HWP (up to 2007)
    Hwp200x,
    /// Microsoft Word
    MsWord,
}

impl TargetProgram {
    /// Canonical wire token.
    pub fn as_token(self) -> &'static str {
        match self {
            TargetProgram::Hwp201x => "HWP201X",
            TargetProgram::Hwp200x => "HWP200X",
            TargetProgram::MsWord => "MSWORD",
        }
    }
}

/// A single layout compatibility switch, emitted as an empty element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutFlag {
    ApplyFontWeightToBold,
    UseInnerUnderline,
    FixedUnderlineWidth,
    DoNotApplyStrikeoutWithUnderline,
    UseLowercaseStrikeout,
    ExtendLineheightToOffset,
}

impl LayoutFlag {
    /// Canonical element wire name (hh-prefixed).
    pub fn wire_name(self) -> &'static str {
        match self {
            LayoutFlag::ApplyFontWeightToBold => "hh:applyFontWeightToBold",
            LayoutFlag::UseInnerUnderline => "hh:useInnerUnderline",
            LayoutFlag::FixedUnderlineWidth => "hh:fixedUnderlineWidth",
            LayoutFlag::DoNotApplyStrikeoutWithUnderline => {
                "hh:doNotApplyStrikeoutWithUnderline"
            }
            LayoutFlag::UseLowercaseStrikeout => "hh:useLowercaseStrikeout",
            LayoutFlag::ExtendLineheightToOffset => "hh:extendLineheightToOffset",
        }
    }
}

/// Layout compatibility switches (hh:layoutCompatibility), in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutCompatibility {
    pub flags: Vec<LayoutFlag>,
}

/// Compatible document block (hh:compatibleDocument).
#[derive(Clone, Debug, Default)]
pub struct CompatibleDocument {
    target_program: Option<TargetProgram>,
    layout_compatibility: Option<LayoutCompatibility>,
}

impl CompatibleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_program(&self) -> Option<TargetProgram> {
        self.target_program
    }

    pub fn set_target_program(&mut self, target_program: Option<TargetProgram>) {
        self.target_program = target_program;
    }

    pub fn layout_compatibility(&self) -> Option<&LayoutCompatibility> {
        self.layout_compatibility.as_ref()
    }

    pub fn set_layout_compatibility(&mut self, layout: Option<LayoutCompatibility>) {
        self.layout_compatibility = layout;
    }
}
