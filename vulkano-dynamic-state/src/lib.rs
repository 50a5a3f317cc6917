//! Draw-time validation of dynamic graphics pipeline state.
//!
//! # Brief summary
//!
//! A Vulkan graphics pipeline can leave parts of its configuration *dynamic*. Those parts are
//! not baked into the pipeline object, and must instead be supplied by state-setting commands
//! such as `vkCmdSetViewport` or `vkCmdSetLineWidth` before a draw command is recorded. This
//! crate tracks which dynamic states a command buffer has been given, and checks them against
//! the requirements of the bound pipeline whenever a draw command is recorded.
//!
//! - The [`DynamicState`](crate::pipeline::DynamicState) enum is the closed catalogue of every
//!   independently settable dynamic state, and
//!   [`DynamicStates`](crate::pipeline::DynamicStates) is a fixed-width set of them.
//!
//! - A [`GraphicsPipelineState`](crate::pipeline::graphics::GraphicsPipelineState) is the
//!   immutable description of a compiled pipeline: which states are dynamic, which are baked in,
//!   and the fixed values that decide whether a dynamic state is needed at all. Pipelines are
//!   registered in a [`PipelineTable`](crate::pipeline::PipelineTable) and referred to by handle.
//!
//! - A [`RecordingCommandBuffer`](crate::command_buffer::RecordingCommandBuffer) records
//!   state-setting commands into a
//!   [`DynamicStateTracker`](crate::command_buffer::DynamicStateTracker), after passing each of
//!   them through the [`ExtendedStateGate`](crate::command_buffer::ExtendedStateGate).
//!
//! - Before each draw command,
//!   [`validate_draw`](crate::command_buffer::RecordingCommandBuffer::validate_draw) runs the
//!   [`DrawTimeValidator`](crate::command_buffer::DrawTimeValidator), which reports every
//!   violation it finds to a [`Reporter`](crate::report::Reporter). Validation never stops at
//!   the first problem.

pub use ash::vk::Handle;
pub use version::Version;
use std::{
    borrow::Cow,
    error::Error,
    fmt::{Debug, Display, Error as FmtError, Formatter},
};


pub mod command_buffer;
pub mod device;
mod macros;
pub mod pipeline;
pub mod report;
mod version;

/// A helper type for non-exhaustive structs.
///
/// This type cannot be constructed outside this crate. Structures with a field of this type can
/// only be constructed by calling a constructor function or `Default::default()`. The effect is
/// similar to the standard Rust `#[non_exhaustive]` attribute, except that it does not prevent
/// update syntax from being used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] // add traits as needed
pub struct NonExhaustive(pub(crate) ());

/// A violation of a Vulkan valid usage rule.
#[derive(Clone, Default)]
pub struct ValidationError {
    /// The context in which the problem exists, such as the name of a parameter or field.
    pub context: Cow<'static, str>,

    /// A description of the problem.
    pub problem: Cow<'static, str>,

    /// If applicable, settings that the user could enable to avoid the problem in the future.
    pub requires_one_of: RequiresOneOf,

    /// *Valid Usage IDs* (VUIDs) in the Vulkan specification that relate to the problem.
    pub vuids: &'static [&'static str],
}

impl ValidationError {
    /// Prepends `context` to the existing context, separated by a dot.
    pub fn add_context(mut self: Box<Self>, context: impl Into<Cow<'static, str>>) -> Box<Self> {
        if self.context.is_empty() {
            self.context = context.into();
        } else {
            self.context = format!("{}.{}", context.into(), self.context).into();
        }

        self
    }

    /// Replaces the VUIDs of the error.
    pub fn set_vuids(mut self: Box<Self>, vuids: &'static [&'static str]) -> Box<Self> {
        self.vuids = vuids;
        self
    }
}

impl Debug for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if self.context.is_empty() {
            write!(f, "{}", self.problem)?;
        } else {
            write!(f, "{}: {}", self.context, self.problem)?;
        }

        if !self.requires_one_of.is_empty() {
            if self.context.is_empty() && self.problem.is_empty() {
                write!(f, "{:?}", self.requires_one_of)?;
            } else {
                write!(f, "\n\n{:?}", self.requires_one_of)?;
            }
        }

        if !self.vuids.is_empty() {
            write!(f, "\n\nVulkan VUIDs:")?;

            for vuid in self.vuids {
                write!(f, "\n    {}", vuid)?;
            }
        }

        Ok(())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if self.context.is_empty() {
            write!(f, "{}", self.problem)?;
        } else {
            write!(f, "{}: {}", self.context, self.problem)?;
        }

        if !self.requires_one_of.is_empty() {
            write!(f, " -- {}", self.requires_one_of)?;
        }

        if let Some((first, rest)) = self.vuids.split_first() {
            write!(f, " ({}", first)?;

            for vuid in rest {
                write!(f, ", {}", vuid)?;
            }

            write!(f, ")")?;
        }

        Ok(())
    }
}

impl Error for ValidationError {}

/// Used in errors to indicate a set of alternatives that needs to be available/enabled to allow
/// a given operation.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiresOneOf(pub &'static [RequiresAllOf]);

impl RequiresOneOf {
    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are any alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for RequiresOneOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "Requires one of:")?;

        for requires_all_of in self.0 {
            write!(f, "\n    {}", requires_all_of)?;
        }

        Ok(())
    }
}

impl Display for RequiresOneOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "requires one of: ")?;

        if let Some((first, rest)) = self.0.split_first() {
            if first.0.len() > 1 {
                write!(f, "({})", first)?;
            } else {
                write!(f, "{}", first)?;
            }

            for rest in rest {
                if first.0.len() > 1 {
                    write!(f, " or ({})", rest)?;
                } else {
                    write!(f, " or {}", rest)?;
                }
            }
        }

        Ok(())
    }
}

/// Used in errors to indicate a set of requirements that all need to be available/enabled to
/// allow a given operation.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiresAllOf(pub &'static [Requires]);

impl Display for RequiresAllOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if let Some((first, rest)) = self.0.split_first() {
            write!(f, "{}", first)?;

            for rest in rest {
                write!(f, " + {}", rest)?;
            }
        }

        Ok(())
    }
}

impl Debug for RequiresAllOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        Display::fmt(self, f)
    }
}

/// Something that needs to be supported or enabled to allow a particular operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Requires {
    APIVersion(Version),
    DeviceFeature(&'static str),
    DeviceExtension(&'static str),
}

impl Display for Requires {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Requires::APIVersion(Version { major, minor, .. }) => {
                write!(f, "Vulkan API version {}.{}", major, minor)
            }
            Requires::DeviceFeature(device_feature) => {
                write!(f, "device feature `{}`", device_feature)
            }
            Requires::DeviceExtension(device_extension) => {
                write!(f, "device extension `{}`", device_extension)
            }
        }
    }
}
