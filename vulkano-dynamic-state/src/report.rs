//! Delivery of violations to the outside world.
//!
//! The validator never decides what happens to a command buffer. It hands each violation to a
//! [`Reporter`] and carries on.

use crate::ValidationError;
use ash::vk::Handle;
use smallvec::SmallVec;
use std::fmt::{Display, Error as FmtError, Formatter};

/// A Vulkan object that a violation relates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectRef {
    CommandBuffer(ash::vk::CommandBuffer),
    Pipeline(ash::vk::Pipeline),
}

impl Display for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            ObjectRef::CommandBuffer(handle) => {
                write!(f, "VkCommandBuffer 0x{:x}", handle.as_raw())
            }
            ObjectRef::Pipeline(handle) => write!(f, "VkPipeline 0x{:x}", handle.as_raw()),
        }
    }
}

/// One violated rule, as delivered to a [`Reporter`].
#[derive(Clone, Debug)]
pub struct Violation {
    /// The name of the command that was being recorded, for example `vkCmdDraw`.
    pub command: &'static str,

    /// What was wrong.
    pub error: Box<ValidationError>,

    /// The objects involved, command buffer first.
    pub objects: SmallVec<[ObjectRef; 2]>,
}

impl Violation {
    /// Returns the first VUID of the violation, or an empty string if it has none.
    #[inline]
    pub fn vuid(&self) -> &'static str {
        self.error.vuids.first().copied().unwrap_or("")
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}: {}", self.command, self.error)?;

        for object in &self.objects {
            write!(f, " [{}]", object)?;
        }

        Ok(())
    }
}

/// Receives violations.
///
/// The validator calls `report` once for every violated rule, and never looks at what the
/// reporter does with it.
pub trait Reporter {
    fn report(&mut self, violation: Violation);
}

impl Reporter for Vec<Violation> {
    #[inline]
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl<R> Reporter for &mut R
where
    R: Reporter + ?Sized,
{
    #[inline]
    fn report(&mut self, violation: Violation) {
        (**self).report(violation);
    }
}

/// A [`Reporter`] that writes every violation to the `log` crate at the error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, violation: Violation) {
        log::error!(
            target: "vulkano_dynamic_state",
            "{}",
            violation,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectRef, Violation};
    use crate::ValidationError;
    use ash::vk::Handle;
    use smallvec::smallvec;

    fn violation() -> Violation {
        Violation {
            command: "vkCmdDraw",
            error: Box::new(ValidationError {
                problem: "the `VK_DYNAMIC_STATE_LINE_WIDTH` dynamic state was not set".into(),
                vuids: &["VUID-vkCmdDraw-None-07833"],
                ..Default::default()
            }),
            objects: smallvec![
                ObjectRef::CommandBuffer(ash::vk::CommandBuffer::from_raw(0x10)),
                ObjectRef::Pipeline(ash::vk::Pipeline::from_raw(0x20)),
            ],
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            violation().to_string(),
            "vkCmdDraw: the `VK_DYNAMIC_STATE_LINE_WIDTH` dynamic state was not set \
            (VUID-vkCmdDraw-None-07833) [VkCommandBuffer 0x10] [VkPipeline 0x20]",
        );
        assert_eq!(violation().vuid(), "VUID-vkCmdDraw-None-07833");
    }
}
