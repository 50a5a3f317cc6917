//! Recording of dynamic state on command buffers, and its validation at draw time.
//!
//! State-setting commands are recorded through a [`RecordingCommandBuffer`]. Each one is first
//! passed through the [`ExtendedStateGate`], and is then recorded in the command buffer's
//! [`DynamicStateTracker`] whether the gate found a problem or not, so that later checks see
//! what was attempted.
//!
//! Immediately before each draw command, the [`DrawTimeValidator`] compares the tracker with the
//! bound pipeline. It runs every check, and reports every violation it finds.

pub use self::{
    draw::DrawTimeValidator,
    gate::ExtendedStateGate,
    recording::RecordingCommandBuffer,
    state::DynamicStateTracker,
};
use crate::NonExhaustive;

macro_rules! vuids {
    ($command:ident, $($id:literal),+ $(,)?) => {
        match $command {
            DrawCommand::Draw => &[$(concat!("VUID-vkCmdDraw-", $id)),+],
            DrawCommand::DrawIndirect => &[$(concat!("VUID-vkCmdDrawIndirect-", $id)),+],
            DrawCommand::DrawIndirectCount => &[$(concat!("VUID-vkCmdDrawIndirectCount-", $id)),+],
            DrawCommand::DrawIndexed => &[$(concat!("VUID-vkCmdDrawIndexed-", $id)),+],
            DrawCommand::DrawIndexedIndirect => &[$(concat!("VUID-vkCmdDrawIndexedIndirect-", $id)),+],
            DrawCommand::DrawIndexedIndirectCount => &[$(concat!("VUID-vkCmdDrawIndexedIndirectCount-", $id)),+],
            DrawCommand::DrawMeshTasks => &[$(concat!("VUID-vkCmdDrawMeshTasksEXT-", $id)),+],
            DrawCommand::DrawMeshTasksIndirect => &[$(concat!("VUID-vkCmdDrawMeshTasksIndirectEXT-", $id)),+],
            DrawCommand::DrawMeshTasksIndirectCount => &[$(concat!("VUID-vkCmdDrawMeshTasksIndirectCountEXT-", $id)),+],
        }
    };
}

mod draw;
mod gate;
mod recording;
mod state;

/// The draw commands that dynamic state is validated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawCommand {
    Draw,
    DrawIndirect,
    DrawIndirectCount,
    DrawIndexed,
    DrawIndexedIndirect,
    DrawIndexedIndirectCount,
    DrawMeshTasks,
    DrawMeshTasksIndirect,
    DrawMeshTasksIndirectCount,
}

impl DrawCommand {
    /// Returns the name of the Vulkan command.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Draw => "vkCmdDraw",
            Self::DrawIndirect => "vkCmdDrawIndirect",
            Self::DrawIndirectCount => "vkCmdDrawIndirectCount",
            Self::DrawIndexed => "vkCmdDrawIndexed",
            Self::DrawIndexedIndirect => "vkCmdDrawIndexedIndirect",
            Self::DrawIndexedIndirectCount => "vkCmdDrawIndexedIndirectCount",
            Self::DrawMeshTasks => "vkCmdDrawMeshTasksEXT",
            Self::DrawMeshTasksIndirect => "vkCmdDrawMeshTasksIndirectEXT",
            Self::DrawMeshTasksIndirectCount => "vkCmdDrawMeshTasksIndirectCountEXT",
        }
    }
}

/// The state that a secondary command buffer inherits from the primary command buffer that
/// executes it.
#[derive(Clone, Debug)]
pub struct CommandBufferInheritance {
    /// Whether the viewport and scissor state is inherited, as with
    /// `VkCommandBufferInheritanceViewportScissorInfoNV::viewportScissor2D`. The viewports and
    /// scissors must then not be set on the command buffer.
    ///
    /// The default value is `false`.
    pub viewport_scissor_2d: bool,

    /// The number of viewport depth ranges that are inherited.
    ///
    /// The default value is `0`.
    pub viewport_depth_count: u32,

    pub _ne: NonExhaustive,
}

impl Default for CommandBufferInheritance {
    #[inline]
    fn default() -> Self {
        Self {
            viewport_scissor_2d: false,
            viewport_depth_count: 0,
            _ne: NonExhaustive(()),
        }
    }
}
