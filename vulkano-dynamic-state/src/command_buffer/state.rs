//! The record of which dynamic states a command buffer has been given.

use crate::pipeline::{DynamicState, DynamicStates};

/// Tracks the dynamic states that have been set on one command buffer, together with the values
/// that later checks depend on.
///
/// A state stays set until a full [`reset`](Self::reset), or until it is
/// [`invalidate`](Self::invalidate)d by binding a pipeline that bakes it in. Setting the same
/// state again only overwrites the recorded value.
///
/// Per-index values (viewports, scissors, discard rectangles, and per-attachment color blend
/// state) are tracked as `u32` masks, one bit per index. Indices of 32 and above are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicStateTracker {
    status: DynamicStates,

    viewport_mask: u32,
    scissor_mask: u32,
    viewport_with_count_mask: u32,
    scissor_with_count_mask: u32,
    discard_rectangle_mask: u32,
    color_blend_enable_mask: u32,
    color_blend_equation_mask: u32,
    color_write_mask_mask: u32,
    color_blend_advanced_mask: u32,
    color_write_enable_count: Option<u32>,

    stencil_compare_mask_faces: ash::vk::StencilFaceFlags,
    stencil_write_mask_faces: ash::vk::StencilFaceFlags,
    stencil_reference_faces: ash::vk::StencilFaceFlags,
    stencil_op_faces: ash::vk::StencilFaceFlags,

    primitive_topology: Option<ash::vk::PrimitiveTopology>,
    primitive_restart_enable: Option<bool>,
    rasterizer_discard_enable: Option<bool>,
    depth_bias_enable: Option<bool>,
    depth_bounds_test_enable: Option<bool>,
    stencil_test_enable: Option<bool>,

    inherited_viewport_depth_count: u32,
}

impl DynamicStateTracker {
    /// Creates a tracker with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything, as when a command buffer begins recording.
    pub fn reset(&mut self) {
        log::debug!(
            target: "vulkano_dynamic_state",
            "resetting dynamic state {:?}",
            self.status,
        );

        *self = Self::default();
    }

    /// Forgets `states` and the values recorded for them.
    pub fn invalidate(&mut self, states: DynamicStates) {
        let invalidated = self.status.intersection(states);

        if !invalidated.is_empty() {
            log::debug!(
                target: "vulkano_dynamic_state",
                "invalidating dynamic state {:?}",
                invalidated,
            );
        }

        for state in states {
            self.status.remove(state);

            match state {
                DynamicState::Viewport => self.viewport_mask = 0,
                DynamicState::Scissor => self.scissor_mask = 0,
                DynamicState::ViewportWithCount => self.viewport_with_count_mask = 0,
                DynamicState::ScissorWithCount => self.scissor_with_count_mask = 0,
                DynamicState::DiscardRectangle => self.discard_rectangle_mask = 0,
                DynamicState::ColorBlendEnable => self.color_blend_enable_mask = 0,
                DynamicState::ColorBlendEquation => self.color_blend_equation_mask = 0,
                DynamicState::ColorWriteMask => self.color_write_mask_mask = 0,
                DynamicState::ColorBlendAdvanced => self.color_blend_advanced_mask = 0,
                DynamicState::ColorWriteEnable => self.color_write_enable_count = None,
                DynamicState::StencilCompareMask
                | DynamicState::StencilWriteMask
                | DynamicState::StencilReference
                | DynamicState::StencilOp => {
                    if let Some(faces) = self.stencil_faces_mut(state) {
                        *faces = ash::vk::StencilFaceFlags::empty();
                    }
                }
                DynamicState::PrimitiveTopology => self.primitive_topology = None,
                DynamicState::PrimitiveRestartEnable => self.primitive_restart_enable = None,
                DynamicState::RasterizerDiscardEnable => self.rasterizer_discard_enable = None,
                DynamicState::DepthBiasEnable => self.depth_bias_enable = None,
                DynamicState::DepthBoundsTestEnable => self.depth_bounds_test_enable = None,
                DynamicState::StencilTestEnable => self.stencil_test_enable = None,
                _ => (),
            }
        }
    }

    /// Returns the states that have been set.
    #[inline]
    pub fn status(&self) -> DynamicStates {
        self.status
    }

    /// Returns whether `state` has been set.
    #[inline]
    pub fn is_set(&self, state: DynamicState) -> bool {
        self.status.contains_enum(state)
    }

    /// Marks `state` as set, without any value.
    ///
    /// A state for which [`records_value`](Self::records_value) is `true` is left unset, and
    /// `false` is returned. Those states are recorded with the `record_*` method for their value.
    pub fn record(&mut self, state: DynamicState) -> bool {
        if Self::records_value(state) {
            return false;
        }

        self.mark(state);

        true
    }

    /// Returns whether the draw-time checks read a value of `state` besides whether it is set:
    /// indices, attachments, stencil faces, a topology, a color write enable count, or an enable
    /// value.
    pub fn records_value(state: DynamicState) -> bool {
        matches!(
            state,
            DynamicState::Viewport
                | DynamicState::Scissor
                | DynamicState::ViewportWithCount
                | DynamicState::ScissorWithCount
                | DynamicState::DiscardRectangle
                | DynamicState::ColorBlendEnable
                | DynamicState::ColorBlendEquation
                | DynamicState::ColorWriteMask
                | DynamicState::ColorBlendAdvanced
                | DynamicState::ColorWriteEnable
                | DynamicState::StencilCompareMask
                | DynamicState::StencilWriteMask
                | DynamicState::StencilReference
                | DynamicState::StencilOp
                | DynamicState::PrimitiveTopology
                | DynamicState::PrimitiveRestartEnable
                | DynamicState::RasterizerDiscardEnable
                | DynamicState::DepthBiasEnable
                | DynamicState::DepthBoundsTestEnable
                | DynamicState::StencilTestEnable
        )
    }

    fn mark(&mut self, state: DynamicState) {
        log::trace!(
            target: "vulkano_dynamic_state",
            "recorded {}",
            state.name(),
        );

        self.status.insert(state);
    }

    /// Marks `count` indices of `state`, starting at `first`, as set.
    ///
    /// For the viewport, scissor and discard rectangle states and the per-attachment color blend
    /// states, the new indices are added to those already set. For `ViewportWithCount` and
    /// `ScissorWithCount`, `first` is ignored and the indices replace those already set. Any
    /// other state is only marked as set.
    pub fn record_indexed(&mut self, state: DynamicState, first: u32, count: u32) {
        self.mark(state);

        let mask = index_mask(first, count);

        match state {
            DynamicState::Viewport => self.viewport_mask |= mask,
            DynamicState::Scissor => self.scissor_mask |= mask,
            DynamicState::ViewportWithCount => self.viewport_with_count_mask = index_mask(0, count),
            DynamicState::ScissorWithCount => self.scissor_with_count_mask = index_mask(0, count),
            DynamicState::DiscardRectangle => self.discard_rectangle_mask |= mask,
            DynamicState::ColorBlendEnable => self.color_blend_enable_mask |= mask,
            DynamicState::ColorBlendEquation => self.color_blend_equation_mask |= mask,
            DynamicState::ColorWriteMask => self.color_write_mask_mask |= mask,
            DynamicState::ColorBlendAdvanced => self.color_blend_advanced_mask |= mask,
            _ => (),
        }
    }

    /// Marks `ColorWriteEnable` as set for `count` attachments.
    pub fn record_color_write_enable(&mut self, count: u32) {
        self.mark(DynamicState::ColorWriteEnable);
        self.color_write_enable_count = Some(count);
    }

    /// Marks one of the stencil states as set for `faces`.
    ///
    /// The state counts as set as soon as one face is set. The faces are remembered, so that a
    /// face that was never set can be reported separately.
    pub fn record_stencil(&mut self, state: DynamicState, faces: ash::vk::StencilFaceFlags) {
        self.mark(state);

        if let Some(recorded) = self.stencil_faces_mut(state) {
            *recorded |= faces;
        }
    }

    /// Marks `PrimitiveTopology` as set to `topology`.
    pub fn record_primitive_topology(&mut self, topology: ash::vk::PrimitiveTopology) {
        self.mark(DynamicState::PrimitiveTopology);
        self.primitive_topology = Some(topology);
    }

    /// Marks one of the boolean enable states as set to `enable`.
    ///
    /// The value is remembered for the enable states that decide whether other states are
    /// needed.
    pub fn record_enable(&mut self, state: DynamicState, enable: bool) {
        self.mark(state);

        match state {
            DynamicState::PrimitiveRestartEnable => self.primitive_restart_enable = Some(enable),
            DynamicState::RasterizerDiscardEnable => self.rasterizer_discard_enable = Some(enable),
            DynamicState::DepthBiasEnable => self.depth_bias_enable = Some(enable),
            DynamicState::DepthBoundsTestEnable => self.depth_bounds_test_enable = Some(enable),
            DynamicState::StencilTestEnable => self.stencil_test_enable = Some(enable),
            _ => (),
        }
    }

    /// Sets the number of viewport depths inherited from the primary command buffer.
    #[inline]
    pub fn set_inherited_viewport_depth_count(&mut self, count: u32) {
        self.inherited_viewport_depth_count = count;
    }

    /// Returns the viewport indices set with `vkCmdSetViewport`.
    #[inline]
    pub fn viewport_mask(&self) -> u32 {
        self.viewport_mask
    }

    /// Returns the scissor indices set with `vkCmdSetScissor`.
    #[inline]
    pub fn scissor_mask(&self) -> u32 {
        self.scissor_mask
    }

    /// Returns the viewport indices set by the most recent `vkCmdSetViewportWithCount`.
    #[inline]
    pub fn viewport_with_count_mask(&self) -> u32 {
        self.viewport_with_count_mask
    }

    /// Returns the scissor indices set by the most recent `vkCmdSetScissorWithCount`.
    #[inline]
    pub fn scissor_with_count_mask(&self) -> u32 {
        self.scissor_with_count_mask
    }

    /// Returns the discard rectangle indices that have been set.
    #[inline]
    pub fn discard_rectangle_mask(&self) -> u32 {
        self.discard_rectangle_mask
    }

    /// Returns the attachment indices that `state` has been set for, or `0` if `state` is not
    /// a per-attachment state.
    pub fn attachment_mask(&self, state: DynamicState) -> u32 {
        match state {
            DynamicState::ColorBlendEnable => self.color_blend_enable_mask,
            DynamicState::ColorBlendEquation => self.color_blend_equation_mask,
            DynamicState::ColorWriteMask => self.color_write_mask_mask,
            DynamicState::ColorBlendAdvanced => self.color_blend_advanced_mask,
            _ => 0,
        }
    }

    /// Returns the number of attachments given to the most recent `vkCmdSetColorWriteEnableEXT`.
    #[inline]
    pub fn color_write_enable_count(&self) -> Option<u32> {
        self.color_write_enable_count
    }

    /// Returns the faces that the stencil state `state` has been set for.
    pub fn stencil_faces(&self, state: DynamicState) -> ash::vk::StencilFaceFlags {
        match state {
            DynamicState::StencilCompareMask => self.stencil_compare_mask_faces,
            DynamicState::StencilWriteMask => self.stencil_write_mask_faces,
            DynamicState::StencilReference => self.stencil_reference_faces,
            DynamicState::StencilOp => self.stencil_op_faces,
            _ => ash::vk::StencilFaceFlags::empty(),
        }
    }

    /// Returns the most recently set primitive topology.
    #[inline]
    pub fn primitive_topology(&self) -> Option<ash::vk::PrimitiveTopology> {
        self.primitive_topology
    }

    /// Returns the most recently set primitive restart enable.
    #[inline]
    pub fn primitive_restart_enable(&self) -> Option<bool> {
        self.primitive_restart_enable
    }

    /// Returns the most recently set rasterizer discard enable.
    #[inline]
    pub fn rasterizer_discard_enable(&self) -> Option<bool> {
        self.rasterizer_discard_enable
    }

    /// Returns the most recently set depth bias enable.
    #[inline]
    pub fn depth_bias_enable(&self) -> Option<bool> {
        self.depth_bias_enable
    }

    /// Returns the most recently set depth bounds test enable.
    #[inline]
    pub fn depth_bounds_test_enable(&self) -> Option<bool> {
        self.depth_bounds_test_enable
    }

    /// Returns the most recently set stencil test enable.
    #[inline]
    pub fn stencil_test_enable(&self) -> Option<bool> {
        self.stencil_test_enable
    }

    /// Returns the number of viewport depths inherited from the primary command buffer.
    #[inline]
    pub fn inherited_viewport_depth_count(&self) -> u32 {
        self.inherited_viewport_depth_count
    }

    /// Marks both with-count states as set, with arbitrary masks.
    #[cfg(test)]
    pub(crate) fn with_count_masks(mut self, viewports: u32, scissors: u32) -> Self {
        self.status.insert(DynamicState::ViewportWithCount);
        self.status.insert(DynamicState::ScissorWithCount);
        self.viewport_with_count_mask = viewports;
        self.scissor_with_count_mask = scissors;
        self
    }

    fn stencil_faces_mut(&mut self, state: DynamicState) -> Option<&mut ash::vk::StencilFaceFlags> {
        match state {
            DynamicState::StencilCompareMask => Some(&mut self.stencil_compare_mask_faces),
            DynamicState::StencilWriteMask => Some(&mut self.stencil_write_mask_faces),
            DynamicState::StencilReference => Some(&mut self.stencil_reference_faces),
            DynamicState::StencilOp => Some(&mut self.stencil_op_faces),
            _ => None,
        }
    }
}

/// Returns a mask with the bits `first..first + count` set, clamped to 32 bits.
pub(crate) fn index_mask(first: u32, count: u32) -> u32 {
    low_bits(first.saturating_add(count)) & !low_bits(first)
}

fn low_bits(count: u32) -> u32 {
    if count >= u32::BITS {
        u32::MAX
    } else {
        (1 << count) - 1
    }
}

/// Returns the indices of the set bits of `mask`, in ascending order.
pub(crate) fn mask_indices(mask: u32) -> impl Iterator<Item = u32> {
    (0..u32::BITS).filter(move |&index| mask & (1 << index) != 0)
}
