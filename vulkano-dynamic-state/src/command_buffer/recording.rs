use super::{
    CommandBufferInheritance, DrawCommand, DrawTimeValidator, DynamicStateTracker,
    ExtendedStateGate,
};
use crate::{
    device::Device,
    pipeline::{
        graphics::{
            color_blend::AttachmentBlend,
            depth_stencil::StencilFaces,
            rasterization::LineStipple,
            vertex_input::{VertexInputBindingDescription, VertexInputState},
            viewport::{Scissor, Viewport},
        },
        DynamicState, PipelineTable,
    },
    report::{LogReporter, ObjectRef, Reporter, Violation},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};
use smallvec::smallvec;
use std::{ops::RangeInclusive, sync::Arc};

/// A command buffer that is being recorded, as far as dynamic state is concerned.
///
/// Every state-setting command is first checked by an [`ExtendedStateGate`] and by the
/// command's own parameter checks, and is then recorded in the [`DynamicStateTracker`] even if
/// a check failed. Violations go to the reporter `R`.
///
/// The command buffer only holds the handle of the bound pipeline. The pipeline itself is looked
/// up in the [`PipelineTable`] whenever it is needed.
#[derive(Debug)]
pub struct RecordingCommandBuffer<R = LogReporter> {
    handle: ash::vk::CommandBuffer,
    device: Arc<Device>,
    pipelines: Arc<PipelineTable>,
    reporter: R,

    tracker: DynamicStateTracker,
    inheritance: Option<CommandBufferInheritance>,
    pipeline_graphics: Option<ash::vk::Pipeline>,
    color_attachment_count: Option<u32>,
}

impl<R> RecordingCommandBuffer<R>
where
    R: Reporter,
{
    /// Creates a new `RecordingCommandBuffer` for the command buffer `handle`.
    pub fn new(
        device: Arc<Device>,
        pipelines: Arc<PipelineTable>,
        handle: ash::vk::CommandBuffer,
        reporter: R,
    ) -> Self {
        RecordingCommandBuffer {
            handle,
            device,
            pipelines,
            reporter,
            tracker: DynamicStateTracker::new(),
            inheritance: None,
            pipeline_graphics: None,
            color_attachment_count: None,
        }
    }

    /// Returns the handle of the command buffer.
    #[inline]
    pub fn handle(&self) -> ash::vk::CommandBuffer {
        self.handle
    }

    /// Returns the device that the command buffer was allocated from.
    #[inline]
    pub fn device(&self) -> &Arc<Device> {
        &self.device
    }

    /// Returns the dynamic state that has been recorded.
    #[inline]
    pub fn tracker(&self) -> &DynamicStateTracker {
        &self.tracker
    }

    /// Returns the handle of the bound graphics pipeline.
    #[inline]
    pub fn pipeline_graphics(&self) -> Option<ash::vk::Pipeline> {
        self.pipeline_graphics
    }

    /// Returns the reporter.
    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Returns the reporter mutably.
    #[inline]
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Consumes the command buffer and returns the reporter.
    #[inline]
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Begins recording, forgetting everything recorded before.
    ///
    /// A secondary command buffer passes the state that it inherits.
    pub fn begin(&mut self, inheritance: Option<CommandBufferInheritance>) -> &mut Self {
        self.tracker.reset();

        if let Some(inheritance) = &inheritance {
            self.tracker
                .set_inherited_viewport_depth_count(inheritance.viewport_depth_count);
        }

        self.inheritance = inheritance;
        self.pipeline_graphics = None;
        self.color_attachment_count = None;

        self
    }

    /// Binds a graphics pipeline.
    ///
    /// The states that the pipeline contains internally overwrite those that were set before, and
    /// must be set again if a later pipeline has them as dynamic state.
    pub fn bind_pipeline_graphics(&mut self, pipeline: ash::vk::Pipeline) -> &mut Self {
        match self.pipelines.get(pipeline) {
            Some(pipeline_state) => {
                log::debug!(
                    target: "vulkano_dynamic_state",
                    "binding pipeline {:?} to command buffer {:?}",
                    pipeline,
                    self.handle,
                );

                self.tracker.invalidate(pipeline_state.static_state());
            }
            None => {
                log::debug!(
                    target: "vulkano_dynamic_state",
                    "binding pipeline {:?} to command buffer {:?}, but it is not in the \
                    pipeline table",
                    pipeline,
                    self.handle,
                );
            }
        }

        self.pipeline_graphics = Some(pipeline);

        self
    }

    /// Begins a render pass instance with `color_attachment_count` color attachments.
    #[inline]
    pub fn begin_render_pass(&mut self, color_attachment_count: u32) -> &mut Self {
        self.color_attachment_count = Some(color_attachment_count);
        self
    }

    /// Ends the current render pass instance.
    #[inline]
    pub fn end_render_pass(&mut self) -> &mut Self {
        self.color_attachment_count = None;
        self
    }

    /// Sets a dynamic state that has no value the validator depends on.
    ///
    /// States whose value the draw-time checks read must be set with their dedicated setter.
    /// Passing one of those here is reported, and the state is left unset.
    pub fn set_dynamic_state(&mut self, state: DynamicState) -> &mut Self {
        self.check_state(state);

        if !self.tracker.record(state) {
            self.report(
                state.set_command(),
                Box::new(ValidationError {
                    context: "state".into(),
                    problem: format!(
                        "is `{}`, which has a value that must be set with its dedicated setter",
                        state.name(),
                    )
                    .into(),
                    ..Default::default()
                }),
            );
        }

        self
    }

    /// Sets the dynamic viewports, starting at `first_viewport`.
    pub fn set_viewport(&mut self, first_viewport: u32, viewports: &[Viewport]) -> &mut Self {
        self.check_state(DynamicState::Viewport);

        if let Err(err) = self.validate_set_viewport(first_viewport, viewports) {
            self.report(DynamicState::Viewport.set_command(), err);
        }

        self.tracker.record_indexed(
            DynamicState::Viewport,
            first_viewport,
            viewports.len() as u32,
        );

        self
    }

    fn validate_set_viewport(
        &self,
        first_viewport: u32,
        viewports: &[Viewport],
    ) -> Result<(), Box<ValidationError>> {
        if viewports.is_empty() {
            return Err(Box::new(ValidationError {
                context: "viewports".into(),
                problem: "is empty".into(),
                vuids: &["VUID-vkCmdSetViewport-viewportCount-arraylength"],
                ..Default::default()
            }));
        }

        let viewport_count = viewports.len() as u32;

        if let Some(max_viewports) = self.device.properties().max_viewports {
            if first_viewport.saturating_add(viewport_count) > max_viewports {
                return Err(Box::new(ValidationError {
                    problem: "`first_viewport + viewports.len()` exceeds the `max_viewports` \
                        limit"
                        .into(),
                    vuids: &["VUID-vkCmdSetViewport-firstViewport-01223"],
                    ..Default::default()
                }));
            }
        }

        if !self.device.enabled_features().multi_viewport {
            if first_viewport != 0 {
                return Err(Box::new(ValidationError {
                    context: "first_viewport".into(),
                    problem: "is not 0".into(),
                    requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                        "multi_viewport",
                    )])]),
                    vuids: &["VUID-vkCmdSetViewport-firstViewport-01224"],
                }));
            }

            if viewport_count > 1 {
                return Err(Box::new(ValidationError {
                    context: "viewports".into(),
                    problem: "the length is greater than 1".into(),
                    requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                        "multi_viewport",
                    )])]),
                    vuids: &["VUID-vkCmdSetViewport-viewportCount-01225"],
                }));
            }
        }

        for (index, viewport) in viewports.iter().enumerate() {
            viewport
                .validate()
                .map_err(|err| err.add_context(format!("viewports[{}]", index)))?;
        }

        Ok(())
    }

    /// Sets the dynamic scissors, starting at `first_scissor`.
    pub fn set_scissor(&mut self, first_scissor: u32, scissors: &[Scissor]) -> &mut Self {
        self.check_state(DynamicState::Scissor);

        if let Err(err) = self.validate_set_scissor(first_scissor, scissors) {
            self.report(DynamicState::Scissor.set_command(), err);
        }

        self.tracker.record_indexed(
            DynamicState::Scissor,
            first_scissor,
            scissors.len() as u32,
        );

        self
    }

    fn validate_set_scissor(
        &self,
        first_scissor: u32,
        scissors: &[Scissor],
    ) -> Result<(), Box<ValidationError>> {
        if scissors.is_empty() {
            return Err(Box::new(ValidationError {
                context: "scissors".into(),
                problem: "is empty".into(),
                vuids: &["VUID-vkCmdSetScissor-scissorCount-arraylength"],
                ..Default::default()
            }));
        }

        let scissor_count = scissors.len() as u32;

        if let Some(max_viewports) = self.device.properties().max_viewports {
            if first_scissor.saturating_add(scissor_count) > max_viewports {
                return Err(Box::new(ValidationError {
                    problem: "`first_scissor + scissors.len()` exceeds the `max_viewports` limit"
                        .into(),
                    vuids: &["VUID-vkCmdSetScissor-firstScissor-00592"],
                    ..Default::default()
                }));
            }
        }

        if !self.device.enabled_features().multi_viewport {
            if first_scissor != 0 {
                return Err(Box::new(ValidationError {
                    context: "first_scissor".into(),
                    problem: "is not 0".into(),
                    requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                        "multi_viewport",
                    )])]),
                    vuids: &["VUID-vkCmdSetScissor-firstScissor-00593"],
                }));
            }

            if scissor_count > 1 {
                return Err(Box::new(ValidationError {
                    context: "scissors".into(),
                    problem: "the length is greater than 1".into(),
                    requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                        "multi_viewport",
                    )])]),
                    vuids: &["VUID-vkCmdSetScissor-scissorCount-00594"],
                }));
            }
        }

        Ok(())
    }

    /// Sets the dynamic viewports and their number.
    pub fn set_viewport_with_count(&mut self, viewports: &[Viewport]) -> &mut Self {
        self.check_state(DynamicState::ViewportWithCount);

        if let Err(err) = self.validate_set_viewport_with_count(viewports) {
            self.report(DynamicState::ViewportWithCount.set_command(), err);
        }

        self.tracker.record_indexed(
            DynamicState::ViewportWithCount,
            0,
            viewports.len() as u32,
        );

        self
    }

    fn validate_set_viewport_with_count(
        &self,
        viewports: &[Viewport],
    ) -> Result<(), Box<ValidationError>> {
        let viewport_count = viewports.len() as u32;

        if viewport_count == 0
            || self
                .device
                .properties()
                .max_viewports
                .is_some_and(|max_viewports| viewport_count > max_viewports)
        {
            return Err(Box::new(ValidationError {
                context: "viewports".into(),
                problem: "the length is 0, or exceeds the `max_viewports` limit".into(),
                vuids: &["VUID-vkCmdSetViewportWithCount-viewportCount-03394"],
                ..Default::default()
            }));
        }

        if viewport_count > 1 && !self.device.enabled_features().multi_viewport {
            return Err(Box::new(ValidationError {
                context: "viewports".into(),
                problem: "the length is greater than 1".into(),
                requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                    "multi_viewport",
                )])]),
                vuids: &["VUID-vkCmdSetViewportWithCount-viewportCount-03395"],
            }));
        }

        for (index, viewport) in viewports.iter().enumerate() {
            viewport
                .validate()
                .map_err(|err| err.add_context(format!("viewports[{}]", index)))?;
        }

        Ok(())
    }

    /// Sets the dynamic scissors and their number.
    pub fn set_scissor_with_count(&mut self, scissors: &[Scissor]) -> &mut Self {
        self.check_state(DynamicState::ScissorWithCount);

        if let Err(err) = self.validate_set_scissor_with_count(scissors) {
            self.report(DynamicState::ScissorWithCount.set_command(), err);
        }

        self.tracker.record_indexed(
            DynamicState::ScissorWithCount,
            0,
            scissors.len() as u32,
        );

        self
    }

    fn validate_set_scissor_with_count(
        &self,
        scissors: &[Scissor],
    ) -> Result<(), Box<ValidationError>> {
        let scissor_count = scissors.len() as u32;

        if scissor_count == 0
            || self
                .device
                .properties()
                .max_viewports
                .is_some_and(|max_viewports| scissor_count > max_viewports)
        {
            return Err(Box::new(ValidationError {
                context: "scissors".into(),
                problem: "the length is 0, or exceeds the `max_viewports` limit".into(),
                vuids: &["VUID-vkCmdSetScissorWithCount-scissorCount-03397"],
                ..Default::default()
            }));
        }

        if scissor_count > 1 && !self.device.enabled_features().multi_viewport {
            return Err(Box::new(ValidationError {
                context: "scissors".into(),
                problem: "the length is greater than 1".into(),
                requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                    "multi_viewport",
                )])]),
                vuids: &["VUID-vkCmdSetScissorWithCount-scissorCount-03398"],
            }));
        }

        Ok(())
    }

    /// Sets the dynamic discard rectangles, starting at `first_rectangle`.
    pub fn set_discard_rectangle(
        &mut self,
        first_rectangle: u32,
        rectangles: &[Scissor],
    ) -> &mut Self {
        self.check_state(DynamicState::DiscardRectangle);

        let rectangle_count = rectangles.len() as u32;

        if let Some(max_discard_rectangles) = self.device.properties().max_discard_rectangles {
            if first_rectangle.saturating_add(rectangle_count) > max_discard_rectangles {
                self.report(
                    DynamicState::DiscardRectangle.set_command(),
                    Box::new(ValidationError {
                        problem: "`first_rectangle + rectangles.len()` exceeds the \
                            `max_discard_rectangles` limit"
                            .into(),
                        vuids: &["VUID-vkCmdSetDiscardRectangleEXT-firstDiscardRectangle-00585"],
                        ..Default::default()
                    }),
                );
            }
        }

        self.tracker.record_indexed(
            DynamicState::DiscardRectangle,
            first_rectangle,
            rectangle_count,
        );

        self
    }

    /// Sets the dynamic depth bounds.
    pub fn set_depth_bounds(&mut self, bounds: RangeInclusive<f32>) -> &mut Self {
        self.check_state(DynamicState::DepthBounds);

        if !(0.0..=1.0).contains(bounds.start()) {
            self.report(
                DynamicState::DepthBounds.set_command(),
                Box::new(ValidationError {
                    context: "bounds.start".into(),
                    problem: "is not between 0.0 and 1.0 inclusive".into(),
                    vuids: &["VUID-vkCmdSetDepthBounds-minDepthBounds-00600"],
                    ..Default::default()
                }),
            );
        }

        if !(0.0..=1.0).contains(bounds.end()) {
            self.report(
                DynamicState::DepthBounds.set_command(),
                Box::new(ValidationError {
                    context: "bounds.end".into(),
                    problem: "is not between 0.0 and 1.0 inclusive".into(),
                    vuids: &["VUID-vkCmdSetDepthBounds-maxDepthBounds-00601"],
                    ..Default::default()
                }),
            );
        }

        self.tracker.record(DynamicState::DepthBounds);

        self
    }

    /// Sets one of the per-face stencil states (`StencilCompareMask`, `StencilWriteMask`,
    /// `StencilReference` or `StencilOp`) for `faces`.
    pub fn set_stencil_state(&mut self, state: DynamicState, faces: StencilFaces) -> &mut Self {
        self.check_state(state);
        self.tracker.record_stencil(state, faces.into());

        self
    }

    /// Sets the dynamic line stipple.
    pub fn set_line_stipple(&mut self, line_stipple: LineStipple) -> &mut Self {
        self.check_state(DynamicState::LineStipple);

        let LineStipple { factor, pattern: _ } = line_stipple;

        if !(1..=256).contains(&factor) {
            self.report(
                DynamicState::LineStipple.set_command(),
                Box::new(ValidationError {
                    context: "line_stipple.factor".into(),
                    problem: "is not between 1 and 256 inclusive".into(),
                    vuids: &["VUID-vkCmdSetLineStippleEXT-lineStippleFactor-02776"],
                    ..Default::default()
                }),
            );
        }

        self.tracker.record(DynamicState::LineStipple);

        self
    }

    /// Sets the dynamic number of patch control points.
    pub fn set_patch_control_points(&mut self, num: u32) -> &mut Self {
        self.check_state(DynamicState::PatchControlPoints);

        if num == 0 {
            self.report(
                DynamicState::PatchControlPoints.set_command(),
                Box::new(ValidationError {
                    context: "num".into(),
                    problem: "is zero".into(),
                    vuids: &["VUID-vkCmdSetPatchControlPointsEXT-patchControlPoints-04874"],
                    ..Default::default()
                }),
            );
        }

        self.tracker.record(DynamicState::PatchControlPoints);

        self
    }

    /// Sets the dynamic pipeline fragment shading rate.
    pub fn set_fragment_shading_rate(&mut self, fragment_size: [u32; 2]) -> &mut Self {
        self.check_state(DynamicState::FragmentShadingRate);

        if !fragment_size.iter().all(|size| matches!(size, 1 | 2 | 4)) {
            self.report(
                DynamicState::FragmentShadingRate.set_command(),
                Box::new(ValidationError {
                    context: "fragment_size".into(),
                    problem: "contains a value that is not 1, 2 or 4".into(),
                    vuids: &[
                        "VUID-vkCmdSetFragmentShadingRateKHR-pFragmentSize-04513",
                        "VUID-vkCmdSetFragmentShadingRateKHR-pFragmentSize-04515",
                        "VUID-vkCmdSetFragmentShadingRateKHR-pFragmentSize-04517",
                    ],
                    ..Default::default()
                }),
            );
        }

        self.tracker.record(DynamicState::FragmentShadingRate);

        self
    }

    /// Sets whether writing to each color attachment is enabled.
    pub fn set_color_write_enable(&mut self, enables: &[bool]) -> &mut Self {
        self.check_state(DynamicState::ColorWriteEnable);

        let attachment_count = enables.len() as u32;

        if let Some(max_color_attachments) = self.device.properties().max_color_attachments {
            if attachment_count > max_color_attachments {
                self.report(
                    DynamicState::ColorWriteEnable.set_command(),
                    Box::new(ValidationError {
                        context: "enables".into(),
                        problem: "the length exceeds the `max_color_attachments` limit".into(),
                        vuids: &["VUID-vkCmdSetColorWriteEnableEXT-attachmentCount-06656"],
                        ..Default::default()
                    }),
                );
            }
        }

        self.tracker.record_color_write_enable(attachment_count);

        self
    }

    /// Sets whether blending is enabled for each color attachment, starting at
    /// `first_attachment`.
    pub fn set_color_blend_enable(&mut self, first_attachment: u32, enables: &[bool]) -> &mut Self {
        self.set_attachment_state(
            DynamicState::ColorBlendEnable,
            first_attachment,
            enables.len() as u32,
        )
    }

    /// Sets the blend equation of each color attachment, starting at `first_attachment`.
    pub fn set_color_blend_equation(
        &mut self,
        first_attachment: u32,
        equations: &[AttachmentBlend],
    ) -> &mut Self {
        self.set_attachment_state(
            DynamicState::ColorBlendEquation,
            first_attachment,
            equations.len() as u32,
        )
    }

    /// Sets the color write mask of each color attachment, starting at `first_attachment`.
    pub fn set_color_write_mask(
        &mut self,
        first_attachment: u32,
        masks: &[ash::vk::ColorComponentFlags],
    ) -> &mut Self {
        self.set_attachment_state(
            DynamicState::ColorWriteMask,
            first_attachment,
            masks.len() as u32,
        )
    }

    /// Sets the advanced blend parameters of `count` color attachments, starting at
    /// `first_attachment`.
    pub fn set_color_blend_advanced(&mut self, first_attachment: u32, count: u32) -> &mut Self {
        self.set_attachment_state(DynamicState::ColorBlendAdvanced, first_attachment, count)
    }

    fn set_attachment_state(
        &mut self,
        state: DynamicState,
        first_attachment: u32,
        count: u32,
    ) -> &mut Self {
        self.check_state(state);

        if count == 0 {
            self.report(
                state.set_command(),
                Box::new(ValidationError {
                    problem: "no attachments were given".into(),
                    ..Default::default()
                }),
            );
        }

        self.tracker.record_indexed(state, first_attachment, count);

        self
    }

    /// Sets the dynamic primitive topology.
    pub fn set_primitive_topology(
        &mut self,
        topology: impl Into<ash::vk::PrimitiveTopology>,
    ) -> &mut Self {
        self.check_state(DynamicState::PrimitiveTopology);
        self.tracker.record_primitive_topology(topology.into());

        self
    }

    /// Sets whether primitive restart is enabled.
    pub fn set_primitive_restart_enable(&mut self, enable: bool) -> &mut Self {
        self.set_enable(DynamicState::PrimitiveRestartEnable, enable)
    }

    /// Sets whether rasterizer discard is enabled.
    pub fn set_rasterizer_discard_enable(&mut self, enable: bool) -> &mut Self {
        self.set_enable(DynamicState::RasterizerDiscardEnable, enable)
    }

    /// Sets whether depth bias is enabled.
    pub fn set_depth_bias_enable(&mut self, enable: bool) -> &mut Self {
        self.set_enable(DynamicState::DepthBiasEnable, enable)
    }

    /// Sets whether the depth bounds test is enabled.
    pub fn set_depth_bounds_test_enable(&mut self, enable: bool) -> &mut Self {
        self.set_enable(DynamicState::DepthBoundsTestEnable, enable)
    }

    /// Sets whether the stencil test is enabled.
    pub fn set_stencil_test_enable(&mut self, enable: bool) -> &mut Self {
        self.set_enable(DynamicState::StencilTestEnable, enable)
    }

    fn set_enable(&mut self, state: DynamicState, enable: bool) -> &mut Self {
        self.check_state(state);
        self.tracker.record_enable(state, enable);

        self
    }

    /// Sets the dynamic vertex input bindings.
    pub fn set_vertex_input(&mut self, bindings: &[VertexInputBindingDescription]) -> &mut Self {
        self.check_state(DynamicState::VertexInput);

        let vertex_input_state = VertexInputState {
            bindings: bindings.to_vec(),
        };

        if let Err(err) = vertex_input_state.validate() {
            self.report(
                DynamicState::VertexInput.set_command(),
                err.set_vuids(&["VUID-vkCmdSetVertexInputEXT-pVertexBindingDescriptions-04794"]),
            );
        }

        self.tracker.record(DynamicState::VertexInput);

        self
    }

    /// Checks the state of the command buffer and the bound pipeline before a draw command.
    ///
    /// Every violation is reported. Returns whether there were any.
    pub fn validate_draw(&mut self, command: DrawCommand) -> bool {
        let Some(handle) = self.pipeline_graphics else {
            self.report(
                command.name(),
                Box::new(ValidationError {
                    problem: "no graphics pipeline is currently bound".into(),
                    vuids: vuids!(command, "None-08606"),
                    ..Default::default()
                }),
            );

            return true;
        };

        let Some(pipeline) = self.pipelines.get(handle) else {
            self.reporter.report(Violation {
                command: command.name(),
                error: Box::new(ValidationError {
                    problem: "the currently bound graphics pipeline is not a valid pipeline"
                        .into(),
                    vuids: vuids!(command, "None-08606"),
                    ..Default::default()
                }),
                objects: smallvec![
                    ObjectRef::CommandBuffer(self.handle),
                    ObjectRef::Pipeline(handle),
                ],
            });

            return true;
        };

        DrawTimeValidator::new(&self.device, &pipeline, &self.tracker, self.handle)
            .inheritance(self.inheritance.as_ref())
            .color_attachment_count(self.color_attachment_count)
            .validate(command, &mut self.reporter)
    }

    fn check_state(&mut self, state: DynamicState) {
        let pipeline = self
            .pipeline_graphics
            .and_then(|handle| self.pipelines.get(handle));

        ExtendedStateGate::new(&self.device, self.handle)
            .inheritance(self.inheritance.as_ref())
            .pipeline(pipeline.as_deref())
            .check_state(state, &mut self.reporter);
    }

    fn report(&mut self, command: &'static str, error: Box<ValidationError>) {
        self.reporter.report(Violation {
            command,
            error,
            objects: smallvec![ObjectRef::CommandBuffer(self.handle)],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingCommandBuffer;
    use crate::{
        command_buffer::{CommandBufferInheritance, DrawCommand},
        device::{Device, DeviceExtensions, DeviceFeatures, DeviceProperties},
        pipeline::{
            graphics::{
                color_blend::{ColorBlendAttachmentState, ColorBlendState},
                depth_stencil::{DepthStencilState, StencilFaces, StencilState},
                input_assembly::PrimitiveTopology,
                rasterization::{LineStipple, RasterizationState},
                viewport::{Scissor, Viewport, ViewportState},
            },
            DynamicState, DynamicStates, PipelineTable,
        },
        report::{ObjectRef, Violation},
        Version,
    };
    use ash::vk::Handle;
    use std::sync::Arc;

    fn device() -> Arc<Device> {
        device!(
            api_version: Version::V1_3,
            enabled_extensions: DeviceExtensions {
                ext_shader_object: true,
                ext_color_write_enable: true,
                ext_line_rasterization: true,
                ..DeviceExtensions::empty()
            },
            enabled_features: DeviceFeatures {
                shader_object: true,
                color_write_enable: true,
                multi_viewport: true,
                ..DeviceFeatures::empty()
            },
            properties: DeviceProperties {
                max_viewports: Some(4),
                max_color_attachments: Some(8),
                ..Default::default()
            },
        )
    }

    fn command_buffer(
        device: &Arc<Device>,
        pipelines: &Arc<PipelineTable>,
    ) -> RecordingCommandBuffer<Vec<Violation>> {
        let mut command_buffer = RecordingCommandBuffer::new(
            device.clone(),
            pipelines.clone(),
            ash::vk::CommandBuffer::from_raw(0x100),
            Vec::new(),
        );
        command_buffer.begin(None);
        command_buffer
    }

    fn vuids(command_buffer: &RecordingCommandBuffer<Vec<Violation>>) -> Vec<&'static str> {
        command_buffer.reporter().iter().map(Violation::vuid).collect()
    }

    #[test]
    fn draw_without_pipeline() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        let mut command_buffer = command_buffer(&device, &pipelines);

        assert!(command_buffer.validate_draw(DrawCommand::DrawIndexed));
        assert_eq!(vuids(&command_buffer), ["VUID-vkCmdDrawIndexed-None-08606"]);
    }

    #[test]
    fn draw_with_removed_pipeline() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(device, 1));
        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer.bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1));
        assert!(!command_buffer.validate_draw(DrawCommand::Draw));

        pipelines.remove(ash::vk::Pipeline::from_raw(1));
        assert!(command_buffer.validate_draw(DrawCommand::Draw));

        let violations = command_buffer.into_reporter();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].objects[1],
            ObjectRef::Pipeline(ash::vk::Pipeline::from_raw(1)),
        );
    }

    #[test]
    fn dynamic_viewport_and_scissor() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState {
                viewports: [Viewport::default(), Viewport::default()].into_iter().collect(),
                scissors: [Scissor::default(), Scissor::default()].into_iter().collect(),
                ..Default::default()
            }),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::Viewport)
                .with(DynamicState::Scissor),
        ));

        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1))
            .set_viewport(0, &[Viewport::default()])
            .set_scissor(0, &[Scissor::default(), Scissor::default()]);

        assert!(command_buffer.validate_draw(DrawCommand::Draw));
        assert_eq!(vuids(&command_buffer), ["VUID-vkCmdDraw-None-07831"]);

        command_buffer.reporter_mut().clear();
        command_buffer.set_viewport(1, &[Viewport::default()]);
        assert!(!command_buffer.validate_draw(DrawCommand::Draw));
    }

    #[test]
    fn set_viewport_limits() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        let mut command_buffer = command_buffer(&device, &pipelines);

        command_buffer.set_viewport(3, &[Viewport::default(), Viewport::default()]);
        command_buffer.set_viewport(
            0,
            &[Viewport {
                extent: [0.0, 1.0],
                ..Default::default()
            }],
        );

        assert_eq!(
            vuids(&command_buffer),
            [
                "VUID-vkCmdSetViewport-firstViewport-01223",
                "VUID-VkViewport-width-01770",
            ],
        );
        assert_eq!(
            command_buffer.reporter()[1].error.context,
            "viewports[0].extent[0]",
        );

        // Recorded anyway.
        assert_eq!(command_buffer.tracker().viewport_mask(), 0b11001);
    }

    #[test]
    fn binding_overwrites_static_state() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState::default()),
            dynamic_state: DynamicState::LineWidth.into(),
        ));
        pipelines.insert(pipeline!(
            device,
            2,
            rasterization_state: Some(RasterizationState::default()),
        ));

        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1))
            .set_dynamic_state(DynamicState::LineWidth)
            .set_dynamic_state(DynamicState::CullMode);
        assert!(command_buffer.tracker().is_set(DynamicState::LineWidth));

        command_buffer.bind_pipeline_graphics(ash::vk::Pipeline::from_raw(2));
        assert!(!command_buffer.tracker().is_set(DynamicState::LineWidth));
        assert!(!command_buffer.tracker().is_set(DynamicState::CullMode));

        command_buffer.bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1));
        assert!(!command_buffer.validate_draw(DrawCommand::Draw));

        // `CullMode` is part of pipeline 1.
        assert_eq!(vuids(&command_buffer), ["VUID-vkCmdDraw-None-02859"]);
    }

    #[test]
    fn setting_static_state_is_reported_and_recorded() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(
            device,
            1,
            color_blend_state: Some(ColorBlendState::default()),
        ));

        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1))
            .set_dynamic_state(DynamicState::BlendConstants);

        assert_eq!(vuids(&command_buffer), ["VUID-vkCmdDraw-None-02859"]);
        assert!(command_buffer.tracker().is_set(DynamicState::BlendConstants));
    }

    #[test]
    fn begin_resets() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .set_dynamic_state(DynamicState::LineWidth)
            .set_primitive_topology(PrimitiveTopology::LineList)
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1));

        command_buffer.begin(Some(CommandBufferInheritance {
            viewport_depth_count: 2,
            ..Default::default()
        }));

        assert!(command_buffer.tracker().status().is_empty());
        assert_eq!(command_buffer.tracker().primitive_topology(), None);
        assert_eq!(command_buffer.tracker().inherited_viewport_depth_count(), 2);
        assert_eq!(command_buffer.pipeline_graphics(), None);
    }

    #[test]
    fn inherited_viewport_cannot_be_set() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer.begin(Some(CommandBufferInheritance {
            viewport_scissor_2d: true,
            ..Default::default()
        }));

        command_buffer
            .set_viewport(0, &[Viewport::default()])
            .set_scissor_with_count(&[Scissor::default()]);

        assert_eq!(
            vuids(&command_buffer),
            [
                "VUID-vkCmdSetViewport-commandBuffer-04821",
                "VUID-vkCmdSetScissorWithCount-commandBuffer-04820",
            ],
        );
        assert_eq!(command_buffer.tracker().viewport_mask(), 0b1);
    }

    #[test]
    fn unsupported_state_is_recorded() {
        let device = device!();
        let pipelines = Arc::new(PipelineTable::new());
        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer.set_depth_bias_enable(true);

        assert_eq!(
            vuids(&command_buffer),
            ["VUID-vkCmdSetDepthBiasEnable-None-08970"],
        );
        assert_eq!(command_buffer.tracker().depth_bias_enable(), Some(true));
    }

    #[test]
    fn stencil_faces() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(
            device,
            1,
            depth_stencil_state: Some(DepthStencilState {
                stencil: Some(StencilState::default()),
                ..Default::default()
            }),
            dynamic_state: DynamicState::StencilCompareMask.into(),
        ));

        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1))
            .set_stencil_state(DynamicState::StencilCompareMask, StencilFaces::Back);
        assert!(command_buffer.validate_draw(DrawCommand::Draw));
        assert!(command_buffer.reporter()[0]
            .error
            .problem
            .contains("front face"));

        command_buffer.reporter_mut().clear();
        command_buffer.set_stencil_state(DynamicState::StencilCompareMask, StencilFaces::Front);
        assert!(!command_buffer.validate_draw(DrawCommand::Draw));
    }

    #[test]
    fn color_blend_attachments_follow_render_pass() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(
            device,
            1,
            color_blend_state: Some(ColorBlendState::with_attachment_states(
                4,
                ColorBlendAttachmentState::default(),
            )),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::ColorBlendEnable)
                .with(DynamicState::ColorWriteEnable),
        ));

        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1))
            .begin_render_pass(2)
            .set_color_blend_enable(0, &[true, false])
            .set_color_write_enable(&[true; 4]);
        assert!(!command_buffer.validate_draw(DrawCommand::Draw));

        command_buffer.end_render_pass();
        assert!(command_buffer.validate_draw(DrawCommand::Draw));
        assert_eq!(
            vuids(&command_buffer),
            [
                "VUID-vkCmdDraw-firstAttachment-07476",
                "VUID-vkCmdDraw-firstAttachment-07476",
            ],
        );
    }

    #[test]
    fn line_stipple_factor() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer.set_line_stipple(LineStipple {
            factor: 0,
            pattern: 0xFFFF,
        });

        assert_eq!(
            vuids(&command_buffer),
            ["VUID-vkCmdSetLineStippleEXT-lineStippleFactor-02776"],
        );
        assert!(command_buffer.tracker().is_set(DynamicState::LineStipple));
    }

    #[test]
    fn valued_state_needs_its_setter() {
        let device = device();
        let pipelines = Arc::new(PipelineTable::new());
        pipelines.insert(pipeline!(
            device,
            1,
            color_blend_state: Some(ColorBlendState::with_attachment_states(
                3,
                ColorBlendAttachmentState::default(),
            )),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::ColorWriteEnable)
                .with(DynamicState::PrimitiveTopology),
        ));

        let mut command_buffer = command_buffer(&device, &pipelines);
        command_buffer
            .bind_pipeline_graphics(ash::vk::Pipeline::from_raw(1))
            .set_dynamic_state(DynamicState::ColorWriteEnable)
            .set_dynamic_state(DynamicState::PrimitiveTopology);

        let violations = command_buffer.reporter();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].command, "vkCmdSetColorWriteEnableEXT");
        assert!(violations[0].error.problem.contains("dedicated setter"));
        assert!(!command_buffer
            .tracker()
            .is_set(DynamicState::ColorWriteEnable));

        assert!(command_buffer.validate_draw(DrawCommand::Draw));
        assert_eq!(
            vuids(&command_buffer)[2..],
            ["VUID-vkCmdDraw-None-07749", "VUID-vkCmdDraw-None-07842"],
        );
    }
}
