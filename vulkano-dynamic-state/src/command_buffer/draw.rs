use super::{
    state::{index_mask, mask_indices},
    CommandBufferInheritance, DrawCommand, DynamicStateTracker,
};
use crate::{
    device::Device,
    pipeline::{
        graphics::{
            input_assembly::{PrimitiveTopology, PrimitiveTopologyClass},
            GraphicsPipelineState,
        },
        DynamicState,
    },
    report::{ObjectRef, Reporter, Violation},
    ValidationError,
};
use smallvec::smallvec;

/// A dynamic state that must have been set before drawing, if the bound pipeline has it as
/// dynamic state and `condition` holds.
struct StateRule {
    state: DynamicState,
    condition: fn(&DrawTimeValidator<'_>) -> bool,
    per_face: bool,
    vuids: fn(DrawCommand) -> &'static [&'static str],
}

macro_rules! state_rule {
    ($state:ident, $id:literal) => {
        state_rule!($state, $id, |_| true)
    };
    ($state:ident, $id:literal, per_face) => {
        StateRule {
            per_face: true,
            ..state_rule!($state, $id)
        }
    };
    ($state:ident, $id:literal, per_face, $condition:expr) => {
        StateRule {
            per_face: true,
            ..state_rule!($state, $id, $condition)
        }
    };
    ($state:ident, $id:literal, $condition:expr) => {
        StateRule {
            state: DynamicState::$state,
            condition: $condition,
            per_face: false,
            vuids: |command: DrawCommand| -> &'static [&'static str] { vuids!(command, $id) },
        }
    };
}

/// States that are needed whenever they are dynamic.
static UNCONDITIONAL_STATES: [StateRule; 54] = [
    state_rule!(PatchControlPoints, "None-04875"),
    state_rule!(RasterizerDiscardEnable, "None-04876"),
    state_rule!(DepthBiasEnable, "None-04877"),
    state_rule!(LogicOp, "logicOp-04878"),
    state_rule!(PrimitiveRestartEnable, "None-04879"),
    state_rule!(VertexInputBindingStride, "pStrides-04913"),
    state_rule!(VertexInput, "None-04914"),
    state_rule!(ColorWriteEnable, "None-07749"),
    state_rule!(TessellationDomainOrigin, "None-07619"),
    state_rule!(DepthClampEnable, "None-07620"),
    state_rule!(PolygonMode, "None-07621"),
    state_rule!(RasterizationSamples, "None-07622"),
    state_rule!(SampleMask, "None-07623"),
    state_rule!(AlphaToCoverageEnable, "None-07624"),
    state_rule!(AlphaToOneEnable, "None-07625"),
    state_rule!(LogicOpEnable, "None-07626"),
    state_rule!(RasterizationStream, "None-07630"),
    state_rule!(ConservativeRasterizationMode, "None-07631"),
    state_rule!(ExtraPrimitiveOverestimationSize, "None-07632"),
    state_rule!(DepthClipEnable, "None-07633"),
    state_rule!(SampleLocationsEnable, "None-07634"),
    state_rule!(ProvokingVertexMode, "None-07636"),
    state_rule!(LineRasterizationMode, "None-07637"),
    state_rule!(LineStippleEnable, "None-07638"),
    state_rule!(DepthClipNegativeOneToOne, "None-07639"),
    state_rule!(ViewportWScalingEnable, "None-07640"),
    state_rule!(ViewportSwizzle, "None-07641"),
    state_rule!(CoverageToColorEnable, "None-07642"),
    state_rule!(CoverageToColorLocation, "None-07643"),
    state_rule!(CoverageModulationMode, "None-07644"),
    state_rule!(CoverageModulationTableEnable, "None-07645"),
    state_rule!(CoverageModulationTable, "None-07646"),
    state_rule!(ShadingRateImageEnable, "None-07647"),
    state_rule!(RepresentativeFragmentTestEnable, "None-07648"),
    state_rule!(CoverageReductionMode, "None-07649"),
    state_rule!(SampleLocations, "None-06666"),
    state_rule!(PrimitiveTopology, "None-07842"),
    state_rule!(CullMode, "None-07840"),
    state_rule!(FrontFace, "None-07841"),
    state_rule!(DepthTestEnable, "None-07843"),
    state_rule!(DepthWriteEnable, "None-07844"),
    state_rule!(DepthCompareOp, "None-07845"),
    state_rule!(DepthBoundsTestEnable, "None-07846"),
    state_rule!(StencilTestEnable, "None-07847"),
    state_rule!(StencilOp, "None-07848", per_face),
    state_rule!(FragmentShadingRate, "commandBuffer-02701"),
    state_rule!(DiscardRectangleEnable, "commandBuffer-02701"),
    state_rule!(DiscardRectangleMode, "commandBuffer-02701"),
    state_rule!(ExclusiveScissorEnable, "commandBuffer-02701"),
    state_rule!(ExclusiveScissor, "commandBuffer-02701"),
    state_rule!(ViewportWScaling, "commandBuffer-02701"),
    state_rule!(ViewportShadingRatePalette, "commandBuffer-02701"),
    state_rule!(ViewportCoarseSampleOrder, "commandBuffer-02701"),
    state_rule!(AttachmentFeedbackLoopEnable, "commandBuffer-02701"),
];

/// States that are only needed when other pipeline state makes use of them.
static CONDITIONAL_STATES: [StateRule; 8] = [
    state_rule!(DepthBias, "None-07834", |validator| {
        validator.depth_bias_enabled()
    }),
    state_rule!(LineWidth, "None-07833", |validator| {
        validator.draws_lines()
    }),
    state_rule!(LineStipple, "None-07849", |validator| {
        validator.draws_lines() && validator.pipeline.stippled_line_enable()
    }),
    state_rule!(BlendConstants, "None-07835", |validator| {
        validator.pipeline.uses_blend_constants()
    }),
    state_rule!(DepthBounds, "None-07836", |validator| {
        validator.depth_bounds_test_enabled()
    }),
    state_rule!(StencilCompareMask, "None-07837", per_face, |validator| {
        validator.stencil_test_enabled()
    }),
    state_rule!(StencilWriteMask, "None-07838", per_face, |validator| {
        validator.stencil_test_enabled()
    }),
    state_rule!(StencilReference, "None-07839", per_face, |validator| {
        validator.stencil_test_enabled()
    }),
];

/// States that are set per color attachment.
static ATTACHMENT_STATES: [StateRule; 4] = [
    state_rule!(ColorBlendEnable, "firstAttachment-07476"),
    state_rule!(ColorBlendEquation, "firstAttachment-07477"),
    state_rule!(ColorWriteMask, "firstAttachment-07478"),
    state_rule!(ColorBlendAdvanced, "firstAttachment-07479"),
];

/// Checks the dynamic state of a command buffer against the bound graphics pipeline,
/// immediately before a draw command.
///
/// Every check runs, whatever the outcome of the others, and every violation found is reported
/// separately. The pipeline and the tracker are only read.
#[derive(Clone, Copy, Debug)]
pub struct DrawTimeValidator<'a> {
    device: &'a Device,
    pipeline: &'a GraphicsPipelineState,
    tracker: &'a DynamicStateTracker,
    command_buffer: ash::vk::CommandBuffer,
    inheritance: Option<&'a CommandBufferInheritance>,
    color_attachment_count: Option<u32>,
}

impl<'a> DrawTimeValidator<'a> {
    /// Creates a validator for a draw recorded into `command_buffer` on `device`, with `pipeline`
    /// bound and the dynamic state in `tracker`.
    #[inline]
    pub fn new(
        device: &'a Device,
        pipeline: &'a GraphicsPipelineState,
        tracker: &'a DynamicStateTracker,
        command_buffer: ash::vk::CommandBuffer,
    ) -> Self {
        DrawTimeValidator {
            device,
            pipeline,
            tracker,
            command_buffer,
            inheritance: None,
            color_attachment_count: None,
        }
    }

    /// Sets the state that the command buffer inherits.
    #[inline]
    pub fn inheritance(mut self, inheritance: Option<&'a CommandBufferInheritance>) -> Self {
        self.inheritance = inheritance;
        self
    }

    /// Sets the number of color attachments of the current render pass instance.
    ///
    /// If `None`, the number of color blend attachments of the pipeline is used.
    #[inline]
    pub fn color_attachment_count(mut self, color_attachment_count: Option<u32>) -> Self {
        self.color_attachment_count = color_attachment_count;
        self
    }

    /// Runs every check for `command`, and reports each violation to `reporter`.
    ///
    /// Returns whether any violation was found.
    pub fn validate(&self, command: DrawCommand, reporter: &mut dyn Reporter) -> bool {
        log::trace!(
            target: "vulkano_dynamic_state",
            "validating {} with pipeline {:?} and dynamic state {:?}",
            command.name(),
            self.pipeline.handle(),
            self.tracker.status(),
        );

        let mut errors = Vec::new();

        self.validate_state_rules(command, &UNCONDITIONAL_STATES, &mut errors);
        self.validate_state_rules(command, &CONDITIONAL_STATES, &mut errors);
        errors.extend(self.validate_discard_rectangles(command).err());
        self.validate_color_blend_attachments(command, &mut errors);
        errors.extend(self.validate_unused_states(command).err());
        self.validate_viewport_scissor(command, &mut errors);
        errors.extend(self.validate_color_write_enable_count(command).err());
        errors.extend(self.validate_topology_class(command).err());
        errors.extend(self.validate_tessellation_topology(command).err());
        errors.extend(self.validate_primitive_restart(command).err());

        let found = !errors.is_empty();

        for error in errors {
            reporter.report(Violation {
                command: command.name(),
                error,
                objects: smallvec![
                    ObjectRef::CommandBuffer(self.command_buffer),
                    ObjectRef::Pipeline(self.pipeline.handle()),
                ],
            });
        }

        found
    }

    fn validate_state_rules(
        &self,
        command: DrawCommand,
        rules: &[StateRule],
        errors: &mut Vec<Box<ValidationError>>,
    ) {
        for rule in rules {
            if !self.pipeline.is_dynamic(rule.state) || !(rule.condition)(self) {
                continue;
            }

            if !self.tracker.is_set(rule.state) {
                errors.push(missing_state(rule.state, (rule.vuids)(command)));
            } else if rule.per_face {
                let faces = self.tracker.stencil_faces(rule.state);

                if !faces.contains(ash::vk::StencilFaceFlags::FRONT_AND_BACK) {
                    let missing_face = if faces.contains(ash::vk::StencilFaceFlags::FRONT) {
                        "back"
                    } else {
                        "front"
                    };

                    errors.push(Box::new(ValidationError {
                        problem: format!(
                            "the currently bound graphics pipeline requires the `{}` dynamic \
                            state, but this state was not set for the {} face",
                            rule.state.name(),
                            missing_face,
                        )
                        .into(),
                        vuids: (rule.vuids)(command),
                        ..Default::default()
                    }));
                }
            }
        }
    }

    fn validate_discard_rectangles(&self, command: DrawCommand) -> Result<(), Box<ValidationError>> {
        if !self.pipeline.is_dynamic(DynamicState::DiscardRectangle) {
            return Ok(());
        }

        let set = self.tracker.discard_rectangle_mask();
        let count = self.pipeline.discard_rectangle_count().min(u32::BITS);

        // Only the first missing rectangle is reported.
        if let Some(index) = (0..count).find(|&index| set & (1 << index) == 0) {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "the currently bound graphics pipeline requires the `{}` dynamic state, but \
                    this state was either not set for discard rectangle {}, or it was overwritten \
                    by a more recent `bind_pipeline_graphics` command",
                    DynamicState::DiscardRectangle.name(),
                    index,
                )
                .into(),
                vuids: vuids!(command, "None-07751"),
                ..Default::default()
            }));
        }

        Ok(())
    }

    fn validate_color_blend_attachments(
        &self,
        command: DrawCommand,
        errors: &mut Vec<Box<ValidationError>>,
    ) {
        let count = self
            .color_attachment_count
            .unwrap_or_else(|| self.pipeline.color_attachment_count())
            .min(u32::BITS);

        for attachment in 0..count {
            for rule in &ATTACHMENT_STATES {
                if !self.pipeline.is_dynamic(rule.state)
                    || self.tracker.attachment_mask(rule.state) & (1 << attachment) != 0
                {
                    continue;
                }

                errors.push(Box::new(ValidationError {
                    problem: format!(
                        "the currently bound graphics pipeline requires the `{}` dynamic state, \
                        but this state was either not set for color attachment {}, or it was \
                        overwritten by a more recent `bind_pipeline_graphics` command",
                        rule.state.name(),
                        attachment,
                    )
                    .into(),
                    vuids: (rule.vuids)(command),
                    ..Default::default()
                }));
            }
        }
    }

    fn validate_unused_states(&self, command: DrawCommand) -> Result<(), Box<ValidationError>> {
        let used = self.pipeline.dynamic_state() | self.pipeline.static_state();
        let unused = self.tracker.status() - used;

        if !unused.is_empty() {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "dynamic state was set for {:?}, but the currently bound graphics pipeline \
                    neither has this state as dynamic state nor contains it internally",
                    unused,
                )
                .into(),
                vuids: vuids!(command, "None-08608"),
                ..Default::default()
            }));
        }

        Ok(())
    }

    fn validate_viewport_scissor(
        &self,
        command: DrawCommand,
        errors: &mut Vec<Box<ValidationError>>,
    ) {
        if self.pipeline.rasterizer_discard_statically_enabled()
            || self.pipeline.viewport_state().is_none()
            || self
                .inheritance
                .is_some_and(|inheritance| inheritance.viewport_scissor_2d)
        {
            return;
        }

        let viewport_count = self.pipeline.viewport_count();
        let scissor_count = self.pipeline.scissor_count();

        if self.pipeline.is_dynamic(DynamicState::Viewport) {
            let missing = index_mask(0, viewport_count) & !self.tracker.viewport_mask();

            if missing != 0 {
                errors.push(missing_indices(
                    DynamicState::Viewport,
                    "viewport",
                    missing,
                    vuids!(command, "None-07831"),
                ));
            }
        }

        if self.pipeline.is_dynamic(DynamicState::Scissor) {
            let missing = index_mask(0, scissor_count) & !self.tracker.scissor_mask();

            if missing != 0 {
                errors.push(missing_indices(
                    DynamicState::Scissor,
                    "scissor",
                    missing,
                    vuids!(command, "None-07832"),
                ));
            }
        }

        let viewport_with_count = self.pipeline.is_dynamic(DynamicState::ViewportWithCount);
        let scissor_with_count = self.pipeline.is_dynamic(DynamicState::ScissorWithCount);

        if viewport_with_count && !self.tracker.is_set(DynamicState::ViewportWithCount) {
            errors.push(missing_state(
                DynamicState::ViewportWithCount,
                vuids!(command, "viewportCount-03417"),
            ));
        }

        if scissor_with_count && !self.tracker.is_set(DynamicState::ScissorWithCount) {
            errors.push(missing_state(
                DynamicState::ScissorWithCount,
                vuids!(command, "scissorCount-03418"),
            ));
        }

        let viewport_mask = self.tracker.viewport_with_count_mask();
        let scissor_mask = self.tracker.scissor_with_count_mask();

        match (viewport_with_count, scissor_with_count) {
            // The count that is not dynamic is the one that is matched.
            (true, false) if self.tracker.is_set(DynamicState::ViewportWithCount) => {
                let missing = index_mask(0, scissor_count) & !viewport_mask;

                if missing != 0 {
                    errors.push(missing_indices(
                        DynamicState::ViewportWithCount,
                        "viewport",
                        missing,
                        vuids!(command, "viewportCount-03417"),
                    ));
                }
            }
            (false, true) if self.tracker.is_set(DynamicState::ScissorWithCount) => {
                let missing = index_mask(0, viewport_count) & !scissor_mask;

                if missing != 0 {
                    errors.push(missing_indices(
                        DynamicState::ScissorWithCount,
                        "scissor",
                        missing,
                        vuids!(command, "scissorCount-03418"),
                    ));
                }
            }
            (true, true)
                if self.tracker.is_set(DynamicState::ViewportWithCount)
                    && self.tracker.is_set(DynamicState::ScissorWithCount) =>
            {
                let mismatch = viewport_mask ^ scissor_mask;

                if mismatch != 0 {
                    errors.push(Box::new(ValidationError {
                        problem: format!(
                            "the currently bound graphics pipeline requires the `{}` and `{}` \
                            dynamic states, but the viewports and scissors that were set do not \
                            match at indices {}",
                            DynamicState::ViewportWithCount.name(),
                            DynamicState::ScissorWithCount.name(),
                            format_indices(mismatch),
                        )
                        .into(),
                        vuids: vuids!(command, "viewportCount-03419"),
                        ..Default::default()
                    }));
                }
            }
            _ => (),
        }

        errors.extend(self.validate_inherited_viewport_depth(command).err());
    }

    fn validate_inherited_viewport_depth(
        &self,
        command: DrawCommand,
    ) -> Result<(), Box<ValidationError>> {
        let depth_count = self.tracker.inherited_viewport_depth_count();

        if depth_count != 0
            && self.pipeline.is_dynamic(DynamicState::Viewport)
            && self.pipeline.viewport_count() > depth_count
        {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "the currently bound graphics pipeline uses {} viewports, but only {} \
                    viewport depths are inherited",
                    self.pipeline.viewport_count(),
                    depth_count,
                )
                .into(),
                vuids: vuids!(command, "None-07850"),
                ..Default::default()
            }));
        }

        Ok(())
    }

    fn validate_color_write_enable_count(
        &self,
        command: DrawCommand,
    ) -> Result<(), Box<ValidationError>> {
        if !self.pipeline.is_dynamic(DynamicState::ColorWriteEnable)
            || self.pipeline.color_blend_state().is_none()
        {
            return Ok(());
        }

        if let Some(count) = self.tracker.color_write_enable_count() {
            if count < self.pipeline.color_attachment_count() {
                return Err(Box::new(ValidationError {
                    problem: format!(
                        "the currently bound graphics pipeline requires the `{}` dynamic state, \
                        but the number of enable values that were set ({}) is less than the \
                        number of color attachments in the color blend state of the graphics \
                        pipeline ({})",
                        DynamicState::ColorWriteEnable.name(),
                        count,
                        self.pipeline.color_attachment_count(),
                    )
                    .into(),
                    vuids: vuids!(command, "attachmentCount-07750"),
                    ..Default::default()
                }));
            }
        }

        Ok(())
    }

    fn validate_topology_class(&self, command: DrawCommand) -> Result<(), Box<ValidationError>> {
        if !self.pipeline.is_dynamic(DynamicState::PrimitiveTopology)
            || self.device.properties().dynamic_primitive_topology_unrestricted != Some(false)
        {
            return Ok(());
        }

        let Some(recorded) = self.tracker.primitive_topology() else {
            return Ok(());
        };
        let declared = self.pipeline.topology();

        if PrimitiveTopologyClass::of_raw(recorded) != Some(declared.class()) {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "the `dynamic_primitive_topology_unrestricted` device property is `false`, \
                    and the primitive topology that was set ({:?}) is not of the same topology \
                    class as the topology of the currently bound graphics pipeline ({:?})",
                    recorded,
                    ash::vk::PrimitiveTopology::from(declared),
                )
                .into(),
                vuids: vuids!(command, "dynamicPrimitiveTopologyUnrestricted-07500"),
                ..Default::default()
            }));
        }

        Ok(())
    }

    fn validate_tessellation_topology(
        &self,
        command: DrawCommand,
    ) -> Result<(), Box<ValidationError>> {
        if !self.pipeline.is_dynamic(DynamicState::PrimitiveTopology) {
            return Ok(());
        }

        let Some(recorded) = self.tracker.primitive_topology() else {
            return Ok(());
        };
        let patch_list = recorded == ash::vk::PrimitiveTopology::PATCH_LIST;

        match (self.pipeline.tessellation_state().is_some(), patch_list) {
            (true, false) => Err(Box::new(ValidationError {
                problem: format!(
                    "the currently bound graphics pipeline has tessellation state, but the \
                    primitive topology that was set ({:?}) is not `PATCH_LIST`",
                    recorded,
                )
                .into(),
                vuids: vuids!(command, "primitiveTopology-10286"),
                ..Default::default()
            })),
            (false, true) => Err(Box::new(ValidationError {
                problem: "the primitive topology that was set is `PATCH_LIST`, but the \
                    currently bound graphics pipeline has no tessellation state"
                    .into(),
                vuids: vuids!(command, "primitiveTopology-10286"),
                ..Default::default()
            })),
            _ => Ok(()),
        }
    }

    fn validate_primitive_restart(&self, command: DrawCommand) -> Result<(), Box<ValidationError>> {
        if !self.pipeline.is_dynamic(DynamicState::PrimitiveRestartEnable)
            || self.tracker.primitive_restart_enable() != Some(true)
        {
            return Ok(());
        }

        let topology = match self.tracker.primitive_topology() {
            Some(recorded) if self.pipeline.is_dynamic(DynamicState::PrimitiveTopology) => {
                match PrimitiveTopology::try_from(recorded) {
                    Ok(topology) => topology,
                    // Reported by the topology class check.
                    Err(()) => return Ok(()),
                }
            }
            _ => self.pipeline.topology(),
        };

        topology
            .validate_primitive_restart(self.device)
            .map_err(|err| err.set_vuids(vuids!(command, "None-09637")))
    }

    fn draws_lines(&self) -> bool {
        let topology = self
            .pipeline
            .effective_topology(self.tracker.primitive_topology());

        PrimitiveTopologyClass::of_raw(topology) == Some(PrimitiveTopologyClass::Line)
    }

    fn depth_bias_enabled(&self) -> bool {
        if self.pipeline.is_dynamic(DynamicState::DepthBiasEnable) {
            self.tracker.depth_bias_enable() == Some(true)
        } else {
            self.pipeline.depth_bias_enable()
        }
    }

    fn depth_bounds_test_enabled(&self) -> bool {
        if self.pipeline.is_dynamic(DynamicState::DepthBoundsTestEnable) {
            self.tracker.depth_bounds_test_enable() == Some(true)
        } else {
            self.pipeline.depth_bounds_test_enable()
        }
    }

    fn stencil_test_enabled(&self) -> bool {
        if self.pipeline.is_dynamic(DynamicState::StencilTestEnable) {
            self.tracker.stencil_test_enable() == Some(true)
        } else {
            self.pipeline.stencil_test_enable()
        }
    }
}

fn missing_state(
    state: DynamicState,
    vuids: &'static [&'static str],
) -> Box<ValidationError> {
    Box::new(ValidationError {
        problem: format!(
            "the currently bound graphics pipeline requires the `{}` dynamic state, but this \
            state was either not set, or it was overwritten by a more recent \
            `bind_pipeline_graphics` command",
            state.name(),
        )
        .into(),
        vuids,
        ..Default::default()
    })
}

fn missing_indices(
    state: DynamicState,
    kind: &str,
    missing: u32,
    vuids: &'static [&'static str],
) -> Box<ValidationError> {
    Box::new(ValidationError {
        problem: format!(
            "the currently bound graphics pipeline requires the `{}` dynamic state, but this \
            state was not set for {} indices {}",
            state.name(),
            kind,
            format_indices(missing),
        )
        .into(),
        vuids,
        ..Default::default()
    })
}

fn format_indices(mask: u32) -> String {
    mask_indices(mask)
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{DrawTimeValidator, ATTACHMENT_STATES, CONDITIONAL_STATES, UNCONDITIONAL_STATES};
    use crate::{
        command_buffer::{CommandBufferInheritance, DrawCommand, DynamicStateTracker},
        device::{Device, DeviceExtensions, DeviceFeatures, DeviceProperties},
        pipeline::{
            graphics::{
                color_blend::{
                    AttachmentBlend, BlendFactor, ColorBlendAttachmentState, ColorBlendState,
                },
                depth_stencil::{DepthStencilState, StencilState},
                discard_rectangle::DiscardRectangleState,
                input_assembly::{InputAssemblyState, PrimitiveTopology},
                rasterization::{DepthBiasState, LineStipple, RasterizationState},
                tessellation::TessellationState,
                viewport::{Scissor, Viewport, ViewportState},
                GraphicsPipelineState,
            },
            DynamicState, DynamicStates,
        },
        report::{ObjectRef, Violation},
        Version,
    };
    use ash::vk::Handle;
    use smallvec::smallvec;
    use std::sync::Arc;

    fn command_buffer() -> ash::vk::CommandBuffer {
        ash::vk::CommandBuffer::from_raw(0x100)
    }

    fn full_device() -> Arc<Device> {
        device!(
            api_version: Version::V1_3,
            enabled_extensions: DeviceExtensions {
                ext_shader_object: true,
                ext_color_write_enable: true,
                ext_discard_rectangles: true,
                ext_line_rasterization: true,
                ..DeviceExtensions::empty()
            },
            enabled_features: DeviceFeatures {
                shader_object: true,
                color_write_enable: true,
                multi_viewport: true,
                tessellation_shader: true,
                ..DeviceFeatures::empty()
            },
            properties: DeviceProperties {
                dynamic_primitive_topology_unrestricted: Some(false),
                ..Default::default()
            },
        )
    }

    fn validate(
        device: &Device,
        pipeline: &GraphicsPipelineState,
        tracker: &DynamicStateTracker,
    ) -> Vec<Violation> {
        let mut violations: Vec<Violation> = Vec::new();
        let found = DrawTimeValidator::new(device, pipeline, tracker, command_buffer())
            .validate(DrawCommand::Draw, &mut violations);
        assert_eq!(found, !violations.is_empty());
        violations
    }

    #[test]
    fn every_state_has_a_rule() {
        let covered: DynamicStates = UNCONDITIONAL_STATES
            .iter()
            .chain(&CONDITIONAL_STATES)
            .chain(&ATTACHMENT_STATES)
            .map(|rule| rule.state)
            .chain([
                DynamicState::Viewport,
                DynamicState::Scissor,
                DynamicState::ViewportWithCount,
                DynamicState::ScissorWithCount,
                DynamicState::DiscardRectangle,
                DynamicState::RayTracingPipelineStackSize,
            ])
            .collect();

        assert_eq!(covered, DynamicStates::all());
        assert_eq!(
            UNCONDITIONAL_STATES.len() + CONDITIONAL_STATES.len() + ATTACHMENT_STATES.len() + 6,
            DynamicState::COUNT,
        );
    }

    #[test]
    fn unconditional_state_missing() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState::default()),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::PolygonMode)
                .with(DynamicState::CullMode),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record(DynamicState::CullMode);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].command, "vkCmdDraw");
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07621");
        assert!(violations[0]
            .error
            .problem
            .contains("VK_DYNAMIC_STATE_POLYGON_MODE_EXT"));
        assert_eq!(
            violations[0].objects.as_slice(),
            [
                ObjectRef::CommandBuffer(command_buffer()),
                ObjectRef::Pipeline(pipeline.handle()),
            ],
        );

        tracker.record(DynamicState::PolygonMode);
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn static_states_are_never_missing() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState {
                depth_bias: Some(DepthBiasState::default()),
                ..Default::default()
            }),
            input_assembly_state: Some(InputAssemblyState {
                topology: PrimitiveTopology::LineList,
                ..Default::default()
            }),
        );
        let tracker = DynamicStateTracker::new();

        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn depth_bias_needs_enabled_depth_bias() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState {
                depth_bias: Some(DepthBiasState::default()),
                ..Default::default()
            }),
            dynamic_state: DynamicState::DepthBias.into(),
        );
        let tracker = DynamicStateTracker::new();

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07834");

        let pipeline = pipeline!(
            device,
            2,
            rasterization_state: Some(RasterizationState::default()),
            dynamic_state: DynamicState::DepthBias.into(),
        );
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn recorded_enable_decides() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState::default()),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::DepthBias)
                .with(DynamicState::DepthBiasEnable),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_enable(DynamicState::DepthBiasEnable, false);
        assert!(validate(&device, &pipeline, &tracker).is_empty());

        tracker.record_enable(DynamicState::DepthBiasEnable, true);
        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07834");
    }

    #[test]
    fn line_width_follows_topology() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState::default()),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::LineWidth)
                .with(DynamicState::PrimitiveTopology),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::TRIANGLE_LIST);
        assert!(validate(&device, &pipeline, &tracker).is_empty());

        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::LINE_STRIP);
        let violations = validate(&device, &pipeline, &tracker);
        let vuids: Vec<_> = violations.iter().map(Violation::vuid).collect();
        assert!(vuids.contains(&"VUID-vkCmdDraw-None-07833"));
    }

    #[test]
    fn line_stipple_needs_stippled_lines() {
        let device = full_device();
        let stippled = |handle: u64, topology: PrimitiveTopology| {
            pipeline!(
                device,
                handle,
                input_assembly_state: Some(InputAssemblyState {
                    topology,
                    ..Default::default()
                }),
                rasterization_state: Some(RasterizationState {
                    line_stipple: Some(LineStipple {
                        factor: 1,
                        pattern: 0xFFFF,
                    }),
                    ..Default::default()
                }),
                dynamic_state: DynamicState::LineStipple.into(),
            )
        };
        let tracker = DynamicStateTracker::new();

        let violations = validate(&device, &stippled(1, PrimitiveTopology::LineList), &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07849");

        let triangles = stippled(2, PrimitiveTopology::TriangleList);
        assert!(validate(&device, &triangles, &tracker).is_empty());

        let unstippled = pipeline!(
            device,
            3,
            input_assembly_state: Some(InputAssemblyState {
                topology: PrimitiveTopology::LineList,
                ..Default::default()
            }),
            rasterization_state: Some(RasterizationState::default()),
            dynamic_state: DynamicState::LineStipple.into(),
        );
        assert!(validate(&device, &unstippled, &tracker).is_empty());
    }

    #[test]
    fn blend_constants_when_referenced() {
        let device = full_device();
        let blending = |handle: u64, blend: AttachmentBlend| {
            pipeline!(
                device,
                handle,
                color_blend_state: Some(ColorBlendState::with_attachment_states(
                    1,
                    ColorBlendAttachmentState {
                        blend: Some(blend),
                        ..Default::default()
                    },
                )),
                dynamic_state: DynamicState::BlendConstants.into(),
            )
        };
        let tracker = DynamicStateTracker::new();

        let constant = AttachmentBlend {
            src_color_blend_factor: BlendFactor::ConstantColor,
            ..AttachmentBlend::alpha()
        };
        let violations = validate(&device, &blending(1, constant), &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07835");

        let alpha = blending(2, AttachmentBlend::alpha());
        assert!(validate(&device, &alpha, &tracker).is_empty());
    }

    #[test]
    fn depth_bounds_with_static_test_enable() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            depth_stencil_state: Some(DepthStencilState {
                depth_bounds: Some(0.0..=1.0),
                ..Default::default()
            }),
            dynamic_state: DynamicState::DepthBounds.into(),
        );
        let tracker = DynamicStateTracker::new();

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07836");

        let pipeline = pipeline!(
            device,
            2,
            depth_stencil_state: Some(DepthStencilState::default()),
            dynamic_state: DynamicState::DepthBounds.into(),
        );
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn stencil_values_with_static_test_enable() {
        let device = full_device();
        let stencil_values = DynamicStates::empty()
            .with(DynamicState::StencilCompareMask)
            .with(DynamicState::StencilWriteMask)
            .with(DynamicState::StencilReference);
        let tracker = DynamicStateTracker::new();

        let pipeline = pipeline!(
            device,
            1,
            depth_stencil_state: Some(DepthStencilState {
                stencil: Some(StencilState::default()),
                ..Default::default()
            }),
            dynamic_state: stencil_values,
        );
        let violations = validate(&device, &pipeline, &tracker);
        let vuids: Vec<_> = violations.iter().map(Violation::vuid).collect();
        assert_eq!(
            vuids,
            [
                "VUID-vkCmdDraw-None-07837",
                "VUID-vkCmdDraw-None-07838",
                "VUID-vkCmdDraw-None-07839",
            ],
        );

        let pipeline = pipeline!(
            device,
            2,
            depth_stencil_state: Some(DepthStencilState::default()),
            dynamic_state: stencil_values,
        );
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn stencil_per_face() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            depth_stencil_state: Some(DepthStencilState {
                stencil: Some(StencilState::default()),
                ..Default::default()
            }),
            dynamic_state: DynamicState::StencilReference.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_stencil(
            DynamicState::StencilReference,
            ash::vk::StencilFaceFlags::FRONT,
        );

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07839");
        assert!(violations[0].error.problem.contains("back face"));

        tracker.record_stencil(
            DynamicState::StencilReference,
            ash::vk::StencilFaceFlags::BACK,
        );
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn discard_rectangles_first_gap_only() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            discard_rectangle_state: Some(DiscardRectangleState {
                rectangles: vec![Scissor::default(); 4],
                ..Default::default()
            }),
            dynamic_state: DynamicState::DiscardRectangle.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_indexed(DynamicState::DiscardRectangle, 0, 1);
        tracker.record_indexed(DynamicState::DiscardRectangle, 2, 1);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07751");
        assert!(violations[0].error.problem.contains("discard rectangle 1,"));
    }

    #[test]
    fn color_blend_per_attachment() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            color_blend_state: Some(ColorBlendState::with_attachment_states(
                2,
                ColorBlendAttachmentState::default(),
            )),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::ColorBlendEnable)
                .with(DynamicState::ColorWriteMask),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_indexed(DynamicState::ColorBlendEnable, 0, 1);

        let violations = validate(&device, &pipeline, &tracker);
        let vuids: Vec<_> = violations.iter().map(Violation::vuid).collect();
        assert_eq!(
            vuids,
            [
                "VUID-vkCmdDraw-firstAttachment-07478",
                "VUID-vkCmdDraw-firstAttachment-07476",
                "VUID-vkCmdDraw-firstAttachment-07478",
            ],
        );

        // Only the first attachment is active.
        let mut violations: Vec<Violation> = Vec::new();
        DrawTimeValidator::new(&device, &pipeline, &tracker, command_buffer())
            .color_attachment_count(Some(1))
            .validate(DrawCommand::Draw, &mut violations);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn unused_states_are_aggregated() {
        let device = full_device();
        let pipeline = pipeline!(device, 1);
        let mut tracker = DynamicStateTracker::new();
        tracker.record(DynamicState::LineWidth);
        tracker.record(DynamicState::BlendConstants);
        tracker.record(DynamicState::CullMode);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-08608");

        let problem = &violations[0].error.problem;
        assert!(problem.contains("VK_DYNAMIC_STATE_LINE_WIDTH"));
        assert!(problem.contains("VK_DYNAMIC_STATE_BLEND_CONSTANTS"));
        assert!(problem.contains("VK_DYNAMIC_STATE_CULL_MODE"));
    }

    #[test]
    fn missing_viewport_index() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState {
                viewports: smallvec![Viewport::default(), Viewport::default()],
                scissors: smallvec![Scissor::default(), Scissor::default()],
                ..Default::default()
            }),
            dynamic_state: DynamicState::Viewport.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_indexed(DynamicState::Viewport, 0, 1);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07831");
        assert!(violations[0].error.problem.ends_with("viewport indices 1"));
    }

    #[test]
    fn inherited_viewport_scissor_skips_counts() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState::default()),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::Viewport)
                .with(DynamicState::Scissor),
        );
        let tracker = DynamicStateTracker::new();
        assert_eq!(validate(&device, &pipeline, &tracker).len(), 2);

        let inheritance = CommandBufferInheritance {
            viewport_scissor_2d: true,
            ..Default::default()
        };
        let mut violations: Vec<Violation> = Vec::new();
        let found = DrawTimeValidator::new(&device, &pipeline, &tracker, command_buffer())
            .inheritance(Some(&inheritance))
            .validate(DrawCommand::DrawIndexed, &mut violations);
        assert!(!found);
    }

    #[test]
    fn rasterizer_discard_skips_counts() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState::default()),
            rasterization_state: Some(RasterizationState {
                rasterizer_discard_enable: true,
                ..Default::default()
            }),
            dynamic_state: DynamicState::Scissor.into(),
        );
        let tracker = DynamicStateTracker::new();
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn with_count_masks_must_match() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState {
                viewports: smallvec![],
                scissors: smallvec![],
                ..Default::default()
            }),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::ViewportWithCount)
                .with(DynamicState::ScissorWithCount),
        );
        let tracker = DynamicStateTracker::new().with_count_masks(0b0011, 0b0101);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-viewportCount-03419");
        assert!(violations[0].error.problem.ends_with("at indices 1, 2"));
    }

    #[test]
    fn viewport_with_count_matches_scissor_count() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState {
                viewports: smallvec![],
                scissors: smallvec![Scissor::default(), Scissor::default()],
                ..Default::default()
            }),
            dynamic_state: DynamicState::ViewportWithCount.into(),
        );
        let mut tracker = DynamicStateTracker::new();

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-viewportCount-03417");

        tracker.record_indexed(DynamicState::ViewportWithCount, 0, 1);
        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].error.problem.ends_with("viewport indices 1"));

        tracker.record_indexed(DynamicState::ViewportWithCount, 0, 2);
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn scissor_with_count_matches_viewport_count() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState {
                viewports: smallvec![Viewport::default(), Viewport::default()],
                scissors: smallvec![],
                ..Default::default()
            }),
            dynamic_state: DynamicState::ScissorWithCount.into(),
        );
        let mut tracker = DynamicStateTracker::new();

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-scissorCount-03418");

        tracker.record_indexed(DynamicState::ScissorWithCount, 0, 1);
        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-scissorCount-03418");
        assert!(violations[0].error.problem.ends_with("scissor indices 1"));

        tracker.record_indexed(DynamicState::ScissorWithCount, 0, 2);
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn inherited_viewport_depth() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            viewport_state: Some(ViewportState {
                viewports: smallvec![Viewport::default(), Viewport::default()],
                scissors: smallvec![Scissor::default(), Scissor::default()],
                ..Default::default()
            }),
            dynamic_state: DynamicState::Viewport.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_indexed(DynamicState::Viewport, 0, 2);
        tracker.set_inherited_viewport_depth_count(1);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-07850");

        tracker.set_inherited_viewport_depth_count(2);
        assert!(validate(&device, &pipeline, &tracker).is_empty());

        // Not checked when the viewport and scissor counts are not checked either.
        tracker.set_inherited_viewport_depth_count(1);
        let inheritance = CommandBufferInheritance {
            viewport_scissor_2d: true,
            ..Default::default()
        };
        let mut violations: Vec<Violation> = Vec::new();
        let found = DrawTimeValidator::new(&device, &pipeline, &tracker, command_buffer())
            .inheritance(Some(&inheritance))
            .validate(DrawCommand::Draw, &mut violations);
        assert!(!found);

        let discarding = pipeline!(
            device,
            2,
            viewport_state: Some(ViewportState {
                viewports: smallvec![Viewport::default(), Viewport::default()],
                scissors: smallvec![Scissor::default(), Scissor::default()],
                ..Default::default()
            }),
            rasterization_state: Some(RasterizationState {
                rasterizer_discard_enable: true,
                ..Default::default()
            }),
            dynamic_state: DynamicState::Viewport.into(),
        );
        assert!(validate(&device, &discarding, &tracker).is_empty());
    }

    #[test]
    fn color_write_enable_count() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            color_blend_state: Some(ColorBlendState::with_attachment_states(
                3,
                ColorBlendAttachmentState::default(),
            )),
            dynamic_state: DynamicState::ColorWriteEnable.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_color_write_enable(2);

        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-attachmentCount-07750");

        tracker.record_color_write_enable(3);
        assert!(validate(&device, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn topology_class() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            input_assembly_state: Some(InputAssemblyState {
                topology: PrimitiveTopology::TriangleList,
                ..Default::default()
            }),
            dynamic_state: DynamicState::PrimitiveTopology.into(),
        );
        let mut tracker = DynamicStateTracker::new();

        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::TRIANGLE_FAN);
        assert!(validate(&device, &pipeline, &tracker).is_empty());

        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::POINT_LIST);
        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].vuid(),
            "VUID-vkCmdDraw-dynamicPrimitiveTopologyUnrestricted-07500",
        );

        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::from_raw(1000));
        assert_eq!(validate(&device, &pipeline, &tracker).len(), 1);

        let unrestricted = device!(
            api_version: Version::V1_3,
            properties: DeviceProperties {
                dynamic_primitive_topology_unrestricted: Some(true),
                ..Default::default()
            },
        );
        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::POINT_LIST);
        assert!(validate(&unrestricted, &pipeline, &tracker).is_empty());
    }

    #[test]
    fn tessellation_needs_patch_list() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            input_assembly_state: Some(InputAssemblyState {
                topology: PrimitiveTopology::PatchList,
                ..Default::default()
            }),
            tessellation_state: Some(TessellationState::default()),
            dynamic_state: DynamicState::PrimitiveTopology.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::PATCH_LIST);
        assert!(validate(&device, &pipeline, &tracker).is_empty());

        // Both the class and the tessellation rule are broken.
        tracker.record_primitive_topology(ash::vk::PrimitiveTopology::TRIANGLE_LIST);
        let violations = validate(&device, &pipeline, &tracker);
        let vuids: Vec<_> = violations.iter().map(Violation::vuid).collect();
        assert_eq!(
            vuids,
            [
                "VUID-vkCmdDraw-dynamicPrimitiveTopologyUnrestricted-07500",
                "VUID-vkCmdDraw-primitiveTopology-10286",
            ],
        );
    }

    #[test]
    fn primitive_restart_with_list_topology() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            input_assembly_state: Some(InputAssemblyState {
                topology: PrimitiveTopology::TriangleList,
                ..Default::default()
            }),
            dynamic_state: DynamicState::PrimitiveRestartEnable.into(),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record_enable(DynamicState::PrimitiveRestartEnable, false);
        assert!(validate(&device, &pipeline, &tracker).is_empty());

        tracker.record_enable(DynamicState::PrimitiveRestartEnable, true);
        let violations = validate(&device, &pipeline, &tracker);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-09637");
        assert!(!violations[0].error.requires_one_of.is_empty());
    }

    #[test]
    fn all_violations_are_reported() {
        let device = full_device();
        let pipeline = pipeline!(
            device,
            1,
            rasterization_state: Some(RasterizationState::default()),
            viewport_state: Some(ViewportState::default()),
            dynamic_state: DynamicStates::empty()
                .with(DynamicState::CullMode)
                .with(DynamicState::FrontFace)
                .with(DynamicState::Viewport),
        );
        let mut tracker = DynamicStateTracker::new();
        tracker.record(DynamicState::BlendConstants);

        let violations = validate(&device, &pipeline, &tracker);
        let vuids: Vec<_> = violations.iter().map(Violation::vuid).collect();
        assert_eq!(
            vuids,
            [
                "VUID-vkCmdDraw-None-07840",
                "VUID-vkCmdDraw-None-07841",
                "VUID-vkCmdDraw-None-08608",
                "VUID-vkCmdDraw-None-07831",
            ],
        );
    }
}
