use super::CommandBufferInheritance;
use crate::{
    device::Device,
    pipeline::{graphics::GraphicsPipelineState, DynamicState},
    report::{ObjectRef, Reporter, Violation},
    RequiresOneOf, ValidationError,
};
use smallvec::{smallvec, SmallVec};

/// Checks a state-setting command before it is recorded.
///
/// The gate only reports. Recording the state is up to the caller, and happens whether the gate
/// found a problem or not.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedStateGate<'a> {
    device: &'a Device,
    command_buffer: ash::vk::CommandBuffer,
    inheritance: Option<&'a CommandBufferInheritance>,
    pipeline: Option<&'a GraphicsPipelineState>,
}

impl<'a> ExtendedStateGate<'a> {
    /// Creates a gate for commands recorded into `command_buffer` on `device`.
    #[inline]
    pub fn new(device: &'a Device, command_buffer: ash::vk::CommandBuffer) -> Self {
        ExtendedStateGate {
            device,
            command_buffer,
            inheritance: None,
            pipeline: None,
        }
    }

    /// Sets the state that the command buffer inherits.
    #[inline]
    pub fn inheritance(mut self, inheritance: Option<&'a CommandBufferInheritance>) -> Self {
        self.inheritance = inheritance;
        self
    }

    /// Sets the currently bound graphics pipeline.
    #[inline]
    pub fn pipeline(mut self, pipeline: Option<&'a GraphicsPipelineState>) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Reports one violation for `command` if `enabled` is `false`.
    ///
    /// `requires_one_of` names what would have to be enabled, and `vuids` identifies the rule.
    /// Returns whether the check passed.
    pub fn check_feature(
        &self,
        command: &'static str,
        enabled: bool,
        requires_one_of: RequiresOneOf,
        vuids: &'static [&'static str],
        reporter: &mut dyn Reporter,
    ) -> bool {
        if enabled {
            return true;
        }

        self.report(
            command,
            Box::new(ValidationError {
                problem: "the command was recorded".into(),
                requires_one_of,
                vuids,
                ..Default::default()
            }),
            false,
            reporter,
        );

        false
    }

    /// Runs every check that applies to setting `state`: whether the device supports setting it,
    /// whether it is inherited, and whether the bound pipeline bakes it in.
    ///
    /// Every failed check is reported separately. Returns whether all checks passed.
    pub fn check_state(&self, state: DynamicState, reporter: &mut dyn Reporter) -> bool {
        let command = state.set_command();
        let supported = state.is_supported_by(
            self.device.api_version(),
            self.device.enabled_features(),
            self.device.enabled_extensions(),
        );

        let mut passed = self.check_feature(
            command,
            supported,
            state.requires_one_of(),
            state.set_command_vuids(),
            reporter,
        );

        if let Err(err) = self.validate_not_inherited(state) {
            self.report(command, err, false, reporter);
            passed = false;
        }

        if let Err(err) = self.validate_not_static(state) {
            self.report(command, err, true, reporter);
            passed = false;
        }

        passed
    }

    fn validate_not_inherited(&self, state: DynamicState) -> Result<(), Box<ValidationError>> {
        if !self
            .inheritance
            .is_some_and(|inheritance| inheritance.viewport_scissor_2d)
        {
            return Ok(());
        }

        let vuids: &'static [&'static str] = match state {
            DynamicState::Viewport => &["VUID-vkCmdSetViewport-commandBuffer-04821"],
            DynamicState::Scissor => &["VUID-vkCmdSetScissor-viewportScissor2D-04789"],
            DynamicState::ViewportWithCount => {
                &["VUID-vkCmdSetViewportWithCount-commandBuffer-04819"]
            }
            DynamicState::ScissorWithCount => {
                &["VUID-vkCmdSetScissorWithCount-commandBuffer-04820"]
            }
            _ => return Ok(()),
        };

        Err(Box::new(ValidationError {
            context: "inheritance.viewport_scissor_2d".into(),
            problem: format!(
                "is `true`, but the `{}` dynamic state was set on the command buffer",
                state.name(),
            )
            .into(),
            vuids,
            ..Default::default()
        }))
    }

    fn validate_not_static(&self, state: DynamicState) -> Result<(), Box<ValidationError>> {
        // VUID-vkCmdDraw-None-02859
        if self
            .pipeline
            .is_some_and(|pipeline| pipeline.static_state().contains_enum(state))
        {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "the currently bound graphics pipeline already contains the `{}` state \
                    internally",
                    state.name(),
                )
                .into(),
                vuids: &["VUID-vkCmdDraw-None-02859"],
                ..Default::default()
            }));
        }

        Ok(())
    }

    fn report(
        &self,
        command: &'static str,
        error: Box<ValidationError>,
        with_pipeline: bool,
        reporter: &mut dyn Reporter,
    ) {
        let mut objects: SmallVec<[ObjectRef; 2]> =
            smallvec![ObjectRef::CommandBuffer(self.command_buffer)];

        if with_pipeline {
            if let Some(pipeline) = self.pipeline {
                objects.push(ObjectRef::Pipeline(pipeline.handle()));
            }
        }

        reporter.report(Violation {
            command,
            error,
            objects,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::ExtendedStateGate;
    use crate::{
        command_buffer::CommandBufferInheritance,
        device::{DeviceExtensions, DeviceFeatures},
        pipeline::{graphics::rasterization::RasterizationState, DynamicState},
        report::{ObjectRef, Violation},
        RequiresOneOf, Version,
    };
    use ash::vk::Handle;

    fn command_buffer() -> ash::vk::CommandBuffer {
        ash::vk::CommandBuffer::from_raw(0x100)
    }

    #[test]
    fn disabled_feature() {
        let device = device!();
        let gate = ExtendedStateGate::new(&device, command_buffer());
        let mut violations: Vec<Violation> = Vec::new();

        assert!(gate.check_feature(
            "vkCmdSetLineWidth",
            true,
            RequiresOneOf::default(),
            &[],
            &mut violations,
        ));
        assert!(violations.is_empty());

        assert!(!gate.check_state(DynamicState::CullMode, &mut violations));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].command, "vkCmdSetCullMode");
        assert_eq!(violations[0].vuid(), "VUID-vkCmdSetCullMode-None-08971");
        assert!(!violations[0].error.requires_one_of.is_empty());
        assert_eq!(
            violations[0].objects.as_slice(),
            [ObjectRef::CommandBuffer(command_buffer())],
        );
    }

    #[test]
    fn supported_state() {
        let device = device!(
            api_version: Version::V1_0,
            enabled_extensions: DeviceExtensions {
                ext_extended_dynamic_state: true,
                ..DeviceExtensions::empty()
            },
            enabled_features: DeviceFeatures {
                extended_dynamic_state: true,
                ..DeviceFeatures::empty()
            },
        );
        let gate = ExtendedStateGate::new(&device, command_buffer());
        let mut violations: Vec<Violation> = Vec::new();

        assert!(gate.check_state(DynamicState::CullMode, &mut violations));
        assert!(gate.check_state(DynamicState::LineWidth, &mut violations));
        assert!(violations.is_empty());
    }

    #[test]
    fn inherited_viewport_scissor() {
        let device = device!();
        let inheritance = CommandBufferInheritance {
            viewport_scissor_2d: true,
            ..Default::default()
        };
        let gate = ExtendedStateGate::new(&device, command_buffer()).inheritance(Some(&inheritance));
        let mut violations: Vec<Violation> = Vec::new();

        assert!(!gate.check_state(DynamicState::Scissor, &mut violations));
        assert!(gate.check_state(DynamicState::LineWidth, &mut violations));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].vuid(),
            "VUID-vkCmdSetScissor-viewportScissor2D-04789",
        );
    }

    #[test]
    fn inherited_and_unsupported_are_reported_separately() {
        let device = device!();
        let inheritance = CommandBufferInheritance {
            viewport_scissor_2d: true,
            ..Default::default()
        };
        let gate = ExtendedStateGate::new(&device, command_buffer()).inheritance(Some(&inheritance));
        let mut violations: Vec<Violation> = Vec::new();

        assert!(!gate.check_state(DynamicState::ViewportWithCount, &mut violations));
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[1].vuid(),
            "VUID-vkCmdSetViewportWithCount-commandBuffer-04819",
        );
    }

    #[test]
    fn static_in_bound_pipeline() {
        let device = device!();
        let pipeline = pipeline!(
            device,
            0x200,
            rasterization_state: Some(RasterizationState::default()),
        );
        let gate = ExtendedStateGate::new(&device, command_buffer()).pipeline(Some(&pipeline));
        let mut violations: Vec<Violation> = Vec::new();

        assert!(!gate.check_state(DynamicState::LineWidth, &mut violations));
        assert!(gate.check_state(DynamicState::BlendConstants, &mut violations));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].vuid(), "VUID-vkCmdDraw-None-02859");
        assert_eq!(
            violations[0].objects[1],
            ObjectRef::Pipeline(pipeline.handle()),
        );
    }
}
