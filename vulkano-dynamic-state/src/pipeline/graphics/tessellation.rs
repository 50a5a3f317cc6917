//! Subdivides primitives into smaller primitives.

use crate::{
    device::Device,
    pipeline::{DynamicState, DynamicStates},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};

/// The state in a graphics pipeline describing the tessellation shader execution of a graphics
/// pipeline.
///
/// A pipeline with this state draws patches, so the input assembly topology must be
/// [`PrimitiveTopology::PatchList`](super::input_assembly::PrimitiveTopology::PatchList).
#[derive(Clone, Copy, Debug)]
pub struct TessellationState {
    /// The number of patch control points to use.
    ///
    /// If [`DynamicState::PatchControlPoints`] is used, this value is ignored.
    ///
    /// The default value is 3.
    pub patch_control_points: u32,

    pub _ne: crate::NonExhaustive,
}

impl Default for TessellationState {
    #[inline]
    fn default() -> Self {
        Self {
            patch_control_points: 3,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl TessellationState {
    pub(crate) fn validate(
        &self,
        device: &Device,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let &Self {
            patch_control_points,
            _ne: _,
        } = self;

        if !device.enabled_features().tessellation_shader {
            return Err(Box::new(ValidationError {
                problem: "the pipeline has a tessellation state".into(),
                requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                    "tessellation_shader",
                )])]),
                vuids: &["VUID-VkPipelineShaderStageCreateInfo-stage-00705"],
                ..Default::default()
            }));
        }

        if !dynamic_state.contains_enum(DynamicState::PatchControlPoints)
            && !(1..=32).contains(&patch_control_points)
        {
            return Err(Box::new(ValidationError {
                context: "patch_control_points".into(),
                problem: "is not between 1 and 32 inclusive".into(),
                vuids: &[
                    "VUID-VkPipelineTessellationStateCreateInfo-patchControlPoints-01214",
                ],
                ..Default::default()
            }));
        }

        Ok(())
    }
}
