//! Configures the operation of the depth, stencil and depth bounds tests.
//!
//! Each test is enabled by giving it a value. When a test is enabled, the states that configure
//! it must either be baked into the pipeline or set by commands before drawing. When a test is
//! disabled, the states that configure it are not needed at all.

use crate::{
    macros::vulkan_enum,
    pipeline::{DynamicState, DynamicStates},
    ValidationError,
};
use std::ops::RangeInclusive;

/// The state in a graphics pipeline describing how the depth, depth bounds and stencil tests
/// should behave.
#[derive(Clone, Debug)]
pub struct DepthStencilState {
    /// The state of the depth test.
    ///
    /// If set to `None`, the depth test is disabled, all fragments will pass and no depth writes
    /// are performed.
    ///
    /// The default value is `None`.
    pub depth: Option<DepthState>,

    /// The minimum and maximum depth values to use for the depth bounds test.
    /// Fragments with values outside this range are discarded.
    ///
    /// If set to `None`, the depth bounds test is disabled, all fragments will pass.
    ///
    /// The default value is `None`.
    pub depth_bounds: Option<RangeInclusive<f32>>,

    /// The state of the stencil test.
    ///
    /// If set to `None`, the stencil test is disabled, all fragments will pass and no stencil
    /// writes are performed.
    ///
    /// The default value is `None`.
    pub stencil: Option<StencilState>,

    pub _ne: crate::NonExhaustive,
}

impl Default for DepthStencilState {
    #[inline]
    fn default() -> Self {
        Self {
            depth: None,
            depth_bounds: None,
            stencil: None,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl DepthStencilState {
    /// Creates a `DepthStencilState` with a `Less` depth test, `depth_write` set to true, and
    /// other tests disabled.
    #[inline]
    pub fn simple_depth_test() -> Self {
        Self {
            depth: Some(DepthState {
                write_enable: true,
                compare_op: CompareOp::Less,
            }),
            ..Default::default()
        }
    }

    /// Returns whether the depth test is enabled.
    #[inline]
    pub fn depth_test_enable(&self) -> bool {
        self.depth.is_some()
    }

    /// Returns whether the depth bounds test is enabled.
    #[inline]
    pub fn depth_bounds_test_enable(&self) -> bool {
        self.depth_bounds.is_some()
    }

    /// Returns whether the stencil test is enabled.
    #[inline]
    pub fn stencil_test_enable(&self) -> bool {
        self.stencil.is_some()
    }

    pub(crate) fn validate(
        &self,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let Self {
            depth: _,
            depth_bounds,
            stencil: _,
            _ne: _,
        } = self;

        if let Some(depth_bounds) = depth_bounds {
            if !dynamic_state.contains_enum(DynamicState::DepthBounds) {
                if !(0.0..=1.0).contains(depth_bounds.start()) {
                    return Err(Box::new(ValidationError {
                        context: "depth_bounds.start".into(),
                        problem: "is not between 0.0 and 1.0 inclusive".into(),
                        vuids: &["VUID-VkGraphicsPipelineCreateInfo-pDynamicStates-02510"],
                        ..Default::default()
                    }));
                }

                if !(0.0..=1.0).contains(depth_bounds.end()) {
                    return Err(Box::new(ValidationError {
                        context: "depth_bounds.end".into(),
                        problem: "is not between 0.0 and 1.0 inclusive".into(),
                        vuids: &["VUID-VkGraphicsPipelineCreateInfo-pDynamicStates-02510"],
                        ..Default::default()
                    }));
                }
            }
        }

        Ok(())
    }
}

/// The state in a graphics pipeline describing how the depth test should behave when enabled.
#[derive(Clone, Copy, Debug)]
pub struct DepthState {
    /// Sets whether the value in the depth buffer will be updated when the depth test succeeds.
    ///
    /// The default value is `false`.
    pub write_enable: bool,

    /// Comparison operation to use between the depth value of each incoming fragment and the
    /// depth value currently in the depth buffer.
    ///
    /// The default value is [`CompareOp::Always`].
    pub compare_op: CompareOp,
}

impl Default for DepthState {
    #[inline]
    fn default() -> Self {
        Self {
            write_enable: false,
            compare_op: CompareOp::Always,
        }
    }
}

/// The state in a graphics pipeline describing how the stencil test should behave when enabled.
///
/// The stencil states are made dynamic for both faces at once, but the commands that set them
/// can target a single face.
#[derive(Clone, Debug, Default)]
pub struct StencilState {
    /// The values for points, lines and front-facing triangles.
    pub front: StencilFaceState,

    /// The values for back-facing triangles.
    pub back: StencilFaceState,
}

/// The stencil values of a single face.
#[derive(Clone, Copy, Debug)]
pub struct StencilFaceState {
    /// The bits that take part in the comparison.
    ///
    /// The default value is `u32::MAX`.
    pub compare_mask: u32,

    /// The bits that the stencil test may write.
    ///
    /// The default value is `u32::MAX`.
    pub write_mask: u32,

    /// The value that the stored stencil value is compared with.
    ///
    /// The default value is `u32::MAX`.
    pub reference: u32,
}

impl Default for StencilFaceState {
    #[inline]
    fn default() -> Self {
        Self {
            compare_mask: u32::MAX,
            write_mask: u32::MAX,
            reference: u32::MAX,
        }
    }
}

vulkan_enum! {
    /// Specifies a face for stencil operations.
    StencilFaces impl {
        /// Returns whether the front face is included.
        #[inline]
        pub fn front(self) -> bool {
            matches!(self, Self::Front | Self::FrontAndBack)
        }

        /// Returns whether the back face is included.
        #[inline]
        pub fn back(self) -> bool {
            matches!(self, Self::Back | Self::FrontAndBack)
        }
    }
    = StencilFaceFlags(u32);

    Front = FRONT,
    Back = BACK,
    FrontAndBack = FRONT_AND_BACK,
}

vulkan_enum! {
    /// How a fragment's value is compared with the stored value in the depth test.
    CompareOp = CompareOp(i32);

    Never = NEVER,
    Less = LESS,
    Equal = EQUAL,
    LessOrEqual = LESS_OR_EQUAL,
    Greater = GREATER,
    NotEqual = NOT_EQUAL,
    GreaterOrEqual = GREATER_OR_EQUAL,
    Always = ALWAYS,
}
