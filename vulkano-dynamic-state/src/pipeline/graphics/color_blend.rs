//! Defines how the color output of the fragment shader is written to the attachment.
//!
//! There are two kinds of color attachments for the purpose of blending: those with a
//! floating-point or normalized format, which can be blended, and those with an integer format,
//! which can only be combined with a logic operation. Only the first kind can reference the
//! blend constants.

use crate::{
    device::Device,
    macros::vulkan_enum,
    pipeline::{DynamicState, DynamicStates},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};

/// Describes how the color output of the fragment shader is written to the attachment.
#[derive(Clone, Debug)]
pub struct ColorBlendState {
    /// Sets the blend and output state for each color attachment. The number of elements must
    /// match the number of color attachments in the subpass.
    ///
    /// The default value is empty.
    pub attachments: Vec<ColorBlendAttachmentState>,

    pub _ne: crate::NonExhaustive,
}

impl Default for ColorBlendState {
    #[inline]
    fn default() -> Self {
        Self {
            attachments: Vec::new(),
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl ColorBlendState {
    /// Returns a `ColorBlendState` with `count` duplicates of `attachment_state`.
    #[inline]
    pub fn with_attachment_states(
        count: u32,
        attachment_state: ColorBlendAttachmentState,
    ) -> Self {
        Self {
            attachments: std::iter::repeat(attachment_state)
                .take(count as usize)
                .collect(),
            ..Default::default()
        }
    }

    /// Returns whether at least one enabled blend equation reads the blend constants.
    ///
    /// If [`DynamicState::ColorBlendEnable`] or [`DynamicState::ColorBlendEquation`] is dynamic,
    /// the pipeline cannot know, and this returns `true`.
    pub fn uses_blend_constants(&self, dynamic_state: DynamicStates) -> bool {
        if dynamic_state.contains_enum(DynamicState::ColorBlendEnable)
            || dynamic_state.contains_enum(DynamicState::ColorBlendEquation)
        {
            return !self.attachments.is_empty();
        }

        self.attachments
            .iter()
            .filter_map(|attachment| attachment.blend.as_ref())
            .any(AttachmentBlend::uses_blend_constants)
    }

    pub(crate) fn validate(
        &self,
        device: &Device,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let &Self {
            ref attachments,
            _ne: _,
        } = self;

        if let Some(max_color_attachments) = device.properties().max_color_attachments {
            if attachments.len() > max_color_attachments as usize {
                return Err(Box::new(ValidationError {
                    context: "attachments".into(),
                    problem: "the length exceeds the `max_color_attachments` limit".into(),
                    vuids: &["VUID-VkSubpassDescription-colorAttachmentCount-00845"],
                    ..Default::default()
                }));
            }
        }

        if !dynamic_state.contains_enum(DynamicState::ColorWriteEnable) {
            for (index, attachment) in attachments.iter().enumerate() {
                if !attachment.color_write_enable
                    && !device.enabled_features().color_write_enable
                {
                    return Err(Box::new(ValidationError {
                        context: format!("attachments[{}].color_write_enable", index).into(),
                        problem: "is `false`".into(),
                        requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                            Requires::DeviceFeature("color_write_enable"),
                        ])]),
                        vuids: &["VUID-VkPipelineColorWriteCreateInfoEXT-pAttachments-04801"],
                    }));
                }
            }
        }

        Ok(())
    }
}

/// Describes how a framebuffer color attachment is handled in the pipeline during the color
/// blend stage.
#[derive(Clone, Debug)]
pub struct ColorBlendAttachmentState {
    /// The blend parameters for the attachment.
    ///
    /// If set to `None`, blending is disabled, and all incoming pixels will be used directly.
    ///
    /// The default value is `None`.
    pub blend: Option<AttachmentBlend>,

    /// Sets whether anything at all is written to the attachment.
    ///
    /// The default value is `true`.
    pub color_write_enable: bool,
}

impl Default for ColorBlendAttachmentState {
    #[inline]
    fn default() -> Self {
        Self {
            blend: None,
            color_write_enable: true,
        }
    }
}

/// Describes how the blending system should behave for an attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttachmentBlend {
    /// The operation to apply to the source color component before applying `color_op`.
    pub src_color_blend_factor: BlendFactor,

    /// The operation to apply to the destination color component before applying `color_op`.
    pub dst_color_blend_factor: BlendFactor,

    /// The operation to apply between the color components of the source and destination
    /// pixels, to produce the final pixel value.
    pub color_blend_op: BlendOp,

    /// The operation to apply to the source alpha component before applying `alpha_op`.
    pub src_alpha_blend_factor: BlendFactor,

    /// The operation to apply to the destination alpha component before applying `alpha_op`.
    pub dst_alpha_blend_factor: BlendFactor,

    /// The operation to apply between the alpha component of the source and destination pixels,
    /// to produce the final pixel value.
    pub alpha_blend_op: BlendOp,
}

impl Default for AttachmentBlend {
    #[inline]
    fn default() -> Self {
        Self::ignore_source()
    }
}

impl AttachmentBlend {
    /// Builds an `AttachmentBlend` where the output of the fragment shader is ignored and the
    /// destination is untouched.
    #[inline]
    pub fn ignore_source() -> Self {
        Self {
            src_color_blend_factor: BlendFactor::Zero,
            dst_color_blend_factor: BlendFactor::DstColor,
            color_blend_op: BlendOp::Add,
            src_alpha_blend_factor: BlendFactor::Zero,
            dst_alpha_blend_factor: BlendFactor::DstColor,
            alpha_blend_op: BlendOp::Add,
        }
    }

    /// Builds an `AttachmentBlend` where the output will be merged with the existing value
    /// based on the alpha of the source.
    #[inline]
    pub fn alpha() -> Self {
        Self {
            src_color_blend_factor: BlendFactor::SrcAlpha,
            dst_color_blend_factor: BlendFactor::OneMinusSrcAlpha,
            color_blend_op: BlendOp::Add,
            src_alpha_blend_factor: BlendFactor::SrcAlpha,
            dst_alpha_blend_factor: BlendFactor::OneMinusSrcAlpha,
            alpha_blend_op: BlendOp::Add,
        }
    }

    /// Returns whether any of the four blend factors reads the blend constants.
    #[inline]
    pub fn uses_blend_constants(&self) -> bool {
        [
            self.src_color_blend_factor,
            self.dst_color_blend_factor,
            self.src_alpha_blend_factor,
            self.dst_alpha_blend_factor,
        ]
        .into_iter()
        .any(BlendFactor::is_constant)
    }
}

vulkan_enum! {
    /// The operation that takes `source` (output from the fragment shader), `destination` (value
    /// currently in the framebuffer attachment) and `constant` (the blend constants), and
    /// produces a factor to apply before blending.
    BlendFactor impl {
        /// Returns whether this factor reads the blend constants.
        #[inline]
        pub fn is_constant(self) -> bool {
            matches!(
                self,
                Self::ConstantColor
                    | Self::OneMinusConstantColor
                    | Self::ConstantAlpha
                    | Self::OneMinusConstantAlpha
            )
        }
    }
    = BlendFactor(i32);

    Zero = ZERO,
    One = ONE,
    SrcColor = SRC_COLOR,
    OneMinusSrcColor = ONE_MINUS_SRC_COLOR,
    DstColor = DST_COLOR,
    OneMinusDstColor = ONE_MINUS_DST_COLOR,
    SrcAlpha = SRC_ALPHA,
    OneMinusSrcAlpha = ONE_MINUS_SRC_ALPHA,
    DstAlpha = DST_ALPHA,
    OneMinusDstAlpha = ONE_MINUS_DST_ALPHA,
    ConstantColor = CONSTANT_COLOR,
    OneMinusConstantColor = ONE_MINUS_CONSTANT_COLOR,
    ConstantAlpha = CONSTANT_ALPHA,
    OneMinusConstantAlpha = ONE_MINUS_CONSTANT_ALPHA,
    SrcAlphaSaturate = SRC_ALPHA_SATURATE,
}

vulkan_enum! {
    /// How the weighted source and destination values are combined.
    BlendOp = BlendOp(i32);

    Add = ADD,
    Subtract = SUBTRACT,
    ReverseSubtract = REVERSE_SUBTRACT,
    Min = MIN,
    Max = MAX,
}
