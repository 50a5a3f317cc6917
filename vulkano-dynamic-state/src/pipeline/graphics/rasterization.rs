//! Configures how primitives should be converted into collections of fragments.

use crate::{
    device::Device,
    pipeline::{DynamicState, DynamicStates},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};

/// The state in a graphics pipeline describing how the rasterization stage should behave.
#[derive(Clone, Debug)]
pub struct RasterizationState {
    /// If true, all fragments are discarded before rasterization, and the viewport and scissor
    /// state is not used.
    ///
    /// The default value is `false`.
    pub rasterizer_discard_enable: bool,

    /// Sets how to modify depth values in the rasterization stage.
    ///
    /// If set to `None`, depth biasing is disabled. If [`DynamicState::DepthBias`] is dynamic,
    /// the factors in the value are ignored, but `Some` still enables depth bias.
    ///
    /// The default value is `None`.
    pub depth_bias: Option<DepthBiasState>,

    /// Width, in pixels, of lines when drawing lines.
    ///
    /// The default value is `1.0`.
    pub line_width: f32,

    /// The rasterization mode for lines.
    ///
    /// The default value is [`LineRasterizationMode::Default`].
    pub line_rasterization_mode: LineRasterizationMode,

    /// Enables and sets the parameters for line stippling.
    ///
    /// If [`DynamicState::LineStipple`] is dynamic, the values in the stipple are ignored, but
    /// `Some` still enables stippled lines.
    ///
    /// The default value is `None`.
    pub line_stipple: Option<LineStipple>,

    pub _ne: crate::NonExhaustive,
}

impl Default for RasterizationState {
    #[inline]
    fn default() -> Self {
        Self {
            rasterizer_discard_enable: false,
            depth_bias: None,
            line_width: 1.0,
            line_rasterization_mode: LineRasterizationMode::Default,
            line_stipple: None,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl RasterizationState {
    /// Returns whether depth bias is enabled.
    #[inline]
    pub fn depth_bias_enable(&self) -> bool {
        self.depth_bias.is_some()
    }

    /// Returns whether stippled lines are enabled.
    #[inline]
    pub fn stippled_line_enable(&self) -> bool {
        self.line_stipple.is_some()
    }

    pub(crate) fn validate(
        &self,
        device: &Device,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let &Self {
            rasterizer_discard_enable: _,
            depth_bias: _,
            line_width,
            line_rasterization_mode,
            ref line_stipple,
            _ne: _,
        } = self;

        if !dynamic_state.contains_enum(DynamicState::LineWidth) && !(line_width > 0.0) {
            return Err(Box::new(ValidationError {
                context: "line_width".into(),
                problem: "is not greater than 0.0".into(),
                ..Default::default()
            }));
        }

        if let Some(line_stipple) = line_stipple {
            let features = device.enabled_features();

            if !(device.enabled_extensions().ext_line_rasterization
                || device.enabled_extensions().khr_line_rasterization)
            {
                return Err(Box::new(ValidationError {
                    context: "line_stipple".into(),
                    problem: "is `Some`".into(),
                    requires_one_of: RequiresOneOf(&[
                        RequiresAllOf(&[Requires::DeviceExtension("ext_line_rasterization")]),
                        RequiresAllOf(&[Requires::DeviceExtension("khr_line_rasterization")]),
                    ]),
                    ..Default::default()
                }));
            }

            match line_rasterization_mode {
                LineRasterizationMode::Default => (),
                LineRasterizationMode::Rectangular => {
                    if !features.stippled_rectangular_lines {
                        return Err(Box::new(ValidationError {
                            problem: "`line_stipple` is `Some`, and \
                                `line_rasterization_mode` is \
                                `LineRasterizationMode::Rectangular`"
                                .into(),
                            requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                                Requires::DeviceFeature("stippled_rectangular_lines"),
                            ])]),
                            vuids: &["VUID-VkPipelineRasterizationLineStateCreateInfoKHR-stippledLineEnable-02771"],
                            ..Default::default()
                        }));
                    }
                }
                LineRasterizationMode::Bresenham => {
                    if !features.stippled_bresenham_lines {
                        return Err(Box::new(ValidationError {
                            problem: "`line_stipple` is `Some`, and \
                                `line_rasterization_mode` is \
                                `LineRasterizationMode::Bresenham`"
                                .into(),
                            requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                                Requires::DeviceFeature("stippled_bresenham_lines"),
                            ])]),
                            vuids: &["VUID-VkPipelineRasterizationLineStateCreateInfoKHR-stippledLineEnable-02772"],
                            ..Default::default()
                        }));
                    }
                }
                LineRasterizationMode::RectangularSmooth => {
                    if !features.stippled_smooth_lines {
                        return Err(Box::new(ValidationError {
                            problem: "`line_stipple` is `Some`, and \
                                `line_rasterization_mode` is \
                                `LineRasterizationMode::RectangularSmooth`"
                                .into(),
                            requires_one_of: RequiresOneOf(&[RequiresAllOf(&[
                                Requires::DeviceFeature("stippled_smooth_lines"),
                            ])]),
                            vuids: &["VUID-VkPipelineRasterizationLineStateCreateInfoKHR-stippledLineEnable-02773"],
                            ..Default::default()
                        }));
                    }
                }
            }

            if !dynamic_state.contains_enum(DynamicState::LineStipple)
                && !(1..=256).contains(&line_stipple.factor)
            {
                return Err(Box::new(ValidationError {
                    context: "line_stipple.factor".into(),
                    problem: "is not between 1 and 256 inclusive".into(),
                    vuids: &["VUID-VkPipelineRasterizationLineStateCreateInfoKHR-stippledLineEnable-02767"],
                    ..Default::default()
                }));
            }
        }

        Ok(())
    }
}

/// The values used for depth bias, when it is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthBiasState {
    /// Specifies a constant factor to be added to every depth value.
    pub constant_factor: f32,

    /// The maximum (or minimum) depth bias of a fragment.
    pub clamp: f32,

    /// A scalar factor applied to a fragment's slope in depth bias calculations.
    pub slope_factor: f32,
}

impl Default for DepthBiasState {
    #[inline]
    fn default() -> Self {
        Self {
            constant_factor: 1.0,
            clamp: 0.0,
            slope_factor: 1.0,
        }
    }
}

/// The parameters of line stippling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStipple {
    /// The repeat factor used in stippled line rasterization. Must be between 1 and 256
    /// inclusive.
    pub factor: u32,

    /// The bit pattern used in stippled line rasterization.
    pub pattern: u16,
}

/// The rasterization mode to use for lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineRasterizationMode {
    /// The implementation's default mode. Stippling needs no extra feature.
    #[default]
    Default,

    /// Needs `stippled_rectangular_lines` to be stippled.
    Rectangular,

    /// Needs `stippled_bresenham_lines` to be stippled.
    Bresenham,

    /// Needs `stippled_smooth_lines` to be stippled.
    RectangularSmooth,
}
