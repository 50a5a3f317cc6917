//! The device configuration that state-setting commands and draw commands are validated against.
//!
//! The validator never talks to a driver. A [`Device`] only records the API version, the enabled
//! features and extensions, and the few device properties that change the outcome of a check.
//!
//! ```
//! use vulkano_dynamic_state::{
//!     device::{Device, DeviceCreateInfo, DeviceExtensions, DeviceFeatures},
//!     Version,
//! };
//!
//! let device = Device::new(DeviceCreateInfo {
//!     api_version: Version::V1_2,
//!     enabled_extensions: DeviceExtensions {
//!         ext_extended_dynamic_state: true,
//!         ..DeviceExtensions::empty()
//!     },
//!     enabled_features: DeviceFeatures {
//!         extended_dynamic_state: true,
//!         ..DeviceFeatures::empty()
//!     },
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert!(device.enabled_features().extended_dynamic_state);
//! ```

use crate::{
    macros::device_flags, NonExhaustive, Requires, RequiresAllOf, RequiresOneOf,
    ValidationError, Version,
};
use std::sync::Arc;

device_flags! {
    /// The device features that decide whether a state-setting command may be recorded, and
    /// whether some draw-time checks apply.
    DeviceFeatures;

    multi_viewport,
    tessellation_shader,
    geometry_shader,
    extended_dynamic_state,
    extended_dynamic_state2,
    extended_dynamic_state2_logic_op,
    extended_dynamic_state2_patch_control_points,
    extended_dynamic_state3_tessellation_domain_origin,
    extended_dynamic_state3_depth_clamp_enable,
    extended_dynamic_state3_polygon_mode,
    extended_dynamic_state3_rasterization_samples,
    extended_dynamic_state3_sample_mask,
    extended_dynamic_state3_alpha_to_coverage_enable,
    extended_dynamic_state3_alpha_to_one_enable,
    extended_dynamic_state3_logic_op_enable,
    extended_dynamic_state3_color_blend_enable,
    extended_dynamic_state3_color_blend_equation,
    extended_dynamic_state3_color_write_mask,
    extended_dynamic_state3_rasterization_stream,
    extended_dynamic_state3_conservative_rasterization_mode,
    extended_dynamic_state3_extra_primitive_overestimation_size,
    extended_dynamic_state3_depth_clip_enable,
    extended_dynamic_state3_sample_locations_enable,
    extended_dynamic_state3_color_blend_advanced,
    extended_dynamic_state3_provoking_vertex_mode,
    extended_dynamic_state3_line_rasterization_mode,
    extended_dynamic_state3_line_stipple_enable,
    extended_dynamic_state3_depth_clip_negative_one_to_one,
    extended_dynamic_state3_viewport_w_scaling_enable,
    extended_dynamic_state3_viewport_swizzle,
    extended_dynamic_state3_coverage_to_color_enable,
    extended_dynamic_state3_coverage_to_color_location,
    extended_dynamic_state3_coverage_modulation_mode,
    extended_dynamic_state3_coverage_modulation_table_enable,
    extended_dynamic_state3_coverage_modulation_table,
    extended_dynamic_state3_coverage_reduction_mode,
    extended_dynamic_state3_representative_fragment_test_enable,
    extended_dynamic_state3_shading_rate_image_enable,
    vertex_input_dynamic_state,
    color_write_enable,
    pipeline_fragment_shading_rate,
    attachment_feedback_loop_dynamic_state,
    shader_object,
    primitive_topology_list_restart,
    primitive_topology_patch_list_restart,
    exclusive_scissor,
    shading_rate_image,
    stippled_rectangular_lines,
    stippled_bresenham_lines,
    stippled_smooth_lines,
}

device_flags! {
    /// The device extensions that back dynamic states outside of core Vulkan.
    DeviceExtensions;

    ext_extended_dynamic_state,
    ext_extended_dynamic_state2,
    ext_extended_dynamic_state3,
    ext_vertex_input_dynamic_state,
    ext_color_write_enable,
    ext_attachment_feedback_loop_dynamic_state,
    ext_shader_object,
    ext_primitive_topology_list_restart,
    ext_discard_rectangles,
    ext_sample_locations,
    ext_line_rasterization,
    khr_line_rasterization,
    khr_fragment_shading_rate,
    khr_ray_tracing_pipeline,
    nv_clip_space_w_scaling,
    nv_shading_rate_image,
    nv_scissor_exclusive,
}

impl DeviceFeatures {
    /// Every feature that individually enables one of the states added by
    /// `VK_EXT_extended_dynamic_state3`.
    pub const EXTENDED_DYNAMIC_STATE3: Self = Self {
        extended_dynamic_state3_tessellation_domain_origin: true,
        extended_dynamic_state3_depth_clamp_enable: true,
        extended_dynamic_state3_polygon_mode: true,
        extended_dynamic_state3_rasterization_samples: true,
        extended_dynamic_state3_sample_mask: true,
        extended_dynamic_state3_alpha_to_coverage_enable: true,
        extended_dynamic_state3_alpha_to_one_enable: true,
        extended_dynamic_state3_logic_op_enable: true,
        extended_dynamic_state3_color_blend_enable: true,
        extended_dynamic_state3_color_blend_equation: true,
        extended_dynamic_state3_color_write_mask: true,
        extended_dynamic_state3_rasterization_stream: true,
        extended_dynamic_state3_conservative_rasterization_mode: true,
        extended_dynamic_state3_extra_primitive_overestimation_size: true,
        extended_dynamic_state3_depth_clip_enable: true,
        extended_dynamic_state3_sample_locations_enable: true,
        extended_dynamic_state3_color_blend_advanced: true,
        extended_dynamic_state3_provoking_vertex_mode: true,
        extended_dynamic_state3_line_rasterization_mode: true,
        extended_dynamic_state3_line_stipple_enable: true,
        extended_dynamic_state3_depth_clip_negative_one_to_one: true,
        extended_dynamic_state3_viewport_w_scaling_enable: true,
        extended_dynamic_state3_viewport_swizzle: true,
        extended_dynamic_state3_coverage_to_color_enable: true,
        extended_dynamic_state3_coverage_to_color_location: true,
        extended_dynamic_state3_coverage_modulation_mode: true,
        extended_dynamic_state3_coverage_modulation_table_enable: true,
        extended_dynamic_state3_coverage_modulation_table: true,
        extended_dynamic_state3_coverage_reduction_mode: true,
        extended_dynamic_state3_representative_fragment_test_enable: true,
        extended_dynamic_state3_shading_rate_image_enable: true,
        ..Self::empty()
    };
}

/// The device properties that change the outcome of a check.
///
/// A property that is `None` is treated as unknown, and checks that depend on it are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceProperties {
    /// Whether a dynamically set primitive topology may belong to a different topology class
    /// than the topology the pipeline was created with.
    pub dynamic_primitive_topology_unrestricted: Option<bool>,

    /// The number of viewports that the device supports.
    pub max_viewports: Option<u32>,

    /// The number of discard rectangles that the device supports.
    pub max_discard_rectangles: Option<u32>,

    /// The number of color attachments that a subpass can use.
    pub max_color_attachments: Option<u32>,

    pub _ne: NonExhaustive,
}

impl Default for DeviceProperties {
    #[inline]
    fn default() -> Self {
        Self {
            dynamic_primitive_topology_unrestricted: None,
            max_viewports: None,
            max_discard_rectangles: None,
            max_color_attachments: None,
            _ne: NonExhaustive(()),
        }
    }
}

/// Parameters to create a new `Device`.
#[derive(Clone, Debug)]
pub struct DeviceCreateInfo {
    /// The Vulkan API version that the device was created with.
    ///
    /// The default value is [`Version::V1_0`].
    pub api_version: Version,

    /// The features enabled on the device.
    ///
    /// The default value is [`DeviceFeatures::empty()`].
    pub enabled_features: DeviceFeatures,

    /// The extensions enabled on the device.
    ///
    /// The default value is [`DeviceExtensions::empty()`].
    pub enabled_extensions: DeviceExtensions,

    /// The properties of the device.
    ///
    /// The default value is [`DeviceProperties::default()`].
    pub properties: DeviceProperties,

    pub _ne: NonExhaustive,
}

impl Default for DeviceCreateInfo {
    #[inline]
    fn default() -> Self {
        Self {
            api_version: Version::V1_0,
            enabled_features: DeviceFeatures::empty(),
            enabled_extensions: DeviceExtensions::empty(),
            properties: DeviceProperties::default(),
            _ne: NonExhaustive(()),
        }
    }
}

impl DeviceCreateInfo {
    pub(crate) fn validate(&self) -> Result<(), Box<ValidationError>> {
        let &Self {
            api_version,
            ref enabled_features,
            ref enabled_extensions,
            properties: _,
            _ne: _,
        } = self;

        if api_version < Version::V1_0 {
            return Err(Box::new(ValidationError {
                context: "api_version".into(),
                problem: "is lower than 1.0".into(),
                ..Default::default()
            }));
        }

        let extension_dependencies: [(&'static str, bool, bool, RequiresOneOf); 11] = [
            (
                "extended_dynamic_state",
                enabled_features.extended_dynamic_state,
                enabled_extensions.ext_extended_dynamic_state,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_extended_dynamic_state",
                )])]),
            ),
            (
                "extended_dynamic_state2",
                enabled_features.extended_dynamic_state2
                    || enabled_features.extended_dynamic_state2_logic_op
                    || enabled_features.extended_dynamic_state2_patch_control_points,
                enabled_extensions.ext_extended_dynamic_state2,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_extended_dynamic_state2",
                )])]),
            ),
            (
                "extended_dynamic_state3",
                enabled_features.intersects(&DeviceFeatures::EXTENDED_DYNAMIC_STATE3),
                enabled_extensions.ext_extended_dynamic_state3,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_extended_dynamic_state3",
                )])]),
            ),
            (
                "vertex_input_dynamic_state",
                enabled_features.vertex_input_dynamic_state,
                enabled_extensions.ext_vertex_input_dynamic_state
                    || enabled_extensions.ext_shader_object,
                RequiresOneOf(&[
                    RequiresAllOf(&[Requires::DeviceExtension("ext_vertex_input_dynamic_state")]),
                    RequiresAllOf(&[Requires::DeviceExtension("ext_shader_object")]),
                ]),
            ),
            (
                "color_write_enable",
                enabled_features.color_write_enable,
                enabled_extensions.ext_color_write_enable,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_color_write_enable",
                )])]),
            ),
            (
                "attachment_feedback_loop_dynamic_state",
                enabled_features.attachment_feedback_loop_dynamic_state,
                enabled_extensions.ext_attachment_feedback_loop_dynamic_state,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_attachment_feedback_loop_dynamic_state",
                )])]),
            ),
            (
                "shader_object",
                enabled_features.shader_object,
                enabled_extensions.ext_shader_object,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_shader_object",
                )])]),
            ),
            (
                "primitive_topology_list_restart",
                enabled_features.primitive_topology_list_restart
                    || enabled_features.primitive_topology_patch_list_restart,
                enabled_extensions.ext_primitive_topology_list_restart,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_primitive_topology_list_restart",
                )])]),
            ),
            (
                "pipeline_fragment_shading_rate",
                enabled_features.pipeline_fragment_shading_rate,
                enabled_extensions.khr_fragment_shading_rate,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "khr_fragment_shading_rate",
                )])]),
            ),
            (
                "exclusive_scissor",
                enabled_features.exclusive_scissor,
                enabled_extensions.nv_scissor_exclusive,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "nv_scissor_exclusive",
                )])]),
            ),
            (
                "shading_rate_image",
                enabled_features.shading_rate_image,
                enabled_extensions.nv_shading_rate_image,
                RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "nv_shading_rate_image",
                )])]),
            ),
        ];

        for (feature_family, enabled, extension_enabled, requires_one_of) in
            extension_dependencies
        {
            if enabled && !extension_enabled {
                return Err(Box::new(ValidationError {
                    context: "enabled_features".into(),
                    problem: format!(
                        "contains a `{}` feature, but the extension that provides it is not \
                        enabled",
                        feature_family,
                    )
                    .into(),
                    requires_one_of,
                    ..Default::default()
                }));
            }
        }

        Ok(())
    }
}

/// The configuration of a logical device.
#[derive(Debug)]
pub struct Device {
    api_version: Version,
    enabled_features: DeviceFeatures,
    enabled_extensions: DeviceExtensions,
    properties: DeviceProperties,
}

impl Device {
    /// Creates a new `Device`.
    pub fn new(create_info: DeviceCreateInfo) -> Result<Arc<Device>, Box<ValidationError>> {
        create_info
            .validate()
            .map_err(|err| err.add_context("create_info"))?;

        let DeviceCreateInfo {
            api_version,
            enabled_features,
            enabled_extensions,
            properties,
            _ne: _,
        } = create_info;

        log::debug!(
            target: "vulkano_dynamic_state",
            "created device with API version {} and features {:?}",
            api_version,
            enabled_features,
        );

        Ok(Arc::new(Device {
            api_version,
            enabled_features,
            enabled_extensions,
            properties,
        }))
    }

    /// Returns the Vulkan API version that the device was created with.
    #[inline]
    pub fn api_version(&self) -> Version {
        self.api_version
    }

    /// Returns the features that are enabled on the device.
    #[inline]
    pub fn enabled_features(&self) -> &DeviceFeatures {
        &self.enabled_features
    }

    /// Returns the extensions that are enabled on the device.
    #[inline]
    pub fn enabled_extensions(&self) -> &DeviceExtensions {
        &self.enabled_extensions
    }

    /// Returns the properties of the device.
    #[inline]
    pub fn properties(&self) -> &DeviceProperties {
        &self.properties
    }
}
