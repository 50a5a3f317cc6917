//! Generates multiple fragments per framebuffer pixel when rasterizing.

use crate::{
    device::Device,
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};

/// State of the multisampling.
#[derive(Clone, Copy, Debug)]
pub struct MultisampleState {
    /// The minimum fraction of samples that run the fragment shader separately, if sample
    /// shading is enabled.
    ///
    /// The default value is `None`.
    pub sample_shading: Option<f32>,

    /// Whether custom sample locations replace the standard ones.
    ///
    /// The default value is `false`.
    pub sample_locations_enable: bool,

    pub _ne: crate::NonExhaustive,
}

impl Default for MultisampleState {
    #[inline]
    fn default() -> Self {
        Self {
            sample_shading: None,
            sample_locations_enable: false,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl MultisampleState {
    pub(crate) fn validate(&self, device: &Device) -> Result<(), Box<ValidationError>> {
        let &Self {
            sample_shading,
            sample_locations_enable,
            _ne: _,
        } = self;

        if let Some(min_sample_shading) = sample_shading {
            if !(0.0..=1.0).contains(&min_sample_shading) {
                return Err(Box::new(ValidationError {
                    context: "sample_shading".into(),
                    problem: "is not between 0.0 and 1.0 inclusive".into(),
                    vuids: &["VUID-VkPipelineMultisampleStateCreateInfo-minSampleShading-00786"],
                    ..Default::default()
                }));
            }
        }

        if sample_locations_enable && !device.enabled_extensions().ext_sample_locations {
            return Err(Box::new(ValidationError {
                context: "sample_locations_enable".into(),
                problem: "is `true`".into(),
                requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceExtension(
                    "ext_sample_locations",
                )])]),
                ..Default::default()
            }));
        }

        Ok(())
    }
}
