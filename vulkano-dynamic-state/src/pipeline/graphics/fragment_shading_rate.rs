use crate::{
    device::Device,
    pipeline::{DynamicState, DynamicStates},
    Requires, RequiresAllOf, RequiresOneOf, ValidationError,
};

/// The state in a graphics pipeline describing the fragment shading rate.
#[derive(Clone, Debug)]
pub struct FragmentShadingRateState {
    /// The width and height of the area covered by each fragment.
    ///
    /// The default value is `[1, 1]`.
    pub fragment_size: [u32; 2],

    pub _ne: crate::NonExhaustive,
}

impl Default for FragmentShadingRateState {
    #[inline]
    fn default() -> Self {
        Self {
            fragment_size: [1, 1],
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl FragmentShadingRateState {
    pub(crate) fn validate(
        &self,
        device: &Device,
        dynamic_state: DynamicStates,
    ) -> Result<(), Box<ValidationError>> {
        let &Self {
            fragment_size,
            _ne: _,
        } = self;

        // Supplied by `vkCmdSetFragmentShadingRateKHR` instead.
        if dynamic_state.contains_enum(DynamicState::FragmentShadingRate) {
            return Ok(());
        }

        const AXIS_VUIDS: [&[&str]; 2] = [
            &[
                "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04494",
                "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04496",
                "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04498",
            ],
            &[
                "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04495",
                "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04497",
                "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04499",
            ],
        ];

        for (axis, (size, vuids)) in fragment_size.into_iter().zip(AXIS_VUIDS).enumerate() {
            if !matches!(size, 1 | 2 | 4) {
                return Err(Box::new(ValidationError {
                    context: format!("fragment_size[{}]", axis).into(),
                    problem: "is not 1, 2 or 4".into(),
                    vuids,
                    ..Default::default()
                }));
            }
        }

        if fragment_size != [1, 1] && !device.enabled_features().pipeline_fragment_shading_rate {
            return Err(Box::new(ValidationError {
                context: "fragment_size".into(),
                problem: "is not `[1, 1]`".into(),
                requires_one_of: RequiresOneOf(&[RequiresAllOf(&[Requires::DeviceFeature(
                    "pipeline_fragment_shading_rate",
                )])]),
                vuids: &["VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04500"],
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FragmentShadingRateState;
    use crate::pipeline::{DynamicState, DynamicStates};

    #[test]
    fn fragment_size() {
        let state = FragmentShadingRateState {
            fragment_size: [3, 1],
            ..Default::default()
        };
        let err = state
            .validate(&*device!(), DynamicStates::empty())
            .unwrap_err();
        assert_eq!(
            err.vuids[0],
            "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04494",
        );

        assert!(state
            .validate(&*device!(), DynamicState::FragmentShadingRate.into())
            .is_ok());

        let state = FragmentShadingRateState {
            fragment_size: [1, 4],
            ..Default::default()
        };
        let err = state
            .validate(&*device!(), DynamicStates::empty())
            .unwrap_err();
        assert_eq!(
            err.vuids[0],
            "VUID-VkGraphicsPipelineCreateInfo-pDynamicState-04500",
        );
    }
}
